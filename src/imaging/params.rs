//! Parameter types for image operations.
//!
//! These describe *what* to render, not *how*. The [`backend`](super::backend)
//! turns them into pixels, so a mock backend can stand in during tests without
//! changing the batch logic.
//!
//! - [`ResizeFilter`] — resampling filter, selectable from `iconsmith.toml`.
//! - [`ResizeParams`] — target edge length plus filter for one square icon.

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

/// Resampling filter used when scaling the reference image down (or up).
///
/// Serialized in kebab-case: `nearest`, `triangle`, `catmull-rom`,
/// `gaussian`, `lanczos3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeFilter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    #[default]
    Lanczos3,
}

impl ResizeFilter {
    pub fn filter_type(self) -> FilterType {
        match self {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Parameters for rendering one square icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeParams {
    /// Edge length in pixels; the output is `size`×`size`.
    pub size: u32,
    pub filter: ResizeFilter,
}
