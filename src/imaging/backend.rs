//! Image backend trait and shared types.
//!
//! The [`ImageBackend`] trait covers the three things the pipeline needs from
//! an imaging library: decode a file, report its dimensions, and render a
//! resized PNG. The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend).
//!
//! The decoded image is an associated type so that test backends can skip
//! pixel buffers entirely.

use super::params::ResizeParams;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Decode failed: {0}")]
    Decode(String),
    #[error("Encode failed: {0}")]
    Encode(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image processing backends.
pub trait ImageBackend {
    /// Decoded, in-memory image.
    type Image;

    /// Read and decode an image file.
    fn decode(&self, path: &Path) -> Result<Self::Image, BackendError>;

    fn dimensions(&self, image: &Self::Image) -> Dimensions;

    /// Scale `image` to a `size`×`size` square and encode it as PNG.
    fn resize_png(
        &self,
        image: &Self::Image,
        params: &ResizeParams,
    ) -> Result<Vec<u8>, BackendError>;
}
