//! High-level image operations.
//!
//! These combine the pure checks in [`validation`](super::validation) with
//! backend execution.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::{ResizeFilter, ResizeParams};
use super::validation::{FormatError, check_dimensions};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a reference image was rejected.
#[derive(Error, Debug)]
pub enum ReferenceError {
    #[error("Cannot load {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: BackendError,
    },
    #[error("Unsuitable reference image {path}: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: FormatError,
    },
}

/// A decoded reference image that passed validation.
#[derive(Debug)]
pub struct ReferenceImage<I> {
    pub image: I,
    pub dimensions: Dimensions,
}

/// Decode `path` and validate it: decodable, then large enough, then square.
pub fn load_reference<B: ImageBackend>(
    backend: &B,
    path: &Path,
) -> Result<ReferenceImage<B::Image>, ReferenceError> {
    let image = backend.decode(path).map_err(|source| ReferenceError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    let dimensions = backend.dimensions(&image);
    check_dimensions(dimensions).map_err(|source| ReferenceError::Format {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(ReferenceImage { image, dimensions })
}

/// Render one `size`×`size` icon from the reference as PNG bytes.
pub fn render_icon<B: ImageBackend>(
    backend: &B,
    reference: &ReferenceImage<B::Image>,
    size: u32,
    filter: ResizeFilter,
) -> Result<Vec<u8>, BackendError> {
    backend.resize_png(&reference.image, &ResizeParams { size, filter })
}
