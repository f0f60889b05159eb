//! Reference image constraints.
//!
//! Pure checks on dimensions, run after a successful decode. The minimum-size
//! check comes before the squareness check, so `1023×1024` reports
//! [`FormatError::TooSmall`] rather than [`FormatError::NotSquare`].

use super::backend::Dimensions;
use thiserror::Error;

/// Smallest accepted edge for a reference image.
pub const MIN_REFERENCE_SIZE: u32 = 1024;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("image is {width}x{height}, both sides must be at least {min} pixels")]
    TooSmall { width: u32, height: u32, min: u32 },
    #[error("image is {width}x{height}, it must be square")]
    NotSquare { width: u32, height: u32 },
}

/// Check that a decoded image can serve as an icon reference.
pub fn check_dimensions(dims: Dimensions) -> Result<(), FormatError> {
    let Dimensions { width, height } = dims;
    if width < MIN_REFERENCE_SIZE || height < MIN_REFERENCE_SIZE {
        return Err(FormatError::TooSmall {
            width,
            height,
            min: MIN_REFERENCE_SIZE,
        });
    }
    if width != height {
        return Err(FormatError::NotSquare { width, height });
    }
    Ok(())
}
