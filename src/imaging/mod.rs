//! Image processing — pure Rust, no system libraries.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** | `image::ImageReader` (PNG, JPEG, TIFF, WebP) |
//! | **Validate** | [`validation::check_dimensions`] (≥ 1024, square) |
//! | **Resize → PNG** | `resize_exact` + PNG encoder |
//!
//! The module is split into:
//! - **Validation**: Pure dimension checks (unit testable)
//! - **Parameters**: Data structures describing a resize
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining validation + backend

pub mod backend;
pub mod operations;
mod params;
pub mod rust_backend;
pub mod validation;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use operations::{ReferenceError, ReferenceImage, load_reference, render_icon};
pub use params::{ResizeFilter, ResizeParams};
pub use rust_backend::RustBackend;
pub use validation::{FormatError, MIN_REFERENCE_SIZE};
