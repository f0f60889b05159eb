//! # iconsmith
//!
//! Generates platform icon sets from a single square reference image.
//!
//! # Pipeline
//!
//! ```text
//! 1. Resolve   argv          →  Mode              (list, or generate a target)
//! 2. Load      image path    →  ReferenceImage    (decode, ≥ 1024, square)
//! 3. Generate  reference     →  <platform>/*.png  (one resize + PNG per size)
//! ```
//!
//! Each step fails in its own error type so the binary can tell the user
//! exactly which constraint was violated: a bad invocation prints usage help,
//! a rejected reference image stops before any directory is created, and a
//! single unwritable icon is reported without stopping the rest of the batch.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`platform`] | Platform identifiers and their fixed icon size tables |
//! | [`cli`] | clap argument surface and mode resolution |
//! | [`config`] | Optional `iconsmith.toml` (output root, resize filter) |
//! | [`imaging`] | Decode, validate, resize and PNG-encode via the `image` crate |
//! | [`generate`] | Batch writer with per-icon failure isolation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Static Size Tables
//!
//! Platforms are a closed enum and each maps to a `&'static [u32]`. There is
//! no registry to extend at runtime; adding a platform is a code change with
//! a test next to it.
//!
//! ## Single Pass, Single Thread
//!
//! Sizes are rendered one after another from the same decoded reference, in
//! table order, which is also the order progress lines are printed in.

pub mod cli;
pub mod config;
pub mod generate;
pub mod imaging;
pub mod output;
pub mod platform;
