//! Batch icon generation.
//!
//! Takes a validated [`ReferenceImage`] and writes one PNG per size of an
//! [`IconTarget`] into a directory named after the target:
//!
//! ```text
//! <output_root>/
//! └── desktop/
//!     ├── Icon-desktop-16x16.png
//!     ├── Icon-desktop-32x32.png
//!     ├── ...
//!     └── Icon-desktop-1024x1024.png
//! ```
//!
//! ## Failure isolation
//!
//! Failing to create the directory aborts the batch with
//! [`GenerateError::Directory`]. After that, every size is attempted: an
//! encode or write failure is recorded in that size's [`IconOutcome`] and the
//! loop moves on, so a partial set is still produced.
//!
//! An existing directory is reused and existing icons are overwritten.

use crate::imaging::{BackendError, ImageBackend, ReferenceImage, ResizeFilter, render_icon};
use crate::platform::IconTarget;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Cannot create output directory {path}: {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why a single icon was skipped.
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("{0}")]
    Render(#[from] BackendError),
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Result for one size of the batch.
#[derive(Debug)]
pub struct IconOutcome {
    pub size: u32,
    pub path: PathBuf,
    pub result: Result<(), WriteError>,
}

impl IconOutcome {
    pub fn is_written(&self) -> bool {
        self.result.is_ok()
    }
}

/// Everything a batch did, in table order.
#[derive(Debug)]
pub struct BatchReport {
    pub target: IconTarget,
    pub directory: PathBuf,
    pub outcomes: Vec<IconOutcome>,
}

impl BatchReport {
    pub fn written(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_written()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.written()
    }
}

/// Directory that receives the icons for `target`.
pub fn output_dir(output_root: &Path, target: &IconTarget) -> PathBuf {
    output_root.join(target.id())
}

/// Write every icon of `target` under `output_root`.
///
/// `on_icon` is called as soon as each size finishes, before the next one
/// starts, so callers can report progress live.
pub fn generate<B: ImageBackend>(
    backend: &B,
    reference: &ReferenceImage<B::Image>,
    target: IconTarget,
    output_root: &Path,
    filter: ResizeFilter,
    mut on_icon: impl FnMut(&IconOutcome),
) -> Result<BatchReport, GenerateError> {
    let directory = output_dir(output_root, &target);
    fs::create_dir_all(&directory).map_err(|source| GenerateError::Directory {
        path: directory.clone(),
        source,
    })?;

    let mut outcomes = Vec::new();
    for size in target.sizes() {
        let path = directory.join(target.file_name(size));
        let result = write_icon(backend, reference, size, filter, &path);
        let outcome = IconOutcome { size, path, result };
        on_icon(&outcome);
        outcomes.push(outcome);
    }

    Ok(BatchReport {
        target,
        directory,
        outcomes,
    })
}

fn write_icon<B: ImageBackend>(
    backend: &B,
    reference: &ReferenceImage<B::Image>,
    size: u32,
    filter: ResizeFilter,
    path: &Path,
) -> Result<(), WriteError> {
    let png = render_icon(backend, reference, size, filter)?;
    fs::write(path, png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::backend::tests::MockBackend;
    use crate::imaging::{RustBackend, load_reference};
    use crate::platform::Platform;
    use image::{DynamicImage, Rgba, RgbaImage};
    use tempfile::TempDir;

    fn mock_reference(backend: &MockBackend) -> ReferenceImage<crate::imaging::Dimensions> {
        load_reference(backend, Path::new("icon.png")).unwrap()
    }

    fn file_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn writes_one_file_per_size_in_table_order() {
        let tmp = TempDir::new().unwrap();
        let backend = MockBackend::with_dimensions(1024, 1024);
        let reference = mock_reference(&backend);

        let report = generate(
            &backend,
            &reference,
            IconTarget::Platform(Platform::Phone),
            tmp.path(),
            ResizeFilter::default(),
            |_| {},
        )
        .unwrap();

        assert_eq!(report.directory, tmp.path().join("phone"));
        assert_eq!(report.written(), 12);
        assert_eq!(report.failed(), 0);
        assert_eq!(backend.resized_sizes(), Platform::Phone.sizes());

        let sizes: Vec<u32> = report.outcomes.iter().map(|o| o.size).collect();
        assert_eq!(sizes, Platform::Phone.sizes());
        for outcome in &report.outcomes {
            let expected = format!("Icon-phone-{0}x{0}.png", outcome.size);
            assert_eq!(outcome.path, tmp.path().join("phone").join(&expected));
            assert_eq!(
                fs::read(&outcome.path).unwrap(),
                format!("png:{}", outcome.size).into_bytes()
            );
        }
        assert_eq!(file_names(&report.directory).len(), 12);
    }

    #[test]
    fn every_platform_produces_its_full_table() {
        let tmp = TempDir::new().unwrap();
        let backend = MockBackend::with_dimensions(1024, 1024);
        let reference = mock_reference(&backend);

        for platform in Platform::ALL {
            let report = generate(
                &backend,
                &reference,
                IconTarget::Platform(platform),
                tmp.path(),
                ResizeFilter::Nearest,
                |_| {},
            )
            .unwrap();
            assert_eq!(report.written(), platform.sizes().len(), "{platform}");
            assert!(tmp.path().join(platform.id()).is_dir());
        }
    }

    #[test]
    fn tablet_duplicate_size_rewrites_same_file() {
        let tmp = TempDir::new().unwrap();
        let backend = MockBackend::with_dimensions(1024, 1024);
        let reference = mock_reference(&backend);

        let report = generate(
            &backend,
            &reference,
            IconTarget::Platform(Platform::Tablet),
            tmp.path(),
            ResizeFilter::default(),
            |_| {},
        )
        .unwrap();

        assert_eq!(report.outcomes.len(), 10);
        assert_eq!(report.written(), 10);
        // 40 appears twice in the table
        assert_eq!(file_names(&report.directory).len(), 9);
    }

    #[test]
    fn render_failure_skips_only_that_size() {
        let tmp = TempDir::new().unwrap();
        let backend = MockBackend::with_dimensions(1024, 1024).failing_on(&[64]);
        let reference = mock_reference(&backend);

        let report = generate(
            &backend,
            &reference,
            IconTarget::Platform(Platform::Desktop),
            tmp.path(),
            ResizeFilter::default(),
            |_| {},
        )
        .unwrap();

        assert_eq!(report.written(), 6);
        assert_eq!(report.failed(), 1);
        let failed = report.outcomes.iter().find(|o| !o.is_written()).unwrap();
        assert_eq!(failed.size, 64);
        assert!(matches!(failed.result, Err(WriteError::Render(_))));
        assert!(!failed.path.exists());
        // Sizes after the failure were still attempted
        assert_eq!(backend.resized_sizes(), Platform::Desktop.sizes());
    }

    #[test]
    fn unwritable_path_fails_only_that_file() {
        let tmp = TempDir::new().unwrap();
        let blocked = tmp.path().join("tv/Icon-tv-800x800.png");
        fs::create_dir_all(&blocked).unwrap();

        let backend = MockBackend::with_dimensions(1024, 1024);
        let reference = mock_reference(&backend);
        let report = generate(
            &backend,
            &reference,
            IconTarget::Platform(Platform::Tv),
            tmp.path(),
            ResizeFilter::default(),
            |_| {},
        )
        .unwrap();

        assert_eq!(report.written(), 3);
        let failed: Vec<u32> = report
            .outcomes
            .iter()
            .filter(|o| !o.is_written())
            .map(|o| o.size)
            .collect();
        assert_eq!(failed, vec![800]);
        assert!(matches!(report.outcomes[1].result, Err(WriteError::Io(_))));
        assert!(tmp.path().join("tv/Icon-tv-2400x2400.png").is_file());
    }

    #[test]
    fn directory_creation_failure_aborts_batch() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("not-a-dir");
        fs::write(&root, b"file in the way").unwrap();

        let backend = MockBackend::with_dimensions(1024, 1024);
        let reference = mock_reference(&backend);
        let result = generate(
            &backend,
            &reference,
            IconTarget::Platform(Platform::Watch),
            &root,
            ResizeFilter::default(),
            |_| {},
        );

        assert!(matches!(result, Err(GenerateError::Directory { .. })));
        assert!(backend.resized_sizes().is_empty());
    }

    #[test]
    fn existing_directory_is_reused_and_files_overwritten() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("automotive");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("Icon-automotive-200x200.png"), b"stale").unwrap();
        fs::write(dir.join("notes.txt"), b"keep me").unwrap();

        let backend = MockBackend::with_dimensions(1024, 1024);
        let reference = mock_reference(&backend);
        let report = generate(
            &backend,
            &reference,
            IconTarget::Platform(Platform::Automotive),
            tmp.path(),
            ResizeFilter::default(),
            |_| {},
        )
        .unwrap();

        assert_eq!(report.written(), 4);
        assert_eq!(
            fs::read(dir.join("Icon-automotive-200x200.png")).unwrap(),
            b"png:200"
        );
        assert_eq!(fs::read(dir.join("notes.txt")).unwrap(), b"keep me");
    }

    #[test]
    fn callback_sees_each_outcome_in_order() {
        let tmp = TempDir::new().unwrap();
        let backend = MockBackend::with_dimensions(1024, 1024);
        let reference = mock_reference(&backend);

        let mut seen = Vec::new();
        generate(
            &backend,
            &reference,
            IconTarget::Platform(Platform::Automotive),
            tmp.path(),
            ResizeFilter::default(),
            |outcome| seen.push(outcome.size),
        )
        .unwrap();

        assert_eq!(seen, vec![200, 400, 800, 1600]);
    }

    #[test]
    fn custom_target_writes_single_icon() {
        let tmp = TempDir::new().unwrap();
        let backend = MockBackend::with_dimensions(1024, 1024);
        let reference = mock_reference(&backend);

        let report = generate(
            &backend,
            &reference,
            IconTarget::Custom(300),
            tmp.path(),
            ResizeFilter::default(),
            |_| {},
        )
        .unwrap();

        assert_eq!(report.written(), 1);
        assert_eq!(
            file_names(&tmp.path().join("custom")),
            vec!["Icon-custom-300x300.png"]
        );
    }

    #[test]
    fn real_backend_outputs_decode_to_requested_sizes() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("icon.png");
        DynamicImage::ImageRgba8(RgbaImage::from_fn(1024, 1024, |x, y| {
            Rgba([(x / 4) as u8, (y / 4) as u8, 90, 255])
        }))
        .save(&source)
        .unwrap();

        let backend = RustBackend::new();
        let reference = load_reference(&backend, &source).unwrap();
        let report = generate(
            &backend,
            &reference,
            IconTarget::Platform(Platform::Desktop),
            tmp.path(),
            ResizeFilter::Nearest,
            |_| {},
        )
        .unwrap();

        assert_eq!(report.written(), 7);
        for outcome in &report.outcomes {
            let (w, h) = image::image_dimensions(&outcome.path).unwrap();
            assert_eq!((w, h), (outcome.size, outcome.size));
        }
    }
}
