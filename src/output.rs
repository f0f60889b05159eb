//! CLI output formatting.
//!
//! Each piece of user-facing text has a `format_*` function (returns
//! `Vec<String>`, no I/O) and, where `main` needs it, a `print_*` wrapper that
//! writes to stdout.
//!
//! # Output Format
//!
//! ## Listing
//!
//! ```text
//! phone (12 sizes)
//!     20, 40, 60, 29, 58, 87, 80, 120, 180, 76, 152, 167
//! tablet (10 sizes)
//!     20, 40, 29, 58, 40, 80, 76, 152, 167, 83
//! ```
//!
//! ## Generate
//!
//! ```text
//! ==> Generating desktop icons from icon.png (1024x1024)
//!     ./desktop/Icon-desktop-16x16.png
//!     ./desktop/Icon-desktop-32x32.png: failed (Permission denied (os error 13))
//!     ...
//! Generated 6 of 7 icons → ./desktop (1 failed)
//! ```

use crate::generate::{BatchReport, IconOutcome};
use crate::imaging::Dimensions;
use crate::platform::{IconTarget, Platform};
use std::path::Path;

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn join_sizes(sizes: &[u32]) -> String {
    sizes
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Listing
// ============================================================================

/// One platform: header with size count, then the sizes in table order.
pub fn format_platform(platform: Platform) -> Vec<String> {
    let sizes = platform.sizes();
    vec![
        format!("{} ({} sizes)", platform.id(), sizes.len()),
        format!("{}{}", indent(1), join_sizes(sizes)),
    ]
}

/// Every platform, in enumeration order.
pub fn format_platform_list() -> Vec<String> {
    Platform::ALL.into_iter().flat_map(format_platform).collect()
}

pub fn print_platform(platform: Platform) {
    for line in format_platform(platform) {
        println!("{}", line);
    }
}

pub fn print_platform_list() {
    for line in format_platform_list() {
        println!("{}", line);
    }
}

// ============================================================================
// Generate
// ============================================================================

pub fn format_generate_header(source: &Path, target: &IconTarget, dims: Dimensions) -> String {
    format!(
        "==> Generating {} icons from {} ({}x{})",
        target.id(),
        source.display(),
        dims.width,
        dims.height
    )
}

/// Progress line for one icon: the written path, or the path and the reason
/// it was skipped.
pub fn format_icon_outcome(outcome: &IconOutcome) -> String {
    match &outcome.result {
        Ok(()) => format!("{}{}", indent(1), outcome.path.display()),
        Err(e) => format!("{}{}: failed ({})", indent(1), outcome.path.display(), e),
    }
}

pub fn format_batch_summary(report: &BatchReport) -> String {
    let total = report.outcomes.len();
    let written = report.written();
    let noun = if total == 1 { "icon" } else { "icons" };
    let mut line = format!(
        "Generated {} of {} {} → {}",
        written,
        total,
        noun,
        report.directory.display()
    );
    if report.failed() > 0 {
        line.push_str(&format!(" ({} failed)", report.failed()));
    }
    line
}

pub fn print_icon_outcome(outcome: &IconOutcome) {
    println!("{}", format_icon_outcome(outcome));
}
