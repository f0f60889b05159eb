use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use iconsmith::cli::{Cli, Mode, resolve_mode};
use iconsmith::imaging::{RustBackend, load_reference};
use iconsmith::platform::IconTarget;
use iconsmith::{config, generate, output};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Exit status for argument-level errors (matches clap's own).
const USAGE_EXIT: u8 = 2;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            return usage_failure();
        }
    };

    let mode = match resolve_mode(cli) {
        Ok(mode) => mode,
        Err(e) => {
            eprintln!("Error: {e}");
            return usage_failure();
        }
    };

    match run(mode) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Print the full help after an argument error and pick the usage exit code.
fn usage_failure() -> ExitCode {
    eprintln!();
    eprint!("{}", Cli::command().render_long_help());
    ExitCode::from(USAGE_EXIT)
}

fn run(mode: Mode) -> Result<(), Box<dyn std::error::Error>> {
    match mode {
        Mode::ListAll => output::print_platform_list(),
        Mode::ListOne(platform) => output::print_platform(platform),
        Mode::Generate { source, target } => generate_icons(&source, target)?,
    }
    Ok(())
}

/// Validate the reference, then write the whole batch.
///
/// Per-icon failures are printed as they happen and do not fail the run.
fn generate_icons(source: &Path, target: IconTarget) -> Result<(), Box<dyn std::error::Error>> {
    let settings = config::load_settings(&working_dir())?;
    let backend = RustBackend::new();
    let reference = load_reference(&backend, source)?;

    println!(
        "{}",
        output::format_generate_header(source, &target, reference.dimensions)
    );
    let report = generate::generate(
        &backend,
        &reference,
        target,
        &settings.output_root,
        settings.resize.filter,
        output::print_icon_outcome,
    )?;
    println!("{}", output::format_batch_summary(&report));
    Ok(())
}

fn working_dir() -> PathBuf {
    PathBuf::from(".")
}
