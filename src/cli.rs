//! Command-line surface.
//!
//! clap handles tokenizing and `-h`/`-V`; [`resolve_mode`] then decides which
//! of the valid argument patterns was used:
//!
//! | Arguments | Mode |
//! |---|---|
//! | `-d` | [`Mode::ListAll`] |
//! | `-d <platform>` | [`Mode::ListOne`] |
//! | `<image> -d <platform>` | [`Mode::Generate`] for the platform table |
//! | `<image> -s <size>` | [`Mode::Generate`] for one custom size |
//!
//! Anything else is a [`UsageError`].

use crate::platform::{IconTarget, MAX_CUSTOM_SIZE, Platform, UnknownPlatform};
use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "iconsmith")]
#[command(about = "Generate platform icon sets from one square reference image")]
#[command(long_about = "\
Generate platform icon sets from one square reference image

The reference image must be square and at least 1024x1024 pixels. Icons are
written as PNG files into a folder named after the platform:

  ./<platform>/Icon-<platform>-<size>x<size>.png

Platforms: phone, tablet, desktop, watch, tv, automotive

Examples:
  iconsmith -d                     List every platform and its sizes
  iconsmith -d watch               List the sizes for one platform
  iconsmith icon.png -d phone      Generate the phone icon set
  iconsmith icon.png -s 300        Generate ./custom/Icon-custom-300x300.png

Settings such as the resize filter can be placed in iconsmith.toml in the
working directory.")]
#[command(version = version_string())]
pub struct Cli {
    /// Square reference image, at least 1024x1024
    #[arg(value_name = "IMAGE")]
    pub source: Option<PathBuf>,

    /// Target platform; without a value, list all platforms
    #[arg(short = 'd', long = "device", value_name = "PLATFORM", num_args = 0..=1)]
    pub device: Option<Option<String>>,

    /// Generate a single icon with this edge length instead of a platform set
    #[arg(short = 's', long = "size", value_name = "PIXELS")]
    pub size: Option<u32>,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum UsageError {
    #[error("{0}")]
    UnknownPlatform(#[from] UnknownPlatform),
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

/// What a single invocation does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    ListAll,
    ListOne(Platform),
    Generate { source: PathBuf, target: IconTarget },
}

fn invalid(msg: &str) -> UsageError {
    UsageError::InvalidArguments(msg.to_string())
}

/// Map parsed arguments onto exactly one [`Mode`].
pub fn resolve_mode(cli: Cli) -> Result<Mode, UsageError> {
    match (cli.source, cli.device, cli.size) {
        (_, Some(_), Some(_)) => Err(invalid("-d and -s cannot be combined")),
        (None, Some(None), None) => Ok(Mode::ListAll),
        (None, Some(Some(id)), None) => Ok(Mode::ListOne(id.parse()?)),
        (Some(source), Some(Some(id)), None) => Ok(Mode::Generate {
            source,
            target: IconTarget::Platform(id.parse()?),
        }),
        (Some(_), Some(None), None) => Err(invalid("-d needs a platform when an image is given")),
        (Some(source), None, Some(size)) => {
            if size == 0 || size > MAX_CUSTOM_SIZE {
                return Err(UsageError::InvalidArguments(format!(
                    "size must be between 1 and {MAX_CUSTOM_SIZE}"
                )));
            }
            Ok(Mode::Generate {
                source,
                target: IconTarget::Custom(size),
            })
        }
        (None, None, Some(_)) => Err(invalid("-s needs a reference image")),
        (Some(_), None, None) => Err(invalid("missing -d <platform> or -s <size>")),
        (None, None, None) => Err(invalid("no arguments given")),
    }
}
