//! Tool configuration.
//!
//! Settings are read from an optional `iconsmith.toml` in the working
//! directory. Without one, stock defaults apply and icons land next to where
//! the tool was run.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! output_root = "."          # Directory under which <platform>/ folders are created
//!
//! [resize]
//! filter = "lanczos3"        # nearest | triangle | catmull-rom | gaussian | lanczos3
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::imaging::ResizeFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "iconsmith.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Settings loaded from `iconsmith.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Directory that receives the per-platform output folders.
    /// Relative paths resolve against the working directory.
    pub output_root: PathBuf,
    pub resize: ResizeConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from("."),
            resize: ResizeConfig::default(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output_root.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "output_root must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Resampling settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResizeConfig {
    pub filter: ResizeFilter,
}

/// Parse and validate config text.
pub fn parse_settings(content: &str) -> Result<Settings, ConfigError> {
    let settings: Settings = toml::from_str(content)?;
    settings.validate()?;
    Ok(settings)
}

/// Load `iconsmith.toml` from `dir`, falling back to defaults when absent.
pub fn load_settings(dir: &Path) -> Result<Settings, ConfigError> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(Settings::default());
    }
    let content = fs::read_to_string(&path)?;
    parse_settings(&content)
}
