//! Tool configuration for `svg2xaml.toml`.
//!
//! # Sections
//!
//! | Section    | Purpose                                        |
//! |------------|------------------------------------------------|
//! | `[key]`    | Resource key defaults (fallback name, suffix)  |
//! | `[output]` | Output file settings (extension)               |
//!
//! # Example
//!
//! ```toml
//! [key]
//! default_name = "Icon"
//! unique_suffix = true
//!
//! [output]
//! extension = "xaml"
//! ```

use educe::Educe;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

mod defaults {
    pub fn key_name() -> String {
        "Icon".to_string()
    }

    pub const fn unique_suffix() -> bool {
        true
    }

    pub fn extension() -> String {
        "xaml".to_string()
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),
}

/// Root configuration structure representing svg2xaml.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Resource key settings
    #[serde(default)]
    pub key: KeyConfig,

    /// Output file settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[key]` section - resource key defaults.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct KeyConfig {
    /// Fallback key when the source name sanitizes to nothing.
    #[serde(default = "defaults::key_name")]
    #[educe(Default = defaults::key_name())]
    pub default_name: String,

    /// Append a timestamp suffix when no explicit key was given.
    #[serde(default = "defaults::unique_suffix")]
    #[educe(Default = true)]
    pub unique_suffix: bool,
}

/// `[output]` section - output file settings.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Extension for the output file when `--output` is not given.
    #[serde(default = "defaults::extension")]
    #[educe(Default = defaults::extension())]
    pub extension: String,
}

impl Config {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_str(&content)
    }
}
