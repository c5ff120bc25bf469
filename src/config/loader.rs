//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. `.marlin-profiles.toml` in the working root
//! 2. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::{
    CONFIG_FILENAME, DEFAULT_BASE_DIR, DEFAULT_FIRMWARE_DIR, DEFAULT_PRINTERS_DIR,
};

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub layout: LayoutConfig,
}

/// Directory layout overrides.
///
/// Relative paths are resolved against the working root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub base_dir: PathBuf,
    pub printers_dir: PathBuf,
    /// Name of the subdirectory inside an upstream checkout.
    pub firmware_dir: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            printers_dir: PathBuf::from(DEFAULT_PRINTERS_DIR),
            firmware_dir: DEFAULT_FIRMWARE_DIR.to_string(),
        }
    }
}

impl Config {
    /// Load configuration for a working root.
    ///
    /// Falls back to defaults when no config file exists.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let local_path = root.join(CONFIG_FILENAME);
        if local_path.exists() {
            tracing::debug!(path = %local_path.display(), "loading config file");
            return Self::load_file(&local_path);
        }
        Ok(Config::default())
    }

    /// Load a config from a specific file.
    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
