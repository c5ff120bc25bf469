//! Shared types used across all modules.
//!
//! Defines the resolved directory layout and validated printer names.
//! Other modules import from here rather than reaching into each
//! other's internals.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::config::LayoutConfig;

/// Resolved directories for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    base_dir: PathBuf,
    printers_dir: PathBuf,
    firmware_dir: String,
}

impl Layout {
    /// Resolve a layout against a working root.
    pub fn new(root: impl Into<PathBuf>, config: &LayoutConfig) -> Self {
        let root = root.into();
        Self {
            base_dir: root.join(&config.base_dir),
            printers_dir: root.join(&config.printers_dir),
            firmware_dir: config.firmware_dir.clone(),
        }
    }

    /// Default layout (`base/`, `printers/`, `Marlin/`) under `root`.
    pub fn with_defaults(root: impl Into<PathBuf>) -> Self {
        Self::new(root, &LayoutConfig::default())
    }

    /// Directory holding the canonical copy of each tracked file.
    pub fn base_store(&self) -> &Path {
        &self.base_dir
    }

    /// Directory holding one subdirectory per printer profile.
    pub fn printers_root(&self) -> &Path {
        &self.printers_dir
    }

    pub fn profile_dir(&self, name: &ProfileName) -> PathBuf {
        self.printers_dir.join(name.as_str())
    }

    /// Location of the tracked files inside an upstream checkout.
    pub fn firmware_dir(&self, upstream: &Path) -> PathBuf {
        upstream.join(&self.firmware_dir)
    }
}

/// A printer name that maps to exactly one directory under the printers root.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProfileName(String);

impl ProfileName {
    /// Validate a user-supplied printer name.
    ///
    /// The name must be a single normal path component so the profile
    /// directory is always an immediate child of the printers root.
    pub fn parse(name: &str) -> Result<Self, String> {
        if name.is_empty() {
            return Err("name must not be empty".to_string());
        }
        if name.contains(['/', '\\']) {
            return Err("name must not contain path separators".to_string());
        }
        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(Self(name.to_string())),
            _ => Err("name must be a plain directory name".to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
