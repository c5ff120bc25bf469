//! Configuration loading.
//!
//! Handles the optional `.marlin-profiles.toml` layout overrides.

pub mod loader;

pub use loader::{Config, ConfigError, LayoutConfig};
