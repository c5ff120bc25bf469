//! App-wide constants.
//!
//! Centralises the tool name, config filename, the tracked file set and
//! the default directory layout so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "marlin-profiles";

/// Local config filename (e.g. `.marlin-profiles.toml` in the working root).
pub const CONFIG_FILENAME: &str = ".marlin-profiles.toml";

/// Configuration headers managed by the tool, in copy order.
pub const TRACKED_FILES: [&str; 2] = ["Configuration.h", "Configuration_adv.h"];

// ── Default layout ──────────────────────────────────────────────────

/// Base store directory, relative to the working root.
pub const DEFAULT_BASE_DIR: &str = "base";

/// Directory holding one subdirectory per printer profile.
pub const DEFAULT_PRINTERS_DIR: &str = "printers";

/// Subdirectory of an upstream checkout that holds the tracked files.
pub const DEFAULT_FIRMWARE_DIR: &str = "Marlin";
