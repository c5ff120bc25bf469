//! The operations behind each subcommand.
//!
//! Every command is a single pass of existence checks followed by copies of
//! the tracked files. Nothing is rolled back: a failure halfway through a
//! copy loop leaves the destination partly updated.

pub mod apply;
pub mod diff;
pub mod list;
pub mod new;
pub mod update;

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::ProfileName;
use crate::store::CopyError;

pub use apply::apply;
pub use diff::diff;
pub use list::{ProfileStatus, list_profiles};
pub use new::create_profile;
pub use update::update;

/// Errors that terminate a command.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("upstream checkout not found: {0}")]
    UpstreamNotFound(PathBuf),

    #[error("missing file: {0}, aborting")]
    MissingUpstreamFile(PathBuf),

    #[error("invalid printer name '{name}': {reason}")]
    InvalidProfileName { name: String, reason: String },

    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no configuration found for printer named: {0}")]
    ProfileNotFound(String),

    #[error(transparent)]
    Copy(#[from] CopyError),

    #[error("failed to read printers directory {path}: {source}")]
    ReadProfiles {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("the actual file diffing is not implemented yet")]
    DiffNotImplemented,
}

/// The upstream root must be an existing directory.
fn require_upstream(upstream: &Path) -> Result<(), CommandError> {
    if upstream.is_dir() {
        Ok(())
    } else {
        Err(CommandError::UpstreamNotFound(upstream.to_path_buf()))
    }
}

fn parse_name(name: &str) -> Result<ProfileName, CommandError> {
    ProfileName::parse(name).map_err(|reason| CommandError::InvalidProfileName {
        name: name.to_string(),
        reason,
    })
}
