//! Tracked-file checks and copy loops.
//!
//! Every directory the tool manages (base store, printer profiles, the
//! firmware directory of an upstream checkout) holds the same fixed set of
//! files, so all operations reduce to checking and copying that set.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::constants::TRACKED_FILES;
use crate::output::{Event, Reporter};

/// Errors from copying the tracked file set.
#[derive(Error, Debug)]
pub enum CopyError {
    #[error("failed to copy {from} to {to}: {source}")]
    File {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("source and destination are the same directory: {path}")]
    SameLocation { path: PathBuf },
}

/// Full paths of the tracked files absent from `dir`, in tracked order.
pub fn missing_files(dir: &Path) -> Vec<PathBuf> {
    TRACKED_FILES
        .iter()
        .map(|file| dir.join(file))
        .filter(|path| !path.is_file())
        .collect()
}

/// Copy every tracked file from `from` into `to`, overwriting.
///
/// Refuses to copy a directory onto itself, which would truncate every
/// tracked file. Stops at the first failure; files copied before it stay
/// in place.
pub fn copy_tracked(
    from: &Path,
    to: &Path,
    reporter: &mut dyn Reporter,
) -> Result<usize, CopyError> {
    if same_directory(from, to) {
        return Err(CopyError::SameLocation {
            path: to.to_path_buf(),
        });
    }

    let mut copied = 0;
    for file in TRACKED_FILES {
        let src = from.join(file);
        let dst = to.join(file);

        reporter.report(Event::Copying {
            file: file.to_string(),
            to: to.to_path_buf(),
        });
        let bytes = std::fs::copy(&src, &dst).map_err(|e| CopyError::File {
            from: src.clone(),
            to: dst.clone(),
            source: e,
        })?;
        tracing::debug!(from = %src.display(), to = %dst.display(), bytes, "copied");
        copied += 1;
    }
    Ok(copied)
}

/// Both paths exist and resolve to the same directory.
fn same_directory(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
