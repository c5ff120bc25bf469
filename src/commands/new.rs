//! `new`: create a printer profile from the base store.

use std::path::PathBuf;

use crate::commands::{CommandError, parse_name};
use crate::models::Layout;
use crate::output::{Event, Reporter};
use crate::store;

/// Create `<printers>/<name>/` and fill it from the base store.
///
/// An existing path only produces a warning here; the directory creation
/// that follows then fails, so nothing is ever overwritten.
pub fn create_profile(
    layout: &Layout,
    name: &str,
    reporter: &mut dyn Reporter,
) -> Result<PathBuf, CommandError> {
    let name = parse_name(name)?;
    let target = layout.profile_dir(&name);

    if target.exists() {
        reporter.report(Event::Warning(format!(
            "There are existing files or directories called '{name}', I will not overwrite."
        )));
    }

    let printers = layout.printers_root();
    std::fs::create_dir_all(printers).map_err(|e| CommandError::CreateDir {
        path: printers.to_path_buf(),
        source: e,
    })?;
    std::fs::create_dir(&target).map_err(|e| CommandError::CreateDir {
        path: target.clone(),
        source: e,
    })?;
    tracing::debug!(path = %target.display(), "created profile directory");

    store::copy_tracked(layout.base_store(), &target, reporter)?;
    reporter.report(Event::Done(format!("Created printer profile '{name}'")));
    Ok(target)
}
