//! `update`: refresh the base store from an upstream checkout.

use std::path::Path;

use crate::commands::{CommandError, require_upstream};
use crate::models::Layout;
use crate::output::{Event, Reporter};
use crate::store;

/// Copy the tracked files from `<upstream>/Marlin/` into the base store.
///
/// All files are checked before the first copy, so a missing upstream file
/// leaves the base store untouched. Returns the number of files copied.
pub fn update(
    layout: &Layout,
    upstream: &Path,
    reporter: &mut dyn Reporter,
) -> Result<usize, CommandError> {
    require_upstream(upstream)?;
    let firmware = layout.firmware_dir(upstream);

    if let Some(missing) = store::missing_files(&firmware).into_iter().next() {
        return Err(CommandError::MissingUpstreamFile(missing));
    }

    let base = layout.base_store();
    std::fs::create_dir_all(base).map_err(|e| CommandError::CreateDir {
        path: base.to_path_buf(),
        source: e,
    })?;

    let copied = store::copy_tracked(&firmware, base, reporter)?;
    reporter.report(Event::Done(format!(
        "Updated base store from {}",
        firmware.display()
    )));
    Ok(copied)
}
