//! `apply`: push a printer profile into an upstream checkout.

use std::path::Path;

use crate::commands::{CommandError, parse_name, require_upstream};
use crate::models::Layout;
use crate::output::{Event, Reporter};
use crate::store;

/// Copy the tracked files of profile `name` into `<upstream>/Marlin/`.
///
/// Returns the number of files copied.
pub fn apply(
    layout: &Layout,
    name: &str,
    upstream: &Path,
    reporter: &mut dyn Reporter,
) -> Result<usize, CommandError> {
    let profile = parse_name(name)?;
    let source = layout.profile_dir(&profile);
    if !source.is_dir() {
        return Err(CommandError::ProfileNotFound(name.to_string()));
    }
    require_upstream(upstream)?;

    let firmware = layout.firmware_dir(upstream);
    let copied = store::copy_tracked(&source, &firmware, reporter)?;
    reporter.report(Event::Done(format!(
        "Applied printer profile '{profile}' to {}",
        firmware.display()
    )));
    Ok(copied)
}
