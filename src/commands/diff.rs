//! `diff`: compare the base store against an upstream checkout.
//!
//! Only the existence checks exist; content comparison is not implemented
//! and the command always fails after reporting missing files.

use std::path::Path;

use crate::commands::{CommandError, require_upstream};
use crate::constants::TRACKED_FILES;
use crate::models::Layout;
use crate::output::{Event, Reporter};

pub fn diff(
    layout: &Layout,
    upstream: &Path,
    reporter: &mut dyn Reporter,
) -> Result<(), CommandError> {
    require_upstream(upstream)?;
    let firmware = layout.firmware_dir(upstream);

    for file in TRACKED_FILES {
        for dir in [firmware.as_path(), layout.base_store()] {
            let path = dir.join(file);
            if !path.is_file() {
                reporter.report(Event::Missing(path));
            }
        }
    }

    Err(CommandError::DiffNotImplemented)
}
