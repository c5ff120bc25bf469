//! `list`: show printer profiles and whether they hold every tracked file.

use crate::commands::CommandError;
use crate::models::Layout;
use crate::output::{Event, Reporter};
use crate::store;

/// A printer profile found under the printers root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileStatus {
    pub name: String,
    /// Tracked file names absent from the profile.
    pub missing: Vec<String>,
}

impl ProfileStatus {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// List every profile directory, sorted by name.
///
/// A printers root that does not exist yet simply has no profiles.
pub fn list_profiles(
    layout: &Layout,
    reporter: &mut dyn Reporter,
) -> Result<Vec<ProfileStatus>, CommandError> {
    let root = layout.printers_root();
    if !root.is_dir() {
        return Ok(Vec::new());
    }

    let read_err = |e| CommandError::ReadProfiles {
        path: root.to_path_buf(),
        source: e,
    };

    let mut profiles = Vec::new();
    for entry in std::fs::read_dir(root).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        if !path.is_dir() {
            continue;
        }
        let missing = store::missing_files(&path)
            .iter()
            .filter_map(|p| p.file_name())
            .map(|f| f.to_string_lossy().into_owned())
            .collect();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        profiles.push(ProfileStatus { name, missing });
    }
    profiles.sort_by(|a, b| a.name.cmp(&b.name));

    for profile in &profiles {
        reporter.report(Event::Profile {
            name: profile.name.clone(),
            missing: profile.missing.clone(),
        });
    }

    Ok(profiles)
}
