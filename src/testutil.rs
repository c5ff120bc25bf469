//! Fixtures shared by unit tests.

use std::path::Path;

use crate::constants::TRACKED_FILES;

/// Write both tracked files into `dir`, creating it first.
pub fn write_tracked(dir: &Path, contents: [&str; 2]) {
    std::fs::create_dir_all(dir).unwrap();
    for (file, body) in TRACKED_FILES.iter().zip(contents) {
        std::fs::write(dir.join(file), body).unwrap();
    }
}

pub fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}
