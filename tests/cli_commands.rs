//! Integration tests for the diff, update, new, apply and list commands.
//!
//! These tests exercise the library functions that back each command,
//! using the public API from the marlin_profiles crate.

use std::path::Path;

use marlin_profiles::commands::{self, CommandError};
use marlin_profiles::config::Config;
use marlin_profiles::constants::TRACKED_FILES;
use marlin_profiles::models::Layout;
use marlin_profiles::output::RecordingReporter;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn write_tracked(dir: &Path, contents: [&str; 2]) {
    std::fs::create_dir_all(dir).unwrap();
    for (file, body) in TRACKED_FILES.iter().zip(contents) {
        std::fs::write(dir.join(file), body).unwrap();
    }
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

// ---------------------------------------------------------------------------
// round trips
// ---------------------------------------------------------------------------

#[test]
fn new_then_apply_reproduces_base_store() {
    let work = tempfile::tempdir().unwrap();
    let marlin = tempfile::tempdir().unwrap();
    let layout = Layout::with_defaults(work.path());
    write_tracked(layout.base_store(), ["A", "B"]);
    write_tracked(&marlin.path().join("Marlin"), ["stock", "stock-adv"]);

    let mut reporter = RecordingReporter::new();
    commands::create_profile(&layout, "x", &mut reporter).unwrap();
    commands::apply(&layout, "x", marlin.path(), &mut reporter).unwrap();

    for file in TRACKED_FILES {
        assert_eq!(
            read(&marlin.path().join("Marlin").join(file)),
            read(&layout.base_store().join(file)),
        );
    }
}

#[test]
fn hand_edited_profile_is_applied() {
    let work = tempfile::tempdir().unwrap();
    let marlin = tempfile::tempdir().unwrap();
    let layout = Layout::with_defaults(work.path());
    write_tracked(layout.base_store(), ["A", "B"]);
    std::fs::create_dir_all(marlin.path().join("Marlin")).unwrap();

    let mut reporter = RecordingReporter::new();
    let profile = commands::create_profile(&layout, "ender3", &mut reporter).unwrap();
    assert_eq!(read(&work.path().join("printers/ender3/Configuration.h")), "A");
    assert_eq!(read(&work.path().join("printers/ender3/Configuration_adv.h")), "B");

    std::fs::write(profile.join("Configuration.h"), "A2").unwrap();
    commands::apply(&layout, "ender3", marlin.path(), &mut reporter).unwrap();

    assert_eq!(read(&marlin.path().join("Marlin/Configuration.h")), "A2");
    assert_eq!(read(&marlin.path().join("Marlin/Configuration_adv.h")), "B");
}

#[test]
fn update_then_new_bootstraps_empty_workspace() {
    let work = tempfile::tempdir().unwrap();
    let marlin = tempfile::tempdir().unwrap();
    let layout = Layout::with_defaults(work.path());
    write_tracked(&marlin.path().join("Marlin"), ["upstream", "upstream-adv"]);

    let mut reporter = RecordingReporter::new();
    assert_eq!(commands::update(&layout, marlin.path(), &mut reporter).unwrap(), 2);
    let profile = commands::create_profile(&layout, "voron", &mut reporter).unwrap();

    assert_eq!(read(&profile.join("Configuration.h")), "upstream");
    assert_eq!(read(&profile.join("Configuration_adv.h")), "upstream-adv");

    let profiles = commands::list_profiles(&layout, &mut reporter).unwrap();
    assert_eq!(profiles.len(), 1);
    assert!(profiles[0].is_complete());
}

// ---------------------------------------------------------------------------
// update
// ---------------------------------------------------------------------------

#[test]
fn update_is_all_or_nothing() {
    let work = tempfile::tempdir().unwrap();
    let marlin = tempfile::tempdir().unwrap();
    let layout = Layout::with_defaults(work.path());
    std::fs::create_dir_all(marlin.path().join("Marlin")).unwrap();
    std::fs::write(marlin.path().join("Marlin/Configuration.h"), "A").unwrap();

    let mut reporter = RecordingReporter::new();
    let err = commands::update(&layout, marlin.path(), &mut reporter).unwrap_err();

    assert!(
        err.to_string().contains("Configuration_adv.h"),
        "error should name the missing file, got: {err}"
    );
    assert!(reporter.copied().is_empty());
    assert!(!layout.base_store().join("Configuration.h").exists());
}

// ---------------------------------------------------------------------------
// new
// ---------------------------------------------------------------------------

#[test]
fn new_refuses_existing_profile() {
    let work = tempfile::tempdir().unwrap();
    let layout = Layout::with_defaults(work.path());
    write_tracked(layout.base_store(), ["A", "B"]);

    let mut reporter = RecordingReporter::new();
    commands::create_profile(&layout, "ender3", &mut reporter).unwrap();
    std::fs::write(work.path().join("printers/ender3/Configuration.h"), "edited").unwrap();

    let mut reporter = RecordingReporter::new();
    let result = commands::create_profile(&layout, "ender3", &mut reporter);

    assert!(matches!(result, Err(CommandError::CreateDir { .. })));
    assert_eq!(reporter.warnings().len(), 1);
    assert_eq!(read(&work.path().join("printers/ender3/Configuration.h")), "edited");
}

// ---------------------------------------------------------------------------
// apply
// ---------------------------------------------------------------------------

#[test]
fn apply_unknown_printer_copies_nothing() {
    let work = tempfile::tempdir().unwrap();
    let marlin = tempfile::tempdir().unwrap();
    let layout = Layout::with_defaults(work.path());
    write_tracked(&marlin.path().join("Marlin"), ["stock", "stock-adv"]);

    let mut reporter = RecordingReporter::new();
    let err = commands::apply(&layout, "ghost", marlin.path(), &mut reporter).unwrap_err();

    assert!(matches!(err, CommandError::ProfileNotFound(ref n) if n == "ghost"));
    assert!(reporter.copied().is_empty());
    assert_eq!(read(&marlin.path().join("Marlin/Configuration.h")), "stock");
}

// ---------------------------------------------------------------------------
// diff
// ---------------------------------------------------------------------------

#[test]
fn diff_reports_missing_then_fails() {
    let work = tempfile::tempdir().unwrap();
    let marlin = tempfile::tempdir().unwrap();
    let layout = Layout::with_defaults(work.path());

    let mut reporter = RecordingReporter::new();
    let err = commands::diff(&layout, marlin.path(), &mut reporter).unwrap_err();

    assert!(matches!(err, CommandError::DiffNotImplemented));
    assert_eq!(reporter.missing().len(), 4);
}

// ---------------------------------------------------------------------------
// config
// ---------------------------------------------------------------------------

#[test]
fn config_file_relocates_layout() {
    let work = tempfile::tempdir().unwrap();
    let marlin = tempfile::tempdir().unwrap();
    std::fs::write(
        work.path().join(".marlin-profiles.toml"),
        r#"
[layout]
base_dir = "stock"
printers_dir = "machines"
firmware_dir = "firmware"
"#,
    )
    .unwrap();
    write_tracked(&marlin.path().join("firmware"), ["A", "B"]);

    let config = Config::load(work.path()).unwrap();
    let layout = Layout::new(work.path(), &config.layout);

    let mut reporter = RecordingReporter::new();
    commands::update(&layout, marlin.path(), &mut reporter).unwrap();
    commands::create_profile(&layout, "ender3", &mut reporter).unwrap();

    assert_eq!(read(&work.path().join("stock/Configuration.h")), "A");
    assert_eq!(read(&work.path().join("machines/ender3/Configuration_adv.h")), "B");
    assert!(!work.path().join("base").exists());
}
