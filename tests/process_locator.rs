// tests/process_locator.rs

mod common;
use crate::common::fake_proc::FakeProcTable;

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use customhud::errors::HudError;
use customhud::fs::RealFileSystem;
use customhud::locate::{ConfigLocator, ProcessLocator};

type TestResult = Result<(), Box<dyn Error>>;

fn locator(root: PathBuf) -> ProcessLocator {
    ProcessLocator::new(
        Arc::new(RealFileSystem),
        root,
        "mangoapp".to_string(),
        "MANGOHUD_CONFIGFILE".to_string(),
    )
}

#[test]
fn lowest_matching_pid_wins_and_noise_is_ignored() -> TestResult {
    let dir = tempfile::tempdir()?;
    FakeProcTable::new(dir.path())?
        .noise()?
        .vanished(5)?
        .process(900, &["mangoapp"], &[("MANGOHUD_CONFIGFILE", "/tmp/mangohud.second")])?
        .process(300, &["/usr/bin/mangoapp", "-v"], &[("MANGOHUD_CONFIGFILE", "/tmp/mangohud.first")])?
        .process(100, &["gamescope", "--", "steam"], &[("MANGOHUD_CONFIGFILE", "/tmp/mangohud.nope")])?;

    assert_eq!(
        locator(dir.path().to_path_buf()).locate()?,
        PathBuf::from("/tmp/mangohud.first")
    );
    Ok(())
}

#[test]
fn missing_proc_root_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = locator(dir.path().join("absent")).locate().unwrap_err();
    assert!(matches!(err, HudError::Io { .. }));
}

#[test]
fn overlay_without_variable_is_discovery_error() -> TestResult {
    let dir = tempfile::tempdir()?;
    FakeProcTable::new(dir.path())?.process(42, &["mangoapp"], &[("HOME", "/home/deck")])?;

    match locator(dir.path().to_path_buf()).locate() {
        Err(HudError::Discovery(msg)) => {
            assert!(msg.contains("42"));
            Ok(())
        }
        other => panic!("Expected Discovery error, got: {:?}", other),
    }
}

#[test]
fn gamescope_with_mangoapp_flag_does_not_hide_overlay() -> TestResult {
    let dir = tempfile::tempdir()?;
    FakeProcTable::new(dir.path())?
        .process(200, &["gamescope", "--mangoapp", "--", "steam"], &[("HOME", "/home/deck")])?
        .process(640, &["mangoapp"], &[("MANGOHUD_CONFIGFILE", "/tmp/mangohud.k9")])?;

    assert_eq!(
        locator(dir.path().to_path_buf()).locate()?,
        PathBuf::from("/tmp/mangohud.k9")
    );
    Ok(())
}
