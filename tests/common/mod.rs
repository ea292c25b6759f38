#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};

use customhud::config::Settings;
use customhud::engine::HudController;
use customhud_test_utils::fake_systemctl::FakeSystemctl;

pub use customhud_test_utils::builders;
pub use customhud_test_utils::fake_proc;
pub use customhud_test_utils::init_tracing;

/// Controller over the real filesystem with a fake `systemctl`.
pub fn controller(settings: Settings) -> (HudController, FakeSystemctl) {
    let systemctl = FakeSystemctl::new();
    let ctl = HudController::with_backend(settings, Box::new(systemctl.clone()));
    (ctl, systemctl)
}

/// Push a file's mtime into the past so a later touch is observable.
pub fn age_file(path: &Path) -> SystemTime {
    let old = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000);
    fs::OpenOptions::new()
        .write(true)
        .open(path)
        .and_then(|f| f.set_modified(old))
        .expect("aging file mtime");
    old
}

pub fn mtime(path: &Path) -> SystemTime {
    fs::metadata(path).and_then(|m| m.modified()).expect("reading mtime")
}
