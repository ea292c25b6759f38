#![allow(dead_code)]

use std::path::{Path, PathBuf};

use customhud::config::{RawSettings, Settings};
use customhud::types::LocatorStrategy;

/// Builder for `Settings` with every path rebased under one root directory.
///
/// Layout under `root`:
/// - `home/.config/systemd/user/`  unit templates
/// - `home/.config/mangohud.conf`  master config
/// - `tmp/`                        scratch dir (`mangohud.*`, backup)
/// - `proc/`                       fake process table
pub struct SettingsBuilder {
    raw: RawSettings,
}

impl SettingsBuilder {
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let mut raw = RawSettings::default();
        raw.paths.unit_dir = root.join("home/.config/systemd/user");
        raw.paths.master_config = root.join("home/.config/mangohud.conf");
        raw.paths.backup = root.join("tmp/steam_mangohud_backup");
        raw.paths.scratch_dir = root.join("tmp");
        raw.paths.proc_root = root.join("proc");
        Self { raw }
    }

    pub fn strategy(mut self, strategy: LocatorStrategy) -> Self {
        self.raw.locator.strategy = strategy;
        self
    }

    pub fn unit(mut self, unit: &str) -> Self {
        self.raw.systemd.unit = unit.to_string();
        self
    }

    pub fn build(self) -> Settings {
        Settings::try_from(self.raw).expect("Failed to build valid settings from builder")
    }
}

/// Scratch config path `<root>/tmp/mangohud.<id>` as laid out by [`SettingsBuilder`].
pub fn scratch_config(root: impl AsRef<Path>, id: &str) -> PathBuf {
    root.as_ref().join("tmp").join(format!("mangohud.{id}"))
}
