// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

use crate::types::LocatorStrategy;

pub const DEFAULT_UNIT_DIR: &str = "/home/deck/.config/systemd/user";
pub const DEFAULT_MASTER_CONFIG: &str = "/home/deck/.config/mangohud.conf";
pub const DEFAULT_BACKUP: &str = "/tmp/steam_mangohud_backup";
pub const DEFAULT_SCRATCH_DIR: &str = "/tmp";
pub const DEFAULT_SCRATCH_PREFIX: &str = "mangohud.";
pub const DEFAULT_PROC_ROOT: &str = "/proc";
pub const DEFAULT_OVERLAY_BINARY: &str = "mangoapp";
pub const DEFAULT_CONFIG_ENV_VAR: &str = "MANGOHUD_CONFIGFILE";
pub const DEFAULT_SYSTEMCTL: &str = "/usr/bin/systemctl";
pub const DEFAULT_BUS_ADDRESS: &str = "unix:path=/run/user/1000/bus";
pub const DEFAULT_UNIT_NAME: &str = "customhud";

/// Settings as read from a TOML file, before validation.
///
/// ```toml
/// [paths]
/// unit_dir = "/home/deck/.config/systemd/user"
/// master_config = "/home/deck/.config/mangohud.conf"
/// backup = "/tmp/steam_mangohud_backup"
/// scratch_dir = "/tmp"
/// scratch_prefix = "mangohud."
/// proc_root = "/proc"
///
/// [locator]
/// strategy = "process"
/// binary = "mangoapp"
/// env_var = "MANGOHUD_CONFIGFILE"
///
/// [systemd]
/// program = "/usr/bin/systemctl"
/// bus_address = "unix:path=/run/user/1000/bus"
/// unit = "customhud"
/// ```
///
/// Every section and field is optional; the defaults are the Steam Deck
/// deployment values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawSettings {
    #[serde(default)]
    pub paths: PathsSection,

    #[serde(default)]
    pub locator: LocatorSection,

    #[serde(default)]
    pub systemd: SystemdSection,
}

/// `[paths]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsSection {
    /// Directory holding the `<unit>@.path` / `<unit>@.service` templates.
    pub unit_dir: PathBuf,

    /// The user's custom overlay config, copied in by the trigger unit.
    pub master_config: PathBuf,

    /// Single-slot backup of the overlay's own config.
    pub backup: PathBuf,

    /// Directory the overlay writes its per-session config into.
    pub scratch_dir: PathBuf,

    /// File name prefix of per-session configs (`mangohud.` → `mangohud.XXXX`).
    pub scratch_prefix: String,

    /// Root of the process table.
    pub proc_root: PathBuf,
}

impl Default for PathsSection {
    fn default() -> Self {
        Self {
            unit_dir: PathBuf::from(DEFAULT_UNIT_DIR),
            master_config: PathBuf::from(DEFAULT_MASTER_CONFIG),
            backup: PathBuf::from(DEFAULT_BACKUP),
            scratch_dir: PathBuf::from(DEFAULT_SCRATCH_DIR),
            scratch_prefix: DEFAULT_SCRATCH_PREFIX.to_string(),
            proc_root: PathBuf::from(DEFAULT_PROC_ROOT),
        }
    }
}

/// `[locator]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocatorSection {
    pub strategy: LocatorStrategy,

    /// Substring searched for in each process's command line.
    pub binary: String,

    /// Environment variable naming the active config file.
    pub env_var: String,
}

impl Default for LocatorSection {
    fn default() -> Self {
        Self {
            strategy: LocatorStrategy::default(),
            binary: DEFAULT_OVERLAY_BINARY.to_string(),
            env_var: DEFAULT_CONFIG_ENV_VAR.to_string(),
        }
    }
}

/// `[systemd]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SystemdSection {
    pub program: PathBuf,

    /// Passed to `systemctl` as `DBUS_SESSION_BUS_ADDRESS`.
    pub bus_address: String,

    /// Template unit name, without `@` or suffix.
    pub unit: String,
}

impl Default for SystemdSection {
    fn default() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_SYSTEMCTL),
            bus_address: DEFAULT_BUS_ADDRESS.to_string(),
            unit: DEFAULT_UNIT_NAME.to_string(),
        }
    }
}

/// Validated settings.
///
/// Only constructed through `TryFrom<RawSettings>` (see `validate.rs`) or
/// [`Settings::default`].
#[derive(Debug, Clone)]
pub struct Settings {
    pub paths: PathsSection,
    pub locator: LocatorSection,
    pub systemd: SystemdSection,
}

impl Settings {
    pub(crate) fn new_unchecked(raw: RawSettings) -> Self {
        Self {
            paths: raw.paths,
            locator: raw.locator,
            systemd: raw.systemd,
        }
    }

    pub fn path_unit_file(&self) -> PathBuf {
        self.paths
            .unit_dir
            .join(format!("{}@.path", self.systemd.unit))
    }

    pub fn service_unit_file(&self) -> PathBuf {
        self.paths
            .unit_dir
            .join(format!("{}@.service", self.systemd.unit))
    }

    /// Instantiated watch unit name, e.g. `customhud@abcd.path`.
    pub fn watch_unit(&self, identifier: &str) -> String {
        format!("{}@{}.path", self.systemd.unit, identifier)
    }

    /// Scratch file path with a systemd `%i` placeholder for the instance.
    pub fn scratch_file_template(&self) -> PathBuf {
        self.paths
            .scratch_dir
            .join(format!("{}%i", self.paths.scratch_prefix))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new_unchecked(RawSettings::default())
    }
}
