use std::fmt;

use serde::Deserialize;

/// How the active overlay config file is discovered.
///
/// - `Process`: read `MANGOHUD_CONFIGFILE` from the running overlay process's
///   environment (default).
/// - `Newest`: pick the most recently modified candidate in the scratch
///   directory. Less reliable when several overlay instances are running.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LocatorStrategy {
    #[default]
    Process,
    Newest,
}

/// Whether the custom overlay config is in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudState {
    Disabled,
    Enabled,
}

impl From<bool> for HudState {
    fn from(enabled: bool) -> Self {
        if enabled {
            HudState::Enabled
        } else {
            HudState::Disabled
        }
    }
}

impl fmt::Display for HudState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HudState::Disabled => f.write_str("inactive"),
            HudState::Enabled => f.write_str("active"),
        }
    }
}
