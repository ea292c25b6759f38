// src/config/validate.rs

use std::path::Path;

use crate::config::model::{RawSettings, Settings};
use crate::errors::{HudError, Result};

impl TryFrom<RawSettings> for Settings {
    type Error = crate::errors::HudError;

    fn try_from(raw: RawSettings) -> std::result::Result<Self, Self::Error> {
        validate_raw_settings(&raw)?;
        Ok(Settings::new_unchecked(raw))
    }
}

fn validate_raw_settings(raw: &RawSettings) -> Result<()> {
    validate_paths(raw)?;
    validate_locator(raw)?;
    validate_systemd(raw)?;
    Ok(())
}

fn ensure_absolute(field: &str, path: &Path) -> Result<()> {
    if !path.is_absolute() {
        return Err(HudError::ConfigError(format!(
            "{field} must be an absolute path (got {:?})",
            path
        )));
    }
    Ok(())
}

fn ensure_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HudError::ConfigError(format!("{field} must not be empty")));
    }
    Ok(())
}

fn validate_paths(raw: &RawSettings) -> Result<()> {
    let p = &raw.paths;
    ensure_absolute("[paths].unit_dir", &p.unit_dir)?;
    ensure_absolute("[paths].master_config", &p.master_config)?;
    ensure_absolute("[paths].backup", &p.backup)?;
    ensure_absolute("[paths].scratch_dir", &p.scratch_dir)?;
    ensure_absolute("[paths].proc_root", &p.proc_root)?;
    ensure_non_empty("[paths].scratch_prefix", &p.scratch_prefix)?;

    if p.scratch_prefix.contains('/') {
        return Err(HudError::ConfigError(format!(
            "[paths].scratch_prefix must be a file name prefix, not a path (got {:?})",
            p.scratch_prefix
        )));
    }
    Ok(())
}

fn validate_locator(raw: &RawSettings) -> Result<()> {
    ensure_non_empty("[locator].binary", &raw.locator.binary)?;
    ensure_non_empty("[locator].env_var", &raw.locator.env_var)?;

    if raw.locator.env_var.contains('=') {
        return Err(HudError::ConfigError(format!(
            "[locator].env_var must not contain '=' (got {:?})",
            raw.locator.env_var
        )));
    }
    Ok(())
}

fn validate_systemd(raw: &RawSettings) -> Result<()> {
    let s = &raw.systemd;
    ensure_non_empty("[systemd].bus_address", &s.bus_address)?;
    ensure_non_empty("[systemd].unit", &s.unit)?;

    if s.program.as_os_str().is_empty() {
        return Err(HudError::ConfigError(
            "[systemd].program must not be empty".to_string(),
        ));
    }

    if s.unit.contains(|c: char| c == '@' || c == '/' || c.is_whitespace()) {
        return Err(HudError::ConfigError(format!(
            "[systemd].unit must be a bare template name without '@', '/' or whitespace (got {:?})",
            s.unit
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn defaults_are_valid() {
        assert!(Settings::try_from(RawSettings::default()).is_ok());
    }

    #[test]
    fn relative_backup_path_is_rejected() {
        let mut raw = RawSettings::default();
        raw.paths.backup = PathBuf::from("backup");

        match Settings::try_from(raw) {
            Err(HudError::ConfigError(msg)) => assert!(msg.contains("[paths].backup")),
            other => panic!("expected ConfigError, got {other:?}"),
        }
    }

    #[test]
    fn unit_name_with_instance_marker_is_rejected() {
        let mut raw = RawSettings::default();
        raw.systemd.unit = "customhud@".to_string();
        assert!(matches!(
            Settings::try_from(raw),
            Err(HudError::ConfigError(_))
        ));
    }

    #[test]
    fn env_var_with_equals_is_rejected() {
        let mut raw = RawSettings::default();
        raw.locator.env_var = "MANGOHUD_CONFIGFILE=".to_string();
        assert!(matches!(
            Settings::try_from(raw),
            Err(HudError::ConfigError(_))
        ));
    }
}
