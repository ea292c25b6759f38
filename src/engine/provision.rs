// src/engine/provision.rs

//! Startup provisioning.
//!
//! Existing files are never modified, even if the templates have changed
//! since they were written.

use tracing::{debug, info};

use crate::config::Settings;
use crate::errors::Result;
use crate::fs::FileSystem;
use crate::units::{STARTER_CONFIG, path_unit, service_unit};

/// What a provisioning run wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProvisionReport {
    pub units_written: bool,
    pub config_written: bool,
}

pub fn provision(fs: &dyn FileSystem, settings: &Settings) -> Result<ProvisionReport> {
    let mut report = ProvisionReport::default();

    fs.create_dir_all(&settings.paths.unit_dir)?;

    let path_file = settings.path_unit_file();
    let service_file = settings.service_unit_file();
    if !fs.exists(&path_file) || !fs.exists(&service_file) {
        info!(dir = ?settings.paths.unit_dir, "writing systemd unit templates");
        fs.write(&path_file, path_unit(settings).as_bytes())?;
        fs.write(&service_file, service_unit(settings).as_bytes())?;
        report.units_written = true;
    } else {
        debug!(path = ?path_file, "unit templates already present");
    }

    let master = &settings.paths.master_config;
    if !fs.exists(master) {
        info!(path = ?master, "writing starter config");
        fs.write(master, STARTER_CONFIG.as_bytes())?;
        report.config_written = true;
    } else {
        debug!(path = ?master, "master config already present");
    }

    Ok(report)
}
