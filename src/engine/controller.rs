// src/engine/controller.rs

use std::sync::Arc;

use tracing::{debug, info};

use crate::config::Settings;
use crate::errors::{HudError, Result};
use crate::exec::{SystemctlBackend, SystemctlRunner, UnitAction};
use crate::fs::{FileSystem, RealFileSystem};
use crate::locate::{ActiveConfig, ConfigLocator, build_locator};
use crate::types::HudState;

use super::provision::{self, ProvisionReport};

/// Swaps the overlay config and drives the watch unit.
///
/// Every operation locates the active config exactly once and uses that one
/// path (and the identifier derived from it) for all of its steps.
pub struct HudController {
    settings: Settings,
    fs: Arc<dyn FileSystem>,
    locator: Box<dyn ConfigLocator>,
    systemctl: Box<dyn SystemctlBackend>,
}

impl HudController {
    pub fn new(
        settings: Settings,
        fs: Arc<dyn FileSystem>,
        locator: Box<dyn ConfigLocator>,
        systemctl: Box<dyn SystemctlBackend>,
    ) -> Self {
        Self {
            settings,
            fs,
            locator,
            systemctl,
        }
    }

    /// Real filesystem and the locator selected by `settings`, with the given
    /// `systemctl` backend.
    pub fn with_backend(settings: Settings, systemctl: Box<dyn SystemctlBackend>) -> Self {
        let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);
        let locator = build_locator(&settings, fs.clone());
        Self::new(settings, fs, locator, systemctl)
    }

    /// Production wiring.
    pub fn from_settings(settings: Settings) -> Self {
        let runner = SystemctlRunner::from_settings(&settings);
        Self::with_backend(settings, Box::new(runner))
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Find the active config and its unit instance identifier.
    pub fn active_config(&self) -> Result<ActiveConfig> {
        let path = self.locator.locate()?;
        let active = ActiveConfig::from_path(path)?;
        debug!(
            locator = self.locator.name(),
            path = ?active.path,
            identifier = %active.identifier,
            "located active config"
        );
        Ok(active)
    }

    /// Write unit templates and the starter config if they are missing.
    pub fn provision(&self) -> Result<ProvisionReport> {
        provision::provision(self.fs.as_ref(), &self.settings)
    }

    /// Whether the watch unit for the active config is running.
    pub async fn state(&self) -> Result<bool> {
        let active = self.active_config()?;
        self.touch(&active)?;

        let unit = self.settings.watch_unit(&active.identifier);
        let output = self.systemctl.run(UnitAction::IsActive, &unit).await?;
        let enabled = output.reports_active();

        debug!(unit = %unit, exit_code = output.code, enabled, "queried watch unit");
        Ok(enabled)
    }

    /// Enable or disable the custom config; returns the `systemctl` exit code.
    pub async fn set_state(&self, state: HudState) -> Result<i32> {
        match state {
            HudState::Enabled => self.enable().await,
            HudState::Disabled => self.disable().await,
        }
    }

    async fn enable(&self) -> Result<i32> {
        info!("turning on custom MangoHud config");
        let active = self.active_config()?;

        debug!(from = ?active.path, to = ?self.settings.paths.backup, "backing up config");
        let content = self.fs.read(&active.path)?;
        self.fs.write(&self.settings.paths.backup, &content)?;

        let code = self.toggle_unit(UnitAction::EnableNow, &active).await?;
        self.touch(&active)?;
        Ok(code)
    }

    async fn disable(&self) -> Result<i32> {
        info!("turning off custom MangoHud config");
        let active = self.active_config()?;

        debug!(from = ?self.settings.paths.backup, to = ?active.path, "restoring config");
        let content = self.fs.read(&self.settings.paths.backup)?;
        self.fs.write(&active.path, &content)?;

        let code = self.toggle_unit(UnitAction::DisableNow, &active).await?;
        self.touch(&active)?;
        Ok(code)
    }

    async fn toggle_unit(&self, action: UnitAction, active: &ActiveConfig) -> Result<i32> {
        let unit = self.settings.watch_unit(&active.identifier);
        let output = self.systemctl.run(action, &unit).await?;

        if !output.success() {
            return Err(HudError::Command {
                action: action.to_string(),
                unit,
                reason: format!("exited with status {}", output.code),
            });
        }
        Ok(output.code)
    }

    /// The overlay only rereads its config when the mtime changes.
    fn touch(&self, active: &ActiveConfig) -> Result<()> {
        debug!(path = ?active.path, "touching config");
        self.fs.touch(&active.path)
    }
}
