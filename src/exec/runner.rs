// src/exec/runner.rs

//! Real `systemctl` runner.

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use super::backend::{CommandOutput, SystemctlBackend, UnitAction};
use crate::config::Settings;
use crate::errors::{HudError, Result};

/// Spawns `systemctl` directly (no shell) with an explicit session bus
/// address in its environment.
#[derive(Debug, Clone)]
pub struct SystemctlRunner {
    program: PathBuf,
    bus_address: String,
}

impl SystemctlRunner {
    pub fn new(program: impl Into<PathBuf>, bus_address: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            bus_address: bus_address.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.systemd.program.clone(),
            settings.systemd.bus_address.clone(),
        )
    }

    async fn run_inner(&self, action: UnitAction, unit: &str) -> Result<CommandOutput> {
        debug!(
            program = ?self.program,
            action = %action,
            unit,
            "running systemctl"
        );

        let output = Command::new(&self.program)
            .args(action.args())
            .arg("--user")
            .arg(unit)
            .env("DBUS_SESSION_BUS_ADDRESS", &self.bus_address)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| HudError::Command {
                action: action.to_string(),
                unit: unit.to_string(),
                reason: format!("failed to run {:?}: {e}", self.program),
            })?;

        let code = output.status.code().unwrap_or(-1);
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            debug!(action = %action, unit, "stderr: {}", stderr.trim_end());
        }
        debug!(action = %action, unit, exit_code = code, "systemctl exited");

        Ok(CommandOutput {
            code,
            stdout: output.stdout,
        })
    }
}

impl SystemctlBackend for SystemctlRunner {
    fn run<'a>(
        &'a self,
        action: UnitAction,
        unit: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutput>> + Send + 'a>> {
        Box::pin(self.run_inner(action, unit))
    }
}
