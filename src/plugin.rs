// src/plugin.rs

//! Host-facing entry points.
//!
//! The plugin loader holds one [`Plugin`] and calls `main` once, then the
//! state getter/setter any number of times. Failures never reach the host:
//! they are logged here and surfaced as `None`, meaning "state unchanged".

use tracing::{error, info};

use crate::engine::HudController;
use crate::types::HudState;

pub struct Plugin {
    controller: HudController,
}

impl Plugin {
    pub fn new(controller: HudController) -> Self {
        Self { controller }
    }

    pub fn controller(&self) -> &HudController {
        &self.controller
    }

    /// Startup routine: make sure unit templates and a master config exist.
    pub async fn main(&self) {
        info!("starting custom MangoHud plugin");
        if let Err(err) = self.controller.provision() {
            error!(error = %err, details = ?err, "provisioning failed");
        }
    }

    /// `Some(true)` if the custom config is active, `None` on any error.
    pub async fn get_custom_hud_state(&self) -> Option<bool> {
        match self.controller.state().await {
            Ok(enabled) => Some(enabled),
            Err(err) => {
                error!(error = %err, details = ?err, "getting custom hud state failed");
                None
            }
        }
    }

    /// Returns the `systemctl` exit code, or `None` on any error.
    pub async fn set_custom_hud_state(&self, state: bool) -> Option<i32> {
        let state = HudState::from(state);
        match self.controller.set_state(state).await {
            Ok(code) => Some(code),
            Err(err) => {
                error!(
                    requested = %state,
                    error = %err,
                    details = ?err,
                    "setting custom hud state failed"
                );
                None
            }
        }
    }
}
