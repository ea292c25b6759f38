// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod locate;
pub mod logging;
pub mod plugin;
pub mod privilege;
pub mod types;
pub mod units;

use anyhow::{Result, anyhow};
use tracing::debug;

use crate::cli::{CliArgs, Command};
use crate::config::{Settings, load_or_default};
use crate::engine::HudController;
use crate::plugin::Plugin;
use crate::types::HudState;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - the privilege drop (if requested)
/// - settings loading (+ `--locator` override)
/// - controller / plugin construction
/// - dispatch of the single host call named by the subcommand
pub async fn run(args: CliArgs) -> Result<()> {
    if let (Some(uid), Some(gid)) = (args.run_as_uid, args.run_as_gid) {
        privilege::drop_to(uid, gid)?;
    }

    let settings = resolve_settings(&args)?;
    debug!(?settings, "effective settings");

    let plugin = Plugin::new(HudController::from_settings(settings));
    dispatch(&plugin, &args.command).await
}

/// Load settings and apply CLI overrides.
pub fn resolve_settings(args: &CliArgs) -> Result<Settings> {
    let mut settings = load_or_default(args.config.as_deref())?;
    if let Some(strategy) = args.locator {
        settings.locator.strategy = strategy;
    }
    Ok(settings)
}

/// Perform one host call and print its answer on stdout.
pub async fn dispatch(plugin: &Plugin, command: &Command) -> Result<()> {
    match command {
        Command::Provision => {
            let report = plugin.controller().provision()?;
            debug!(?report, "provisioning finished");
            Ok(())
        }
        Command::Status => {
            let enabled = plugin
                .get_custom_hud_state()
                .await
                .ok_or_else(|| anyhow!("could not determine custom hud state (see log)"))?;
            println!("{}", HudState::from(enabled));
            Ok(())
        }
        Command::Enable => set(plugin, true).await,
        Command::Disable => set(plugin, false).await,
        Command::Locate => {
            let active = plugin.controller().active_config()?;
            println!("{}", active.path.display());
            println!(
                "{}",
                plugin.controller().settings().watch_unit(&active.identifier)
            );
            Ok(())
        }
    }
}

async fn set(plugin: &Plugin, state: bool) -> Result<()> {
    plugin
        .set_custom_hud_state(state)
        .await
        .map(|_| ())
        .ok_or_else(|| anyhow!("could not set custom hud state to {} (see log)", HudState::from(state)))
}
