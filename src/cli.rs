// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! The binary plays the plugin host: each subcommand is one host call.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::types::LocatorStrategy;

/// Command-line arguments for `customhud`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "customhud",
    version,
    about = "Toggle a custom MangoHud config via a systemd path unit.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to a settings file (TOML).
    ///
    /// Default: `/home/deck/.config/customhud.toml` if it exists, otherwise
    /// built-in defaults.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override how the active overlay config is found.
    #[arg(long, value_enum, value_name = "STRATEGY")]
    pub locator: Option<LocatorStrategy>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `CUSTOMHUD_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Drop to this user id before doing anything else.
    #[arg(long, value_name = "UID", requires = "run_as_gid")]
    pub run_as_uid: Option<u32>,

    /// Drop to this group id before doing anything else.
    #[arg(long, value_name = "GID", requires = "run_as_uid")]
    pub run_as_gid: Option<u32>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Create unit templates and the starter config if missing.
    Provision,

    /// Print `active` or `inactive`.
    Status,

    /// Back up the overlay config and start the watch unit.
    Enable,

    /// Restore the backed-up config and stop the watch unit.
    Disable,

    /// Print the active config path and its instance identifier; change nothing.
    Locate,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_and_subcommand() {
        let args = CliArgs::try_parse_from([
            "customhud",
            "--locator",
            "newest",
            "--log-level",
            "debug",
            "enable",
        ])
        .unwrap();

        assert_eq!(args.locator, Some(LocatorStrategy::Newest));
        assert!(matches!(args.command, Command::Enable));
    }

    #[test]
    fn uid_without_gid_is_rejected() {
        assert!(CliArgs::try_parse_from(["customhud", "--run-as-uid", "1000", "status"]).is_err());
    }
}
