// src/errors.rs

//! Crate-wide error type.
//!
//! Every fallible step returns a [`HudError`] so callers can tell a
//! discovery failure from an I/O failure from a `systemctl` failure. Only the
//! host-facing [`crate::plugin::Plugin`] swallows them (after logging).

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HudError {
    /// No running overlay process / candidate file could be found.
    #[error("Discovery error: {0}")]
    Discovery(String),

    #[error("Cannot derive instance identifier from {0:?}")]
    InvalidIdentifier(PathBuf),

    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("systemctl {action} {unit} failed: {reason}")]
    Command {
        action: String,
        unit: String,
        reason: String,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HudError {
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        HudError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// True for I/O errors caused by a path that does not exist.
    ///
    /// Used by the process locator to skip pids that exited mid-scan.
    pub fn is_not_found(&self) -> bool {
        matches!(self, HudError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

pub type Result<T> = std::result::Result<T, HudError>;
