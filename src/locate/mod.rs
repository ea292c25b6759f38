// src/locate/mod.rs

//! Discovery of the overlay's currently active config file.
//!
//! - [`process`] reads the config path out of the running overlay process's
//!   environment.
//! - [`newest`] falls back to the most recently modified scratch file.
//!
//! Both sit behind [`ConfigLocator`]; [`build_locator`] picks one from the
//! settings once, and the controller sticks with it.

pub mod newest;
pub mod process;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::Settings;
use crate::errors::{HudError, Result};
use crate::fs::FileSystem;
use crate::types::LocatorStrategy;

pub use newest::NewestFileLocator;
pub use process::ProcessLocator;

/// Strategy for finding the active overlay config file.
pub trait ConfigLocator: Send + Sync {
    fn locate(&self) -> Result<PathBuf>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

/// A located config file together with the unit instance it maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveConfig {
    pub path: PathBuf,
    pub identifier: String,
}

impl ActiveConfig {
    pub fn from_path(path: PathBuf) -> Result<Self> {
        let identifier = derive_identifier(&path)?;
        Ok(Self { path, identifier })
    }
}

/// The instance suffix of a scratch config: `/tmp/mangohud.abcd` → `abcd`.
pub fn derive_identifier(path: &Path) -> Result<String> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| HudError::InvalidIdentifier(path.to_path_buf()))?;

    match name.rsplit_once('.') {
        Some((_, suffix)) if !suffix.is_empty() => Ok(suffix.to_string()),
        _ => Err(HudError::InvalidIdentifier(path.to_path_buf())),
    }
}

pub fn build_locator(settings: &Settings, fs: Arc<dyn FileSystem>) -> Box<dyn ConfigLocator> {
    match settings.locator.strategy {
        LocatorStrategy::Process => Box::new(ProcessLocator::new(
            fs,
            settings.paths.proc_root.clone(),
            settings.locator.binary.clone(),
            settings.locator.env_var.clone(),
        )),
        LocatorStrategy::Newest => Box::new(NewestFileLocator::new(
            fs,
            settings.paths.scratch_dir.clone(),
            settings.paths.scratch_prefix.clone(),
        )),
    }
}
