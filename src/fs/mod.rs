// src/fs/mod.rs

//! Filesystem access used by the locators, the toggler and provisioning.
//!
//! Production code uses [`RealFileSystem`]; unit tests swap in
//! [`mock::MockFileSystem`].

use std::fmt::Debug;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::errors::{HudError, Result};

pub mod mock;

/// Abstract filesystem interface.
pub trait FileSystem: Send + Sync + Debug {
    fn read(&self, path: &Path) -> Result<Vec<u8>>;

    /// Create or truncate `path` and write `contents`, creating parent
    /// directories as needed.
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;
    fn exists(&self, path: &Path) -> bool;
    fn is_file(&self, path: &Path) -> bool;
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Return a list of entries in a directory.
    /// Returns full paths.
    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>>;

    fn modified(&self, path: &Path) -> Result<SystemTime>;

    /// Bump the modification time of an existing file to "now".
    fn touch(&self, path: &Path) -> Result<()>;
}

/// Implementation that uses `std::fs`.
#[derive(Debug, Clone, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).map_err(|e| HudError::io(path, e))
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| HudError::io(parent, e))?;
        }
        let mut file = fs::File::create(path).map_err(|e| HudError::io(path, e))?;
        file.write_all(contents)
            .and_then(|_| file.flush())
            .map_err(|e| HudError::io(path, e))?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).map_err(|e| HudError::io(path, e))
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path).map_err(|e| HudError::io(path, e))? {
            let entry = entry.map_err(|e| HudError::io(path, e))?;
            entries.push(entry.path());
        }
        Ok(entries)
    }

    fn modified(&self, path: &Path) -> Result<SystemTime> {
        fs::metadata(path)
            .and_then(|m| m.modified())
            .map_err(|e| HudError::io(path, e))
    }

    fn touch(&self, path: &Path) -> Result<()> {
        // Open without truncating; only the timestamp changes.
        let file = fs::OpenOptions::new()
            .write(true)
            .open(path)
            .map_err(|e| HudError::io(path, e))?;
        file.set_modified(SystemTime::now())
            .map_err(|e| HudError::io(path, e))
    }
}
