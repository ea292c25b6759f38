// src/locate/newest.rs

//! Locate the active config as the newest `mangohud.*` scratch file.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::SystemTime;

use tracing::{debug, trace};

use super::ConfigLocator;
use crate::errors::{HudError, Result};
use crate::fs::FileSystem;

#[derive(Debug, Clone)]
pub struct NewestFileLocator {
    fs: Arc<dyn FileSystem>,
    dir: PathBuf,
    prefix: String,
}

impl NewestFileLocator {
    pub fn new(fs: Arc<dyn FileSystem>, dir: PathBuf, prefix: String) -> Self {
        Self { fs, dir, prefix }
    }

    fn is_candidate(&self, path: &std::path::Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with(&self.prefix) && n.len() > self.prefix.len())
            && self.fs.is_file(path)
    }
}

impl ConfigLocator for NewestFileLocator {
    fn locate(&self) -> Result<PathBuf> {
        let mut newest: Option<(SystemTime, PathBuf)> = None;

        for path in self.fs.read_dir(&self.dir)? {
            if !self.is_candidate(&path) {
                continue;
            }
            // Files can be removed between listing and stat.
            let modified = match self.fs.modified(&path) {
                Ok(t) => t,
                Err(err) => {
                    trace!(path = ?path, error = %err, "skipping candidate");
                    continue;
                }
            };

            if newest.as_ref().is_none_or(|(best, _)| modified > *best) {
                newest = Some((modified, path));
            }
        }

        match newest {
            Some((_, path)) => {
                debug!(path = ?path, "newest scratch config");
                Ok(path)
            }
            None => Err(HudError::Discovery(format!(
                "no '{}*' files in {:?}",
                self.prefix, self.dir
            ))),
        }
    }

    fn name(&self) -> &'static str {
        "newest"
    }
}
