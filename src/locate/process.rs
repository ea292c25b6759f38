// src/locate/process.rs

//! Locate the active config through the overlay process's environment.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, trace};

use super::ConfigLocator;
use crate::errors::{HudError, Result};
use crate::fs::FileSystem;

#[derive(Debug, Clone)]
pub struct ProcessLocator {
    fs: Arc<dyn FileSystem>,
    proc_root: PathBuf,
    binary: String,
    env_var: String,
}

impl ProcessLocator {
    pub fn new(
        fs: Arc<dyn FileSystem>,
        proc_root: PathBuf,
        binary: String,
        env_var: String,
    ) -> Self {
        Self {
            fs,
            proc_root,
            binary,
            env_var,
        }
    }

    /// Numeric entries of the process table, in ascending pid order.
    fn pids(&self) -> Result<Vec<u32>> {
        let mut pids: Vec<u32> = self
            .fs
            .read_dir(&self.proc_root)?
            .iter()
            .filter_map(|p| p.file_name()?.to_str()?.parse().ok())
            .collect();
        pids.sort_unstable();
        Ok(pids)
    }

    /// Pids whose command line mentions the overlay binary, lowest first.
    ///
    /// Pids that vanish or can't be read between listing and reading are
    /// skipped.
    pub fn overlay_pids(&self) -> Result<Vec<u32>> {
        let needle = self.binary.as_bytes();
        let mut matches = Vec::new();

        for pid in self.pids()? {
            let path = self.proc_root.join(pid.to_string()).join("cmdline");
            let cmdline = match self.fs.read(&path) {
                Ok(bytes) => bytes,
                Err(err) if err.is_not_found() => {
                    trace!(pid, "process exited during scan");
                    continue;
                }
                Err(err) => {
                    debug!(pid, error = %err, "skipping unreadable process");
                    continue;
                }
            };

            if contains(&cmdline, needle) {
                matches.push(pid);
            }
        }

        if matches.is_empty() {
            return Err(HudError::Discovery(format!(
                "no running process matching '{}' under {:?}",
                self.binary, self.proc_root
            )));
        }
        Ok(matches)
    }

    /// Config path from one process's environment, if it carries the variable.
    fn config_of(&self, pid: u32) -> Option<PathBuf> {
        let path = self.proc_root.join(pid.to_string()).join("environ");
        match self.fs.read(&path) {
            Ok(environ) => self.config_from_environ(&environ),
            Err(err) => {
                debug!(pid, error = %err, "skipping unreadable environment");
                None
            }
        }
    }

    /// Pull `<env_var>` out of a NUL-separated `KEY=VALUE` environment block.
    pub fn config_from_environ(&self, environ: &[u8]) -> Option<PathBuf> {
        let prefix = format!("{}=", self.env_var);
        environ
            .split(|b| *b == 0)
            .filter_map(|entry| entry.strip_prefix(prefix.as_bytes()))
            .filter(|value| !value.is_empty())
            .last()
            .map(|value| PathBuf::from(String::from_utf8_lossy(value).into_owned()))
    }
}

impl ConfigLocator for ProcessLocator {
    fn locate(&self) -> Result<PathBuf> {
        // gamescope is started with `--mangoapp` and matches too, but only
        // mangoapp itself carries the config variable.
        let pids = self.overlay_pids()?;
        for &pid in &pids {
            if let Some(config) = self.config_of(pid) {
                debug!(pid, binary = %self.binary, config = ?config, "found overlay process");
                return Ok(config);
            }
            trace!(pid, env_var = %self.env_var, "matching process lacks config variable");
        }

        Err(HudError::Discovery(format!(
            "no process matching '{}' has {} in its environment (checked {:?})",
            self.binary, self.env_var, pids
        )))
    }

    fn name(&self) -> &'static str {
        "process"
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|w| w == needle)
}
