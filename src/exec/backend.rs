// src/exec/backend.rs

//! Pluggable `systemctl` backend abstraction.

use std::fmt;
use std::future::Future;
use std::pin::Pin;

use crate::errors::Result;

/// The three unit operations customhud performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitAction {
    IsActive,
    EnableNow,
    DisableNow,
}

impl UnitAction {
    /// Arguments placed before `--user <unit>`.
    pub fn args(self) -> &'static [&'static str] {
        match self {
            UnitAction::IsActive => &["is-active"],
            UnitAction::EnableNow => &["enable", "--now"],
            UnitAction::DisableNow => &["disable", "--now"],
        }
    }
}

impl fmt::Display for UnitAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.args().join(" "))
    }
}

/// Exit status and captured stdout of one `systemctl` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// `-1` when the process was killed by a signal.
    pub code: i32,
    pub stdout: Vec<u8>,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == 0
    }

    /// `systemctl is-active` prints exactly `active\n` for a running unit.
    pub fn reports_active(&self) -> bool {
        self.stdout == b"active\n"
    }
}

/// Trait abstracting how `systemctl --user` is executed.
///
/// Production code uses [`super::SystemctlRunner`]; tests provide a fake that
/// doesn't spawn real processes.
pub trait SystemctlBackend: Send + Sync {
    /// Run `systemctl <action> --user <unit>`.
    ///
    /// A non-zero exit is *not* an error at this layer; spawn/wait failures
    /// are.
    fn run<'a>(
        &'a self,
        action: UnitAction,
        unit: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutput>> + Send + 'a>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_arguments_match_systemctl_syntax() {
        assert_eq!(UnitAction::IsActive.args(), ["is-active"]);
        assert_eq!(UnitAction::EnableNow.to_string(), "enable --now");
        assert_eq!(UnitAction::DisableNow.to_string(), "disable --now");
    }

    #[test]
    fn only_exact_active_line_counts() {
        let out = |s: &[u8]| CommandOutput {
            code: 0,
            stdout: s.to_vec(),
        };
        assert!(out(b"active\n").reports_active());
        assert!(!out(b"inactive\n").reports_active());
        assert!(!out(b"active").reports_active());
        assert!(!out(b"activating\n").reports_active());
    }
}
