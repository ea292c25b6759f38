// src/exec/mod.rs

//! `systemctl --user` invocation.
//!
//! - [`backend`] provides the `SystemctlBackend` trait the controller talks
//!   to, plus the [`UnitAction`] / [`CommandOutput`] types.
//! - [`runner`] is the production implementation that spawns `systemctl`
//!   with `tokio::process::Command`.
//!
//! Tests replace the runner with a fake backend that records calls.

pub mod backend;
pub mod runner;

pub use backend::{CommandOutput, SystemctlBackend, UnitAction};
pub use runner::SystemctlRunner;
