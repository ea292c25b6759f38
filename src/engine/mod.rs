// src/engine/mod.rs

//! Core toggle logic.
//!
//! - [`controller`] owns the enable/disable sequences and the state query.
//! - [`provision`] creates the unit templates and starter config on startup.

pub mod controller;
pub mod provision;

pub use controller::HudController;
pub use provision::ProvisionReport;
