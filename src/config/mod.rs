// src/config/mod.rs

//! Settings loading and validation for customhud.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a settings file from disk (`loader.rs`).
//! - Validate paths and names before anything touches the system (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path, load_or_default};
pub use model::{LocatorSection, PathsSection, RawSettings, Settings, SystemdSection};
