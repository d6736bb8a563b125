//! Core business logic module
//!
//! # Submodules
//!
//! - [`settings`] - Derivation of tuning values from system facts
//! - [`advanced_settings`] - `advancedsettings.xml` rendering
//! - [`writer`] - Writing the settings file into the profile directory
//! - [`sweep`] - Stale thumbnail removal
//! - [`startup_config`] - Optional `autoexec.toml` configuration
//! - [`startup`] - Startup sequence and its logging

pub mod advanced_settings;
pub mod settings;
pub mod startup;
pub mod startup_config;
pub mod sweep;
pub mod writer;
