//! autoexec - media-center startup configurator
//!
//! Tunes the host's cache and network buffering by writing
//! `advancedsettings.xml` into the profile directory, then removes cached
//! thumbnails that have not been touched within the retention window.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Settings derivation, rendering, sweep, orchestration
//! - [`infra`] - System probe, directory resolution, file writes
//! - [`log`] - Logging collaborator used by the startup run
//! - [`config`] - Constants
//! - [`error`] - Error types and handling
//!
//! The whole sequence is available as [`core::startup::run_startup`].

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;
pub mod log;

#[cfg(test)]
pub mod test_utils;
