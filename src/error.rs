//! Error types for autoexec
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// System probe errors
///
/// Never surfaced to the user: the probes collapse these to their
/// "unknown" defaults (`false` / `0`).
#[derive(Error, Debug)]
pub enum ProbeError {
    /// System file missing or unreadable
    #[error("Failed to read '{path}': {error}")]
    Unreadable { path: PathBuf, error: String },

    /// Labeled row not present in a system table
    #[error("Field '{field}' not found in '{path}'")]
    MissingField { path: PathBuf, field: String },

    /// Row present but its value could not be parsed
    #[error("Invalid value for '{field}' in '{path}': {value}")]
    InvalidValue {
        path: PathBuf,
        field: String,
        value: String,
    },
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to write file
    #[error("Failed to write file '{path}': {error}")]
    WriteFile { path: PathBuf, error: String },

    /// Failed to read file
    #[error("Failed to read file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },
}

/// Configuration writer errors
#[derive(Error, Debug)]
pub enum WriteError {
    /// Profile directory does not exist
    #[error("Profile directory not found: {path}")]
    ProfileDirMissing { path: PathBuf },

    /// Underlying filesystem failure
    #[error(transparent)]
    Filesystem(#[from] FilesystemError),
}

/// Configuration file errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file '{path}': {error}")]
    ReadError { path: String, error: String },

    /// Failed to parse config file
    #[error("Failed to parse config file '{path}': {error}")]
    ParseError { path: String, error: String },

    /// Value outside the accepted range
    #[error("Invalid value for '{key}' in config file: {message}")]
    InvalidValue { key: String, message: String },
}
