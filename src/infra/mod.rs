//! Infrastructure layer
//!
//! Reads system state and touches the filesystem on behalf of [`crate::core`].

pub mod dirs;
pub mod filesystem;
pub mod probe;
