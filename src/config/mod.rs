//! Configuration constants
//!
//! - [`defaults`] - Tuning values and thresholds
//! - [`paths`] - Well-known system and profile paths

pub mod defaults;
pub mod paths;
