//! Logging collaborator
//!
//! The startup code never calls `tracing` directly. It reports through the
//! [`Logger`] trait so the host sink can be swapped and tests can assert on
//! the exact entries produced by a run.
//!
//! - [`TracingLogger`] - Production adapter forwarding to `tracing`
//! - [`MemoryLogger`] - Records `(level, message)` pairs

mod logger;
mod memory;
mod tracing_adapter;

pub use logger::{LogLevel, Logger};
pub use memory::{LogEntry, MemoryLogger};
pub use tracing_adapter::TracingLogger;
