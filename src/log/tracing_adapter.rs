//! Adapter from [`Logger`] to the `tracing` crate

use std::fmt::Arguments;

use super::{LogLevel, Logger};

/// Logger that delegates to `tracing`
///
/// Output depends on the subscriber installed by the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, args: Arguments<'_>) {
        match level {
            LogLevel::Debug => tracing::debug!("{}", args),
            LogLevel::Info => tracing::info!("{}", args),
            LogLevel::Error => tracing::error!("{}", args),
        }
    }
}
