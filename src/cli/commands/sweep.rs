//! CLI implementation for `autoexec sweep`

use std::time::SystemTime;

use anyhow::Result;

use super::CommandContext;
use crate::cli::output::{print_info, print_json, print_success};
use crate::core::startup::clean_thumbnails;
use crate::core::sweep::SweepOutcome;
use crate::log::TracingLogger;

/// Execute the sweep command
///
/// `--retention-days` overrides the configured window. Runs even when the
/// config file disables the sweep for startup.
pub fn execute(ctx: &CommandContext, retention_days: Option<u64>) -> Result<()> {
    let retention_days = retention_days.unwrap_or(ctx.options.retention_days);
    let outcome = clean_thumbnails(
        &ctx.options.thumbnails_dir,
        retention_days,
        SystemTime::now(),
        &TracingLogger,
    );

    if ctx.json {
        return print_json(&outcome);
    }
    if ctx.quiet {
        return Ok(());
    }

    match outcome {
        SweepOutcome::Swept { retention_days } => {
            print_success(&format!("Swept thumbnails older than {retention_days} days"));
        }
        SweepOutcome::Skipped | SweepOutcome::Disabled => {
            print_info("No thumbnail directory, sweep skipped");
        }
    }
    Ok(())
}
