//! CLI implementation for `autoexec run`
//!
//! Full startup sequence. Never fails: a failed write is reported only
//! through the error log entry.

use anyhow::Result;

use super::CommandContext;
use crate::cli::output::{print_info, print_json, print_success};
use crate::core::startup::{run_startup, WriteOutcome};
use crate::core::sweep::SweepOutcome;
use crate::log::TracingLogger;

/// Execute the run command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let report = run_startup(&ctx.options, &TracingLogger);

    if ctx.json {
        return print_json(&report);
    }
    if ctx.quiet {
        return Ok(());
    }

    if let WriteOutcome::Written { path } = &report.write {
        print_success(&format!("Wrote {}", path.display()));
    }

    match report.sweep {
        SweepOutcome::Swept { retention_days } => {
            print_success(&format!("Swept thumbnails older than {retention_days} days"));
        }
        SweepOutcome::Skipped => print_info("No thumbnail directory, sweep skipped"),
        SweepOutcome::Disabled => print_info("Thumbnail sweep disabled"),
    }

    Ok(())
}
