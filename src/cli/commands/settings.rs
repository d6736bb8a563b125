//! CLI implementation for `autoexec settings`
//!
//! Probes the system and prints the document `run` would write.

use anyhow::Result;
use serde_json::json;

use super::CommandContext;
use crate::cli::output::print_json;
use crate::core::advanced_settings::render_advanced_settings;
use crate::core::settings::derive_settings;
use crate::infra::probe::probe_system;

/// Execute the settings command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let facts = probe_system(&ctx.options.probe_paths);
    let settings = derive_settings(facts.wired, facts.total_memory);

    if ctx.json {
        return print_json(&json!({
            "facts": facts,
            "settings": settings,
        }));
    }

    print!("{}", render_advanced_settings(&settings));
    Ok(())
}
