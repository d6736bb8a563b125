//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no business logic - that belongs in the [`crate::core`] module.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use commands::{CommandContext, Commands};

/// autoexec - media-center startup configurator
///
/// Writes advancedsettings.xml tuned to the host's memory and network link,
/// then removes stale thumbnails.
#[derive(Parser, Debug)]
#[command(name = "autoexec")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (-v for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output in JSON format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Profile directory (defaults to the host's userdata directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub profile_dir: Option<PathBuf>,

    /// Config file (defaults to autoexec.toml in the config directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Tracing level implied by the verbosity flags
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            return tracing::Level::ERROR;
        }
        match self.verbose {
            0 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        }
    }

    /// Execute the CLI command
    ///
    /// Without a subcommand the full startup sequence runs.
    pub fn run(self) -> Result<()> {
        let ctx = CommandContext::resolve(
            self.profile_dir.as_deref(),
            self.config.as_deref(),
            self.json,
            self.quiet,
        )?;
        self.command.unwrap_or(Commands::Run).run(&ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::parse_from(["autoexec"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.log_level(), tracing::Level::INFO);
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(
            Cli::parse_from(["autoexec", "-v"]).log_level(),
            tracing::Level::DEBUG
        );
        assert_eq!(
            Cli::parse_from(["autoexec", "-vv"]).log_level(),
            tracing::Level::DEBUG
        );
        assert_eq!(
            Cli::parse_from(["autoexec", "-q"]).log_level(),
            tracing::Level::ERROR
        );
    }

    #[test]
    fn test_sweep_retention_flag() {
        let cli = Cli::parse_from(["autoexec", "sweep", "--retention-days", "7"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Sweep {
                retention_days: Some(7)
            })
        ));
    }
}
