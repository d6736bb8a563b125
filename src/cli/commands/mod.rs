//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod run;
pub mod settings;
pub mod sweep;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Subcommand;

use crate::core::startup::StartupOptions;
use crate::core::startup_config::StartupConfig;
use crate::infra::dirs::ProfileDirs;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write advancedsettings.xml and sweep thumbnails (default)
    Run,

    /// Print the settings that would be written, without writing
    Settings,

    /// Delete stale thumbnails only
    Sweep {
        /// Delete thumbnails not modified for this many days
        #[arg(long, value_name = "DAYS")]
        retention_days: Option<u64>,
    },
}

impl Commands {
    /// Execute the command
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        match self {
            Self::Run => run::execute(ctx),
            Self::Settings => settings::execute(ctx),
            Self::Sweep { retention_days } => sweep::execute(ctx, retention_days),
        }
    }
}

/// Resolved inputs shared by all commands
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub options: StartupOptions,
    pub json: bool,
    pub quiet: bool,
}

impl CommandContext {
    /// Resolve directories and configuration
    ///
    /// Precedence for the profile directory: `--profile-dir`, the config
    /// file, `AUTOEXEC_PROFILE_DIR`, then the platform default.
    pub fn resolve(
        profile_dir: Option<&Path>,
        config_path: Option<&Path>,
        json: bool,
        quiet: bool,
    ) -> Result<Self> {
        let dirs = profile_dir.map_or_else(ProfileDirs::new, ProfileDirs::with_profile_dir);

        let mut config = match config_path {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file not found: {}", path.display());
                }
                StartupConfig::load_from_path(path)
            }
            None => StartupConfig::load(&dirs),
        }
        .context("Failed to load configuration")?;

        if let Some(dir) = profile_dir {
            config.profile.dir = Some(dir.to_path_buf());
        }
        let options = StartupOptions::from_config(&config, &dirs);

        tracing::debug!("Writing settings to {}", options.settings_path.display());

        Ok(Self {
            options,
            json,
            quiet,
        })
    }
}
