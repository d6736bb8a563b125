//! Startup orchestration
//!
//! One entry point run once per application launch: probe the system,
//! derive and write the settings file, then sweep stale thumbnails. This is
//! the only place that turns errors into log entries; nothing propagates to
//! the caller.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use serde::Serialize;

use super::settings::{derive_settings, Settings};
use super::startup_config::StartupConfig;
use super::sweep::{sweep_thumbnails, SweepOutcome};
use super::writer::write_advanced_settings;
use crate::config::defaults::{DEFAULT_RETENTION_DAYS, LOG_PREFIX};
use crate::infra::dirs::ProfileDirs;
use crate::infra::probe::{probe_system, ProbePaths, SystemFacts};
use crate::log::Logger;
use crate::{log_debug, log_error, log_info};

/// Inputs for one startup run
#[derive(Debug, Clone)]
pub struct StartupOptions {
    /// `special://profile/advancedsettings.xml`
    pub settings_path: PathBuf,
    /// `special://profile/Thumbnails`
    pub thumbnails_dir: PathBuf,
    /// System files to probe
    pub probe_paths: ProbePaths,
    /// Thumbnail retention window in days
    pub retention_days: u64,
    /// Run the thumbnail sweep
    pub sweep_enabled: bool,
}

impl StartupOptions {
    /// Options with default probe paths and retention for `dirs`
    pub fn new(dirs: &ProfileDirs) -> Self {
        Self {
            settings_path: dirs.advanced_settings_path(),
            thumbnails_dir: dirs.thumbnails_dir(),
            probe_paths: ProbePaths::default(),
            retention_days: DEFAULT_RETENTION_DAYS,
            sweep_enabled: true,
        }
    }

    /// Combine the config file with resolved directories
    ///
    /// A profile directory set in the config file wins over `dirs`.
    pub fn from_config(config: &StartupConfig, dirs: &ProfileDirs) -> Self {
        let dirs = config
            .profile
            .dir
            .as_deref()
            .map_or_else(|| dirs.clone(), ProfileDirs::with_profile_dir);

        Self {
            probe_paths: config.probe_paths(),
            retention_days: config.retention_days(),
            sweep_enabled: config.sweep_enabled(),
            ..Self::new(&dirs)
        }
    }
}

/// Result of the settings write
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WriteOutcome {
    /// File replaced
    Written { path: PathBuf },
    /// Write failed, reason attached
    Failed { error: String },
}

/// Everything one startup run did
#[derive(Debug, Clone, Serialize)]
pub struct StartupReport {
    pub facts: SystemFacts,
    pub settings: Settings,
    pub write: WriteOutcome,
    pub sweep: SweepOutcome,
}

/// Derive settings from `facts` and write them to `settings_path`
///
/// Logs one NOTICE line on success or one ERROR line on failure.
pub fn apply_settings(
    settings_path: &Path,
    facts: SystemFacts,
    logger: &dyn Logger,
) -> (Settings, WriteOutcome) {
    let settings = derive_settings(facts.wired, facts.total_memory);

    let outcome = match write_advanced_settings(settings_path, &settings) {
        Ok(()) => {
            log_info!(
                logger,
                "{LOG_PREFIX} Written advancedsettings.xml: memorysize={} nfschunksize={} smbchunksize={} readfactor={} wired={}",
                settings.memory_size,
                settings.nfs_chunk_size,
                settings.smb_chunk_size,
                settings.read_factor,
                facts.wired
            );
            WriteOutcome::Written {
                path: settings_path.to_path_buf(),
            }
        }
        Err(e) => {
            log_error!(logger, "{LOG_PREFIX} Failed to write advancedsettings.xml: {e}");
            WriteOutcome::Failed {
                error: e.to_string(),
            }
        }
    };

    (settings, outcome)
}

/// Sweep the thumbnail cache and log the retention window used
pub fn clean_thumbnails(
    thumbnails_dir: &Path,
    retention_days: u64,
    now: SystemTime,
    logger: &dyn Logger,
) -> SweepOutcome {
    let outcome = sweep_thumbnails(thumbnails_dir, retention_days, now);
    match outcome {
        SweepOutcome::Swept { retention_days } => {
            log_info!(
                logger,
                "{LOG_PREFIX} Thumbnail cleanup complete, removed files older than {retention_days} days"
            );
        }
        SweepOutcome::Skipped => {
            log_debug!(
                logger,
                "{LOG_PREFIX} No thumbnail directory at {}",
                thumbnails_dir.display()
            );
        }
        SweepOutcome::Disabled => {}
    }
    outcome
}

/// Run the full startup sequence
///
/// Infallible: every failure is logged and reflected in the report.
pub fn run_startup(options: &StartupOptions, logger: &dyn Logger) -> StartupReport {
    let facts = probe_system(&options.probe_paths);
    log_debug!(
        logger,
        "{LOG_PREFIX} Probed wired={} total_memory={}",
        facts.wired,
        facts.total_memory
    );

    let (settings, write) = apply_settings(&options.settings_path, facts, logger);

    let sweep = if options.sweep_enabled {
        clean_thumbnails(
            &options.thumbnails_dir,
            options.retention_days,
            SystemTime::now(),
            logger,
        )
    } else {
        log_debug!(logger, "{LOG_PREFIX} Thumbnail cleanup disabled");
        SweepOutcome::Disabled
    };

    StartupReport {
        facts,
        settings,
        write,
        sweep,
    }
}
