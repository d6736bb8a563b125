//! Startup configuration file
//!
//! Reads optional overrides from `autoexec.toml` in the config directory.
//! Every key is optional; a missing file means all defaults.
//!
//! ```toml
//! [profile]
//! dir = "/storage/.kodi/userdata"
//!
//! [probe]
//! interface = "eth0"
//!
//! [sweep]
//! enabled = true
//! retention_days = 60
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::defaults::{DEFAULT_INTERFACE, DEFAULT_RETENTION_DAYS};
use crate::config::paths::{carrier_path_for, MEMINFO_PATH};
use crate::error::ConfigError;
use crate::infra::dirs::ProfileDirs;
use crate::infra::filesystem::read_file;
use crate::infra::probe::ProbePaths;

/// Configuration for one startup run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StartupConfig {
    /// Profile directory override
    #[serde(default)]
    pub profile: ProfileConfig,

    /// System probe settings
    #[serde(default)]
    pub probe: ProbeConfig,

    /// Thumbnail sweep settings
    #[serde(default)]
    pub sweep: SweepConfig,
}

/// Profile directory settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileConfig {
    /// Absolute profile directory
    pub dir: Option<PathBuf>,
}

/// Probe settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProbeConfig {
    /// Wired interface name
    pub interface: Option<String>,

    /// Explicit carrier file, takes precedence over `interface`
    pub carrier_path: Option<PathBuf>,

    /// Explicit meminfo file
    pub meminfo_path: Option<PathBuf>,
}

/// Sweep settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SweepConfig {
    /// Run the thumbnail sweep
    pub enabled: Option<bool>,

    /// Retention window in days
    pub retention_days: Option<u64>,
}

impl StartupConfig {
    /// Load configuration from the config directory
    pub fn load(dirs: &ProfileDirs) -> Result<Self, ConfigError> {
        Self::load_from_path(&dirs.config_file_path())
    }

    /// Load configuration from a specific path
    ///
    /// If the file doesn't exist, returns the default configuration.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = read_file(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_toml(&content).map_err(|e| match e {
            ConfigError::ParseError { error, .. } => ConfigError::ParseError {
                path: path.display().to_string(),
                error,
            },
            other => other,
        })
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: String::new(),
            error: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(interface) = &self.probe.interface {
            if interface.is_empty() || interface.contains('/') || interface == ".." {
                return Err(ConfigError::InvalidValue {
                    key: "probe.interface".to_string(),
                    message: format!("'{interface}' is not a network interface name"),
                });
            }
        }
        Ok(())
    }

    /// Effective probe file locations
    #[must_use]
    pub fn probe_paths(&self) -> ProbePaths {
        let interface = self.probe.interface.as_deref().unwrap_or(DEFAULT_INTERFACE);
        ProbePaths {
            carrier: self
                .probe
                .carrier_path
                .clone()
                .unwrap_or_else(|| carrier_path_for(interface)),
            meminfo: self
                .probe
                .meminfo_path
                .clone()
                .unwrap_or_else(|| PathBuf::from(MEMINFO_PATH)),
        }
    }

    /// Whether the sweep should run
    #[must_use]
    pub fn sweep_enabled(&self) -> bool {
        self.sweep.enabled.unwrap_or(true)
    }

    /// Effective retention window in days
    #[must_use]
    pub fn retention_days(&self) -> u64 {
        self.sweep.retention_days.unwrap_or(DEFAULT_RETENTION_DAYS)
    }
}
