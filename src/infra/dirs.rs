//! Profile and config directory resolution
//!
//! Stands in for the host application's path service. The profile
//! directory is the per-user configuration root (`special://profile`).
//!
//! Environment variables can override default directories:
//! - `AUTOEXEC_PROFILE_DIR` - Override profile directory
//! - `AUTOEXEC_CONFIG_DIR` - Override config directory

use std::env;
use std::path::{Path, PathBuf};

use crate::config::paths::{
    ADVANCED_SETTINGS_FILE, CONFIG_FILE, SPECIAL_PROFILE, THUMBNAILS_SUBDIR,
};

/// Environment variable names for directory overrides
pub const ENV_PROFILE_DIR: &str = "AUTOEXEC_PROFILE_DIR";
pub const ENV_CONFIG_DIR: &str = "AUTOEXEC_CONFIG_DIR";

/// Application name used in config paths
const APP_NAME: &str = "autoexec";

/// Host application data directory name
const HOST_APP_NAME: &str = "kodi";

/// Profile subdirectory under the host data directory
const USERDATA_SUBDIR: &str = "userdata";

/// Directory provider for the configurator
#[derive(Debug, Clone)]
pub struct ProfileDirs {
    profile_dir: PathBuf,
    config_dir: PathBuf,
}

impl ProfileDirs {
    /// Resolve directories from environment or platform defaults
    #[must_use]
    pub fn new() -> Self {
        Self {
            profile_dir: Self::resolve_profile_dir(),
            config_dir: Self::resolve_config_dir(),
        }
    }

    /// Use an explicit profile directory, config directory resolved as usual
    #[must_use]
    pub fn with_profile_dir(profile_dir: impl Into<PathBuf>) -> Self {
        Self {
            profile_dir: profile_dir.into(),
            config_dir: Self::resolve_config_dir(),
        }
    }

    /// Host profile directory
    ///
    /// - Linux: `$XDG_DATA_HOME/kodi/userdata` or `~/.kodi/userdata`
    #[must_use]
    pub fn profile_dir(&self) -> PathBuf {
        self.profile_dir.clone()
    }

    /// Configurator config directory
    #[must_use]
    pub fn config_dir(&self) -> PathBuf {
        self.config_dir.clone()
    }

    /// Generated `advancedsettings.xml` path (`special://profile/advancedsettings.xml`)
    #[must_use]
    pub fn advanced_settings_path(&self) -> PathBuf {
        self.translate_path(&format!("{SPECIAL_PROFILE}/{ADVANCED_SETTINGS_FILE}"))
    }

    /// Thumbnail cache root (`special://profile/Thumbnails`)
    #[must_use]
    pub fn thumbnails_dir(&self) -> PathBuf {
        self.translate_path(&format!("{SPECIAL_PROFILE}/{THUMBNAILS_SUBDIR}"))
    }

    /// Path to `autoexec.toml`
    #[must_use]
    pub fn config_file_path(&self) -> PathBuf {
        self.config_dir().join(CONFIG_FILE)
    }

    /// Map a `special://profile/...` path onto the profile directory
    ///
    /// Any other path is returned unchanged.
    #[must_use]
    pub fn translate_path(&self, path: &str) -> PathBuf {
        match path.strip_prefix(SPECIAL_PROFILE) {
            Some(rest) => {
                let rest = rest.trim_start_matches('/');
                if rest.is_empty() {
                    self.profile_dir()
                } else {
                    self.profile_dir.join(Path::new(rest))
                }
            }
            None => PathBuf::from(path),
        }
    }

    fn resolve_profile_dir() -> PathBuf {
        if let Ok(path) = env::var(ENV_PROFILE_DIR) {
            return PathBuf::from(path);
        }

        Self::platform_profile_dir()
    }

    fn resolve_config_dir() -> PathBuf {
        if let Ok(path) = env::var(ENV_CONFIG_DIR) {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .map(|p| p.join(APP_NAME))
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .map(|h| h.join(".config").join(APP_NAME))
                    .unwrap_or_else(|| PathBuf::from(".").join(".config").join(APP_NAME))
            })
    }

    fn platform_profile_dir() -> PathBuf {
        dirs::data_dir()
            .map(|p| p.join(HOST_APP_NAME).join(USERDATA_SUBDIR))
            .unwrap_or_else(|| {
                // Legacy location used by the host on most installs
                dirs::home_dir()
                    .map(|h| h.join(".kodi").join(USERDATA_SUBDIR))
                    .unwrap_or_else(|| PathBuf::from(".").join(".kodi").join(USERDATA_SUBDIR))
            })
    }
}

impl Default for ProfileDirs {
    fn default() -> Self {
        Self::new()
    }
}
