//! Configuration writer
//!
//! Renders [`Settings`] and replaces `advancedsettings.xml`. The target path
//! comes from the profile path service. Failures are returned to the caller;
//! nothing here logs.

use std::path::Path;

use super::advanced_settings::render_advanced_settings;
use super::settings::Settings;
use crate::error::WriteError;
use crate::infra::filesystem::replace_file;

/// Write `advancedsettings.xml` to `settings_path`
///
/// The containing profile directory must already exist.
///
/// # Returns
///
/// * `Ok(())` - File replaced
/// * `Err(WriteError)` - Profile directory missing or the write failed
pub fn write_advanced_settings(
    settings_path: &Path,
    settings: &Settings,
) -> Result<(), WriteError> {
    if let Some(profile_dir) = settings_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !profile_dir.is_dir() {
            return Err(WriteError::ProfileDirMissing {
                path: profile_dir.to_path_buf(),
            });
        }
    }

    replace_file(settings_path, &render_advanced_settings(settings))?;
    Ok(())
}
