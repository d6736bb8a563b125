//! Thumbnail cache sweep
//!
//! Deletes cached thumbnails whose modification time is older than the
//! retention window. Best effort: a file that cannot be inspected or
//! removed is skipped and the sweep moves on.

use std::path::Path;
use std::time::{Duration, SystemTime};

use serde::Serialize;

use crate::config::defaults::SECONDS_PER_DAY;

/// Outcome of a sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SweepOutcome {
    /// Tree was walked with this retention window
    Swept { retention_days: u64 },
    /// Thumbnail directory does not exist
    Skipped,
    /// Sweep turned off by configuration
    Disabled,
}

/// Instant before which files are considered stale
///
/// `None` when the window reaches back past the epoch.
pub fn retention_cutoff(now: SystemTime, retention_days: u64) -> Option<SystemTime> {
    now.checked_sub(Duration::from_secs(
        retention_days.saturating_mul(SECONDS_PER_DAY),
    ))
}

/// Sweep `thumbnails_dir`, deleting files last modified before the cutoff
///
/// Directories themselves are left in place.
pub fn sweep_thumbnails(thumbnails_dir: &Path, retention_days: u64, now: SystemTime) -> SweepOutcome {
    if !thumbnails_dir.is_dir() {
        return SweepOutcome::Skipped;
    }

    if let Some(cutoff) = retention_cutoff(now, retention_days) {
        walkdir::WalkDir::new(thumbnails_dir)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .for_each(|entry| {
                let stale = entry
                    .metadata()
                    .ok()
                    .and_then(|m| m.modified().ok())
                    .is_some_and(|modified| modified < cutoff);
                if stale {
                    let _ = std::fs::remove_file(entry.path());
                }
            });
    }

    SweepOutcome::Swept { retention_days }
}
