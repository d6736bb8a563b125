//! Well-known paths

use std::path::PathBuf;

/// Sysfs directory holding per-interface network state
pub const SYS_CLASS_NET: &str = "/sys/class/net";

/// Kernel memory information table
pub const MEMINFO_PATH: &str = "/proc/meminfo";

/// Row label carrying total physical memory in kB
pub const MEMTOTAL_LABEL: &str = "MemTotal:";

/// Generated settings file name inside the profile directory
pub const ADVANCED_SETTINGS_FILE: &str = "advancedsettings.xml";

/// Thumbnail cache directory name inside the profile directory
pub const THUMBNAILS_SUBDIR: &str = "Thumbnails";

/// Symbolic prefix resolved to the profile directory
pub const SPECIAL_PROFILE: &str = "special://profile";

/// Config file name inside the config directory
pub const CONFIG_FILE: &str = "autoexec.toml";

/// Carrier status file for a network interface
pub fn carrier_path_for(interface: &str) -> PathBuf {
    PathBuf::from(SYS_CLASS_NET).join(interface).join("carrier")
}
