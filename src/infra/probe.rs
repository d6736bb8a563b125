//! Network and memory probe
//!
//! Reads two facts exposed by the kernel: the carrier state of the wired
//! interface and total physical memory. The `read_*` functions report why a
//! probe failed; [`is_wired_connected`] and [`total_physical_memory_bytes`]
//! collapse every failure to `false` / `0`.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::defaults::{DEFAULT_INTERFACE, KIB};
use crate::config::paths::{carrier_path_for, MEMINFO_PATH, MEMTOTAL_LABEL};
use crate::error::ProbeError;

/// Locations of the system files read by the probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbePaths {
    /// Carrier status file, content `1` means link up
    pub carrier: PathBuf,
    /// Line-oriented memory table
    pub meminfo: PathBuf,
}

impl ProbePaths {
    /// Paths for a given network interface on a standard Linux host
    pub fn for_interface(interface: &str) -> Self {
        Self {
            carrier: carrier_path_for(interface),
            meminfo: PathBuf::from(MEMINFO_PATH),
        }
    }
}

impl Default for ProbePaths {
    fn default() -> Self {
        Self::for_interface(DEFAULT_INTERFACE)
    }
}

/// Facts gathered by one probe run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SystemFacts {
    /// Wired link has carrier
    pub wired: bool,
    /// Total physical memory in bytes, `0` if unknown
    pub total_memory: u64,
}

/// Read the carrier state from `path`
pub fn read_carrier(path: &Path) -> Result<bool, ProbeError> {
    let content = std::fs::read_to_string(path).map_err(|e| ProbeError::Unreadable {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;
    Ok(content.trim() == "1")
}

/// Whether the wired interface reports a link
///
/// Missing, unreadable, or any content other than `1` means `false`.
pub fn is_wired_connected(path: &Path) -> bool {
    read_carrier(path).unwrap_or(false)
}

/// Extract `MemTotal` in bytes from meminfo-formatted text
///
/// Only the first `MemTotal:` line is considered. The value is in kB.
pub fn parse_mem_total(content: &str, source: &Path) -> Result<u64, ProbeError> {
    let line = content
        .lines()
        .find(|line| line.starts_with(MEMTOTAL_LABEL))
        .ok_or_else(|| ProbeError::MissingField {
            path: source.to_path_buf(),
            field: MEMTOTAL_LABEL.to_string(),
        })?;

    let invalid = || ProbeError::InvalidValue {
        path: source.to_path_buf(),
        field: MEMTOTAL_LABEL.to_string(),
        value: line.to_string(),
    };

    let kib: u64 = line
        .split_whitespace()
        .nth(1)
        .ok_or_else(invalid)?
        .parse()
        .map_err(|_| invalid())?;

    kib.checked_mul(KIB).ok_or_else(invalid)
}

/// Read total physical memory in bytes from `path`
pub fn read_mem_total(path: &Path) -> Result<u64, ProbeError> {
    let content = std::fs::read_to_string(path).map_err(|e| ProbeError::Unreadable {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;
    parse_mem_total(&content, path)
}

/// Total physical memory in bytes, `0` if it cannot be determined
pub fn total_physical_memory_bytes(path: &Path) -> u64 {
    read_mem_total(path).unwrap_or(0)
}

/// Run both probes
pub fn probe_system(paths: &ProbePaths) -> SystemFacts {
    SystemFacts {
        wired: is_wired_connected(&paths.carrier),
        total_memory: total_physical_memory_bytes(&paths.meminfo),
    }
}
