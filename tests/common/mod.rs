//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

/// Seconds per day
pub const DAY: u64 = 86_400;

/// Sample meminfo for a 4 GiB host
pub const SAMPLE_MEMINFO: &str = "MemTotal:        4194304 kB
MemFree:          812344 kB
MemAvailable:    2301220 kB
Buffers:           61212 kB
";

/// Isolated host layout
///
/// Holds a profile directory, fake sysfs/procfs files, and a config
/// directory, all in one temporary directory.
pub struct TestHost {
    /// Temporary root
    pub dir: TempDir,
}

impl TestHost {
    /// Create a host with an existing profile directory
    pub fn new() -> Self {
        let host = Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        };
        std::fs::create_dir_all(host.profile_dir()).expect("Failed to create profile dir");
        std::fs::create_dir_all(host.config_dir()).expect("Failed to create config dir");
        host
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn profile_dir(&self) -> PathBuf {
        self.root().join("userdata")
    }

    pub fn config_dir(&self) -> PathBuf {
        self.root().join("config")
    }

    pub fn thumbnails_dir(&self) -> PathBuf {
        self.profile_dir().join("Thumbnails")
    }

    pub fn carrier_path(&self) -> PathBuf {
        self.root().join("sys").join("carrier")
    }

    pub fn meminfo_path(&self) -> PathBuf {
        self.root().join("proc").join("meminfo")
    }

    /// Write a file relative to the temporary root
    pub fn create_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Fake the carrier and meminfo files and point the config at them
    pub fn with_system(&self, carrier: Option<&str>, meminfo: Option<&str>) -> &Self {
        if let Some(content) = carrier {
            self.create_file("sys/carrier", content);
        }
        if let Some(content) = meminfo {
            self.create_file("proc/meminfo", content);
        }
        self.write_config("");
        self
    }

    /// Write `autoexec.toml` with probe paths plus `extra` TOML
    pub fn write_config(&self, extra: &str) {
        let content = format!(
            "[probe]\ncarrier_path = {:?}\nmeminfo_path = {:?}\n{extra}",
            self.carrier_path().display().to_string(),
            self.meminfo_path().display().to_string(),
        );
        std::fs::write(self.config_dir().join("autoexec.toml"), content)
            .expect("Failed to write config");
    }

    /// Create a thumbnail aged `age_days`
    pub fn create_thumbnail(&self, name: &str, age_days: u64) -> PathBuf {
        let path = self.thumbnails_dir().join(name);
        std::fs::create_dir_all(path.parent().unwrap()).expect("Failed to create thumbnail dir");
        std::fs::write(&path, b"jpeg").expect("Failed to write thumbnail");
        let mtime = SystemTime::now() - Duration::from_secs(age_days * DAY);
        filetime::set_file_mtime(&path, filetime::FileTime::from_system_time(mtime))
            .expect("Failed to set mtime");
        path
    }

    /// Read the generated settings file
    pub fn read_settings(&self) -> String {
        std::fs::read_to_string(self.profile_dir().join("advancedsettings.xml"))
            .expect("Failed to read advancedsettings.xml")
    }

    /// Run the binary against this host
    pub fn run(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_autoexec"));
        cmd.env("AUTOEXEC_CONFIG_DIR", self.config_dir())
            .env_remove("AUTOEXEC_PROFILE_DIR")
            .env_remove("RUST_LOG")
            .arg("--profile-dir")
            .arg(self.profile_dir());
        for arg in args {
            cmd.arg(arg);
        }
        cmd.output().expect("Failed to execute autoexec")
    }
}

impl Default for TestHost {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the integer text of `<name>` from a document
pub fn leaf_value(xml: &str, name: &str) -> Option<u64> {
    let open = format!("<{name}>");
    let close = format!("</{name}>");
    let start = xml.find(&open)? + open.len();
    let end = xml[start..].find(&close)? + start;
    xml[start..end].trim().parse().ok()
}
