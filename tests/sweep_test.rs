//! Integration tests for the thumbnail sweep

mod common;

use common::{TestHost, SAMPLE_MEMINFO};

#[test]
fn test_run_sweeps_stale_thumbnails() {
    let host = TestHost::new();
    host.with_system(Some("1"), Some(SAMPLE_MEMINFO));
    let recent = host.create_thumbnail("0/0a1b2c3d.jpg", 10);
    let stale = host.create_thumbnail("5/5e6f7a8b.jpg", 61);
    let ancient = host.create_thumbnail("Video/f/f00dcafe.png", 90);

    let output = host.run(&[]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success());

    assert!(recent.exists());
    assert!(!stale.exists());
    assert!(!ancient.exists());
    assert!(stderr.contains("older than 60 days"));
}

#[test]
fn test_sweep_command_with_custom_retention() {
    let host = TestHost::new();
    host.with_system(None, None);
    let three = host.create_thumbnail("a/three.jpg", 3);
    let eight = host.create_thumbnail("b/eight.jpg", 8);

    let output = host.run(&["sweep", "--retention-days", "7"]);
    assert!(output.status.success());

    assert!(three.exists());
    assert!(!eight.exists());
    assert!(!host.profile_dir().join("advancedsettings.xml").exists());
}

#[test]
fn test_sweep_missing_thumbnails_dir_is_noop() {
    let host = TestHost::new();
    host.with_system(None, None);

    let output = host.run(&["sweep", "--json"]);
    assert!(output.status.success());

    let outcome: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(outcome["status"], "skipped");
    assert!(!host.thumbnails_dir().exists());
}

#[test]
fn test_config_disables_startup_sweep() {
    let host = TestHost::new();
    host.with_system(Some("1"), Some(SAMPLE_MEMINFO));
    host.write_config("[sweep]\nenabled = false\n");
    let stale = host.create_thumbnail("a/old.jpg", 120);

    let output = host.run(&["--json"]);
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["sweep"]["status"], "disabled");
    assert!(stale.exists());
}

#[test]
fn test_config_retention_days_applies() {
    let host = TestHost::new();
    host.with_system(Some("1"), Some(SAMPLE_MEMINFO));
    host.write_config("[sweep]\nretention_days = 30\n");
    let twenty = host.create_thumbnail("a/twenty.jpg", 20);
    let forty = host.create_thumbnail("a/forty.jpg", 40);

    assert!(host.run(&["-q"]).status.success());

    assert!(twenty.exists());
    assert!(!forty.exists());
}
