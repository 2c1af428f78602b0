#![cfg(unix)]

mod common;
use crate::common::init_tracing;

use std::fs;
use std::io::ErrorKind;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use fabricmon_config::config::load;
use fabricmon_config::errors::ConfigError;

fn running_as_root() -> bool {
    nix::unistd::geteuid().is_root()
}

fn topology_document(enabled: bool, output_dir: &Path) -> String {
    format!(
        "counter_reset_threshold: 50\nTopology:\n  Enabled: {enabled}\n  output_dir: {}\n",
        output_dir.display()
    )
}

#[test]
fn read_only_dir_is_rejected_when_enabled() {
    init_tracing();

    // root bypasses permission bits, so the access check would succeed.
    if running_as_root() {
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    let locked = dir.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

    let result = load(topology_document(true, &locked).as_bytes());

    // Restore so the tempdir can be cleaned up.
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    match result {
        Err(ConfigError::TopologyOutputDir { path, source }) => {
            assert_eq!(path, locked);
            assert_eq!(source.kind(), ErrorKind::PermissionDenied);
        }
        other => panic!("Expected TopologyOutputDir error, got: {:?}", other),
    }
}

#[test]
fn read_only_dir_is_ignored_when_disabled() {
    init_tracing();

    let dir = tempfile::tempdir().unwrap();
    let locked = dir.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

    let result = load(topology_document(false, &locked).as_bytes());

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    let cfg = result.unwrap();
    assert!(!cfg.topology.enabled);
    assert_eq!(cfg.topology.output_dir, locked);
}
