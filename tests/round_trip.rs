mod common;
use crate::common::init_tracing;

use std::error::Error;
use std::time::Duration;

use fabricmon_config::LogLevel;
use fabricmon_config::config::load_from_str;
use fabricmon_config_test_utils::builders::{ConfigurationBuilder, StorageTargetBuilder};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn serialized_configuration_loads_back_unchanged() -> TestResult {
    init_tracing();

    let original = ConfigurationBuilder::new()
        .poll_interval(Duration::from_millis(1500))
        .reset_threshold(80)
        .membership_key(u64::MAX)
        .log_level(LogLevel::Fatal)
        .with_storage_target(
            StorageTargetBuilder::new("http://influx-a:8086")
                .database("fabric")
                .credentials("mon", "s3cr3t")
                .retention_policy("autogen")
                .timeout(Duration::from_secs(3))
                .build(),
        )
        .with_storage_target(StorageTargetBuilder::new("http://influx-b:8086").build())
        .topology(false, "/var/lib/fabricmon/topology")
        .build();

    let yaml = original.to_yaml()?;
    let decoded = load_from_str(&yaml)?;

    assert_eq!(decoded, original, "yaml was:\n{yaml}");
    Ok(())
}

#[test]
fn enabled_topology_round_trips_with_writable_dir() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let original = ConfigurationBuilder::new().topology(true, dir.path()).build();

    let decoded = load_from_str(&original.to_yaml()?)?;

    assert_eq!(decoded, original);
    Ok(())
}
