// src/config/validate.rs

use std::io;
use std::ops::RangeInclusive;
use std::path::Path;

use crate::config::model::{Configuration, TopologySettings};
use crate::errors::{ConfigError, Result};

/// Accepted values for `counter_reset_threshold`, in percent.
pub const RESET_THRESHOLD_RANGE: RangeInclusive<u64> = 25..=100;

/// Run every semantic check on a decoded configuration.
///
/// Checks run in a fixed order and stop at the first failure:
/// 1. `counter_reset_threshold` range,
/// 2. topology output directory writability.
pub fn validate_config(cfg: &Configuration) -> Result<()> {
    validate_reset_threshold(cfg.reset_threshold)?;
    validate_topology(&cfg.topology)?;
    Ok(())
}

pub fn validate_reset_threshold(value: u64) -> Result<()> {
    if !RESET_THRESHOLD_RANGE.contains(&value) {
        return Err(ConfigError::ResetThresholdOutOfRange {
            value,
            min: *RESET_THRESHOLD_RANGE.start(),
            max: *RESET_THRESHOLD_RANGE.end(),
        });
    }
    Ok(())
}

/// When topology output is enabled, make sure the process can write to
/// `output_dir`. A disabled section is never inspected, so a missing or
/// read-only directory is fine in that case.
pub fn validate_topology(topology: &TopologySettings) -> Result<()> {
    if !topology.enabled {
        return Ok(());
    }

    probe_writable(&topology.output_dir).map_err(|source| ConfigError::TopologyOutputDir {
        path: topology.output_dir.clone(),
        source,
    })
}

/// Single `access(2)` call with `W_OK`; nothing is created or modified.
#[cfg(unix)]
fn probe_writable(path: &Path) -> io::Result<()> {
    use nix::unistd::{AccessFlags, access};

    access(path, AccessFlags::W_OK).map_err(io::Error::from)
}

#[cfg(not(unix))]
fn probe_writable(path: &Path) -> io::Result<()> {
    let metadata = std::fs::metadata(path)?;
    if metadata.permissions().readonly() {
        return Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "directory is read-only",
        ));
    }
    Ok(())
}
