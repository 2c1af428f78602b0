// src/config/loader.rs

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::Configuration;
use crate::config::validate::validate_config;
use crate::errors::{ConfigError, Result};

/// Decode a YAML document into a [`Configuration`] without semantic checks.
///
/// Decoding starts from [`Configuration::default`]: keys present in the
/// document overwrite the defaults, absent keys leave them alone. A blank
/// document (empty, whitespace, comments only, or an explicit `~`) therefore
/// yields the defaults unchanged.
///
/// Bytes that are not valid UTF-8 are a decode error like any other
/// malformed input; [`ConfigError::Read`] is only for failing reads.
///
/// Use [`load`] to also run validation.
pub fn decode<R: Read>(mut reader: R) -> Result<Configuration> {
    let mut contents = Vec::new();
    reader
        .read_to_end(&mut contents)
        .map_err(ConfigError::Read)?;

    decode_slice(&contents)
}

fn decode_slice(contents: &[u8]) -> Result<Configuration> {
    if is_blank_document(contents)? {
        return Ok(Configuration::default());
    }

    let config: Configuration = serde_yaml::from_slice(contents)?;
    Ok(config)
}

fn is_blank_document(contents: &[u8]) -> Result<bool> {
    if contents.iter().all(u8::is_ascii_whitespace) {
        return Ok(true);
    }
    let document: serde_yaml::Value = serde_yaml::from_slice(contents)?;
    Ok(document.is_null())
}

/// Decode and validate a configuration from a stream.
///
/// This is the entry point the daemon uses:
///
/// - reads the whole stream,
/// - applies defaults and decodes YAML (including the `log_level` names),
/// - checks `counter_reset_threshold` is within `[25, 100]`,
/// - if topology output is enabled, checks `output_dir` is writable.
///
/// The first failure is returned as-is; nothing is logged on the error path.
pub fn load<R: Read>(reader: R) -> Result<Configuration> {
    let config = decode(reader)?;
    validate_config(&config)?;

    debug!(
        poll_interval = ?config.poll_interval,
        reset_threshold = config.reset_threshold,
        storage_targets = config.storage_targets.len(),
        topology_enabled = config.topology.enabled,
        "configuration loaded"
    );

    Ok(config)
}

/// [`load`] over an in-memory document.
pub fn load_from_str(contents: &str) -> Result<Configuration> {
    load(contents.as_bytes())
}

/// [`load`] over the contents of a file.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Configuration> {
    let path = path.as_ref();
    let contents = fs::read(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    load(contents.as_slice())
}

/// Config file used when none is given on the command line.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("fabricmon.yml")
}
