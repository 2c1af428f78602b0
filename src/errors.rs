// src/errors.rs

//! Crate-wide error type and result alias.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// The document is not well-formed YAML, or a field could not be
    /// converted to its target type (this includes unknown log level names).
    #[error("failed to decode configuration: {0}")]
    Decode(#[from] serde_yaml::Error),

    #[error("failed to read configuration stream: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("counter_reset_threshold must be between {min} and {max} (got {value})")]
    ResetThresholdOutOfRange { value: u64, min: u64, max: u64 },

    #[error("topology output directory {path:?}: {source}")]
    TopologyOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode configuration: {0}")]
    Encode(#[source] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
