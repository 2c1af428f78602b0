// src/config/mod.rs

//! Configuration loading and validation for FabricMon.
//!
//! Responsibilities:
//! - Define the YAML-backed data model and its defaults (`model.rs`).
//! - Decode a document from a stream or file (`loader.rs`).
//! - Enforce the semantic constraints serde cannot express (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{decode, default_config_path, load, load_from_path, load_from_str};
pub use model::{
    Configuration, DEFAULT_POLL_INTERVAL, LoggingSettings, StorageTarget, TopologySettings,
};
pub use validate::{
    RESET_THRESHOLD_RANGE, validate_config, validate_reset_threshold, validate_topology,
};
