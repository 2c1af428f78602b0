// src/config/model.rs

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, Result};
use crate::types::LogLevel;

/// Default for `poll_interval`.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Top-level configuration as read from a YAML document.
///
/// ```yaml
/// poll_interval: 10s
/// counter_reset_threshold: 75
/// m_key: 0
/// influxdb:
///   - url: http://localhost:8086
///     database: fabricmon
///     username: fabricmon
///     password: secret
///     retention_policy: autogen
///     timeout: 5s
/// logging:
///   log_level: info
/// topology:
///   enabled: true
///   output_dir: /var/lib/fabricmon/topology
/// ```
///
/// Keys are lowercase; the capitalised spellings (`InfluxDB`, `Logging`,
/// `Topology`, `URL`, `Enabled`, ...) are accepted as aliases. Every field
/// is optional: missing keys keep the value from [`Configuration::default`],
/// unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Configuration {
    /// How often the fabric is sampled. Humantime string, e.g. `"10s"`.
    /// A key with an empty value resets it to zero.
    #[serde(with = "zero_if_null")]
    pub poll_interval: Duration,

    /// Percentage of a counter's range at which it is reset. Must be within
    /// `[25, 100]`; see [`crate::config::validate`].
    #[serde(rename = "counter_reset_threshold")]
    pub reset_threshold: u64,

    /// Opaque fabric membership key, passed through untouched.
    #[serde(rename = "m_key")]
    pub membership_key: u64,

    /// InfluxDB sinks, in document order.
    #[serde(rename = "influxdb", alias = "InfluxDB")]
    pub storage_targets: Vec<StorageTarget>,

    #[serde(alias = "Logging")]
    pub logging: LoggingSettings,

    #[serde(alias = "Topology")]
    pub topology: TopologySettings,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            reset_threshold: 0,
            membership_key: 0,
            storage_targets: Vec::new(),
            logging: LoggingSettings::default(),
            topology: TopologySettings::default(),
        }
    }
}

impl Configuration {
    /// Serialise back to YAML, using the same keys the loader reads.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(ConfigError::Encode)
    }
}

/// Humantime durations where an explicit null (`poll_interval:` or `~`)
/// decodes to `Duration::ZERO` instead of failing.
mod zero_if_null {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        humantime_serde::serialize(duration, serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Option<humantime_serde::Serde<Duration>> = Option::deserialize(deserializer)?;
        Ok(value.map(|d| d.into_inner()).unwrap_or(Duration::ZERO))
    }
}

/// One InfluxDB instance to write samples to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageTarget {
    #[serde(alias = "URL")]
    pub url: String,

    #[serde(alias = "Database")]
    pub database: String,

    #[serde(alias = "Username")]
    pub username: String,

    #[serde(alias = "Password")]
    pub password: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention_policy: Option<String>,

    #[serde(
        alias = "Timeout",
        with = "humantime_serde",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeout: Option<Duration>,
}

/// `logging` section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub log_level: LogLevel,
}

/// `topology` section.
///
/// `output_dir` is only checked when `enabled` is true.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TopologySettings {
    #[serde(alias = "Enabled")]
    pub enabled: bool,

    pub output_dir: PathBuf,
}
