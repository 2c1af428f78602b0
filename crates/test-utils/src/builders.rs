use std::path::Path;
use std::time::Duration;

use fabricmon_config::LogLevel;
use fabricmon_config::config::{Configuration, StorageTarget, validate_config};

/// Builder for `Configuration` to simplify test setup.
///
/// Starts from the loader defaults with a threshold that passes validation.
pub struct ConfigurationBuilder {
    config: Configuration,
}

impl ConfigurationBuilder {
    pub fn new() -> Self {
        Self {
            config: Configuration {
                reset_threshold: 50,
                ..Default::default()
            },
        }
    }

    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.config.poll_interval = interval;
        self
    }

    pub fn reset_threshold(mut self, value: u64) -> Self {
        self.config.reset_threshold = value;
        self
    }

    pub fn membership_key(mut self, key: u64) -> Self {
        self.config.membership_key = key;
        self
    }

    pub fn with_storage_target(mut self, target: StorageTarget) -> Self {
        self.config.storage_targets.push(target);
        self
    }

    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.config.logging.log_level = level;
        self
    }

    pub fn topology(mut self, enabled: bool, output_dir: impl AsRef<Path>) -> Self {
        self.config.topology.enabled = enabled;
        self.config.topology.output_dir = output_dir.as_ref().to_path_buf();
        self
    }

    /// Build and validate; panics if the result would be rejected by `load`.
    pub fn build(self) -> Configuration {
        validate_config(&self.config).expect("Failed to build valid config from builder");
        self.config
    }

    /// Build without validation, for exercising the error paths.
    pub fn build_unchecked(self) -> Configuration {
        self.config
    }
}

impl Default for ConfigurationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `StorageTarget`.
pub struct StorageTargetBuilder {
    target: StorageTarget,
}

impl StorageTargetBuilder {
    pub fn new(url: &str) -> Self {
        Self {
            target: StorageTarget {
                url: url.to_string(),
                ..Default::default()
            },
        }
    }

    pub fn database(mut self, name: &str) -> Self {
        self.target.database = name.to_string();
        self
    }

    pub fn credentials(mut self, username: &str, password: &str) -> Self {
        self.target.username = username.to_string();
        self.target.password = password.to_string();
        self
    }

    pub fn retention_policy(mut self, policy: &str) -> Self {
        self.target.retention_policy = Some(policy.to_string());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.target.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> StorageTarget {
        self.target
    }
}
