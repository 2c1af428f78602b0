// src/logging.rs

//! Logging setup for `fabricmon-config` using `tracing` + `tracing-subscriber`.
//!
//! Priority for determining the log level:
//! 1. `--log-level` CLI flag (if provided)
//! 2. `FABRICMON_LOG` environment variable (e.g. "info", "debug")
//! 3. `logging.log_level` from the loaded configuration
//!
//! Logs are sent to STDERR so that stdout only carries the config dump.

use anyhow::{Result, anyhow};
use tracing_subscriber::fmt;

use crate::types::{LogLevel, parse_log_level};

/// Environment variable consulted when no CLI level is given.
pub const LOG_ENV_VAR: &str = "FABRICMON_LOG";

/// Pick the effective level from the CLI flag, the environment and the
/// configured value, in that order.
pub fn resolve_level(cli_level: Option<LogLevel>, configured: LogLevel) -> LogLevel {
    let env_value = std::env::var(LOG_ENV_VAR).ok();
    pick_level(cli_level, env_value.as_deref(), configured)
}

fn pick_level(cli_level: Option<LogLevel>, env_value: Option<&str>, configured: LogLevel) -> LogLevel {
    cli_level
        .or_else(|| env_value.and_then(|s| parse_log_level(s).ok()))
        .unwrap_or(configured)
}

/// Initialise global logging subscriber.
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(level: LogLevel) -> Result<()> {
    fmt()
        .with_max_level(level.as_tracing_level())
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to initialise logging: {e}"))
}
