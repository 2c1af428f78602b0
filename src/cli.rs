// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::Parser;

use crate::config::default_config_path;
use crate::types::LogLevel;

/// Command-line arguments for `fabricmon-config`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "fabricmon-config",
    version,
    about = "Load and validate a FabricMon configuration file.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (YAML).
    #[arg(long, value_name = "PATH", default_value_os_t = default_config_path())]
    pub config: PathBuf,

    /// Logging level (trace, debug, info, warn, error, fatal, panic).
    ///
    /// If omitted, `FABRICMON_LOG` or the config's `logging.log_level` is used.
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Print the validated configuration as YAML.
    #[arg(long)]
    pub print: bool,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
