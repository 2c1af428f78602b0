// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod types;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{Configuration, load_from_path};

pub use crate::config::{decode, load, load_from_str};
pub use crate::errors::ConfigError;
pub use crate::types::{LogLevel, UnknownLogLevel, parse_log_level};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading + validation
/// - logging setup (the loaded config supplies the fallback level)
/// - the human-readable summary and optional YAML dump
pub fn run(args: CliArgs) -> Result<()> {
    let cfg = load_from_path(&args.config)
        .with_context(|| format!("loading config from {:?}", args.config))?;

    let level = logging::resolve_level(args.log_level, cfg.logging.log_level);
    logging::init_logging(level)?;
    info!(path = ?args.config, %level, "configuration is valid");

    print_summary(&cfg);

    if args.print {
        println!();
        print!("{}", cfg.to_yaml()?);
    }

    Ok(())
}

/// Print the settings the daemon will run with. Passwords are never shown.
fn print_summary(cfg: &Configuration) {
    println!("fabricmon configuration");
    println!("  poll_interval = {:?}", cfg.poll_interval);
    println!("  counter_reset_threshold = {}", cfg.reset_threshold);
    println!("  m_key = {:#x}", cfg.membership_key);
    println!("  log_level = {}", cfg.logging.log_level);
    println!();

    println!("influxdb ({}):", cfg.storage_targets.len());
    for target in cfg.storage_targets.iter() {
        println!("  - {}", target.url);
        println!("      database: {}", target.database);
        if !target.username.is_empty() {
            println!("      username: {}", target.username);
        }
        if let Some(ref policy) = target.retention_policy {
            println!("      retention_policy: {policy}");
        }
        if let Some(timeout) = target.timeout {
            println!("      timeout: {timeout:?}");
        }
    }

    if cfg.topology.enabled {
        println!("topology: enabled, output_dir = {:?}", cfg.topology.output_dir);
    } else {
        println!("topology: disabled");
    }

    debug!("summary printed");
}
