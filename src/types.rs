use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Severity threshold for the monitoring daemon's log output.
///
/// Variants are ordered from most to least verbose, so `LogLevel::Debug <
/// LogLevel::Error` holds and "at least `warn`" is a plain comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Fatal,
    Panic,
}

impl LogLevel {
    /// Every level, least severe first.
    pub const ALL: [LogLevel; 7] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
        LogLevel::Panic,
    ];

    /// Canonical lowercase name, as written in config files.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Fatal => "fatal",
            LogLevel::Panic => "panic",
        }
    }

    /// Comma-separated list of the accepted names.
    pub fn names() -> String {
        LogLevel::ALL
            .iter()
            .map(|lvl| lvl.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Closest `tracing` level. `tracing` has nothing above `ERROR`, so
    /// `fatal` and `panic` collapse onto it.
    pub fn as_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error | LogLevel::Fatal | LogLevel::Panic => tracing::Level::ERROR,
        }
    }
}

/// Raised when a log level name is not one of [`LogLevel::ALL`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown log level {:?} (expected one of: {})", .text, LogLevel::names())]
pub struct UnknownLogLevel {
    /// The text exactly as it appeared in the input.
    pub text: String,
}

/// Map a textual log level onto [`LogLevel`].
///
/// Matching ignores surrounding whitespace and case, and accepts `warning`
/// as a synonym for `warn`. Anything else is rejected rather than replaced
/// by a default.
pub fn parse_log_level(text: &str) -> Result<LogLevel, UnknownLogLevel> {
    match text.trim().to_lowercase().as_str() {
        "trace" => Ok(LogLevel::Trace),
        "debug" => Ok(LogLevel::Debug),
        "info" => Ok(LogLevel::Info),
        "warn" | "warning" => Ok(LogLevel::Warn),
        "error" => Ok(LogLevel::Error),
        "fatal" => Ok(LogLevel::Fatal),
        "panic" => Ok(LogLevel::Panic),
        _ => Err(UnknownLogLevel {
            text: text.to_string(),
        }),
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = UnknownLogLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_log_level(s)
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        parse_log_level(&text).map_err(de::Error::custom)
    }
}

impl Serialize for LogLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
