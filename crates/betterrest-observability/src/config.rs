//! Observability configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error) for crates without a debug flag
    pub level: String,

    /// Console log format
    pub format: LogFormat,

    /// Base directory for run folders (file logging only)
    pub log_dir: PathBuf,

    /// Retention policy for run folders (file logging only)
    pub retention: RetentionPolicy,
}

/// Log format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{}', expected 'text' or 'json'", other)),
        }
    }
}

/// Which run folders survive a cleanup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetentionPolicy {
    /// Keep runs younger than this many days
    pub days: u64,
    /// Keep at most this many runs, newest first
    pub runs: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
            format: LogFormat::Text,
            log_dir: PathBuf::from("./logs"),
            retention: RetentionPolicy::default(),
        }
    }
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        RetentionPolicy { days: 30, runs: 10 }
    }
}

impl LoggingConfig {
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("json".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!(" Text ".parse::<LogFormat>(), Ok(LogFormat::Text));
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_builders() {
        let config = LoggingConfig::default()
            .with_level("warn")
            .with_format(LogFormat::Json);
        assert_eq!(config.level, "warn");
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.retention, RetentionPolicy { days: 30, runs: 10 });
    }
}
