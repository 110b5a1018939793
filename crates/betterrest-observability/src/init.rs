// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Logging initialization
//!
//! Console output always goes to stderr so stdout stays free for results.
//! With the `file-logging` feature, JSON logs are also written into a
//! timestamped run folder, and old run folders are pruned.

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use crate::cli::CrateDebugFlags;
use crate::config::{LogFormat, LoggingConfig, RetentionPolicy};

const RUN_PREFIX: &str = "run_";
const RUN_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

fn build_filter(debug_flags: &CrateDebugFlags, config: &LoggingConfig) -> Result<EnvFilter> {
    let directives = debug_flags.to_filter_string(&config.level);
    EnvFilter::try_new(&directives)
        .with_context(|| format!("Invalid log filter: {}", directives))
}

/// Install a console-only subscriber
pub fn init_console_logging(debug_flags: &CrateDebugFlags, config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(debug_flags, config)?;

    let installed = match config.format {
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
    };

    installed.map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))
}

/// Keeps file writers alive; logs are flushed when this is dropped
#[cfg(feature = "file-logging")]
pub struct LoggingGuard {
    _file_guard: tracing_appender::non_blocking::WorkerGuard,
    log_dir: PathBuf,
}

#[cfg(feature = "file-logging")]
impl LoggingGuard {
    /// Run folder of this process
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

/// Initialize console logging plus a JSON log file
///
/// Creates a timestamped folder structure:
/// ```text
/// ./logs/
///   └── run_20250101_120000/
///       └── betterrest.log.2025-01-01
/// ```
#[cfg(feature = "file-logging")]
pub fn init_logging(debug_flags: &CrateDebugFlags, config: &LoggingConfig) -> Result<LoggingGuard> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::{Layer, Registry};

    let now = Utc::now();
    let run_folder = config
        .log_dir
        .join(format!("{}{}", RUN_PREFIX, now.format(RUN_TIMESTAMP_FORMAT)));
    std::fs::create_dir_all(&run_folder)
        .with_context(|| format!("Failed to create log directory: {}", run_folder.display()))?;

    prune_log_runs(&config.log_dir, now, config.retention)?;

    let console_layer = match config.format {
        LogFormat::Text => tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_filter(build_filter(debug_flags, config)?)
            .boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_filter(build_filter(debug_flags, config)?)
            .boxed(),
    };

    let file_appender = tracing_appender::rolling::daily(&run_folder, "betterrest.log");
    let (non_blocking, file_guard) = tracing_appender::non_blocking(file_appender);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .with_filter(build_filter(debug_flags, config)?)
        .boxed();

    Registry::default()
        .with(vec![console_layer, file_layer])
        .try_init()
        .map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))?;

    Ok(LoggingGuard {
        _file_guard: file_guard,
        log_dir: run_folder,
    })
}

/// Remove run folders outside the retention policy
///
/// Folders older than `retention.days` are removed, then only the newest
/// `retention.runs` (at least one) are kept. Entries that are not
/// `run_YYYYmmdd_HHMMSS` directories are never touched.
///
/// Returns the number of folders removed.
pub fn prune_log_runs(
    base_log_dir: &Path,
    now: DateTime<Utc>,
    retention: RetentionPolicy,
) -> Result<usize> {
    if !base_log_dir.exists() {
        return Ok(0);
    }

    let mut runs: Vec<(PathBuf, DateTime<Utc>)> = Vec::new();
    for entry in std::fs::read_dir(base_log_dir)
        .with_context(|| format!("Failed to list {}", base_log_dir.display()))?
    {
        let path = entry?.path();
        if !path.is_dir() {
            continue;
        }
        let stamp = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| n.strip_prefix(RUN_PREFIX))
            .and_then(|s| NaiveDateTime::parse_from_str(s, RUN_TIMESTAMP_FORMAT).ok());
        if let Some(stamp) = stamp {
            runs.push((path, Utc.from_utc_datetime(&stamp)));
        }
    }

    // Newest first
    runs.sort_by(|a, b| b.1.cmp(&a.1));

    let cutoff = i64::try_from(retention.days)
        .ok()
        .and_then(chrono::Duration::try_days)
        .and_then(|max_age| now.checked_sub_signed(max_age))
        .unwrap_or(DateTime::<Utc>::MIN_UTC);
    let keep_runs = retention.runs.max(1);

    let mut removed = 0;
    for (index, (path, stamp)) in runs.iter().enumerate() {
        if index < keep_runs && *stamp >= cutoff {
            continue;
        }
        match std::fs::remove_dir_all(path) {
            Ok(()) => removed += 1,
            Err(e) => tracing::warn!(
                path = %path.display(),
                error = %e,
                "Failed to remove old log directory"
            ),
        }
    }

    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn at(stamp: &str) -> DateTime<Utc> {
        Utc.from_utc_datetime(&NaiveDateTime::parse_from_str(stamp, RUN_TIMESTAMP_FORMAT).unwrap())
    }

    #[test]
    fn test_missing_dir_is_fine() {
        let dir = tempdir().unwrap();
        let removed = prune_log_runs(
            &dir.path().join("nope"),
            Utc::now(),
            RetentionPolicy::default(),
        )
        .unwrap();
        assert_eq!(removed, 0);
    }

    #[test]
    fn test_prunes_by_age_and_count() {
        let dir = tempdir().unwrap();
        for name in [
            "run_20250101_080000",
            "run_20250301_080000",
            "run_20250305_080000",
            "run_20250310_080000",
            "notes",
        ] {
            fs::create_dir(dir.path().join(name)).unwrap();
        }
        fs::write(dir.path().join("run_20200101_000000"), "a file, not a run").unwrap();

        let removed = prune_log_runs(
            dir.path(),
            at("20250311_000000"),
            RetentionPolicy { days: 30, runs: 2 },
        )
        .unwrap();

        assert_eq!(removed, 2);
        assert!(dir.path().join("run_20250310_080000").exists());
        assert!(dir.path().join("run_20250305_080000").exists());
        assert!(!dir.path().join("run_20250301_080000").exists());
        assert!(!dir.path().join("run_20250101_080000").exists());
        assert!(dir.path().join("notes").exists());
        assert!(dir.path().join("run_20200101_000000").exists());
    }

    #[test]
    fn test_newest_run_always_survives() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("run_20250310_080000")).unwrap();

        let removed = prune_log_runs(
            dir.path(),
            at("20250311_000000"),
            RetentionPolicy { days: 30, runs: 0 },
        )
        .unwrap();

        assert_eq!(removed, 0);
        assert!(dir.path().join("run_20250310_080000").exists());
    }

    #[test]
    fn test_bad_level_is_rejected() {
        let config = LoggingConfig::default().with_level("very=loud=please");
        assert!(build_filter(&CrateDebugFlags::default(), &config).is_err());
    }

    #[cfg(feature = "file-logging")]
    #[test]
    fn test_init_logging_writes_into_run_folder() {
        let dir = tempdir().unwrap();
        let mut config = LoggingConfig::default();
        config.log_dir = dir.path().to_path_buf();

        let guard = init_logging(&CrateDebugFlags::default(), &config).unwrap();
        let run_folder = guard.log_dir().to_path_buf();
        tracing::info!(check = "run-folder", "File logging is up");
        drop(guard);

        assert_eq!(run_folder.parent(), Some(dir.path()));
        let name = run_folder.file_name().and_then(|n| n.to_str()).unwrap();
        let stamp = name.strip_prefix(RUN_PREFIX).unwrap();
        assert!(NaiveDateTime::parse_from_str(stamp, RUN_TIMESTAMP_FORMAT).is_ok());

        let log_files: Vec<_> = fs::read_dir(&run_folder)
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with("betterrest.log"))
            })
            .collect();
        assert_eq!(log_files.len(), 1);

        let contents = fs::read_to_string(&log_files[0]).unwrap();
        let line = contents
            .lines()
            .find(|line| line.contains("File logging is up"))
            .unwrap();
        let event: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(event["level"], "INFO");
        assert_eq!(event["fields"]["check"], "run-folder");
    }
}
