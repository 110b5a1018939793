//! Common test utilities and helpers

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Write a linear model artifact that needs `hours * 3600 + cups * coffee_seconds`
pub fn write_artifact(dir: &Path, coffee_seconds: f64) -> PathBuf {
    let path = dir.join("sleep_calculator.json");
    let json = format!(
        r#"{{
  "name": "cli-test",
  "format_version": 1,
  "target": "actualSleep",
  "intercept": 0.0,
  "coefficients": {{ "wake": 0.0, "estimatedSleep": 3600.0, "coffee": {coffee_seconds:?} }}
}}"#
    );
    fs::write(&path, json).expect("Failed to write artifact");
    path
}

/// Write a config file pointing at `artifact`
pub fn write_config(dir: &Path, artifact: &Path, extra: &str) -> PathBuf {
    let path = dir.join("betterrest_configuration.toml");
    let toml = format!(
        "[model]\nartifact_path = {:?}\n{}\n",
        artifact.display().to_string(),
        extra
    );
    fs::write(&path, toml).expect("Failed to write config");
    path
}
