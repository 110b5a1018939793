//! Common test utilities and helpers

#![allow(dead_code)]

use betterrest_estimator::{ModelError, ModelResult, SleepFeatures, SleepModel};
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Reference artifact shipped with the workspace
pub fn reference_artifact() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("models")
        .join("sleep_calculator.json")
}

/// Artifact JSON with the given weights
pub fn artifact_json(intercept: f64, wake: f64, estimated_sleep: f64, coffee: f64) -> String {
    format!(
        r#"{{
  "name": "test-model",
  "format_version": 1,
  "target": "actualSleep",
  "intercept": {intercept:?},
  "coefficients": {{ "wake": {wake:?}, "estimatedSleep": {estimated_sleep:?}, "coffee": {coffee:?} }}
}}"#
    )
}

/// Sleeps exactly what was asked for
#[derive(Debug)]
pub struct ExactSleepModel;

impl SleepModel for ExactSleepModel {
    fn predict(&self, features: &SleepFeatures) -> ModelResult<f64> {
        Ok(features.estimated_sleep * 3600.0)
    }

    fn name(&self) -> &str {
        "exact"
    }
}

/// Always fails as if the artifact were missing
#[derive(Debug)]
pub struct MissingModel;

impl SleepModel for MissingModel {
    fn predict(&self, _features: &SleepFeatures) -> ModelResult<f64> {
        Err(ModelError::Invalid("artifact not bundled".to_string()))
    }

    fn name(&self) -> &str {
        "missing"
    }
}
