// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Linear regression sleep model backed by a JSON artifact.
//!
//! Formula: `actual = intercept + wake * w_wake + estimated_sleep * w_sleep + coffee * w_coffee`

use super::{ModelError, ModelResult, SleepFeatures, SleepModel};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Artifact schema version this crate understands
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

const TARGET: &str = "actualSleep";

/// Regression weights, one per feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelCoefficients {
    pub wake: f64,
    pub estimated_sleep: f64,
    pub coffee: f64,
}

/// On-disk model artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub name: String,
    pub format_version: u32,
    /// Output column the weights were fitted against
    pub target: String,
    pub intercept: f64,
    pub coefficients: ModelCoefficients,
}

impl ModelArtifact {
    fn validate(&self) -> ModelResult<()> {
        if self.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(ModelError::Invalid(format!(
                "unsupported artifact format version {} (expected {})",
                self.format_version, ARTIFACT_FORMAT_VERSION
            )));
        }
        if self.target != TARGET {
            return Err(ModelError::Invalid(format!(
                "artifact predicts '{}', expected '{}'",
                self.target, TARGET
            )));
        }

        let weights = [
            ("intercept", self.intercept),
            ("coefficients.wake", self.coefficients.wake),
            ("coefficients.estimatedSleep", self.coefficients.estimated_sleep),
            ("coefficients.coffee", self.coefficients.coffee),
        ];
        if let Some((field, _)) = weights.iter().find(|(_, w)| !w.is_finite()) {
            return Err(ModelError::Invalid(format!("{} is not finite", field)));
        }

        Ok(())
    }
}

/// Linear sleep regression
#[derive(Debug, Clone)]
pub struct LinearSleepModel {
    artifact: ModelArtifact,
}

impl LinearSleepModel {
    pub fn new(artifact: ModelArtifact) -> ModelResult<Self> {
        artifact.validate()?;
        Ok(Self { artifact })
    }

    /// Parse and validate an artifact from JSON text
    pub fn from_json(json: &str) -> ModelResult<Self> {
        let artifact: ModelArtifact = serde_json::from_str(json)?;
        Self::new(artifact)
    }

    /// Read, parse and validate an artifact file
    pub fn load(path: impl AsRef<Path>) -> ModelResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let model = Self::from_json(&json)?;
        debug!(
            model = %model.artifact.name,
            path = %path.display(),
            "Loaded sleep model artifact"
        );
        Ok(model)
    }

    pub fn artifact(&self) -> &ModelArtifact {
        &self.artifact
    }
}

impl SleepModel for LinearSleepModel {
    fn predict(&self, features: &SleepFeatures) -> ModelResult<f64> {
        let c = &self.artifact.coefficients;
        Ok(self.artifact.intercept
            + c.wake * features.wake
            + c.estimated_sleep * features.estimated_sleep
            + c.coffee * features.coffee)
    }

    fn name(&self) -> &str {
        &self.artifact.name
    }
}
