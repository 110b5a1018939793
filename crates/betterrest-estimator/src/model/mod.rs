// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Regression model boundary
//!
//! The estimator only knows [`SleepModel`]: a function from
//! `(wake seconds, desired sleep hours, coffee cups)` to the predicted actual
//! sleep in seconds. Implementations decide where the weights come from.

mod artifact;
mod linear;

pub use artifact::ArtifactSleepModel;
pub use linear::{LinearSleepModel, ModelArtifact, ModelCoefficients, ARTIFACT_FORMAT_VERSION};

use thiserror::Error;

/// Model input vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SleepFeatures {
    /// Wake time as seconds since midnight
    pub wake: f64,
    /// Desired sleep, hours
    pub estimated_sleep: f64,
    /// Coffee intake, cups
    pub coffee: f64,
}

/// Errors raised while loading or evaluating a model
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Failed to read model artifact {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid model: {0}")]
    Invalid(String),
}

/// Result type for model operations
pub type ModelResult<T> = Result<T, ModelError>;

/// Pre-trained sleep regression
///
/// Implementations must be deterministic: identical features give identical
/// predictions.
pub trait SleepModel: Send + Sync + std::fmt::Debug {
    /// Predicted actual sleep, in seconds
    fn predict(&self, features: &SleepFeatures) -> ModelResult<f64>;

    /// Human-readable model name for logs
    fn name(&self) -> &str;
}
