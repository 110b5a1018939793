// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Estimation error types

use crate::model::ModelError;
use thiserror::Error;

/// Failure to produce a bedtime
///
/// Every variant means "no result": the estimator never returns a partial or
/// defaulted bedtime.
#[derive(Error, Debug)]
pub enum EstimationError {
    /// An input is outside its accepted domain
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The regression model could not be loaded or evaluated
    #[error("Model unavailable: {0}")]
    ModelUnavailable(#[from] ModelError),

    /// The model answered with a value that is not a usable sleep duration
    #[error("Prediction failed: {0}")]
    Prediction(String),
}

/// Result type for estimation operations
pub type EstimationResult<T> = Result<T, EstimationError>;
