// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # betterrest-estimator
//!
//! Computes an ideal bedtime from a desired wake time, a desired amount of
//! sleep and the day's coffee intake.
//!
//! The regression model that predicts how much sleep is actually needed sits
//! behind the [`SleepModel`] trait and is injected into [`BedtimeEstimator`].
//! [`BedtimeForm`] wraps the estimator in the input session a front end drives:
//! every input change triggers a fresh estimate and a new [`BedtimeAlert`].
//!
//! ```rust,no_run
//! use betterrest_estimator::{BedtimeEstimator, LinearSleepModel, WakeTime, ClockFormat};
//!
//! let model = LinearSleepModel::load("models/sleep_calculator.json")?;
//! let estimator = BedtimeEstimator::with_model(model);
//!
//! let bedtime = estimator.estimate(WakeTime::parse("07:00")?, 8.0, 2)?;
//! println!("Go to bed at {}", bedtime.format(ClockFormat::TwelveHour));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod alert;
pub mod error;
pub mod estimator;
pub mod form;
pub mod model;
pub mod time;

pub use alert::BedtimeAlert;
pub use error::{EstimationError, EstimationResult};
pub use estimator::{
    Bedtime, BedtimeEstimator, MAX_COFFEE_CUPS, MAX_SLEEP_HOURS, MIN_SLEEP_HOURS,
};
pub use form::{BedtimeForm, COFFEE_STEP_CUPS, SLEEP_STEP_HOURS};
pub use model::{
    ArtifactSleepModel, LinearSleepModel, ModelArtifact, ModelError, ModelResult, SleepFeatures,
    SleepModel,
};
pub use time::{ClockFormat, WakeTime};
