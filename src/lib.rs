//! # BetterRest - bedtime calculator
//!
//! Estimates when to fall asleep from three inputs: the desired wake-up time,
//! the desired amount of sleep and the day's coffee intake. A pre-trained
//! regression model predicts how much sleep is actually needed; the bedtime
//! is the wake time minus that prediction.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! betterrest = "0.1"
//! ```
//!
//! ```rust,no_run
//! use betterrest::prelude::*;
//!
//! let config = load_config_or_default(None, None)?;
//! let model = LinearSleepModel::load(&config.model.artifact_path)?;
//! let estimator = BedtimeEstimator::with_model(model);
//!
//! let outcome = estimator.estimate(WakeTime::parse("07:00")?, 8.0, 2);
//! let alert = BedtimeAlert::from_outcome(&outcome, ClockFormat::TwelveHour);
//! println!("{}\n{}", alert.title, alert.message);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ### Driving a form
//!
//! ```rust,no_run
//! use betterrest::prelude::*;
//!
//! let estimator = BedtimeEstimator::with_model(ArtifactSleepModel::new("models/sleep_calculator.json"));
//! let mut form = BedtimeForm::new(estimator);
//!
//! // Every change recalculates
//! form.increment_coffee();
//! let alert = form.set_wake_time(WakeTime::new(6, 30)?);
//! println!("{}", alert.message);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Core: betterrest-estimator                             │
//! │  (SleepModel, BedtimeEstimator, BedtimeForm)            │
//! └─────────────────────────────────────────────────────────┘
//!                         ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │  Infrastructure: betterrest-config,                     │
//! │  betterrest-observability                               │
//! │  (TOML + overrides, tracing setup)                      │
//! └─────────────────────────────────────────────────────────┘
//!                         ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │  Front end: betterrest-cli                              │
//! │  (one-shot and interactive terminal use)                │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## License
//!
//! Apache-2.0

// Re-export core
pub use betterrest_estimator as estimator;

// Re-export infrastructure
pub use betterrest_config as config;
pub use betterrest_observability as observability;

/// Prelude - commonly used types and traits
pub mod prelude {
    pub use crate::estimator::{
        ArtifactSleepModel, Bedtime, BedtimeAlert, BedtimeEstimator, BedtimeForm, ClockFormat,
        EstimationError, EstimationResult, LinearSleepModel, SleepFeatures, SleepModel, WakeTime,
    };

    pub use crate::config::{load_config, load_config_or_default, validate_config, BetterRestConfig};
}
