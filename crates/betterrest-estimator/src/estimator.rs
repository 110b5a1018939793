// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Bedtime estimation
//!
//! Converts the wake time to seconds since midnight, asks the injected model
//! how much sleep is actually needed and walks back from the wake time by
//! that amount.

use crate::error::{EstimationError, EstimationResult};
use crate::model::{SleepFeatures, SleepModel};
use crate::time::{ClockFormat, WakeTime};
use chrono::{Duration, NaiveTime};
use std::sync::Arc;
use tracing::{debug, warn};

/// Lowest accepted desired sleep, in hours
pub const MIN_SLEEP_HOURS: f64 = 4.0;
/// Highest accepted desired sleep, in hours
pub const MAX_SLEEP_HOURS: f64 = 12.0;
/// Highest accepted daily coffee intake, in cups
pub const MAX_COFFEE_CUPS: u32 = 20;

const SECONDS_PER_DAY: i64 = 86_400;

/// A successful estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bedtime {
    time: NaiveTime,
    predicted_sleep: Duration,
    days_before_wake: u32,
}

impl Bedtime {
    /// Time of day to fall asleep
    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// Sleep the model says is actually needed
    pub fn predicted_sleep(&self) -> Duration {
        self.predicted_sleep
    }

    /// 0 when the bedtime is on the wake day, 1 for the evening before, and so on
    pub fn days_before_wake(&self) -> u32 {
        self.days_before_wake
    }

    pub fn format(&self, clock: ClockFormat) -> String {
        clock.format(self.time)
    }
}

/// Estimates bedtimes with an injected sleep model
///
/// Holds no state besides the model; every call to [`estimate`](Self::estimate)
/// is independent.
#[derive(Debug, Clone)]
pub struct BedtimeEstimator {
    model: Arc<dyn SleepModel>,
}

impl BedtimeEstimator {
    pub fn new(model: Arc<dyn SleepModel>) -> Self {
        Self { model }
    }

    pub fn with_model(model: impl SleepModel + 'static) -> Self {
        Self::new(Arc::new(model))
    }

    pub fn model(&self) -> &dyn SleepModel {
        self.model.as_ref()
    }

    /// Estimate the bedtime for one set of inputs
    ///
    /// # Errors
    /// * `EstimationError::InvalidInput` - sleep hours outside [4, 12] or more than 20 cups
    /// * `EstimationError::ModelUnavailable` - the model could not be loaded or evaluated
    /// * `EstimationError::Prediction` - the model returned a negative or non-finite duration
    pub fn estimate(
        &self,
        wake_time: WakeTime,
        sleep_hours: f64,
        coffee_cups: u32,
    ) -> EstimationResult<Bedtime> {
        validate_inputs(sleep_hours, coffee_cups)?;

        let features = SleepFeatures {
            wake: f64::from(wake_time.seconds_since_midnight()),
            estimated_sleep: sleep_hours,
            coffee: f64::from(coffee_cups),
        };

        let actual_sleep = self.model.predict(&features).map_err(|e| {
            warn!(model = self.model.name(), error = %e, "Sleep model failed");
            EstimationError::from(e)
        })?;

        let predicted_sleep = sleep_duration(actual_sleep)?;
        let (time, wrapped_seconds) = wake_time
            .as_naive_time()
            .overflowing_sub_signed(predicted_sleep);
        let days_before_wake = u32::try_from(wrapped_seconds / SECONDS_PER_DAY).map_err(|_| {
            EstimationError::Prediction(format!(
                "predicted sleep of {} seconds cannot be placed before the wake time",
                actual_sleep
            ))
        })?;

        debug!(
            model = self.model.name(),
            wake = %wake_time,
            sleep_hours,
            coffee_cups,
            actual_sleep_seconds = actual_sleep,
            bedtime = %time.format("%H:%M:%S"),
            days_before_wake,
            "Estimated bedtime"
        );

        Ok(Bedtime {
            time,
            predicted_sleep,
            days_before_wake,
        })
    }
}

fn validate_inputs(sleep_hours: f64, coffee_cups: u32) -> EstimationResult<()> {
    if !sleep_hours.is_finite() || !(MIN_SLEEP_HOURS..=MAX_SLEEP_HOURS).contains(&sleep_hours) {
        return Err(EstimationError::InvalidInput(format!(
            "sleep amount {} is outside {}..={} hours",
            sleep_hours, MIN_SLEEP_HOURS, MAX_SLEEP_HOURS
        )));
    }
    if coffee_cups > MAX_COFFEE_CUPS {
        return Err(EstimationError::InvalidInput(format!(
            "coffee amount {} is outside 0..={} cups",
            coffee_cups, MAX_COFFEE_CUPS
        )));
    }
    Ok(())
}

/// Model output in seconds -> duration, millisecond precision
fn sleep_duration(seconds: f64) -> EstimationResult<Duration> {
    if !seconds.is_finite() {
        return Err(EstimationError::Prediction(format!(
            "model returned a non-finite sleep duration ({})",
            seconds
        )));
    }
    if seconds < 0.0 {
        return Err(EstimationError::Prediction(format!(
            "model returned a negative sleep duration ({} s)",
            seconds
        )));
    }

    let millis = (seconds * 1000.0).round();
    if millis > i64::MAX as f64 {
        return Err(EstimationError::Prediction(format!(
            "sleep duration of {} s is out of range",
            seconds
        )));
    }
    Duration::try_milliseconds(millis as i64).ok_or_else(|| {
        EstimationError::Prediction(format!("sleep duration of {} s is out of range", seconds))
    })
}
