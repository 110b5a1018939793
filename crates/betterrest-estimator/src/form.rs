// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Input session for a bedtime form
//!
//! Holds the three inputs a front end edits. Any accepted change runs a fresh
//! estimate and replaces the current alert; nothing from an earlier
//! calculation is reused.

use crate::alert::BedtimeAlert;
use crate::error::{EstimationError, EstimationResult};
use crate::estimator::{BedtimeEstimator, MAX_COFFEE_CUPS, MAX_SLEEP_HOURS, MIN_SLEEP_HOURS};
use crate::time::{ClockFormat, WakeTime};
use tracing::debug;

/// Sleep stepper increment, in hours
pub const SLEEP_STEP_HOURS: f64 = 0.25;
/// Coffee stepper increment, in cups
pub const COFFEE_STEP_CUPS: u32 = 1;

const DEFAULT_SLEEP_HOURS: f64 = 8.0;
const DEFAULT_COFFEE_CUPS: u32 = 1;

#[derive(Debug, Clone)]
pub struct BedtimeForm {
    estimator: BedtimeEstimator,
    clock: ClockFormat,
    wake_time: WakeTime,
    sleep_hours: f64,
    coffee_cups: u32,
    alert: Option<BedtimeAlert>,
    showing_alert: bool,
}

impl BedtimeForm {
    /// Form with the stock defaults: 08:00, 8 hours, 1 cup
    pub fn new(estimator: BedtimeEstimator) -> Self {
        Self {
            estimator,
            clock: ClockFormat::default(),
            wake_time: WakeTime::default(),
            sleep_hours: DEFAULT_SLEEP_HOURS,
            coffee_cups: DEFAULT_COFFEE_CUPS,
            alert: None,
            showing_alert: false,
        }
    }

    /// Form seeded with explicit starting values
    ///
    /// No calculation runs until an input changes or [`calculate`](Self::calculate) is called.
    pub fn with_inputs(
        estimator: BedtimeEstimator,
        wake_time: WakeTime,
        sleep_hours: f64,
        coffee_cups: u32,
    ) -> EstimationResult<Self> {
        check_sleep_hours(sleep_hours)?;
        check_coffee_cups(coffee_cups)?;
        Ok(Self {
            wake_time,
            sleep_hours,
            coffee_cups,
            ..Self::new(estimator)
        })
    }

    pub fn with_clock(mut self, clock: ClockFormat) -> Self {
        self.clock = clock;
        self
    }

    pub fn wake_time(&self) -> WakeTime {
        self.wake_time
    }

    pub fn sleep_hours(&self) -> f64 {
        self.sleep_hours
    }

    pub fn coffee_cups(&self) -> u32 {
        self.coffee_cups
    }

    /// Most recent calculation result, if any
    pub fn alert(&self) -> Option<&BedtimeAlert> {
        self.alert.as_ref()
    }

    pub fn showing_alert(&self) -> bool {
        self.showing_alert
    }

    pub fn dismiss_alert(&mut self) {
        self.showing_alert = false;
    }

    /// `"8 hours"`, `"8.25 hours"`
    pub fn sleep_label(&self) -> String {
        format!("{} hours", self.sleep_hours)
    }

    /// `"1 cup"`, `"3 cups"`
    pub fn coffee_label(&self) -> String {
        if self.coffee_cups == 1 {
            "1 cup".to_string()
        } else {
            format!("{} cups", self.coffee_cups)
        }
    }

    /// Run the estimator on the current inputs and show the result
    pub fn calculate(&mut self) -> &BedtimeAlert {
        let outcome = self
            .estimator
            .estimate(self.wake_time, self.sleep_hours, self.coffee_cups);
        if let Err(e) = &outcome {
            debug!(error = %e, "Bedtime calculation failed");
        }
        self.showing_alert = true;
        self.alert
            .insert(BedtimeAlert::from_outcome(&outcome, self.clock))
    }

    pub fn set_wake_time(&mut self, wake_time: WakeTime) -> &BedtimeAlert {
        self.wake_time = wake_time;
        self.calculate()
    }

    pub fn set_sleep_hours(&mut self, sleep_hours: f64) -> EstimationResult<&BedtimeAlert> {
        check_sleep_hours(sleep_hours)?;
        self.sleep_hours = sleep_hours;
        Ok(self.calculate())
    }

    pub fn set_coffee_cups(&mut self, coffee_cups: u32) -> EstimationResult<&BedtimeAlert> {
        check_coffee_cups(coffee_cups)?;
        self.coffee_cups = coffee_cups;
        Ok(self.calculate())
    }

    /// Stepper up; stops at 12 hours
    pub fn increment_sleep(&mut self) -> &BedtimeAlert {
        self.sleep_hours = (self.sleep_hours + SLEEP_STEP_HOURS).min(MAX_SLEEP_HOURS);
        self.calculate()
    }

    /// Stepper down; stops at 4 hours
    pub fn decrement_sleep(&mut self) -> &BedtimeAlert {
        self.sleep_hours = (self.sleep_hours - SLEEP_STEP_HOURS).max(MIN_SLEEP_HOURS);
        self.calculate()
    }

    pub fn increment_coffee(&mut self) -> &BedtimeAlert {
        self.coffee_cups = (self.coffee_cups + COFFEE_STEP_CUPS).min(MAX_COFFEE_CUPS);
        self.calculate()
    }

    pub fn decrement_coffee(&mut self) -> &BedtimeAlert {
        self.coffee_cups = self.coffee_cups.saturating_sub(COFFEE_STEP_CUPS);
        self.calculate()
    }
}

fn check_sleep_hours(sleep_hours: f64) -> EstimationResult<()> {
    if sleep_hours.is_finite() && (MIN_SLEEP_HOURS..=MAX_SLEEP_HOURS).contains(&sleep_hours) {
        Ok(())
    } else {
        Err(EstimationError::InvalidInput(format!(
            "sleep amount {} is outside {}..={} hours",
            sleep_hours, MIN_SLEEP_HOURS, MAX_SLEEP_HOURS
        )))
    }
}

fn check_coffee_cups(coffee_cups: u32) -> EstimationResult<()> {
    if coffee_cups <= MAX_COFFEE_CUPS {
        Ok(())
    } else {
        Err(EstimationError::InvalidInput(format!(
            "coffee amount {} is outside 0..={} cups",
            coffee_cups, MAX_COFFEE_CUPS
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ModelError, ModelResult, SleepFeatures, SleepModel};

    /// Needs exactly the requested sleep plus ten minutes per cup
    #[derive(Debug)]
    struct CoffeePenalty;

    impl SleepModel for CoffeePenalty {
        fn predict(&self, features: &SleepFeatures) -> ModelResult<f64> {
            Ok(features.estimated_sleep * 3600.0 + features.coffee * 600.0)
        }

        fn name(&self) -> &str {
            "coffee-penalty"
        }
    }

    #[derive(Debug)]
    struct Unavailable;

    impl SleepModel for Unavailable {
        fn predict(&self, _features: &SleepFeatures) -> ModelResult<f64> {
            Err(ModelError::Invalid("no weights".to_string()))
        }

        fn name(&self) -> &str {
            "unavailable"
        }
    }

    fn form() -> BedtimeForm {
        BedtimeForm::new(BedtimeEstimator::with_model(CoffeePenalty))
            .with_clock(ClockFormat::TwentyFourHour)
    }

    #[test]
    fn test_defaults_match_the_stock_form() {
        let form = form();
        assert_eq!(form.wake_time(), WakeTime::new(8, 0).unwrap());
        assert_eq!(form.sleep_hours(), 8.0);
        assert_eq!(form.coffee_cups(), 1);
        assert!(form.alert().is_none());
        assert!(!form.showing_alert());
    }

    #[test]
    fn test_calculate_uses_current_inputs() {
        let mut form = form();
        // 08:00 - (8h + 10m)
        assert_eq!(form.calculate().message, "23:50");
        assert!(form.showing_alert());

        form.dismiss_alert();
        assert!(!form.showing_alert());
        assert!(form.alert().is_some());
    }

    #[test]
    fn test_every_change_recomputes() {
        let mut form = form();

        assert_eq!(form.set_wake_time(WakeTime::new(7, 0).unwrap()).message, "22:50");
        assert_eq!(form.increment_coffee().message, "22:40");
        assert_eq!(form.decrement_sleep().message, "22:55");
        assert_eq!(form.set_sleep_hours(9.0).unwrap().message, "21:40");
        assert_eq!(form.set_coffee_cups(0).unwrap().message, "22:00");
        assert_eq!(form.alert().map(|a| a.message.as_str()), Some("22:00"));
    }

    #[test]
    fn test_steppers_clamp_at_bounds() {
        let mut form = form();

        for _ in 0..100 {
            form.increment_sleep();
            form.increment_coffee();
        }
        assert_eq!(form.sleep_hours(), MAX_SLEEP_HOURS);
        assert_eq!(form.coffee_cups(), MAX_COFFEE_CUPS);

        for _ in 0..100 {
            form.decrement_sleep();
            form.decrement_coffee();
        }
        assert_eq!(form.sleep_hours(), MIN_SLEEP_HOURS);
        assert_eq!(form.coffee_cups(), 0);
    }

    #[test]
    fn test_rejected_values_leave_form_unchanged() {
        let mut form = form();

        assert!(form.set_sleep_hours(3.0).is_err());
        assert!(form.set_coffee_cups(25).is_err());
        assert_eq!(form.sleep_hours(), 8.0);
        assert_eq!(form.coffee_cups(), 1);
        assert!(form.alert().is_none());
    }

    #[test]
    fn test_with_inputs_validates() {
        let estimator = BedtimeEstimator::with_model(CoffeePenalty);
        let wake = WakeTime::new(6, 0).unwrap();

        assert!(BedtimeForm::with_inputs(estimator.clone(), wake, 13.0, 1).is_err());
        let form = BedtimeForm::with_inputs(estimator, wake, 7.5, 2).unwrap();
        assert_eq!(form.sleep_hours(), 7.5);
        assert_eq!(form.coffee_cups(), 2);
    }

    #[test]
    fn test_labels() {
        let mut form = form();
        assert_eq!(form.sleep_label(), "8 hours");
        assert_eq!(form.coffee_label(), "1 cup");

        form.increment_sleep();
        form.increment_coffee();
        assert_eq!(form.sleep_label(), "8.25 hours");
        assert_eq!(form.coffee_label(), "2 cups");
    }

    #[test]
    fn test_model_failure_shows_error_alert() {
        let mut form = BedtimeForm::new(BedtimeEstimator::with_model(Unavailable));
        let alert = form.calculate();

        assert!(alert.is_error());
        assert_eq!(alert.message, "There was a problem calculating your bedtime");
    }
}
