//! Single calculation: settings -> model -> estimate -> report

use crate::args::Args;
use anyhow::{Context, Result};
use betterrest_config::{load_config_or_default, validate_config, BetterRestConfig, ModelConfig};
use betterrest_estimator::{
    ArtifactSleepModel, BedtimeAlert, BedtimeEstimator, ClockFormat, EstimationError,
    EstimationResult, LinearSleepModel, ModelError, WakeTime,
};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, info};

/// Outcome of one calculation, as printed with `--json`
#[derive(Debug, Clone, Serialize)]
pub struct BedtimeReport {
    pub wake_time: String,
    pub sleep_hours: f64,
    pub coffee_cups: u32,
    #[serde(flatten)]
    pub alert: BedtimeAlert,
    /// `HH:MM:SS`, 24-hour
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedtime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicted_sleep_seconds: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_before_wake: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Map explicit command-line values onto config override keys
pub fn cli_overrides(args: &Args) -> HashMap<String, String> {
    let mut overrides = HashMap::new();
    if let Some(path) = &args.model {
        overrides.insert("model_path".to_string(), path.display().to_string());
    }
    if let Some(wake) = &args.wake {
        overrides.insert("wake_time".to_string(), wake.to_string());
    }
    if let Some(hours) = args.sleep {
        overrides.insert("sleep_hours".to_string(), hours.to_string());
    }
    if let Some(cups) = args.coffee {
        overrides.insert("coffee_cups".to_string(), cups.to_string());
    }
    if let Some(clock) = &args.clock {
        overrides.insert("clock".to_string(), clock.clone());
    }
    if args.verbose {
        overrides.insert("log_level".to_string(), "debug".to_string());
    }
    overrides
}

/// Load, override and validate the configuration
pub fn load_settings(args: &Args) -> Result<BetterRestConfig> {
    let overrides = cli_overrides(args);
    let config = load_config_or_default(args.config.as_deref(), Some(&overrides))
        .context("Failed to load configuration")?;
    validate_config(&config)?;
    Ok(config)
}

/// Build the estimator the model settings ask for
///
/// With `reload_each_call` the artifact is only read when a prediction runs,
/// so this cannot fail; otherwise it is loaded and checked up front.
pub fn build_estimator(model: &ModelConfig) -> Result<BedtimeEstimator, ModelError> {
    if model.reload_each_call {
        Ok(BedtimeEstimator::with_model(ArtifactSleepModel::new(
            &model.artifact_path,
        )))
    } else {
        Ok(BedtimeEstimator::with_model(LinearSleepModel::load(
            &model.artifact_path,
        )?))
    }
}

/// Run one calculation with the configured defaults
///
/// Never fails: every problem ends up as an error alert in the report.
pub fn calculate(config: &BetterRestConfig) -> BedtimeReport {
    let clock = config
        .display
        .clock
        .parse::<ClockFormat>()
        .unwrap_or_default();

    let outcome: EstimationResult<_> = WakeTime::parse(&config.defaults.wake_time)
        .and_then(|wake| {
            let estimator = build_estimator(&config.model).map_err(EstimationError::from)?;
            debug!(model = estimator.model().name(), "Sleep model ready");
            estimator.estimate(wake, config.defaults.sleep_hours, config.defaults.coffee_cups)
        });

    let alert = BedtimeAlert::from_outcome(&outcome, clock);
    match &outcome {
        Ok(_) => info!(bedtime = %alert.message, "Bedtime calculated"),
        Err(e) => info!(error = %e, "Bedtime calculation failed"),
    }

    BedtimeReport {
        wake_time: config.defaults.wake_time.clone(),
        sleep_hours: config.defaults.sleep_hours,
        coffee_cups: config.defaults.coffee_cups,
        bedtime: outcome
            .as_ref()
            .ok()
            .map(|b| b.time().format("%H:%M:%S").to_string()),
        predicted_sleep_seconds: outcome
            .as_ref()
            .ok()
            .map(|b| b.predicted_sleep().num_milliseconds() as f64 / 1000.0),
        days_before_wake: outcome.as_ref().ok().map(|b| b.days_before_wake()),
        error: outcome.as_ref().err().map(|e| e.to_string()),
        alert,
    }
}

/// Process exit status for a report: 0 on success, 1 for an error alert
pub fn exit_status(report: &BedtimeReport) -> u8 {
    if report.alert.is_error() {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_overrides_only_include_given_values() {
        let args = Args::parse_from(["betterrest", "--coffee", "3", "-v"]);
        let overrides = cli_overrides(&args);

        assert_eq!(overrides.get("coffee_cups").map(String::as_str), Some("3"));
        assert_eq!(overrides.get("log_level").map(String::as_str), Some("debug"));
        assert!(!overrides.contains_key("wake_time"));
        assert!(!overrides.contains_key("model_path"));
    }

    #[test]
    fn test_wake_override_is_normalized() {
        let args = Args::parse_from(["betterrest", "--wake", "7:05"]);
        let overrides = cli_overrides(&args);

        assert_eq!(overrides.get("wake_time").map(String::as_str), Some("07:05"));
    }

    #[test]
    fn test_preloading_a_missing_model_fails() {
        let model = ModelConfig {
            artifact_path: "/no/such/model.json".into(),
            reload_each_call: false,
        };
        assert!(build_estimator(&model).is_err());

        let lazy = ModelConfig {
            reload_each_call: true,
            ..model
        };
        assert!(build_estimator(&lazy).is_ok());
    }
}
