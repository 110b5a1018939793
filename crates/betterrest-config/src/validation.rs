//! Configuration validation
//!
//! Ensures configuration values are within the ranges the estimator accepts
//! before any calculation runs.

use crate::{BetterRestConfig, ConfigError, ConfigResult};
use chrono::NaiveTime;

/// Lowest accepted desired sleep, in hours
pub const MIN_SLEEP_HOURS: f64 = 4.0;
/// Highest accepted desired sleep, in hours
pub const MAX_SLEEP_HOURS: f64 = 12.0;
/// Highest accepted daily coffee intake, in cups
pub const MAX_COFFEE_CUPS: u32 = 20;

const CLOCK_FORMATS: &[&str] = &["12h", "24h"];
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: &[&str] = &["text", "json"];

/// Validation errors that can occur during config validation
#[derive(Debug, Clone)]
pub enum ConfigValidationError {
    MissingRequired { field: String },
    InvalidValue { field: String, reason: String },
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRequired { field } => {
                write!(f, "Missing required configuration: {}", field)
            }
            Self::InvalidValue { field, reason } => {
                write!(f, "Invalid configuration value for {}: {}", field, reason)
            }
        }
    }
}

/// Validate the complete configuration
///
/// Checks for:
/// - Required fields (model artifact path)
/// - Default form values inside the estimator's input domain
/// - Known clock formats and log levels
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` listing every problem found
pub fn validate_config(config: &BetterRestConfig) -> ConfigResult<()> {
    let mut errors = Vec::new();

    validate_required_fields(config, &mut errors);
    validate_defaults(config, &mut errors);
    validate_display_and_logging(config, &mut errors);

    if !errors.is_empty() {
        let error_messages = errors
            .iter()
            .map(|e| format!("  - {}", e))
            .collect::<Vec<_>>()
            .join("\n");

        return Err(ConfigError::ValidationError(format!(
            "Configuration validation failed:\n{}",
            error_messages
        )));
    }

    Ok(())
}

fn validate_required_fields(config: &BetterRestConfig, errors: &mut Vec<ConfigValidationError>) {
    if config.model.artifact_path.as_os_str().is_empty() {
        errors.push(ConfigValidationError::MissingRequired {
            field: "model.artifact_path".to_string(),
        });
    }
}

fn validate_defaults(config: &BetterRestConfig, errors: &mut Vec<ConfigValidationError>) {
    if !is_clock_time(&config.defaults.wake_time) {
        errors.push(ConfigValidationError::InvalidValue {
            field: "defaults.wake_time".to_string(),
            reason: format!("'{}' is not a HH:MM time", config.defaults.wake_time),
        });
    }

    let hours = config.defaults.sleep_hours;
    if !hours.is_finite() || !(MIN_SLEEP_HOURS..=MAX_SLEEP_HOURS).contains(&hours) {
        errors.push(ConfigValidationError::InvalidValue {
            field: "defaults.sleep_hours".to_string(),
            reason: format!(
                "must be between {} and {} hours",
                MIN_SLEEP_HOURS, MAX_SLEEP_HOURS
            ),
        });
    }

    if config.defaults.coffee_cups > MAX_COFFEE_CUPS {
        errors.push(ConfigValidationError::InvalidValue {
            field: "defaults.coffee_cups".to_string(),
            reason: format!("must be between 0 and {} cups", MAX_COFFEE_CUPS),
        });
    }
}

fn validate_display_and_logging(
    config: &BetterRestConfig,
    errors: &mut Vec<ConfigValidationError>,
) {
    if !CLOCK_FORMATS.contains(&config.display.clock.trim().to_lowercase().as_str()) {
        errors.push(ConfigValidationError::InvalidValue {
            field: "display.clock".to_string(),
            reason: "must be '12h' or '24h'".to_string(),
        });
    }

    if !LOG_LEVELS.contains(&config.logging.level.to_lowercase().as_str()) {
        errors.push(ConfigValidationError::InvalidValue {
            field: "logging.level".to_string(),
            reason: format!("must be one of {}", LOG_LEVELS.join(", ")),
        });
    }

    if !LOG_FORMATS.contains(&config.logging.format.to_lowercase().as_str()) {
        errors.push(ConfigValidationError::InvalidValue {
            field: "logging.format".to_string(),
            reason: "must be 'text' or 'json'".to_string(),
        });
    }
}

/// `HH:MM`, read the same way the estimator reads wake times
fn is_clock_time(value: &str) -> bool {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").is_ok()
}
