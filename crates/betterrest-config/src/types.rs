// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration type definitions
//!
//! This module defines all configuration structs that map to sections in
//! `betterrest_configuration.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BetterRestConfig {
    pub model: ModelConfig,
    pub defaults: DefaultsConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// Regression model artifact settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ModelConfig {
    /// JSON artifact holding the regression weights
    pub artifact_path: PathBuf,
    /// Re-read the artifact on every calculation instead of once at startup
    pub reload_each_call: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            artifact_path: PathBuf::from("models/sleep_calculator.json"),
            reload_each_call: true,
        }
    }
}

/// Initial form values
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// `HH:MM`, 24-hour
    pub wake_time: String,
    pub sleep_hours: f64,
    pub coffee_cups: u32,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            wake_time: "08:00".to_string(),
            sleep_hours: 8.0,
            coffee_cups: 1,
        }
    }
}

/// Result presentation
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// "12h" or "24h"
    pub clock: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            clock: "12h".to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Console output: "text" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}
