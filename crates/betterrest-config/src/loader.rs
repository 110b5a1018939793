// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration file loading with override support
//!
//! This module implements the 3-tier configuration loading system:
//! 1. TOML file (base defaults)
//! 2. Environment variables (runtime overrides)
//! 3. CLI arguments (explicit user overrides)

use crate::{BetterRestConfig, ConfigError, ConfigResult, CONFIG_FILE_NAME};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Find the BetterRest configuration file
///
/// Search order:
/// 1. `BETTERREST_CONFIG_PATH` environment variable
/// 2. Current working directory: `./betterrest_configuration.toml`
/// 3. Up to 5 parent directories
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` if no config file is found in any location
pub fn find_config_file() -> ConfigResult<PathBuf> {
    if let Ok(env_path) = env::var("BETTERREST_CONFIG_PATH") {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(path);
        }
        return Err(ConfigError::FileNotFound(format!(
            "Config file specified by BETTERREST_CONFIG_PATH not found: {}",
            path.display()
        )));
    }

    let mut search_paths = Vec::new();

    if let Ok(cwd) = env::current_dir() {
        search_paths.push(cwd.join(CONFIG_FILE_NAME));

        let mut current = cwd.as_path();
        for _ in 0..5 {
            match current.parent() {
                Some(parent) => {
                    search_paths.push(parent.join(CONFIG_FILE_NAME));
                    current = parent;
                }
                None => break,
            }
        }
    }

    if let Some(found) = search_paths.iter().find(|p| p.exists()) {
        return Ok(found.clone());
    }

    let search_list = search_paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n");

    Err(ConfigError::FileNotFound(format!(
        "'{}' not found in any of these locations:\n{}\n\nSet BETTERREST_CONFIG_PATH environment variable to specify custom location.",
        CONFIG_FILE_NAME, search_list
    )))
}

/// Load configuration from TOML file
///
/// # Arguments
///
/// * `config_path` - Optional path to config file. If `None`, will search for config file.
/// * `cli_args` - Optional CLI argument overrides
///
/// # Errors
///
/// Returns error if config file is not found or contains invalid TOML
///
/// A relative `model.artifact_path` read from the file is resolved against the
/// file's directory; override values are used as given.
pub fn load_config(
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<BetterRestConfig> {
    let config_file = match config_path {
        Some(path) => path.to_path_buf(),
        None => find_config_file()?,
    };

    let content = fs::read_to_string(&config_file)?;
    let mut config: BetterRestConfig = toml::from_str(&content)?;

    // Relative artifact paths in a file are relative to that file
    if config.model.artifact_path.is_relative() {
        if let Some(config_dir) = config_file.parent() {
            config.model.artifact_path = config_dir.join(&config.model.artifact_path);
        }
    }

    apply_environment_overrides(&mut config);
    if let Some(cli) = cli_args {
        apply_cli_overrides(&mut config, cli);
    }

    Ok(config)
}

/// Load configuration, falling back to built-in defaults when no file is found
///
/// An explicit `config_path` that does not exist is still an error. Only the
/// discovery search is allowed to come up empty.
pub fn load_config_or_default(
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<BetterRestConfig> {
    if config_path.is_some() {
        return load_config(config_path, cli_args);
    }

    match find_config_file() {
        Ok(path) => load_config(Some(&path), cli_args),
        Err(ConfigError::FileNotFound(_)) if env::var("BETTERREST_CONFIG_PATH").is_err() => {
            let mut config = BetterRestConfig::default();
            apply_environment_overrides(&mut config);
            if let Some(cli) = cli_args {
                apply_cli_overrides(&mut config, cli);
            }
            Ok(config)
        }
        Err(e) => Err(e),
    }
}

fn parse_flag(value: &str) -> bool {
    let value = value.to_lowercase();
    value == "true" || value == "1" || value == "yes"
}

/// Apply environment variable overrides to configuration
///
/// Supported environment variables:
/// - `BETTERREST_MODEL_PATH` -> `model.artifact_path`
/// - `BETTERREST_MODEL_RELOAD` -> `model.reload_each_call`
/// - `BETTERREST_WAKE_TIME` -> `defaults.wake_time`
/// - `BETTERREST_SLEEP_HOURS` -> `defaults.sleep_hours`
/// - `BETTERREST_COFFEE_CUPS` -> `defaults.coffee_cups`
/// - `BETTERREST_CLOCK` -> `display.clock`
/// - `BETTERREST_LOG_LEVEL` -> `logging.level`
/// - `BETTERREST_LOG_FORMAT` -> `logging.format`
///
/// Values that fail to parse are ignored and the previous value is kept.
pub fn apply_environment_overrides(config: &mut BetterRestConfig) {
    if let Ok(value) = env::var("BETTERREST_MODEL_PATH") {
        config.model.artifact_path = PathBuf::from(value);
    }
    if let Ok(value) = env::var("BETTERREST_MODEL_RELOAD") {
        config.model.reload_each_call = parse_flag(&value);
    }

    if let Ok(value) = env::var("BETTERREST_WAKE_TIME") {
        config.defaults.wake_time = value;
    }
    if let Ok(value) = env::var("BETTERREST_SLEEP_HOURS") {
        if let Ok(hours) = value.parse::<f64>() {
            config.defaults.sleep_hours = hours;
        }
    }
    if let Ok(value) = env::var("BETTERREST_COFFEE_CUPS") {
        if let Ok(cups) = value.parse::<u32>() {
            config.defaults.coffee_cups = cups;
        }
    }

    if let Ok(value) = env::var("BETTERREST_CLOCK") {
        config.display.clock = value;
    }
    if let Ok(value) = env::var("BETTERREST_LOG_LEVEL") {
        config.logging.level = value;
    }
    if let Ok(value) = env::var("BETTERREST_LOG_FORMAT") {
        config.logging.format = value;
    }
}

/// Apply CLI argument overrides to configuration
///
/// # Arguments
///
/// * `config` - Configuration to modify
/// * `cli_args` - HashMap of CLI arguments (e.g., `{"model_path": "weights.json", "clock": "24h"}`)
pub fn apply_cli_overrides(config: &mut BetterRestConfig, cli_args: &HashMap<String, String>) {
    if let Some(value) = cli_args.get("model_path") {
        config.model.artifact_path = PathBuf::from(value);
    }

    if let Some(value) = cli_args.get("wake_time") {
        config.defaults.wake_time = value.clone();
    }
    if let Some(value) = cli_args.get("sleep_hours") {
        if let Ok(hours) = value.parse::<f64>() {
            config.defaults.sleep_hours = hours;
        }
    }
    if let Some(value) = cli_args.get("coffee_cups") {
        if let Ok(cups) = value.parse::<u32>() {
            config.defaults.coffee_cups = cups;
        }
    }

    if let Some(value) = cli_args.get("clock") {
        config.display.clock = value.clone();
    }
    if let Some(value) = cli_args.get("log_level") {
        config.logging.level = value.clone();
    }
    if let Some(value) = cli_args.get("log_format") {
        config.logging.format = value.clone();
    }
}
