use anyhow::{Context, Result};
use std::io;
use std::process::ExitCode;
use tracing::debug;

use betterrest_cli::{
    build_estimator, calculate, exit_status, load_settings, parse_command_line, run_session, Args,
};
use betterrest_estimator::{BedtimeForm, ClockFormat, WakeTime};
use betterrest_observability::{CrateDebugFlags, LogFormat, LoggingConfig};

/// Main entry point
fn main() -> Result<ExitCode> {
    let (args, mut debug_flags) =
        parse_command_line(std::env::args()).unwrap_or_else(|e| e.exit());
    let config = load_settings(&args)?;

    debug_flags.merge_env();
    let log_format: LogFormat = config
        .logging
        .format
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;
    let mut logging = LoggingConfig::default()
        .with_level(&config.logging.level)
        .with_format(log_format);
    if let Some(dir) = &args.log_dir {
        logging.log_dir = dir.clone();
    }
    let _log_guard = init_logging(&args, &debug_flags, &logging)?;

    debug!(
        model = %config.model.artifact_path.display(),
        reload_each_call = config.model.reload_each_call,
        clock = %config.display.clock,
        "Configuration loaded"
    );

    if args.interactive {
        let clock: ClockFormat = config.display.clock.parse()?;
        let estimator = build_estimator(&config.model)
            .with_context(|| format!("Failed to load {}", config.model.artifact_path.display()))?;
        let mut form = BedtimeForm::with_inputs(
            estimator,
            WakeTime::parse(&config.defaults.wake_time)?,
            config.defaults.sleep_hours,
            config.defaults.coffee_cups,
        )?
        .with_clock(clock);

        run_session(&mut form, io::stdin().lock(), io::stdout().lock())?;
        return Ok(ExitCode::SUCCESS);
    }

    let report = calculate(&config);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.alert.title);
        println!("{}", report.alert.message);
    }

    Ok(ExitCode::from(exit_status(&report)))
}

#[cfg(feature = "file-logging")]
fn init_logging(
    args: &Args,
    debug_flags: &CrateDebugFlags,
    logging: &LoggingConfig,
) -> Result<Option<betterrest_observability::LoggingGuard>> {
    if args.log_dir.is_some() {
        return betterrest_observability::init_logging(debug_flags, logging).map(Some);
    }
    betterrest_observability::init_console_logging(debug_flags, logging)?;
    Ok(None)
}

#[cfg(not(feature = "file-logging"))]
fn init_logging(
    args: &Args,
    debug_flags: &CrateDebugFlags,
    logging: &LoggingConfig,
) -> Result<Option<()>> {
    if args.log_dir.is_some() {
        eprintln!("--log-dir needs the file-logging feature; logging to the console only");
    }
    betterrest_observability::init_console_logging(debug_flags, logging)?;
    Ok(None)
}
