//! BetterRest command-line front end
//!
//! This module exports the pieces of the `betterrest` binary for testing and
//! potential library use.

pub mod args;
pub mod interactive;
pub mod run;

pub use args::{parse_command_line, Args};
pub use interactive::run_session;
pub use run::{
    build_estimator, calculate, cli_overrides, exit_status, load_settings, BedtimeReport,
};
