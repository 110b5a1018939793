//! Command-line arguments

use betterrest_estimator::WakeTime;
use betterrest_observability::{debug_flags_help, CrateDebugFlags};
use clap::Parser;
use std::path::PathBuf;

/// BetterRest - find the bedtime that gets you the sleep you actually need
#[derive(Parser, Debug)]
#[command(name = "betterrest", version, long_about = None, after_help = debug_flags_help())]
pub struct Args {
    /// Desired wake-up time, HH:MM (default: 08:00)
    #[arg(short, long)]
    pub wake: Option<WakeTime>,

    /// Desired amount of sleep in hours, 4-12 (default: 8)
    #[arg(short, long)]
    pub sleep: Option<f64>,

    /// Cups of coffee per day, 0-20 (default: 1)
    #[arg(short, long)]
    pub coffee: Option<u32>,

    /// Path to the sleep model artifact (JSON)
    #[arg(short, long)]
    pub model: Option<PathBuf>,

    /// Path to betterrest_configuration.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Clock used to show the bedtime: 12h or 24h
    #[arg(long)]
    pub clock: Option<String>,

    /// Print the result as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Edit the inputs interactively and recalculate after every change
    #[arg(short, long, default_value_t = false, conflicts_with = "json")]
    pub interactive: bool,

    /// Enable debug logging for all crates
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Enable debug logging for a crate (repeatable, or "all")
    #[arg(long = "debug", value_name = "CRATE")]
    pub debug: Vec<String>,

    /// Also write JSON logs into a run folder under this directory
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

/// Parse a full command line
///
/// `--debug-<crate>` and `--debug-all` are taken out before clap sees the
/// rest, then merged with any `--debug CRATE` options.
pub fn parse_command_line<I, T>(raw: I) -> Result<(Args, CrateDebugFlags), clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let (dash_flags, rest): (Vec<String>, Vec<String>) = raw
        .into_iter()
        .map(Into::into)
        .partition(|arg| arg.starts_with("--debug-"));

    let args = Args::try_parse_from(rest)?;
    let mut debug_flags = CrateDebugFlags::from_args(dash_flags);
    debug_flags.merge(CrateDebugFlags::from_names(&args.debug));
    Ok((args, debug_flags))
}
