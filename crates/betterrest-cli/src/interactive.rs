//! Line-driven form session
//!
//! Terminal stand-in for the bedtime form: each command edits one input and
//! the new alert is printed right away.

use betterrest_estimator::{BedtimeAlert, BedtimeForm, EstimationResult, WakeTime};
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  wake HH:MM             set the wake-up time
  sleep + | - | HOURS    step or set the desired sleep (4-12, steps of 0.25)
  coffee + | - | CUPS    step or set the daily coffee (0-20)
  calc                   recalculate with the current inputs
  show                   print the current inputs
  help                   print this help
  quit                   leave";

enum Step {
    Up,
    Down,
    To(String),
}

fn step(arg: Option<&str>) -> Option<Step> {
    match arg? {
        "+" => Some(Step::Up),
        "-" => Some(Step::Down),
        value => Some(Step::To(value.to_string())),
    }
}

fn print_alert(output: &mut impl Write, alert: &BedtimeAlert) -> io::Result<()> {
    writeln!(output, "{}", alert.title)?;
    writeln!(output, "  {}", alert.message)
}

fn print_inputs(output: &mut impl Write, form: &BedtimeForm) -> io::Result<()> {
    writeln!(output, "When do you want to wake up?  {}", form.wake_time())?;
    writeln!(output, "Desired amount of sleep       {}", form.sleep_label())?;
    writeln!(output, "Daily coffee intake           {}", form.coffee_label())
}

fn print_result(output: &mut impl Write, result: EstimationResult<&BedtimeAlert>) -> io::Result<()> {
    match result {
        Ok(alert) => print_alert(output, alert),
        Err(e) => writeln!(output, "{}", e),
    }
}

/// Read commands until `quit` or end of input
pub fn run_session<R: BufRead, W: Write>(
    form: &mut BedtimeForm,
    input: R,
    mut output: W,
) -> io::Result<()> {
    print_inputs(&mut output, form)?;
    print_alert(&mut output, form.calculate())?;
    form.dismiss_alert();

    for line in input.lines() {
        let line = line?;
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };
        let arg = words.next();

        match (command, step(arg)) {
            ("quit" | "exit" | "q", _) => break,
            ("help" | "?", _) => writeln!(output, "{}", HELP)?,
            ("show", _) => print_inputs(&mut output, form)?,
            ("calc", _) => print_alert(&mut output, form.calculate())?,
            ("wake", Some(Step::To(text))) => match WakeTime::parse(&text) {
                Ok(wake) => print_alert(&mut output, form.set_wake_time(wake))?,
                Err(e) => writeln!(output, "{}", e)?,
            },
            ("sleep", Some(Step::Up)) => print_alert(&mut output, form.increment_sleep())?,
            ("sleep", Some(Step::Down)) => print_alert(&mut output, form.decrement_sleep())?,
            ("sleep", Some(Step::To(text))) => match text.parse::<f64>() {
                Ok(hours) => print_result(&mut output, form.set_sleep_hours(hours))?,
                Err(_) => writeln!(output, "'{}' is not a number of hours", text)?,
            },
            ("coffee", Some(Step::Up)) => print_alert(&mut output, form.increment_coffee())?,
            ("coffee", Some(Step::Down)) => print_alert(&mut output, form.decrement_coffee())?,
            ("coffee", Some(Step::To(text))) => match text.parse::<u32>() {
                Ok(cups) => print_result(&mut output, form.set_coffee_cups(cups))?,
                Err(_) => writeln!(output, "'{}' is not a number of cups", text)?,
            },
            _ => writeln!(output, "Unrecognized command '{}'. Type 'help'.", line.trim())?,
        }
        form.dismiss_alert();
        output.flush()?;
    }

    Ok(())
}
