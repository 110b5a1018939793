// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Time-of-day handling for wake times and bedtimes

use crate::error::{EstimationError, EstimationResult};
use chrono::{NaiveTime, Timelike};
use std::fmt;
use std::str::FromStr;

/// Desired wake-up time, hour and minute precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WakeTime(NaiveTime);

impl WakeTime {
    /// Build a wake time from explicit hour and minute
    pub fn new(hour: u32, minute: u32) -> EstimationResult<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(WakeTime)
            .ok_or_else(|| {
                EstimationError::InvalidInput(format!(
                    "{:02}:{:02} is not a valid time of day",
                    hour, minute
                ))
            })
    }

    /// Build a wake time from components a picker may leave unset
    ///
    /// A missing hour or minute is rejected, never read as zero.
    pub fn from_components(hour: Option<u32>, minute: Option<u32>) -> EstimationResult<Self> {
        match (hour, minute) {
            (Some(hour), Some(minute)) => Self::new(hour, minute),
            (None, _) => Err(EstimationError::InvalidInput(
                "wake time is missing its hour".to_string(),
            )),
            (_, None) => Err(EstimationError::InvalidInput(
                "wake time is missing its minute".to_string(),
            )),
        }
    }

    /// Parse `HH:MM` (24-hour)
    pub fn parse(text: &str) -> EstimationResult<Self> {
        NaiveTime::parse_from_str(text.trim(), "%H:%M")
            .map(WakeTime)
            .map_err(|e| {
                EstimationError::InvalidInput(format!("'{}' is not a HH:MM time: {}", text, e))
            })
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Seconds since midnight, counting only hour and minute
    pub fn seconds_since_midnight(&self) -> u32 {
        self.0.hour() * 3600 + self.0.minute() * 60
    }

    pub fn as_naive_time(&self) -> NaiveTime {
        self.0
    }
}

impl Default for WakeTime {
    /// 08:00
    fn default() -> Self {
        WakeTime(NaiveTime::from_hms_opt(8, 0, 0).unwrap_or_default())
    }
}

impl FromStr for WakeTime {
    type Err = EstimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WakeTime::parse(s)
    }
}

impl fmt::Display for WakeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

/// How a time of day is rendered for the user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClockFormat {
    /// `10:45 PM`
    #[default]
    TwelveHour,
    /// `22:45`
    TwentyFourHour,
}

impl ClockFormat {
    /// Short time rendering, no seconds
    pub fn format(&self, time: NaiveTime) -> String {
        match self {
            ClockFormat::TwelveHour => time.format("%-I:%M %p").to_string(),
            ClockFormat::TwentyFourHour => time.format("%H:%M").to_string(),
        }
    }
}

impl FromStr for ClockFormat {
    type Err = EstimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "12h" | "12" => Ok(ClockFormat::TwelveHour),
            "24h" | "24" => Ok(ClockFormat::TwentyFourHour),
            other => Err(EstimationError::InvalidInput(format!(
                "unknown clock format '{}', expected '12h' or '24h'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds_since_midnight() {
        assert_eq!(WakeTime::new(0, 0).unwrap().seconds_since_midnight(), 0);
        assert_eq!(WakeTime::new(8, 0).unwrap().seconds_since_midnight(), 28_800);
        assert_eq!(WakeTime::new(7, 45).unwrap().seconds_since_midnight(), 27_900);
        assert_eq!(WakeTime::new(23, 59).unwrap().seconds_since_midnight(), 86_340);
    }

    #[test]
    fn test_default_is_eight_am() {
        let wake = WakeTime::default();
        assert_eq!((wake.hour(), wake.minute()), (8, 0));
    }

    #[test]
    fn test_parse() {
        assert_eq!(WakeTime::parse("06:30").unwrap(), WakeTime::new(6, 30).unwrap());
        assert_eq!(" 7:05 ".parse::<WakeTime>().unwrap(), WakeTime::new(7, 5).unwrap());
        assert!(WakeTime::parse("25:00").is_err());
        assert!(WakeTime::parse("seven").is_err());
        assert!(WakeTime::parse("").is_err());
    }

    #[test]
    fn test_out_of_range_components() {
        assert!(matches!(
            WakeTime::new(24, 0),
            Err(EstimationError::InvalidInput(_))
        ));
        assert!(WakeTime::new(10, 60).is_err());
    }

    #[test]
    fn test_missing_components_are_rejected() {
        assert!(matches!(
            WakeTime::from_components(None, Some(30)),
            Err(EstimationError::InvalidInput(msg)) if msg.contains("hour")
        ));
        assert!(matches!(
            WakeTime::from_components(Some(7), None),
            Err(EstimationError::InvalidInput(msg)) if msg.contains("minute")
        ));
        assert_eq!(
            WakeTime::from_components(Some(7), Some(30)).unwrap(),
            WakeTime::new(7, 30).unwrap()
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(WakeTime::new(6, 5).unwrap().to_string(), "06:05");
    }

    #[test]
    fn test_clock_formats() {
        let late = NaiveTime::from_hms_opt(22, 45, 30).unwrap();
        let midnight = NaiveTime::from_hms_opt(0, 0, 0).unwrap();

        assert_eq!(ClockFormat::TwelveHour.format(late), "10:45 PM");
        assert_eq!(ClockFormat::TwelveHour.format(midnight), "12:00 AM");
        assert_eq!(ClockFormat::TwentyFourHour.format(late), "22:45");
        assert_eq!(ClockFormat::TwentyFourHour.format(midnight), "00:00");
    }

    #[test]
    fn test_clock_format_parse() {
        assert_eq!("12h".parse::<ClockFormat>().unwrap(), ClockFormat::TwelveHour);
        assert_eq!("24H".parse::<ClockFormat>().unwrap(), ClockFormat::TwentyFourHour);
        assert!("36h".parse::<ClockFormat>().is_err());
    }
}
