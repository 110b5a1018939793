// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! User-facing result messages

use crate::error::EstimationResult;
use crate::estimator::Bedtime;
use crate::time::ClockFormat;
use serde::Serialize;

pub const SUCCESS_TITLE: &str = "Your Ideal Bedtime is...";
pub const ERROR_TITLE: &str = "Error";
pub const ERROR_MESSAGE: &str = "There was a problem calculating your bedtime";

/// Title and message shown after a calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BedtimeAlert {
    pub title: String,
    pub message: String,
}

impl BedtimeAlert {
    /// Every failure maps to the same generic message
    pub fn from_outcome(outcome: &EstimationResult<Bedtime>, clock: ClockFormat) -> Self {
        match outcome {
            Ok(bedtime) => Self {
                title: SUCCESS_TITLE.to_string(),
                message: bedtime.format(clock),
            },
            Err(_) => Self {
                title: ERROR_TITLE.to_string(),
                message: ERROR_MESSAGE.to_string(),
            },
        }
    }

    pub fn is_error(&self) -> bool {
        self.title == ERROR_TITLE
    }
}
