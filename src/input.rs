//! Validation of user supplied values.
//!
//! Every function here is pure and returns the parsed value or the reason it
//! was rejected. Asking the user again is left to the caller.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate};

use crate::{InputError, PriceZone};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_zone(s: &str) -> Result<PriceZone, InputError> {
    s.parse()
}

pub fn parse_date(s: &str) -> Result<NaiveDate, InputError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| InputError::InvalidDate(s.trim().to_owned()))
}

/// Number of consecutive hours to charge for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargingDuration {
    TwoHours,
    FourHours,
    EightHours,
}

impl ChargingDuration {
    pub const fn hours(&self) -> u32 {
        match self {
            ChargingDuration::TwoHours => 2,
            ChargingDuration::FourHours => 4,
            ChargingDuration::EightHours => 8,
        }
    }

    /// Number of records a window of this duration spans in a series with the
    /// given interval length. `None` if the hours do not divide evenly into
    /// intervals.
    pub fn window_length(&self, granularity: Duration) -> Option<usize> {
        let total = Duration::hours(i64::from(self.hours())).num_seconds();
        let step = granularity.num_seconds();
        if step <= 0 || total % step != 0 {
            return None;
        }
        usize::try_from(total / step).ok()
    }
}

impl fmt::Display for ChargingDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h", self.hours())
    }
}

impl FromStr for ChargingDuration {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().to_ascii_lowercase();
        let hours = trimmed.strip_suffix('h').unwrap_or(&trimmed);
        match hours {
            "2" => Ok(ChargingDuration::TwoHours),
            "4" => Ok(ChargingDuration::FourHours),
            "8" => Ok(ChargingDuration::EightHours),
            _ => Err(InputError::InvalidChargingDuration(s.trim().to_owned())),
        }
    }
}

pub fn parse_charging_duration(s: &str) -> Result<ChargingDuration, InputError> {
    s.parse()
}
