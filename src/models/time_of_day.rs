//! Wall-clock time-of-day model and 12-hour clock parsing.
//!
//! This module defines the [`TimeOfDay`] type used for all shift boundaries
//! in the engine, along with its parser for the `"H:MM AM"` input format.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{EngineError, EngineResult};

/// A wall-clock time of day with minute precision.
///
/// Wraps a [`chrono::NaiveTime`] and is addressed throughout the engine as a
/// minute-of-day value in `0..=1439`. Parsed from 12-hour clock strings of
/// the form `"H:MM AM"`, `"HH:MM PM"`, or the same without the space before
/// the meridiem marker. The marker is case-sensitive upper (`AM`/`PM`).
///
/// # Example
///
/// ```
/// use sitter_engine::models::TimeOfDay;
///
/// let bedtime: TimeOfDay = "8:00 PM".parse().unwrap();
/// assert_eq!(bedtime.minute_of_day(), 20 * 60);
/// assert_eq!(bedtime.to_string(), "8:00 PM");
///
/// let midnight: TimeOfDay = "12:00AM".parse().unwrap();
/// assert_eq!(midnight.minute_of_day(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Creates a `TimeOfDay` from a 24-hour clock hour and minute.
    ///
    /// Returns `None` when `hour > 23` or `minute > 59`.
    ///
    /// # Example
    ///
    /// ```
    /// use sitter_engine::models::TimeOfDay;
    ///
    /// let time = TimeOfDay::from_hm_opt(17, 0).unwrap();
    /// assert_eq!(time.minute_of_day(), 1020);
    /// assert!(TimeOfDay::from_hm_opt(24, 0).is_none());
    /// ```
    pub fn from_hm_opt(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Returns the number of minutes since midnight, in `0..=1439`.
    pub fn minute_of_day(&self) -> u32 {
        self.0.hour() * 60 + self.0.minute()
    }

    /// Returns the 24-hour clock hour, in `0..=23`.
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute within the hour, in `0..=59`.
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }
}

fn parse_error(input: &str, message: impl Into<String>) -> EngineError {
    EngineError::TimeParseError {
        input: input.to_string(),
        message: message.into(),
    }
}

impl FromStr for TimeOfDay {
    type Err = EngineError;

    /// Parses a 12-hour clock string into a `TimeOfDay`.
    ///
    /// The trailing two characters must be exactly `AM` or `PM`, optionally
    /// preceded by a single space. The remainder must split on `:` into
    /// exactly an hour token in `1..=12` and a minute token in `0..=59`.
    /// Hour conversion: `12 AM` maps to hour 0, `12 PM` stays 12, all other
    /// PM hours gain 12.
    fn from_str(s: &str) -> EngineResult<Self> {
        let (clock, is_pm) = if let Some(rest) = s.strip_suffix("AM") {
            (rest, false)
        } else if let Some(rest) = s.strip_suffix("PM") {
            (rest, true)
        } else {
            return Err(parse_error(s, "missing or unrecognized AM/PM marker"));
        };

        // A single space before the marker is tolerated.
        let clock = clock.strip_suffix(' ').unwrap_or(clock);

        let mut tokens = clock.split(':');
        let (Some(hour_token), Some(minute_token), None) =
            (tokens.next(), tokens.next(), tokens.next())
        else {
            return Err(parse_error(s, "expected exactly one ':' separator"));
        };

        let hour: u32 = hour_token
            .parse()
            .map_err(|_| parse_error(s, format!("hour token '{hour_token}' is not a number")))?;
        let minute: u32 = minute_token.parse().map_err(|_| {
            parse_error(s, format!("minute token '{minute_token}' is not a number"))
        })?;

        if !(1..=12).contains(&hour) {
            return Err(parse_error(s, format!("hour {hour} is outside 1-12")));
        }
        if minute > 59 {
            return Err(parse_error(s, format!("minute {minute} is outside 0-59")));
        }

        let hour_24 = match (is_pm, hour) {
            (false, 12) => 0,
            (false, h) => h,
            (true, 12) => 12,
            (true, h) => h + 12,
        };

        NaiveTime::from_hms_opt(hour_24, minute, 0)
            .map(Self)
            .ok_or_else(|| parse_error(s, "not a valid time of day"))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hour_24 = self.0.hour();
        let hour_12 = match hour_24 % 12 {
            0 => 12,
            h => h,
        };
        let meridiem = if hour_24 < 12 { "AM" } else { "PM" };
        write!(f, "{}:{:02} {}", hour_12, self.0.minute(), meridiem)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
