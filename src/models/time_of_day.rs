//! Time-of-day model.
//!
//! This module defines [`TimeOfDay`], a wall-clock time with minute
//! precision that is parsed from and rendered as `HH:MM`. Both punches and
//! schedule periods are expressed with it.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{EngineError, EngineResult};

/// Number of minutes in a calendar day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A wall-clock time with minute precision, stored as minutes since midnight.
///
/// The value is always in `[0, 1440)`. Parsing is strict: the input must be
/// `HH:MM` with an hour in `00..=23` and a minute in `00..=59`.
///
/// # Example
///
/// ```
/// use timecard_engine::models::TimeOfDay;
///
/// let time = TimeOfDay::parse("13:45").unwrap();
/// assert_eq!(time.to_minutes(), 13 * 60 + 45);
/// assert_eq!(time.to_string(), "13:45");
///
/// assert!(TimeOfDay::parse("13h45").is_err());
/// assert!(TimeOfDay::parse("24:00").is_err());
/// assert!(TimeOfDay::parse("8:05").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    minutes: u32,
}

impl TimeOfDay {
    /// Midnight, `00:00`.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { minutes: 0 };

    /// Builds a time in a constant context.
    ///
    /// # Panics
    ///
    /// Panics when `hour >= 24` or `minute >= 60`; use [`TimeOfDay::from_hm`]
    /// for values that are not known at compile time.
    pub const fn at(hour: u32, minute: u32) -> Self {
        assert!(hour < 24 && minute < 60, "time of day out of range");
        Self {
            minutes: hour * 60 + minute,
        }
    }

    /// Builds a time from an hour and a minute, or `None` when out of range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self {
                minutes: hour * 60 + minute,
            })
        } else {
            None
        }
    }

    /// Builds a time from minutes since midnight, or `None` when `>= 1440`.
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self { minutes })
    }

    /// Parses an `HH:MM` string.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MalformedTime`] when the separator is missing,
    /// either part is not a plain decimal number, or a value is out of range.
    pub fn parse(value: &str) -> EngineResult<Self> {
        let malformed = |message: &str| EngineError::MalformedTime {
            value: value.to_string(),
            message: message.to_string(),
        };

        let (hour_part, minute_part) = value
            .split_once(':')
            .ok_or_else(|| malformed("expected HH:MM with a ':' separator"))?;

        if hour_part.len() != 2 || !hour_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed("hour must be exactly two digits"));
        }
        if minute_part.len() != 2 || !minute_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed("minute must be exactly two digits"));
        }

        // Both parts are at most two ASCII digits, so these cannot fail.
        let hour: u32 = hour_part.parse().map_err(|_| malformed("invalid hour"))?;
        let minute: u32 = minute_part
            .parse()
            .map_err(|_| malformed("invalid minute"))?;

        if hour > 23 {
            return Err(malformed("hour out of range 00-23"));
        }
        if minute > 59 {
            return Err(malformed("minute out of range 00-59"));
        }

        Ok(Self {
            minutes: hour * 60 + minute,
        })
    }

    /// Returns the number of minutes since midnight, in `[0, 1440)`.
    pub fn to_minutes(self) -> u32 {
        self.minutes
    }

    /// Returns the hour component.
    pub fn hour(self) -> u32 {
        self.minutes / 60
    }

    /// Returns the minute component.
    pub fn minute(self) -> u32 {
        self.minutes % 60
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Seconds are truncated.
impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        Self {
            minutes: time.hour() * 60 + time.minute(),
        }
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        TimeOfDay::parse(&raw).map_err(serde::de::Error::custom)
    }
}
