//! Punch event model.
//!
//! A punch is a single clock-in or clock-out as handed over by the
//! attendance collaborator. The time is kept as the raw string so that a
//! malformed value can be reported against its day instead of failing the
//! whole batch on deserialization.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;

use super::TimeOfDay;

/// A single recorded clock-in or clock-out.
///
/// # Example
///
/// ```
/// use timecard_engine::models::{PunchEvent, TimeOfDay};
/// use chrono::NaiveDate;
///
/// let punch = PunchEvent {
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
///     time: "08:02".to_string(),
/// };
/// assert_eq!(punch.time_of_day().unwrap(), TimeOfDay::from_hm(8, 2).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunchEvent {
    /// The employee the punch belongs to.
    pub employee_id: String,
    /// The calendar date of the punch.
    pub date: NaiveDate,
    /// The time of day, as `HH:MM`.
    pub time: String,
}

impl PunchEvent {
    /// Parses the punch time.
    pub fn time_of_day(&self) -> EngineResult<TimeOfDay> {
        TimeOfDay::parse(&self.time)
    }

    /// Returns the weekday number, 0 = Sunday through 6 = Saturday.
    pub fn weekday_number(&self) -> u32 {
        self.date.weekday().num_days_from_sunday()
    }
}
