//! Per-day reconciliation output.
//!
//! This module contains [`DayRecord`], the immutable result of reconciling
//! one employee's punches against the schedule for one calendar day, along
//! with its [`DayMetrics`], its [`Annotation`], and [`DayError`] for days
//! that could not be evaluated.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::EngineError;

use super::duration::hhmm;

/// The six minute-valued metrics of a reconciled day.
///
/// Every value is a non-negative number of minutes and serializes as an
/// `HH:MM` string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayMetrics {
    /// Total minutes covered by paired punches.
    #[serde(with = "hhmm")]
    pub worked: u32,
    /// Worked minutes up to the expected schedule duration.
    #[serde(with = "hhmm")]
    pub regular: u32,
    /// Worked minutes beyond the expected duration, or all of them on a day off.
    #[serde(with = "hhmm")]
    pub overtime: u32,
    /// Expected minutes not covered by worked time.
    #[serde(with = "hhmm")]
    pub absence: u32,
    /// Minutes the arrival exceeded the expected start, beyond tolerance.
    #[serde(with = "hhmm")]
    pub lateness: u32,
    /// Worked minutes inside the night window.
    #[serde(with = "hhmm")]
    pub night_premium: u32,
}

/// Free-text note attached to a day record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Annotation {
    /// A normal scheduled day with at least one punch.
    Workday,
    /// No work was scheduled for the weekday.
    DayOff,
    /// Work was scheduled but no punch was recorded.
    FullAbsence,
}

impl Annotation {
    /// Returns the report text for this annotation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Annotation::Workday => "",
            Annotation::DayOff => "day off",
            Annotation::FullAbsence => "full absence",
        }
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Annotation> for String {
    fn from(annotation: Annotation) -> Self {
        annotation.as_str().to_string()
    }
}

impl TryFrom<String> for Annotation {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "" => Ok(Annotation::Workday),
            "day off" => Ok(Annotation::DayOff),
            "full absence" => Ok(Annotation::FullAbsence),
            other => Err(format!("unknown annotation '{}'", other)),
        }
    }
}

/// Short English label for a weekday, Sunday first.
const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Returns the short label (`Sun`..`Sat`) for a date.
pub fn weekday_label(date: NaiveDate) -> &'static str {
    WEEKDAY_LABELS[date.weekday().num_days_from_sunday() as usize]
}

/// The reconciliation of one employee's punches for one calendar day.
///
/// Records are unique by `(employee_id, date)` and never change after they
/// are produced.
///
/// # Example
///
/// ```
/// use timecard_engine::models::{Annotation, DayMetrics, DayRecord};
/// use chrono::NaiveDate;
///
/// let record = DayRecord {
///     employee_id: "emp_001".to_string(),
///     employee_name: "Ana Souza".to_string(),
///     registration_number: "M-001".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
///     weekday: "Mon".to_string(),
///     metrics: DayMetrics { worked: 480, regular: 480, ..DayMetrics::default() },
///     annotation: Annotation::Workday,
/// };
///
/// let json = serde_json::to_value(&record).unwrap();
/// assert_eq!(json["metrics"]["worked"], "08:00");
/// assert_eq!(json["annotation"], "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// The employee identifier.
    pub employee_id: String,
    /// The employee display name.
    pub employee_name: String,
    /// The employee badge number.
    pub registration_number: String,
    /// The calendar day reconciled.
    pub date: NaiveDate,
    /// Short weekday label (`Sun`..`Sat`).
    pub weekday: String,
    /// The six minute metrics.
    pub metrics: DayMetrics,
    /// Note describing the kind of day.
    pub annotation: Annotation,
}

/// A day that could not be evaluated, with enough context to highlight it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("employee '{employee_id}' on {date}: {source}")]
pub struct DayError {
    /// The employee whose day failed.
    pub employee_id: String,
    /// The day that failed.
    pub date: NaiveDate,
    /// The underlying failure.
    #[source]
    pub source: EngineError,
}
