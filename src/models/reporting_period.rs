//! Reporting period model.
//!
//! A [`ReportingPeriod`] names the calendar days a caller wants evaluated
//! for every employee, so that days with scheduled work but no punches
//! still show up as absences.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The longest reporting period accepted, in days (one leap year).
pub const MAX_PERIOD_DAYS: i64 = 366;

/// An inclusive range of calendar days.
///
/// # Example
///
/// ```
/// use timecard_engine::models::ReportingPeriod;
/// use chrono::NaiveDate;
///
/// let period = ReportingPeriod {
///     start_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()));
/// assert_eq!(period.days().count(), 31);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingPeriod {
    /// The first day of the period (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the period (inclusive).
    pub end_date: NaiveDate,
}

impl ReportingPeriod {
    /// Checks the period is not inverted and spans at most
    /// [`MAX_PERIOD_DAYS`] days.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPeriod` when the end precedes the start and
    /// `PeriodTooLong` when the range is longer than the limit.
    pub fn validate(&self) -> EngineResult<()> {
        if self.end_date < self.start_date {
            return Err(EngineError::InvalidPeriod {
                start: self.start_date,
                end: self.end_date,
            });
        }
        if self.day_count() > MAX_PERIOD_DAYS {
            return Err(EngineError::PeriodTooLong {
                start: self.start_date,
                end: self.end_date,
                max_days: MAX_PERIOD_DAYS,
            });
        }
        Ok(())
    }

    /// Number of days in the period, counting both ends.
    pub fn day_count(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Checks if a given date falls within this period (inclusive).
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Iterates over every day in the period in ascending order.
    ///
    /// An inverted period yields nothing.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start_date
            .iter_days()
            .take_while(move |date| *date <= self.end_date)
    }
}
