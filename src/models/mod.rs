//! Core data models for the Timecard Reconciliation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod day_record;
mod duration;
mod employee;
mod period_summary;
mod punch;
mod reporting_period;
mod shift_period;
mod time_of_day;

pub use day_record::{Annotation, DayError, DayMetrics, DayRecord, weekday_label};
pub use duration::{format_minutes, hhmm, minutes_to_hours, parse_duration};
pub use employee::Employee;
pub use period_summary::{PeriodSummary, SummaryHours};
pub use punch::PunchEvent;
pub use reporting_period::{MAX_PERIOD_DAYS, ReportingPeriod};
pub use shift_period::ShiftPeriod;
pub use time_of_day::{MINUTES_PER_DAY, TimeOfDay};
