//! Error types for the Timecard Reconciliation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while reconciling punches
//! against a work schedule.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Timecard Reconciliation Engine.
///
/// # Example
///
/// ```
/// use timecard_engine::error::EngineError;
///
/// let error = EngineError::MalformedTime {
///     value: "8h00".to_string(),
///     message: "expected HH:MM".to_string(),
/// };
/// assert_eq!(error.to_string(), "Malformed time of day '8h00': expected HH:MM");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The schedule registry has no weekday entries at all.
    #[error("Schedule configuration is empty: no weekday has been configured")]
    EmptyScheduleConfiguration,

    /// A time-of-day string did not match `HH:MM` with valid ranges.
    #[error("Malformed time of day '{value}': {message}")]
    MalformedTime {
        /// The offending input.
        value: String,
        /// What was wrong with it.
        message: String,
    },

    /// A reporting period ends before it starts.
    #[error("Invalid reporting period: end date {end} is before start date {start}")]
    InvalidPeriod {
        /// The first day of the period.
        start: NaiveDate,
        /// The last day of the period.
        end: NaiveDate,
    },

    /// A reporting period covers more days than the engine will expand.
    #[error("Reporting period {start} to {end} exceeds the maximum of {max_days} days")]
    PeriodTooLong {
        /// The first day of the period.
        start: NaiveDate,
        /// The last day of the period.
        end: NaiveDate,
        /// The longest accepted period, in days.
        max_days: i64,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
