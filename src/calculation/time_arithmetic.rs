//! Minute arithmetic over times of day.
//!
//! Spans are measured on a two-day axis: when the end of a span is earlier
//! than its start the span is taken to finish on the following day, so a
//! span is never negative and never reaches a full 24 hours.

use crate::config::NightWindow;
use crate::models::{MINUTES_PER_DAY, ShiftPeriod, TimeOfDay};

/// Returns the length of the span from `start` to `end` in minutes.
///
/// If `end < start` the span crosses midnight and 1440 is added to `end`
/// before subtracting.
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::span_minutes;
/// use timecard_engine::models::TimeOfDay;
///
/// assert_eq!(span_minutes(TimeOfDay::at(8, 0), TimeOfDay::at(12, 0)), 240);
/// assert_eq!(span_minutes(TimeOfDay::at(23, 30), TimeOfDay::at(2, 0)), 150);
/// assert_eq!(span_minutes(TimeOfDay::at(9, 0), TimeOfDay::at(9, 0)), 0);
/// ```
pub fn span_minutes(start: TimeOfDay, end: TimeOfDay) -> u32 {
    let start = start.to_minutes();
    let mut end = end.to_minutes();
    if end < start {
        end += MINUTES_PER_DAY;
    }
    end - start
}

/// Returns the total expected minutes of a day's schedule.
pub fn expected_minutes(periods: &[ShiftPeriod]) -> u32 {
    periods.iter().map(|p| span_minutes(p.start, p.end)).sum()
}

/// Returns how many minutes of the span `start`–`end` fall inside the
/// night window.
///
/// Both the span and the window may cross midnight. The window is anchored
/// on the day the span starts, so the standard window covers 22:00 to 24:00
/// of that day and 00:00 to 05:00 of the next. Early-morning work before
/// the first window of the span's own day earns nothing.
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::night_overlap_minutes;
/// use timecard_engine::config::NightWindow;
/// use timecard_engine::models::TimeOfDay;
///
/// let window = NightWindow::STANDARD;
/// // 21:00 to 23:00: one hour inside 22:00-05:00
/// assert_eq!(night_overlap_minutes(TimeOfDay::at(21, 0), TimeOfDay::at(23, 0), &window), 60);
/// // 23:30 to 02:00: entirely inside
/// assert_eq!(night_overlap_minutes(TimeOfDay::at(23, 30), TimeOfDay::at(2, 0), &window), 150);
/// // 08:00 to 17:00: daytime
/// assert_eq!(night_overlap_minutes(TimeOfDay::at(8, 0), TimeOfDay::at(17, 0), &window), 0);
/// ```
pub fn night_overlap_minutes(start: TimeOfDay, end: TimeOfDay, window: &NightWindow) -> u32 {
    let window_len = i64::from(span_minutes(window.start, window.end));
    if window_len == 0 {
        return 0;
    }

    let span_start = i64::from(start.to_minutes());
    let span_end = span_start + i64::from(span_minutes(start, end));
    let window_start = i64::from(window.start.to_minutes());
    let window_end = window_start + window_len;

    let overlap = (span_end.min(window_end) - span_start.max(window_start)).max(0);

    // Bounded by the span length, which is below 1440.
    overlap as u32
}
