//! Shift period model.
//!
//! This module defines [`ShiftPeriod`], one expected contiguous work
//! interval inside a day's schedule.

use serde::{Deserialize, Serialize};

use super::TimeOfDay;

/// One expected work interval within a day.
///
/// An `end` earlier than `start` means the interval crosses midnight,
/// e.g. `23:30`–`02:00`.
///
/// # Example
///
/// ```
/// use timecard_engine::models::{ShiftPeriod, TimeOfDay};
///
/// let late = ShiftPeriod::new(
///     TimeOfDay::parse("23:30").unwrap(),
///     TimeOfDay::parse("02:00").unwrap(),
/// );
/// assert!(late.crosses_midnight());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftPeriod {
    /// Expected clock-in.
    pub start: TimeOfDay,
    /// Expected clock-out.
    pub end: TimeOfDay,
}

impl ShiftPeriod {
    /// Creates a new shift period.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    /// Returns true when the period ends on the following day.
    pub fn crosses_midnight(&self) -> bool {
        self.end < self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> TimeOfDay {
        TimeOfDay::parse(s).unwrap()
    }

    #[test]
    fn test_crosses_midnight() {
        assert!(ShiftPeriod::new(t("22:00"), t("06:00")).crosses_midnight());
        assert!(!ShiftPeriod::new(t("08:00"), t("12:00")).crosses_midnight());
        assert!(!ShiftPeriod::new(t("08:00"), t("08:00")).crosses_midnight());
    }

    #[test]
    fn test_deserialize_from_yaml_strings() {
        let yaml = "start: \"13:00\"\nend: \"17:00\"\n";
        let period: ShiftPeriod = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(period, ShiftPeriod::new(t("13:00"), t("17:00")));
    }

    #[test]
    fn test_deserialize_rejects_malformed_time() {
        let yaml = "start: \"13h00\"\nend: \"17:00\"\n";
        let result: Result<ShiftPeriod, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }
}
