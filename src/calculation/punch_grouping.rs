//! Grouping of raw punches into employee-days.
//!
//! Punches arrive in no particular order. This module buckets them by
//! `(date, employee)`, parses their times, and sorts each bucket so that
//! consecutive punches can be paired into clock-in/clock-out intervals.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::error::EngineError;
use crate::models::{PunchEvent, TimeOfDay};

/// Identifies one employee-day. Orders by date first, then employee.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey {
    /// The calendar day.
    pub date: NaiveDate,
    /// The employee identifier.
    pub employee_id: String,
}

impl DayKey {
    /// Creates a new key.
    pub fn new(employee_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            date,
            employee_id: employee_id.into(),
        }
    }
}

/// Punches bucketed by employee-day.
///
/// A day holding a punch with a malformed time is recorded as rejected,
/// keeping the first parse error seen for it; other days are unaffected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PunchGroups {
    days: BTreeMap<DayKey, Vec<TimeOfDay>>,
    rejected: BTreeMap<DayKey, EngineError>,
}

impl PunchGroups {
    /// Returns the sorted punches for a day, empty if none were recorded.
    pub fn punches_for(&self, key: &DayKey) -> &[TimeOfDay] {
        self.days.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the parse error that rejected a day, if any.
    pub fn rejection_for(&self, key: &DayKey) -> Option<&EngineError> {
        self.rejected.get(key)
    }

    /// Every employee-day that appeared in the input, in key order.
    pub fn keys(&self) -> BTreeSet<DayKey> {
        self.days
            .keys()
            .chain(self.rejected.keys())
            .cloned()
            .collect()
    }

    /// Number of distinct employee-days that appeared in the input.
    pub fn len(&self) -> usize {
        self.keys().len()
    }

    /// Returns true when no punch was grouped.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty() && self.rejected.is_empty()
    }
}

/// Groups punches by `(date, employee)` and sorts each day ascending.
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::{DayKey, group_punches};
/// use timecard_engine::models::{PunchEvent, TimeOfDay};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
/// let punch = |time: &str| PunchEvent {
///     employee_id: "emp_001".to_string(),
///     date,
///     time: time.to_string(),
/// };
///
/// let groups = group_punches(&[punch("17:00"), punch("08:00"), punch("12:00")]);
/// let day = groups.punches_for(&DayKey::new("emp_001", date));
/// assert_eq!(day, &[TimeOfDay::at(8, 0), TimeOfDay::at(12, 0), TimeOfDay::at(17, 0)]);
/// ```
pub fn group_punches<'a, I>(punches: I) -> PunchGroups
where
    I: IntoIterator<Item = &'a PunchEvent>,
{
    let mut groups = PunchGroups::default();

    for punch in punches {
        let key = DayKey::new(punch.employee_id.as_str(), punch.date);
        match punch.time_of_day() {
            Ok(time) => groups.days.entry(key).or_default().push(time),
            Err(err) => {
                groups.rejected.entry(key).or_insert(err);
            }
        }
    }

    for times in groups.days.values_mut() {
        times.sort_unstable();
    }

    groups
}

/// Pairs sequential punches into `(clock_in, clock_out)` intervals.
///
/// A trailing unpaired punch is dropped.
pub fn pair_punches(punches: &[TimeOfDay]) -> impl Iterator<Item = (TimeOfDay, TimeOfDay)> + '_ {
    punches.chunks_exact(2).map(|pair| (pair[0], pair[1]))
}
