//! Filtering and totals over reconciled day records.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{DayMetrics, DayRecord, PeriodSummary};

/// Selects day records by employee, month and year.
///
/// Every criterion is optional; an unset criterion matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordFilter {
    /// Only records for this employee.
    pub employee_id: Option<String>,
    /// Only records in this month (1-12).
    pub month: Option<u32>,
    /// Only records in this year.
    pub year: Option<i32>,
}

impl RecordFilter {
    /// Returns true when the record satisfies every set criterion.
    pub fn matches(&self, record: &DayRecord) -> bool {
        self.matches_day(&record.employee_id, record.date)
    }

    /// Returns true when the employee-day satisfies every set criterion.
    pub fn matches_day(&self, employee_id: &str, date: NaiveDate) -> bool {
        self.employee_id.as_deref().is_none_or(|id| employee_id == id)
            && self.month.is_none_or(|month| date.month() == month)
            && self.year.is_none_or(|year| date.year() == year)
    }
}

/// Returns the records matching `filter`, in ascending date order.
///
/// Records on the same date keep their input order. The input is not
/// modified.
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::{RecordFilter, filter_records};
///
/// let filter = RecordFilter { month: Some(3), year: Some(2025), ..RecordFilter::default() };
/// assert!(filter_records(&[], &filter).is_empty());
/// ```
pub fn filter_records(records: &[DayRecord], filter: &RecordFilter) -> Vec<DayRecord> {
    let mut matching: Vec<DayRecord> = records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect();
    matching.sort_by_key(|record| record.date);
    matching
}

/// Sums the six metrics over `records`.
///
/// Day-off and full-absence records are included; `day_count` is the
/// number of records given. Totals saturate at `u32::MAX`.
pub fn summarize(records: &[DayRecord]) -> PeriodSummary {
    let totals = records
        .iter()
        .fold(DayMetrics::default(), |acc, record| DayMetrics {
            worked: acc.worked.saturating_add(record.metrics.worked),
            regular: acc.regular.saturating_add(record.metrics.regular),
            overtime: acc.overtime.saturating_add(record.metrics.overtime),
            absence: acc.absence.saturating_add(record.metrics.absence),
            lateness: acc.lateness.saturating_add(record.metrics.lateness),
            night_premium: acc.night_premium.saturating_add(record.metrics.night_premium),
        });

    PeriodSummary {
        totals,
        day_count: records.len(),
    }
}
