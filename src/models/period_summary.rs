//! Period summary model.
//!
//! A [`PeriodSummary`] totals the six day metrics over a filtered set of
//! day records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::DayMetrics;
use super::duration::minutes_to_hours;

/// Totals of the six day metrics plus the number of days summed.
///
/// Serializes the totals as `HH:MM` strings, like [`DayMetrics`].
///
/// # Example
///
/// ```
/// use timecard_engine::models::{DayMetrics, PeriodSummary};
///
/// let summary = PeriodSummary {
///     totals: DayMetrics { worked: 900, regular: 900, ..DayMetrics::default() },
///     day_count: 2,
/// };
/// let json = serde_json::to_value(&summary).unwrap();
/// assert_eq!(json["worked"], "15:00");
/// assert_eq!(json["day_count"], 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// Summed metrics.
    #[serde(flatten)]
    pub totals: DayMetrics,
    /// Number of day records summed.
    pub day_count: usize,
}

/// Decimal-hour view of a [`PeriodSummary`], for payroll export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryHours {
    /// Worked hours.
    #[serde(with = "rust_decimal::serde::str")]
    pub worked: Decimal,
    /// Regular hours.
    #[serde(with = "rust_decimal::serde::str")]
    pub regular: Decimal,
    /// Overtime hours.
    #[serde(with = "rust_decimal::serde::str")]
    pub overtime: Decimal,
    /// Absence hours.
    #[serde(with = "rust_decimal::serde::str")]
    pub absence: Decimal,
    /// Lateness hours.
    #[serde(with = "rust_decimal::serde::str")]
    pub lateness: Decimal,
    /// Night premium hours.
    #[serde(with = "rust_decimal::serde::str")]
    pub night_premium: Decimal,
}

impl PeriodSummary {
    /// Returns the totals converted to decimal hours (two places).
    pub fn hours(&self) -> SummaryHours {
        SummaryHours {
            worked: minutes_to_hours(self.totals.worked),
            regular: minutes_to_hours(self.totals.regular),
            overtime: minutes_to_hours(self.totals.overtime),
            absence: minutes_to_hours(self.totals.absence),
            lateness: minutes_to_hours(self.totals.lateness),
            night_premium: minutes_to_hours(self.totals.night_premium),
        }
    }
}
