//! Calculation logic for timecard reconciliation.
//!
//! This module contains the minute arithmetic over times of day, punch
//! grouping and pairing, lateness policies, the per-day evaluation that
//! produces worked, regular, overtime, absence, lateness and night premium
//! minutes, the batch reconciler, and filtering and totals over the
//! resulting day records.

mod aggregation;
mod day_evaluation;
mod lateness;
mod punch_grouping;
mod reconciliation;
mod time_arithmetic;

pub use aggregation::{RecordFilter, filter_records, summarize};
pub use day_evaluation::{DayEvaluation, evaluate_day};
pub use lateness::{calculate_lateness, delay_beyond_tolerance};
pub use punch_grouping::{DayKey, PunchGroups, group_punches, pair_punches};
pub use reconciliation::{Reconciler, Reconciliation};
pub use time_arithmetic::{expected_minutes, night_overlap_minutes, span_minutes};
