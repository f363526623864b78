//! Day evaluation: the core reconciliation of one employee-day.
//!
//! Given the expected shift periods for the weekday and the day's punches
//! in order, this module produces the six day metrics:
//!
//! 1. **Day off** (empty schedule): punches are paired sequentially and all
//!    worked time is overtime.
//! 2. **Full absence** (schedule but no punches): the whole expected
//!    duration is absence.
//! 3. **Workday**: worked time up to the expected duration is regular, the
//!    excess is overtime and the shortfall is absence. Lateness follows the
//!    configured [`LatenessRule`](crate::config::LatenessRule).
//!
//! In every case an odd trailing punch is ignored rather than treated as an
//! open interval.

use serde::Serialize;

use crate::config::RuleSet;
use crate::models::{Annotation, DayMetrics, ShiftPeriod, TimeOfDay};

use super::lateness::calculate_lateness;
use super::punch_grouping::pair_punches;
use super::time_arithmetic::{expected_minutes, night_overlap_minutes, span_minutes};

/// The outcome of evaluating one employee-day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayEvaluation {
    /// The six minute metrics.
    pub metrics: DayMetrics,
    /// What kind of day this was.
    pub annotation: Annotation,
    /// True when an odd punch count forced the last punch to be dropped.
    pub dropped_unpaired_punch: bool,
}

/// Worked and night-premium minutes of sequentially paired punches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct PairedTotals {
    worked: u32,
    night_premium: u32,
}

fn total_paired(punches: &[TimeOfDay], rules: &RuleSet) -> PairedTotals {
    pair_punches(punches).fold(PairedTotals::default(), |acc, (clock_in, clock_out)| {
        PairedTotals {
            worked: acc.worked + span_minutes(clock_in, clock_out),
            night_premium: acc.night_premium
                + night_overlap_minutes(clock_in, clock_out, &rules.night_window),
        }
    })
}

/// Evaluates one employee-day.
///
/// `punches` must already be in the order they should be paired in; the
/// punch grouper supplies them sorted ascending.
///
/// # Examples
///
/// ## Normal day
///
/// ```
/// use timecard_engine::calculation::evaluate_day;
/// use timecard_engine::config::RuleSet;
/// use timecard_engine::models::{Annotation, ShiftPeriod, TimeOfDay};
///
/// let t = |s: &str| TimeOfDay::parse(s).unwrap();
/// let schedule = [
///     ShiftPeriod::new(t("08:00"), t("12:00")),
///     ShiftPeriod::new(t("13:00"), t("17:00")),
/// ];
/// let punches = [t("08:20"), t("12:00"), t("13:00"), t("17:00")];
///
/// let day = evaluate_day(&schedule, &punches, &RuleSet::default());
/// assert_eq!(day.metrics.worked, 460);
/// assert_eq!(day.metrics.regular, 460);
/// assert_eq!(day.metrics.absence, 20);
/// assert_eq!(day.metrics.lateness, 20);
/// assert_eq!(day.annotation, Annotation::Workday);
/// ```
///
/// ## Day off
///
/// ```
/// use timecard_engine::calculation::evaluate_day;
/// use timecard_engine::config::RuleSet;
/// use timecard_engine::models::{Annotation, TimeOfDay};
///
/// let punches = [TimeOfDay::at(23, 30), TimeOfDay::at(2, 0)];
/// let day = evaluate_day(&[], &punches, &RuleSet::default());
/// assert_eq!(day.metrics.worked, 150);
/// assert_eq!(day.metrics.overtime, 150);
/// assert_eq!(day.metrics.night_premium, 150);
/// assert_eq!(day.annotation, Annotation::DayOff);
/// ```
pub fn evaluate_day(
    schedule: &[ShiftPeriod],
    punches: &[TimeOfDay],
    rules: &RuleSet,
) -> DayEvaluation {
    let dropped_unpaired_punch = punches.len() % 2 == 1;

    if schedule.is_empty() {
        let paired = total_paired(punches, rules);
        return DayEvaluation {
            metrics: DayMetrics {
                worked: paired.worked,
                overtime: paired.worked,
                night_premium: paired.night_premium,
                ..DayMetrics::default()
            },
            annotation: Annotation::DayOff,
            dropped_unpaired_punch,
        };
    }

    let expected = expected_minutes(schedule);

    if punches.is_empty() {
        return DayEvaluation {
            metrics: DayMetrics {
                absence: expected,
                ..DayMetrics::default()
            },
            annotation: Annotation::FullAbsence,
            dropped_unpaired_punch: false,
        };
    }

    let paired = total_paired(punches, rules);
    let worked = paired.worked;

    let (regular, overtime, absence) = if worked <= expected {
        (worked, 0, expected - worked)
    } else {
        (expected, worked - expected, 0)
    };

    DayEvaluation {
        metrics: DayMetrics {
            worked,
            regular,
            overtime,
            absence,
            lateness: calculate_lateness(schedule, punches, &rules.lateness),
            night_premium: paired.night_premium,
        },
        annotation: Annotation::Workday,
        dropped_unpaired_punch,
    }
}
