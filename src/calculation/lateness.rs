//! Lateness calculation.
//!
//! Two policies are supported, selected by [`LatenessMode`]:
//!
//! - [`LatenessMode::FirstPeriod`] compares the first punch of the day with
//!   the start of the first scheduled period. If the punch is later by more
//!   than the tolerance, the whole delay counts, not just the part past the
//!   tolerance.
//! - [`LatenessMode::EveryPeriod`] compares the clock-in of each punch pair
//!   with the start of the scheduled period at the same position, applying
//!   the per-occurrence tolerance to each and summing the full delays.
//!
//! Times are compared as minutes since midnight without wrapping, so a
//! clock-in earlier than the expected start is never late.

use crate::config::{LatenessMode, LatenessRule};
use crate::models::{ShiftPeriod, TimeOfDay};

use super::punch_grouping::pair_punches;

/// Returns the full delay of `actual` after `expected` when it exceeds
/// `tolerance`, otherwise zero.
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::delay_beyond_tolerance;
/// use timecard_engine::models::TimeOfDay;
///
/// let expected = TimeOfDay::at(8, 0);
/// assert_eq!(delay_beyond_tolerance(TimeOfDay::at(8, 20), expected, 10), 20);
/// assert_eq!(delay_beyond_tolerance(TimeOfDay::at(8, 10), expected, 10), 0);
/// assert_eq!(delay_beyond_tolerance(TimeOfDay::at(7, 50), expected, 10), 0);
/// ```
pub fn delay_beyond_tolerance(actual: TimeOfDay, expected: TimeOfDay, tolerance: u32) -> u32 {
    let delay = actual.to_minutes().saturating_sub(expected.to_minutes());
    if delay > tolerance { delay } else { 0 }
}

/// Calculates the lateness minutes of a day under the given rule.
///
/// Returns zero when either the schedule or the punches are empty.
pub fn calculate_lateness(
    schedule: &[ShiftPeriod],
    punches: &[TimeOfDay],
    rule: &LatenessRule,
) -> u32 {
    match rule.mode {
        LatenessMode::FirstPeriod => match (punches.first(), schedule.first()) {
            (Some(first_punch), Some(first_period)) => {
                delay_beyond_tolerance(*first_punch, first_period.start, rule.tolerance_minutes)
            }
            _ => 0,
        },
        LatenessMode::EveryPeriod => pair_punches(punches)
            .zip(schedule)
            .map(|((clock_in, _), period)| {
                delay_beyond_tolerance(
                    clock_in,
                    period.start,
                    rule.per_occurrence_tolerance_minutes,
                )
            })
            .sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> TimeOfDay {
        TimeOfDay::parse(s).unwrap()
    }

    fn times(values: &[&str]) -> Vec<TimeOfDay> {
        values.iter().map(|v| t(v)).collect()
    }

    fn two_period_schedule() -> Vec<ShiftPeriod> {
        vec![
            ShiftPeriod::new(t("08:00"), t("12:00")),
            ShiftPeriod::new(t("13:00"), t("17:00")),
        ]
    }

    fn first_period_rule() -> LatenessRule {
        LatenessRule::default()
    }

    fn every_period_rule() -> LatenessRule {
        LatenessRule {
            mode: LatenessMode::EveryPeriod,
            ..LatenessRule::default()
        }
    }

    #[test]
    fn test_first_period_on_time() {
        let punches = times(&["08:00", "12:00", "13:00", "17:00"]);
        assert_eq!(
            calculate_lateness(&two_period_schedule(), &punches, &first_period_rule()),
            0
        );
    }

    #[test]
    fn test_first_period_within_tolerance() {
        let punches = times(&["08:10", "12:00"]);
        assert_eq!(
            calculate_lateness(&two_period_schedule(), &punches, &first_period_rule()),
            0
        );
    }

    #[test]
    fn test_first_period_just_past_tolerance_counts_full_delay() {
        let punches = times(&["08:11", "12:00"]);
        assert_eq!(
            calculate_lateness(&two_period_schedule(), &punches, &first_period_rule()),
            11
        );
    }

    #[test]
    fn test_first_period_ignores_later_periods() {
        // Back from lunch 40 minutes late, but only the first start is checked
        let punches = times(&["08:00", "12:00", "13:40", "17:00"]);
        assert_eq!(
            calculate_lateness(&two_period_schedule(), &punches, &first_period_rule()),
            0
        );
    }

    #[test]
    fn test_first_period_early_arrival_is_not_late() {
        let punches = times(&["07:30", "12:00"]);
        assert_eq!(
            calculate_lateness(&two_period_schedule(), &punches, &first_period_rule()),
            0
        );
    }

    #[test]
    fn test_first_period_single_punch_still_checked() {
        let punches = times(&["08:25"]);
        assert_eq!(
            calculate_lateness(&two_period_schedule(), &punches, &first_period_rule()),
            25
        );
    }

    #[test]
    fn test_empty_inputs_are_never_late() {
        assert_eq!(
            calculate_lateness(&[], &times(&["09:00", "10:00"]), &first_period_rule()),
            0
        );
        assert_eq!(
            calculate_lateness(&two_period_schedule(), &[], &first_period_rule()),
            0
        );
        assert_eq!(
            calculate_lateness(&two_period_schedule(), &[], &every_period_rule()),
            0
        );
    }

    #[test]
    fn test_every_period_sums_each_occurrence() {
        let punches = times(&["08:06", "12:00", "13:20", "17:00"]);
        assert_eq!(
            calculate_lateness(&two_period_schedule(), &punches, &every_period_rule()),
            6 + 20
        );
    }

    #[test]
    fn test_every_period_respects_per_occurrence_tolerance() {
        let punches = times(&["08:05", "12:00", "13:04", "17:00"]);
        assert_eq!(
            calculate_lateness(&two_period_schedule(), &punches, &every_period_rule()),
            0
        );
    }

    #[test]
    fn test_every_period_ignores_unpaired_and_unscheduled_pairs() {
        // Third pair has no matching period; trailing punch has no pair.
        let punches = times(&[
            "08:00", "12:00", "13:00", "17:00", "18:30", "19:00", "20:00",
        ]);
        assert_eq!(
            calculate_lateness(&two_period_schedule(), &punches, &every_period_rule()),
            0
        );
    }

    #[test]
    fn test_custom_tolerance() {
        let rule = LatenessRule {
            tolerance_minutes: 0,
            ..LatenessRule::default()
        };
        let punches = times(&["08:01", "12:00"]);
        assert_eq!(calculate_lateness(&two_period_schedule(), &punches, &rule), 1);
    }
}
