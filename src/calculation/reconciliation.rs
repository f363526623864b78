//! The reconciliation entry point.
//!
//! A [`Reconciler`] borrows the weekly schedule and the rule set and turns
//! a batch of employees and punches into ordered day records. Every
//! employee-day is evaluated independently, so a malformed punch only
//! costs its own day.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::config::{EngineConfig, RuleSet, ScheduleRegistry};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    DayError, DayRecord, Employee, PunchEvent, ReportingPeriod, TimeOfDay, weekday_label,
};

use super::day_evaluation::evaluate_day;
use super::punch_grouping::{DayKey, group_punches};

/// The result of reconciling a batch.
///
/// Both lists are ordered by date, then employee id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    /// One record per evaluated employee-day.
    pub records: Vec<DayRecord>,
    /// Employee-days that could not be evaluated.
    pub errors: Vec<DayError>,
}

/// Reconciles punches against a weekly schedule.
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::Reconciler;
/// use timecard_engine::config::{RuleSet, ScheduleRegistry};
/// use timecard_engine::models::{Annotation, Employee, PunchEvent, ShiftPeriod, TimeOfDay};
/// use chrono::{NaiveDate, Weekday};
///
/// let schedule = ScheduleRegistry::new().with_weekday(
///     Weekday::Mon,
///     vec![ShiftPeriod::new(TimeOfDay::at(8, 0), TimeOfDay::at(12, 0))],
/// );
/// let rules = RuleSet::default();
/// let reconciler = Reconciler::new(&schedule, &rules)?;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     name: "Ana Souza".to_string(),
///     registration_number: "M-001".to_string(),
/// };
/// let monday = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
/// let punches = vec![
///     PunchEvent { employee_id: "emp_001".to_string(), date: monday, time: "08:00".to_string() },
///     PunchEvent { employee_id: "emp_001".to_string(), date: monday, time: "12:30".to_string() },
/// ];
///
/// let result = reconciler.reconcile(&[employee], &punches, None)?;
/// assert_eq!(result.records.len(), 1);
/// assert_eq!(result.records[0].metrics.overtime, 30);
/// assert_eq!(result.records[0].annotation, Annotation::Workday);
/// # Ok::<(), timecard_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Reconciler<'a> {
    schedule: &'a ScheduleRegistry,
    rules: &'a RuleSet,
}

impl<'a> Reconciler<'a> {
    /// Creates a reconciler.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyScheduleConfiguration`] if no weekday
    /// has been configured.
    pub fn new(schedule: &'a ScheduleRegistry, rules: &'a RuleSet) -> EngineResult<Self> {
        if schedule.is_empty() {
            return Err(EngineError::EmptyScheduleConfiguration);
        }
        Ok(Self { schedule, rules })
    }

    /// Creates a reconciler over a loaded configuration.
    pub fn from_config(config: &'a EngineConfig) -> EngineResult<Self> {
        Self::new(config.schedule(), config.rules())
    }

    /// Evaluates one employee-day from its sorted punches.
    pub fn evaluate(&self, employee: &Employee, date: NaiveDate, punches: &[TimeOfDay]) -> DayRecord {
        let evaluation = evaluate_day(self.schedule.periods_for_date(date), punches, self.rules);

        if evaluation.dropped_unpaired_punch {
            debug!(
                employee_id = %employee.id,
                date = %date,
                punch_count = punches.len(),
                "Ignoring trailing unpaired punch"
            );
        }

        DayRecord {
            employee_id: employee.id.clone(),
            employee_name: employee.name.clone(),
            registration_number: employee.registration_number.clone(),
            date,
            weekday: weekday_label(date).to_string(),
            metrics: evaluation.metrics,
            annotation: evaluation.annotation,
        }
    }

    /// Reconciles a batch of punches.
    ///
    /// Every employee-day with at least one punch is evaluated. When a
    /// `period` is given, every employee is also evaluated on every day of
    /// it, so scheduled days without punches appear as full absences.
    /// Punches for employees not in `employees` are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPeriod`] if `period` ends before it
    /// starts and [`EngineError::PeriodTooLong`] if it covers more than
    /// [`MAX_PERIOD_DAYS`](crate::models::MAX_PERIOD_DAYS) days. Malformed punches do not fail the batch; they are reported
    /// per day in [`Reconciliation::errors`].
    pub fn reconcile(
        &self,
        employees: &[Employee],
        punches: &[PunchEvent],
        period: Option<&ReportingPeriod>,
    ) -> EngineResult<Reconciliation> {
        if let Some(period) = period {
            period.validate()?;
        }

        let roster: BTreeMap<&str, &Employee> = employees
            .iter()
            .map(|employee| (employee.id.as_str(), employee))
            .collect();

        let (known, unknown): (Vec<&PunchEvent>, Vec<&PunchEvent>) = punches
            .iter()
            .partition(|punch| roster.contains_key(punch.employee_id.as_str()));

        if !unknown.is_empty() {
            let unknown_ids: BTreeSet<&str> =
                unknown.iter().map(|punch| punch.employee_id.as_str()).collect();
            warn!(
                skipped = unknown.len(),
                employees = ?unknown_ids,
                "Skipping punches for unregistered employees"
            );
        }

        let groups = group_punches(known);

        let mut keys = groups.keys();
        if let Some(period) = period {
            for date in period.days() {
                keys.extend(employees.iter().map(|employee| DayKey::new(employee.id.as_str(), date)));
            }
        }

        let mut reconciliation = Reconciliation::default();

        for key in keys {
            let Some(employee) = roster.get(key.employee_id.as_str()) else {
                continue;
            };

            if let Some(error) = groups.rejection_for(&key) {
                warn!(
                    employee_id = %key.employee_id,
                    date = %key.date,
                    error = %error,
                    "Rejecting day with malformed punch"
                );
                reconciliation.errors.push(DayError {
                    employee_id: key.employee_id.clone(),
                    date: key.date,
                    source: error.clone(),
                });
                continue;
            }

            reconciliation
                .records
                .push(self.evaluate(employee, key.date, groups.punches_for(&key)));
        }

        Ok(reconciliation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Annotation, ShiftPeriod};
    use chrono::Weekday;

    fn t(s: &str) -> TimeOfDay {
        TimeOfDay::parse(s).unwrap()
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn schedule() -> ScheduleRegistry {
        ScheduleRegistry::new()
            .with_weekday(
                Weekday::Mon,
                vec![
                    ShiftPeriod::new(t("08:00"), t("12:00")),
                    ShiftPeriod::new(t("13:00"), t("17:00")),
                ],
            )
            .with_weekday(Weekday::Tue, vec![ShiftPeriod::new(t("08:00"), t("16:00"))])
            .with_weekday(Weekday::Sun, vec![])
    }

    fn employee(id: &str) -> Employee {
        Employee {
            id: id.to_string(),
            name: format!("Employee {}", id),
            registration_number: format!("M-{}", id),
        }
    }

    fn punch(employee_id: &str, day: u32, time: &str) -> PunchEvent {
        PunchEvent {
            employee_id: employee_id.to_string(),
            date: date(day),
            time: time.to_string(),
        }
    }

    #[test]
    fn test_empty_schedule_is_rejected_once() {
        let rules = RuleSet::default();
        let empty = ScheduleRegistry::new();
        assert_eq!(
            Reconciler::new(&empty, &rules).unwrap_err(),
            EngineError::EmptyScheduleConfiguration
        );
    }

    #[test]
    fn test_from_config() {
        let config = EngineConfig::new(schedule(), RuleSet::default());
        assert!(Reconciler::from_config(&config).is_ok());
    }

    #[test]
    fn test_reconcile_orders_by_date_then_employee() {
        let (schedule, rules) = (schedule(), RuleSet::default());
        let reconciler = Reconciler::new(&schedule, &rules).unwrap();

        let punches = vec![
            punch("b", 4, "08:00"),
            punch("b", 4, "16:00"),
            punch("b", 3, "08:00"),
            punch("a", 4, "08:00"),
            punch("a", 4, "16:00"),
            punch("b", 3, "12:00"),
        ];
        let result = reconciler
            .reconcile(&[employee("a"), employee("b")], &punches, None)
            .unwrap();

        let order: Vec<(String, NaiveDate)> = result
            .records
            .iter()
            .map(|r| (r.employee_id.clone(), r.date))
            .collect();
        assert_eq!(
            order,
            vec![
                ("b".to_string(), date(3)),
                ("a".to_string(), date(4)),
                ("b".to_string(), date(4)),
            ]
        );
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_reconcile_sorts_unordered_punches() {
        let (schedule, rules) = (schedule(), RuleSet::default());
        let reconciler = Reconciler::new(&schedule, &rules).unwrap();

        let punches = vec![
            punch("a", 3, "17:00"),
            punch("a", 3, "13:00"),
            punch("a", 3, "12:00"),
            punch("a", 3, "08:00"),
        ];
        let result = reconciler.reconcile(&[employee("a")], &punches, None).unwrap();

        let record = &result.records[0];
        assert_eq!(record.metrics.worked, 480);
        assert_eq!(record.metrics.regular, 480);
        assert_eq!(record.weekday, "Mon");
        assert_eq!(record.employee_name, "Employee a");
        assert_eq!(record.registration_number, "M-a");
    }

    #[test]
    fn test_reconcile_period_adds_full_absences_and_days_off() {
        let (schedule, rules) = (schedule(), RuleSet::default());
        let reconciler = Reconciler::new(&schedule, &rules).unwrap();

        // 2025-03-02 (Sun) through 2025-03-04 (Tue)
        let period = ReportingPeriod {
            start_date: date(2),
            end_date: date(4),
        };
        let punches = vec![punch("a", 4, "08:00"), punch("a", 4, "16:00")];
        let result = reconciler
            .reconcile(&[employee("a")], &punches, Some(&period))
            .unwrap();

        assert_eq!(result.records.len(), 3);
        assert_eq!(result.records[0].annotation, Annotation::DayOff);
        assert_eq!(result.records[1].annotation, Annotation::FullAbsence);
        assert_eq!(result.records[1].metrics.absence, 480);
        assert_eq!(result.records[2].annotation, Annotation::Workday);
        assert_eq!(result.records[2].metrics.worked, 480);
    }

    #[test]
    fn test_reconcile_keeps_punched_days_outside_period() {
        let (schedule, rules) = (schedule(), RuleSet::default());
        let reconciler = Reconciler::new(&schedule, &rules).unwrap();

        let period = ReportingPeriod {
            start_date: date(3),
            end_date: date(3),
        };
        let punches = vec![punch("a", 10, "08:00"), punch("a", 10, "12:00")];
        let result = reconciler
            .reconcile(&[employee("a")], &punches, Some(&period))
            .unwrap();

        let dates: Vec<NaiveDate> = result.records.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![date(3), date(10)]);
    }

    #[test]
    fn test_reconcile_inverted_period_fails() {
        let (schedule, rules) = (schedule(), RuleSet::default());
        let reconciler = Reconciler::new(&schedule, &rules).unwrap();

        let period = ReportingPeriod {
            start_date: date(5),
            end_date: date(1),
        };
        match reconciler.reconcile(&[employee("a")], &[], Some(&period)) {
            Err(EngineError::InvalidPeriod { start, end }) => {
                assert_eq!(start, date(5));
                assert_eq!(end, date(1));
            }
            other => panic!("Expected InvalidPeriod, got {:?}", other),
        }
    }

    #[test]
    fn test_reconcile_rejects_period_spanning_whole_calendar() {
        let (schedule, rules) = (schedule(), RuleSet::default());
        let reconciler = Reconciler::new(&schedule, &rules).unwrap();

        let period = ReportingPeriod {
            start_date: NaiveDate::from_ymd_opt(1, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(9999, 12, 31).unwrap(),
        };
        match reconciler.reconcile(&[employee("a")], &[], Some(&period)) {
            Err(EngineError::PeriodTooLong { max_days, .. }) => assert_eq!(max_days, 366),
            other => panic!("Expected PeriodTooLong, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_punch_only_rejects_its_day() {
        let (schedule, rules) = (schedule(), RuleSet::default());
        let reconciler = Reconciler::new(&schedule, &rules).unwrap();

        let punches = vec![
            punch("a", 3, "08:00"),
            punch("a", 3, "8h00"),
            punch("a", 4, "08:00"),
            punch("a", 4, "16:00"),
        ];
        let result = reconciler.reconcile(&[employee("a")], &punches, None).unwrap();

        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0].date, date(4));

        assert_eq!(result.errors.len(), 1);
        let error = &result.errors[0];
        assert_eq!(error.employee_id, "a");
        assert_eq!(error.date, date(3));
        assert!(matches!(error.source, EngineError::MalformedTime { .. }));
    }

    #[test]
    fn test_unknown_employee_punches_are_skipped() {
        let (schedule, rules) = (schedule(), RuleSet::default());
        let reconciler = Reconciler::new(&schedule, &rules).unwrap();

        let punches = vec![
            punch("ghost", 3, "08:00"),
            punch("ghost", 3, "12:00"),
            punch("a", 3, "08:00"),
            punch("a", 3, "12:00"),
        ];
        let result = reconciler.reconcile(&[employee("a")], &punches, None).unwrap();

        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0].employee_id, "a");
    }

    #[test]
    fn test_reconcile_empty_input() {
        let (schedule, rules) = (schedule(), RuleSet::default());
        let reconciler = Reconciler::new(&schedule, &rules).unwrap();

        let result = reconciler.reconcile(&[], &[], None).unwrap();
        assert_eq!(result, Reconciliation::default());
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let (schedule, rules) = (schedule(), RuleSet::default());
        let reconciler = Reconciler::new(&schedule, &rules).unwrap();

        let punches = vec![
            punch("a", 3, "08:20"),
            punch("a", 3, "12:00"),
            punch("a", 3, "13:00"),
        ];
        let employees = [employee("a")];
        let first = reconciler.reconcile(&employees, &punches, None).unwrap();
        let second = reconciler.reconcile(&employees, &punches, None).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_evaluate_single_day() {
        let (schedule, rules) = (schedule(), RuleSet::default());
        let reconciler = Reconciler::new(&schedule, &rules).unwrap();

        let record = reconciler.evaluate(
            &employee("a"),
            date(3),
            &[t("08:20"), t("12:00"), t("13:00"), t("17:00")],
        );
        assert_eq!(record.metrics.lateness, 20);
        assert_eq!(record.metrics.absence, 20);
    }
}
