//! Configuration types for timecard reconciliation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files: the weekly schedule
//! registry and the rule set (lateness policy and night window).

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::models::{ShiftPeriod, TimeOfDay};

/// Default tolerance before a late first arrival counts as lateness.
pub const DEFAULT_LATENESS_TOLERANCE_MINUTES: u32 = 10;

/// Default tolerance per clock-in under [`LatenessMode::EveryPeriod`].
pub const DEFAULT_PER_OCCURRENCE_TOLERANCE_MINUTES: u32 = 5;

/// Weekdays in report order, Sunday first.
const WEEK: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Expected shift periods for each weekday.
///
/// Weekdays are numbered 0 = Sunday through 6 = Saturday. A weekday that
/// is missing, or configured with an empty list, is a day off.
///
/// # Example
///
/// ```
/// use timecard_engine::config::ScheduleRegistry;
/// use timecard_engine::models::{ShiftPeriod, TimeOfDay};
/// use chrono::Weekday;
///
/// let registry = ScheduleRegistry::new().with_weekday(
///     Weekday::Mon,
///     vec![ShiftPeriod::new(TimeOfDay::at(8, 0), TimeOfDay::at(12, 0))],
/// );
///
/// assert_eq!(registry.periods_for(1).len(), 1);
/// assert!(registry.periods_for(0).is_empty()); // Sunday: day off
/// assert!(registry.periods_for(9).is_empty()); // unknown weekday: day off
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "BTreeMap<String, Vec<ShiftPeriod>>")]
pub struct ScheduleRegistry {
    periods: BTreeMap<u32, Vec<ShiftPeriod>>,
}

impl ScheduleRegistry {
    /// Creates a registry with no configured weekdays.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the periods for a weekday, replacing any previous entry.
    pub fn insert(&mut self, weekday: Weekday, periods: Vec<ShiftPeriod>) {
        self.periods
            .insert(weekday.num_days_from_sunday(), periods);
    }

    /// Builder form of [`ScheduleRegistry::insert`].
    pub fn with_weekday(mut self, weekday: Weekday, periods: Vec<ShiftPeriod>) -> Self {
        self.insert(weekday, periods);
        self
    }

    /// Returns the ordered periods for a weekday number (0 = Sunday).
    ///
    /// Unknown or unconfigured weekdays yield an empty slice.
    pub fn periods_for(&self, weekday: u32) -> &[ShiftPeriod] {
        self.periods
            .get(&weekday)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns the ordered periods for the weekday of `date`.
    pub fn periods_for_date(&self, date: NaiveDate) -> &[ShiftPeriod] {
        self.periods_for(date.weekday().num_days_from_sunday())
    }

    /// Returns true when no weekday has been configured at all.
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Iterates over configured weekdays, Sunday first.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[ShiftPeriod])> {
        WEEK.iter().filter_map(move |weekday| {
            self.periods
                .get(&weekday.num_days_from_sunday())
                .map(|periods| (*weekday, periods.as_slice()))
        })
    }
}

impl TryFrom<BTreeMap<String, Vec<ShiftPeriod>>> for ScheduleRegistry {
    type Error = String;

    fn try_from(raw: BTreeMap<String, Vec<ShiftPeriod>>) -> Result<Self, Self::Error> {
        let mut registry = ScheduleRegistry::new();
        for (name, periods) in raw {
            let weekday: Weekday = name
                .parse()
                .map_err(|_| format!("unknown weekday '{}'", name))?;
            registry.insert(weekday, periods);
        }
        Ok(registry)
    }
}

/// Serializes as a map of lowercase weekday names, Sunday first.
impl Serialize for ScheduleRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.periods.len()))?;
        for (weekday, periods) in self.iter() {
            map.serialize_entry(weekday_name(weekday), periods)?;
        }
        map.end()
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "sunday",
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
    }
}

/// Schedule configuration file structure (`schedule.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// Map of weekday name to its ordered shift periods.
    pub weekdays: ScheduleRegistry,
}

/// Which clock-ins are compared against the schedule for lateness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LatenessMode {
    /// Only the first punch against the first period's start.
    #[default]
    FirstPeriod,
    /// Every paired clock-in against the period at the same position.
    EveryPeriod,
}

/// Lateness policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatenessRule {
    /// Which clock-ins are checked.
    pub mode: LatenessMode,
    /// Tolerance for [`LatenessMode::FirstPeriod`].
    pub tolerance_minutes: u32,
    /// Tolerance for each clock-in under [`LatenessMode::EveryPeriod`].
    pub per_occurrence_tolerance_minutes: u32,
}

impl Default for LatenessRule {
    fn default() -> Self {
        Self {
            mode: LatenessMode::FirstPeriod,
            tolerance_minutes: DEFAULT_LATENESS_TOLERANCE_MINUTES,
            per_occurrence_tolerance_minutes: DEFAULT_PER_OCCURRENCE_TOLERANCE_MINUTES,
        }
    }
}

/// The daily window in which worked minutes earn the night premium.
///
/// The default window, 22:00 to 05:00, crosses midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightWindow {
    /// Window start.
    pub start: TimeOfDay,
    /// Window end; earlier than `start` when the window crosses midnight.
    pub end: TimeOfDay,
}

impl NightWindow {
    /// The statutory 22:00 to 05:00 window.
    pub const STANDARD: NightWindow = NightWindow {
        start: TimeOfDay::at(22, 0),
        end: TimeOfDay::at(5, 0),
    };
}

impl Default for NightWindow {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Rule configuration file structure (`rules.yaml`).
///
/// Every section is optional and falls back to its default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    /// Lateness policy.
    pub lateness: LatenessRule,
    /// Night premium window.
    pub night_window: NightWindow,
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    schedule: ScheduleRegistry,
    rules: RuleSet,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(schedule: ScheduleRegistry, rules: RuleSet) -> Self {
        Self { schedule, rules }
    }

    /// Returns the weekly schedule.
    pub fn schedule(&self) -> &ScheduleRegistry {
        &self.schedule
    }

    /// Returns the rule set.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }
}
