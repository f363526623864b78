//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::ShiftPeriod;

use super::types::{EngineConfig, RuleSet, ScheduleConfig, ScheduleRegistry};

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── schedule.yaml   # Expected shift periods per weekday
/// └── rules.yaml      # Lateness policy and night window
/// ```
///
/// # Example
///
/// ```no_run
/// use timecard_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// for period in loader.periods_for(1) {
///     println!("Monday {} - {}", period.start, period.end);
/// }
/// # Ok::<(), timecard_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if `schedule.yaml` or `rules.yaml`
    ///   is missing
    /// - [`EngineError::ConfigParseError`] if either file is invalid YAML,
    ///   names an unknown weekday, or holds a malformed `HH:MM` value
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let schedule = Self::load_yaml::<ScheduleConfig>(&path.join("schedule.yaml"))?;
        let rules = Self::load_yaml::<RuleSet>(&path.join("rules.yaml"))?;

        Ok(Self {
            config: EngineConfig::new(schedule.weekdays, rules),
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the weekly schedule.
    pub fn schedule(&self) -> &ScheduleRegistry {
        self.config.schedule()
    }

    /// Returns the rule set.
    pub fn rules(&self) -> &RuleSet {
        self.config.rules()
    }

    /// Shorthand for `schedule().periods_for(weekday)`.
    pub fn periods_for(&self, weekday: u32) -> &[ShiftPeriod] {
        self.config.schedule().periods_for(weekday)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LatenessMode;
    use crate::models::TimeOfDay;

    fn config_path() -> &'static str {
        "./config/default"
    }

    fn t(s: &str) -> TimeOfDay {
        TimeOfDay::parse(s).unwrap()
    }

    /// Writes a throwaway config directory under the target temp dir.
    fn write_config(name: &str, schedule: &str, rules: Option<&str>) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "timecard_engine_{}_{}",
            name,
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("schedule.yaml"), schedule).unwrap();
        if let Some(rules) = rules {
            fs::write(dir.join("rules.yaml"), rules).unwrap();
        }
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
    }

    #[test]
    fn test_default_schedule_monday_has_two_periods() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let monday = loader.periods_for(1);
        assert_eq!(monday.len(), 2);
        assert_eq!(monday[0], ShiftPeriod::new(t("08:00"), t("12:00")));
        assert_eq!(monday[1], ShiftPeriod::new(t("13:00"), t("17:00")));
    }

    #[test]
    fn test_default_schedule_wednesday_crosses_midnight() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let wednesday = loader.periods_for(3);
        assert_eq!(wednesday.len(), 3);
        assert!(wednesday[2].crosses_midnight());
    }

    #[test]
    fn test_default_schedule_days_off() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        assert!(loader.periods_for(0).is_empty()); // Sunday
        assert!(loader.periods_for(4).is_empty()); // Thursday
        assert!(loader.periods_for(6).is_empty()); // Saturday
    }

    #[test]
    fn test_default_rules_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        assert_eq!(loader.rules().lateness.mode, LatenessMode::FirstPeriod);
        assert_eq!(loader.rules().lateness.tolerance_minutes, 10);
        assert_eq!(loader.rules().night_window.start, t("22:00"));
        assert_eq!(loader.rules().night_window.end, t("05:00"));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("schedule.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_rules_returns_error() {
        let dir = write_config("missing_rules", "weekdays:\n  monday: []\n", None);

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("rules.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_malformed_period_returns_parse_error() {
        let dir = write_config(
            "malformed_period",
            "weekdays:\n  monday:\n    - { start: \"8h00\", end: \"12:00\" }\n",
            Some("{}\n"),
        );

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { path, message }) => {
                assert!(path.contains("schedule.yaml"));
                assert!(message.contains("8h00"), "{}", message);
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_empty_weekdays_is_loaded_as_empty_registry() {
        let dir = write_config("empty_weekdays", "weekdays: {}\n", Some("{}\n"));

        let loader = ConfigLoader::load(&dir).unwrap();
        assert!(loader.schedule().is_empty());
    }
}
