//! Configuration loading and management for the Timecard Reconciliation Engine.
//!
//! This module provides functionality to load the weekly schedule and the
//! reconciliation rules from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use timecard_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/default").unwrap();
//! println!("Monday periods: {}", loader.schedule().periods_for(1).len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_LATENESS_TOLERANCE_MINUTES, DEFAULT_PER_OCCURRENCE_TOLERANCE_MINUTES, EngineConfig,
    LatenessMode, LatenessRule, NightWindow, RuleSet, ScheduleConfig, ScheduleRegistry,
};
