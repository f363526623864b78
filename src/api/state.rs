//! Application state for the timecard API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the loaded schedule and rules.
#[derive(Clone)]
pub struct AppState {
    /// The loaded engine configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyScheduleConfiguration`] if the loaded
    /// schedule has no weekdays, so the server refuses to start rather
    /// than failing every request.
    pub fn new(config: ConfigLoader) -> EngineResult<Self> {
        if config.schedule().is_empty() {
            return Err(EngineError::EmptyScheduleConfiguration);
        }
        Ok(Self {
            config: Arc::new(config),
        })
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }
}
