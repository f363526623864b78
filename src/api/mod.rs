//! HTTP API module for the Timecard Reconciliation Engine.
//!
//! This module provides the REST API endpoints for reconciling punches
//! against the configured schedule and for inspecting that schedule.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EmployeeRequest, FilterRequest, PeriodRequest, PunchRequest, ReconcileRequest};
pub use response::{ApiError, ApiErrorResponse, DayErrorResponse, ReconcileResponse, ScheduleResponse};
pub use state::AppState;
