//! Response types for the timecard API.
//!
//! This module defines the success bodies of the endpoints, the error
//! response structures, and the mapping from [`EngineError`] to HTTP.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::{RuleSet, ScheduleRegistry};
use crate::error::EngineError;
use crate::models::{DayError, DayRecord, PeriodSummary, SummaryHours};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a missing content type error response.
    pub fn missing_content_type() -> Self {
        Self::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

/// Stable code for an engine error, shared by request and per-day errors.
fn error_code(error: &EngineError) -> &'static str {
    match error {
        EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => "CONFIG_ERROR",
        EngineError::EmptyScheduleConfiguration => "EMPTY_SCHEDULE",
        EngineError::MalformedTime { .. } => "MALFORMED_TIME",
        EngineError::InvalidPeriod { .. } => "INVALID_PERIOD",
        EngineError::PeriodTooLong { .. } => "PERIOD_TOO_LONG",
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let code = error_code(&error);
        match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details(code, "Configuration error", error.to_string()),
                }
            }
            EngineError::EmptyScheduleConfiguration => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    code,
                    error.to_string(),
                    "Configure at least one weekday in schedule.yaml",
                ),
            },
            EngineError::MalformedTime { ref value, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    code,
                    error.to_string(),
                    format!("'{}' is not a valid HH:MM time", value),
                ),
            },
            EngineError::InvalidPeriod { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    code,
                    error.to_string(),
                    "The period end_date must not precede start_date",
                ),
            },
            EngineError::PeriodTooLong { max_days, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    code,
                    error.to_string(),
                    format!("Split the request into periods of at most {} days", max_days),
                ),
            },
        }
    }
}

/// A day that could not be evaluated, as reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayErrorResponse {
    /// The employee whose day failed.
    pub employee_id: String,
    /// The day that failed.
    pub date: NaiveDate,
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl From<DayError> for DayErrorResponse {
    fn from(error: DayError) -> Self {
        Self {
            code: error_code(&error.source).to_string(),
            message: error.source.to_string(),
            employee_id: error.employee_id,
            date: error.date,
        }
    }
}

/// Response body for the `/reconcile` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcileResponse {
    /// Day records matching the request filter, ascending by date.
    pub records: Vec<DayRecord>,
    /// Employee-days that could not be evaluated.
    pub errors: Vec<DayErrorResponse>,
    /// Totals over `records`, as `HH:MM`.
    pub summary: PeriodSummary,
    /// Totals over `records`, as decimal hours.
    pub summary_hours: SummaryHours,
}

/// Response body for the `/schedule` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleResponse {
    /// Expected shift periods per weekday.
    pub schedule: ScheduleRegistry,
    /// Lateness policy and night window.
    pub rules: RuleSet,
}
