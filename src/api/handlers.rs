//! HTTP request handlers for the timecard API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{RecordFilter, Reconciler, filter_records, summarize};
use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::models::{Employee, PunchEvent, ReportingPeriod};

use super::request::ReconcileRequest;
use super::response::{ApiError, ApiErrorResponse, ReconcileResponse, ScheduleResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/reconcile", post(reconcile_handler))
        .route("/schedule", get(schedule_handler))
        .with_state(state)
}

/// Handler for POST /reconcile endpoint.
///
/// Accepts employees and punches and returns the filtered day records,
/// the days that could not be evaluated, and the period totals.
async fn reconcile_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReconcileRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing reconcile request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_error(rejection, correlation_id);
            return error_response(ApiErrorResponse::bad_request(error));
        }
    };

    // Convert request types to domain types
    let employees: Vec<Employee> = request.employees.into_iter().map(Into::into).collect();
    let punches: Vec<PunchEvent> = request.punches.into_iter().map(Into::into).collect();
    let period: Option<ReportingPeriod> = request.period.map(Into::into);
    let filter: RecordFilter = request.filter.map(Into::into).unwrap_or_default();

    let start_time = Instant::now();
    match perform_reconciliation(
        state.config(),
        &employees,
        &punches,
        period.as_ref(),
        &filter,
    ) {
        Ok(result) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                employees_count = employees.len(),
                punches_count = punches.len(),
                records_count = result.records.len(),
                errors_count = result.errors.len(),
                duration_us = duration.as_micros(),
                "Reconciliation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Reconciliation failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for GET /schedule endpoint.
///
/// Returns the loaded weekly schedule and rule set.
async fn schedule_handler(State(state): State<AppState>) -> Json<ScheduleResponse> {
    let config = state.config();
    Json(ScheduleResponse {
        schedule: config.schedule().clone(),
        rules: *config.rules(),
    })
}

/// Maps a JSON extraction failure to an API error.
fn rejection_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::missing_content_type(),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

fn error_response(error: ApiErrorResponse) -> Response {
    (
        error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error.error),
    )
        .into_response()
}

/// Reconciles the batch and builds the filtered report.
fn perform_reconciliation(
    config: &ConfigLoader,
    employees: &[Employee],
    punches: &[PunchEvent],
    period: Option<&ReportingPeriod>,
    filter: &RecordFilter,
) -> EngineResult<ReconcileResponse> {
    let reconciler = Reconciler::from_config(config.config())?;
    let reconciliation = reconciler.reconcile(employees, punches, period)?;

    let records = filter_records(&reconciliation.records, filter);
    let summary = summarize(&records);
    let errors = reconciliation
        .errors
        .into_iter()
        .filter(|error| filter.matches_day(&error.employee_id, error.date))
        .map(Into::into)
        .collect();

    Ok(ReconcileResponse {
        summary_hours: summary.hours(),
        summary,
        records,
        errors,
    })
}
