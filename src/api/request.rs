//! Request types for the timecard API.
//!
//! This module defines the JSON request structures for the `/reconcile`
//! endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::RecordFilter;
use crate::models::{Employee, PunchEvent, ReportingPeriod};

/// Request body for the `/reconcile` endpoint.
///
/// Carries the two inputs handed over by the registration and attendance
/// collaborators, plus optional report selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcileRequest {
    /// The registered employees.
    pub employees: Vec<EmployeeRequest>,
    /// The raw punches, in any order.
    pub punches: Vec<PunchRequest>,
    /// Days to evaluate for every employee, punched or not.
    #[serde(default)]
    pub period: Option<PeriodRequest>,
    /// Selection applied to the returned records and summary.
    #[serde(default)]
    pub filter: Option<FilterRequest>,
}

/// Employee information in a reconcile request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Identifier that punches refer to.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Badge number; may be omitted.
    #[serde(default)]
    pub registration_number: String,
}

/// A single punch in a reconcile request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PunchRequest {
    /// The employee the punch belongs to.
    pub employee_id: String,
    /// The calendar date (`YYYY-MM-DD`).
    pub date: NaiveDate,
    /// The time of day (`HH:MM`).
    pub time: String,
}

/// Reporting period in a reconcile request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PeriodRequest {
    /// The first day (inclusive).
    pub start_date: NaiveDate,
    /// The last day (inclusive).
    pub end_date: NaiveDate,
}

/// Report selection in a reconcile request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterRequest {
    /// Only this employee.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// Only this month (1-12).
    #[serde(default)]
    pub month: Option<u32>,
    /// Only this year.
    #[serde(default)]
    pub year: Option<i32>,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            name: req.name,
            registration_number: req.registration_number,
        }
    }
}

impl From<PunchRequest> for PunchEvent {
    fn from(req: PunchRequest) -> Self {
        PunchEvent {
            employee_id: req.employee_id,
            date: req.date,
            time: req.time,
        }
    }
}

impl From<PeriodRequest> for ReportingPeriod {
    fn from(req: PeriodRequest) -> Self {
        ReportingPeriod {
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}

impl From<FilterRequest> for RecordFilter {
    fn from(req: FilterRequest) -> Self {
        RecordFilter {
            employee_id: req.employee_id,
            month: req.month,
            year: req.year,
        }
    }
}
