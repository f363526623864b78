//! Employee model.
//!
//! Employees are owned by the external registration collaborator; the
//! engine only reads them to label day records and to decide which punches
//! belong to someone it should report on.

use serde::{Deserialize, Serialize};

/// Represents an employee whose punches are reconciled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Opaque identifier that punches refer to (e.g. the PIS number).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Badge or registration number shown on reports.
    pub registration_number: String,
}
