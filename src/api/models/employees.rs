//! Transport objects for the employees API.
//!
//! Request and response shapes are deliberately separate from the database
//! entity so the wire format can evolve independently. Requests carry the
//! validation rules; missing JSON fields deserialize to empty strings so
//! "omitted" and "empty" both surface as `required` violations.

use crate::db::models::employees::{Employee, EmployeeCreateDBRequest};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

/// Body of POST /employees and PUT /employees/{employee_id}.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct EmployeePayload {
    #[validate(length(min = 1, code = "required"))]
    pub first_name: String,
    pub last_name: String,
    #[validate(length(min = 1, code = "required"))]
    pub email: String,
    #[validate(length(min = 1, code = "required"), custom(function = validate_hire_date))]
    pub hire_date: String,
}

/// A single employee as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub hire_date: String,
}

/// Container for GET /employees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeList {
    pub employees: Vec<EmployeeResponse>,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            first_name: employee.first_name,
            last_name: employee.last_name,
            email: employee.email,
            hire_date: employee.hire_date,
        }
    }
}

impl From<&EmployeePayload> for EmployeeCreateDBRequest {
    fn from(payload: &EmployeePayload) -> Self {
        Self {
            first_name: payload.first_name.clone(),
            last_name: payload.last_name.clone(),
            email: payload.email.clone(),
            hire_date: payload.hire_date.clone(),
        }
    }
}

/// Calendar-date check against the `%Y-%m-%d` layout. No time component,
/// no timezone, no trailing input.
fn validate_hire_date(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        // Already reported as `required`; avoid a duplicate violation.
        return Ok(());
    }
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(_) => Ok(()),
        Err(_) => Err(ValidationError::new("date")),
    }
}

/// Flatten every violation into one human-readable message, e.g.
/// `Field 'email' failed on 'required', Field 'hire_date' failed on 'date'`.
/// Sorted so the message is deterministic regardless of field order.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, violations)| {
            violations
                .iter()
                .map(move |violation| format!("Field '{}' failed on '{}'", field, violation.code))
        })
        .collect();
    messages.sort();
    messages.join(", ")
}
