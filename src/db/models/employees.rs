//! Database record types for the employees table.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted employee row. The repository is the sole writer of this table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Calendar date in `YYYY-MM-DD` form, validated at the API boundary.
    pub hire_date: String,
}

/// Insert request. The id is assigned by the database.
#[derive(Debug, Clone)]
pub struct EmployeeCreateDBRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub hire_date: String,
}
