//! Repository trait for the employees table.
//!
//! A repository is the data access layer for one table: it owns every SQL
//! statement issued against it and maps rows to entities. The trait exists so
//! the production Postgres implementation and in-memory test doubles are
//! interchangeable behind `Arc<dyn EmployeeRepository>`.

use crate::db::{
    errors::Result,
    models::employees::{Employee, EmployeeCreateDBRequest},
};

#[async_trait::async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Insert a new employee and return the database-assigned id.
    async fn create(&self, request: &EmployeeCreateDBRequest) -> Result<i64>;

    /// All rows, most recently created first. An empty table is an empty vec.
    async fn list(&self) -> Result<Vec<Employee>>;

    /// Point lookup. `Ok(None)` means no such row; `Err` means the database
    /// call itself failed. Callers rely on that distinction.
    async fn get_by_id(&self, id: i64) -> Result<Option<Employee>>;

    /// Overwrite all fields of the row matching `employee.id`. Zero rows
    /// affected is not an error here; existence checks live in the service.
    async fn update(&self, employee: &Employee) -> Result<()>;

    /// Remove the row matching `id`. Likewise indifferent to prior existence.
    async fn delete(&self, id: i64) -> Result<()>;
}
