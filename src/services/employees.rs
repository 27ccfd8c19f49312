//! Business layer for employees.
//!
//! Enforces the invariants that span multiple repository calls (the
//! read-before-write existence checks for update and delete) and shapes
//! repository entities into API-facing response objects. Each operation is a
//! single linear request/response exchange; there are no workflows.

use crate::{
    api::models::employees::{EmployeeList, EmployeePayload, EmployeeResponse},
    db::{
        handlers::EmployeeRepository,
        models::employees::{Employee, EmployeeCreateDBRequest},
    },
    errors::{Error, Result},
};
use std::sync::Arc;
use tracing::instrument;

/// Use-case contract for employee operations. Implemented by
/// [`EmployeeService`] in production and by stubs in handler tests.
#[async_trait::async_trait]
pub trait EmployeeUseCase: Send + Sync {
    async fn create(&self, payload: &EmployeePayload) -> Result<EmployeeResponse>;
    async fn list(&self) -> Result<EmployeeList>;
    /// `Ok(None)` means no such employee; the handler decides what that maps to.
    async fn get_by_id(&self, id: i64) -> Result<Option<EmployeeResponse>>;
    /// Fails with [`Error::NotFound`] before writing anything if `id` is absent.
    async fn update(&self, id: i64, payload: &EmployeePayload) -> Result<()>;
    /// Same existence-check-then-act pattern as `update`.
    async fn delete(&self, id: i64) -> Result<()>;
}

pub struct EmployeeService {
    repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait::async_trait]
impl EmployeeUseCase for EmployeeService {
    #[instrument(skip(self, payload), fields(first_name = %payload.first_name), err)]
    async fn create(&self, payload: &EmployeePayload) -> Result<EmployeeResponse> {
        let request = EmployeeCreateDBRequest::from(payload);
        let id = self.repo.create(&request).await?;

        Ok(EmployeeResponse {
            id,
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            hire_date: request.hire_date,
        })
    }

    #[instrument(skip(self), err)]
    async fn list(&self) -> Result<EmployeeList> {
        let employees = self.repo.list().await?;

        Ok(EmployeeList {
            employees: employees.into_iter().map(EmployeeResponse::from).collect(),
        })
    }

    #[instrument(skip(self), fields(employee_id = id), err)]
    async fn get_by_id(&self, id: i64) -> Result<Option<EmployeeResponse>> {
        let employee = self.repo.get_by_id(id).await?;
        Ok(employee.map(EmployeeResponse::from))
    }

    // The existence check and the write are two round trips, not one atomic
    // statement, so a concurrent delete can slip between them. Accepted; see
    // DESIGN.md.
    #[instrument(skip(self, payload), fields(employee_id = id), err)]
    async fn update(&self, id: i64, payload: &EmployeePayload) -> Result<()> {
        if self.repo.get_by_id(id).await?.is_none() {
            return Err(Error::NotFound { resource: "employee" });
        }

        let employee = Employee {
            id,
            first_name: payload.first_name.clone(),
            last_name: payload.last_name.clone(),
            email: payload.email.clone(),
            hire_date: payload.hire_date.clone(),
        };
        self.repo.update(&employee).await?;

        Ok(())
    }

    #[instrument(skip(self), fields(employee_id = id), err)]
    async fn delete(&self, id: i64) -> Result<()> {
        if self.repo.get_by_id(id).await?.is_none() {
            return Err(Error::NotFound { resource: "employee" });
        }

        self.repo.delete(id).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::errors::DbError;
    use crate::test_utils::MemoryEmployees;

    fn payload() -> EmployeePayload {
        EmployeePayload {
            first_name: "farid".to_string(),
            last_name: "widyatama".to_string(),
            email: "email@mil.com".to_string(),
            hire_date: "2023-04-05".to_string(),
        }
    }

    fn service() -> (EmployeeService, Arc<MemoryEmployees>) {
        let repo = Arc::new(MemoryEmployees::new());
        (EmployeeService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn create_echoes_fields_with_assigned_id() {
        let (service, _repo) = service();

        let created = service.create(&payload()).await.unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.first_name, "farid");
        assert_eq!(created.last_name, "widyatama");
        assert_eq!(created.email, "email@mil.com");
        assert_eq!(created.hire_date, "2023-04-05");
    }

    #[tokio::test]
    async fn list_on_empty_table_is_empty_not_absent() {
        let (service, _repo) = service();
        let list = service.list().await.unwrap();
        assert!(list.employees.is_empty());
    }

    #[tokio::test]
    async fn list_returns_most_recent_first() {
        let (service, _repo) = service();
        let first = service.create(&payload()).await.unwrap();
        let second = service.create(&payload()).await.unwrap();

        let list = service.list().await.unwrap();
        assert_eq!(list.employees[0].id, second.id);
        assert_eq!(list.employees[1].id, first.id);
    }

    #[tokio::test]
    async fn get_by_id_absent_is_none_not_error() {
        let (service, _repo) = service();
        assert!(service.get_by_id(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_missing_employee_performs_no_write() {
        let (service, repo) = service();

        let err = service.update(42, &payload()).await.unwrap_err();
        assert!(matches!(err, Error::NotFound { resource: "employee" }));
        assert_eq!(repo.update_calls(), 0);
    }

    #[tokio::test]
    async fn update_existing_employee_overwrites_all_fields() {
        let (service, repo) = service();
        let created = service.create(&payload()).await.unwrap();

        let mut changed = payload();
        changed.first_name = "renamed".to_string();
        changed.last_name = String::new();
        service.update(created.id, &changed).await.unwrap();

        assert_eq!(repo.update_calls(), 1);
        let stored = service.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(stored.first_name, "renamed");
        assert_eq!(stored.last_name, "");
    }

    #[tokio::test]
    async fn delete_missing_employee_performs_no_write() {
        let (service, repo) = service();

        let err = service.delete(42).await.unwrap_err();
        assert!(matches!(err, Error::NotFound { resource: "employee" }));
        assert_eq!(repo.delete_calls(), 0);
    }

    #[tokio::test]
    async fn delete_existing_employee_removes_it() {
        let (service, repo) = service();
        let created = service.create(&payload()).await.unwrap();

        service.delete(created.id).await.unwrap();
        assert_eq!(repo.delete_calls(), 1);
        assert!(service.get_by_id(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn connectivity_failure_is_not_reported_as_not_found() {
        let (service, repo) = service();
        repo.fail_next();

        let err = service.get_by_id(1).await.unwrap_err();
        assert!(matches!(err, Error::Database(DbError::Other(_))));

        repo.fail_next();
        let err = service.update(1, &payload()).await.unwrap_err();
        assert!(matches!(err, Error::Database(DbError::Other(_))));
        assert_eq!(repo.update_calls(), 0);
    }
}
