//! Test utilities: an in-memory repository and test server construction.

use crate::{
    AppState, build_router,
    config::Config,
    db::{
        errors::{DbError, Result},
        handlers::EmployeeRepository,
        models::employees::{Employee, EmployeeCreateDBRequest},
    },
    services::EmployeeService,
};
use axum_test::TestServer;
use std::sync::{
    Mutex,
    atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering},
};
use std::sync::Arc;

/// In-memory [`EmployeeRepository`] with call counters, so tests can assert
/// that write operations never reach the repository.
pub struct MemoryEmployees {
    rows: Mutex<Vec<Employee>>,
    next_id: AtomicI64,
    update_calls: AtomicUsize,
    delete_calls: AtomicUsize,
    fail_next: AtomicBool,
}

impl MemoryEmployees {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
            update_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
            fail_next: AtomicBool::new(false),
        }
    }

    /// Make the next repository call fail as if the database were unreachable.
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    fn check_failure(&self) -> Result<()> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(DbError::Other(anyhow::anyhow!("connection refused")));
        }
        Ok(())
    }
}

impl Default for MemoryEmployees {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl EmployeeRepository for MemoryEmployees {
    async fn create(&self, request: &EmployeeCreateDBRequest) -> Result<i64> {
        self.check_failure()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.rows.lock().unwrap().push(Employee {
            id,
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            email: request.email.clone(),
            hire_date: request.hire_date.clone(),
        });
        Ok(id)
    }

    async fn list(&self) -> Result<Vec<Employee>> {
        self.check_failure()?;
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(rows)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Employee>> {
        self.check_failure()?;
        Ok(self.rows.lock().unwrap().iter().find(|e| e.id == id).cloned())
    }

    async fn update(&self, employee: &Employee) -> Result<()> {
        self.check_failure()?;
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        if let Some(existing) = rows.iter_mut().find(|e| e.id == employee.id) {
            *existing = employee.clone();
        }
        // Zero rows affected is not an error, matching the SQL implementation.
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.check_failure()?;
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.rows.lock().unwrap().retain(|e| e.id != id);
        Ok(())
    }
}

/// Test server over the full router, backed by an in-memory repository.
pub fn create_test_app() -> TestServer {
    create_test_app_with_repo(Arc::new(MemoryEmployees::new()))
}

pub fn create_test_app_with_repo(repo: Arc<dyn EmployeeRepository>) -> TestServer {
    let state = AppState {
        employees: Arc::new(EmployeeService::new(repo)),
        config: Config::default(),
    };
    TestServer::new(build_router(state)).expect("Failed to create test server")
}
