//! Postgres repository for employees.

use crate::db::{
    errors::Result,
    handlers::repository::EmployeeRepository,
    models::employees::{Employee, EmployeeCreateDBRequest},
};
use sqlx::PgPool;
use tracing::instrument;

pub struct Employees {
    pool: PgPool,
}

impl Employees {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl EmployeeRepository for Employees {
    #[instrument(skip(self, request), fields(first_name = %request.first_name), err)]
    async fn create(&self, request: &EmployeeCreateDBRequest) -> Result<i64> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO employees (first_name, last_name, email, hire_date)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&request.first_name)
        .bind(&request.last_name)
        .bind(&request.email)
        .bind(&request.hire_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    #[instrument(skip(self), err)]
    async fn list(&self) -> Result<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(
            "SELECT id, first_name, last_name, email, hire_date FROM employees ORDER BY id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(employees)
    }

    #[instrument(skip(self), fields(employee_id = id), err)]
    async fn get_by_id(&self, id: i64) -> Result<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(
            "SELECT id, first_name, last_name, email, hire_date FROM employees WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    #[instrument(skip(self, employee), fields(employee_id = employee.id), err)]
    async fn update(&self, employee: &Employee) -> Result<()> {
        sqlx::query(
            "UPDATE employees SET first_name = $1, last_name = $2, email = $3, hire_date = $4 WHERE id = $5",
        )
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .bind(&employee.hire_date)
        .bind(employee.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    #[instrument(skip(self), fields(employee_id = id), err)]
    async fn delete(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
