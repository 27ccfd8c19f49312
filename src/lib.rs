//! # staffd
//!
//! A REST service for managing employee records, backed by PostgreSQL.
//!
//! The service exposes five operations over one table:
//!
//! - `POST /employees` - create an employee
//! - `GET /employees` - list all employees, most recently created first
//! - `GET /employees/{employee_id}` - fetch one employee
//! - `PUT /employees/{employee_id}` - overwrite an employee
//! - `DELETE /employees/{employee_id}` - remove an employee
//!
//! Requests flow handler -> validation -> service -> repository -> Postgres,
//! and every response uses the `{message, status, data, error}` envelope.
//!
//! ## Quick start
//!
//! ```no_run
//! use staffd::{Application, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     staffd::telemetry::init_telemetry();
//!
//!     let app = Application::new(Config::default()).await?;
//!     app.serve(async {
//!         tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
//!     })
//!     .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod errors;
pub mod services;
pub mod telemetry;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

use crate::{
    api::handlers::employees::{
        create_employee, delete_employee, get_employee_by_id, list_employees, update_employee,
    },
    db::handlers::Employees,
    services::{EmployeeService, EmployeeUseCase},
};
use axum::{
    Router,
    routing::{get, post},
};
use sqlx::{PgPool, postgres::PgPoolOptions};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};

pub use config::Config;

/// Application state shared across all request handlers.
///
/// The use-case layer is held behind a trait object so tests can swap in a
/// stub without touching the router.
#[derive(Clone)]
pub struct AppState {
    pub employees: Arc<dyn EmployeeUseCase>,
    pub config: Config,
}

/// Get the staffd database migrator
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}

/// Build the application router with request logging middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", post(create_employee).get(list_employees))
        .route(
            "/employees/{employee_id}",
            get(get_employee_by_id)
                .put(update_employee)
                .delete(delete_employee),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

/// A fully initialized service: database pool connected, migrations applied,
/// router built.
pub struct Application {
    router: Router,
    pool: PgPool,
    config: Config,
}

impl Application {
    /// Create a new application instance with all resources initialized
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&config.database_url())
            .await?;
        info!("Connected to database at {}:{}", config.db_host, config.db_port);

        migrator().run(&pool).await?;

        let repo = Arc::new(Employees::new(pool.clone()));
        let service: Arc<dyn EmployeeUseCase> = Arc::new(EmployeeService::new(repo));
        let state = AppState {
            employees: service,
            config: config.clone(),
        };

        Ok(Self {
            router: build_router(state),
            pool,
            config,
        })
    }

    /// Start serving the application, shutting down gracefully once the
    /// `shutdown` future resolves.
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!("staffd listening on http://{bind_addr}");

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Closing database connections...");
        self.pool.close().await;

        Ok(())
    }
}
