//! Database layer for data persistence and access.
//!
//! Implements the data access layer using SQLx with PostgreSQL, following the
//! repository pattern: [`handlers`] holds the repository trait and its
//! Postgres implementation, [`models`] the record structures, and [`errors`]
//! the database-specific error type.

pub mod errors;
pub mod handlers;
pub mod models;
