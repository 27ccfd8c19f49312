//! API layer for HTTP request handling and data models.
//!
//! - [`handlers`]: axum route handlers for the /employees endpoints
//! - [`models`]: request/response data structures and their validation rules
//! - [`response`]: the uniform `{message, status, data, error}` envelope

pub mod handlers;
pub mod models;
pub mod response;
