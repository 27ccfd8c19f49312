use crate::api::response::ApiResponse;
use crate::db::errors::DbError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
    /// One or more required-field or format violations on a request body
    #[error("{message}")]
    Validation { message: String },

    /// Existence check failed for the requested resource
    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    /// Database operation error
    #[error(transparent)]
    Database(#[from] DbError),

    /// Unexpected error with full context chain
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation { .. } => StatusCode::BAD_REQUEST,
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::Database(db_err) => match db_err {
                DbError::NotFound => StatusCode::NOT_FOUND,
                DbError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Error::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns a user-safe error message, without leaking internal implementation details
    pub fn user_message(&self) -> String {
        match self {
            Error::Validation { message } => message.clone(),
            Error::NotFound { resource } => format!("{resource} not found"),
            Error::Database(DbError::NotFound) => "resource not found".to_string(),
            Error::Database(DbError::Other(_)) | Error::Other(_) => "internal server error".to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // Full detail goes to the log; the caller only sees user_message().
        match &self {
            Error::Database(DbError::Other(_)) | Error::Other(_) => {
                tracing::error!("Internal service error: {:#}", self);
            }
            Error::Database(DbError::NotFound) | Error::NotFound { .. } | Error::Validation { .. } => {
                tracing::debug!("Client error: {}", self);
            }
        }

        let status = self.status_code();
        let body = ApiResponse::failure(status, self.user_message());
        (status, Json(body)).into_response()
    }
}

/// Type alias for service operation results
pub type Result<T> = std::result::Result<T, Error>;
