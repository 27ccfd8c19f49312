//! Uniform response envelope shared by every endpoint.
//!
//! Success and failure bodies have the same outer shape:
//! `{message, status, data, error}`. `data` is always present (null for
//! operations with no payload); `error` is omitted on success.

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub message: &'static str,
    pub status: u16,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            message: "success",
            status: StatusCode::OK.as_u16(),
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<serde_json::Value> {
    pub fn failure(status: StatusCode, message: String) -> Self {
        Self {
            message: "failed",
            status: status.as_u16(),
            data: None,
            error: Some(ErrorBody { message }),
        }
    }
}

/// 200 with the success envelope around `data`.
pub fn success<T: Serialize>(data: T) -> impl IntoResponse {
    (StatusCode::OK, Json(ApiResponse::success(data)))
}

/// 200 with a null `data`, used by update and delete.
pub fn success_empty() -> impl IntoResponse {
    let body = ApiResponse::<serde_json::Value> {
        message: "success",
        status: StatusCode::OK.as_u16(),
        data: None,
        error: None,
    };
    (StatusCode::OK, Json(body))
}
