//! Axum handlers for the /employees routes.
//!
//! Handlers bind the JSON payload, run validation, call the use-case layer
//! and wrap the outcome in the shared envelope. Error mapping lives on
//! [`Error`]'s `IntoResponse` impl; handlers only decide which error kind a
//! situation is.

use crate::{
    AppState,
    api::models::employees::{EmployeePayload, format_validation_errors},
    api::response::{success, success_empty},
    errors::Error,
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::IntoResponse,
};
use validator::Validate;

/// Bind-then-validate step shared by create and update.
fn validated(payload: Result<Json<EmployeePayload>, JsonRejection>) -> Result<EmployeePayload, Error> {
    let Json(payload) = payload.map_err(|rejection| Error::Validation {
        message: rejection.body_text(),
    })?;

    payload.validate().map_err(|errors| Error::Validation {
        message: format_validation_errors(&errors),
    })?;

    Ok(payload)
}

// POST /employees
pub async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<EmployeePayload>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let payload = validated(payload)?;
    let created = state.employees.create(&payload).await?;
    Ok(success(created))
}

// GET /employees
pub async fn list_employees(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let list = state.employees.list().await?;
    Ok(success(list))
}

// GET /employees/{employee_id}
pub async fn get_employee_by_id(
    State(state): State<AppState>,
    Path(employee_id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    let employee = state
        .employees
        .get_by_id(employee_id)
        .await?
        .ok_or(Error::NotFound { resource: "employee" })?;

    Ok(success(employee))
}

// PUT /employees/{employee_id}
pub async fn update_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<i64>,
    payload: Result<Json<EmployeePayload>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let payload = validated(payload)?;
    state.employees.update(employee_id, &payload).await?;
    Ok(success_empty())
}

// DELETE /employees/{employee_id}
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    state.employees.delete(employee_id).await?;
    Ok(success_empty())
}

#[cfg(test)]
mod tests {
    use crate::test_utils::create_test_app;
    use serde_json::{Value, json};

    fn farid() -> Value {
        json!({
            "first_name": "farid",
            "last_name": "widyatama",
            "email": "email@mil.com",
            "hire_date": "2023-04-05"
        })
    }

    #[tokio::test]
    async fn create_returns_full_record_with_new_id() {
        let server = create_test_app();

        let response = server.post("/employees").json(&farid()).await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["message"], "success");
        assert_eq!(body["status"], 200);
        assert!(body.get("error").is_none());
        assert_eq!(body["data"]["id"], 1);
        assert_eq!(body["data"]["first_name"], "farid");
        assert_eq!(body["data"]["last_name"], "widyatama");
        assert_eq!(body["data"]["email"], "email@mil.com");
        assert_eq!(body["data"]["hire_date"], "2023-04-05");
    }

    #[tokio::test]
    async fn create_without_hire_date_is_rejected() {
        let server = create_test_app();

        let response = server
            .post("/employees")
            .json(&json!({
                "first_name": "farid",
                "last_name": "widyatama",
                "email": "email@mil.com"
            }))
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["message"], "failed");
        assert_eq!(body["status"], 400);
        assert_eq!(body["data"], Value::Null);
        let message = body["error"]["message"].as_str().unwrap();
        assert!(message.contains("hire_date"), "message was: {message}");
    }

    #[tokio::test]
    async fn create_with_malformed_json_is_rejected() {
        let server = create_test_app();

        let response = server
            .post("/employees")
            .content_type("application/json")
            .text("{not json")
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["message"], "failed");
    }

    #[tokio::test]
    async fn list_is_empty_before_any_create() {
        let server = create_test_app();

        let response = server.get("/employees").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["data"]["employees"], json!([]));
    }

    #[tokio::test]
    async fn get_echoes_created_employee() {
        let server = create_test_app();

        let created: Value = server.post("/employees").json(&farid()).await.json();
        let id = created["data"]["id"].as_i64().unwrap();

        let response = server.get(&format!("/employees/{id}")).await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["data"], created["data"]);
    }

    #[tokio::test]
    async fn get_missing_employee_is_404_not_500() {
        let server = create_test_app();

        let response = server.get("/employees/999").await;
        response.assert_status_not_found();

        let body: Value = response.json();
        assert_eq!(body["message"], "failed");
        assert_eq!(body["error"]["message"], "employee not found");
    }

    #[tokio::test]
    async fn update_missing_employee_is_404() {
        let server = create_test_app();

        let response = server.put("/employees/999").json(&farid()).await;
        response.assert_status_not_found();

        let body: Value = response.json();
        assert_eq!(body["error"]["message"], "employee not found");
    }

    #[tokio::test]
    async fn update_overwrites_and_returns_empty_data() {
        let server = create_test_app();

        let created: Value = server.post("/employees").json(&farid()).await.json();
        let id = created["data"]["id"].as_i64().unwrap();

        let mut changed = farid();
        changed["first_name"] = json!("renamed");
        let response = server.put(&format!("/employees/{id}")).json(&changed).await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["data"], Value::Null);

        let fetched: Value = server.get(&format!("/employees/{id}")).await.json();
        assert_eq!(fetched["data"]["first_name"], "renamed");
    }

    #[tokio::test]
    async fn update_with_invalid_payload_is_400() {
        let server = create_test_app();

        let created: Value = server.post("/employees").json(&farid()).await.json();
        let id = created["data"]["id"].as_i64().unwrap();

        let mut changed = farid();
        changed["hire_date"] = json!("2023/04/05");
        let response = server.put(&format!("/employees/{id}")).json(&changed).await;
        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn delete_twice_is_404_on_second_call() {
        let server = create_test_app();

        let created: Value = server.post("/employees").json(&farid()).await.json();
        let id = created["data"]["id"].as_i64().unwrap();

        let response = server.delete(&format!("/employees/{id}")).await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"], Value::Null);

        let response = server.delete(&format!("/employees/{id}")).await;
        response.assert_status_not_found();
        let body: Value = response.json();
        assert_eq!(body["error"]["message"], "employee not found");
    }
}
