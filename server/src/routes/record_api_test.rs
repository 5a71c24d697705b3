use axum::body::{Body, to_bytes};
use axum::http::Request;
use records::ValidationErrors;
use serde_json::{Value, json};
use tower::ServiceExt;

use super::*;
use crate::routes::api_routes;
use crate::state::test_helpers::test_app_state;

async fn send(method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let app = api_routes(test_app_state());
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap_or(Value::Null) };
    (status, value)
}

#[test]
fn not_found_maps_to_404_without_fields() {
    let (status, Json(body)) = record_error_response(RecordError::NotFound(Uuid::nil()));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.fields.is_empty());
    let json = serde_json::to_value(&body).unwrap();
    assert!(json.get("fields").is_none());
}

#[test]
fn invalid_maps_to_422_with_field_messages() {
    let mut errors = ValidationErrors::new();
    errors.insert("last_name", "Last name is required");
    let (status, Json(body)) = record_error_response(RecordError::Invalid(errors));
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        json!({"error": "validation failed", "fields": {"last_name": "Last name is required"}})
    );
}

#[test]
fn database_error_hides_details() {
    let (status, Json(body)) = record_error_response(RecordError::Database(sqlx::Error::RowNotFound));
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.error, "internal server error");
}

#[tokio::test]
async fn healthz_returns_ok() {
    let (status, _) = send("GET", "/healthz", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn create_patient_with_missing_names_is_rejected_per_field() {
    let (status, body) = send("POST", "/api/patients", Some(json!({"email": "ana@example.com"}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["fields"]["first_name"], "First name is required");
    assert_eq!(body["fields"]["last_name"], "Last name is required");
}

#[tokio::test]
async fn update_doctor_with_bad_email_is_rejected() {
    let uri = format!("/api/doctors/{}", Uuid::new_v4());
    let payload = json!({
        "first_name": "Ana",
        "last_name": "Lopez",
        "specialty": "Cardiology",
        "email": "ana-at-example"
    });
    let (status, body) = send("PUT", &uri, Some(payload)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["fields"]["email"], "Enter a valid email address");
}

#[tokio::test]
async fn malformed_json_is_a_client_error() {
    let app = api_routes(test_app_state());
    let request = Request::builder()
        .method("POST")
        .uri("/api/doctors")
        .header("Content-Type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn unknown_collection_is_not_routed() {
    let (status, _) = send("GET", "/api/nurses", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
