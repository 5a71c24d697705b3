//! REST handlers for record collections.
//!
//! Every handler is generic over [`RecordTable`] and mounted once per
//! collection by `routes::record_routes`.
//!
//! ERROR HANDLING
//! ==============
//! Failures become `{"error": "..."}` bodies. Validation failures use `422`
//! and add a `fields` map so the browser form can mark each input.

#[cfg(test)]
#[path = "record_api_test.rs"]
mod record_api_test;

use std::collections::BTreeMap;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use uuid::Uuid;

use crate::services::store::{self, RecordError, RecordTable};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, String>,
}

impl ErrorBody {
    fn message(error: impl Into<String>) -> Self {
        Self { error: error.into(), fields: BTreeMap::new() }
    }
}

pub(crate) fn record_error_response(err: RecordError) -> (StatusCode, Json<ErrorBody>) {
    match err {
        RecordError::NotFound(id) => (StatusCode::NOT_FOUND, Json(ErrorBody::message(format!("record {id} not found")))),
        RecordError::Invalid(errors) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorBody {
                error: "validation failed".to_owned(),
                fields: errors.iter().map(|(k, v)| (k.to_owned(), v.to_owned())).collect(),
            }),
        ),
        RecordError::Database(e) => {
            tracing::error!(error = %e, "record query failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody::message("internal server error")))
        }
    }
}

fn rejection_response(rejection: JsonRejection) -> (StatusCode, Json<ErrorBody>) {
    (rejection.status(), Json(ErrorBody::message(rejection.body_text())))
}

fn into_error(err: RecordError) -> Response {
    record_error_response(err).into_response()
}

/// `GET /api/{collection}`
pub async fn list<R: RecordTable>(State(state): State<AppState>) -> Result<Json<Vec<R>>, Response> {
    store::list::<R>(&state.pool).await.map(Json).map_err(into_error)
}

/// `GET /api/{collection}/{id}`
pub async fn get<R: RecordTable>(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<R>, Response> {
    store::get::<R>(&state.pool, id).await.map(Json).map_err(into_error)
}

/// `POST /api/{collection}`: create and return the stored record.
pub async fn create<R: RecordTable>(
    State(state): State<AppState>,
    body: Result<Json<R::Payload>, JsonRejection>,
) -> Result<(StatusCode, Json<R>), Response> {
    let Json(payload) = body.map_err(|r| rejection_response(r).into_response())?;
    let record = store::create::<R>(&state.pool, payload).await.map_err(into_error)?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// `PUT /api/{collection}/{id}`: replace every field of a record.
pub async fn update<R: RecordTable>(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Result<Json<R::Payload>, JsonRejection>,
) -> Result<Json<R>, Response> {
    let Json(payload) = body.map_err(|r| rejection_response(r).into_response())?;
    store::update::<R>(&state.pool, id, payload).await.map(Json).map_err(into_error)
}

/// `DELETE /api/{collection}/{id}`
pub async fn delete<R: RecordTable>(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode, Response> {
    store::delete::<R>(&state.pool, id).await.map_err(into_error)?;
    Ok(StatusCode::NO_CONTENT)
}
