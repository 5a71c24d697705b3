//! REST API helpers for the record collections.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so a failed request leaves
//! the screen usable and shows an inline message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use records::Record;
#[cfg(any(test, feature = "hydrate"))]
use records::RecordKind;
use uuid::Uuid;

use super::error::ApiError;

#[cfg(any(test, feature = "hydrate"))]
fn collection_endpoint(kind: RecordKind) -> String {
    format!("/api/{}", kind.collection())
}

#[cfg(any(test, feature = "hydrate"))]
fn record_endpoint(kind: RecordKind, id: Uuid) -> String {
    format!("/api/{}/{id}", kind.collection())
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::from_response(status, &body));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// Fetch every record of `R` via `GET /api/{collection}`.
///
/// # Errors
///
/// Returns an error if the request fails, the server responds with a
/// non-success status, or the body cannot be decoded.
pub async fn list_records<R: Record>() -> Result<Vec<R>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = collection_endpoint(R::KIND);
        let resp = gloo_net::http::Request::get(&url).send().await.map_err(transport)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Create a record via `POST /api/{collection}`.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] when the server rejects fields, or another
/// variant when the request fails.
pub async fn create_record<R: Record>(payload: &R::Payload) -> Result<R, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = collection_endpoint(R::KIND);
        let resp = gloo_net::http::Request::post(&url)
            .json(payload)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::Unavailable)
    }
}

/// Replace a record via `PUT /api/{collection}/{id}`.
///
/// # Errors
///
/// Same as [`create_record`]; a missing record surfaces as a `404` status.
pub async fn update_record<R: Record>(id: Uuid, payload: &R::Payload) -> Result<R, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = record_endpoint(R::KIND, id);
        let resp = gloo_net::http::Request::put(&url)
            .json(payload)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, payload);
        Err(ApiError::Unavailable)
    }
}

/// Delete a record via `DELETE /api/{collection}/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the server responds with a
/// non-success status.
pub async fn delete_record<R: Record>(id: Uuid) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = record_endpoint(R::KIND, id);
        let resp = gloo_net::http::Request::delete(&url).send().await.map_err(transport)?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::from_response(status, &body));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}
