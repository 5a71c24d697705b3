//! Error type returned by the REST helpers in `api`.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is turned into a value the screen can render inline. A `422`
//! response with a `fields` object becomes [`ApiError::Validation`] so the
//! form can highlight the offending inputs.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use records::ValidationErrors;
use serde::Deserialize;

const UNPROCESSABLE_ENTITY: u16 = 422;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("request failed ({status}): {message}")]
    Status { status: u16, message: String },
    /// The server rejected the payload field by field.
    #[error("please correct the highlighted fields")]
    Validation(ValidationErrors),
    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Called outside the browser (SSR).
    #[error("not available on server")]
    Unavailable,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    #[serde(default)]
    fields: Option<ValidationErrors>,
}

impl ApiError {
    /// Build an error from a non-success status and its raw response body.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(ErrorBody { fields: Some(fields), .. }) if status == UNPROCESSABLE_ENTITY && !fields.is_empty() => {
                Self::Validation(fields)
            }
            Ok(parsed) => Self::Status { status, message: parsed.error },
            Err(_) => {
                let trimmed = body.trim();
                let message = if trimmed.is_empty() { "no details".to_owned() } else { trimmed.to_owned() };
                Self::Status { status, message }
            }
        }
    }

    /// Field-level messages carried by a validation failure.
    #[must_use]
    pub fn field_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(fields) => Some(fields),
            _ => None,
        }
    }
}
