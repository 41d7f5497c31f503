//! HTTP error mapping.
//!
//! Client input errors carry fixed messages and map to 400; processing
//! failures expose the underlying error text verbatim and map to 500.
//! The passthrough favors debuggability over hiding internals.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use screener_core::errors::{ModelError, StoreError};
use serde_json::json;

/// Error kinds visible to HTTP callers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// `/predict` body absent, unparseable, or lacking `features`.
    #[error("Invalid input. 'features' key missing.")]
    InvalidInput,

    /// `/collect` body absent, unparseable, or empty.
    #[error("No JSON data received.")]
    EmptyBody,

    /// Conversion, inference, serialization, or I/O failure.
    #[error("{0}")]
    Processing(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput | ApiError::EmptyBody => StatusCode::BAD_REQUEST,
            ApiError::Processing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ModelError> for ApiError {
    fn from(e: ModelError) -> Self {
        ApiError::Processing(e.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        ApiError::Processing(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}
