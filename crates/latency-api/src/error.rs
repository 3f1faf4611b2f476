//! Error types for the HTTP layer.
//!
//! The latency endpoints themselves never fail. [`ApiError`] only covers
//! requests that miss every route, and renders them as JSON via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors that can be returned by the HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No route matched the request.
    #[error("not found: {0}")]
    NotFound(String),
}

impl ApiError {
    /// The HTTP status this error maps to.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
