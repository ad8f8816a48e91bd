//! Error types for the web layer.
//!
//! [`WebError`] converts into a JSON HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. Fetch
//! failures never reach this type; they live in the session state.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors that can occur in the web layer.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// The requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// A page template failed to load or render.
    #[error("template error: {0}")]
    Template(String),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::Template(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
