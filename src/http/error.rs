use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use crate::error::PricePaidError;

/// Unified error type that renders as a JSON `{"error": "..."}` response
/// with an appropriate HTTP status code.
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }

    pub fn bad_gateway(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: msg.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<PricePaidError> for AppError {
    fn from(e: PricePaidError) -> Self {
        match &e {
            // Upstream trouble, whether unreachable or answering garbage,
            // is a gateway problem from the caller's point of view.
            PricePaidError::DependencyUnavailable { .. } | PricePaidError::MalformedRecord(_) => {
                AppError::bad_gateway(e.to_string())
            }
            _ => AppError::internal(e.to_string()),
        }
    }
}
