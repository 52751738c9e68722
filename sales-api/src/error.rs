use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use sales_analytics::AnalyticsError;
use serde_json::json;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Unified error type that renders as a JSON `{"error": "..."}` response
/// with an appropriate HTTP status code.
#[derive(Debug)]
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

    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<AnalyticsError> for AppError {
    fn from(e: AnalyticsError) -> Self {
        match e {
            AnalyticsError::InvalidArgument(msg) => AppError::bad_request(msg),
            other => {
                tracing::error!(error = %other, "sales query failed");
                AppError::internal()
            }
        }
    }
}
