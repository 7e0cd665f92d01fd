use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Route source error: {0}")]
    RouteSource(String),

    #[error("Air quality error: {0}")]
    AirQuality(String),

    #[error("Explanation service error: {0}")]
    Explanation(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("No recommendation available: {0}")]
    NoRecommendation(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

// Convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::RouteSource(ref e) => {
                tracing::error!("Route source error: {}", e);
                (StatusCode::BAD_GATEWAY, "Routing service error")
            }
            AppError::AirQuality(ref e) => {
                tracing::error!("Air quality error: {}", e);
                (StatusCode::BAD_GATEWAY, "Air quality service error")
            }
            AppError::Explanation(ref e) => {
                tracing::error!("Explanation service error: {}", e);
                (StatusCode::BAD_GATEWAY, "Explanation service error")
            }
            AppError::InvalidRequest(ref e) => (StatusCode::BAD_REQUEST, e.as_str()),
            AppError::NoRecommendation(ref e) => {
                tracing::warn!("No recommendation available: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Could not produce a route recommendation",
                )
            }
            AppError::Internal(ref e) => {
                tracing::error!("Internal error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(json!({
            "error": status.canonical_reason().unwrap_or("Unknown error"),
            "message": error_message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
