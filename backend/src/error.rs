//! Error handling for the City Weather service
//!
//! Every error leaves the server as `{"error": "<message>"}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::ValidationError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Client errors
    #[error("{0} parameter is required")]
    MissingParameter(&'static str),

    #[error("City not found")]
    CityNotFound,

    // Upstream errors
    #[error("Geocoding API request failed: {0}")]
    GeocodingFailed(String),

    #[error("Weather API request failed: {0}")]
    WeatherFailed(String),

    #[error("Weather data not available")]
    WeatherDataUnavailable,
}

/// Error response structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            AppError::CityNotFound => StatusCode::NOT_FOUND,
            AppError::GeocodingFailed(_)
            | AppError::WeatherFailed(_)
            | AppError::WeatherDataUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::MissingParameter { field } => AppError::MissingParameter(field),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Error: {:?}", self);
        } else {
            tracing::warn!("Rejected request: {}", self);
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
