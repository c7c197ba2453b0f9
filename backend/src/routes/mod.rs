//! Route definitions for the City Weather service

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/suggestions", get(handlers::get_suggestions))
        .route("/weather", get(handlers::get_weather))
}
