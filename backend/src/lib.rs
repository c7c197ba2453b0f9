//! City Weather - Backend Server
//!
//! Aggregates a geocoding service and a weather service into two endpoints:
//! place name autocomplete and a combined current/past/forecast weather report.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};

use external::{build_http_client, GeocodingClient, WeatherClient};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub geocoding: GeocodingClient,
    pub weather: WeatherClient,
}

impl AppState {
    /// Build upstream clients from configuration. One HTTP client is reused
    /// for every request.
    pub fn from_config(config: Config) -> Result<Self, reqwest::Error> {
        let http = build_http_client(&config.upstream)?;
        Ok(Self {
            geocoding: GeocodingClient::new(http.clone(), config.geocoding.base_url.clone()),
            weather: WeatherClient::new(http, config.weather.base_url.clone()),
            config: Arc::new(config),
        })
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .merge(routes::api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(cors),
        )
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "City Weather API v1.0"
}
