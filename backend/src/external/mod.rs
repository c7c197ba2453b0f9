//! External API integrations

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use thiserror::Error;

use crate::config::UpstreamConfig;

pub mod geocoding;
pub mod weather;

pub use geocoding::GeocodingClient;
pub use weather::WeatherClient;

/// Failure of a single upstream call
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{status} - {body}")]
    Status { status: StatusCode, body: String },

    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Build the HTTP client shared by all requests to one upstream
pub fn build_http_client(config: &UpstreamConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(config.user_agent.as_str())
        .build()
}

/// Reject non-success responses, keeping the body for the error message
async fn ensure_success(response: Response) -> Result<Response, UpstreamError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(UpstreamError::Status { status, body })
}
