//! Helpers shared by the integration tests

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use city_weather_backend::{create_app, AppState, Config};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::MockServer;

/// Base URL nothing listens on
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1/v1";

/// App state with explicit upstream base URLs and per-call timeout
pub fn state_with(geocoding_url: String, weather_url: String, timeout_secs: u64) -> AppState {
    let mut config = Config::default();
    config.geocoding.base_url = geocoding_url;
    config.weather.base_url = weather_url;
    config.upstream.timeout_secs = timeout_secs;
    AppState::from_config(config).unwrap()
}

/// App state whose upstreams both live on the mock server under `/v1`
pub fn state_for(server: &MockServer) -> AppState {
    let base = format!("{}/v1", server.uri());
    state_with(base.clone(), base, 5)
}

/// App state whose upstreams refuse connections
pub fn unreachable_state() -> AppState {
    state_with(UNREACHABLE_URL.to_string(), UNREACHABLE_URL.to_string(), 2)
}

/// Mock server upstreams with a one second timeout per call
pub fn impatient_state(server: &MockServer) -> AppState {
    let base = format!("{}/v1", server.uri());
    state_with(base.clone(), base, 1)
}

pub fn app_for(server: &MockServer) -> Router {
    create_app(state_for(server))
}

/// Issue a GET and decode the JSON body
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

pub fn geocoding_result(name: &str, admin1: Option<&str>, country: Option<&str>) -> Value {
    let mut result = json!({
        "id": 2988507,
        "name": name,
        "latitude": 48.85341,
        "longitude": 2.3488,
        "elevation": 43.0,
        "timezone": "Europe/Paris",
    });
    if let Some(admin1) = admin1 {
        result["admin1"] = json!(admin1);
    }
    if let Some(country) = country {
        result["country"] = json!(country);
    }
    result
}

pub fn current_section(weathercode: i64) -> Value {
    json!({
        "time": "2024-03-08T12:00",
        "interval": 900,
        "temperature_2m": 12.3,
        "relative_humidity_2m": 71,
        "weathercode": weathercode,
        "windspeed_10m": 14.8
    })
}

/// Daily section with `days` consecutive entries starting 2024-03-01
pub fn daily_section(days: usize) -> Value {
    let time: Vec<String> = (1..=days).map(|d| format!("2024-03-{:02}", d)).collect();
    let max: Vec<f64> = (0..days).map(|d| 10.0 + d as f64).collect();
    let min: Vec<f64> = (0..days).map(|d| d as f64 - 2.0).collect();
    let wind: Vec<f64> = (0..days).map(|d| 20.0 + d as f64 / 2.0).collect();
    let codes: Vec<i64> = (0..days).map(|d| if d % 2 == 0 { 3 } else { 61 }).collect();

    json!({
        "time": time,
        "temperature_2m_max": max,
        "temperature_2m_min": min,
        "weathercode": codes,
        "windspeed_10m_max": wind
    })
}
