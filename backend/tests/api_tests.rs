//! Router-level tests: health, banner and CORS

mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use city_weather_backend::create_app;
use common::{get_json, state_for};
use tower::ServiceExt;
use wiremock::MockServer;

#[tokio::test]
async fn test_health_check() {
    let server = MockServer::start().await;
    let (status, body) = get_json(create_app(state_for(&server)), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["environment"], "development");
}

#[tokio::test]
async fn test_root_banner() {
    let server = MockServer::start().await;
    let response = create_app(state_for(&server))
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(String::from_utf8_lossy(&bytes).starts_with("City Weather API"));
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let server = MockServer::start().await;
    let response = create_app(state_for(&server))
        .oneshot(
            Request::builder()
                .uri("/suggestions?q=a")
                .header(header::ORIGIN, "https://frontend.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn test_cors_preflight() {
    let server = MockServer::start().await;
    let response = create_app(state_for(&server))
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/weather")
                .header(header::ORIGIN, "https://frontend.example")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
}

#[tokio::test]
async fn test_unknown_route() {
    let server = MockServer::start().await;
    let response = create_app(state_for(&server))
        .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
