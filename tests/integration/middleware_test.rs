//! CORS and timeout layer tests.

use http::StatusCode;

use tokenforge_core::config::AppConfig;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_preflight_lists_configured_methods() {
    let app = TestApp::new();

    let (status, headers) = app
        .preflight("/checksum", "https://a.example", "POST")
        .await;

    assert_eq!(status, StatusCode::OK);
    let methods = headers
        .get("access-control-allow-methods")
        .and_then(|v| v.to_str().ok())
        .expect("allow-methods header");
    assert!(methods.contains("POST"));
    assert_ne!(methods, "*");
}

#[tokio::test]
async fn test_wildcard_methods_allow_any() {
    let mut config = AppConfig::default();
    config.server.cors.allowed_methods = vec!["*".to_string()];
    let app = TestApp::with_config(config);

    let (status, headers) = app
        .preflight("/generate", "https://a.example", "PATCH")
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers
            .get("access-control-allow-methods")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn test_explicit_origin_is_echoed() {
    let mut config = AppConfig::default();
    config.server.cors.allowed_origins = vec!["https://a.example".to_string()];
    let app = TestApp::with_config(config);

    let (_, headers) = app
        .preflight("/checksum", "https://a.example", "POST")
        .await;

    assert_eq!(
        headers
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("https://a.example")
    );
}

#[tokio::test]
async fn test_short_timeout_still_serves_fast_requests() {
    let mut config = AppConfig::default();
    config.server.request_timeout_seconds = 1;
    let app = TestApp::with_config(config);

    let response = app
        .request("POST", "/checksum", Some(serde_json::json!({ "text": "hello" })))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.str_field("checksum"),
        Some("5d41402abc4b2a76b9719d911017c592")
    );
}
