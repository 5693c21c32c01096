//! Integration tests for the JSON endpoints.

use std::collections::HashSet;

use http::StatusCode;
use serde_json::json;

use tokenforge_core::config::AppConfig;

use crate::helpers::{TestApp, is_hex_of_len};

#[tokio::test]
async fn test_welcome_names_participant() {
    let mut config = AppConfig::default();
    config.app.participant = "Ada Lovelace".to_string();
    let app = TestApp::with_config(config);

    let response = app.request("GET", "/", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let message = response.str_field("message").expect("No message");
    assert!(message.contains("Ada Lovelace"));
}

#[tokio::test]
async fn test_checksum_hello() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/checksum", Some(json!({ "text": "hello" })))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({
            "text": "hello",
            "checksum": "5d41402abc4b2a76b9719d911017c592",
        })
    );
}

#[tokio::test]
async fn test_tokens_for_empty_text() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/tokens", Some(json!({ "text": "" })))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.str_field("checksum"),
        Some("d41d8cd98f00b204e9800998ecf8427e")
    );

    let tokens = response.tokens();
    assert_eq!(tokens.len(), 5);
    assert!(tokens.iter().all(|t| is_hex_of_len(t, 64)));
}

#[tokio::test]
async fn test_generate_hello() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/generate", Some(json!({ "text": "hello" })))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.str_field("checksum"),
        Some("5d41402abc4b2a76b9719d911017c592")
    );

    let tokens = response.tokens();
    assert_eq!(tokens.len(), 5);
    let unique: HashSet<&String> = tokens.iter().collect();
    assert_eq!(unique.len(), 5);
    assert!(tokens.iter().all(|t| is_hex_of_len(t, 64)));
}

#[tokio::test]
async fn test_generate_is_not_repeatable() {
    let app = TestApp::new();
    let body = json!({ "text": "same" });

    let first = app.request("POST", "/generate", Some(body.clone())).await;
    let second = app.request("POST", "/generate", Some(body)).await;

    assert_eq!(first.str_field("checksum"), second.str_field("checksum"));
    assert_ne!(first.tokens(), second.tokens());
}

#[tokio::test]
async fn test_non_ascii_text() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/checksum", Some(json!({ "text": "naïve café ☕" })))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.str_field("text"), Some("naïve café ☕"));
    assert!(is_hex_of_len(
        response.str_field("checksum").expect("No checksum"),
        32
    ));
}

#[tokio::test]
async fn test_missing_text_is_rejected() {
    let app = TestApp::new();

    for path in ["/checksum", "/tokens", "/generate"] {
        let response = app.request("POST", path, Some(json!({}))).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "path {path}");
        assert_eq!(response.str_field("error"), Some("VALIDATION_ERROR"));
    }
}

#[tokio::test]
async fn test_null_text_is_rejected() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/generate", Some(json!({ "text": null })))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_mistyped_text_is_rejected() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/tokens", Some(json!({ "text": 42 })))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.str_field("error"), Some("VALIDATION_ERROR"));
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let app = TestApp::new();

    let response = app
        .request_raw("POST", "/checksum", "application/json", "{\"text\": ")
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();

    let response = app.request("GET", "/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.str_field("status"), Some("ok"));
    assert_eq!(response.str_field("title"), Some("TokenForge"));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = TestApp::new();

    let response = app.request("GET", "/nope", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.str_field("error"), Some("NOT_FOUND"));
}
