//! Route definitions for the TokenForge HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use std::time::Duration;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::StatusCode,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::compression::build_compression_layer;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes;
    let timeout = Duration::from_secs(state.config.server.request_timeout_seconds);
    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .merge(json_routes())
        .merge(form_routes())
        .route("/health", get(handlers::health::health))
        .fallback(handlers::root::not_found)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout))
        .layer(build_compression_layer())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Welcome, checksum and token endpoints
fn json_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::root::welcome))
        .route("/checksum", post(handlers::token::checksum))
        .route("/tokens", post(handlers::token::tokens))
        .route("/generate", post(handlers::token::generate))
}

/// Interactive HTML form
fn form_routes() -> Router<AppState> {
    Router::new().route(
        "/form",
        get(handlers::form::form_page).post(handlers::form::form_submit),
    )
}
