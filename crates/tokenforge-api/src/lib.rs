//! # tokenforge-api
//!
//! HTTP API layer for TokenForge built on Axum.
//!
//! Provides the JSON endpoints, the interactive HTML form, request
//! validation extractors, middleware (logging, CORS, compression) and the
//! mapping from [`tokenforge_core::AppError`] to HTTP responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
pub mod view;

pub use app::run_server;
pub use router::build_router;
pub use state::AppState;
