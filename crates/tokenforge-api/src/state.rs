//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use tokenforge_core::config::AppConfig;
use tokenforge_core::result::AppResult;
use tokenforge_service::TokenGenerator;

use crate::view::FormRenderer;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// Built once at startup; nothing in it is mutated afterwards.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Checksum and token generator
    pub generator: TokenGenerator,
    /// HTML form renderer
    pub views: Arc<FormRenderer>,
}

impl AppState {
    /// Builds the state from a loaded configuration.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let generator = TokenGenerator::new(&config.tokens);
        let views = FormRenderer::new()?;

        Ok(Self {
            config: Arc::new(config),
            generator,
            views: Arc::new(views),
        })
    }
}
