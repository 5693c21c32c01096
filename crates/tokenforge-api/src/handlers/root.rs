//! Welcome route and fallback.

use axum::Json;
use axum::extract::State;

use tokenforge_core::error::AppError;

use crate::dto::response::WelcomeResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /
pub async fn welcome(State(state): State<AppState>) -> Json<WelcomeResponse> {
    let info = &state.config.app;
    Json(WelcomeResponse {
        message: format!("Welcome to {}, built for {}", info.title, info.participant),
    })
}

/// Any unmatched route.
pub async fn not_found() -> ApiError {
    AppError::not_found("No such route").into()
}
