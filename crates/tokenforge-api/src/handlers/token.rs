//! Checksum and token handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::request::TextRequest;
use crate::dto::response::{ChecksumResponse, TokensResponse};
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// POST /checksum
pub async fn checksum(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<TextRequest>,
) -> Json<ChecksumResponse> {
    let text = req.into_text();
    let checksum = state.generator.checksum(&text);
    Json(ChecksumResponse { text, checksum })
}

/// POST /tokens
pub async fn tokens(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<TextRequest>,
) -> Json<TokensResponse> {
    let batch = state.generator.generate_default(&req.into_text());
    Json(batch.into())
}

/// POST /generate
pub async fn generate(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<TextRequest>,
) -> Json<TokensResponse> {
    let batch = state.generator.generate_default(&req.into_text());
    Json(batch.into())
}
