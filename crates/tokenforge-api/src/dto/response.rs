//! Response DTOs.

use serde::{Deserialize, Serialize};

use tokenforge_service::TokenBatch;

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WelcomeResponse {
    /// Greeting naming the configured participant.
    pub message: String,
}

/// Body of `POST /checksum`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecksumResponse {
    /// Echo of the input text.
    pub text: String,
    /// MD5 checksum of the text.
    pub checksum: String,
}

/// Body of `POST /tokens` and `POST /generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokensResponse {
    /// Generated tokens, index 0 first.
    pub tokens: Vec<String>,
    /// MD5 checksum of the text.
    pub checksum: String,
}

impl From<TokenBatch> for TokensResponse {
    fn from(batch: TokenBatch) -> Self {
        Self {
            tokens: batch.tokens,
            checksum: batch.checksum,
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the server is answering.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Configured application title.
    pub title: String,
}
