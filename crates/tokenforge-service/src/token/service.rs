//! Token batch generation service.

use serde::{Deserialize, Serialize};
use tracing::debug;

use tokenforge_core::config::TokensConfig;
use tokenforge_core::error::AppError;

use super::checksum::compute_checksum;
use super::count::TokenCount;
use super::derive::generate_tokens;

/// Tokens derived from one piece of text, plus the text's checksum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBatch {
    /// Tokens in generation order (index 0 first).
    pub tokens: Vec<String>,
    /// MD5 checksum of the original text.
    pub checksum: String,
}

/// Computes the checksum once and `count` salted tokens for `text`.
pub fn generate(text: &str, count: usize) -> TokenBatch {
    TokenBatch {
        checksum: compute_checksum(text),
        tokens: generate_tokens(text, count),
    }
}

/// Generates token batches within configured limits.
///
/// Every handler that returns tokens goes through this type so all call
/// sites produce identical output for the same count.
#[derive(Debug, Clone, Copy)]
pub struct TokenGenerator {
    /// Largest count accepted by [`TokenGenerator::count`].
    max_count: usize,
}

impl TokenGenerator {
    /// Creates a generator from the `[tokens]` configuration section.
    pub fn new(config: &TokensConfig) -> Self {
        Self {
            max_count: config.max_count,
        }
    }

    /// Largest accepted count.
    pub fn max_count(&self) -> usize {
        self.max_count
    }

    /// Validates an externally supplied count.
    pub fn count(&self, requested: i64) -> Result<TokenCount, AppError> {
        TokenCount::new(requested, self.max_count)
    }

    /// Checksum of `text` without any tokens.
    pub fn checksum(&self, text: &str) -> String {
        compute_checksum(text)
    }

    /// Generates a batch of exactly `count` tokens.
    pub fn generate(&self, text: &str, count: TokenCount) -> TokenBatch {
        debug!(
            text_len = text.len(),
            count = count.get(),
            "Generating token batch"
        );
        generate(text, count.get())
    }

    /// Generates a batch of [`TokenCount::default`] (five) tokens.
    pub fn generate_default(&self, text: &str) -> TokenBatch {
        self.generate(text, TokenCount::default())
    }
}

impl Default for TokenGenerator {
    fn default() -> Self {
        Self::new(&TokensConfig::default())
    }
}
