//! Token generation limits.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Number of tokens produced when a caller does not ask for a count.
pub const DEFAULT_TOKEN_COUNT: usize = 5;

/// Token batch size configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokensConfig {
    /// Largest count a caller may request explicitly.
    #[serde(default = "default_max_count")]
    pub max_count: usize,
}

impl Default for TokensConfig {
    fn default() -> Self {
        Self {
            max_count: default_max_count(),
        }
    }
}

impl TokensConfig {
    /// Ensures the default batch size is still allowed.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.max_count < DEFAULT_TOKEN_COUNT {
            return Err(AppError::configuration(format!(
                "tokens.max_count ({}) must be at least {DEFAULT_TOKEN_COUNT}",
                self.max_count
            )));
        }
        Ok(())
    }
}

fn default_max_count() -> usize {
    1000
}
