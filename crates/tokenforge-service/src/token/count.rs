//! Validated token batch size.

use std::fmt;

use tokenforge_core::config::tokens::DEFAULT_TOKEN_COUNT;
use tokenforge_core::error::AppError;

/// A non-negative token count no larger than the configured maximum.
///
/// Callers that accept a count from the outside world (CLI flags, query
/// strings) construct one of these so that negative or oversized values are
/// rejected before any generation happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenCount(usize);

impl TokenCount {
    /// Validates a signed count against `max`.
    pub fn new(requested: i64, max: usize) -> Result<Self, AppError> {
        let count = usize::try_from(requested).map_err(|_| {
            AppError::validation(format!("token count must be non-negative, got {requested}"))
        })?;

        if count > max {
            return Err(AppError::validation(format!(
                "token count {count} exceeds the maximum of {max}"
            )));
        }

        Ok(Self(count))
    }

    /// The underlying count.
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for TokenCount {
    fn default() -> Self {
        Self(DEFAULT_TOKEN_COUNT)
    }
}

impl fmt::Display for TokenCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
