//! Convenience result type alias for TokenForge.

use crate::error::AppError;

/// A specialized `Result` type for TokenForge operations.
pub type AppResult<T> = Result<T, AppError>;
