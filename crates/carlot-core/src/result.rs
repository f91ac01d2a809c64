//! Convenience result type alias for Carlot.

use crate::error::AppError;

/// A specialized `Result` type for Carlot operations.
pub type AppResult<T> = Result<T, AppError>;
