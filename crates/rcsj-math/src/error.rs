//! Error types for rcsj-math.

use thiserror::Error;

/// Errors raised by banded-matrix and vector operations.
#[derive(Debug, Error)]
pub enum MathError {
    /// Operand sizes disagree. This is a caller programming error, not a
    /// recoverable runtime condition.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),
}

pub type Result<T> = std::result::Result<T, MathError>;
