//! Error types for rcsj-model.

use thiserror::Error;

/// Errors raised while building parameters or applying schedules.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A parameter-generation mode was requested that is not supported for
    /// the targeted vector.
    #[error("not implemented: {0}")]
    NotImplemented(String),

    /// A supplied vector or site index does not fit the chain size.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
