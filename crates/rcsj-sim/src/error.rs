//! Error types for rcsj-sim.

use rcsj_math::MathError;
use thiserror::Error;

/// Errors raised by the integrator. All of them indicate a configuration or
/// caller bug; the step aborts without mutating state and the caller is
/// expected to end the run.
#[derive(Debug, Error)]
pub enum SimError {
    /// A per-site vector does not match the chain size.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// A banded-matrix or vector operation failed.
    #[error(transparent)]
    Math(#[from] MathError),
}

pub type Result<T> = std::result::Result<T, SimError>;
