//! Banded-matrix algebra for the rcsj junction-chain simulator.
//!
//! Provides:
//! - Tridiagonal matrices stored as three bands with O(n) arithmetic
//! - Unpivoted Thomas LU factorization and O(n) solves
//! - Dimension-checked vector operations used by the force assembler
//!
//! No full matrix is ever materialized; every operation walks the bands.

pub mod error;
pub mod lu;
pub mod tridiagonal;
pub mod vector;

pub use error::{MathError, Result};
pub use lu::TridiagonalLu;
pub use tridiagonal::{Band, TridiagonalMatrix};
