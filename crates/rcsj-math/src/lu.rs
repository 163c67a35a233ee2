//! LU factors of a tridiagonal matrix and the associated solver.

use crate::error::{MathError, Result};

/// Factors A = L U of a tridiagonal matrix, with L unit lower bidiagonal and
/// U upper bidiagonal.
///
/// The U diagonal is stored inverted so back substitution multiplies instead
/// of dividing. Produced by
/// [`TridiagonalMatrix::lu_factorize`](crate::TridiagonalMatrix::lu_factorize).
#[derive(Debug, Clone)]
pub struct TridiagonalLu {
    size: usize,
    /// Super-diagonal of U.
    upper: Vec<f64>,
    /// Reciprocal of the U diagonal.
    upper_diag_inv: Vec<f64>,
    /// Sub-diagonal of L.
    lower: Vec<f64>,
}

impl TridiagonalLu {
    pub(crate) fn new(upper: Vec<f64>, upper_diag_inv: Vec<f64>, lower: Vec<f64>) -> Self {
        Self {
            size: upper_diag_inv.len(),
            upper,
            upper_diag_inv,
            lower,
        }
    }

    /// Matrix dimension n.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Solve A x = b in O(n): forward substitution for L y = b, then
    /// backward substitution for U x = y.
    pub fn solve(&self, b: &[f64]) -> Result<Vec<f64>> {
        let n = self.size;
        if b.len() != n {
            return Err(MathError::DimensionMismatch(format!(
                "factorization size {} does not match right-hand side length {}",
                n,
                b.len()
            )));
        }

        let mut x = vec![0.0; n];

        x[0] = b[0];
        for i in 1..n {
            x[i] = b[i] - self.lower[i - 1] * x[i - 1];
        }

        x[n - 1] *= self.upper_diag_inv[n - 1];
        for i in (0..n - 1).rev() {
            x[i] = (x[i] - self.upper[i] * x[i + 1]) * self.upper_diag_inv[i];
        }

        Ok(x)
    }
}
