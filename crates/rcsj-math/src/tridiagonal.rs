//! Tridiagonal matrix stored as three bands.

use crate::error::{MathError, Result};
use crate::lu::TridiagonalLu;

/// Selects one of the three bands of a [`TridiagonalMatrix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    /// Main diagonal, length n.
    Diagonal,
    /// Super-diagonal, length n - 1.
    Upper,
    /// Sub-diagonal, length n - 1.
    Lower,
}

/// An n×n real tridiagonal matrix.
///
/// Storage is the three bands only, so all arithmetic is O(n). Binary
/// operations between matrices of different sizes fail with
/// [`MathError::DimensionMismatch`].
#[derive(Debug, Clone, PartialEq)]
pub struct TridiagonalMatrix {
    size: usize,
    diagonal: Vec<f64>,
    upper: Vec<f64>,
    lower: Vec<f64>,
}

impl TridiagonalMatrix {
    /// Create a zero matrix of the given size (n ≥ 2).
    pub fn new(size: usize) -> Self {
        Self {
            size,
            diagonal: vec![0.0; size],
            upper: vec![0.0; size - 1],
            lower: vec![0.0; size - 1],
        }
    }

    /// Build a matrix from explicit bands.
    pub fn from_bands(diagonal: Vec<f64>, upper: Vec<f64>, lower: Vec<f64>) -> Result<Self> {
        let size = diagonal.len();
        if upper.len() != size - 1 || lower.len() != size - 1 {
            return Err(MathError::DimensionMismatch(format!(
                "off-diagonal bands must have length {}, got upper {} and lower {}",
                size - 1,
                upper.len(),
                lower.len()
            )));
        }
        Ok(Self {
            size,
            diagonal,
            upper,
            lower,
        })
    }

    /// The identity matrix of the given size.
    pub fn identity(size: usize) -> Self {
        Self {
            size,
            diagonal: vec![1.0; size],
            upper: vec![0.0; size - 1],
            lower: vec![0.0; size - 1],
        }
    }

    /// Matrix dimension n.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Read-only view of one band.
    pub fn band(&self, band: Band) -> &[f64] {
        match band {
            Band::Diagonal => &self.diagonal,
            Band::Upper => &self.upper,
            Band::Lower => &self.lower,
        }
    }

    fn band_mut(&mut self, band: Band) -> &mut [f64] {
        match band {
            Band::Diagonal => &mut self.diagonal,
            Band::Upper => &mut self.upper,
            Band::Lower => &mut self.lower,
        }
    }

    /// One entry of a band. Panics on out-of-bounds index.
    pub fn get(&self, band: Band, index: usize) -> f64 {
        self.band(band)[index]
    }

    /// Set one entry of a band. Panics on out-of-bounds index.
    pub fn set(&mut self, band: Band, index: usize, value: f64) {
        self.band_mut(band)[index] = value;
    }

    /// Fill an entire band with the same value.
    pub fn fill(&mut self, band: Band, value: f64) {
        self.band_mut(band).fill(value);
    }

    /// Elementwise sum, returning a fresh matrix.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_size(other, "add")?;
        Ok(Self {
            size: self.size,
            diagonal: zip_add(&self.diagonal, &other.diagonal),
            upper: zip_add(&self.upper, &other.upper),
            lower: zip_add(&self.lower, &other.lower),
        })
    }

    /// Elementwise difference, returning a fresh matrix.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_size(other, "sub")?;
        Ok(Self {
            size: self.size,
            diagonal: zip_sub(&self.diagonal, &other.diagonal),
            upper: zip_sub(&self.upper, &other.upper),
            lower: zip_sub(&self.lower, &other.lower),
        })
    }

    /// Scale every band entry by a scalar, returning a fresh matrix.
    pub fn scale(&self, scalar: f64) -> Self {
        Self {
            size: self.size,
            diagonal: self.diagonal.iter().map(|x| x * scalar).collect(),
            upper: self.upper.iter().map(|x| x * scalar).collect(),
            lower: self.lower.iter().map(|x| x * scalar).collect(),
        }
    }

    /// Matrix-vector product y = A v.
    ///
    /// Row i is `lower[i-1]*v[i-1] + diag[i]*v[i] + upper[i]*v[i+1]`; the
    /// boundary rows drop the missing term.
    pub fn mat_vec(&self, v: &[f64]) -> Result<Vec<f64>> {
        if v.len() != self.size {
            return Err(MathError::DimensionMismatch(format!(
                "matrix size {} does not match vector length {}",
                self.size,
                v.len()
            )));
        }

        let n = self.size;
        let mut res = vec![0.0; n];

        res[0] = self.diagonal[0] * v[0] + self.upper[0] * v[1];
        for i in 1..n - 1 {
            res[i] =
                self.lower[i - 1] * v[i - 1] + self.diagonal[i] * v[i] + self.upper[i] * v[i + 1];
        }
        res[n - 1] = self.lower[n - 2] * v[n - 2] + self.diagonal[n - 1] * v[n - 1];

        Ok(res)
    }

    /// Squared Frobenius norm.
    pub fn norm_squared(&self) -> f64 {
        crate::vector::norm_squared(&self.diagonal)
            + crate::vector::norm_squared(&self.upper)
            + crate::vector::norm_squared(&self.lower)
    }

    /// Frobenius norm.
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Unpivoted LU factorization (Thomas algorithm).
    ///
    /// The caller must guarantee diagonal dominance; for the physical
    /// mass + conductance system this holds whenever resistances and the
    /// time step are positive. No pivoting or singularity check is done.
    pub fn lu_factorize(&self) -> TridiagonalLu {
        let n = self.size;
        let mut upper_diag_inv = vec![0.0; n];
        let mut lower = vec![0.0; n - 1];
        let upper = self.upper.clone();

        upper_diag_inv[0] = 1.0 / self.diagonal[0];
        for i in 1..n {
            lower[i - 1] = self.lower[i - 1] * upper_diag_inv[i - 1];
            upper_diag_inv[i] = 1.0 / (self.diagonal[i] - self.upper[i - 1] * lower[i - 1]);
        }

        TridiagonalLu::new(upper, upper_diag_inv, lower)
    }

    fn check_size(&self, other: &Self, op: &str) -> Result<()> {
        if self.size != other.size {
            return Err(MathError::DimensionMismatch(format!(
                "cannot {} matrices of size {} and {}",
                op, self.size, other.size
            )));
        }
        Ok(())
    }
}

fn zip_add(a: &[f64], b: &[f64]) -> Vec<f64> {
    a.iter().zip(b).map(|(x, y)| x + y).collect()
}

fn zip_sub(a: &[f64], b: &[f64]) -> Vec<f64> {
    a.iter().zip(b).map(|(x, y)| x - y).collect()
}
