//! Elementwise vector helpers used by the force assembler and integrator.

use crate::error::{MathError, Result};

fn check_len(a: &[f64], b: &[f64], op: &str) -> Result<()> {
    if a.len() != b.len() {
        return Err(MathError::DimensionMismatch(format!(
            "cannot {} vectors of length {} and {}",
            op,
            a.len(),
            b.len()
        )));
    }
    Ok(())
}

/// Elementwise sum a + b.
pub fn add(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    check_len(a, b, "add")?;
    Ok(a.iter().zip(b).map(|(x, y)| x + y).collect())
}

/// Elementwise difference a - b.
pub fn sub(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    check_len(a, b, "subtract")?;
    Ok(a.iter().zip(b).map(|(x, y)| x - y).collect())
}

/// Scalar multiple s·v.
pub fn scale(v: &[f64], scalar: f64) -> Vec<f64> {
    v.iter().map(|x| x * scalar).collect()
}

/// a + s·b, the fused update used for the half-step phase advance.
pub fn add_scaled(a: &[f64], b: &[f64], scalar: f64) -> Result<Vec<f64>> {
    check_len(a, b, "add")?;
    Ok(a.iter().zip(b).map(|(x, y)| x + scalar * y).collect())
}

/// Elementwise sine.
pub fn sin(v: &[f64]) -> Vec<f64> {
    v.iter().map(|x| x.sin()).collect()
}

/// Shifted difference of two equal-length vectors:
/// `(a[0], a[1] - b[0], ..., a[n-1] - b[n-2], -b[n-1])`, length n + 1.
///
/// With a = b = phase this yields the chain of phase differences with both
/// boundary terms, the transform shared by the Josephson coupling and the
/// correlated-noise assembly.
pub fn shifted_diff(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    check_len(a, b, "shift-difference")?;
    let n = a.len();
    let mut res = vec![0.0; n + 1];

    res[0] = a[0];
    for i in 1..n {
        res[i] = a[i] - b[i - 1];
    }
    res[n] = -b[n - 1];

    Ok(res)
}

/// Squared Euclidean norm.
pub fn norm_squared(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum()
}

/// Euclidean norm.
pub fn norm(v: &[f64]) -> f64 {
    norm_squared(v).sqrt()
}
