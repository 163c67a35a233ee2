//! Gaussian sampling over an injectable random stream.

use rand::Rng;
use std::f64::consts::PI;

/// One standard-normal sample via the Box–Muller transform.
pub fn standard_normal<R: Rng>(rng: &mut R) -> f64 {
    // 1 - u keeps the argument of ln strictly positive.
    let u1: f64 = 1.0 - rng.gen::<f64>();
    let u2: f64 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

/// A vector of independent Gaussian samples with zero mean and standard
/// deviation `amplitude`.
pub fn gaussian_vector<R: Rng>(rng: &mut R, amplitude: f64, len: usize) -> Vec<f64> {
    (0..len).map(|_| amplitude * standard_normal(rng)).collect()
}
