//! Right-hand side of the implicit velocity solve.
//!
//! Four contributions, summed per site: implicit damping evaluated at the
//! freshly built conductance matrix, the Josephson coupling (sine of phase
//! differences), the external drive current on the first site, and thermal
//! noise correlated across neighboring sites through the link resistances
//! (fluctuation-dissipation for a resistor network).

use crate::conductance::site_resistance;
use crate::error::Result;
use rand::Rng;
use rcsj_math::{vector, TridiagonalMatrix};
use rcsj_model::{gaussian_vector, Parameters};

/// Spatially correlated thermal noise, length `size + 1`.
///
/// One Gaussian sample per site with amplitude `sqrt(2·nl·dt)`, scaled by
/// `1/sqrt(site resistance)`, then run through the same shifted-difference
/// transform as the Josephson term. With `nl = 0` the result is identically
/// zero and the rng is still advanced `size` times.
pub fn noise_vector<R: Rng>(params: &Parameters, rng: &mut R) -> Result<Vec<f64>> {
    let amplitude = (2.0 * params.nl * params.dt).sqrt();
    let mut rnd = gaussian_vector(rng, amplitude, params.size);

    for (site, sample) in rnd.iter_mut().enumerate() {
        *sample /= site_resistance(params, site).sqrt();
    }

    Ok(vector::shifted_diff(&rnd, &rnd)?)
}

/// Assemble the force vector for one step.
///
/// `phase` is the half-advanced phase; voltages and resistances are read
/// from `params`, which still holds the committed state of the previous
/// step.
pub fn force_vector<R: Rng>(
    params: &Parameters,
    phase: &[f64],
    alpha: &TridiagonalMatrix,
    rng: &mut R,
) -> Result<Vec<f64>> {
    let n = params.size;
    let dt = params.dt;

    let alpha_v = alpha.mat_vec(&params.voltage)?;
    let noise = noise_vector(params, rng)?;

    // sd[k] is the sine of the phase difference across junction k, with
    // both chain ends included: (sin x[0], sin(x[1]-x[0]), ..., sin(-x[n-1])).
    let sd = vector::sin(&vector::shifted_diff(phase, phase)?);

    let mut force = vec![0.0; n];

    // The drive current replaces the missing backward coupling at the first
    // site.
    force[0] = dt * (params.i + params.ic[0] * sd[1] - alpha_v[0]) - noise[0];

    for k in 1..n {
        force[k] =
            dt * (-params.ic[k - 1] * sd[k] + params.ic[k] * sd[k + 1] - alpha_v[k]) - noise[k];
    }

    Ok(force)
}
