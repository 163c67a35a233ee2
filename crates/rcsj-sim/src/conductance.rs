//! Conductance (alpha) matrix assembly.
//!
//! The chain is a resistor network: each link between neighboring sites
//! carries the reciprocal of a voltage-dependent resistance, and the matrix
//! is the network Laplacian. Resistances are state-dependent and nonlinear,
//! so the matrix is rebuilt every step and never cached.

use rcsj_math::{Band, TridiagonalMatrix};
use rcsj_model::Parameters;

/// Voltage used for the resistance decision at `site`.
///
/// Interior sites see the difference to the next site (a voltage-divider
/// chain); the last site is referenced to ground.
pub fn local_voltage(params: &Parameters, site: usize) -> f64 {
    if site == params.size - 1 {
        return params.voltage[site];
    }
    params.voltage[site] - params.voltage[site + 1]
}

/// Two-regime resistance law: the normal resistance above the gap voltage,
/// the site's quasiparticle resistance below it.
pub fn site_resistance(params: &Parameters, site: usize) -> f64 {
    if local_voltage(params, site).abs() >= params.vg {
        return params.r;
    }
    params.rqp[site]
}

/// Assemble the tridiagonal conductance matrix for the current voltage
/// state. O(n); each link resistance is evaluated once.
pub fn conductance_matrix(params: &Parameters) -> TridiagonalMatrix {
    let n = params.size;
    let mut alpha = TridiagonalMatrix::new(n);

    let mut forward_res = site_resistance(params, 0);
    let mut backward_res;

    alpha.set(Band::Diagonal, 0, 1.0 / forward_res);
    alpha.set(Band::Upper, 0, -1.0 / forward_res);

    for i in 1..n - 1 {
        backward_res = forward_res;
        forward_res = site_resistance(params, i);

        alpha.set(Band::Diagonal, i, 1.0 / backward_res + 1.0 / forward_res);
        alpha.set(Band::Upper, i, -1.0 / forward_res);
        alpha.set(Band::Lower, i - 1, -1.0 / backward_res);
    }

    backward_res = forward_res;
    forward_res = site_resistance(params, n - 1);

    alpha.set(Band::Diagonal, n - 1, 1.0 / forward_res + 1.0 / backward_res);
    alpha.set(Band::Lower, n - 2, -1.0 / backward_res);

    alpha
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rcsj_model::{ParametersBuilder, VectorInit};

    fn params(voltage: Vec<f64>, rqp: Vec<f64>) -> Parameters {
        let size = voltage.len();
        ParametersBuilder::new(size)
            .normal_resistance(2.0)
            .gap_voltage(0.5)
            .voltage(VectorInit::Values(voltage))
            .quasiparticle_resistance(VectorInit::Values(rqp))
            .build(&mut StdRng::seed_from_u64(0))
            .unwrap()
    }

    #[test]
    fn test_local_voltage() {
        let p = params(vec![0.3, 0.1, 0.4], vec![1.0, 1.0, 1.0]);
        assert_relative_eq!(local_voltage(&p, 0), 0.2);
        assert_relative_eq!(local_voltage(&p, 1), -0.3);
        // Last site is ground-referenced.
        assert_relative_eq!(local_voltage(&p, 2), 0.4);
    }

    #[test]
    fn test_resistance_regimes() {
        // Site 0 is above the gap (|0.6| >= 0.5) -> normal resistance.
        // Site 1 is below (|−0.3| < 0.5) -> quasiparticle resistance.
        let p = params(vec![0.6, 0.0, 0.3], vec![4.0, 8.0, 16.0]);
        assert_relative_eq!(site_resistance(&p, 0), 2.0);
        assert_relative_eq!(site_resistance(&p, 1), 8.0);
        assert_relative_eq!(site_resistance(&p, 2), 16.0);
    }

    #[test]
    fn test_laplacian_structure() {
        // All sites superconducting with distinct rqp: 4, 8, 16.
        let p = params(vec![0.0, 0.0, 0.0], vec![4.0, 8.0, 16.0]);
        let alpha = conductance_matrix(&p);

        assert_relative_eq!(alpha.get(Band::Diagonal, 0), 1.0 / 4.0);
        assert_relative_eq!(alpha.get(Band::Upper, 0), -1.0 / 4.0);

        assert_relative_eq!(alpha.get(Band::Diagonal, 1), 1.0 / 4.0 + 1.0 / 8.0);
        assert_relative_eq!(alpha.get(Band::Upper, 1), -1.0 / 8.0);
        assert_relative_eq!(alpha.get(Band::Lower, 0), -1.0 / 4.0);

        assert_relative_eq!(alpha.get(Band::Diagonal, 2), 1.0 / 8.0 + 1.0 / 16.0);
        assert_relative_eq!(alpha.get(Band::Lower, 1), -1.0 / 8.0);
    }

    #[test]
    fn test_two_site_chain() {
        let p = params(vec![0.0, 0.0], vec![4.0, 8.0]);
        let alpha = conductance_matrix(&p);

        assert_relative_eq!(alpha.get(Band::Diagonal, 0), 1.0 / 4.0);
        assert_relative_eq!(alpha.get(Band::Upper, 0), -1.0 / 4.0);
        assert_relative_eq!(alpha.get(Band::Diagonal, 1), 1.0 / 4.0 + 1.0 / 8.0);
        assert_relative_eq!(alpha.get(Band::Lower, 0), -1.0 / 4.0);
    }

    #[test]
    fn test_row_sums_vanish_for_interior_rows() {
        // A Laplacian conducts no net current for a uniform voltage shift:
        // interior row sums are zero, boundary rows keep the ground link.
        let p = params(vec![0.0, 0.0, 0.0, 0.0], vec![2.0, 3.0, 5.0, 7.0]);
        let alpha = conductance_matrix(&p);
        let row1 = alpha.get(Band::Lower, 0) + alpha.get(Band::Diagonal, 1) + alpha.get(Band::Upper, 1);
        let row2 = alpha.get(Band::Lower, 1) + alpha.get(Band::Diagonal, 2) + alpha.get(Band::Upper, 2);
        assert_relative_eq!(row1, 0.0, epsilon = 1e-15);
        assert_relative_eq!(row2, 0.0, epsilon = 1e-15);
    }
}
