//! The semi-implicit RCSJ chain integrator.

use crate::conductance::conductance_matrix;
use crate::error::{Result, SimError};
use crate::force::force_vector;
use crate::recorder::EventLog;
use crate::slip::{branch_indices, PhaseSlipEvent};
use rand::Rng;
use rcsj_math::{vector, Band, TridiagonalMatrix};
use rcsj_model::Parameters;

/// Integrator for one junction chain.
///
/// Owns the immutable mass matrix, the per-junction branch (winding) state,
/// and its private random stream. The chain parameters are passed in each
/// step as a one-step snapshot; `step` either commits the full state
/// transition to them or, on any dimension error, leaves them untouched.
///
/// Every instance must get its own rng; sharing a stream across instances
/// correlates their noise.
#[derive(Debug)]
pub struct RcsjSolver<R: Rng> {
    mass: TridiagonalMatrix,
    branch: Vec<i64>,
    rng: R,
}

impl<R: Rng> RcsjSolver<R> {
    /// Build a solver for the given chain, deriving the mass matrix and the
    /// initial branch state from the initial parameters.
    pub fn new(params: &Parameters, rng: R) -> Result<Self> {
        validate(params, params.size)?;

        Ok(Self {
            mass: Self::mass_matrix(params),
            branch: branch_indices(&params.phase),
            rng,
        })
    }

    /// The capacitance-derived mass matrix: diagonal
    /// `[(1 + c0 + cs)·q², (2 + c0)·q², ...]`, both off-diagonals `-q²`.
    ///
    /// Symmetric and strictly diagonally dominant for c0, cs ≥ 0, which is
    /// what lets the unpivoted LU factorization run safely.
    pub fn mass_matrix(params: &Parameters) -> TridiagonalMatrix {
        let q2 = params.q * params.q;
        let mut mass = TridiagonalMatrix::new(params.size);

        mass.fill(Band::Diagonal, (2.0 + params.c0) * q2);
        mass.set(Band::Diagonal, 0, (1.0 + params.c0 + params.cs) * q2);
        mass.fill(Band::Upper, -q2);
        mass.fill(Band::Lower, -q2);

        mass
    }

    /// Current winding index per junction.
    pub fn branch(&self) -> &[i64] {
        &self.branch
    }

    /// Advance the chain by one time step.
    ///
    /// Sequence: half-step phase advance, conductance assembly, LU solve of
    /// `(dt/2)·alpha + mass` against the stochastic force, voltage update,
    /// second half-step, then slip detection. All intermediates are staged
    /// in locals and committed together after the solve succeeds, so a
    /// failing step never leaves a half-applied phase update behind.
    pub fn step(&mut self, params: &mut Parameters, log: &mut EventLog) -> Result<()> {
        validate(params, self.mass.size())?;
        let dt = params.dt;

        // Phase at t + dt/2.
        let phase_half = vector::add_scaled(&params.phase, &params.voltage, dt / 2.0)?;

        // Implicit damping system at the current voltage state.
        let alpha = conductance_matrix(params);
        let system = alpha.scale(dt / 2.0).add(&self.mass)?;
        let lu = system.lu_factorize();

        let force = force_vector(params, &phase_half, &alpha, &mut self.rng)?;
        let dv = lu.solve(&force)?;

        let voltage = vector::add(&params.voltage, &dv)?;
        let phase = vector::add_scaled(&phase_half, &voltage, dt / 2.0)?;

        // Commit.
        params.voltage = voltage;
        params.phase = phase;

        let new_branch = branch_indices(&params.phase);
        for (location, (&old, &new)) in self.branch.iter().zip(&new_branch).enumerate() {
            if old != new {
                log.record(PhaseSlipEvent {
                    time_step: params.time_step,
                    location,
                    branch: new,
                });
            }
        }
        self.branch = new_branch;

        Ok(())
    }
}

/// Check every per-site vector against the expected chain size before any
/// state is touched.
fn validate(params: &Parameters, expected: usize) -> Result<()> {
    if params.size != expected {
        return Err(SimError::DimensionMismatch(format!(
            "parameters describe {} sites but the solver was built for {}",
            params.size, expected
        )));
    }
    if params.size < 2 {
        return Err(SimError::DimensionMismatch(format!(
            "chain needs at least 2 sites, got {}",
            params.size
        )));
    }

    for (name, len) in [
        ("phase", params.phase.len()),
        ("voltage", params.voltage.len()),
        ("ic", params.ic.len()),
        ("rqp", params.rqp.len()),
    ] {
        if len != params.size {
            return Err(SimError::DimensionMismatch(format!(
                "{} has length {} but the chain has {} sites",
                name, len, params.size
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rcsj_model::{ParametersBuilder, VectorInit};

    #[test]
    fn test_mass_matrix_structure() {
        let mut rng = StdRng::seed_from_u64(0);
        let p = ParametersBuilder::new(4)
            .quality_factor(2.0)
            .ground_capacitance(0.5)
            .shunt_capacitance(0.25)
            .build(&mut rng)
            .unwrap();

        let mass = RcsjSolver::<StdRng>::mass_matrix(&p);
        // q² = 4: first diagonal (1 + 0.5 + 0.25)·4 = 7, the rest (2 + 0.5)·4 = 10.
        assert_eq!(mass.band(Band::Diagonal), &[7.0, 10.0, 10.0, 10.0]);
        assert_eq!(mass.band(Band::Upper), &[-4.0, -4.0, -4.0]);
        assert_eq!(mass.band(Band::Lower), &[-4.0, -4.0, -4.0]);
    }

    #[test]
    fn test_noiseless_step_ignores_seed() {
        let build = |seed| {
            let mut rng = StdRng::seed_from_u64(0);
            let mut p = ParametersBuilder::new(5)
                .dt(0.05)
                .drive_current(0.4)
                .phase(VectorInit::StationaryPhase)
                .build(&mut rng)
                .unwrap();
            let mut solver = RcsjSolver::new(&p, StdRng::seed_from_u64(seed)).unwrap();
            let mut log = EventLog::new(true);
            for _ in 0..10 {
                solver.step(&mut p, &mut log).unwrap();
            }
            p
        };

        let a = build(1);
        let b = build(99);
        assert_eq!(a.phase, b.phase);
        assert_eq!(a.voltage, b.voltage);
    }

    /// Dense 3×3 Gaussian elimination, the independent reference for the
    /// hand-checked step below.
    fn solve_dense3(mut a: [[f64; 3]; 3], mut b: [f64; 3]) -> [f64; 3] {
        for col in 0..3 {
            for row in col + 1..3 {
                let factor = a[row][col] / a[col][col];
                for k in col..3 {
                    a[row][k] -= factor * a[col][k];
                }
                b[row] -= factor * b[col];
            }
        }
        let mut x = [0.0; 3];
        for row in (0..3).rev() {
            let mut sum = b[row];
            for k in row + 1..3 {
                sum -= a[row][k] * x[k];
            }
            x[row] = sum / a[row][row];
        }
        x
    }

    #[test]
    fn test_three_site_step_against_dense_reference() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut p = ParametersBuilder::new(3)
            .dt(0.1)
            .quality_factor(2.0)
            .ground_capacitance(0.5)
            .shunt_capacitance(0.25)
            .normal_resistance(3.0)
            .gap_voltage(0.4)
            .drive_current(0.3)
            .critical_current(VectorInit::Values(vec![1.0, 0.8, 0.6]))
            .quasiparticle_resistance(VectorInit::Values(vec![2.0, 4.0, 5.0]))
            .phase(VectorInit::Values(vec![0.1, 0.3, 0.6]))
            .voltage(VectorInit::Values(vec![0.05, 0.02, 0.01]))
            .build(&mut rng)
            .unwrap();

        let dt = p.dt;
        let x0 = p.phase.clone();
        let v0 = p.voltage.clone();
        let ic = p.ic.clone();

        // All |local voltages| are below vg = 0.4, so resistances are rqp.
        let (r0, r1) = (2.0, 4.0);
        let alpha = [
            [1.0 / r0, -1.0 / r0, 0.0],
            [-1.0 / r0, 1.0 / r0 + 1.0 / r1, -1.0 / r1],
            [0.0, -1.0 / r1, 1.0 / r1 + 1.0 / 5.0],
        ];
        let mass = [[7.0, -4.0, 0.0], [-4.0, 10.0, -4.0], [0.0, -4.0, 10.0]];

        let mut system = [[0.0; 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                system[i][j] = dt / 2.0 * alpha[i][j] + mass[i][j];
            }
        }

        let xh: Vec<f64> = (0..3).map(|i| x0[i] + v0[i] * dt / 2.0).collect();
        let av: Vec<f64> = (0..3)
            .map(|i| (0..3).map(|j| alpha[i][j] * v0[j]).sum())
            .collect();
        let sd = [
            xh[0].sin(),
            (xh[1] - xh[0]).sin(),
            (xh[2] - xh[1]).sin(),
            (-xh[2]).sin(),
        ];
        let f = [
            dt * (p.i + ic[0] * sd[1] - av[0]),
            dt * (-ic[0] * sd[1] + ic[1] * sd[2] - av[1]),
            dt * (-ic[1] * sd[2] + ic[2] * sd[3] - av[2]),
        ];

        let dv = solve_dense3(system, f);
        let v_expected: Vec<f64> = (0..3).map(|i| v0[i] + dv[i]).collect();
        let x_expected: Vec<f64> = (0..3).map(|i| xh[i] + v_expected[i] * dt / 2.0).collect();

        let mut solver = RcsjSolver::new(&p, StdRng::seed_from_u64(7)).unwrap();
        let mut log = EventLog::new(true);
        solver.step(&mut p, &mut log).unwrap();

        for i in 0..3 {
            assert_relative_eq!(p.voltage[i], v_expected[i], epsilon = 1e-12);
            assert_relative_eq!(p.phase[i], x_expected[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_slip_event_on_branch_crossing() {
        // Frozen dynamics: no drive, no coupling, no noise, zero voltage.
        let mut rng = StdRng::seed_from_u64(0);
        let mut p = ParametersBuilder::new(2)
            .dt(0.01)
            .critical_current(VectorInit::Constant(0.0))
            .phase(VectorInit::Values(vec![0.0, 3.0]))
            .build(&mut rng)
            .unwrap();

        let mut solver = RcsjSolver::new(&p, StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(solver.branch(), &[0]);

        // Push the junction across the +π boundary between steps.
        p.phase[1] = 3.5;
        p.time_step = 42;

        let mut log = EventLog::new(true);
        solver.step(&mut p, &mut log).unwrap();

        assert_eq!(log.len(), 1);
        assert_eq!(
            log.events()[0],
            PhaseSlipEvent {
                time_step: 42,
                location: 0,
                branch: 1,
            }
        );
        assert_eq!(solver.branch(), &[1]);

        // No crossing on the next step, no new event.
        solver.step(&mut p, &mut log).unwrap();
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_bad_vector_length_aborts_without_mutation() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut p = ParametersBuilder::new(3)
            .drive_current(0.5)
            .phase(VectorInit::Values(vec![0.2, 0.1, 0.0]))
            .build(&mut rng)
            .unwrap();

        let mut solver = RcsjSolver::new(&p, StdRng::seed_from_u64(0)).unwrap();
        let branch_before = solver.branch().to_vec();

        p.voltage = vec![0.0, 0.0];
        let mut log = EventLog::new(true);
        let res = solver.step(&mut p, &mut log);

        assert!(matches!(res, Err(SimError::DimensionMismatch(_))));
        assert_eq!(p.phase, vec![0.2, 0.1, 0.0]);
        assert_eq!(solver.branch(), branch_before.as_slice());
        assert!(log.is_empty());
    }

    #[test]
    fn test_solver_rejects_resized_chain() {
        let mut rng = StdRng::seed_from_u64(0);
        let p3 = ParametersBuilder::new(3).build(&mut rng).unwrap();
        let mut p4 = ParametersBuilder::new(4).build(&mut rng).unwrap();

        let mut solver = RcsjSolver::new(&p3, StdRng::seed_from_u64(0)).unwrap();
        let mut log = EventLog::new(false);
        assert!(solver.step(&mut p4, &mut log).is_err());
    }
}
