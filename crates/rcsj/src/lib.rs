//! rcsj — stochastic simulation of Josephson junction chains.
//!
//! Umbrella crate re-exporting the public surface of the sub-crates.
//!
//! A run wires four pieces together: `Parameters` (built once, updated per
//! step by a `Schedule`), a `BiasPolicy` supplying the drive current, the
//! `RcsjSolver` advancing the chain, and the recorders collecting the
//! averaged trace and the phase-slip log.
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use rcsj::{
//!     BiasPolicy, EventLog, ParametersBuilder, RcsjSolver, RunRecorder, Schedule,
//! };
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let mut params = ParametersBuilder::new(8)
//!     .max_steps(100)
//!     .dt(0.02)
//!     .noise_level(0.05)
//!     .bias_current(0.7)
//!     .build(&mut rng)
//!     .unwrap();
//!
//! let schedule = Schedule::new();
//! let bias = BiasPolicy::CurrentBias;
//! let mut solver = RcsjSolver::new(&params, StdRng::seed_from_u64(2)).unwrap();
//! let mut bias_rng = StdRng::seed_from_u64(3);
//! let mut log = EventLog::new(true);
//! let mut recorder = RunRecorder::new(params.max_steps);
//!
//! for step in 0..params.max_steps {
//!     for _ in 0..params.average {
//!         schedule.apply(&mut params, step).unwrap();
//!         params.i = bias.drive(&params, &mut bias_rng);
//!         solver.step(&mut params, &mut log).unwrap();
//!         recorder.record(&params);
//!     }
//! }
//! ```

pub use rcsj_math::{self, Band, MathError, TridiagonalLu, TridiagonalMatrix};
pub use rcsj_model::{
    self, BiasPolicy, ModelError, Parameters, ParametersBuilder, Ramp, ScalarTarget, Schedule,
    SiteSelector, Update, VectorInit, VectorTarget,
};
pub use rcsj_sim::{
    self, branch_indices, conductance_matrix, EventLog, PhaseSlipEvent, RcsjSolver, RunRecorder,
    SimError,
};
