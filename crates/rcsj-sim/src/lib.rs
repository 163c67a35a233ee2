//! Core integrator for the rcsj junction-chain simulator.
//!
//! One step of the semi-implicit midpoint scheme:
//! 1. half-step phase advance,
//! 2. conductance (alpha) matrix assembly from the instantaneous voltages,
//! 3. LU factorization of `(dt/2)·alpha + mass` and solve against the
//!    stochastic force vector,
//! 4. voltage update and second half-step phase advance,
//! 5. phase-slip detection against the stored winding numbers.
//!
//! The damping term is treated implicitly, which keeps the scheme stable for
//! the stiff resistive part while the nonlinear Josephson coupling and the
//! thermal noise stay explicit.

pub mod conductance;
pub mod error;
pub mod force;
pub mod recorder;
pub mod slip;
pub mod solver;

pub use conductance::{conductance_matrix, local_voltage, site_resistance};
pub use error::SimError;
pub use force::{force_vector, noise_vector};
pub use recorder::{EventLog, RunRecorder};
pub use slip::{branch_indices, PhaseSlipEvent};
pub use solver::RcsjSolver;
