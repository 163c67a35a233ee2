//! Model types for the rcsj junction-chain simulator.
//!
//! `Parameters` is the full per-run description of a chain: static scalars,
//! per-site vectors, and the mutable phase/voltage state. `Schedule` applies
//! per-step linear-ramp updates to it, and `BiasPolicy` computes the external
//! drive current each step. All randomness flows through injectable
//! `rand::Rng` streams so runs are reproducible when seeded.

pub mod bias;
pub mod error;
pub mod noise;
pub mod parameters;
pub mod schedule;

pub use bias::BiasPolicy;
pub use error::ModelError;
pub use noise::{gaussian_vector, standard_normal};
pub use parameters::{Parameters, ParametersBuilder, VectorInit};
pub use schedule::{Ramp, ScalarTarget, Schedule, SiteSelector, Update, VectorTarget};
