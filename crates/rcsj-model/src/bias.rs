//! External drive-current bias policies.

use crate::noise::standard_normal;
use crate::parameters::Parameters;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// How the external circuit supplies current to the first site.
///
/// The variant set is closed: the physics admits exactly these three
/// circuits, so an open plugin surface buys nothing. The caller evaluates
/// the policy once per step and stores the result into `Parameters::i`
/// before calling the integrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BiasPolicy {
    /// Fixed current: i = ib.
    NoBias,
    /// Current bias through a noisy shunt resistor:
    /// i = ib - v[0]/rs - nl·sqrt(dt·rs)·η.
    CurrentBias,
    /// Voltage bias through series and shunt resistors:
    /// i = vb/rt - v[0]·(1/rs + 1/rt) - sqrt(2·nl·(1/rs + 1/rt)/dt)·η.
    VoltageBias,
}

impl BiasPolicy {
    /// Drive current for the coming step, reading the first-site voltage
    /// exposed by the core.
    pub fn drive<R: Rng>(&self, params: &Parameters, rng: &mut R) -> f64 {
        match self {
            BiasPolicy::NoBias => params.ib,

            BiasPolicy::CurrentBias => {
                let noise =
                    params.nl * (params.dt * params.rs).sqrt() * standard_normal(rng);
                params.ib - params.voltage[0] / params.rs - noise
            }

            BiasPolicy::VoltageBias => {
                let conductance = 1.0 / params.rs + 1.0 / params.rt;
                let noise =
                    (2.0 * params.nl * conductance / params.dt).sqrt() * standard_normal(rng);
                params.vb / params.rt - params.voltage[0] * conductance - noise
            }
        }
    }
}
