//! Simulation parameters and their builder.

use crate::error::{ModelError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Full description of a junction chain and its mutable state.
///
/// Dimensionless units: resistances in terms of the normal resistance R,
/// currents in terms of the critical current I_c, voltages in terms of
/// R·I_c, capacitances in terms of the junction capacitance C, time in units
/// of L_K/R. All per-site vectors have length exactly `size`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameters {
    /// Current schedule step.
    pub step: usize,
    /// Number of schedule steps in the run.
    pub max_steps: usize,
    /// Inner iterations averaged per schedule step.
    pub average: usize,
    /// Number of integrator steps taken so far.
    pub time_step: usize,

    /// Number of sites in the chain (≥ 2).
    pub size: usize,

    /// Integration time step.
    pub dt: f64,
    /// Quality factor R·sqrt(C/L).
    pub q: f64,
    /// Capacitance to ground per site.
    pub c0: f64,
    /// Normal-state resistance.
    pub r: f64,
    /// Gap voltage: below it the quasiparticle resistance applies.
    pub vg: f64,
    /// Thermal noise level sqrt(2 k_B T / (R I_c²)).
    pub nl: f64,
    /// Drive current entering the first site, set each step by the bias
    /// policy.
    pub i: f64,
    /// Bias current (current-biased policies).
    pub ib: f64,
    /// Bias voltage (voltage-biased policy).
    pub vb: f64,
    /// Series resistance (voltage bias).
    pub rt: f64,
    /// Shunt resistance (current and voltage bias).
    pub rs: f64,
    /// Shunt capacitance added to the first site.
    pub cs: f64,

    /// Per-site critical current.
    pub ic: Vec<f64>,
    /// Per-site phase.
    pub phase: Vec<f64>,
    /// Per-site voltage (the phase velocity in this formalism).
    pub voltage: Vec<f64>,
    /// Per-site quasiparticle resistance.
    pub rqp: Vec<f64>,
}

impl Parameters {
    /// Elapsed simulation time.
    pub fn time(&self) -> f64 {
        self.time_step as f64 * self.dt
    }
}

/// How to fill one per-site vector at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum VectorInit {
    /// Every site gets the same value.
    Constant(f64),
    /// Explicit per-site values; length must equal the chain size.
    Values(Vec<f64>),
    /// Phase profile that is stationary under the initial drive current:
    /// `phase[k] = (size - k)·asin(min(i, 1))`. Only valid for the phase.
    StationaryPhase,
    /// Independent uniform samples from `[min, max]`.
    Uniform { min: f64, max: f64 },
}

/// Fluent builder for [`Parameters`].
#[derive(Debug, Clone)]
pub struct ParametersBuilder {
    size: usize,
    max_steps: usize,
    average: usize,
    dt: f64,
    q: f64,
    c0: f64,
    r: f64,
    vg: f64,
    nl: f64,
    i: f64,
    ib: f64,
    vb: f64,
    rt: f64,
    rs: f64,
    cs: f64,
    ic: VectorInit,
    phase: VectorInit,
    voltage: VectorInit,
    rqp: VectorInit,
}

impl ParametersBuilder {
    /// Start a builder for a chain of `size` sites.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            max_steps: 1,
            average: 1,
            dt: 0.01,
            q: 1.0,
            c0: 0.0,
            r: 1.0,
            vg: 1.0,
            nl: 0.0,
            i: 0.0,
            ib: 0.0,
            vb: 0.0,
            rt: 1.0,
            rs: 1.0,
            cs: 0.0,
            ic: VectorInit::Constant(1.0),
            phase: VectorInit::Constant(0.0),
            voltage: VectorInit::Constant(0.0),
            rqp: VectorInit::Constant(1.0),
        }
    }

    pub fn max_steps(mut self, value: usize) -> Self {
        self.max_steps = value;
        self
    }

    pub fn average(mut self, value: usize) -> Self {
        self.average = value;
        self
    }

    pub fn dt(mut self, value: f64) -> Self {
        self.dt = value;
        self
    }

    pub fn quality_factor(mut self, value: f64) -> Self {
        self.q = value;
        self
    }

    pub fn ground_capacitance(mut self, value: f64) -> Self {
        self.c0 = value;
        self
    }

    pub fn normal_resistance(mut self, value: f64) -> Self {
        self.r = value;
        self
    }

    pub fn gap_voltage(mut self, value: f64) -> Self {
        self.vg = value;
        self
    }

    pub fn noise_level(mut self, value: f64) -> Self {
        self.nl = value;
        self
    }

    pub fn drive_current(mut self, value: f64) -> Self {
        self.i = value;
        self
    }

    pub fn bias_current(mut self, value: f64) -> Self {
        self.ib = value;
        self
    }

    pub fn bias_voltage(mut self, value: f64) -> Self {
        self.vb = value;
        self
    }

    pub fn series_resistance(mut self, value: f64) -> Self {
        self.rt = value;
        self
    }

    pub fn shunt_resistance(mut self, value: f64) -> Self {
        self.rs = value;
        self
    }

    pub fn shunt_capacitance(mut self, value: f64) -> Self {
        self.cs = value;
        self
    }

    pub fn critical_current(mut self, init: VectorInit) -> Self {
        self.ic = init;
        self
    }

    pub fn phase(mut self, init: VectorInit) -> Self {
        self.phase = init;
        self
    }

    pub fn voltage(mut self, init: VectorInit) -> Self {
        self.voltage = init;
        self
    }

    pub fn quasiparticle_resistance(mut self, init: VectorInit) -> Self {
        self.rqp = init;
        self
    }

    /// Build the parameter set, filling vectors with the configured modes.
    ///
    /// Random fills draw from `rng`, so seeded construction is reproducible.
    pub fn build<R: Rng>(self, rng: &mut R) -> Result<Parameters> {
        if self.size < 2 {
            return Err(ModelError::DimensionMismatch(format!(
                "chain needs at least 2 sites, got {}",
                self.size
            )));
        }

        let ic = self.fill_vector("ic", &self.ic, false, rng)?;
        let phase = self.fill_vector("phase", &self.phase, true, rng)?;
        let voltage = self.fill_vector("voltage", &self.voltage, false, rng)?;
        let rqp = self.fill_vector("rqp", &self.rqp, false, rng)?;

        Ok(Parameters {
            step: 0,
            max_steps: self.max_steps,
            average: self.average,
            time_step: 0,
            size: self.size,
            dt: self.dt,
            q: self.q,
            c0: self.c0,
            r: self.r,
            vg: self.vg,
            nl: self.nl,
            i: self.i,
            ib: self.ib,
            vb: self.vb,
            rt: self.rt,
            rs: self.rs,
            cs: self.cs,
            ic,
            phase,
            voltage,
            rqp,
        })
    }

    fn fill_vector<R: Rng>(
        &self,
        name: &str,
        init: &VectorInit,
        is_phase: bool,
        rng: &mut R,
    ) -> Result<Vec<f64>> {
        match init {
            VectorInit::Constant(value) => Ok(vec![*value; self.size]),

            VectorInit::Values(values) => {
                if values.len() != self.size {
                    return Err(ModelError::DimensionMismatch(format!(
                        "{} needs {} values, got {}",
                        name,
                        self.size,
                        values.len()
                    )));
                }
                Ok(values.clone())
            }

            VectorInit::StationaryPhase => {
                if !is_phase {
                    return Err(ModelError::NotImplemented(format!(
                        "stationary-phase fill is only defined for the phase, not {name}"
                    )));
                }
                let arcsin = self.i.min(1.0).asin();
                Ok((0..self.size)
                    .map(|k| (self.size - k) as f64 * arcsin)
                    .collect())
            }

            VectorInit::Uniform { min, max } => {
                Ok((0..self.size).map(|_| rng.gen_range(*min..=*max)).collect())
            }
        }
    }
}
