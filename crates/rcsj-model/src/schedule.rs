//! Per-step parameter schedules.
//!
//! A schedule is a list of linear ramps applied to scalar parameters or to
//! selected sites of a per-site vector. `apply` is called once before each
//! integrator step; the resulting parameter set is a read-only snapshot for
//! exactly that step.

use crate::error::{ModelError, Result};
use crate::parameters::Parameters;
use serde::{Deserialize, Serialize};

/// Scalar parameters a schedule may ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScalarTarget {
    NoiseLevel,
    DriveCurrent,
    BiasCurrent,
    BiasVoltage,
}

/// Per-site vectors a schedule may ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VectorTarget {
    Phase,
    Voltage,
    CriticalCurrent,
    QuasiparticleResistance,
}

/// Which sites of a vector an update touches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SiteSelector {
    /// A single site.
    Index(usize),
    /// An explicit list of sites.
    Indices(Vec<usize>),
    /// An inclusive range of sites.
    Range(usize, usize),
}

impl SiteSelector {
    fn resolve(&self, size: usize) -> Result<Vec<usize>> {
        let indices = match self {
            SiteSelector::Index(i) => vec![*i],
            SiteSelector::Indices(list) => list.clone(),
            SiteSelector::Range(a, b) => (*a..=*b).collect(),
        };

        if let Some(&bad) = indices.iter().find(|&&i| i >= size) {
            return Err(ModelError::DimensionMismatch(format!(
                "site {bad} is outside a chain of size {size}"
            )));
        }
        Ok(indices)
    }
}

/// Linear interpolation from `from` at step `start` to `to` at step `end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ramp {
    pub start: usize,
    pub end: usize,
    pub from: f64,
    pub to: f64,
}

impl Ramp {
    /// Interpolated value when the ramp is active at `step`, else None.
    pub fn value_at(&self, step: usize) -> Option<f64> {
        if step < self.start || step > self.end {
            return None;
        }
        if self.end == self.start {
            return Some(self.to);
        }
        let fraction = (step - self.start) as f64 / (self.end - self.start) as f64;
        Some(self.from + (self.to - self.from) * fraction)
    }
}

/// One scheduled update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Update {
    Scalar {
        target: ScalarTarget,
        ramp: Ramp,
    },
    Vector {
        target: VectorTarget,
        selector: SiteSelector,
        ramp: Ramp,
    },
}

/// An ordered list of updates applied before every step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub updates: Vec<Update>,
}

impl Schedule {
    /// An empty schedule: parameters stay fixed apart from the step counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an update.
    pub fn push(&mut self, update: Update) {
        self.updates.push(update);
    }

    /// Advance the counters and apply every ramp active at `step`.
    pub fn apply(&self, params: &mut Parameters, step: usize) -> Result<()> {
        params.step = step;
        params.time_step += 1;

        for update in &self.updates {
            match update {
                Update::Scalar { target, ramp } => {
                    if let Some(value) = ramp.value_at(step) {
                        match target {
                            ScalarTarget::NoiseLevel => params.nl = value,
                            ScalarTarget::DriveCurrent => params.i = value,
                            ScalarTarget::BiasCurrent => params.ib = value,
                            ScalarTarget::BiasVoltage => params.vb = value,
                        }
                    }
                }
                Update::Vector {
                    target,
                    selector,
                    ramp,
                } => {
                    if let Some(value) = ramp.value_at(step) {
                        let indices = selector.resolve(params.size)?;
                        let vec = match target {
                            VectorTarget::Phase => &mut params.phase,
                            VectorTarget::Voltage => &mut params.voltage,
                            VectorTarget::CriticalCurrent => &mut params.ic,
                            VectorTarget::QuasiparticleResistance => &mut params.rqp,
                        };
                        for i in indices {
                            vec[i] = value;
                        }
                    }
                }
            }
        }

        Ok(())
    }
}
