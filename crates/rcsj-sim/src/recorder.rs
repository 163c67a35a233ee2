//! In-memory recorders consumed by whatever exports the run.
//!
//! The core never touches disk; it hands the export side an append-only
//! slip log and a per-schedule-step averaged trace, both serializable to
//! JSON.

use crate::slip::PhaseSlipEvent;
use rcsj_model::Parameters;
use serde::Serialize;

/// Append-only log of phase-slip events.
///
/// Recording can be disabled up front so long runs with millions of slips
/// don't accumulate events nobody will read.
#[derive(Debug, Clone)]
pub struct EventLog {
    enabled: bool,
    phase_slips: Vec<PhaseSlipEvent>,
}

impl EventLog {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            phase_slips: Vec::new(),
        }
    }

    /// Append an event (dropped when the log is disabled).
    pub fn record(&mut self, event: PhaseSlipEvent) {
        if self.enabled {
            self.phase_slips.push(event);
        }
    }

    /// All recorded events, in emission order.
    pub fn events(&self) -> &[PhaseSlipEvent] {
        &self.phase_slips
    }

    pub fn len(&self) -> usize {
        self.phase_slips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phase_slips.is_empty()
    }

    /// Serialize the log to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.phase_slips)
    }
}

/// Accumulates the per-step state snapshot the export side consumes:
/// first-site voltage, drive current, and elapsed time, averaged over the
/// inner iterations of each schedule step.
#[derive(Debug, Clone, Serialize)]
pub struct RunRecorder {
    voltage: Vec<f64>,
    bias_current: Vec<f64>,
    time: Vec<f64>,
}

impl RunRecorder {
    /// A recorder sized for `max_steps` schedule steps.
    pub fn new(max_steps: usize) -> Self {
        Self {
            voltage: vec![0.0; max_steps],
            bias_current: vec![0.0; max_steps],
            time: vec![0.0; max_steps],
        }
    }

    /// Accumulate the current snapshot into the slot for `params.step`.
    ///
    /// Called once per inner iteration; dividing by `params.average` here
    /// means the slot holds the mean once all iterations have run.
    pub fn record(&mut self, params: &Parameters) {
        let average = params.average as f64;
        self.voltage[params.step] += params.voltage[0] / average;
        self.bias_current[params.step] += params.i / average;
        self.time[params.step] += params.time() / average;
    }

    /// Averaged first-site voltage per schedule step.
    pub fn voltage(&self) -> &[f64] {
        &self.voltage
    }

    /// Averaged drive current per schedule step.
    pub fn bias_current(&self) -> &[f64] {
        &self.bias_current
    }

    /// Averaged elapsed time per schedule step.
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Serialize the trace to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rcsj_model::ParametersBuilder;

    #[test]
    fn test_disabled_log_drops_events() {
        let mut log = EventLog::new(false);
        log.record(PhaseSlipEvent {
            time_step: 1,
            location: 0,
            branch: 1,
        });
        assert!(log.is_empty());
    }

    #[test]
    fn test_log_preserves_order() {
        let mut log = EventLog::new(true);
        for t in 0..3 {
            log.record(PhaseSlipEvent {
                time_step: t,
                location: t,
                branch: t as i64,
            });
        }
        assert_eq!(log.len(), 3);
        assert_eq!(log.events()[2].time_step, 2);
        assert!(log.to_json().unwrap().contains("\"branch\""));
    }

    #[test]
    fn test_recorder_averages() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut p = ParametersBuilder::new(2)
            .max_steps(2)
            .average(2)
            .dt(0.5)
            .build(&mut rng)
            .unwrap();

        let mut rec = RunRecorder::new(p.max_steps);

        p.step = 0;
        p.voltage[0] = 1.0;
        p.i = 0.2;
        p.time_step = 1;
        rec.record(&p);

        p.voltage[0] = 3.0;
        p.i = 0.4;
        p.time_step = 2;
        rec.record(&p);

        assert_relative_eq!(rec.voltage()[0], 2.0);
        assert_relative_eq!(rec.bias_current()[0], 0.3);
        assert_relative_eq!(rec.time()[0], 0.75);
        assert_relative_eq!(rec.voltage()[1], 0.0);
    }
}
