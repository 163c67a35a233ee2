//! Phase-slip (winding-number) detection.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A topological phase-slip event: junction `location` changed its winding
/// number to `branch` during integrator step `time_step`. Immutable once
/// recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseSlipEvent {
    pub time_step: usize,
    pub location: usize,
    pub branch: i64,
}

/// Winding index for every junction, length `phase.len() - 1`.
///
/// Junction i: `floor(((phase[i+1] - phase[i]) + π) / (2π))` — the nearest
/// integer number of full 2π turns, with the decision boundary centered at
/// ±π.
pub fn branch_indices(phase: &[f64]) -> Vec<i64> {
    (0..phase.len() - 1)
        .map(|i| (((phase[i + 1] - phase[i]) + PI) / (2.0 * PI)).floor() as i64)
        .collect()
}
