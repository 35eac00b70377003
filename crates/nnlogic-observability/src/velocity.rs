//! Refinement velocity: how fast ν moves from one step to the next, and a
//! population-level health summary built on it.

use std::collections::BTreeMap;

use nnlogic_core::{Policy, RefinementRecord, State, TargetId};
use nnlogic_query::{is_licensed, null_status, NullStatus};
use serde::{Deserialize, Serialize};

/// Steps whose |Δν| is below this count as stuck.
pub const STUCK_EPSILON: f64 = 0.01;

/// Successive differences of `nu_after`. Empty for fewer than two records.
pub fn rv(records: &[RefinementRecord]) -> Vec<f64> {
    records.windows(2).map(|w| w[1].nu_after - w[0].nu_after).collect()
}

/// Same as [`rv`] but over `nu_raw_after`.
pub fn rv_raw(records: &[RefinementRecord]) -> Vec<f64> {
    records.windows(2).map(|w| w[1].nu_raw_after - w[0].nu_raw_after).collect()
}

pub fn rv_mean(records: &[RefinementRecord]) -> f64 {
    mean(&rv(records))
}

/// Fraction of steps with |Δν| < `threshold`; 0.0 when there are no steps.
pub fn rv_stuck_rate(records: &[RefinementRecord], threshold: f64) -> f64 {
    let velocities = rv(records);
    if velocities.is_empty() {
        return 0.0;
    }
    let stuck = velocities.iter().filter(|v| v.abs() < threshold).count();
    stuck as f64 / velocities.len() as f64
}

/// Split a mixed trace into per-target sub-traces, preserving order.
pub fn rv_by_target(records: &[RefinementRecord]) -> BTreeMap<TargetId, Vec<RefinementRecord>> {
    let mut grouped: BTreeMap<TargetId, Vec<RefinementRecord>> = BTreeMap::new();
    for record in records {
        grouped.entry(record.target_id.clone()).or_default().push(record.clone());
    }
    grouped
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Snapshot of how a population of states is converging.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SystemHealth {
    pub total_targets: usize,
    pub licensed_count: usize,
    pub null_count: usize,
    pub mean_nu: f64,
    pub mean_nu_raw: f64,
    pub mean_velocity: f64,
    pub stuck_rate: f64,
}

impl SystemHealth {
    /// Summarize `states`, with velocities taken per target from `records`.
    ///
    /// `mean_velocity` and `stuck_rate` average over every step of every
    /// target's own trace, so interleaved targets do not bleed into each
    /// other.
    pub fn assess(states: &[State], records: &[RefinementRecord], policy: &Policy) -> Self {
        let nus: Vec<f64> = states.iter().map(|s| s.nu_with_mode(policy.penalty_mode)).collect();
        let raws: Vec<f64> = states.iter().map(|s| s.nu_raw).collect();

        let velocities: Vec<f64> = rv_by_target(records).values().flat_map(|trace| rv(trace)).collect();
        let stuck_rate = if velocities.is_empty() {
            0.0
        } else {
            velocities.iter().filter(|v| v.abs() < STUCK_EPSILON).count() as f64 / velocities.len() as f64
        };

        Self {
            total_targets: states.len(),
            licensed_count: states.iter().filter(|s| is_licensed(s, policy)).count(),
            null_count: states
                .iter()
                .filter(|s| null_status(s, policy) == NullStatus::Null)
                .count(),
            mean_nu: mean(&nus),
            mean_nu_raw: mean(&raws),
            mean_velocity: mean(&velocities),
            stuck_rate,
        }
    }

    pub fn licensed_fraction(&self) -> f64 {
        if self.total_targets == 0 {
            return 0.0;
        }
        self.licensed_count as f64 / self.total_targets as f64
    }

    pub fn null_fraction(&self) -> f64 {
        if self.total_targets == 0 {
            return 0.0;
        }
        self.null_count as f64 / self.total_targets as f64
    }

    /// Mean ν across the population. Lower is healthier.
    pub fn health_score(&self) -> f64 {
        self.mean_nu
    }
}
