//! Per-(target, context) state and the information state Σ.

pub mod information;
pub mod metadata;

use serde::{Deserialize, Serialize};

use crate::evidence::EvidenceSet;
use crate::ids::{ContextId, TargetId};
use crate::penalty::{compute_nu, Penalties, PenaltyMode, PenaltySource};

pub use information::{InformationState, StateKey};
pub use metadata::Metadata;

/// The central record for one (target, context) pair.
///
/// States are values. Operators never mutate their input; they return a
/// new state. Total ν is derived from `nu_raw` and `nu_penalties` on
/// every read and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub target_id: TargetId,
    pub context_id: ContextId,
    /// Structural vagueness, `1 - Def`.
    pub nu_raw: f64,
    pub nu_penalties: Penalties,
    pub evidence: EvidenceSet,
    /// Definitional narrowing clauses, ordered and duplicate-free.
    pub constraints: Vec<String>,
    pub metadata: Metadata,
}

impl State {
    /// Fresh state: maximal vagueness, nothing known, created at `now`.
    pub fn initial(target_id: impl Into<TargetId>, context_id: impl Into<ContextId>, now: f64) -> Self {
        Self {
            target_id: target_id.into(),
            context_id: context_id.into(),
            nu_raw: 1.0,
            nu_penalties: Penalties::new(),
            evidence: EvidenceSet::empty(),
            constraints: Vec::new(),
            metadata: Metadata::created_at(now),
        }
    }

    /// Total ν under max-aggregation.
    pub fn nu(&self) -> f64 {
        self.nu_with_mode(PenaltyMode::Max)
    }

    pub fn nu_with_mode(&self, mode: PenaltyMode) -> f64 {
        compute_nu(self.nu_raw, &self.nu_penalties, mode)
    }

    pub fn penalty(&self, source: PenaltySource) -> Option<f64> {
        self.nu_penalties.get(source)
    }

    pub fn key(&self) -> StateKey {
        (self.target_id.clone(), self.context_id.clone())
    }

    pub fn with_nu_raw(mut self, nu_raw: f64) -> Self {
        self.nu_raw = nu_raw.clamp(0.0, 1.0);
        self
    }

    pub fn with_penalty(mut self, source: PenaltySource, value: f64) -> Self {
        self.nu_penalties.insert(source, value);
        self
    }

    pub fn with_evidence(mut self, evidence: EvidenceSet) -> Self {
        self.evidence = evidence;
        self
    }

    pub fn with_constraints<I, S>(mut self, constraints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constraints = merge_constraints(&[], constraints);
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }
}

/// `existing` followed by each new constraint not already present, in order.
pub fn merge_constraints<I, S>(existing: &[String], additions: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut merged = existing.to_vec();
    for c in additions {
        let c = c.into();
        if !merged.contains(&c) {
            merged.push(c);
        }
    }
    merged
}
