//! Audit records emitted once per operator invocation.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ids::{ContextId, TargetId};
use crate::penalty::{Penalties, PenaltyMode};
use crate::state::State;

/// The eight state transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatorKind {
    Incorporate,
    NegDefine,
    Merge,
    Split,
    Conflict,
    Recontextualize,
    Decay,
    PenaltyDecay,
}

impl OperatorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Incorporate => "incorporate",
            Self::NegDefine => "neg_define",
            Self::Merge => "merge",
            Self::Split => "split",
            Self::Conflict => "conflict",
            Self::Recontextualize => "recontextualize",
            Self::Decay => "decay",
            Self::PenaltyDecay => "penalty_decay",
        }
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable before/after snapshot of one operator application.
///
/// Records are returned to the caller and never owned by a state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefinementRecord {
    pub target_id: TargetId,
    pub context_id: ContextId,
    pub operator: OperatorKind,
    pub nu_before: f64,
    pub nu_after: f64,
    pub nu_raw_before: f64,
    pub nu_raw_after: f64,
    pub penalties_before: Penalties,
    pub penalties_after: Penalties,
    pub timestamp: f64,
    #[serde(default)]
    pub details: BTreeMap<String, serde_json::Value>,
}

impl RefinementRecord {
    /// Snapshot the transition `before → after`. Target and context are
    /// taken from `after`; ν is computed under `mode`.
    pub fn between(
        before: &State,
        after: &State,
        operator: OperatorKind,
        timestamp: f64,
        mode: PenaltyMode,
    ) -> Self {
        Self {
            target_id: after.target_id.clone(),
            context_id: after.context_id.clone(),
            operator,
            nu_before: before.nu_with_mode(mode),
            nu_after: after.nu_with_mode(mode),
            nu_raw_before: before.nu_raw,
            nu_raw_after: after.nu_raw,
            penalties_before: before.nu_penalties.clone(),
            penalties_after: after.nu_penalties.clone(),
            timestamp,
            details: BTreeMap::new(),
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    pub fn detail(&self, key: &str) -> Option<&serde_json::Value> {
        self.details.get(key)
    }

    /// `nu_after - nu_before`; negative means the state became less vague.
    pub fn nu_delta(&self) -> f64 {
        self.nu_after - self.nu_before
    }
}
