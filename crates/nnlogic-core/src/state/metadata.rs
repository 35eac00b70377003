use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::record::OperatorKind;

/// Provenance carried by every state.
///
/// Append-only except for the two penalty timers, which the conflict and
/// penalty-decay operators set and clear explicitly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub creation: f64,
    pub last_modified: f64,
    /// Operators applied, oldest first.
    pub history: Vec<OperatorKind>,
    /// Context moves as `"old->new"`.
    pub crossings: Vec<String>,
    /// When the conflict penalty was last (re)applied.
    pub conflict_last_applied: Option<f64>,
    /// When conflict fell below the clear threshold; gates conflict-penalty decay.
    pub penalty_clear_start: Option<f64>,
    pub tags: BTreeMap<String, serde_json::Value>,
}

impl Metadata {
    pub fn created_at(now: f64) -> Self {
        Self {
            creation: now,
            last_modified: now,
            ..Self::default()
        }
    }

    /// Copy with `operator` appended to history and `last_modified = now`.
    pub fn touched(&self, operator: OperatorKind, now: f64) -> Self {
        let mut next = self.clone();
        next.history.push(operator);
        next.last_modified = now;
        next
    }

    pub fn with_crossing(mut self, crossing: impl Into<String>) -> Self {
        self.crossings.push(crossing.into());
        self
    }

    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    pub fn last_operator(&self) -> Option<OperatorKind> {
        self.history.last().copied()
    }
}
