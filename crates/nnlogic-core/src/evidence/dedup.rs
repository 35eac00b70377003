//! Admission rules for adding evidence to a set.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::evidence::{Evidence, EvidenceKind, EvidenceSet};

/// How duplicate evidence ids are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DedupMode {
    /// Reject any item whose id is already present.
    #[default]
    Strict,
    /// Reject only when the same id from the same source is present; the
    /// same id from another source counts as independent corroboration.
    Corroboration,
}

/// Whether `new` may be added to `existing` under `mode`.
pub fn should_add(new: &Evidence, existing: &EvidenceSet, mode: DedupMode) -> bool {
    match mode {
        DedupMode::Strict => !existing.contains_id(&new.id),
        DedupMode::Corroboration => !existing
            .iter()
            .any(|e| e.id == new.id && e.src == new.src),
    }
}

/// Append `evidence` if admitted; otherwise return the set unchanged.
/// Rejection is a silent, idempotent no-op.
pub fn add_evidence(set: &EvidenceSet, evidence: Evidence, mode: DedupMode) -> EvidenceSet {
    if should_add(&evidence, set, mode) {
        set.appended(evidence)
    } else {
        set.clone()
    }
}

/// Split a set by kind. Every kind gets an entry (possibly empty) and order
/// within a kind follows the set.
pub fn partition_by_kind(set: &EvidenceSet) -> BTreeMap<EvidenceKind, Vec<Evidence>> {
    let mut parts: BTreeMap<EvidenceKind, Vec<Evidence>> =
        EvidenceKind::ALL.iter().map(|k| (*k, Vec::new())).collect();
    for e in set {
        parts.entry(e.kind).or_default().push(e.clone());
    }
    parts
}
