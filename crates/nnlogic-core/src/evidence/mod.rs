//! Atomic evidence items and ordered evidence sets.

pub mod dedup;
pub mod identity;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::defaults::DEFAULT_TIME_BUCKET_GRANULARITY_SECS;
use crate::config::Policy;
use crate::ids::{AgentId, EvidenceId};

pub use dedup::{add_evidence, partition_by_kind, should_add, DedupMode};
pub use identity::{compute_evidence_id, time_bucket};

/// What a piece of evidence speaks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceKind {
    /// Supports or opposes the claim itself.
    Epistemic,
    /// Narrows what the target means.
    Definitional,
    /// Specifies how the claim would be checked.
    Procedural,
}

impl EvidenceKind {
    pub const ALL: [EvidenceKind; 3] = [
        EvidenceKind::Epistemic,
        EvidenceKind::Definitional,
        EvidenceKind::Procedural,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Epistemic => "epistemic",
            Self::Definitional => "definitional",
            Self::Procedural => "procedural",
        }
    }
}

impl fmt::Display for EvidenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A time-stamped, trust-weighted, source-attributed claim.
///
/// Valence lies in [-1, 1] (positive supports, negative opposes) and trust
/// in [0, 1]; the constructors clamp both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    pub id: EvidenceId,
    pub kind: EvidenceKind,
    pub claim: String,
    pub valence: f64,
    pub src: AgentId,
    /// Observation time in seconds.
    pub time: f64,
    pub trust: f64,
    #[serde(default)]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl Evidence {
    /// Create evidence whose id is derived from its content at the default
    /// 60-second granularity.
    pub fn new(
        kind: EvidenceKind,
        claim: impl Into<String>,
        valence: f64,
        src: impl Into<AgentId>,
        time: f64,
    ) -> Self {
        Self::derived(kind, claim, valence, src, time, DEFAULT_TIME_BUCKET_GRANULARITY_SECS)
    }

    /// Create evidence whose id is bucketed by `policy.time_bucket_granularity`.
    pub fn for_policy(
        kind: EvidenceKind,
        claim: impl Into<String>,
        valence: f64,
        src: impl Into<AgentId>,
        time: f64,
        policy: &Policy,
    ) -> Self {
        Self::derived(kind, claim, valence, src, time, policy.time_bucket_granularity)
    }

    /// Create evidence whose id is derived at a custom time granularity.
    pub fn derived(
        kind: EvidenceKind,
        claim: impl Into<String>,
        valence: f64,
        src: impl Into<AgentId>,
        time: f64,
        granularity: f64,
    ) -> Self {
        let claim = claim.into();
        let src = src.into();
        let id = compute_evidence_id(kind, &claim, &src, time, granularity);
        Self::build(id, kind, claim, valence, src, time)
    }

    /// Create evidence with a caller-supplied id.
    pub fn with_id(
        id: impl Into<EvidenceId>,
        kind: EvidenceKind,
        claim: impl Into<String>,
        valence: f64,
        src: impl Into<AgentId>,
        time: f64,
    ) -> Self {
        Self::build(id.into(), kind, claim.into(), valence, src.into(), time)
    }

    fn build(
        id: EvidenceId,
        kind: EvidenceKind,
        claim: String,
        valence: f64,
        src: AgentId,
        time: f64,
    ) -> Self {
        Self {
            id,
            kind,
            claim,
            valence: valence.clamp(-1.0, 1.0),
            src,
            time,
            trust: 1.0,
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_trust(mut self, trust: f64) -> Self {
        self.trust = trust.clamp(0.0, 1.0);
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// `|valence| * trust`.
    pub fn weight(&self) -> f64 {
        self.valence.abs() * self.trust
    }

    /// Zero valence counts as supporting.
    pub fn is_supporting(&self) -> bool {
        self.valence >= 0.0
    }
}

/// Ordered sequence of evidence, owned by exactly one state.
///
/// Sets are values: every "mutation" returns a new set. Admission rules
/// (dedup by id, or by id and source) are applied by [`add_evidence`];
/// [`EvidenceSet::union`] keeps the first occurrence of each id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvidenceSet {
    items: Vec<Evidence>,
}

impl EvidenceSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a set from items in order, as given.
    pub fn from_items(items: impl IntoIterator<Item = Evidence>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    pub fn items(&self) -> &[Evidence] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Evidence> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains_id(&self, id: &EvidenceId) -> bool {
        self.items.iter().any(|e| &e.id == id)
    }

    pub fn get(&self, id: &EvidenceId) -> Option<&Evidence> {
        self.items.iter().find(|e| &e.id == id)
    }

    pub fn ids(&self) -> Vec<&EvidenceId> {
        self.items.iter().map(|e| &e.id).collect()
    }

    /// Items of a single kind, in set order.
    pub fn of_kind(&self, kind: EvidenceKind) -> impl Iterator<Item = &Evidence> + '_ {
        self.items.iter().filter(move |e| e.kind == kind)
    }

    /// A new set with `evidence` appended, regardless of admission rules.
    pub fn appended(&self, evidence: Evidence) -> Self {
        let mut items = self.items.clone();
        items.push(evidence);
        Self { items }
    }

    /// Self followed by the items of `other` whose ids are not yet present.
    /// Within each input the first occurrence of an id wins.
    pub fn union(&self, other: &EvidenceSet) -> Self {
        let mut seen = std::collections::HashSet::new();
        let items = self
            .items
            .iter()
            .chain(other.items.iter())
            .filter(|e| seen.insert(e.id.clone()))
            .cloned()
            .collect();
        Self { items }
    }
}

impl FromIterator<Evidence> for EvidenceSet {
    fn from_iter<I: IntoIterator<Item = Evidence>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}

impl<'a> IntoIterator for &'a EvidenceSet {
    type Item = &'a Evidence;
    type IntoIter = std::slice::Iter<'a, Evidence>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for EvidenceSet {
    type Item = Evidence;
    type IntoIter = std::vec::IntoIter<Evidence>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
