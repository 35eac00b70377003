//! Additive vagueness penalties and the total-ν formula.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::score::clamp_unit;

/// Tagged reason for a penalty. Penalty maps are keyed by this enum, so a
/// state can never carry a penalty from an unknown source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PenaltySource {
    Conflict,
    ScopeExpansion,
    MergeRupture,
    CategoryError,
    Manual,
}

impl PenaltySource {
    pub const ALL: [PenaltySource; 5] = [
        PenaltySource::Conflict,
        PenaltySource::ScopeExpansion,
        PenaltySource::MergeRupture,
        PenaltySource::CategoryError,
        PenaltySource::Manual,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Conflict => "conflict",
            Self::ScopeExpansion => "scope_expansion",
            Self::MergeRupture => "merge_rupture",
            Self::CategoryError => "category_error",
            Self::Manual => "manual",
        }
    }
}

impl fmt::Display for PenaltySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How individual penalties combine into one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PenaltyMode {
    /// Largest single penalty.
    #[default]
    Max,
    /// Sum of penalties, capped at 1.0.
    Sum,
}

/// Penalty map: source → value in [0, 1].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Penalties(BTreeMap<PenaltySource, f64>);

impl Penalties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, source: PenaltySource) -> Option<f64> {
        self.0.get(&source).copied()
    }

    pub fn contains(&self, source: PenaltySource) -> bool {
        self.0.contains_key(&source)
    }

    /// Set a penalty, clamped to [0, 1]. Returns the previous value.
    pub fn insert(&mut self, source: PenaltySource, value: f64) -> Option<f64> {
        self.0.insert(source, clamp_unit(value))
    }

    pub fn remove(&mut self, source: PenaltySource) -> Option<f64> {
        self.0.remove(&source)
    }

    /// Builder form of [`Penalties::insert`].
    pub fn with(mut self, source: PenaltySource, value: f64) -> Self {
        self.insert(source, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn sources(&self) -> Vec<PenaltySource> {
        self.0.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PenaltySource, f64)> + '_ {
        self.0.iter().map(|(s, v)| (*s, *v))
    }

    /// Combined penalty under `mode`; 0.0 when empty.
    pub fn aggregate(&self, mode: PenaltyMode) -> f64 {
        if self.0.is_empty() {
            return 0.0;
        }
        match mode {
            PenaltyMode::Max => self.0.values().copied().fold(0.0, f64::max),
            PenaltyMode::Sum => self.0.values().sum::<f64>().min(1.0),
        }
    }
}

impl FromIterator<(PenaltySource, f64)> for Penalties {
    fn from_iter<I: IntoIterator<Item = (PenaltySource, f64)>>(iter: I) -> Self {
        let mut penalties = Penalties::new();
        for (source, value) in iter {
            penalties.insert(source, value);
        }
        penalties
    }
}

/// `ν = clamp(ν_raw + aggregate(penalties, mode), 0, 1)`.
///
/// ν is always recomputed from its parts and never stored. The sum may
/// legitimately exceed 1.0, so this clamps without asserting.
pub fn compute_nu(nu_raw: f64, penalties: &Penalties, mode: PenaltyMode) -> f64 {
    clamp_unit(nu_raw + penalties.aggregate(mode))
}
