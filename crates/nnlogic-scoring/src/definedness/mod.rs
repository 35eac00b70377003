//! Definedness: how pinned-down a target is.
//!
//! ```text
//! Def = clamp(w_sem · Def_sem + w_ep · Def_ep + w_proc · Def_proc)
//! ν_raw = 1 − Def
//! ```
//!
//! Each component is pluggable. `Def_sem` comes from a
//! [`SemanticDefinednessProvider`]; any component can be replaced outright
//! by an override closure for calibration or testing.

pub mod semantic;

use std::fmt;
use std::sync::Arc;

use nnlogic_core::constants::EVIDENCE_SATURATION_MASS;
use nnlogic_core::score::{clamp_unit, unit};
use nnlogic_core::{EvidenceKind, EvidenceSet, Policy, SemanticDefinednessProvider, TargetId};
use tracing::trace;

pub use semantic::{DefaultSemanticProvider, SubScoreProvider};

/// Replacement for the whole `Def_sem` computation.
pub type DefSemFn = Arc<dyn Fn(&TargetId, &EvidenceSet, &[String]) -> f64 + Send + Sync>;
/// Replacement for the whole `Def_ep` computation.
pub type DefEpFn = Arc<dyn Fn(&TargetId, &EvidenceSet) -> f64 + Send + Sync>;
/// Replacement for the whole `Def_proc` computation.
pub type DefProcFn = Arc<dyn Fn(&TargetId, &EvidenceSet) -> f64 + Send + Sync>;

/// Optional per-component overrides. Unset components use the default
/// computation.
#[derive(Clone, Default)]
pub struct DefinednessOverrides {
    pub semantic: Option<DefSemFn>,
    pub epistemic: Option<DefEpFn>,
    pub procedural: Option<DefProcFn>,
}

impl DefinednessOverrides {
    pub fn none() -> Self {
        Self::default()
    }

    /// All three components pinned to constants.
    pub fn fixed(semantic: f64, epistemic: f64, procedural: f64) -> Self {
        Self::none()
            .with_semantic_value(semantic)
            .with_epistemic_value(epistemic)
            .with_procedural_value(procedural)
    }

    pub fn with_semantic<F>(mut self, f: F) -> Self
    where
        F: Fn(&TargetId, &EvidenceSet, &[String]) -> f64 + Send + Sync + 'static,
    {
        self.semantic = Some(Arc::new(f));
        self
    }

    pub fn with_epistemic<F>(mut self, f: F) -> Self
    where
        F: Fn(&TargetId, &EvidenceSet) -> f64 + Send + Sync + 'static,
    {
        self.epistemic = Some(Arc::new(f));
        self
    }

    pub fn with_procedural<F>(mut self, f: F) -> Self
    where
        F: Fn(&TargetId, &EvidenceSet) -> f64 + Send + Sync + 'static,
    {
        self.procedural = Some(Arc::new(f));
        self
    }

    pub fn with_semantic_value(self, value: f64) -> Self {
        self.with_semantic(move |_, _, _| value)
    }

    pub fn with_epistemic_value(self, value: f64) -> Self {
        self.with_epistemic(move |_, _| value)
    }

    pub fn with_procedural_value(self, value: f64) -> Self {
        self.with_procedural(move |_, _| value)
    }

    /// Components set here win; unset components fall back to `fallback`.
    pub fn layered_over(&self, fallback: &DefinednessOverrides) -> Self {
        Self {
            semantic: self.semantic.clone().or_else(|| fallback.semantic.clone()),
            epistemic: self.epistemic.clone().or_else(|| fallback.epistemic.clone()),
            procedural: self.procedural.clone().or_else(|| fallback.procedural.clone()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.semantic.is_none() && self.epistemic.is_none() && self.procedural.is_none()
    }
}

impl fmt::Debug for DefinednessOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefinednessOverrides")
            .field("semantic", &self.semantic.is_some())
            .field("epistemic", &self.epistemic.is_some())
            .field("procedural", &self.procedural.is_some())
            .finish()
    }
}

/// Component weights, normally taken from the policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefinednessWeights {
    pub semantic: f64,
    pub epistemic: f64,
    pub procedural: f64,
}

impl Default for DefinednessWeights {
    fn default() -> Self {
        Self::from(&Policy::default())
    }
}

impl From<&Policy> for DefinednessWeights {
    fn from(policy: &Policy) -> Self {
        Self {
            semantic: policy.w_sem,
            epistemic: policy.w_ep,
            procedural: policy.w_proc,
        }
    }
}

/// Each component alongside the combined score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefinednessBreakdown {
    pub def_sem: f64,
    pub def_ep: f64,
    pub def_proc: f64,
    pub def: f64,
    pub nu_raw: f64,
}

/// `Def_sem = clamp(mean(oc, 1 − amb, cc, bp))`, or the override's value.
pub fn def_sem(
    target: &TargetId,
    evidence: &EvidenceSet,
    constraints: &[String],
    provider: &dyn SemanticDefinednessProvider,
    override_fn: Option<&DefSemFn>,
) -> f64 {
    if let Some(f) = override_fn {
        return clamp_unit(f(target, evidence, constraints));
    }
    let oc = provider.ontology_coverage(target, evidence, constraints);
    let amb = provider.ambiguity_score(target, evidence, constraints);
    let cc = provider.constraint_coverage(target, evidence, constraints);
    let bp = provider.boundary_precision(target, evidence, constraints);
    unit("def_sem", (oc + (1.0 - amb) + cc + bp) / 4.0)
}

fn kind_mass(evidence: &EvidenceSet, kind: EvidenceKind) -> f64 {
    evidence.of_kind(kind).map(|e| e.weight()).sum()
}

/// Epistemic definedness: saturating mass of epistemic evidence.
pub fn def_ep(target: &TargetId, evidence: &EvidenceSet, override_fn: Option<&DefEpFn>) -> f64 {
    match override_fn {
        Some(f) => clamp_unit(f(target, evidence)),
        None => clamp_unit(kind_mass(evidence, EvidenceKind::Epistemic) / EVIDENCE_SATURATION_MASS),
    }
}

/// Procedural definedness: saturating mass of procedural evidence.
pub fn def_proc(target: &TargetId, evidence: &EvidenceSet, override_fn: Option<&DefProcFn>) -> f64 {
    match override_fn {
        Some(f) => clamp_unit(f(target, evidence)),
        None => clamp_unit(kind_mass(evidence, EvidenceKind::Procedural) / EVIDENCE_SATURATION_MASS),
    }
}

/// Combined definedness with its components.
pub fn definedness(
    target: &TargetId,
    evidence: &EvidenceSet,
    constraints: &[String],
    weights: DefinednessWeights,
    provider: &dyn SemanticDefinednessProvider,
    overrides: &DefinednessOverrides,
) -> DefinednessBreakdown {
    let ds = def_sem(target, evidence, constraints, provider, overrides.semantic.as_ref());
    let de = def_ep(target, evidence, overrides.epistemic.as_ref());
    let dp = def_proc(target, evidence, overrides.procedural.as_ref());

    let def = clamp_unit(weights.semantic * ds + weights.epistemic * de + weights.procedural * dp);
    let nu_raw = nu_raw_from_definedness(def);

    trace!(
        target_id = %target,
        def_sem = ds,
        def_ep = de,
        def_proc = dp,
        def,
        nu_raw,
        "definedness computed"
    );

    DefinednessBreakdown {
        def_sem: ds,
        def_ep: de,
        def_proc: dp,
        def,
        nu_raw,
    }
}

/// `ν_raw = clamp(1 − Def)`.
pub fn nu_raw_from_definedness(def: f64) -> f64 {
    clamp_unit(1.0 - def)
}
