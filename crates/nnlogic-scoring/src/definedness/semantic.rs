//! Semantic sub-score providers.

use std::fmt;
use std::sync::Arc;

use nnlogic_core::score::clamp_unit;
use nnlogic_core::{EvidenceKind, EvidenceSet, SemanticDefinednessProvider, TargetId};

/// Count-based heuristic provider.
///
/// Each sub-score grows linearly with the number of definitional evidence
/// items and constraints, up to a cap. The rates are calibration choices,
/// exposed as fields so hosts can retune them.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultSemanticProvider {
    /// Ontology coverage per definitional item.
    pub coverage_per_definition: f64,
    pub coverage_definition_cap: f64,
    /// Ontology coverage bonus per constraint.
    pub coverage_per_constraint: f64,
    pub coverage_constraint_cap: f64,
    pub ambiguity_per_constraint: f64,
    pub constraint_coverage_rate: f64,
    pub precision_per_definition: f64,
    pub precision_per_constraint: f64,
}

impl Default for DefaultSemanticProvider {
    fn default() -> Self {
        Self {
            coverage_per_definition: 0.15,
            coverage_definition_cap: 1.0,
            coverage_per_constraint: 0.1,
            coverage_constraint_cap: 0.5,
            ambiguity_per_constraint: 0.12,
            constraint_coverage_rate: 0.1,
            precision_per_definition: 0.1,
            precision_per_constraint: 0.08,
        }
    }
}

fn definitional_count(evidence: &EvidenceSet) -> f64 {
    evidence.of_kind(EvidenceKind::Definitional).count() as f64
}

impl SemanticDefinednessProvider for DefaultSemanticProvider {
    fn ontology_coverage(&self, _target: &TargetId, evidence: &EvidenceSet, constraints: &[String]) -> f64 {
        let base = (definitional_count(evidence) * self.coverage_per_definition)
            .min(self.coverage_definition_cap);
        let bonus = (constraints.len() as f64 * self.coverage_per_constraint)
            .min(self.coverage_constraint_cap);
        clamp_unit(base + bonus)
    }

    // Scales with the constraint count; 0.0 when nothing is constrained.
    fn ambiguity_score(&self, _target: &TargetId, _evidence: &EvidenceSet, constraints: &[String]) -> f64 {
        if constraints.is_empty() {
            return 0.0;
        }
        clamp_unit(constraints.len() as f64 * self.ambiguity_per_constraint)
    }

    fn constraint_coverage(&self, _target: &TargetId, _evidence: &EvidenceSet, constraints: &[String]) -> f64 {
        if constraints.is_empty() {
            return 0.0;
        }
        clamp_unit(constraints.len() as f64 * self.constraint_coverage_rate)
    }

    fn boundary_precision(&self, _target: &TargetId, evidence: &EvidenceSet, constraints: &[String]) -> f64 {
        let defs = definitional_count(evidence);
        if defs == 0.0 && constraints.is_empty() {
            return 0.0;
        }
        clamp_unit(defs * self.precision_per_definition + constraints.len() as f64 * self.precision_per_constraint)
    }
}

type SubScoreFn = Arc<dyn Fn(&TargetId, &EvidenceSet, &[String]) -> f64 + Send + Sync>;

/// Wraps a provider and replaces individual sub-scores with closures.
///
/// Sub-scores without a replacement are delegated to the inner provider.
#[derive(Clone)]
pub struct SubScoreProvider<P> {
    inner: P,
    ontology_coverage: Option<SubScoreFn>,
    ambiguity_score: Option<SubScoreFn>,
    constraint_coverage: Option<SubScoreFn>,
    boundary_precision: Option<SubScoreFn>,
}

impl<P: SemanticDefinednessProvider> SubScoreProvider<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            ontology_coverage: None,
            ambiguity_score: None,
            constraint_coverage: None,
            boundary_precision: None,
        }
    }

    pub fn with_ontology_coverage<F>(mut self, f: F) -> Self
    where
        F: Fn(&TargetId, &EvidenceSet, &[String]) -> f64 + Send + Sync + 'static,
    {
        self.ontology_coverage = Some(Arc::new(f));
        self
    }

    pub fn with_ambiguity_score<F>(mut self, f: F) -> Self
    where
        F: Fn(&TargetId, &EvidenceSet, &[String]) -> f64 + Send + Sync + 'static,
    {
        self.ambiguity_score = Some(Arc::new(f));
        self
    }

    pub fn with_constraint_coverage<F>(mut self, f: F) -> Self
    where
        F: Fn(&TargetId, &EvidenceSet, &[String]) -> f64 + Send + Sync + 'static,
    {
        self.constraint_coverage = Some(Arc::new(f));
        self
    }

    pub fn with_boundary_precision<F>(mut self, f: F) -> Self
    where
        F: Fn(&TargetId, &EvidenceSet, &[String]) -> f64 + Send + Sync + 'static,
    {
        self.boundary_precision = Some(Arc::new(f));
        self
    }
}

impl<P: SemanticDefinednessProvider> SemanticDefinednessProvider for SubScoreProvider<P> {
    fn ontology_coverage(&self, target: &TargetId, evidence: &EvidenceSet, constraints: &[String]) -> f64 {
        match &self.ontology_coverage {
            Some(f) => f(target, evidence, constraints),
            None => self.inner.ontology_coverage(target, evidence, constraints),
        }
    }

    fn ambiguity_score(&self, target: &TargetId, evidence: &EvidenceSet, constraints: &[String]) -> f64 {
        match &self.ambiguity_score {
            Some(f) => f(target, evidence, constraints),
            None => self.inner.ambiguity_score(target, evidence, constraints),
        }
    }

    fn constraint_coverage(&self, target: &TargetId, evidence: &EvidenceSet, constraints: &[String]) -> f64 {
        match &self.constraint_coverage {
            Some(f) => f(target, evidence, constraints),
            None => self.inner.constraint_coverage(target, evidence, constraints),
        }
    }

    fn boundary_precision(&self, target: &TargetId, evidence: &EvidenceSet, constraints: &[String]) -> f64 {
        match &self.boundary_precision {
            Some(f) => f(target, evidence, constraints),
            None => self.inner.boundary_precision(target, evidence, constraints),
        }
    }
}

impl<P: fmt::Debug> fmt::Debug for SubScoreProvider<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubScoreProvider")
            .field("inner", &self.inner)
            .field("ontology_coverage", &self.ontology_coverage.is_some())
            .field("ambiguity_score", &self.ambiguity_score.is_some())
            .field("constraint_coverage", &self.constraint_coverage.is_some())
            .field("boundary_precision", &self.boundary_precision.is_some())
            .finish()
    }
}
