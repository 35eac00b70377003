use crate::evidence::EvidenceSet;
use crate::ids::TargetId;

/// Source of the four semantic sub-scores behind `Def_sem`.
///
/// Each method returns a value in [0, 1]. Domain bindings implement this
/// to replace the count-based heuristic with real ontology knowledge.
pub trait SemanticDefinednessProvider: Send + Sync {
    /// How much of the target's ontology is pinned down.
    fn ontology_coverage(&self, target: &TargetId, evidence: &EvidenceSet, constraints: &[String]) -> f64;

    /// How ambiguous the target still is; higher is more ambiguous.
    fn ambiguity_score(&self, target: &TargetId, evidence: &EvidenceSet, constraints: &[String]) -> f64;

    /// How well the constraints cover the target.
    fn constraint_coverage(&self, target: &TargetId, evidence: &EvidenceSet, constraints: &[String]) -> f64;

    /// How sharp the target's boundary is.
    fn boundary_precision(&self, target: &TargetId, evidence: &EvidenceSet, constraints: &[String]) -> f64;
}
