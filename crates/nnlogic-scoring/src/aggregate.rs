//! Belief mass and conflict over an evidence set.

use nnlogic_core::constants::EVIDENCE_SATURATION_MASS;
use nnlogic_core::score::unit;
use nnlogic_core::{ContextId, EvidenceSet, Relevance, TargetId};

/// Positive/negative mass, their disagreement, and the epistemic
/// definedness implied by the total mass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AggregateResult {
    pub pos_mass: f64,
    pub neg_mass: f64,
    /// `2·min(pos, neg) / (pos + neg)`, 0.0 when there is no mass.
    pub conflict: f64,
    pub def_ep: f64,
}

impl AggregateResult {
    pub fn total_mass(&self) -> f64 {
        self.pos_mass + self.neg_mass
    }
}

/// Symmetric disagreement index: 1.0 at perfect balance, 0.0 when either
/// side is empty.
pub fn compute_conflict(pos_mass: f64, neg_mass: f64) -> f64 {
    let total = pos_mass + neg_mass;
    if total == 0.0 {
        return 0.0;
    }
    unit("conflict", 2.0 * pos_mass.min(neg_mass) / total)
}

/// Aggregate `evidence` for `(target, context)` as seen at `now`.
///
/// Items with relevance ≤ 0 are skipped. Each remaining item contributes
/// `|valence| · trust · relevance · exp(-decay_rate · age)` to the side
/// matching the sign of its valence. Zero valence counts as positive.
pub fn aggregate(
    evidence: &EvidenceSet,
    target: &TargetId,
    context: &ContextId,
    relevance: &Relevance,
    now: f64,
    decay_rate: f64,
) -> AggregateResult {
    let mut pos_mass = 0.0;
    let mut neg_mass = 0.0;

    for e in evidence {
        let r = relevance.score(e, target, context);
        if r <= 0.0 {
            continue;
        }

        let age = (now - e.time).max(0.0);
        let decay = if decay_rate > 0.0 {
            (-decay_rate * age).exp()
        } else {
            1.0
        };

        let weighted = e.weight() * r * decay;
        if e.is_supporting() {
            pos_mass += weighted;
        } else {
            neg_mass += weighted;
        }
    }

    let total_weight = pos_mass + neg_mass;
    let def_ep = if total_weight > 0.0 {
        (total_weight / EVIDENCE_SATURATION_MASS).min(1.0)
    } else {
        0.0
    };

    AggregateResult {
        pos_mass,
        neg_mass,
        conflict: compute_conflict(pos_mass, neg_mass),
        def_ep,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_reference_points() {
        assert!((compute_conflict(0.3, 0.7) - 0.6).abs() < 1e-12);
        assert_eq!(compute_conflict(1.0, 1.0), 1.0);
        assert_eq!(compute_conflict(1.0, 0.0), 0.0);
        assert_eq!(compute_conflict(0.0, 0.0), 0.0);
    }
}
