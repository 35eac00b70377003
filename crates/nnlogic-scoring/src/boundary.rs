//! Role-based trust rescaling.
//!
//! Evidence from outside the in-group is discounted according to the
//! policy. The transform never drops items; it only rescales trust.

use nnlogic_core::{Evidence, EvidenceSet, Policy, Role, RoleMap};

/// Trust multiplier for a source with `role`.
pub fn trust_factor(role: Role, policy: &Policy) -> f64 {
    match role {
        Role::I => 1.0,
        Role::NotI => policy.not_i_trust_factor,
        Role::Both => policy.coalition_factor,
        Role::Unknown => policy.unknown_trust_factor,
    }
}

pub fn boundary_transform_evidence(evidence: &Evidence, role: Role, policy: &Policy) -> Evidence {
    if role == Role::I {
        return evidence.clone();
    }
    let trust = evidence.trust * trust_factor(role, policy);
    evidence.clone().with_trust(trust)
}

/// Rescale every item by its source's role; unmapped sources are `Unknown`.
pub fn boundary_transform(evidence: &EvidenceSet, roles: &RoleMap, policy: &Policy) -> EvidenceSet {
    evidence
        .iter()
        .map(|e| {
            let role = roles.get(&e.src).copied().unwrap_or_default();
            boundary_transform_evidence(e, role, policy)
        })
        .collect()
}
