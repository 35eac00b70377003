use nnlogic_core::evidence::add_evidence;
use nnlogic_core::{Evidence, EvidenceSet, OperatorKind, RefinementRecord, RoleMap, State};
use nnlogic_scoring::boundary_transform;
use tracing::{debug, debug_span};

use crate::env::OperatorEnv;

/// Add `new_evidence` to `state` and recompute ν_raw.
///
/// When `roles` is given, each item's trust is first rescaled by its
/// source's role. Items are admitted one by one under the policy's dedup
/// mode; rejected items are counted in the record but otherwise ignored.
pub fn incorporate(
    state: &State,
    new_evidence: impl IntoIterator<Item = Evidence>,
    roles: Option<&RoleMap>,
    env: &OperatorEnv<'_>,
) -> (State, RefinementRecord) {
    let _span = debug_span!("nnlogic.incorporate", target_id = %state.target_id).entered();
    let now = env.now();
    let policy = env.policy();

    let incoming: EvidenceSet = new_evidence.into_iter().collect();
    let incoming = match roles {
        Some(roles) if !roles.is_empty() => boundary_transform(&incoming, roles, policy),
        _ => incoming,
    };

    let offered = incoming.len();
    let mut evidence = state.evidence.clone();
    for e in incoming {
        evidence = add_evidence(&evidence, e, policy.dedup_mode);
    }
    let added = evidence.len() - state.evidence.len();

    let def = env.definedness(&state.target_id, &evidence, &state.constraints);

    let next = State {
        nu_raw: def.nu_raw,
        evidence,
        metadata: state.metadata.touched(OperatorKind::Incorporate, now),
        ..state.clone()
    };

    debug!(
        added,
        skipped = offered - added,
        nu_raw_before = state.nu_raw,
        nu_raw = next.nu_raw,
        "evidence incorporated"
    );

    let record = RefinementRecord::between(state, &next, OperatorKind::Incorporate, now, policy.penalty_mode)
        .with_detail("added", added)
        .with_detail("skipped", offered - added);
    (next, record)
}
