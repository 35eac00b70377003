use nnlogic_core::state::merge_constraints;
use nnlogic_core::{
    ContextId, EvidenceSet, Metadata, OperatorKind, Penalties, PenaltySource, RefinementRecord, State, TargetId,
};
use nnlogic_scoring::aggregate;
use serde_json::Value;
use tracing::{debug, debug_span, info};

use crate::conflict::conflict_penalty;
use crate::env::OperatorEnv;

/// Fuse `states` into a fresh state at `(target, context)`.
///
/// Evidence is unioned by id and constraints are merged, both in input
/// order. If the union's conflict exceeds `theta_conflict` the result
/// carries a `MergeRupture` penalty. Penalties and history of the inputs
/// are not inherited.
///
/// The record's "before" side is a default state at the merge target.
pub fn merge(
    states: &[State],
    target: impl Into<TargetId>,
    context: impl Into<ContextId>,
    env: &OperatorEnv<'_>,
) -> (State, RefinementRecord) {
    let target = target.into();
    let context = context.into();
    let _span = debug_span!("nnlogic.merge", target_id = %target, sources = states.len()).entered();
    let now = env.now();
    let policy = env.policy();

    let evidence = states
        .iter()
        .fold(EvidenceSet::empty(), |acc, s| acc.union(&s.evidence));
    let constraints = states
        .iter()
        .fold(Vec::new(), |acc, s| merge_constraints(&acc, s.constraints.iter().cloned()));

    let agg = aggregate(&evidence, &target, &context, env.relevance(), now, policy.decay_rate);
    let def = env.definedness(&target, &evidence, &constraints);

    let mut penalties = Penalties::new();
    if agg.conflict > policy.theta_conflict {
        let penalty = conflict_penalty(agg.conflict, policy);
        penalties.insert(PenaltySource::MergeRupture, penalty);
        info!(target_id = %target, conflict = agg.conflict, penalty, "merge ruptured");
    }

    let sources: Vec<Value> = states.iter().map(|s| Value::from(s.target_id.as_str())).collect();
    let mut metadata = Metadata::created_at(now).with_tag("merged_from", sources.clone());
    metadata.history.push(OperatorKind::Merge);

    let before = State::initial(target.clone(), context.clone(), now);
    let next = State {
        target_id: target,
        context_id: context,
        nu_raw: def.nu_raw,
        nu_penalties: penalties,
        evidence,
        constraints,
        metadata,
    };

    debug!(
        evidence = next.evidence.len(),
        constraints = next.constraints.len(),
        conflict = agg.conflict,
        nu_raw = next.nu_raw,
        "states merged"
    );

    let record = RefinementRecord::between(&before, &next, OperatorKind::Merge, now, policy.penalty_mode)
        .with_detail("conflict", agg.conflict)
        .with_detail("sources", sources);
    (next, record)
}
