use std::collections::BTreeMap;

use nnlogic_core::{Metadata, OperatorKind, Penalties, Relevance, RefinementRecord, State, TargetId};
use nnlogic_scoring::{aggregate, DefinednessOverrides};
use tracing::{debug, debug_span};

use crate::env::OperatorEnv;

/// Per-child relevance functions and definedness overrides for [`split`].
///
/// Children without an entry use the environment's relevance function and
/// overrides.
#[derive(Debug, Clone, Default)]
pub struct SplitOptions {
    relevance: BTreeMap<TargetId, Relevance>,
    overrides: BTreeMap<TargetId, DefinednessOverrides>,
}

impl SplitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_relevance(mut self, child: impl Into<TargetId>, relevance: Relevance) -> Self {
        self.relevance.insert(child.into(), relevance);
        self
    }

    /// Overrides for one child. Unset components fall back to the
    /// environment's overrides.
    pub fn with_overrides(mut self, child: impl Into<TargetId>, overrides: DefinednessOverrides) -> Self {
        self.overrides.insert(child.into(), overrides);
        self
    }

    pub fn relevance_for(&self, child: &TargetId) -> Option<&Relevance> {
        self.relevance.get(child)
    }
}

/// Split `parent` into one fresh state per child id.
///
/// Every child receives a full copy of the parent's evidence and
/// constraints (not a partition), keeps the parent's context, and starts
/// with no penalties and a new history. Returns the children and one record
/// per child, in `children` order.
pub fn split(
    parent: &State,
    children: &[TargetId],
    options: &SplitOptions,
    env: &OperatorEnv<'_>,
) -> (Vec<State>, Vec<RefinementRecord>) {
    let _span = debug_span!("nnlogic.split", target_id = %parent.target_id, children = children.len()).entered();
    let now = env.now();
    let policy = env.policy();

    let mut states = Vec::with_capacity(children.len());
    let mut records = Vec::with_capacity(children.len());

    for child in children {
        let relevance_override = options.relevance.get(child);
        let relevance = relevance_override.unwrap_or(env.relevance());
        let overrides = match options.overrides.get(child) {
            Some(own) => own.layered_over(env.overrides()),
            None => env.overrides().clone(),
        };

        let agg = aggregate(&parent.evidence, child, &parent.context_id, relevance, now, policy.decay_rate);
        let def = env.definedness_with(child, &parent.evidence, &parent.constraints, &overrides);

        let mut metadata = Metadata::created_at(now)
            .with_tag("parent", parent.target_id.as_str())
            .with_tag("relevance_override", relevance_override.is_some());
        metadata.history.push(OperatorKind::Split);

        let state = State {
            target_id: child.clone(),
            context_id: parent.context_id.clone(),
            nu_raw: def.nu_raw,
            nu_penalties: Penalties::new(),
            evidence: parent.evidence.clone(),
            constraints: parent.constraints.clone(),
            metadata,
        };

        debug!(child = %child, nu_raw = state.nu_raw, conflict = agg.conflict, "child split off");

        let record = RefinementRecord::between(parent, &state, OperatorKind::Split, now, policy.penalty_mode)
            .with_detail("child_id", child.as_str())
            .with_detail("parent_id", parent.target_id.as_str())
            .with_detail("pos_mass", agg.pos_mass)
            .with_detail("neg_mass", agg.neg_mass)
            .with_detail("conflict", agg.conflict);
        states.push(state);
        records.push(record);
    }

    (states, records)
}
