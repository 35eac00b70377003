use std::fmt;

use nnlogic_core::{OperatorKind, PenaltySource, Policy, RefinementRecord, State};
use nnlogic_scoring::{aggregate, AggregateResult};
use tracing::{debug, debug_span, info};

use crate::env::OperatorEnv;

/// What [`apply_conflict`] did to the conflict penalty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictAction {
    /// Penalty set or refreshed; clear timer reset.
    Applied,
    /// Above threshold but inside the cooldown window; nothing changed.
    Cooldown,
    /// Conflict dropped below the clear threshold; decay timer started.
    ClearStarted,
    Unchanged,
}

impl ConflictAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::Cooldown => "cooldown",
            Self::ClearStarted => "clear_started",
            Self::Unchanged => "unchanged",
        }
    }
}

impl fmt::Display for ConflictAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `min(max_conflict_penalty, conflict · max_conflict_penalty)`.
pub fn conflict_penalty(conflict: f64, policy: &Policy) -> f64 {
    (conflict * policy.max_conflict_penalty).min(policy.max_conflict_penalty)
}

/// Re-aggregate the state's evidence and update the conflict penalty.
///
/// * conflict above `theta_conflict` and outside the cooldown: the penalty
///   is set, `conflict_last_applied` stamped, and any clear timer reset;
/// * above threshold inside the cooldown: no change;
/// * below `theta_conflict_clear` with a penalty and no running timer: the
///   clear timer starts.
///
/// Returns the aggregate used alongside the new state and record.
pub fn apply_conflict(state: &State, env: &OperatorEnv<'_>) -> (State, RefinementRecord, AggregateResult) {
    let _span = debug_span!("nnlogic.conflict", target_id = %state.target_id).entered();
    let now = env.now();
    let policy = env.policy();

    let agg = aggregate(
        &state.evidence,
        &state.target_id,
        &state.context_id,
        env.relevance(),
        now,
        policy.decay_rate,
    );

    let mut penalties = state.nu_penalties.clone();
    let mut metadata = state.metadata.touched(OperatorKind::Conflict, now);

    let action = if agg.conflict > policy.theta_conflict {
        let cooling = metadata
            .conflict_last_applied
            .is_some_and(|last| now - last < policy.conflict_cooldown);
        if cooling {
            ConflictAction::Cooldown
        } else {
            let penalty = conflict_penalty(agg.conflict, policy);
            penalties.insert(PenaltySource::Conflict, penalty);
            metadata.conflict_last_applied = Some(now);
            metadata.penalty_clear_start = None;
            info!(target_id = %state.target_id, conflict = agg.conflict, penalty, "conflict penalty applied");
            ConflictAction::Applied
        }
    } else if agg.conflict < policy.theta_conflict_clear
        && penalties.contains(PenaltySource::Conflict)
        && metadata.penalty_clear_start.is_none()
    {
        metadata.penalty_clear_start = Some(now);
        debug!(target_id = %state.target_id, conflict = agg.conflict, "conflict cleared, decay timer started");
        ConflictAction::ClearStarted
    } else {
        ConflictAction::Unchanged
    };

    let next = State {
        nu_penalties: penalties,
        metadata,
        ..state.clone()
    };

    debug!(
        conflict = agg.conflict,
        pos_mass = agg.pos_mass,
        neg_mass = agg.neg_mass,
        action = %action,
        "conflict evaluated"
    );

    let record = RefinementRecord::between(state, &next, OperatorKind::Conflict, now, policy.penalty_mode)
        .with_detail("conflict", agg.conflict)
        .with_detail("pos_mass", agg.pos_mass)
        .with_detail("neg_mass", agg.neg_mass)
        .with_detail("action", action.as_str());
    (next, record, agg)
}
