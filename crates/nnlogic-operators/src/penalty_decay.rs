use nnlogic_core::{OperatorKind, PenaltySource, RefinementRecord, State};
use tracing::{debug, debug_span, info};

use crate::env::OperatorEnv;

/// Decay penalties by `penalty_decay_factor`.
///
/// The `Conflict` penalty only decays once its clear timer has run for
/// `penalty_clear_window`; every other source decays on each call. A
/// penalty that falls below `penalty_cleanup_threshold` is removed, and
/// removing the conflict penalty also clears its timer.
///
/// With decay disabled the state is returned unchanged, history included.
pub fn penalty_decay(state: &State, env: &OperatorEnv<'_>) -> (State, RefinementRecord) {
    let _span = debug_span!("nnlogic.penalty_decay", target_id = %state.target_id).entered();
    let now = env.now();
    let policy = env.policy();

    if !policy.penalty_decay_enabled {
        debug!("penalty decay disabled");
        let record = RefinementRecord::between(state, state, OperatorKind::PenaltyDecay, now, policy.penalty_mode)
            .with_detail("enabled", false);
        return (state.clone(), record);
    }

    let mut penalties = state.nu_penalties.clone();
    let mut metadata = state.metadata.touched(OperatorKind::PenaltyDecay, now);
    let mut removed = Vec::new();

    for (source, value) in state.nu_penalties.iter() {
        match source {
            PenaltySource::Conflict => {
                let window_elapsed = metadata
                    .penalty_clear_start
                    .is_some_and(|start| now - start >= policy.penalty_clear_window);
                if !window_elapsed {
                    continue;
                }
                let decayed = value * policy.penalty_decay_factor;
                if decayed < policy.penalty_cleanup_threshold {
                    penalties.remove(source);
                    metadata.penalty_clear_start = None;
                    removed.push(source);
                } else {
                    penalties.insert(source, decayed);
                }
            }
            PenaltySource::ScopeExpansion
            | PenaltySource::MergeRupture
            | PenaltySource::CategoryError
            | PenaltySource::Manual => {
                let decayed = value * policy.penalty_decay_factor;
                if decayed < policy.penalty_cleanup_threshold {
                    penalties.remove(source);
                    removed.push(source);
                } else {
                    penalties.insert(source, decayed);
                }
            }
        }
    }

    for source in &removed {
        info!(target_id = %state.target_id, source = %source, "penalty decayed away");
    }

    let next = State {
        nu_penalties: penalties,
        metadata,
        ..state.clone()
    };

    debug!(remaining = next.nu_penalties.len(), removed = removed.len(), "penalties decayed");

    let removed: Vec<&str> = removed.iter().map(|s| s.as_str()).collect();
    let record = RefinementRecord::between(state, &next, OperatorKind::PenaltyDecay, now, policy.penalty_mode)
        .with_detail("enabled", true)
        .with_detail("removed", removed);
    (next, record)
}
