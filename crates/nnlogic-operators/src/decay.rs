use nnlogic_core::{OperatorKind, RefinementRecord, State};
use nnlogic_scoring::aggregate;
use tracing::{debug, debug_span};

use crate::env::OperatorEnv;

/// Recompute ν_raw as of the current time.
///
/// Evidence is left untouched; staleness is expressed only through the
/// time-decayed aggregate, which is reported in the record.
pub fn decay(state: &State, env: &OperatorEnv<'_>) -> (State, RefinementRecord) {
    let _span = debug_span!("nnlogic.decay", target_id = %state.target_id).entered();
    let now = env.now();
    let policy = env.policy();

    let decayed = aggregate(
        &state.evidence,
        &state.target_id,
        &state.context_id,
        env.relevance(),
        now,
        policy.decay_rate,
    );
    let def = env.definedness(&state.target_id, &state.evidence, &state.constraints);

    let next = State {
        nu_raw: def.nu_raw,
        metadata: state.metadata.touched(OperatorKind::Decay, now),
        ..state.clone()
    };

    debug!(
        pos_mass = decayed.pos_mass,
        neg_mass = decayed.neg_mass,
        nu_raw = next.nu_raw,
        "state decayed"
    );

    let record = RefinementRecord::between(state, &next, OperatorKind::Decay, now, policy.penalty_mode)
        .with_detail("pos_mass", decayed.pos_mass)
        .with_detail("neg_mass", decayed.neg_mass)
        .with_detail("def_ep", decayed.def_ep)
        .with_detail("decay_rate", policy.decay_rate);
    (next, record)
}
