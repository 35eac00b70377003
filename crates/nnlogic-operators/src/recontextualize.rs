use nnlogic_core::{ContextId, OperatorKind, RefinementRecord, State};
use tracing::{debug, debug_span};

use crate::env::OperatorEnv;

/// Move `state` into `new_context`, recomputing ν_raw there.
///
/// Evidence, constraints and penalties carry over unchanged; the move is
/// recorded as an `"old->new"` crossing.
pub fn recontextualize(
    state: &State,
    new_context: impl Into<ContextId>,
    env: &OperatorEnv<'_>,
) -> (State, RefinementRecord) {
    let new_context = new_context.into();
    let _span = debug_span!("nnlogic.recontextualize", target_id = %state.target_id).entered();
    let now = env.now();

    let def = env.definedness(&state.target_id, &state.evidence, &state.constraints);
    let crossing = format!("{}->{}", state.context_id, new_context);

    let next = State {
        context_id: new_context,
        nu_raw: def.nu_raw,
        metadata: state
            .metadata
            .touched(OperatorKind::Recontextualize, now)
            .with_crossing(crossing.clone()),
        ..state.clone()
    };

    debug!(crossing = %crossing, nu_raw = next.nu_raw, "state recontextualized");

    let record =
        RefinementRecord::between(state, &next, OperatorKind::Recontextualize, now, env.policy().penalty_mode)
            .with_detail("from", state.context_id.as_str())
            .with_detail("to", next.context_id.as_str());
    (next, record)
}
