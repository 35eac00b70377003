use nnlogic_core::state::merge_constraints;
use nnlogic_core::{OperatorKind, RefinementRecord, State};
use tracing::{debug, debug_span};

use crate::env::OperatorEnv;

/// Narrow the target with additional constraint clauses and recompute ν_raw.
///
/// Constraints already present are ignored, so applying the same list twice
/// leaves the constraint set and ν_raw unchanged the second time.
pub fn neg_define<I, S>(state: &State, constraints: I, env: &OperatorEnv<'_>) -> (State, RefinementRecord)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let _span = debug_span!("nnlogic.neg_define", target_id = %state.target_id).entered();
    let now = env.now();

    let merged = merge_constraints(&state.constraints, constraints);
    let added = merged.len() - state.constraints.len();
    let def = env.definedness(&state.target_id, &state.evidence, &merged);

    let next = State {
        nu_raw: def.nu_raw,
        constraints: merged,
        metadata: state.metadata.touched(OperatorKind::NegDefine, now),
        ..state.clone()
    };

    debug!(added, constraints = next.constraints.len(), nu_raw = next.nu_raw, "constraints applied");

    let record = RefinementRecord::between(state, &next, OperatorKind::NegDefine, now, env.policy().penalty_mode)
        .with_detail("added", added);
    (next, record)
}
