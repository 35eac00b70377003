//! Span names, one per operator.

use nnlogic_core::{OperatorKind, TargetId};
use tracing::{debug_span, Span};

pub mod names {
    pub const INCORPORATE: &str = "nnlogic.incorporate";
    pub const NEG_DEFINE: &str = "nnlogic.neg_define";
    pub const MERGE: &str = "nnlogic.merge";
    pub const SPLIT: &str = "nnlogic.split";
    pub const CONFLICT: &str = "nnlogic.conflict";
    pub const RECONTEXTUALIZE: &str = "nnlogic.recontextualize";
    pub const DECAY: &str = "nnlogic.decay";
    pub const PENALTY_DECAY: &str = "nnlogic.penalty_decay";
}

pub fn span_name(operator: OperatorKind) -> &'static str {
    match operator {
        OperatorKind::Incorporate => names::INCORPORATE,
        OperatorKind::NegDefine => names::NEG_DEFINE,
        OperatorKind::Merge => names::MERGE,
        OperatorKind::Split => names::SPLIT,
        OperatorKind::Conflict => names::CONFLICT,
        OperatorKind::Recontextualize => names::RECONTEXTUALIZE,
        OperatorKind::Decay => names::DECAY,
        OperatorKind::PenaltyDecay => names::PENALTY_DECAY,
    }
}

/// A debug-level span for one operator application, for hosts that drive
/// operators in a loop and want the same span names the operators use.
pub fn operator_span(operator: OperatorKind, target: &TargetId) -> Span {
    match operator {
        OperatorKind::Incorporate => debug_span!(names::INCORPORATE, target_id = %target),
        OperatorKind::NegDefine => debug_span!(names::NEG_DEFINE, target_id = %target),
        OperatorKind::Merge => debug_span!(names::MERGE, target_id = %target),
        OperatorKind::Split => debug_span!(names::SPLIT, target_id = %target),
        OperatorKind::Conflict => debug_span!(names::CONFLICT, target_id = %target),
        OperatorKind::Recontextualize => debug_span!(names::RECONTEXTUALIZE, target_id = %target),
        OperatorKind::Decay => debug_span!(names::DECAY, target_id = %target),
        OperatorKind::PenaltyDecay => debug_span!(names::PENALTY_DECAY, target_id = %target),
    }
}
