//! # nnlogic-operators
//!
//! The closed algebra of refinement operators. Each operator is a pure
//! function from input state(s) to new state(s) plus exactly one
//! [`RefinementRecord`](nnlogic_core::RefinementRecord) per output state.
//! Inputs are never mutated.
//!
//! All operators read policy, time, and scoring strategies from an
//! [`OperatorEnv`].

pub mod conflict;
pub mod decay;
pub mod env;
pub mod incorporate;
pub mod merge;
pub mod neg_define;
pub mod penalty_decay;
pub mod query_next;
pub mod recontextualize;
pub mod split;

pub use conflict::{apply_conflict, conflict_penalty, ConflictAction};
pub use decay::decay;
pub use env::OperatorEnv;
pub use incorporate::incorporate;
pub use merge::merge;
pub use neg_define::neg_define;
pub use penalty_decay::penalty_decay;
pub use query_next::query_next;
pub use recontextualize::recontextualize;
pub use split::{split, SplitOptions};
