//! # nnlogic-query
//!
//! Decides whether a state may be evaluated for truth, and why not when it
//! may not. Also answers decision queries that pick among options once the
//! underlying target is licensed.

pub mod decision;
pub mod licensing;

pub use decision::DecisionQuery;
pub use licensing::{
    determine_reason, is_licensed, null_status, query, NullStatus, QueryOutcome, QueryResponse, Reason,
};
