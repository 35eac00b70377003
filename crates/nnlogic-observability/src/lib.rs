//! # nnlogic-observability
//!
//! Refinement trace collection, velocity monitoring and system health over
//! a population of states, plus structured `tracing` setup with span names
//! for each operator.

pub mod trace;
pub mod tracing_setup;
pub mod velocity;

pub use trace::Tracer;
pub use tracing_setup::init_tracing;
pub use velocity::{rv, rv_by_target, rv_mean, rv_raw, rv_stuck_rate, SystemHealth, STUCK_EPSILON};
