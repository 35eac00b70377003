//! Error handling for nnlogic.
//! One error enum per subsystem, `thiserror` only.
//!
//! Operators are infallible by construction: scores clamp, dedup rejections
//! are no-ops, empty inputs yield `None`. Errors only arise at the edges,
//! when loading configuration or dumping a trace.

pub mod config_error;
pub mod trace_error;

pub use config_error::ConfigError;
pub use trace_error::TraceError;

/// Umbrella error for callers that touch more than one subsystem.
#[derive(Debug, thiserror::Error)]
pub enum NnError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("trace error: {0}")]
    Trace(#[from] TraceError),
}

pub type NnResult<T> = Result<T, NnError>;
