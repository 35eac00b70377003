//! # nnlogic-core
//!
//! Foundation crate for the N/N-N vagueness calculus.
//! Defines identifiers, evidence, states, penalties, refinement records,
//! the injectable clock, policy/config, errors, and the scoring traits.
//! Every other crate in the workspace depends on this.

pub mod clock;
pub mod config;
pub mod constants;
pub mod context;
pub mod errors;
pub mod evidence;
pub mod ids;
pub mod penalty;
pub mod record;
pub mod score;
pub mod state;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use clock::{Clock, MockClock, SystemClock};
pub use config::{NnLogicConfig, ObservabilityConfig, Policy};
pub use context::{Context, Role, RoleMap};
pub use errors::{ConfigError, NnError, NnResult, TraceError};
pub use evidence::{DedupMode, Evidence, EvidenceKind, EvidenceSet};
pub use ids::{AgentId, ContextId, EvidenceId, TargetId};
pub use penalty::{compute_nu, Penalties, PenaltyMode, PenaltySource};
pub use record::{OperatorKind, RefinementRecord};
pub use state::{InformationState, Metadata, State};
pub use traits::{Relevance, SemanticDefinednessProvider};
