//! Pluggable scoring seams.

pub mod relevance;
pub mod semantic_provider;

pub use relevance::Relevance;
pub use semantic_provider::SemanticDefinednessProvider;
