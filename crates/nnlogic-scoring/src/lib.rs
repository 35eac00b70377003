//! # nnlogic-scoring
//!
//! Turns evidence into numbers: belief mass and conflict (aggregation),
//! multi-component definedness and raw vagueness, and role-based trust
//! rescaling (boundary transform). Pure functions over core types.

pub mod aggregate;
pub mod boundary;
pub mod definedness;

pub use aggregate::{aggregate, compute_conflict, AggregateResult};
pub use boundary::{boundary_transform, boundary_transform_evidence, trust_factor};
pub use definedness::{
    def_ep, def_proc, def_sem, definedness, nu_raw_from_definedness, DefEpFn, DefProcFn, DefSemFn,
    DefaultSemanticProvider, DefinednessBreakdown, DefinednessOverrides, DefinednessWeights,
    SubScoreProvider,
};
