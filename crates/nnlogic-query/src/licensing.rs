//! Licensing: a state may be evaluated only when it is both structurally
//! clear (`ν_raw ≤ θ_eval_raw`) and not over-penalized (`ν ≤ θ_eval`).

use std::fmt;

use nnlogic_core::{ContextId, Penalties, Policy, State, TargetId};
use serde::{Deserialize, Serialize};

/// Why a state is or is not licensed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    Licensed,
    /// ν_raw is low enough but penalties push ν over the line.
    ClearButPenalized,
    StructurallyVague,
}

impl Reason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Licensed => "licensed",
            Self::ClearButPenalized => "clear_but_penalized",
            Self::StructurallyVague => "structurally_vague",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where ν falls relative to the null/defined thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NullStatus {
    NotNull,
    Indeterminate,
    Null,
}

impl NullStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotNull => "not_null",
            Self::Indeterminate => "indeterminate",
            Self::Null => "null",
        }
    }
}

impl fmt::Display for NullStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryOutcome {
    Licensed,
    NotLicensed,
}

/// Everything a caller needs to act on (or refine) one state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub target: TargetId,
    pub context: ContextId,
    pub result: QueryOutcome,
    pub licensed: bool,
    pub reason: Reason,
    pub status: NullStatus,
    pub nu: f64,
    pub nu_raw: f64,
    pub penalties: Penalties,
}

pub fn is_licensed(state: &State, policy: &Policy) -> bool {
    state.nu_raw <= policy.theta_eval_raw && state.nu_with_mode(policy.penalty_mode) <= policy.theta_eval
}

pub fn determine_reason(state: &State, policy: &Policy) -> Reason {
    if is_licensed(state, policy) {
        Reason::Licensed
    } else if state.nu_raw <= policy.theta_eval_raw {
        Reason::ClearButPenalized
    } else {
        Reason::StructurallyVague
    }
}

pub fn null_status(state: &State, policy: &Policy) -> NullStatus {
    let nu = state.nu_with_mode(policy.penalty_mode);
    if nu <= policy.theta_defined {
        NullStatus::NotNull
    } else if nu >= policy.theta_null {
        NullStatus::Null
    } else {
        NullStatus::Indeterminate
    }
}

pub fn query(state: &State, policy: &Policy) -> QueryResponse {
    let reason = determine_reason(state, policy);
    let licensed = reason == Reason::Licensed;
    QueryResponse {
        target: state.target_id.clone(),
        context: state.context_id.clone(),
        result: if licensed {
            QueryOutcome::Licensed
        } else {
            QueryOutcome::NotLicensed
        },
        licensed,
        reason,
        status: null_status(state, policy),
        nu: state.nu_with_mode(policy.penalty_mode),
        nu_raw: state.nu_raw,
        penalties: state.nu_penalties.clone(),
    }
}
