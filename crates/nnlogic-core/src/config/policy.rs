//! Refinement policy: thresholds, weights, and decay/cooldown parameters.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::WEIGHT_SUM_TOLERANCE;
use crate::errors::ConfigError;
use crate::evidence::DedupMode;
use crate::penalty::PenaltyMode;
use crate::traits::Relevance;

/// Immutable configuration consumed by every operator.
///
/// A policy is never mutated in place; derive a new one with struct-update
/// syntax (`Policy { theta_conflict: 0.4, ..Policy::default() }`) and share
/// it by reference across as many states as needed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Policy {
    // Evaluation thresholds
    /// Licensing bound on total ν.
    pub theta_eval: f64,
    /// Licensing bound on ν_raw.
    pub theta_eval_raw: f64,
    /// ν at or above which a target is null.
    pub theta_null: f64,
    /// ν at or below which a target is defined.
    pub theta_defined: f64,
    /// Conflict above which a penalty applies.
    pub theta_conflict: f64,
    /// Conflict below which a penalty starts clearing.
    pub theta_conflict_clear: f64,
    /// Minimum utility for a decision option to be actionable.
    pub theta_utility: f64,

    // Definedness weights
    pub w_sem: f64,
    pub w_ep: f64,
    pub w_proc: f64,

    // Conflict / penalty
    pub max_conflict_penalty: f64,
    /// Seconds during which a conflict penalty is not re-applied.
    pub conflict_cooldown: f64,
    pub penalty_mode: PenaltyMode,
    pub penalty_decay_enabled: bool,
    pub penalty_decay_factor: f64,
    /// Seconds after conflict clears before the conflict penalty decays.
    pub penalty_clear_window: f64,
    pub penalty_cleanup_threshold: f64,

    // Boundary transform
    pub not_i_trust_factor: f64,
    pub unknown_trust_factor: f64,
    pub coalition_factor: f64,

    // Dedup
    pub dedup_mode: DedupMode,
    pub time_bucket_granularity: f64,

    // Decay
    /// Per-second exponential decay rate for evidence mass.
    pub decay_rate: f64,
    /// Half-life in seconds. Informational unless set through
    /// [`Policy::with_decay_halflife`], which derives `decay_rate` from it.
    pub decay_halflife: f64,

    /// Default relevance function; not part of the serialized form.
    #[serde(skip)]
    pub relevance: Relevance,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            theta_eval: defaults::DEFAULT_THETA_EVAL,
            theta_eval_raw: defaults::DEFAULT_THETA_EVAL_RAW,
            theta_null: defaults::DEFAULT_THETA_NULL,
            theta_defined: defaults::DEFAULT_THETA_DEFINED,
            theta_conflict: defaults::DEFAULT_THETA_CONFLICT,
            theta_conflict_clear: defaults::DEFAULT_THETA_CONFLICT_CLEAR,
            theta_utility: defaults::DEFAULT_THETA_UTILITY,
            w_sem: defaults::DEFAULT_W_SEM,
            w_ep: defaults::DEFAULT_W_EP,
            w_proc: defaults::DEFAULT_W_PROC,
            max_conflict_penalty: defaults::DEFAULT_MAX_CONFLICT_PENALTY,
            conflict_cooldown: defaults::DEFAULT_CONFLICT_COOLDOWN_SECS,
            penalty_mode: PenaltyMode::default(),
            penalty_decay_enabled: defaults::DEFAULT_PENALTY_DECAY_ENABLED,
            penalty_decay_factor: defaults::DEFAULT_PENALTY_DECAY_FACTOR,
            penalty_clear_window: defaults::DEFAULT_PENALTY_CLEAR_WINDOW_SECS,
            penalty_cleanup_threshold: defaults::DEFAULT_PENALTY_CLEANUP_THRESHOLD,
            not_i_trust_factor: defaults::DEFAULT_NOT_I_TRUST_FACTOR,
            unknown_trust_factor: defaults::DEFAULT_UNKNOWN_TRUST_FACTOR,
            coalition_factor: defaults::DEFAULT_COALITION_FACTOR,
            dedup_mode: DedupMode::default(),
            time_bucket_granularity: defaults::DEFAULT_TIME_BUCKET_GRANULARITY_SECS,
            decay_rate: defaults::DEFAULT_DECAY_RATE,
            decay_halflife: defaults::DEFAULT_DECAY_HALFLIFE_SECS,
            relevance: Relevance::default(),
        }
    }
}

impl Policy {
    /// Copy of this policy with a different default relevance function.
    pub fn with_relevance(mut self, relevance: Relevance) -> Self {
        self.relevance = relevance;
        self
    }

    /// Copy of this policy whose evidence mass halves every `halflife`
    /// seconds. Non-positive or NaN half-lives leave the policy unchanged.
    pub fn with_decay_halflife(mut self, halflife: f64) -> Self {
        if halflife > 0.0 {
            self.decay_halflife = halflife;
            self.decay_rate = std::f64::consts::LN_2 / halflife;
        }
        self
    }

    pub fn weight_sum(&self) -> f64 {
        self.w_sem + self.w_ep + self.w_proc
    }

    /// Parse a policy from TOML and validate it. Missing keys take defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let policy: Policy = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            source_name: "<policy>".to_string(),
            message: e.to_string(),
        })?;
        policy.validate()?;
        Ok(policy)
    }

    /// Check every field against its documented range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let unit_fields = [
            ("theta_eval", self.theta_eval),
            ("theta_eval_raw", self.theta_eval_raw),
            ("theta_null", self.theta_null),
            ("theta_defined", self.theta_defined),
            ("theta_conflict", self.theta_conflict),
            ("theta_conflict_clear", self.theta_conflict_clear),
            ("theta_utility", self.theta_utility),
            ("max_conflict_penalty", self.max_conflict_penalty),
            ("penalty_decay_factor", self.penalty_decay_factor),
            ("penalty_cleanup_threshold", self.penalty_cleanup_threshold),
            ("not_i_trust_factor", self.not_i_trust_factor),
            ("unknown_trust_factor", self.unknown_trust_factor),
            ("coalition_factor", self.coalition_factor),
        ];
        for (field, value) in unit_fields {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::invalid(field, "must be between 0.0 and 1.0"));
            }
        }

        for (field, value) in [("w_sem", self.w_sem), ("w_ep", self.w_ep), ("w_proc", self.w_proc)] {
            if value.is_nan() || value < 0.0 {
                return Err(ConfigError::invalid(field, "must be non-negative"));
            }
        }
        let sum = self.weight_sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::invalid(
                "w_sem + w_ep + w_proc",
                format!("must sum to 1.0, got {sum:.3}"),
            ));
        }

        let non_negative = [
            ("conflict_cooldown", self.conflict_cooldown),
            ("penalty_clear_window", self.penalty_clear_window),
            ("decay_rate", self.decay_rate),
            ("decay_halflife", self.decay_halflife),
        ];
        for (field, value) in non_negative {
            if value.is_nan() || value < 0.0 {
                return Err(ConfigError::invalid(field, "must be non-negative"));
            }
        }
        if self.time_bucket_granularity.is_nan() || self.time_bucket_granularity <= 0.0 {
            return Err(ConfigError::invalid(
                "time_bucket_granularity",
                "must be greater than 0",
            ));
        }

        if self.theta_conflict_clear > self.theta_conflict {
            return Err(ConfigError::invalid(
                "theta_conflict_clear",
                "must not exceed theta_conflict",
            ));
        }
        if self.unknown_trust_factor > self.not_i_trust_factor {
            return Err(ConfigError::invalid(
                "unknown_trust_factor",
                "must not exceed not_i_trust_factor",
            ));
        }
        Ok(())
    }
}
