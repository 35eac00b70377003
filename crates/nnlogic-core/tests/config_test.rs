use nnlogic_core::config::*;
use nnlogic_core::{ConfigError, DedupMode, PenaltyMode};

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = NnLogicConfig::from_toml("").unwrap();
    let p = &config.policy;

    // Thresholds
    assert_eq!(p.theta_eval, 0.4);
    assert_eq!(p.theta_eval_raw, 0.5);
    assert_eq!(p.theta_null, 0.7);
    assert_eq!(p.theta_defined, 0.3);
    assert_eq!(p.theta_conflict, 0.3);
    assert_eq!(p.theta_conflict_clear, 0.15);
    assert_eq!(p.theta_utility, 0.5);

    // Weights
    assert_eq!(p.w_sem, 0.4);
    assert_eq!(p.w_ep, 0.35);
    assert_eq!(p.w_proc, 0.25);

    // Penalties
    assert_eq!(p.max_conflict_penalty, 0.2);
    assert_eq!(p.conflict_cooldown, 3600.0);
    assert_eq!(p.penalty_mode, PenaltyMode::Max);
    assert!(p.penalty_decay_enabled);
    assert_eq!(p.penalty_decay_factor, 0.9);
    assert_eq!(p.penalty_clear_window, 86_400.0);
    assert_eq!(p.penalty_cleanup_threshold, 0.01);

    // Boundary transform
    assert_eq!(p.not_i_trust_factor, 0.7);
    assert_eq!(p.unknown_trust_factor, 0.5);
    assert_eq!(p.coalition_factor, 0.85);

    assert_eq!(p.dedup_mode, DedupMode::Strict);
    assert_eq!(p.time_bucket_granularity, 60.0);
    assert_eq!(p.decay_rate, 0.001);

    // Observability
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json_logs);
    assert!(config.observability.trace_enabled);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[policy]
theta_conflict = 0.4
penalty_mode = "sum"
dedup_mode = "corroboration"

[observability]
json_logs = true
"#;
    let config = NnLogicConfig::from_toml(toml).unwrap();
    assert_eq!(config.policy.theta_conflict, 0.4);
    assert_eq!(config.policy.penalty_mode, PenaltyMode::Sum);
    assert_eq!(config.policy.dedup_mode, DedupMode::Corroboration);
    assert!(config.observability.json_logs);
    // Non-overridden fields keep defaults
    assert_eq!(config.policy.theta_eval, 0.4);
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn policy_from_toml_reads_top_level_keys() {
    let policy = Policy::from_toml("w_sem = 0.5\nw_ep = 0.3\nw_proc = 0.2\n").unwrap();
    assert_eq!(policy.w_sem, 0.5);
    assert!((policy.weight_sum() - 1.0).abs() < 1e-12);
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let err = NnLogicConfig::from_toml("[policy\ntheta_eval = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn threshold_out_of_range_is_rejected() {
    let err = NnLogicConfig::from_toml("[policy]\ntheta_null = 1.5\n").unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "theta_null"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn negative_weight_is_rejected() {
    let policy = Policy {
        w_proc: -0.1,
        w_sem: 0.75,
        ..Policy::default()
    };
    assert!(policy.validate().is_err());
}

#[test]
fn weights_must_sum_to_one_within_tolerance() {
    let close = Policy {
        w_sem: 0.405,
        ..Policy::default()
    };
    assert!(close.validate().is_ok());

    let far = Policy {
        w_sem: 0.6,
        ..Policy::default()
    };
    let err = far.validate().unwrap_err();
    assert!(err.to_string().contains("must sum to 1.0"));
}

#[test]
fn decay_factor_outside_unit_range_is_rejected() {
    let policy = Policy {
        penalty_decay_factor: 1.2,
        ..Policy::default()
    };
    assert!(policy.validate().is_err());
}

#[test]
fn negative_cooldown_is_rejected() {
    let policy = Policy {
        conflict_cooldown: -1.0,
        ..Policy::default()
    };
    assert!(policy.validate().is_err());
}

#[test]
fn unknown_must_be_discounted_at_least_as_much_as_not_i() {
    let policy = Policy {
        unknown_trust_factor: 0.9,
        ..Policy::default()
    };
    match policy.validate().unwrap_err() {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "unknown_trust_factor"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unknown_log_level_is_rejected() {
    let err = NnLogicConfig::from_toml("[observability]\nlog_level = \"loud\"\n").unwrap_err();
    assert!(err.to_string().contains("observability.log_level"));
}

#[test]
fn relevance_is_not_serialized() {
    let json = serde_json::to_value(Policy::default()).unwrap();
    assert!(json.get("relevance").is_none());
    assert!(json.get("theta_eval").is_some());
}

#[test]
fn decay_halflife_sets_matching_rate() {
    let policy = Policy::default().with_decay_halflife(3600.0);
    assert_eq!(policy.decay_halflife, 3600.0);
    assert!((policy.decay_rate * 3600.0 - std::f64::consts::LN_2).abs() < 1e-12);
    assert!(((-policy.decay_rate * 3600.0).exp() - 0.5).abs() < 1e-12);
    policy.validate().unwrap();
}

#[test]
fn non_positive_decay_halflife_is_ignored() {
    let base = Policy::default();
    let policy = Policy::default().with_decay_halflife(0.0);
    assert_eq!(policy.decay_rate, base.decay_rate);
    assert_eq!(policy.decay_halflife, base.decay_halflife);
}
