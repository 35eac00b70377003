use nnlogic_core::{EvidenceSet, Policy, SemanticDefinednessProvider, TargetId};
use nnlogic_scoring::*;
use test_fixtures::{definitional, epistemic, procedural};

fn tid() -> TargetId {
    TargetId::from("t")
}

fn constraints(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("c{i}")).collect()
}

// ── Default semantic provider ────────────────────────────────────────────

#[test]
fn empty_target_scores_quarter_semantic() {
    // (0 + (1 - 0) + 0 + 0) / 4
    let s = def_sem(&tid(), &EvidenceSet::empty(), &[], &DefaultSemanticProvider::default(), None);
    assert!((s - 0.25).abs() < 1e-12);
}

#[test]
fn heuristic_sub_scores_match_calibration() {
    let p = DefaultSemanticProvider::default();
    let set: EvidenceSet = vec![definitional("d1", "s", 0.0), definitional("d2", "s", 0.0)]
        .into_iter()
        .collect();
    let c = constraints(3);
    // 2·0.15 + 3·0.1
    assert!((p.ontology_coverage(&tid(), &set, &c) - 0.6).abs() < 1e-12);
    assert!((p.ambiguity_score(&tid(), &set, &c) - 0.36).abs() < 1e-12);
    assert!((p.constraint_coverage(&tid(), &set, &c) - 0.3).abs() < 1e-12);
    // 2·0.1 + 3·0.08
    assert!((p.boundary_precision(&tid(), &set, &c) - 0.44).abs() < 1e-12);
}

#[test]
fn ontology_constraint_bonus_is_capped() {
    let p = DefaultSemanticProvider::default();
    let oc = p.ontology_coverage(&tid(), &EvidenceSet::empty(), &constraints(20));
    assert!((oc - 0.5).abs() < 1e-12);
}

#[test]
fn more_constraints_raise_semantic_definedness() {
    let p = DefaultSemanticProvider::default();
    let s0 = def_sem(&tid(), &EvidenceSet::empty(), &[], &p, None);
    let s5 = def_sem(&tid(), &EvidenceSet::empty(), &constraints(5), &p, None);
    assert!(s5 > s0);
}

#[test]
fn retuned_provider_changes_scores() {
    let p = DefaultSemanticProvider {
        constraint_coverage_rate: 0.5,
        ..DefaultSemanticProvider::default()
    };
    assert_eq!(p.constraint_coverage(&tid(), &EvidenceSet::empty(), &constraints(3)), 1.0);
}

#[test]
fn sub_score_provider_replaces_one_component() {
    let p = SubScoreProvider::new(DefaultSemanticProvider::default()).with_ambiguity_score(|_, _, _| 1.0);
    // (0 + 0 + 0 + 0) / 4
    let s = def_sem(&tid(), &EvidenceSet::empty(), &[], &p, None);
    assert_eq!(s, 0.0);
    assert_eq!(p.ontology_coverage(&tid(), &EvidenceSet::empty(), &constraints(1)), 0.1);
}

// ── Overrides ────────────────────────────────────────────────────────────

#[test]
fn semantic_override_bypasses_provider() {
    let o = DefinednessOverrides::none().with_semantic_value(0.42);
    let s = def_sem(
        &tid(),
        &EvidenceSet::empty(),
        &[],
        &DefaultSemanticProvider::default(),
        o.semantic.as_ref(),
    );
    assert!((s - 0.42).abs() < 1e-12);
}

#[test]
fn override_output_is_clamped() {
    let o = DefinednessOverrides::none().with_epistemic(|_, _| 7.0);
    assert_eq!(def_ep(&tid(), &EvidenceSet::empty(), o.epistemic.as_ref()), 1.0);
}

#[test]
fn layered_overrides_prefer_local() {
    let global = DefinednessOverrides::fixed(0.1, 0.2, 0.3);
    let local = DefinednessOverrides::none().with_semantic_value(0.9);
    let merged = local.layered_over(&global);
    let set = EvidenceSet::empty();
    assert_eq!(def_sem(&tid(), &set, &[], &DefaultSemanticProvider::default(), merged.semantic.as_ref()), 0.9);
    assert_eq!(def_ep(&tid(), &set, merged.epistemic.as_ref()), 0.2);
    assert_eq!(def_proc(&tid(), &set, merged.procedural.as_ref()), 0.3);
    assert!(!merged.is_empty());
    assert!(DefinednessOverrides::none().is_empty());
}

// ── Epistemic / procedural ───────────────────────────────────────────────

#[test]
fn def_ep_counts_only_epistemic() {
    let set: EvidenceSet = vec![
        epistemic("a", 0.5, "s", 0.0),
        epistemic("b", -0.7, "s", 0.0),
        procedural("p", 0.6, "s", 0.0),
        definitional("d", "s", 0.0),
    ]
    .into_iter()
    .collect();
    assert!((def_ep(&tid(), &set, None) - 0.6).abs() < 1e-12);
    assert!((def_proc(&tid(), &set, None) - 0.3).abs() < 1e-12);
}

#[test]
fn empty_sets_have_zero_ep_and_proc() {
    assert_eq!(def_ep(&tid(), &EvidenceSet::empty(), None), 0.0);
    assert_eq!(def_proc(&tid(), &EvidenceSet::empty(), None), 0.0);
}

// ── Combined ─────────────────────────────────────────────────────────────

#[test]
fn full_overrides_give_full_definedness() {
    let b = definedness(
        &tid(),
        &EvidenceSet::empty(),
        &[],
        DefinednessWeights::default(),
        &DefaultSemanticProvider::default(),
        &DefinednessOverrides::fixed(1.0, 1.0, 1.0),
    );
    assert!((b.def - 1.0).abs() < 1e-12);
    assert!(b.nu_raw.abs() < 1e-12);
}

#[test]
fn worked_example_incorporate_step() {
    let b = definedness(
        &tid(),
        &EvidenceSet::empty(),
        &[],
        DefinednessWeights::from(&Policy::default()),
        &DefaultSemanticProvider::default(),
        &DefinednessOverrides::fixed(0.10, 0.40, 0.30),
    );
    assert!((b.def - 0.255).abs() < 1e-9);
    assert!((b.nu_raw - 0.745).abs() < 1e-9);
    assert_eq!(b.def_sem, 0.10);
}

#[test]
fn nu_raw_round_trip_points() {
    assert_eq!(nu_raw_from_definedness(1.0), 0.0);
    assert_eq!(nu_raw_from_definedness(0.0), 1.0);
    assert_eq!(nu_raw_from_definedness(1.5), 0.0);
    assert_eq!(nu_raw_from_definedness(-0.5), 1.0);
}

#[test]
fn oversized_weights_are_clamped() {
    let w = DefinednessWeights {
        semantic: 1.0,
        epistemic: 1.0,
        procedural: 1.0,
    };
    let b = definedness(
        &tid(),
        &EvidenceSet::empty(),
        &[],
        w,
        &DefaultSemanticProvider::default(),
        &DefinednessOverrides::fixed(0.9, 0.9, 0.9),
    );
    assert_eq!(b.def, 1.0);
}

// ── Range checks ─────────────────────────────────────────────────────────

struct OutOfRange;

impl SemanticDefinednessProvider for OutOfRange {
    fn ontology_coverage(&self, _: &TargetId, _: &EvidenceSet, _: &[String]) -> f64 {
        5.0
    }
    fn ambiguity_score(&self, _: &TargetId, _: &EvidenceSet, _: &[String]) -> f64 {
        -3.0
    }
    fn constraint_coverage(&self, _: &TargetId, _: &EvidenceSet, _: &[String]) -> f64 {
        5.0
    }
    fn boundary_precision(&self, _: &TargetId, _: &EvidenceSet, _: &[String]) -> f64 {
        5.0
    }
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "def_sem out of range")]
fn out_of_range_provider_trips_debug_check() {
    def_sem(&tid(), &EvidenceSet::empty(), &[], &OutOfRange, None);
}

#[test]
#[cfg(not(debug_assertions))]
fn out_of_range_provider_is_clamped_in_release() {
    assert_eq!(def_sem(&tid(), &EvidenceSet::empty(), &[], &OutOfRange, None), 1.0);
}
