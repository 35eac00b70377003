use nnlogic_core::{ContextId, EvidenceKind, EvidenceSet, Policy, Relevance, Role, TargetId};
use nnlogic_scoring::*;
use proptest::prelude::*;
use test_fixtures::evidence;

fn kind_strategy() -> impl Strategy<Value = EvidenceKind> {
    prop_oneof![
        Just(EvidenceKind::Epistemic),
        Just(EvidenceKind::Definitional),
        Just(EvidenceKind::Procedural),
    ]
}

fn set_strategy() -> impl Strategy<Value = EvidenceSet> {
    prop::collection::vec((kind_strategy(), -1.0f64..=1.0, 0.0f64..=1.0, 0.0f64..5000.0), 0..25).prop_map(
        |items| {
            items
                .into_iter()
                .enumerate()
                .map(|(i, (kind, valence, trust, time))| {
                    evidence(&format!("e{i}"), kind, valence, "s", time).with_trust(trust)
                })
                .collect()
        },
    )
}

proptest! {
    #[test]
    fn conflict_in_unit_range_and_symmetric(pos in 0.0f64..100.0, neg in 0.0f64..100.0) {
        let c = compute_conflict(pos, neg);
        prop_assert!((0.0..=1.0).contains(&c));
        prop_assert!((c - compute_conflict(neg, pos)).abs() < 1e-12);
    }

    #[test]
    fn aggregate_scores_stay_in_range(set in set_strategy(), now in 0.0f64..10_000.0, rate in 0.0f64..0.01) {
        let t = TargetId::from("t");
        let c = ContextId::from("c");
        let agg = aggregate(&set, &t, &c, &Relevance::uniform(), now, rate);
        prop_assert!(agg.pos_mass >= 0.0);
        prop_assert!(agg.neg_mass >= 0.0);
        prop_assert!((0.0..=1.0).contains(&agg.conflict));
        prop_assert!((0.0..=1.0).contains(&agg.def_ep));
    }

    #[test]
    fn decay_never_increases_mass(set in set_strategy(), rate in 0.0f64..0.01) {
        let t = TargetId::from("t");
        let c = ContextId::from("c");
        let fresh = aggregate(&set, &t, &c, &Relevance::uniform(), 0.0, 0.0);
        let decayed = aggregate(&set, &t, &c, &Relevance::uniform(), 10_000.0, rate);
        prop_assert!(decayed.total_mass() <= fresh.total_mass() + 1e-9);
    }

    #[test]
    fn definedness_components_in_range(set in set_strategy(), n in 0usize..20) {
        let constraints: Vec<String> = (0..n).map(|i| format!("c{i}")).collect();
        let b = definedness(
            &TargetId::from("t"),
            &set,
            &constraints,
            DefinednessWeights::default(),
            &DefaultSemanticProvider::default(),
            &DefinednessOverrides::none(),
        );
        for v in [b.def_sem, b.def_ep, b.def_proc, b.def, b.nu_raw] {
            prop_assert!((0.0..=1.0).contains(&v));
        }
        prop_assert!((b.def + b.nu_raw - 1.0).abs() < 1e-12);
    }

    #[test]
    fn boundary_transform_never_raises_trust(set in set_strategy()) {
        let policy = Policy::default();
        for role in [Role::I, Role::NotI, Role::Both, Role::Unknown] {
            for e in &set {
                let out = boundary_transform_evidence(e, role, &policy);
                prop_assert!(out.trust <= e.trust + 1e-12);
            }
        }
    }
}
