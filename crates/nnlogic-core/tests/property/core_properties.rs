use std::collections::BTreeSet;

use nnlogic_core::evidence::{partition_by_kind, Evidence, EvidenceKind, EvidenceSet};
use nnlogic_core::{compute_nu, Penalties, PenaltyMode, PenaltySource};
use proptest::prelude::*;

fn kind_strategy() -> impl Strategy<Value = EvidenceKind> {
    prop_oneof![
        Just(EvidenceKind::Epistemic),
        Just(EvidenceKind::Definitional),
        Just(EvidenceKind::Procedural),
    ]
}

fn source_strategy() -> impl Strategy<Value = PenaltySource> {
    prop_oneof![
        Just(PenaltySource::Conflict),
        Just(PenaltySource::ScopeExpansion),
        Just(PenaltySource::MergeRupture),
        Just(PenaltySource::CategoryError),
        Just(PenaltySource::Manual),
    ]
}

fn evidence_set_strategy() -> impl Strategy<Value = EvidenceSet> {
    prop::collection::vec((kind_strategy(), -1.0f64..=1.0, 0usize..5), 0..30).prop_map(|items| {
        items
            .into_iter()
            .enumerate()
            .map(|(i, (kind, valence, src))| {
                Evidence::with_id(format!("e{i}"), kind, "claim", valence, format!("s{src}"), 0.0)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn partition_is_disjoint_and_covers(set in evidence_set_strategy()) {
        let parts = partition_by_kind(&set);
        let mut seen = BTreeSet::new();
        for (kind, items) in &parts {
            for e in items {
                prop_assert_eq!(e.kind, *kind);
                prop_assert!(seen.insert(e.id.clone()), "id appeared in two partitions");
            }
        }
        let original: BTreeSet<_> = set.iter().map(|e| e.id.clone()).collect();
        prop_assert_eq!(seen, original);
    }

    #[test]
    fn nu_stays_in_unit_range(
        nu_raw in 0.0f64..=1.0,
        penalties in prop::collection::vec((source_strategy(), 0.0f64..=1.0), 0..6),
    ) {
        let p: Penalties = penalties.into_iter().collect();
        for mode in [PenaltyMode::Max, PenaltyMode::Sum] {
            let nu = compute_nu(nu_raw, &p, mode);
            prop_assert!((0.0..=1.0).contains(&nu));
            prop_assert!(nu >= nu_raw - 1e-12);
        }
    }

    #[test]
    fn sum_mode_never_below_max_mode(
        nu_raw in 0.0f64..=1.0,
        penalties in prop::collection::vec((source_strategy(), 0.0f64..=1.0), 0..6),
    ) {
        let p: Penalties = penalties.into_iter().collect();
        prop_assert!(compute_nu(nu_raw, &p, PenaltyMode::Sum) >= compute_nu(nu_raw, &p, PenaltyMode::Max));
    }

    #[test]
    fn derived_ids_are_stable(claim in "[a-z ]{1,20}", src in "[a-z]{1,8}", t in 0.0f64..1e6) {
        let a = Evidence::new(EvidenceKind::Epistemic, claim.clone(), 0.5, src.clone(), t);
        let b = Evidence::new(EvidenceKind::Epistemic, claim, -0.5, src, t);
        prop_assert_eq!(a.id, b.id);
    }
}
