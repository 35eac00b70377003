use nnlogic_core::*;
use nnlogic_operators::*;
use proptest::prelude::*;
use test_fixtures::evidence;

fn kind_strategy() -> impl Strategy<Value = EvidenceKind> {
    prop_oneof![
        Just(EvidenceKind::Epistemic),
        Just(EvidenceKind::Definitional),
        Just(EvidenceKind::Procedural),
    ]
}

fn items_strategy() -> impl Strategy<Value = Vec<Evidence>> {
    prop::collection::vec((0usize..30, kind_strategy(), -1.0f64..=1.0, 0.0f64..=1.0), 0..20).prop_map(|items| {
        items
            .into_iter()
            .map(|(id, kind, valence, trust)| evidence(&format!("e{id}"), kind, valence, "s", 0.0).with_trust(trust))
            .collect()
    })
}

fn penalty_strategy() -> impl Strategy<Value = Penalties> {
    prop::collection::vec((0usize..PenaltySource::ALL.len(), 0.0f64..=1.0), 0..5).prop_map(|entries| {
        entries
            .into_iter()
            .fold(Penalties::new(), |p, (i, v)| p.with(PenaltySource::ALL[i], v))
    })
}

fn state_strategy() -> impl Strategy<Value = State> {
    (items_strategy(), penalty_strategy(), 0.0f64..=1.0).prop_map(|(items, penalties, nu_raw)| {
        // Ids repeat across draws; keep the first of each.
        let evidence = items.into_iter().fold(EvidenceSet::empty(), |set, e| {
            if set.contains_id(&e.id) {
                set
            } else {
                set.appended(e)
            }
        });
        let mut s = State::initial("t", "c", 0.0).with_evidence(evidence).with_nu_raw(nu_raw);
        s.nu_penalties = penalties;
        s
    })
}

fn nu_consistent(state: &State, mode: PenaltyMode) -> bool {
    let expected = (state.nu_raw + state.nu_penalties.aggregate(mode)).clamp(0.0, 1.0);
    (state.nu_with_mode(mode) - expected).abs() < 1e-12 && (0.0..=1.0).contains(&state.nu_with_mode(mode))
}

proptest! {
    #[test]
    fn every_operator_keeps_nu_consistent(
        s in state_strategy(),
        extra in items_strategy(),
        now in 0.0f64..100_000.0,
        sum_mode in any::<bool>(),
    ) {
        let mode = if sum_mode { PenaltyMode::Sum } else { PenaltyMode::Max };
        let policy = Policy { penalty_mode: mode, ..Policy::default() };
        let clock = MockClock::new(now);
        let env = OperatorEnv::new(&policy, &clock);

        let outputs = vec![
            incorporate(&s, extra, None, &env).0,
            neg_define(&s, ["a", "b"], &env).0,
            apply_conflict(&s, &env).0,
            recontextualize(&s, "d", &env).0,
            decay(&s, &env).0,
            penalty_decay(&s, &env).0,
            merge(&[s.clone(), s.clone()], "m", "c", &env).0,
        ];
        for out in &outputs {
            prop_assert!(nu_consistent(out, mode));
        }
    }

    #[test]
    fn neg_define_is_idempotent(s in state_strategy(), constraints in prop::collection::vec("[a-z]{1,4}", 0..6)) {
        let policy = Policy::default();
        let clock = MockClock::new(0.0);
        let env = OperatorEnv::new(&policy, &clock);
        let (once, _) = neg_define(&s, constraints.clone(), &env);
        let (twice, _) = neg_define(&once, constraints, &env);
        prop_assert_eq!(once.constraints.len(), twice.constraints.len());
        prop_assert_eq!(once.nu_raw, twice.nu_raw);
    }

    #[test]
    fn split_emits_one_record_per_child(s in state_strategy(), n in 0usize..8) {
        let policy = Policy::default();
        let clock = MockClock::new(0.0);
        let env = OperatorEnv::new(&policy, &clock);
        let children: Vec<TargetId> = (0..n).map(|i| TargetId::from(format!("k{i}"))).collect();
        let (states, records) = split(&s, &children, &SplitOptions::new(), &env);
        prop_assert_eq!(states.len(), n);
        prop_assert_eq!(records.len(), n);
        for child in &states {
            prop_assert!(child.nu_penalties.is_empty());
            prop_assert_eq!(&child.evidence, &s.evidence);
        }
    }

    #[test]
    fn penalty_decay_never_grows_penalties(s in state_strategy(), now in 0.0f64..1e6) {
        let policy = Policy::default();
        let clock = MockClock::new(now);
        let (out, _) = penalty_decay(&s, &OperatorEnv::new(&policy, &clock));
        for (source, value) in out.nu_penalties.iter() {
            prop_assert!(value <= s.penalty(source).unwrap_or(0.0) + 1e-12);
        }
        prop_assert!(out.nu() <= s.nu() + 1e-12);
    }

    #[test]
    fn query_next_returns_a_member(raws in prop::collection::vec(0.0f64..=1.0, 0..10)) {
        let policy = Policy::default();
        let states: Vec<State> = raws
            .iter()
            .enumerate()
            .map(|(i, r)| State::initial(format!("t{i}"), "c", 0.0).with_nu_raw(*r))
            .collect();
        match query_next(&states, &policy) {
            None => prop_assert!(states.is_empty()),
            Some(picked) => {
                let max_raw = raws.iter().cloned().fold(f64::MIN, f64::max);
                if raws.iter().any(|r| *r > policy.theta_null) {
                    prop_assert_eq!(picked.nu_raw, max_raw);
                }
                prop_assert!(states.iter().any(|s| s.target_id == picked.target_id));
            }
        }
    }
}
