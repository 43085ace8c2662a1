use super::strategies::{arb_dictionary, arb_leaf, arb_well_formed, relabel_leaves};
use proptest::prelude::*;
use shapecheck::{Dictionary, MismatchKind, Value, check, compare};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn well_formed_value_matches_itself(value in arb_well_formed(4)) {
        let result = compare(&value, &value);
        prop_assert!(result.passes, "{:?}: {:?}", value, result.err);
    }

    #[test]
    fn relabeled_value_matches(value in arb_well_formed(4), leaf in arb_leaf()) {
        let relabeled = relabel_leaves(&value, &leaf);
        prop_assert!(compare(&value, &relabeled).passes);
        prop_assert!(compare(&relabeled, &value).passes);
    }

    #[test]
    fn key_order_does_not_matter(map in arb_dictionary()) {
        let reversed: Dictionary = map.iter().rev().map(|(k, v)| (k.clone(), v.clone())).collect();
        prop_assert!(compare(&Value::from(map), &Value::from(reversed)).passes);
    }

    #[test]
    fn extra_state_key_fails(map in arb_dictionary(), extra in arb_leaf()) {
        let mut state = map.clone();
        // Keys from the strategy are lowercase, so this one is new.
        state.insert("EXTRA".to_string(), extra);

        let m = check(&Value::from(map), &Value::from(state)).unwrap_err();
        prop_assert_eq!(m.kind, MismatchKind::MissingFromTest);
        prop_assert!(m.message.contains("EXTRA"));
    }

    #[test]
    fn missing_state_key_fails(map in arb_dictionary(), index in any::<prop::sample::Index>()) {
        let mut state = map.clone();
        let removed = index.get(&map.keys().collect::<Vec<_>>()).to_string();
        state.shift_remove(&removed);

        let m = check(&Value::from(map), &Value::from(state)).unwrap_err();
        prop_assert_eq!(m.kind, MismatchKind::MissingFromState);
        let quoted = format!("{:?}", removed);
        prop_assert!(m.message.contains(&quoted));
    }

    #[test]
    fn disjoint_key_sets_fail(map in arb_dictionary()) {
        let renamed: Dictionary = map
            .iter()
            .map(|(k, v)| (k.to_uppercase(), v.clone()))
            .collect();
        prop_assert!(!compare(&Value::from(map), &Value::from(renamed)).passes);
    }
}
