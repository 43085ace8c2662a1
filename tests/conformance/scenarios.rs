use super::common::{cities_state, cities_test, v};
use serde_json::json;
use shapecheck::{MismatchKind, Value, check, compare, compare_json};

// ─── Leaves ──────────────────────────────────────────────────────────────────

#[test]
fn numbers_match() {
    assert!(compare(&v(json!(1)), &v(json!(1))).passes);
}

#[test]
fn number_matches_absent_state() {
    assert!(compare(&v(json!(1)), &Value::absent()).passes);
}

#[test]
fn string_does_not_match_sequence() {
    assert!(!compare(&v(json!("string")), &v(json!([]))).passes);
}

#[test]
fn number_and_date_match_both_ways() {
    let date = Value::opaque("Date", "2016-03-01T08:00:00.000Z");
    assert!(compare(&v(json!(1)), &date).passes);
    assert!(compare(&date, &v(json!(1))).passes);
}

// ─── Sequences ───────────────────────────────────────────────────────────────

#[test]
fn empty_sequence_does_not_match_number() {
    let result = compare(&v(json!([])), &v(json!(1)));
    assert!(!result.passes);
    assert!(result.err.unwrap().contains("is a sequence but state"));
}

#[test]
fn number_sequences_of_different_lengths_match() {
    assert!(compare_json(&json!([1, 2, 3, 4]), &json!([5, 6, 7, 8, 9, 10])).passes);
}

#[test]
fn number_sequence_does_not_match_dictionary_sequence() {
    let result = compare_json(&json!([1, 2, 3, 4]), &json!([{"foo": 1}, {"bar": 1}]));
    assert!(!result.passes);
    assert!(result.err.unwrap().starts_with("at $[0]:"));
}

#[test]
fn empty_sequence_on_either_side_passes() {
    assert!(compare_json(&json!([]), &json!([{"a": 1}])).passes);
    assert!(compare_json(&json!([1, 2]), &json!([])).passes);
}

// ─── Dictionaries ────────────────────────────────────────────────────────────

#[test]
fn dictionaries_with_same_keys_match() {
    let test = json!({"cityName": "San Francisco", "cityNicknames": ["Frisco", "SF", "the city"]});
    let state = json!({"cityName": "Orlando", "cityNicknames": ["O town", "The city beautiful"]});
    assert!(compare_json(&test, &state).passes);
}

#[test]
fn test_key_missing_from_state_fails() {
    let test = json!({"cityName": "San Francisco", "cityNicknames": ["Frisco", "SF", "the city"]});
    let state = json!({"cityName": "Orlando"});
    let m = check(&v(test), &v(state)).unwrap_err();
    assert_eq!(m.kind, MismatchKind::MissingFromState);
    assert!(m.message.contains("cityNicknames"));
}

#[test]
fn state_key_missing_from_test_fails() {
    let test = json!({"cityName": "San Francisco"});
    let state = json!({"cityName": "Orlando", "cityNicknames": ["O town", "The city beautiful"]});
    let m = check(&v(test), &v(state)).unwrap_err();
    assert_eq!(m.kind, MismatchKind::MissingFromTest);
    assert!(m.message.contains("cityNicknames"));
}

#[test]
fn same_shape_with_different_values_passes() {
    let test = json!({"city": "SF", "tags": ["a", "b"]});
    let state = json!({"city": "LA", "tags": ["x"]});
    assert!(compare_json(&test, &state).passes);
}

#[test]
fn extra_state_key_is_named() {
    let result = compare_json(&json!({"city": "SF"}), &json!({"city": "LA", "tags": ["x"]}));
    assert!(!result.passes);
    assert!(result.err.unwrap().contains("\"tags\""));
}

#[test]
fn disjoint_key_sets_fail_regardless_of_values() {
    let result = compare_json(&json!({"a": 1, "b": 2}), &json!({"b": 2, "c": 3}));
    assert!(!result.passes);
}

// ─── Nested data ─────────────────────────────────────────────────────────────

#[test]
fn big_structures_with_same_shape_match() {
    let result = compare_json(&cities_test(), &cities_state());
    assert!(result.passes, "unexpected mismatch: {:?}", result.err);
    assert_eq!(result.err, None);
}

#[test]
fn corrupted_element_inside_test_is_detected() {
    let mut test = cities_test();
    test["cities"][1]["id"] = json!([]);

    let m = check(&v(test), &v(cities_state())).unwrap_err();
    assert_eq!(m.kind, MismatchKind::NotALeaf);
    assert_eq!(m.path, "$.cities[1].id");
}

#[test]
fn corrupted_prototype_is_detected_against_state() {
    let mut test = cities_state();
    test["cities"][0]["id"] = json!([]);

    // The prototype's id is a sequence, so the test's own second city fails first.
    let m = check(&v(test), &v(cities_test())).unwrap_err();
    assert_eq!(m.kind, MismatchKind::NotASequence);
    assert_eq!(m.path, "$.cities[1].id");
}

#[test]
fn corrupted_state_fails_when_test_is_well_formed() {
    let mut state = cities_test();
    state["cities"][1]["id"] = json!([]);

    let m = check(&v(cities_state()), &v(state)).unwrap_err();
    assert_eq!(m.kind, MismatchKind::NotALeaf);
    assert_eq!(m.path, "$.cities[1].id");
}

// ─── Resource use ────────────────────────────────────────────────────────────

#[test]
fn very_large_dictionary_compares() {
    let test: Value = (0..100_000)
        .map(|i| (format!("k{}", i), Value::from(i as i64)))
        .collect();
    let state: Value = (0..100_000)
        .rev()
        .map(|i| (format!("k{}", i), Value::from("x")))
        .collect();
    assert!(compare(&test, &state).passes);
}

#[test]
fn very_long_sequence_compares() {
    let test: Value = vec![v(json!({"id": 0}))].into_iter().collect();
    let state: Value = (0..100_000).map(|i| v(json!({"id": i}))).collect();
    assert!(compare(&test, &state).passes);
}

#[test]
fn moderately_deep_nesting_compares() {
    let mut test = Value::from(0i64);
    let mut state = Value::from("leaf");
    for _ in 0..100 {
        test = std::iter::once(("next", Value::from(vec![test]))).collect();
        state = std::iter::once(("next", Value::from(vec![state]))).collect();
    }
    assert!(compare(&test, &state).passes);
}
