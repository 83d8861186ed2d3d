//! Integration tests for the custom matcher and its composition with the
//! type-tag and array-of matchers.

use assert_json_diff::assert_json_eq;
use conform_core::{
    array_of, custom, delegate, type_of, CustomMatcher, Matcher, MatchResult, PredicateOutcome,
};
use serde_json::{json, Value};
use std::sync::Arc;

fn actual() -> Value {
    json!({"a": 5, "b": 10})
}

fn loose_eq(actual: &Value, expected: &Value) -> bool {
    conform_core::loose_equals(actual, expected)
}

#[test]
fn test_plain_value_uses_comparator() {
    let matcher = custom(json!({"a": 5, "b": "10"}));
    let comparator = |_: &Value, _: &Value| true;

    let result = matcher.evaluate(&actual(), Some(&comparator)).unwrap();

    assert_json_eq!(
        result,
        json!({"match": true, "actual": {"a": 5, "b": 10}, "expected": {"a": 5, "b": 10}})
    );
}

#[test]
fn test_predicate_returns_true() {
    let matcher = CustomMatcher::satisfies(|actual| actual["a"] == json!(5));

    let result = matcher.evaluate(&actual(), None).unwrap();

    assert_eq!(result, MatchResult::pass(actual()));
}

#[test]
fn test_predicate_returns_false() {
    let matcher = CustomMatcher::satisfies(|actual| actual["a"] != json!(5));

    let result = matcher.evaluate(&actual(), None).unwrap();

    assert_json_eq!(
        result,
        json!({"match": false, "actual": {"a": 5, "b": 10}, "expected": "[custom]"})
    );
}

#[test]
fn test_predicate_returns_match_false_without_expected() {
    let matcher = CustomMatcher::predicate(|actual, _| {
        Ok(PredicateOutcome::Partial {
            matched: actual["a"] != json!(5),
            expected: None,
        })
    });

    let result = matcher.evaluate(&actual(), None).unwrap();

    assert_eq!(result, MatchResult::fail(actual(), json!("[custom]")));
}

#[test]
fn test_predicate_partial_true_ignores_expected() {
    let matcher = CustomMatcher::predicate(|actual, _| {
        Ok(if actual["a"] == json!(5) {
            PredicateOutcome::partial(true, json!({"a": 5}))
        } else {
            PredicateOutcome::partial(false, json!("[a is five]"))
        })
    });

    let result = matcher.evaluate(&actual(), None).unwrap();

    assert_eq!(result, MatchResult::pass(actual()));
}

#[test]
fn test_predicate_partial_false_wraps_expected() {
    let matcher = CustomMatcher::predicate(|actual, _| {
        Ok(if actual["a"] != json!(5) {
            PredicateOutcome::partial(true, json!({"a": 5}))
        } else {
            PredicateOutcome::partial(false, json!("[a is five]"))
        })
    });

    let result = matcher.evaluate(&actual(), None).unwrap();

    assert_eq!(
        result,
        MatchResult::fail(actual(), json!({"[custom]": "[a is five]"}))
    );
}

#[test]
fn test_inner_matcher_true() {
    let matcher = CustomMatcher::predicate(|actual, _| {
        Ok(type_of("number")?.evaluate(&actual["a"], None)?)
    });

    let result = matcher.evaluate(&actual(), None).unwrap();

    assert_eq!(result, MatchResult::pass(actual()));
}

#[test]
fn test_inner_matcher_false() {
    let matcher = CustomMatcher::predicate(|actual, _| {
        Ok(type_of("string")?.evaluate(&actual["a"], None)?)
    });

    let result = matcher.evaluate(&actual(), None).unwrap();

    assert_json_eq!(
        result,
        json!({
            "match": false,
            "actual": {"a": 5, "b": 10},
            "expected": {"[custom]": {"[typeof]": "string"}}
        })
    );
}

#[test]
fn test_direct_delegation_true() {
    let ones = Arc::new(array_of(json!(1)));
    let matcher = custom(delegate(ones));

    let result = matcher.evaluate(&json!([1, 1, 1]), Some(&loose_eq)).unwrap();

    assert_eq!(result, MatchResult::pass(json!([1, 1, 1])));
}

#[test]
fn test_direct_delegation_false() {
    let ones = Arc::new(array_of(json!(1)));
    let matcher = custom(delegate(ones));

    let result = matcher.evaluate(&json!([1, 1, "a"]), Some(&loose_eq)).unwrap();

    assert_eq!(
        result,
        MatchResult::fail(json!([1, 1, "a"]), json!({"[custom]": [1, 1, 1]}))
    );
}

#[test]
fn test_delegation_via_closure() {
    // Equivalent to delegating, but the closure builds the inner matcher itself.
    let matcher = CustomMatcher::predicate(|actual, comparator| {
        array_of(json!(1))
            .evaluate(actual, comparator)
            .map_err(Into::into)
    });

    let result = matcher.evaluate(&json!([1, "1"]), Some(&loose_eq)).unwrap();
    assert!(result.is_match());

    let result = matcher.evaluate(&json!([1, "1"]), None).unwrap();
    assert_eq!(
        result,
        MatchResult::fail(json!([1, "1"]), json!({"[custom]": [1, 1]}))
    );
}

#[test]
fn test_array_of_scenarios() {
    let matcher = array_of(json!(1));

    assert_json_eq!(
        matcher.evaluate(&json!([1, 1, 1]), Some(&loose_eq)).unwrap(),
        json!({"match": true, "actual": [1, 1, 1], "expected": [1, 1, 1]})
    );
    assert_json_eq!(
        matcher.evaluate(&json!([1, 1, "a"]), Some(&loose_eq)).unwrap(),
        json!({"match": false, "actual": [1, 1, "a"], "expected": [1, 1, 1]})
    );
}

#[test]
fn test_nested_custom_matchers() {
    let inner = Arc::new(CustomMatcher::satisfies(|actual| actual.is_string()));
    let outer = custom(delegate(inner));

    assert!(outer.evaluate(&json!("s"), None).unwrap().is_match());
    assert_eq!(
        outer.evaluate(&json!(1), None).unwrap(),
        MatchResult::fail(json!(1), json!({"[custom]": "[custom]"}))
    );
}

#[test]
fn test_matchers_are_reusable_across_threads() {
    let matcher: Arc<dyn Matcher> = Arc::new(array_of(json!(1)));

    std::thread::scope(|scope| {
        for len in 0..8usize {
            let matcher = Arc::clone(&matcher);
            scope.spawn(move || {
                let ones = Value::Array(vec![json!(1); len]);
                let result = matcher.evaluate(&ones, None).unwrap();
                assert_eq!(result, MatchResult::pass(ones));
            });
        }
    });
}
