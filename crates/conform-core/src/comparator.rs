//! Leaf equality used by composite matchers.
//!
//! A [`Comparator`] decides whether an actual leaf equals an expected leaf.
//! Composite matchers receive an optional comparator and fall back to
//! [`DEFAULT_COMPARATOR`] when the caller supplies none.

use serde_json::{Number, Value};

/// Pluggable two-argument equality over values.
///
/// Implementations must be total: return `false` rather than panic for any
/// pair of well-formed values.
pub trait Comparator: Send + Sync {
    fn compare(&self, actual: &Value, expected: &Value) -> bool;
}

impl<F> Comparator for F
where
    F: Fn(&Value, &Value) -> bool + Send + Sync,
{
    #[inline]
    fn compare(&self, actual: &Value, expected: &Value) -> bool {
        self(actual, expected)
    }
}

/// Structural equality, the default comparator.
///
/// Numbers compare by numeric value, so `1` equals `1.0`. Arrays must have
/// the same length and objects the same key set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeepEqual;

impl Comparator for DeepEqual {
    #[inline]
    fn compare(&self, actual: &Value, expected: &Value) -> bool {
        deep_equals(actual, expected)
    }
}

/// Coercing leaf equality.
///
/// Numbers, booleans and numeric strings compare by numeric value (`"1"`
/// equals `1`, `true` equals `1`). `null` only equals `null`. Arrays and
/// objects fall back to [`deep_equals`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LooseEqual;

impl Comparator for LooseEqual {
    #[inline]
    fn compare(&self, actual: &Value, expected: &Value) -> bool {
        loose_equals(actual, expected)
    }
}

/// The comparator used when a caller passes `None`.
pub static DEFAULT_COMPARATOR: DeepEqual = DeepEqual;

/// Resolve an optional comparator to the one that will actually be used.
#[inline]
pub(crate) fn resolve<'a>(comparator: Option<&'a dyn Comparator>) -> &'a dyn Comparator {
    comparator.unwrap_or(&DEFAULT_COMPARATOR)
}

/// Deep structural equality between two values.
pub fn deep_equals(actual: &Value, expected: &Value) -> bool {
    match (actual, expected) {
        (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| deep_equals(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, x)| b.get(key).is_some_and(|y| deep_equals(x, y)))
        }
        (a, b) => a == b,
    }
}

/// Coercing equality between two values. See [`LooseEqual`].
pub fn loose_equals(actual: &Value, expected: &Value) -> bool {
    match (actual, expected) {
        (Value::Null, Value::Null) => true,
        (Value::Null, _) | (_, Value::Null) => false,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
        (Value::Array(_) | Value::Object(_), _) | (_, Value::Array(_) | Value::Object(_)) => {
            deep_equals(actual, expected)
        }
        (a, b) => match (coerce_number(a), coerce_number(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        },
    }
}

/// Integers compare exactly; only a float on either side widens to `f64`.
fn numbers_equal(a: &Number, b: &Number) -> bool {
    if !a.is_f64() && !b.is_f64() {
        return a == b;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
            }
        }
        _ => None,
    }
}
