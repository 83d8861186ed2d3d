//! The uniform output of every matcher.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Marker key for type-tag mismatches: `{"[typeof]": "<tag>"}`.
pub const TYPEOF_MARKER: &str = "[typeof]";

/// Marker for custom-predicate mismatches, used both as a bare string and as
/// a key wrapping the predicate's own diagnostic.
pub const CUSTOM_MARKER: &str = "[custom]";

/// Outcome of a single match.
///
/// Serializes with exactly the keys `match`, `actual` and `expected`.
/// `actual` is always the exact input; `expected` is a display-oriented
/// diagnostic whose shape is owned by the matcher that produced it. When
/// `match` is true, `expected` equals `actual`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatchResult {
    #[serde(rename = "match")]
    matched: bool,
    actual: Value,
    expected: Value,
}

impl MatchResult {
    /// Outside the crate, results are built through [`pass`](Self::pass)
    /// and [`fail`](Self::fail) so a match always echoes `actual`.
    pub(crate) fn new(matched: bool, actual: Value, expected: Value) -> Self {
        Self {
            matched,
            actual,
            expected,
        }
    }

    /// A successful match: the diagnostic mirrors the actual value.
    pub fn pass(actual: Value) -> Self {
        let expected = actual.clone();
        Self::new(true, actual, expected)
    }

    pub fn fail(actual: Value, expected: Value) -> Self {
        Self::new(false, actual, expected)
    }

    #[inline]
    pub fn is_match(&self) -> bool {
        self.matched
    }

    #[inline]
    pub fn actual(&self) -> &Value {
        &self.actual
    }

    #[inline]
    pub fn expected(&self) -> &Value {
        &self.expected
    }

    /// Decompose into `(match, actual, expected)`.
    pub fn into_parts(self) -> (bool, Value, Value) {
        (self.matched, self.actual, self.expected)
    }
}

/// Build a single-key diagnostic `{ marker: value }`.
pub(crate) fn marked(marker: &str, value: Value) -> Value {
    let mut map = Map::with_capacity(1);
    map.insert(marker.to_string(), value);
    Value::Object(map)
}
