//! What a custom predicate may return, and how it becomes a [`MatchResult`].

use super::TypeTag;
use crate::error::MatchError;
use crate::result::{marked, MatchResult, CUSTOM_MARKER};
use serde_json::Value;
use tracing::warn;

/// The three return shapes a predicate may produce.
#[derive(Debug, Clone, PartialEq)]
pub enum PredicateOutcome {
    /// Plain verdict with no diagnostic.
    Bool(bool),

    /// Verdict with an optional diagnostic of the predicate's own choosing.
    /// The diagnostic is discarded when `matched` is true.
    Partial {
        matched: bool,
        expected: Option<Value>,
    },

    /// The full result of another matcher the predicate delegated to.
    Result(MatchResult),
}

impl PredicateOutcome {
    pub fn partial(matched: bool, expected: Value) -> Self {
        PredicateOutcome::Partial {
            matched,
            expected: Some(expected),
        }
    }

    /// Normalize into the custom matcher's result for `actual`.
    ///
    /// A match always echoes `actual`. A bare rejection yields the `[custom]`
    /// marker string; a rejection with a diagnostic `E` yields
    /// `{"[custom]": E}`.
    pub(crate) fn normalize(self, actual: &Value) -> MatchResult {
        let rejected_with = match self {
            PredicateOutcome::Bool(true) | PredicateOutcome::Partial { matched: true, .. } => {
                return MatchResult::pass(actual.clone());
            }
            PredicateOutcome::Result(inner) if inner.is_match() => {
                return MatchResult::pass(actual.clone());
            }
            PredicateOutcome::Bool(false) | PredicateOutcome::Partial { expected: None, .. } => {
                None
            }
            PredicateOutcome::Partial {
                expected: Some(expected),
                ..
            } => Some(expected),
            PredicateOutcome::Result(inner) => Some(inner.into_parts().2),
        };

        let expected = match rejected_with {
            Some(diagnostic) => marked(CUSTOM_MARKER, diagnostic),
            None => Value::String(CUSTOM_MARKER.to_string()),
        };
        MatchResult::fail(actual.clone(), expected)
    }
}

impl From<bool> for PredicateOutcome {
    fn from(matched: bool) -> Self {
        PredicateOutcome::Bool(matched)
    }
}

impl From<MatchResult> for PredicateOutcome {
    fn from(result: MatchResult) -> Self {
        PredicateOutcome::Result(result)
    }
}

/// Classify a dynamically shaped predicate return value.
///
/// - `true` / `false` -> `Bool`
/// - `{"match": bool, "actual": .., "expected": ..}` -> `Result`
/// - `{"match": bool}` or `{"match": bool, "expected": ..}` -> `Partial`
///
/// Anything else is a configuration error.
impl TryFrom<Value> for PredicateOutcome {
    type Error = MatchError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let mut fields = match value {
            Value::Bool(matched) => return Ok(PredicateOutcome::Bool(matched)),
            Value::Object(fields) => fields,
            other => {
                return Err(invalid(format!(
                    "expected a boolean or a match object, got {}",
                    TypeTag::of(&other)
                )))
            }
        };

        let matched = match fields.get("match") {
            Some(Value::Bool(matched)) => *matched,
            Some(other) => {
                return Err(invalid(format!(
                    "`match` must be a boolean, got {}",
                    TypeTag::of(other)
                )))
            }
            None => return Err(invalid("object has no `match` field".to_string())),
        };

        if let Some(key) = fields
            .keys()
            .find(|key| !matches!(key.as_str(), "match" | "actual" | "expected"))
        {
            return Err(invalid(format!("unexpected field `{key}`")));
        }

        match (fields.remove("actual"), fields.remove("expected")) {
            (Some(actual), Some(expected)) => Ok(PredicateOutcome::Result(MatchResult::new(
                matched, actual, expected,
            ))),
            (Some(_), None) => Err(invalid(
                "object has `actual` but no `expected` field".to_string(),
            )),
            (None, expected) => Ok(PredicateOutcome::Partial { matched, expected }),
        }
    }
}

fn invalid(reason: String) -> MatchError {
    warn!(%reason, "unrecognized predicate outcome");
    MatchError::InvalidOutcome(reason)
}
