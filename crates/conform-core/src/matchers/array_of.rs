//! Array-of-pattern matcher.

use super::{Matcher, TypeTag};
use crate::comparator::{resolve, Comparator};
use crate::error::MatchError;
use crate::result::MatchResult;
use serde_json::Value;
use tracing::{debug, trace};

/// Matches sequences whose every element equals a single element pattern
/// under the active comparator.
///
/// On failure the diagnostic is the ideal sequence: `pattern` repeated once
/// per element of the actual sequence. A non-sequence actual value fails with
/// a one-element sequence holding the pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayOfMatcher {
    pattern: Value,
}

impl ArrayOfMatcher {
    pub fn new(pattern: Value) -> Self {
        Self { pattern }
    }

    pub fn pattern(&self) -> &Value {
        &self.pattern
    }
}

impl Matcher for ArrayOfMatcher {
    fn evaluate(
        &self,
        actual: &Value,
        comparator: Option<&dyn Comparator>,
    ) -> Result<MatchResult, MatchError> {
        let comparator = resolve(comparator);

        let Some(items) = actual.as_array() else {
            debug!(
                kind = "arrayOf",
                found = %TypeTag::of(actual),
                "rejected non-array value"
            );
            return Ok(MatchResult::fail(
                actual.clone(),
                Value::Array(vec![self.pattern.clone()]),
            ));
        };

        let matched = items.iter().enumerate().all(|(index, item)| {
            let equal = comparator.compare(item, &self.pattern);
            trace!(index, equal, "arrayOf element compared");
            equal
        });

        if matched {
            return Ok(MatchResult::pass(actual.clone()));
        }
        debug!(kind = "arrayOf", len = items.len(), "element did not match pattern");
        Ok(MatchResult::fail(
            actual.clone(),
            Value::Array(vec![self.pattern.clone(); items.len()]),
        ))
    }
}

/// Build an array-of matcher for `pattern`.
pub fn array_of(pattern: Value) -> ArrayOfMatcher {
    ArrayOfMatcher::new(pattern)
}
