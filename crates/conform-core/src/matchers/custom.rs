//! Custom matcher: the composition root.
//!
//! A custom matcher is built once from either a plain value (structural mode)
//! or a predicate (delegated mode). Predicates may return a boolean, a partial
//! result, or another matcher's full result; all three are normalized by
//! [`PredicateOutcome`].

use super::{Matcher, PredicateOutcome};
use crate::comparator::{resolve, Comparator};
use crate::error::MatchError;
use crate::result::MatchResult;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// A user predicate. Receives the actual value and the caller's comparator,
/// if one was supplied.
pub type Predicate = Arc<
    dyn Fn(&Value, Option<&dyn Comparator>) -> anyhow::Result<PredicateOutcome> + Send + Sync,
>;

/// Wrap a closure as a [`Predicate`].
pub fn predicate_fn<F>(f: F) -> Predicate
where
    F: Fn(&Value, Option<&dyn Comparator>) -> anyhow::Result<PredicateOutcome>
        + Send
        + Sync
        + 'static,
{
    Arc::new(f)
}

/// Turn a matcher into a predicate that forwards `(actual, comparator)` to it.
pub fn delegate<M>(matcher: Arc<M>) -> Predicate
where
    M: Matcher + ?Sized + 'static,
{
    predicate_fn(move |actual, comparator| {
        Ok(PredicateOutcome::Result(matcher.evaluate(actual, comparator)?))
    })
}

/// What a custom matcher was built from.
#[derive(Clone)]
pub enum CustomSpec {
    /// Compare `actual` field by field against this value.
    Structural(Value),
    /// Hand `actual` to a predicate and normalize what it returns.
    Predicate(Predicate),
}

impl fmt::Debug for CustomSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomSpec::Structural(value) => f.debug_tuple("Structural").field(value).finish(),
            CustomSpec::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl From<Value> for CustomSpec {
    fn from(value: Value) -> Self {
        CustomSpec::Structural(value)
    }
}

impl From<Predicate> for CustomSpec {
    fn from(predicate: Predicate) -> Self {
        CustomSpec::Predicate(predicate)
    }
}

/// Matcher over a structural pattern or a user predicate.
#[derive(Debug, Clone)]
pub struct CustomMatcher {
    spec: CustomSpec,
}

impl CustomMatcher {
    pub fn new(spec: impl Into<CustomSpec>) -> Self {
        Self { spec: spec.into() }
    }

    pub fn structural(pattern: Value) -> Self {
        Self::new(CustomSpec::Structural(pattern))
    }

    /// Delegated mode over a fallible predicate returning anything that
    /// converts into a [`PredicateOutcome`] (`bool`, `MatchResult`, or the
    /// outcome itself).
    pub fn predicate<F, O>(f: F) -> Self
    where
        F: Fn(&Value, Option<&dyn Comparator>) -> anyhow::Result<O> + Send + Sync + 'static,
        O: Into<PredicateOutcome>,
    {
        Self::new(predicate_fn(move |actual, comparator| {
            f(actual, comparator).map(Into::into)
        }))
    }

    /// Delegated mode over a plain boolean check.
    pub fn satisfies<F>(f: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self::new(predicate_fn(move |actual, _| {
            Ok(PredicateOutcome::Bool(f(actual)))
        }))
    }

    /// Delegated mode over a predicate whose return shape is only known at
    /// run time. Each returned value is classified with
    /// `PredicateOutcome::try_from`; unrecognized shapes fail with
    /// [`MatchError::InvalidOutcome`].
    pub fn dynamic<F>(f: F) -> Self
    where
        F: Fn(&Value, Option<&dyn Comparator>) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        Self::new(predicate_fn(move |actual, comparator| {
            let raw = f(actual, comparator)?;
            Ok(PredicateOutcome::try_from(raw)?)
        }))
    }

    pub fn spec(&self) -> &CustomSpec {
        &self.spec
    }
}

impl Matcher for CustomMatcher {
    fn evaluate(
        &self,
        actual: &Value,
        comparator: Option<&dyn Comparator>,
    ) -> Result<MatchResult, MatchError> {
        match &self.spec {
            CustomSpec::Structural(pattern) => {
                Ok(match_structural(pattern, actual, resolve(comparator)))
            }
            CustomSpec::Predicate(predicate) => {
                let outcome = predicate(actual, comparator).map_err(MatchError::from_predicate)?;
                let result = outcome.normalize(actual);
                if !result.is_match() {
                    debug!(kind = "custom", "predicate rejected value");
                }
                Ok(result)
            }
        }
    }
}

static MISSING: Value = Value::Null;

/// Walk the fields (or elements) of `actual`, comparing each against the
/// same position in `pattern`. Matching positions echo the actual value and
/// mismatching ones show the pattern's value. Positions absent from the
/// pattern compare against `null`.
fn match_structural(pattern: &Value, actual: &Value, comparator: &dyn Comparator) -> MatchResult {
    let (matched, diagnostic) = match actual {
        Value::Object(fields) => {
            let mut matched = true;
            let mut diagnostic = Map::with_capacity(fields.len());
            for (key, value) in fields {
                let expected = pattern.get(key.as_str()).unwrap_or(&MISSING);
                let equal = comparator.compare(value, expected);
                trace!(field = %key, equal, "custom field compared");
                matched &= equal;
                let shown = if equal { value } else { expected };
                diagnostic.insert(key.clone(), shown.clone());
            }
            (matched, Value::Object(diagnostic))
        }
        Value::Array(items) => {
            let mut matched = true;
            let mut diagnostic = Vec::with_capacity(items.len());
            for (index, value) in items.iter().enumerate() {
                let expected = pattern.get(index).unwrap_or(&MISSING);
                let equal = comparator.compare(value, expected);
                trace!(index, equal, "custom element compared");
                matched &= equal;
                diagnostic.push(if equal { value } else { expected }.clone());
            }
            (matched, Value::Array(diagnostic))
        }
        leaf => {
            let equal = comparator.compare(leaf, pattern);
            (equal, if equal { leaf } else { pattern }.clone())
        }
    };

    if matched {
        MatchResult::pass(actual.clone())
    } else {
        debug!(kind = "custom", "structural pattern mismatch");
        MatchResult::fail(actual.clone(), diagnostic)
    }
}

/// Build a custom matcher from a plain value or a [`Predicate`].
pub fn custom(spec: impl Into<CustomSpec>) -> CustomMatcher {
    CustomMatcher::new(spec)
}
