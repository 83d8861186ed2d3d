//! Matcher kinds and the contract they share.
//!
//! - `type_of` - Leaf matcher on a value's runtime type category
//! - `array_of` - Every element of a sequence equals one pattern
//! - `custom` - Structural object pattern or user predicate
//! - `outcome` - Normalization of predicate return values

mod array_of;
mod custom;
mod outcome;
mod type_of;

use crate::comparator::Comparator;
use crate::error::MatchError;
use crate::result::MatchResult;
use serde_json::Value;
use std::fmt;

pub use array_of::{array_of, ArrayOfMatcher};
pub use custom::{custom, delegate, predicate_fn, CustomMatcher, CustomSpec, Predicate};
pub use outcome::PredicateOutcome;
pub use type_of::{type_of, TypeMatcher, TypeTag};

/// A reusable, immutable pattern check.
///
/// Implementations hold no mutable state and may be shared across threads.
pub trait Matcher: Send + Sync + fmt::Debug {
    /// Evaluate `actual` against this matcher's pattern.
    ///
    /// `comparator` is the leaf equality used by composite matchers; `None`
    /// selects [`DEFAULT_COMPARATOR`](crate::DEFAULT_COMPARATOR). A mismatch
    /// is reported through the returned [`MatchResult`], never as an error.
    fn evaluate(
        &self,
        actual: &Value,
        comparator: Option<&dyn Comparator>,
    ) -> Result<MatchResult, MatchError>;
}
