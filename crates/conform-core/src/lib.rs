//! Composable structural matchers for assertion libraries.
//!
//! Every matcher answers one question, "does this actual value satisfy my
//! pattern?", and returns a [`MatchResult`] carrying the untouched actual value
//! plus a diagnostic `expected` value shaped for human-readable diffs.
//!
//! # Design Goals
//!
//! 1. **Uniform contract**: all matcher kinds implement [`Matcher`]
//! 2. **Pluggable equality**: composite matchers thread a [`Comparator`] down
//!    to their leaves, defaulting to [`DeepEqual`]
//! 3. **Stable diagnostics**: mismatches are tagged with the `[typeof]` and
//!    `[custom]` marker keys that downstream diff renderers understand
//!
//! # Module Structure
//!
//! - `comparator` - Leaf equality (`Comparator`, `DeepEqual`, `LooseEqual`)
//! - `result` - The `MatchResult` wire shape and marker constants
//! - `error` - `MatchError` (configuration vs. propagated predicate errors)
//! - `matchers` - Type-tag, array-of and custom matchers
//! - `pattern` - Declarative pattern documents compiled into matchers
//!
//! # Example
//!
//! ```
//! use conform_core::{type_of, CustomMatcher, Matcher, MatchResult};
//! use serde_json::json;
//!
//! let matcher = CustomMatcher::satisfies(|actual| actual["a"] == json!(5));
//! let result = matcher.evaluate(&json!({"a": 5, "b": 10}), None).unwrap();
//! assert!(result.is_match());
//!
//! let strings = type_of("string").unwrap();
//! let result = strings.evaluate(&json!(5), None).unwrap();
//! assert_eq!(result, MatchResult::fail(json!(5), json!({"[typeof]": "string"})));
//! ```

pub mod comparator;
pub mod error;
pub mod matchers;
pub mod pattern;
pub mod result;

pub use comparator::{
    deep_equals, loose_equals, Comparator, DeepEqual, LooseEqual, DEFAULT_COMPARATOR,
};
pub use error::MatchError;
pub use matchers::{
    array_of, custom, delegate, predicate_fn, type_of, ArrayOfMatcher, CustomMatcher, CustomSpec,
    Matcher, Predicate, PredicateOutcome, TypeMatcher, TypeTag,
};
pub use pattern::PatternSpec;
pub use result::{MatchResult, CUSTOM_MARKER, TYPEOF_MARKER};
