//! Error types for matcher construction and evaluation.
//!
//! A failed match is not an error; it is an ordinary [`MatchResult`] with
//! `match: false`. Errors are reserved for malformed patterns and for
//! failures raised inside user-supplied predicates.
//!
//! [`MatchResult`]: crate::MatchResult

/// Errors raised while building or evaluating matchers.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("Unknown type tag: {0}")]
    UnknownTypeTag(String),

    #[error("Predicate returned an unrecognized outcome: {0}")]
    InvalidOutcome(String),

    #[error("Invalid pattern document: {0}")]
    Pattern(String),

    /// An error raised by a user predicate, passed through untouched.
    #[error(transparent)]
    Predicate(anyhow::Error),
}

impl MatchError {
    /// Whether this error means the pattern itself is malformed, as opposed
    /// to a failure raised by user code during evaluation.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            MatchError::UnknownTypeTag(_) | MatchError::InvalidOutcome(_) | MatchError::Pattern(_)
        )
    }

    /// Wrap an error returned by a predicate.
    ///
    /// A predicate that delegates to another matcher may bubble up that
    /// matcher's own `MatchError`; a bare one is surfaced as the original
    /// variant. An error carrying context is kept whole, context included.
    pub(crate) fn from_predicate(err: anyhow::Error) -> Self {
        if err.chain().count() > 1 {
            return MatchError::Predicate(err);
        }
        match err.downcast::<MatchError>() {
            Ok(inner) => inner,
            Err(err) => MatchError::Predicate(err),
        }
    }
}
