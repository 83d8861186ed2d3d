//! Type-tag matcher.

use super::Matcher;
use crate::comparator::Comparator;
use crate::error::MatchError;
use crate::result::{marked, MatchResult, TYPEOF_MARKER};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// Runtime type category of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl TypeTag {
    /// Category of `value`.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => TypeTag::Null,
            Value::Bool(_) => TypeTag::Boolean,
            Value::Number(_) => TypeTag::Number,
            Value::String(_) => TypeTag::String,
            Value::Array(_) => TypeTag::Array,
            Value::Object(_) => TypeTag::Object,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::Null => "null",
            TypeTag::Boolean => "boolean",
            TypeTag::Number => "number",
            TypeTag::String => "string",
            TypeTag::Array => "array",
            TypeTag::Object => "object",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeTag {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "null" => Ok(TypeTag::Null),
            "boolean" => Ok(TypeTag::Boolean),
            "number" => Ok(TypeTag::Number),
            "string" => Ok(TypeTag::String),
            "array" => Ok(TypeTag::Array),
            "object" => Ok(TypeTag::Object),
            other => Err(MatchError::UnknownTypeTag(other.to_string())),
        }
    }
}

/// Matches values whose runtime category equals a declared tag.
///
/// The comparator is ignored: categories are always checked directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMatcher {
    tag: TypeTag,
}

impl TypeMatcher {
    pub fn new(tag: TypeTag) -> Self {
        Self { tag }
    }

    pub fn tag(&self) -> TypeTag {
        self.tag
    }
}

impl Matcher for TypeMatcher {
    fn evaluate(
        &self,
        actual: &Value,
        _comparator: Option<&dyn Comparator>,
    ) -> Result<MatchResult, MatchError> {
        let found = TypeTag::of(actual);
        if found == self.tag {
            return Ok(MatchResult::pass(actual.clone()));
        }
        trace!(expected = %self.tag, found = %found, "type tag mismatch");
        Ok(MatchResult::fail(
            actual.clone(),
            marked(TYPEOF_MARKER, Value::String(self.tag.as_str().to_string())),
        ))
    }
}

/// Build a type-tag matcher from a tag name such as `"string"`.
pub fn type_of(tag: &str) -> Result<TypeMatcher, MatchError> {
    Ok(TypeMatcher::new(tag.parse()?))
}
