//! Declarative pattern documents.
//!
//! Patterns can be written as JSON or YAML and compiled into matchers:
//!
//! ```yaml
//! typeOf: string          # type-tag matcher
//! ```
//! ```yaml
//! arrayOf: 1              # array-of matcher
//! ```
//! ```yaml
//! name: alice             # anything else: structural custom matcher
//! age: 30
//! ```

use crate::error::MatchError;
use crate::matchers::{type_of, ArrayOfMatcher, CustomMatcher, Matcher, TypeTag};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A pattern as it appears in a document, before compilation.
///
/// An object whose only key is `typeOf` or `arrayOf` is a directive; a
/// `typeOf` directive whose value is not a string is rejected rather than
/// read as a structural pattern. Every other value is structural.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", try_from = "Value")]
pub enum PatternSpec {
    /// Value must have this runtime type category
    TypeOf(String),

    /// Every element of the sequence must equal this value
    ArrayOf(Value),

    /// Structural pattern compared field by field
    #[serde(untagged)]
    Value(Value),
}

impl TryFrom<Value> for PatternSpec {
    type Error = MatchError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let directive = match &value {
            Value::Object(fields) if fields.len() == 1 => fields.iter().next(),
            _ => None,
        };
        match directive {
            Some((key, Value::String(tag))) if key == "typeOf" => {
                Ok(PatternSpec::TypeOf(tag.clone()))
            }
            Some((key, other)) if key == "typeOf" => Err(MatchError::Pattern(format!(
                "`typeOf` must be a string, got {}",
                TypeTag::of(other)
            ))),
            Some((key, pattern)) if key == "arrayOf" => Ok(PatternSpec::ArrayOf(pattern.clone())),
            _ => Ok(PatternSpec::Value(value)),
        }
    }
}

impl PatternSpec {
    /// Parse a JSON pattern document.
    pub fn from_json_str(input: &str) -> Result<Self, MatchError> {
        serde_json::from_str(input).map_err(|e| MatchError::Pattern(e.to_string()))
    }

    /// Parse a YAML pattern document.
    pub fn from_yaml_str(input: &str) -> Result<Self, MatchError> {
        serde_yaml::from_str(input).map_err(|e| MatchError::Pattern(e.to_string()))
    }

    /// Compile into a runtime matcher. Type tags are validated here.
    pub fn compile(&self) -> Result<Box<dyn Matcher>, MatchError> {
        match self {
            PatternSpec::TypeOf(tag) => Ok(Box::new(type_of(tag)?)),
            PatternSpec::ArrayOf(pattern) => Ok(Box::new(ArrayOfMatcher::new(pattern.clone()))),
            PatternSpec::Value(pattern) => Ok(Box::new(CustomMatcher::structural(pattern.clone()))),
        }
    }
}
