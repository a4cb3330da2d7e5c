//! Comparable identifiers for text fields.
//!
//! Fields are identified either by a raw attribute string or by a serialized
//! structured token (a JSON object such as `{"type":"textarea","id":"a"}`).
//! Both forms reduce to an [`ElementKey`] holding the value that is actually
//! compared: the raw string, or the token's `id` field.

use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Why an identifier could not be turned into an [`ElementKey`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("malformed structured token: {reason}")]
    Malformed { reason: String },
    #[error("structured token has no `{field}` field")]
    MissingField { field: String },
}

/// The comparable part of a field identifier.
///
/// Two keys are equal when their underlying JSON values are equal, so the raw
/// identifier `a` and the token `{"id":"a"}` resolve to the same key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementKey(Value);

impl ElementKey {
    /// Derive a key from an attribute value or a host-supplied string.
    ///
    /// Strings that start with `{` (after trimming) are treated as structured
    /// tokens and must parse as a JSON object carrying `field`. Every other
    /// string is a raw identifier and is used verbatim.
    pub fn parse(raw: &str, field: &str) -> Result<Self, KeyError> {
        if !looks_like_token(raw) {
            return Ok(Self(Value::String(raw.to_string())));
        }

        let value: Value = serde_json::from_str(raw).map_err(|err| KeyError::Malformed {
            reason: err.to_string(),
        })?;
        Self::from_token(value, field)
    }

    /// Derive a key from an already decoded value.
    ///
    /// Objects contribute their `field` member. If that member is itself an
    /// object (a whole structured id nested inside a props object), its
    /// `field` member is used instead; deeper nesting is rejected.
    pub fn from_value(value: Value, field: &str) -> Result<Self, KeyError> {
        match value {
            Value::String(s) => Self::parse(&s, field),
            Value::Object(_) => {
                let inner = take_field(value, field)?;
                match inner {
                    Value::Object(_) => Self::from_token(inner, field),
                    Value::String(s) => Self::parse(&s, field),
                    other => scalar(other),
                }
            }
            other => scalar(other),
        }
    }

    /// The compared value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    fn from_token(value: Value, field: &str) -> Result<Self, KeyError> {
        if !value.is_object() {
            return Err(KeyError::Malformed {
                reason: "structured token is not an object".to_string(),
            });
        }
        scalar(take_field(value, field)?)
    }
}

impl fmt::Display for ElementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{other}"),
        }
    }
}

fn looks_like_token(raw: &str) -> bool {
    raw.trim_start().starts_with('{')
}

fn take_field(value: Value, field: &str) -> Result<Value, KeyError> {
    let Value::Object(mut map) = value else {
        return Err(KeyError::Malformed {
            reason: "expected an object".to_string(),
        });
    };
    map.remove(field).ok_or_else(|| KeyError::MissingField {
        field: field.to_string(),
    })
}

fn scalar(value: Value) -> Result<ElementKey, KeyError> {
    match value {
        Value::String(_) | Value::Number(_) | Value::Bool(_) => Ok(ElementKey(value)),
        Value::Null => Err(KeyError::Malformed {
            reason: "identifier is null".to_string(),
        }),
        Value::Array(_) | Value::Object(_) => Err(KeyError::Malformed {
            reason: "identifier is not a scalar".to_string(),
        }),
    }
}
