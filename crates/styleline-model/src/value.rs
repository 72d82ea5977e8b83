//! Style values: the `inherit` sentinel and opaque concrete payloads.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// The reserved keyword that marks a value as deferred to ancestors.
pub const INHERIT_KEYWORD: &str = "inherit";

/// A value set for a property on one node.
///
/// The resolver only ever looks at the discriminator: a value is either the
/// `inherit` sentinel ("nothing set here, defer to my own ancestors") or a
/// concrete payload that is carried through untouched.
///
/// # Example
///
/// ```rust
/// use styleline_model::StyleValue;
///
/// let red = StyleValue::from("red");
/// assert!(!red.is_inherit());
///
/// // The sentinel keyword converts to the sentinel variant.
/// let deferred = StyleValue::from("inherit");
/// assert!(deferred.is_inherit());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// Explicitly defer to the nearest ancestor's concrete value.
    Inherit,
    /// A concrete value. The payload is opaque to the resolver.
    Concrete(serde_json::Value),
}

impl StyleValue {
    /// Returns true for the `inherit` sentinel.
    pub fn is_inherit(&self) -> bool {
        matches!(self, StyleValue::Inherit)
    }

    /// The concrete payload, if this is not the sentinel.
    pub fn as_concrete(&self) -> Option<&serde_json::Value> {
        match self {
            StyleValue::Inherit => None,
            StyleValue::Concrete(value) => Some(value),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(raw: &str) -> Self {
        if raw == INHERIT_KEYWORD {
            StyleValue::Inherit
        } else {
            StyleValue::Concrete(serde_json::Value::String(raw.to_string()))
        }
    }
}

impl From<String> for StyleValue {
    fn from(raw: String) -> Self {
        StyleValue::from(raw.as_str())
    }
}

impl From<serde_json::Value> for StyleValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) if s == INHERIT_KEYWORD => StyleValue::Inherit,
            other => StyleValue::Concrete(other),
        }
    }
}

// Wire form: the sentinel is the bare string "inherit"; everything else is
// the concrete payload as-is.
impl Serialize for StyleValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StyleValue::Inherit => serializer.serialize_str(INHERIT_KEYWORD),
            StyleValue::Concrete(value) => value.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for StyleValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(StyleValue::from(raw))
    }
}
