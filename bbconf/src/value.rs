//! Config values and the key→value map edited by callers.
//!
//! [`ConfigValue`] is a tagged JSON value. Conversions to and from
//! `serde_json::Value` are lossless, including object key order.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Number;

use crate::error::{Error, Result};

/// Ordered mapping from `$`-prefixed key name to value.
pub type ConfigData = IndexMap<String, ConfigValue>;

/// A JSON value as held in [`ConfigData`].
///
/// # Examples
///
/// ```
/// use bbconf::ConfigValue;
///
/// let value = ConfigValue::from(serde_json::json!([1, "two", null]));
/// assert_eq!(value.encode(), r#"[1,"two",null]"#);
/// assert_eq!(ConfigValue::Bool(false).encode(), "false");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    /// JSON `null`.
    Null,
    /// `true` or `false`.
    Bool(bool),
    /// Any JSON number, kept in its parsed textual form.
    Number(Number),
    /// A string (stored unescaped).
    String(String),
    /// Ordered array of values.
    Array(Vec<ConfigValue>),
    /// Ordered mapping of string to value.
    Object(IndexMap<String, ConfigValue>),
}

impl ConfigValue {
    /// Short name of the value's kind, used in messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    /// Whether this is a scalar (anything but an array or object).
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        !matches!(self, Self::Array(_) | Self::Object(_))
    }

    /// Text used for this value on a serialized key line.
    ///
    /// Arrays and objects become compact JSON. Strings are wrapped in double
    /// quotes with their contents copied verbatim (no escaping).
    #[must_use]
    pub fn encode(&self) -> String {
        match self {
            Self::Null => "null".to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => n.to_string(),
            Self::String(s) => format!("\"{s}\""),
            Self::Array(_) | Self::Object(_) => serde_json::Value::from(self.clone()).to_string(),
        }
    }

    /// The value as bare text: strings without quotes, everything else
    /// encoded.
    #[must_use]
    pub fn to_plain_string(&self) -> String {
        match self {
            Self::String(s) => s.clone(),
            other => other.encode(),
        }
    }

    /// Parses user input into a value of the same kind as `self`.
    ///
    /// This is what an input widget does: a toggle yields a boolean, a
    /// number box a number, a text box a string. `null` accepts any JSON
    /// scalar literal and falls back to a string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotALeaf`] if `self` is an array or object and
    /// [`Error::InvalidValue`] if the input does not fit the kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use bbconf::ConfigValue;
    ///
    /// let current = ConfigValue::Bool(true);
    /// assert_eq!(current.coerce("$weapon_hud", "false").unwrap(), ConfigValue::Bool(false));
    /// assert!(current.coerce("$weapon_hud", "5").is_err());
    /// ```
    pub fn coerce(&self, key: &str, input: &str) -> Result<Self> {
        let invalid = || Error::InvalidValue {
            key: key.to_string(),
            expected: self.kind(),
            input: input.to_string(),
        };
        match self {
            Self::Bool(_) => match input.trim() {
                "true" => Ok(Self::Bool(true)),
                "false" => Ok(Self::Bool(false)),
                _ => Err(invalid()),
            },
            Self::Number(_) => match serde_json::from_str::<serde_json::Value>(input.trim()) {
                Ok(serde_json::Value::Number(n)) => Ok(Self::Number(n)),
                _ => Err(invalid()),
            },
            Self::String(_) => Ok(Self::String(input.to_string())),
            Self::Null => match serde_json::from_str::<serde_json::Value>(input.trim()) {
                Ok(v @ (serde_json::Value::Null
                | serde_json::Value::Bool(_)
                | serde_json::Value::Number(_)
                | serde_json::Value::String(_))) => Ok(v.into()),
                _ => Ok(Self::String(input.to_string())),
            },
            Self::Array(_) | Self::Object(_) => Err(Error::NotALeaf {
                key: key.to_string(),
            }),
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl From<serde_json::Value> for ConfigValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Number(n),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl From<ConfigValue> for serde_json::Value {
    fn from(value: ConfigValue) -> Self {
        match value {
            ConfigValue::Null => Self::Null,
            ConfigValue::Bool(b) => Self::Bool(b),
            ConfigValue::Number(n) => Self::Number(n),
            ConfigValue::String(s) => Self::String(s),
            ConfigValue::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            ConfigValue::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl Serialize for ConfigValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Number(n) => n.serialize(serializer),
            Self::String(s) => serializer.serialize_str(s),
            Self::Array(items) => items.serialize(serializer),
            Self::Object(map) => map.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ConfigValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Self::from)
    }
}
