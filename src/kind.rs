//! Value kinds: the type-hint vocabulary for dynamic setting values
//!
//! Settings frameworks that store values as `serde_json::Value` describe a
//! setting's expected shape with a [`ValueKind`]. Numbers split into
//! `Integer` and `Float` so that type checks can distinguish exact matches
//! from the one widening relation this crate recognizes (an integer is
//! acceptable where a float is expected, in loose mode).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kind of a dynamic setting value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// JSON null
    Null,
    /// Boolean toggle
    Bool,
    /// Whole number (fits i64/u64)
    Integer,
    /// Floating-point number
    Float,
    /// Text
    String,
    /// List of values
    Array,
    /// Nested object
    Object,
}

impl ValueKind {
    /// Classify a value.
    ///
    /// Numbers are `Integer` when the underlying representation is integral,
    /// `Float` otherwise.
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(n) => {
                if n.is_i64() || n.is_u64() {
                    ValueKind::Integer
                } else {
                    ValueKind::Float
                }
            }
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    /// Loose compatibility: does a value of kind `actual` satisfy an
    /// expectation of `self`?
    ///
    /// Every kind accepts itself; `Float` additionally accepts `Integer`.
    /// There are no other implicit relations (`Bool` is not a number).
    #[must_use]
    pub fn accepts(self, actual: ValueKind) -> bool {
        self == actual || (self == ValueKind::Float && actual == ValueKind::Integer)
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Tests
// =============================================================================
