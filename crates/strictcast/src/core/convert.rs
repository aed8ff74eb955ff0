//! Conversion from decoded JSON into Value
//!
//! The collection cast parses candidate JSON text with `serde_json`; this
//! module maps the decoded tree into the crate's own model. The mapping is
//! total: every JSON value has a representation here.

use crate::collections::{Array, Key};
use crate::core::value::Value;

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Boolean(b),
            serde_json::Value::Number(n) => number_to_value(&n),
            serde_json::Value::String(s) => Self::Text(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Self::Array(
                map.into_iter()
                    .map(|(k, v)| (Key::Name(k), Value::from(v)))
                    .collect::<Array>(),
            ),
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(json: &serde_json::Value) -> Self {
        Self::from(json.clone())
    }
}

/// JSON numbers that fit i64 stay integers; anything larger or fractional
/// becomes a float, the way a permissive JSON decoder widens big literals.
fn number_to_value(n: &serde_json::Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::Integer(i)
    } else if let Some(f) = n.as_f64() {
        Value::Float(f)
    } else {
        Value::Null
    }
}
