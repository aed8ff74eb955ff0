//! Collection cast
//!
//! `Value::to_array` converts a dynamic value into an [`Array`]. Text that
//! looks like JSON (first non-space character `{` or `[`) is decoded; when
//! the decode fails the failure is absorbed and the raw text is wrapped
//! instead. This is the one place in the crate where a failure is
//! deliberately swallowed.

use tracing::trace;

use crate::collections::{Array, Key};
use crate::core::object::ObjectValue;
use crate::core::value::Value;
use crate::error::{CastError, CastResult};

impl Value {
    /// Convert this value to an ordered keyed collection.
    ///
    /// # Examples
    ///
    /// ```
    /// use strictcast::Value;
    ///
    /// let arr = Value::text(r#"{"a": 1}"#).to_array().unwrap();
    /// assert_eq!(arr.get_name("a"), Some(&Value::integer(1)));
    ///
    /// let wrapped = Value::text("{not json").to_array().unwrap();
    /// assert_eq!(wrapped.get_index(0), Some(&Value::text("{not json")));
    /// ```
    pub fn to_array(&self) -> CastResult<Array> {
        match self {
            Self::Array(a) => Ok(a.clone()),
            Self::Null => Ok(Array::new()),
            Self::Text(t) => Ok(text_to_array(t)),
            Self::Object(o) => Ok(object_to_array(o.as_ref())),
            Self::Boolean(_) | Self::Integer(_) | Self::Float(_) => {
                Ok(std::iter::once(self.clone()).collect())
            }
            Self::Resource(_) => Err(CastError::unsupported(self.kind(), "array")),
        }
    }
}

fn text_to_array(text: &str) -> Array {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Array::new();
    }

    if trimmed.starts_with(['{', '[']) {
        match serde_json::from_str::<serde_json::Value>(trimmed) {
            Ok(decoded) => {
                if let Value::Array(array) = Value::from(decoded) {
                    return array;
                }
                // decoded to a JSON scalar: not a collection after all
            }
            Err(error) => {
                trace!(%error, "text looked like JSON but did not parse, wrapping raw text");
            }
        }
    }

    std::iter::once(Value::text(text)).collect()
}

/// The three-tier object strategy: iteration, then structured export, then
/// public field reflection. First applicable capability wins.
fn object_to_array(object: &dyn ObjectValue) -> Array {
    if let Some(entries) = object.entries() {
        return entries.into_iter().collect();
    }

    if let Some(exported) = object.export() {
        match exported {
            Value::Array(array) => return array,
            // a non-collection export falls through to field reflection
            _ => trace!(
                class = object.class_name(),
                "structured export returned a non-collection, reflecting fields"
            ),
        }
    }

    object
        .fields()
        .into_iter()
        .map(|(name, value)| (Key::Name(name), value))
        .collect()
}
