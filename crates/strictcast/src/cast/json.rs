//! JSON cast
//!
//! `Value::to_json` converts a dynamic value into JSON text. The cast
//! accepts encoding options ([`JsonOptions`]) and a maximum nesting depth;
//! every failure of the underlying writer is caught and re-raised as a
//! [`CastError`](crate::CastError) with cast-level context, never as a raw
//! encoder error.

use tracing::trace;

use crate::cast::encoder::{self, EncodeError};
use crate::core::value::Value;
use crate::error::{CastError, CastResult};

/// Options for the JSON cast.
///
/// Defaults follow the cast's contract: forward slashes and non-ASCII text
/// are written verbatim, output is compact, and nesting is limited to
/// [`JsonOptions::DEFAULT_MAX_DEPTH`] levels.
///
/// # Examples
///
/// ```
/// use strictcast::{JsonOptions, Value};
///
/// let value: Value = vec![Value::text("a/b")].into();
/// assert_eq!(value.to_json().unwrap(), r#"["a/b"]"#);
///
/// let escaped = value
///     .to_json_with(&JsonOptions::default().with_escape_slashes(true))
///     .unwrap();
/// assert_eq!(escaped, r#"["a\/b"]"#);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonOptions {
    /// Escape `/` as `\/`
    pub escape_slashes: bool,
    /// Escape non-ASCII text as `\uXXXX` sequences
    pub escape_unicode: bool,
    /// Pretty-print with 4-space indentation
    pub pretty: bool,
    /// Maximum nesting depth, must be at least 1
    pub max_depth: usize,
}

impl JsonOptions {
    /// Default maximum nesting depth.
    pub const DEFAULT_MAX_DEPTH: usize = 512;

    /// Create options with the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set slash escaping.
    #[must_use]
    pub const fn with_escape_slashes(mut self, escape: bool) -> Self {
        self.escape_slashes = escape;
        self
    }

    /// Set non-ASCII escaping.
    #[must_use]
    pub const fn with_escape_unicode(mut self, escape: bool) -> Self {
        self.escape_unicode = escape;
        self
    }

    /// Set pretty printing.
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Set the maximum nesting depth.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self {
            escape_slashes: false,
            escape_unicode: false,
            pretty: false,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

impl Value {
    /// Convert this value to JSON text with the default options.
    ///
    /// # Examples
    ///
    /// ```
    /// use strictcast::Value;
    ///
    /// assert_eq!(Value::Null.to_json().unwrap(), "null");
    /// let list: Value = vec![1.into(), 2.into(), 3.into()].into();
    /// assert_eq!(list.to_json().unwrap(), "[1,2,3]");
    /// assert!(Value::float(f64::NAN).to_json().is_err());
    /// ```
    pub fn to_json(&self) -> CastResult<String> {
        self.to_json_with(&JsonOptions::default())
    }

    /// Convert this value to JSON text under explicit options.
    pub fn to_json_with(&self, options: &JsonOptions) -> CastResult<String> {
        if options.max_depth < 1 {
            return Err(CastError::depth_too_small(options.max_depth));
        }

        match self {
            Self::Float(f) if f.is_nan() => Err(CastError::nan_to_json()),
            Self::Float(f) if f.is_infinite() => Err(CastError::infinity_to_json()),

            Self::Object(object) => {
                let (strategy, payload) =
                    encoder::resolve_object(object.as_ref()).map_err(|error| match error {
                        EncodeError::ExportNotCollection { class } => {
                            CastError::export_not_collection(&class)
                        }
                        other => CastError::encode_failed(self.kind(), other),
                    })?;
                trace!(
                    class = object.class_name(),
                    strategy = strategy.name(),
                    "encoding object to JSON"
                );
                encoder::encode(&payload, options).map_err(|error| {
                    CastError::encode_object_failed(strategy.name(), object.class_name(), error)
                })
            }

            Self::Resource(_) => Err(CastError::unsupported(self.kind(), "JSON")),

            data => encoder::encode(data, options)
                .map_err(|error| CastError::encode_failed(data.kind(), error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::{Array, Key};
    use crate::core::object::ObjectValue;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_null_encodes_as_literal() {
        assert_eq!(Value::Null.to_json().unwrap(), "null");
    }

    #[test]
    fn test_scalars_encode_directly() {
        assert_eq!(Value::boolean(false).to_json().unwrap(), "false");
        assert_eq!(Value::integer(42).to_json().unwrap(), "42");
        assert_eq!(Value::float(2.5).to_json().unwrap(), "2.5");
        assert_eq!(Value::text("hi").to_json().unwrap(), "\"hi\"");
    }

    #[test]
    fn test_list_and_keyed_collections() {
        let list: Value = vec![1.into(), 2.into(), 3.into()].into();
        assert_eq!(list.to_json().unwrap(), "[1,2,3]");

        let mut keyed = Array::new();
        keyed.insert(Key::from("a"), Value::integer(1));
        keyed.insert(Key::from("b"), Value::text("x"));
        assert_eq!(
            Value::Array(keyed).to_json().unwrap(),
            r#"{"a":1,"b":"x"}"#
        );
    }

    #[test]
    fn test_nan_and_infinity_fail() {
        let err = Value::float(f64::NAN).to_json().unwrap_err();
        assert!(err.to_string().contains("NAN"));

        let err = Value::float(f64::INFINITY).to_json().unwrap_err();
        assert!(err.to_string().contains("INF"));
        assert!(Value::float(f64::NEG_INFINITY).to_json().is_err());
    }

    #[test]
    fn test_depth_below_one_fails_immediately() {
        let options = JsonOptions::default().with_max_depth(0);
        let err = Value::integer(1).to_json_with(&options).unwrap_err();
        assert!(err.to_string().contains("Depth must be at least 1"));
        assert!(err.to_string().contains("got 0"));
    }

    #[test]
    fn test_depth_exhaustion_is_wrapped() {
        let inner: Value = vec![Value::integer(1)].into();
        let outer: Value = vec![inner].into();
        let options = JsonOptions::default().with_max_depth(1);

        let err = outer.to_json_with(&options).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to encode array to JSON: Maximum stack depth exceeded"
        );
    }

    #[test]
    fn test_nested_non_finite_float_is_wrapped() {
        let value: Value = vec![Value::float(f64::NAN)].into();
        let err = value.to_json().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to encode array to JSON: Inf and NaN cannot be JSON encoded"
        );
    }

    #[test]
    fn test_object_native_serialization_wins() {
        #[derive(Debug)]
        struct Wrapper;
        impl ObjectValue for Wrapper {
            fn class_name(&self) -> &str {
                "Wrapper"
            }
            fn json_value(&self) -> Option<Value> {
                Some(Value::text("custom"))
            }
            fn export(&self) -> Option<Value> {
                Some(Value::array_empty())
            }
            fn fields(&self) -> Vec<(String, Value)> {
                vec![("ignored".to_string(), Value::Null)]
            }
        }

        assert_eq!(Value::object(Wrapper).to_json().unwrap(), "\"custom\"");
    }

    #[test]
    fn test_object_export_second() {
        #[derive(Debug)]
        struct Exportable;
        impl ObjectValue for Exportable {
            fn class_name(&self) -> &str {
                "Exportable"
            }
            fn export(&self) -> Option<Value> {
                let mut array = Array::new();
                array.insert(Key::from("state"), Value::text("ready"));
                Some(Value::Array(array))
            }
        }

        assert_eq!(
            Value::object(Exportable).to_json().unwrap(),
            r#"{"state":"ready"}"#
        );
    }

    #[test]
    fn test_object_non_collection_export_fails() {
        #[derive(Debug)]
        struct Degenerate;
        impl ObjectValue for Degenerate {
            fn class_name(&self) -> &str {
                "Degenerate"
            }
            fn export(&self) -> Option<Value> {
                Some(Value::integer(42))
            }
        }

        let err = Value::object(Degenerate).to_json().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Object of type Degenerate has a structured-export method but it did not return a collection"
        );
    }

    #[test]
    fn test_object_fields_last() {
        #[derive(Debug)]
        struct Plain;
        impl ObjectValue for Plain {
            fn class_name(&self) -> &str {
                "Plain"
            }
            fn fields(&self) -> Vec<(String, Value)> {
                vec![("id".to_string(), Value::integer(7))]
            }
        }

        assert_eq!(Value::object(Plain).to_json().unwrap(), r#"{"id":7}"#);
    }

    #[test]
    fn test_object_with_no_capabilities_encodes_empty() {
        #[derive(Debug)]
        struct Bare;
        impl ObjectValue for Bare {
            fn class_name(&self) -> &str {
                "Bare"
            }
        }
        // no public fields: an empty keyed collection, written as a list
        assert_eq!(Value::object(Bare).to_json().unwrap(), "[]");
    }

    #[test]
    fn test_object_encode_failure_names_strategy() {
        #[derive(Debug)]
        struct BadPayload;
        impl ObjectValue for BadPayload {
            fn class_name(&self) -> &str {
                "BadPayload"
            }
            fn json_value(&self) -> Option<Value> {
                Some(Value::float(f64::NAN))
            }
        }

        let err = Value::object(BadPayload).to_json().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to encode object BadPayload to JSON via native JSON serialization: \
             Inf and NaN cannot be JSON encoded"
        );
    }

    #[test]
    fn test_nested_resource_is_an_encoder_failure() {
        let value: Value = vec![Value::resource("stream")].into();
        let err = value.to_json().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to encode array to JSON: type resource is not supported"
        );
    }

    #[test]
    fn test_resource_fails() {
        let err = Value::resource("stream").to_json().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Value of type resource cannot be converted to JSON"
        );
    }

    #[test]
    fn test_pretty_output() {
        let mut keyed = Array::new();
        keyed.insert(Key::from("a"), Value::integer(1));
        let options = JsonOptions::default().with_pretty(true);
        assert_eq!(
            Value::Array(keyed).to_json_with(&options).unwrap(),
            "{\n    \"a\": 1\n}"
        );
    }

    #[test]
    fn test_output_parses_back() {
        let value = Value::from(serde_json::json!({
            "text": "a/b é 😀",
            "nested": [1, 2.5, null, {"deep": true}],
        }));
        for options in [
            JsonOptions::default(),
            JsonOptions::default().with_pretty(true),
            JsonOptions::default()
                .with_escape_slashes(true)
                .with_escape_unicode(true),
        ] {
            let text = value.to_json_with(&options).unwrap();
            let reparsed: serde_json::Value = serde_json::from_str(&text).unwrap();
            assert_eq!(Value::from(reparsed), value, "{options:?}");
        }
    }

    proptest! {
        #[test]
        fn prop_scalar_json_is_always_parseable(
            value in prop_oneof![
                Just(Value::Null),
                any::<bool>().prop_map(Value::boolean),
                any::<i64>().prop_map(Value::integer),
                proptest::num::f64::NORMAL.prop_map(Value::float),
                ".*".prop_map(Value::text),
            ]
        ) {
            let text = value.to_json().unwrap();
            prop_assert!(serde_json::from_str::<serde_json::Value>(&text).is_ok());
        }
    }
}
