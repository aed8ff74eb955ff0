//! Text cast
//!
//! `Value::to_text` converts a dynamic value into text. Numbers render in
//! their canonical decimal form (shortest text that round-trips), booleans
//! as `"1"`/`"0"`, null as empty text. An object is convertible only when
//! it exposes the stringify capability.

use crate::core::value::Value;
use crate::error::{CastError, CastResult};

impl Value {
    /// Convert this value to text.
    ///
    /// Non-finite floats render as `"INF"`, `"-INF"` and `"NAN"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use strictcast::Value;
    ///
    /// assert_eq!(Value::integer(42).to_text().unwrap(), "42");
    /// assert_eq!(Value::boolean(false).to_text().unwrap(), "0");
    /// assert_eq!(Value::Null.to_text().unwrap(), "");
    /// assert!(Value::array_empty().to_text().is_err());
    /// ```
    pub fn to_text(&self) -> CastResult<String> {
        match self {
            Self::Text(t) => Ok(t.clone()),
            Self::Integer(i) => Ok(i.to_string()),
            Self::Float(f) => Ok(float_to_text(*f)),
            Self::Boolean(b) => Ok(if *b { "1" } else { "0" }.to_string()),
            Self::Null => Ok(String::new()),
            Self::Object(o) => o
                .stringify()
                .ok_or_else(|| CastError::unsupported(self.kind(), "string")),
            Self::Array(_) | Self::Resource(_) => {
                Err(CastError::unsupported(self.kind(), "string"))
            }
        }
    }
}

fn float_to_text(value: f64) -> String {
    if value.is_nan() {
        "NAN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() { "INF" } else { "-INF" }.to_string()
    } else {
        // Rust's Display for f64 is the shortest representation that
        // round-trips, which is exactly the canonical form wanted here.
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::object::ObjectValue;

    #[test]
    fn test_text_passes_through() {
        assert_eq!(Value::text("hello").to_text().unwrap(), "hello");
        assert_eq!(Value::text("  kept  ").to_text().unwrap(), "  kept  ");
    }

    #[test]
    fn test_integers() {
        assert_eq!(Value::integer(0).to_text().unwrap(), "0");
        assert_eq!(Value::integer(-7).to_text().unwrap(), "-7");
        assert_eq!(
            Value::integer(i64::MAX).to_text().unwrap(),
            "9223372036854775807"
        );
    }

    #[test]
    fn test_floats() {
        assert_eq!(Value::float(3.5).to_text().unwrap(), "3.5");
        assert_eq!(Value::float(5.0).to_text().unwrap(), "5");
        assert_eq!(Value::float(-0.25).to_text().unwrap(), "-0.25");
        assert_eq!(Value::float(0.1).to_text().unwrap(), "0.1");
    }

    #[test]
    fn test_non_finite_floats() {
        assert_eq!(Value::float(f64::NAN).to_text().unwrap(), "NAN");
        assert_eq!(Value::float(f64::INFINITY).to_text().unwrap(), "INF");
        assert_eq!(Value::float(f64::NEG_INFINITY).to_text().unwrap(), "-INF");
    }

    #[test]
    fn test_booleans_and_null() {
        assert_eq!(Value::boolean(true).to_text().unwrap(), "1");
        assert_eq!(Value::boolean(false).to_text().unwrap(), "0");
        assert_eq!(Value::Null.to_text().unwrap(), "");
    }

    #[test]
    fn test_object_with_stringify() {
        #[derive(Debug)]
        struct Token;
        impl ObjectValue for Token {
            fn class_name(&self) -> &str {
                "Token"
            }
            fn stringify(&self) -> Option<String> {
                Some("token-value".to_string())
            }
        }
        assert_eq!(Value::object(Token).to_text().unwrap(), "token-value");
    }

    #[test]
    fn test_object_without_stringify_fails() {
        #[derive(Debug)]
        struct Opaque;
        impl ObjectValue for Opaque {
            fn class_name(&self) -> &str {
                "Opaque"
            }
        }
        let err = Value::object(Opaque).to_text().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Value of type object cannot be converted to string"
        );
    }

    #[test]
    fn test_array_and_resource_fail() {
        assert!(Value::array_empty().to_text().is_err());
        let err = Value::resource("stream").to_text().unwrap_err();
        assert!(err.to_string().contains("resource"));
    }
}
