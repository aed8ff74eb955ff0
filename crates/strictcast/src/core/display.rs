//! Display implementation for Value
//!
//! Human-readable rendering for logs and tests. This is deliberately not
//! the same thing as the `to_text` cast: Display never fails, renders null
//! as "null" and booleans as "true"/"false", and renders containers
//! structurally.

use std::fmt;

use crate::core::value::Value;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),

            Value::Boolean(b) => write!(f, "{b}"),

            Value::Integer(i) => write!(f, "{i}"),

            Value::Float(fl) => {
                if fl.is_nan() {
                    write!(f, "NaN")
                } else if fl.is_infinite() && fl.is_sign_positive() {
                    write!(f, "+Infinity")
                } else if fl.is_infinite() {
                    write!(f, "-Infinity")
                } else {
                    write!(f, "{fl}")
                }
            }

            Value::Text(t) => write!(f, "{t}"),

            Value::Array(arr) => write!(f, "{arr}"),

            Value::Object(obj) => write!(f, "object({})", obj.class_name()),

            Value::Resource(res) => write!(f, "{res}"),
        }
    }
}
