//! Boolean cast
//!
//! `Value::to_boolean` is the most opinionated cast: it rejects truthiness.
//! Integers convert only from exactly 0 or 1, floats only from exactly 0.0
//! or 1.0, and text only from a small fixed literal set.

use crate::core::value::Value;
use crate::error::{CastError, CastResult};

/// Text accepted as true (after trimming and ASCII lowercasing).
const TRUE_WORDS: [&str; 6] = ["true", "1", "yes", "on", "y", "t"];

/// Text accepted as false. Empty text is also false.
const FALSE_WORDS: [&str; 6] = ["false", "0", "no", "off", "n", "f"];

impl Value {
    /// Convert this value to a boolean, strictly.
    ///
    /// # Examples
    ///
    /// ```
    /// use strictcast::Value;
    ///
    /// assert!(Value::text(" True ").to_boolean().unwrap());
    /// assert!(!Value::text("").to_boolean().unwrap());
    /// assert!(Value::integer(2).to_boolean().is_err());
    /// ```
    pub fn to_boolean(&self) -> CastResult<bool> {
        match self {
            Self::Boolean(b) => Ok(*b),
            Self::Integer(0) => Ok(false),
            Self::Integer(1) => Ok(true),
            Self::Integer(i) => Err(CastError::bool_from_int(*i)),
            Self::Float(f) => {
                // NaN is equal to neither and falls through to the failure
                if *f == 0.0 {
                    Ok(false)
                } else if *f == 1.0 {
                    Ok(true)
                } else {
                    Err(CastError::bool_from_float(*f))
                }
            }
            Self::Text(t) => text_to_boolean(t),
            Self::Null => Ok(false),
            Self::Array(_) | Self::Object(_) | Self::Resource(_) => {
                Err(CastError::unsupported(self.kind(), "boolean"))
            }
        }
    }
}

fn text_to_boolean(text: &str) -> CastResult<bool> {
    let folded = text.trim().to_ascii_lowercase();
    if TRUE_WORDS.contains(&folded.as_str()) {
        Ok(true)
    } else if folded.is_empty() || FALSE_WORDS.contains(&folded.as_str()) {
        Ok(false)
    } else {
        Err(CastError::bool_from_text(text))
    }
}
