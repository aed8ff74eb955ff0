//! Float cast
//!
//! `Value::to_float` converts a dynamic value into an IEEE 754 double.
//! There is no magnitude check: float input passes through unchanged (NaN
//! and infinities included), and numeric text that overflows the double
//! range simply becomes infinite.

use crate::cast::numeric::{self, Numeric};
use crate::core::value::Value;
use crate::error::{CastError, CastResult};

impl Value {
    /// Convert this value to a double.
    ///
    /// # Examples
    ///
    /// ```
    /// use strictcast::Value;
    ///
    /// assert_eq!(Value::text(" 2.5 ").to_float().unwrap(), 2.5);
    /// assert_eq!(Value::integer(3).to_float().unwrap(), 3.0);
    /// assert_eq!(Value::Null.to_float().unwrap(), 0.0);
    /// assert!(Value::text("0x1A").to_float().is_err());
    /// ```
    pub fn to_float(&self) -> CastResult<f64> {
        match self {
            Self::Float(f) => Ok(*f),
            Self::Integer(i) => Ok(*i as f64),
            Self::Boolean(b) => Ok(if *b { 1.0 } else { 0.0 }),
            Self::Null => Ok(0.0),
            Self::Text(t) => text_to_float(t),
            Self::Array(_) | Self::Object(_) | Self::Resource(_) => {
                Err(CastError::unsupported(self.kind(), "float"))
            }
        }
    }
}

fn text_to_float(text: &str) -> CastResult<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CastError::empty_text("float"));
    }
    match numeric::parse(trimmed) {
        Some(Numeric::Int(int)) => Ok(int as f64),
        Some(Numeric::Float(float)) => Ok(float),
        None => Err(CastError::not_numeric(trimmed, "float")),
    }
}
