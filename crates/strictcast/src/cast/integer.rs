//! Integer cast
//!
//! `Value::to_integer` converts a dynamic value into an i64. Fractional
//! input rounds half away from zero; anything whose rounded magnitude
//! exceeds the i64 bounds fails with a message naming the value and the
//! bounds.

use crate::cast::numeric::{self, Numeric};
use crate::core::value::Value;
use crate::error::{CastError, CastResult};

// i64::MAX is not representable as f64; the cast rounds it up to 2^63.
// Accepting that one value and letting `as` saturate it back to i64::MAX
// matches the contract for "a float holding exactly the signed-64 max".
const I64_MIN_AS_F64: f64 = i64::MIN as f64;
const I64_MAX_AS_F64: f64 = i64::MAX as f64;

impl Value {
    /// Convert this value to a signed 64-bit integer.
    ///
    /// Text is trimmed and must be a numeric literal; float-form text and
    /// float input round half away from zero (2.5 becomes 3, -2.5 becomes
    /// -3). Null converts to 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use strictcast::Value;
    ///
    /// assert_eq!(Value::text("  42  ").to_integer().unwrap(), 42);
    /// assert_eq!(Value::text("3.5").to_integer().unwrap(), 4);
    /// assert_eq!(Value::float(-2.5).to_integer().unwrap(), -3);
    /// assert!(Value::text("abc").to_integer().is_err());
    /// ```
    pub fn to_integer(&self) -> CastResult<i64> {
        match self {
            Self::Integer(i) => Ok(*i),
            Self::Boolean(b) => Ok(i64::from(*b)),
            Self::Text(t) => text_to_integer(t),
            Self::Float(f) => {
                if f.is_finite() {
                    round_to_i64(*f)
                } else {
                    Err(CastError::non_finite_integer())
                }
            }
            Self::Null => Ok(0),
            Self::Array(_) | Self::Object(_) | Self::Resource(_) => {
                Err(CastError::unsupported(self.kind(), "integer"))
            }
        }
    }
}

fn text_to_integer(text: &str) -> CastResult<i64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CastError::empty_text("integer"));
    }
    match numeric::parse(trimmed) {
        Some(Numeric::Int(int)) => Ok(int),
        Some(Numeric::Float(float)) => round_to_i64(float),
        None => Err(CastError::not_numeric(trimmed, "integer")),
    }
}

/// Round half away from zero, then range-check against the i64 bounds.
fn round_to_i64(value: f64) -> CastResult<i64> {
    let rounded = value.round();
    if rounded < I64_MIN_AS_F64 || rounded > I64_MAX_AS_F64 {
        return Err(CastError::int_out_of_range(value));
    }
    Ok(rounded as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_integer_passes_through() {
        assert_eq!(Value::integer(42).to_integer().unwrap(), 42);
        assert_eq!(Value::integer(i64::MIN).to_integer().unwrap(), i64::MIN);
    }

    #[test]
    fn test_booleans_and_null() {
        assert_eq!(Value::boolean(true).to_integer().unwrap(), 1);
        assert_eq!(Value::boolean(false).to_integer().unwrap(), 0);
        assert_eq!(Value::Null.to_integer().unwrap(), 0);
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(Value::float(2.5).to_integer().unwrap(), 3);
        assert_eq!(Value::float(-2.5).to_integer().unwrap(), -3);
        assert_eq!(Value::float(3.4).to_integer().unwrap(), 3);
        assert_eq!(Value::float(3.6).to_integer().unwrap(), 4);
        assert_eq!(Value::float(-0.4).to_integer().unwrap(), 0);
    }

    #[test]
    fn test_text_trimming_and_forms() {
        assert_eq!(Value::text("  42  ").to_integer().unwrap(), 42);
        assert_eq!(Value::text("-17").to_integer().unwrap(), -17);
        assert_eq!(Value::text("3.5").to_integer().unwrap(), 4);
        assert_eq!(Value::text("-3.5").to_integer().unwrap(), -4);
        assert_eq!(Value::text("1e3").to_integer().unwrap(), 1000);
    }

    #[test]
    fn test_empty_text_fails() {
        let err = Value::text("   ").to_integer().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Empty string cannot be converted to integer"
        );
    }

    #[test]
    fn test_non_numeric_text_fails() {
        let err = Value::text("abc").to_integer().unwrap_err();
        assert!(err.to_string().contains("not numeric"));
        assert!(Value::text("0x1A").to_integer().is_err());
        assert!(Value::text("12abc").to_integer().is_err());
    }

    #[test]
    fn test_non_finite_floats_fail() {
        for f in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = Value::float(f).to_integer().unwrap_err();
            assert_eq!(
                err.to_string(),
                "Infinite or NaN value cannot be converted to integer"
            );
        }
    }

    #[test]
    fn test_signed_64_boundary() {
        // 9223372036854775807.0 is the float closest to i64::MAX (it holds
        // 2^63); the cast accepts it and returns the true max.
        let max_as_float = 9_223_372_036_854_775_807.0_f64;
        assert_eq!(Value::float(max_as_float).to_integer().unwrap(), i64::MAX);
        assert_eq!(
            Value::float(I64_MIN_AS_F64).to_integer().unwrap(),
            i64::MIN
        );

        let err = Value::float(1e19).to_integer().unwrap_err();
        assert!(err.to_string().contains("out of integer range"));
        assert!(Value::float(-1e19).to_integer().is_err());
    }

    #[test]
    fn test_text_integer_overflow_fails_past_the_float_boundary() {
        // integer-form text wider than i64 re-reads as a float, then the
        // range check applies
        let err = Value::text("92233720368547758070").to_integer().unwrap_err();
        assert!(err.to_string().contains("9223372036854775807"));
    }

    #[test]
    fn test_unsupported_kinds_fail() {
        assert!(Value::array_empty().to_integer().is_err());
        let err = Value::resource("stream").to_integer().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Value of type resource cannot be converted to integer"
        );
    }

    proptest! {
        #[test]
        fn prop_integer_round_trips(n in any::<i64>()) {
            prop_assert_eq!(Value::integer(n).to_integer().unwrap(), n);
            prop_assert_eq!(Value::text(n.to_string()).to_integer().unwrap(), n);
        }

        #[test]
        fn prop_finite_small_floats_round(f in -1e15f64..1e15f64) {
            let expected = f.round() as i64;
            prop_assert_eq!(Value::float(f).to_integer().unwrap(), expected);
        }
    }
}
