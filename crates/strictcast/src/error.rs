//! Cast error type (standalone)
//!
//! Every conversion in this crate fails with the same error kind: a
//! [`CastError`] carrying one human-readable message. Callers branch on
//! success/failure and read the message; there is no structured error code.
//!
//! The constructors below are the only way messages are built, and they
//! accept only scalars or a [`ValueKind`] name. An object or a foreign
//! handle never reaches a format string directly; its short runtime-type
//! name does instead.

use thiserror::Error;

use crate::core::kind::ValueKind;

// ============================================================================
// ERROR TYPE
// ============================================================================

/// Conversion failure with a descriptive message.
///
/// # Examples
///
/// ```
/// use strictcast::Value;
///
/// let err = Value::resource("stream").to_integer().unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "Value of type resource cannot be converted to integer"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct CastError {
    message: String,
}

/// Result type alias for cast operations
pub type CastResult<T> = Result<T, CastError>;

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl CastError {
    /// Create an error from a pre-built message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Get the failure message.
    pub fn as_str(&self) -> &str {
        &self.message
    }

    /// The input's runtime type has no conversion rule for the target type.
    pub fn unsupported(kind: ValueKind, target: &str) -> Self {
        Self::message(format!(
            "Value of type {} cannot be converted to {target}",
            kind.name()
        ))
    }

    /// Text input was empty (after trimming) where a number was required.
    pub fn empty_text(target: &str) -> Self {
        Self::message(format!("Empty string cannot be converted to {target}"))
    }

    /// Text input failed the numeric-literal check.
    pub fn not_numeric(input: &str, target: &str) -> Self {
        Self::message(format!(
            "String \"{input}\" is not numeric and cannot be converted to {target}"
        ))
    }

    /// A NaN or infinite float was given where an integer was required.
    pub fn non_finite_integer() -> Self {
        Self::message("Infinite or NaN value cannot be converted to integer")
    }

    /// A numeric magnitude exceeds the signed 64-bit integer bounds.
    pub fn int_out_of_range(value: f64) -> Self {
        Self::message(format!(
            "Value {value} is out of integer range [{}, {}]",
            i64::MIN,
            i64::MAX
        ))
    }

    /// An integer other than 0 or 1 was given for a boolean.
    pub fn bool_from_int(value: i64) -> Self {
        Self::message(format!(
            "Integer {value} cannot be converted to boolean, only 0 and 1 are accepted"
        ))
    }

    /// A float other than exactly 0.0 or 1.0 was given for a boolean.
    pub fn bool_from_float(value: f64) -> Self {
        Self::message(format!(
            "Float {value} cannot be converted to boolean, only 0.0 and 1.0 are accepted"
        ))
    }

    /// Text outside the accepted boolean literal sets.
    pub fn bool_from_text(input: &str) -> Self {
        Self::message(format!("String \"{input}\" cannot be converted to boolean"))
    }

    /// Caller-supplied JSON nesting depth below the minimum of 1.
    pub fn depth_too_small(got: usize) -> Self {
        Self::message(format!("Depth must be at least 1, got {got}"))
    }

    /// NaN has no JSON representation.
    pub fn nan_to_json() -> Self {
        Self::message("NAN cannot be converted to JSON: JSON has no NaN representation")
    }

    /// Infinity has no JSON representation.
    pub fn infinity_to_json() -> Self {
        Self::message("INF cannot be converted to JSON: JSON has no infinity representation")
    }

    /// The JSON encoder failed on a plain value.
    pub fn encode_failed(kind: ValueKind, detail: impl std::fmt::Display) -> Self {
        Self::message(format!(
            "Failed to encode {} to JSON: {detail}",
            kind.name()
        ))
    }

    /// The JSON encoder failed while a specific object strategy was in use.
    pub fn encode_object_failed(
        strategy: &str,
        class: &str,
        detail: impl std::fmt::Display,
    ) -> Self {
        Self::message(format!(
            "Failed to encode object {class} to JSON via {strategy}: {detail}"
        ))
    }

    /// An object's structured-export method returned a non-collection.
    pub fn export_not_collection(class: &str) -> Self {
        Self::message(format!(
            "Object of type {class} has a structured-export method but it did not return a collection"
        ))
    }
}

// ============================================================================
// TESTS
// ============================================================================
