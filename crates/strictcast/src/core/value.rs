//! Unified Value enum for loosely-typed inputs
//!
//! This is the central type of the crate: a tagged union over every shape a
//! dynamic input can take. The six cast functions (`to_text`, `to_integer`,
//! `to_float`, `to_boolean`, `to_array`, `to_json`) are exhaustive matches
//! over this enum, so no input shape is ever silently unhandled.

use std::sync::Arc;

use crate::collections::Array;
use crate::core::kind::ValueKind;
use crate::core::object::{ObjectRef, ObjectValue};
use crate::core::resource::Resource;
use crate::error::CastError;

/// A dynamic value whose concrete type is not statically known to the
/// caller at the point of conversion.
///
/// Values are caller-owned and read-only for the duration of a cast; every
/// cast either returns a newly constructed output or a
/// [`CastError`](crate::CastError).
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Absent/null marker
    #[default]
    Null,

    /// Boolean value
    Boolean(bool),

    /// Signed 64-bit integer
    Integer(i64),

    /// IEEE 754 double (may be NaN or infinite)
    Float(f64),

    /// UTF-8 text
    Text(String),

    /// Ordered keyed collection
    Array(Array),

    /// Opaque object exposing zero or more capabilities
    Object(ObjectRef),

    /// Foreign handle, always invalid input
    Resource(Resource),
}

impl Value {
    // ==================== Constructors ====================

    /// Create a null value
    pub const fn null() -> Self {
        Self::Null
    }

    /// Create a boolean value
    pub const fn boolean(v: bool) -> Self {
        Self::Boolean(v)
    }

    /// Create an integer value
    pub const fn integer(v: i64) -> Self {
        Self::Integer(v)
    }

    /// Create a float value
    pub const fn float(v: f64) -> Self {
        Self::Float(v)
    }

    /// Create a text value from String or &str
    pub fn text(v: impl Into<String>) -> Self {
        Self::Text(v.into())
    }

    /// Create an array value
    pub fn array(v: Array) -> Self {
        Self::Array(v)
    }

    /// Create an empty array value
    pub fn array_empty() -> Self {
        Self::Array(Array::new())
    }

    /// Create an object value from any capability carrier
    pub fn object(v: impl ObjectValue + 'static) -> Self {
        Self::Object(Arc::new(v))
    }

    /// Create an object value from an existing shared handle
    pub fn object_ref(v: ObjectRef) -> Self {
        Self::Object(v)
    }

    /// Create a resource marker value
    pub fn resource(kind: impl Into<String>) -> Self {
        Self::Resource(Resource::new(kind))
    }

    // ==================== Type queries ====================

    /// Get the kind of this value
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Integer(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::Text(_) => ValueKind::String,
            Self::Array(_) => ValueKind::Array,
            Self::Object(_) => ValueKind::Object,
            Self::Resource(_) => ValueKind::Resource,
        }
    }

    /// Check if this is null
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if this is a boolean
    #[inline]
    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean(_))
    }

    /// Check if this is an integer
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(_))
    }

    /// Check if this is a float
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }

    /// Check if this is numeric (integer or float)
    #[inline]
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Float(_))
    }

    /// Check if this is text
    #[inline]
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Check if this is an array
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Check if this is an object
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    /// Check if this is a resource
    #[inline]
    #[must_use]
    pub const fn is_resource(&self) -> bool {
        matches!(self, Self::Resource(_))
    }

    // ==================== Accessors (as_*) ====================

    /// Try to get as boolean
    #[inline]
    #[must_use]
    pub const fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as integer
    #[inline]
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as float
    #[inline]
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get as string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(t.as_str()),
            _ => None,
        }
    }

    /// Try to get as array reference
    #[inline]
    #[must_use]
    pub const fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Try to get as object handle
    #[inline]
    #[must_use]
    pub const fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Try to get as resource reference
    #[inline]
    #[must_use]
    pub const fn as_resource(&self) -> Option<&Resource> {
        match self {
            Self::Resource(r) => Some(r),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            // Objects have no structural equality; compare by identity
            (Self::Object(a), Self::Object(b)) => Arc::ptr_eq(a, b),
            (Self::Resource(a), Self::Resource(b)) => a == b,
            _ => false,
        }
    }
}

// ==================== From implementations ====================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Integer(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(v as f64)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::text(v)
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Array(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(Array::from(v))
    }
}

impl From<Resource> for Value {
    fn from(v: Resource) -> Self {
        Self::Resource(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

// ==================== FromStr implementation ====================

impl std::str::FromStr for Value {
    type Err = CastError;

    /// Parse a Value from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str::<serde_json::Value>(s)
            .map(Value::from)
            .map_err(|e| CastError::message(format!("Invalid JSON: {e}")))
    }
}
