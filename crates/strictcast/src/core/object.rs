//! Opaque object values and their capability surface
//!
//! The source of a dynamic value is sometimes an object the caller owns.
//! Instead of probing for methods by name at runtime, an object entering the
//! cast layer implements [`ObjectValue`]: a fixed set of narrow, optional
//! capabilities. `None` means "this object does not expose that capability";
//! the cast functions consult them in a fixed priority order and never
//! require any of them except where a conversion has no other rule to apply.

use std::fmt;
use std::sync::Arc;

use crate::collections::key::Key;
use crate::core::value::Value;

/// Shared handle to an opaque object value.
pub type ObjectRef = Arc<dyn ObjectValue>;

/// Capability surface an opaque object may expose.
///
/// Only [`class_name`](ObjectValue::class_name) is required; every
/// capability defaults to absent. Capabilities are caller-supplied code and
/// may run arbitrary logic; the cast layer invokes them at most once per
/// conversion and does not sandbox them.
///
/// # Examples
///
/// ```
/// use strictcast::{ObjectValue, Value};
///
/// #[derive(Debug)]
/// struct Token(String);
///
/// impl ObjectValue for Token {
///     fn class_name(&self) -> &str {
///         "Token"
///     }
///
///     fn stringify(&self) -> Option<String> {
///         Some(self.0.clone())
///     }
/// }
///
/// let value = Value::object(Token("abc123".into()));
/// assert_eq!(value.to_text().unwrap(), "abc123");
/// ```
pub trait ObjectValue: fmt::Debug + Send + Sync {
    /// Runtime name of the object's type, used in failure messages.
    fn class_name(&self) -> &str;

    /// "Stringify" capability: a text rendering of the object.
    fn stringify(&self) -> Option<String> {
        None
    }

    /// "Iteration" capability: the key/value pairs the object yields when
    /// enumerated. Drained eagerly by the collection cast.
    fn entries(&self) -> Option<Vec<(Key, Value)>> {
        None
    }

    /// "Structured-export" capability: a collection representation of the
    /// object's state. May return a non-collection; the caller decides what
    /// that means (fall through in `to_array`, hard failure in `to_json`).
    fn export(&self) -> Option<Value> {
        None
    }

    /// "Native JSON-serialization" capability: the value to encode in place
    /// of the object. The capability determines the emitted structure.
    fn json_value(&self) -> Option<Value> {
        None
    }

    /// "Public field enumeration" capability: the object's externally
    /// visible named fields. An object with no public fields returns an
    /// empty set, which converts to an empty collection (a success).
    fn fields(&self) -> Vec<(String, Value)> {
        Vec::new()
    }
}
