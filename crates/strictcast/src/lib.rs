//! # strictcast
//!
//! Strict, rule-based coercion for loosely-typed dynamic values.
//!
//! A [`Value`] is a runtime value whose concrete type the caller does not
//! statically know: a request parameter, an environment variable, a field
//! from a legacy store, a decoded JSON node. The six cast methods convert
//! it into a concrete representation under explicit rules, and fail with a
//! descriptive [`CastError`] instead of silently degrading:
//!
//! ```
//! use strictcast::Value;
//!
//! assert_eq!(Value::text("  42  ").to_integer().unwrap(), 42);
//! assert_eq!(Value::text("3.5").to_integer().unwrap(), 4);
//! assert!(Value::text(" True ").to_boolean().unwrap());
//! assert_eq!(Value::boolean(false).to_text().unwrap(), "0");
//!
//! let arr = Value::text(r#"{"a": 1}"#).to_array().unwrap();
//! assert_eq!(arr.get_name("a"), Some(&Value::integer(1)));
//!
//! let err = Value::integer(2).to_boolean().unwrap_err();
//! assert!(err.to_string().contains("only 0 and 1"));
//! ```
//!
//! Opaque objects take part through the [`ObjectValue`] capability trait;
//! foreign handles are represented by [`Resource`] and rejected by every
//! cast. Collections are [`Array`]: one ordered container keyed by integer
//! or text, see [`Key`].
//!
//! Every cast is pure and synchronous. The library performs no I/O, keeps
//! no state, and installs no logging subscriber (it only emits `tracing`
//! events at trace level).

pub mod cast;
pub mod collections;
pub mod core;
pub mod error;

// Re-export the common surface
pub use cast::JsonOptions;
pub use collections::{Array, Key};
pub use error::{CastError, CastResult};
pub use self::core::{ObjectRef, ObjectValue, Resource, Value, ValueKind};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{Array, CastError, CastResult, JsonOptions, Key, Value, ValueKind};
    pub use crate::{ObjectRef, ObjectValue, Resource};
}
