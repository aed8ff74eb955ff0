//! The cast surface
//!
//! Six conversions, each an exhaustive decision table over
//! [`Value`](crate::Value), each fully succeeding or failing with a
//! [`CastError`](crate::CastError):
//!
//! | Method                    | Returns    | Notes                                   |
//! |---------------------------|------------|-----------------------------------------|
//! | [`Value::to_text`]        | `String`   | booleans as `"1"`/`"0"`, null as `""`   |
//! | [`Value::to_integer`]     | `i64`      | rounds half away from zero, range-checked |
//! | [`Value::to_float`]       | `f64`      | never fails on magnitude                |
//! | [`Value::to_boolean`]     | `bool`     | strict: no truthiness                   |
//! | [`Value::to_array`]       | [`Array`](crate::Array) | decodes JSON-looking text  |
//! | [`Value::to_json`]        | `String`   | flags + depth via [`JsonOptions`]       |
//!
//! The casts are pure: same input and options, same output or same
//! failure, and the input is never mutated. They are safe to call from
//! multiple threads as long as the input itself is not concurrently
//! mutated.

pub mod array;
pub mod boolean;
pub mod float;
pub mod integer;
pub mod json;
pub mod text;

mod encoder;
mod numeric;

pub use json::JsonOptions;
