//! Core modules
//!
//! The fundamental types behind the cast surface:
//!
//! - [`value`] holds the central [`Value`] enum every cast matches over.
//! - [`kind`] classifies values and supplies the runtime-type names used in
//!   failure messages.
//! - [`object`] defines the capability surface an opaque object may expose.
//! - [`resource`] marks foreign handles that no cast accepts.
//! - [`convert`] maps decoded `serde_json` trees into [`Value`].
//! - [`display`] and [`serde`] are the ambient rendering/serde impls.
//!
//! Most users interact with re-exported items from the crate root.

pub mod convert;
pub mod display;
pub mod kind;
pub mod object;
pub mod resource;
pub mod serde;
pub mod value;

pub use kind::ValueKind;
pub use object::{ObjectRef, ObjectValue};
pub use resource::Resource;
pub use value::Value;
