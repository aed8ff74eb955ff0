//! Value kinds
//!
//! `ValueKind` is a lightweight classification for [`Value`](crate::Value).
//! Its `name()` is the short runtime-type name that appears in every cast
//! failure message ("string", "array", "resource", ...).

use std::fmt::{Display, Formatter};

/// Represents the kind/type of a Value
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ValueKind {
    Null,
    Boolean,
    Integer,
    Float,
    String,
    Array,
    Object,
    Resource,
}

impl ValueKind {
    /// Get all available kinds
    pub fn all() -> Vec<Self> {
        vec![
            Self::Null,
            Self::Boolean,
            Self::Integer,
            Self::Float,
            Self::String,
            Self::Array,
            Self::Object,
            Self::Resource,
        ]
    }

    /// Check if this kind is numeric
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }

    /// Check if this kind is the collection kind
    pub const fn is_collection(&self) -> bool {
        matches!(self, Self::Array)
    }

    /// Check if this kind is a plain data scalar (not null, not a container)
    pub const fn is_scalar(&self) -> bool {
        matches!(
            self,
            Self::Boolean | Self::Integer | Self::Float | Self::String
        )
    }

    /// Get the descriptive name used in failure messages
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
            Self::Resource => "resource",
        }
    }

    /// Parse from a type name
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "null" | "nil" | "none" => Some(Self::Null),
            "bool" | "boolean" => Some(Self::Boolean),
            "int" | "integer" | "i64" => Some(Self::Integer),
            "float" | "f64" | "double" => Some(Self::Float),
            "string" | "str" | "text" => Some(Self::String),
            "array" | "list" | "map" | "collection" => Some(Self::Array),
            "object" => Some(Self::Object),
            "resource" | "handle" => Some(Self::Resource),
            _ => None,
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
