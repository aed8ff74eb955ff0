//! Collection keys
//!
//! An [`Array`](crate::Array) is keyed by either an integer or a text name,
//! unifying what other containers split into list and map. `Key` is that
//! union.

use std::fmt;

/// A collection key: an integer index or a text name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Integer key
    Index(i64),
    /// Text key
    Name(String),
}

impl Key {
    /// Try to get the integer form of this key
    #[inline]
    #[must_use]
    pub fn as_index(&self) -> Option<i64> {
        match self {
            Self::Index(i) => Some(*i),
            Self::Name(_) => None,
        }
    }

    /// Try to get the text form of this key
    #[inline]
    #[must_use]
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Index(_) => None,
            Self::Name(n) => Some(n.as_str()),
        }
    }

    /// Check if this is an integer key
    #[inline]
    #[must_use]
    pub fn is_index(&self) -> bool {
        matches!(self, Self::Index(_))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{i}"),
            Self::Name(n) => write!(f, "{n}"),
        }
    }
}

impl From<i64> for Key {
    fn from(v: i64) -> Self {
        Self::Index(v)
    }
}

impl From<i32> for Key {
    fn from(v: i32) -> Self {
        Self::Index(v as i64)
    }
}

impl From<usize> for Key {
    fn from(v: usize) -> Self {
        Self::Index(v as i64)
    }
}

impl From<String> for Key {
    fn from(v: String) -> Self {
        Self::Name(v)
    }
}

impl From<&str> for Key {
    fn from(v: &str) -> Self {
        Self::Name(v.to_string())
    }
}
