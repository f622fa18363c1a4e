//! Kind descriptors and arity contracts.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of a [`Value`](crate::Value), discovered per call.
///
/// Kinds group the closed set of value variants into the categories
/// operations dispatch on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Kind {
    /// Absent value.
    Unset,
    /// Boolean scalar.
    Bool,
    /// 64-bit signed integer scalar.
    Int,
    /// 64-bit floating point scalar.
    Float,
    /// Text scalar.
    Text,
    /// Raw byte scalar (coerces to text).
    Bytes,
    /// Timestamp scalar.
    Time,
    /// Ordered, index-addressable collection.
    Sequence,
    /// Unique-keyed collection.
    Mapping,
}

impl Kind {
    /// Returns true for the two numeric kinds.
    #[must_use]
    pub const fn is_number(self) -> bool {
        matches!(self, Self::Int | Self::Float)
    }

    /// Returns true for kinds that hold a single atomic datum.
    #[must_use]
    pub const fn is_scalar(self) -> bool {
        !matches!(self, Self::Unset | Self::Sequence | Self::Mapping)
    }

    /// Returns true for sequences and mappings.
    #[must_use]
    pub const fn is_collection(self) -> bool {
        matches!(self, Self::Sequence | Self::Mapping)
    }

    /// Returns the lowercase name used in messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unset => "unset",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Text => "text",
            Self::Bytes => "bytes",
            Self::Time => "time",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Function arity specification.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Arity {
    /// Exactly N arguments.
    Exact(usize),
    /// Between min and max arguments (inclusive).
    Range(usize, usize),
    /// At least N arguments, then any number more.
    Variadic(usize),
}

impl Arity {
    /// Checks whether `count` arguments satisfy this arity.
    #[must_use]
    pub const fn accepts(self, count: usize) -> bool {
        match self {
            Self::Exact(n) => count == n,
            Self::Range(min, max) => count >= min && count <= max,
            Self::Variadic(min) => count >= min,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::Range(min, max) => write!(f, "{min}..={max}"),
            Self::Variadic(min) => write!(f, "{min}+"),
        }
    }
}
