//! Neutral values returned in place of failures.
//!
//! Every operation names the [`Shape`] of its result. When an operation
//! receives a kind it does not support, it returns [`neutral`] for that
//! shape through [`fallback`], which is the one place the degradation is
//! decided and logged.

use vellum_foundation::{LtMap, LtVec, Value};

/// Result shape of an operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Shape {
    /// Ordered collection; neutral is the empty sequence.
    Sequence,
    /// Keyed collection; neutral is the empty mapping.
    Mapping,
    /// Predicate; neutral is `false`.
    Bool,
    /// Text; neutral is the empty string.
    Text,
    /// Number; neutral is `0`.
    Number,
    /// Anything; neutral is unset.
    Unset,
}

/// Returns the neutral value for a result shape.
#[must_use]
pub fn neutral(shape: Shape) -> Value {
    match shape {
        Shape::Sequence => Value::Vec(LtVec::new()),
        Shape::Mapping => Value::Map(LtMap::new()),
        Shape::Bool => Value::Bool(false),
        Shape::Text => Value::from(""),
        Shape::Number => Value::Int(0),
        Shape::Unset => Value::Nil,
    }
}

/// Degrades an unsupported input to the neutral value of `shape`.
///
/// Sequence-shaped operations hand an unset input back unchanged.
#[must_use]
pub fn fallback(op: &str, input: &Value, shape: Shape) -> Value {
    log::trace!(
        "{op}: unsupported {} input, returning neutral {shape:?}",
        input.kind()
    );
    if shape == Shape::Sequence && input.is_nil() {
        return Value::Nil;
    }
    neutral(shape)
}
