//! Equality and ordering over arbitrary values.
//!
//! [`compare`] is the single ordering rule: numeric-like operands compare as
//! numbers, timestamps compare chronologically, and everything else compares
//! by its text rendering in code-point order.

use std::cmp::Ordering;

use vellum_foundation::Value;

use crate::coerce::{as_numeric, to_text};

/// Structural deep equality.
///
/// Kinds must match (`1` and `1.0` are not equal), containers must have the
/// same length and pairwise-equal contents.
#[must_use]
pub fn equal(a: &Value, b: &Value) -> bool {
    a == b
}

/// Orders two values.
#[must_use]
pub fn compare(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => x.cmp(y),
        (Value::Time(x), Value::Time(y)) => x.cmp(y),
        _ => match (as_numeric(a), as_numeric(b)) {
            // Incomparable pairs (NaN) are treated as equal.
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => to_text(a).cmp(&to_text(b)),
        },
    }
}

/// `a == b`.
#[must_use]
pub fn eq(a: &Value, b: &Value) -> bool {
    equal(a, b)
}

/// `a != b`.
#[must_use]
pub fn ne(a: &Value, b: &Value) -> bool {
    !equal(a, b)
}

/// `a > b`.
#[must_use]
pub fn gt(a: &Value, b: &Value) -> bool {
    compare(a, b) == Ordering::Greater
}

/// `a >= b`.
#[must_use]
pub fn ge(a: &Value, b: &Value) -> bool {
    compare(a, b) != Ordering::Less
}

/// `a < b`.
#[must_use]
pub fn lt(a: &Value, b: &Value) -> bool {
    compare(a, b) == Ordering::Less
}

/// `a <= b`.
#[must_use]
pub fn le(a: &Value, b: &Value) -> bool {
    compare(a, b) != Ordering::Greater
}

/// Selects `a` when `cond` is truthy, otherwise `b`.
#[must_use]
pub fn conditional(cond: &Value, a: &Value, b: &Value) -> Value {
    if cond.is_truthy() { a.clone() } else { b.clone() }
}

/// Returns `fallback` when `given` is unset or empty, otherwise `given`.
///
/// Empty means empty text, empty bytes, an empty container or `false`.
/// Numeric zero is not empty.
#[must_use]
pub fn default(fallback: &Value, given: &Value) -> Value {
    let empty = match given {
        Value::Nil => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Bytes(b) => b.is_empty(),
        Value::Vec(v) => v.is_empty(),
        Value::Map(m) => m.is_empty(),
        Value::Int(_) | Value::Float(_) | Value::Time(_) => false,
    };
    if empty { fallback.clone() } else { given.clone() }
}
