//! Scalar coercion.
//!
//! Coercion is total: a value that cannot be converted yields `0` or its
//! default rendering instead of an error.

use std::borrow::Cow;

use vellum_foundation::Value;

/// Converts a value to a float.
///
/// Numbers convert exactly (large integers may lose precision), text parses
/// with standard float syntax, and everything else yields `0.0`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn to_float(value: &Value) -> f64 {
    match value {
        Value::Int(n) => *n as f64,
        Value::Float(n) => *n,
        Value::String(s) => s.parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Converts a value to an integer.
///
/// Floats truncate toward zero (saturating at the `i64` range, NaN is `0`),
/// text parses with standard integer syntax, and everything else yields `0`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn to_int(value: &Value) -> i64 {
    match value {
        Value::Int(n) => *n,
        Value::Float(n) => *n as i64,
        Value::String(s) => s.parse().unwrap_or(0),
        _ => 0,
    }
}

/// Converts a value to text.
///
/// Text is borrowed as-is, bytes decode lossily and every other kind uses
/// the default rendering.
#[must_use]
pub fn to_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        Value::Bytes(b) => String::from_utf8_lossy(b),
        other => Cow::Owned(other.to_string()),
    }
}

/// Returns the numeric reading of a value, if it has one.
///
/// Numbers always do; text does when it parses as a float.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn as_numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Int(n) => Some(*n as f64),
        Value::Float(n) => Some(*n),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Returns true for numbers and for text that looks like a number.
#[must_use]
pub fn is_numeric_like(value: &Value) -> bool {
    as_numeric(value).is_some()
}
