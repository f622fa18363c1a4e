//! Keyed access, membership and field filtering.

use std::fmt;

use vellum_foundation::{LtVec, Value};

use crate::coerce::{to_int, to_text};
use crate::compare::{compare, equal};
use crate::neutral::{Shape, fallback};
use crate::view::elements;

// =============================================================================
// Access
// =============================================================================

/// Steps one level into a container.
///
/// Mappings are looked up by exact key, sequences by the integer reading of
/// `key`. Anything else, or a miss, is `None`.
fn step<'a>(container: &'a Value, key: &Value) -> Option<&'a Value> {
    match container {
        Value::Map(m) => m.get(key),
        Value::Vec(v) => usize::try_from(to_int(key))
            .ok()
            .and_then(|i| v.get(i)),
        _ => None,
    }
}

/// Walks `path` through nested containers.
///
/// Any miss, a non-container along the way, or an empty path yields unset.
#[must_use]
pub fn index(container: &Value, path: &[Value]) -> Value {
    if path.is_empty() {
        return Value::Nil;
    }
    let mut current = container;
    for key in path {
        match step(current, key) {
            Some(next) => current = next,
            None => return Value::Nil,
        }
    }
    current.clone()
}

/// Returns true when `key` is present in a mapping or is a valid index into
/// a sequence.
#[must_use]
pub fn is_set(container: &Value, key: &Value) -> bool {
    match container {
        Value::Map(m) => m.contains_key(key),
        Value::Vec(v) => usize::try_from(to_int(key)).is_ok_and(|i| i < v.len()),
        other => fallback("is_set", other, Shape::Bool).is_truthy(),
    }
}

/// Membership test.
///
/// Sequences match an element equal to `value`, mappings match a key, and
/// text matches a substring of `value`'s text rendering.
#[must_use]
pub fn contains(container: &Value, value: &Value) -> bool {
    match container {
        Value::Vec(v) => v.iter().any(|item| equal(item, value)),
        Value::Map(m) => m.contains_key(value),
        Value::String(_) | Value::Bytes(_) => to_text(container).contains(&*to_text(value)),
        other => fallback("in", other, Shape::Bool).is_truthy(),
    }
}

/// Projects a dotted field path out of an element.
///
/// `"."` and the empty path select the element itself. Each segment looks
/// up a text key in a mapping; a missing key or a non-mapping yields unset.
#[must_use]
pub fn project(element: &Value, path: &str) -> Value {
    if path.is_empty() || path == "." {
        return element.clone();
    }
    let mut current = element.clone();
    for segment in path.split('.').filter(|s| !s.is_empty()) {
        current = match &current {
            Value::Map(m) => m.get(&Value::from(segment)).cloned().unwrap_or(Value::Nil),
            _ => return Value::Nil,
        };
    }
    current
}

// =============================================================================
// Filtering
// =============================================================================

/// Comparison operator accepted by [`filter`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Operator {
    /// `eq` / `==`
    Eq,
    /// `ne` / `!=`
    Ne,
    /// `lt` / `<`
    Lt,
    /// `le` / `<=`
    Le,
    /// `gt` / `>`
    Gt,
    /// `ge` / `>=`
    Ge,
    /// `in`: the projection is a member of the operand.
    In,
    /// `not in`
    NotIn,
}

impl Operator {
    /// Parses an operator by its word or symbol spelling.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let op = match name.trim() {
            "eq" | "==" => Self::Eq,
            "ne" | "!=" => Self::Ne,
            "lt" | "<" => Self::Lt,
            "le" | "<=" => Self::Le,
            "gt" | ">" => Self::Gt,
            "ge" | ">=" => Self::Ge,
            "in" => Self::In,
            "not in" => Self::NotIn,
            _ => return None,
        };
        Some(op)
    }

    /// Returns true for the ordering operators.
    #[must_use]
    pub const fn is_ordering(self) -> bool {
        matches!(self, Self::Lt | Self::Le | Self::Gt | Self::Ge)
    }

    /// Tests a projected field against the operand.
    ///
    /// Ordering operators never match an unset projection.
    #[must_use]
    pub fn matches(self, projected: &Value, operand: &Value) -> bool {
        if self.is_ordering() && projected.is_nil() {
            return false;
        }
        match self {
            Self::Eq => equal(projected, operand),
            Self::Ne => !equal(projected, operand),
            Self::Lt => compare(projected, operand).is_lt(),
            Self::Le => compare(projected, operand).is_le(),
            Self::Gt => compare(projected, operand).is_gt(),
            Self::Ge => compare(projected, operand).is_ge(),
            Self::In => contains(operand, projected),
            Self::NotIn => !contains(operand, projected),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Eq => "eq",
            Self::Ne => "ne",
            Self::Lt => "lt",
            Self::Le => "le",
            Self::Gt => "gt",
            Self::Ge => "ge",
            Self::In => "in",
            Self::NotIn => "not in",
        };
        write!(f, "{s}")
    }
}

/// Keeps the elements whose `field` projection satisfies `op` against
/// `operand`.
///
/// An unknown operator matches nothing.
#[must_use]
pub fn filter(seq: &Value, field: &str, op: &str, operand: &Value) -> Value {
    let Some(items) = elements(seq) else {
        return fallback("where", seq, Shape::Sequence);
    };
    let Some(op) = Operator::parse(op) else {
        log::trace!("where: unknown operator {op:?}, matching nothing");
        return Value::Vec(LtVec::new());
    };
    let kept: LtVec<Value> = items
        .into_iter()
        .filter(|item| op.matches(&project(item, field), operand))
        .collect();
    Value::Vec(kept)
}
