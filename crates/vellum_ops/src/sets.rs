//! Set algebra over sequences.
//!
//! Membership is structural equality, so `1` and `1.0` are distinct
//! elements. Results keep first-occurrence order.

use std::collections::HashSet;

use vellum_foundation::{LtVec, Value};

use crate::neutral::{Shape, fallback};
use crate::view::elements;

/// Collects each distinct element once, in order, skipping anything in
/// `seen`.
fn push_unique<'a>(
    out: &mut Vec<Value>,
    seen: &mut HashSet<Value>,
    items: impl IntoIterator<Item = &'a Value>,
) {
    for item in items {
        if seen.insert(item.clone()) {
            out.push(item.clone());
        }
    }
}

/// Collection: uniq - first occurrence of each distinct element.
#[must_use]
pub fn uniq(seq: &Value) -> Value {
    let Some(items) = elements(seq) else {
        return fallback("uniq", seq, Shape::Sequence);
    };
    let mut out = Vec::with_capacity(items.len());
    push_unique(&mut out, &mut HashSet::new(), &items);
    Value::Vec(out.into_iter().collect())
}

/// Collection: union - distinct elements of `a` followed by the elements of
/// `b` not seen yet.
///
/// A non-collection operand counts as empty; when neither operand is a
/// collection the result is the neutral sequence.
#[must_use]
pub fn union(a: &Value, b: &Value) -> Value {
    let (left, right) = match (elements(a), elements(b)) {
        (None, None) => return fallback("union", a, Shape::Sequence),
        (l, r) => (l.unwrap_or_else(LtVec::new), r.unwrap_or_else(LtVec::new)),
    };
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut seen = HashSet::new();
    push_unique(&mut out, &mut seen, &left);
    push_unique(&mut out, &mut seen, &right);
    Value::Vec(out.into_iter().collect())
}

/// Collection: intersect - distinct elements of `a` also present in `b`,
/// in `a`'s order.
#[must_use]
pub fn intersect(a: &Value, b: &Value) -> Value {
    let Some(left) = elements(a) else {
        return fallback("intersect", a, Shape::Sequence);
    };
    let Some(right) = elements(b) else {
        return fallback("intersect", b, Shape::Sequence);
    };
    let lookup: HashSet<&Value> = right.iter().collect();
    let mut out = Vec::new();
    push_unique(
        &mut out,
        &mut HashSet::new(),
        left.iter().filter(|item| lookup.contains(item)),
    );
    Value::Vec(out.into_iter().collect())
}

/// Collection: complement - elements of the last operand absent from every
/// preceding operand.
///
/// Fewer than two operands yield the empty sequence. Preceding operands
/// that are not collections contribute nothing.
#[must_use]
pub fn complement(operands: &[Value]) -> Value {
    let [others @ .., last] = operands else {
        return Value::Vec(LtVec::new());
    };
    if others.is_empty() {
        return Value::Vec(LtVec::new());
    }
    let Some(candidates) = elements(last) else {
        return fallback("complement", last, Shape::Sequence);
    };
    let excluded: HashSet<Value> = others
        .iter()
        .filter_map(elements)
        .flat_map(IntoIterator::into_iter)
        .collect();
    Value::Vec(
        candidates
            .into_iter()
            .filter(|item| !excluded.contains(item))
            .collect(),
    )
}
