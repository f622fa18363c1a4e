//! Selection and reordering of sequence elements.
//!
//! Every function here takes a sequence or a mapping (through its values
//! view) and returns a new sequence.

use rand::Rng;
use rand::seq::SliceRandom;
use vellum_foundation::{LtVec, Value};

use crate::coerce::{to_int, to_text};
use crate::lookup::project;
use crate::neutral::{Shape, fallback};
use crate::view::elements;

/// Clamps a count argument to `0..=len`.
fn clamp_count(n: &Value, len: usize) -> usize {
    usize::try_from(to_int(n)).map_or(0, |n| n.min(len))
}

/// Collection: first - the first `n` elements.
#[must_use]
pub fn first(n: &Value, seq: &Value) -> Value {
    let Some(items) = elements(seq) else {
        return fallback("first", seq, Shape::Sequence);
    };
    let count = clamp_count(n, items.len());
    Value::Vec(items.slice(0, count))
}

/// Collection: last - the last `n` elements.
#[must_use]
pub fn last(n: &Value, seq: &Value) -> Value {
    let Some(items) = elements(seq) else {
        return fallback("last", seq, Shape::Sequence);
    };
    let len = items.len();
    let count = clamp_count(n, len);
    Value::Vec(items.slice(len - count, len))
}

/// Collection: after - every element strictly after index `i`.
///
/// `-1` selects the whole sequence; anything below `-1` or at/after the
/// length selects nothing.
#[must_use]
pub fn after(i: &Value, seq: &Value) -> Value {
    let Some(items) = elements(seq) else {
        return fallback("after", seq, Shape::Sequence);
    };
    let start = to_int(i).checked_add(1).and_then(|s| usize::try_from(s).ok());
    match start {
        Some(start) if start <= items.len() => Value::Vec(items.slice(start, items.len())),
        _ => Value::Vec(LtVec::new()),
    }
}

/// Collection: reverse - elements in reverse order.
#[must_use]
pub fn reverse(seq: &Value) -> Value {
    let Some(items) = elements(seq) else {
        return fallback("reverse", seq, Shape::Sequence);
    };
    Value::Vec(items.into_iter().rev().collect())
}

/// Collection: sort - stable sort by text rendering.
///
/// Elements are ordered by the code-point order of their text rendering,
/// never numerically, so `[10, 2]` stays `[10, 2]`. `key` projects a field
/// path out of each element first (`"."` or empty for the element itself)
/// and an `order` of `"desc"` reverses the direction. Ties keep their
/// original order either way.
#[must_use]
pub fn sort(seq: &Value, key: Option<&Value>, order: Option<&Value>) -> Value {
    let Some(items) = elements(seq) else {
        return fallback("sort", seq, Shape::Sequence);
    };
    let key = key.map(to_text);
    let descending = order.is_some_and(|o| to_text(o).eq_ignore_ascii_case("desc"));

    let mut keyed: Vec<(String, Value)> = items
        .into_iter()
        .map(|item| {
            let sort_key = match &key {
                Some(path) => to_text(&project(&item, path)).into_owned(),
                None => to_text(&item).into_owned(),
            };
            (sort_key, item)
        })
        .collect();

    if descending {
        keyed.sort_by(|a, b| b.0.cmp(&a.0));
    } else {
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
    }
    Value::Vec(keyed.into_iter().map(|(_, item)| item).collect())
}

/// Collection: shuffle - a uniformly random permutation.
///
/// Draws from `rng` with a Fisher-Yates shuffle, so a seeded generator
/// gives a reproducible permutation.
pub fn shuffle<R: Rng + ?Sized>(rng: &mut R, seq: &Value) -> Value {
    let Some(items) = elements(seq) else {
        return fallback("shuffle", seq, Shape::Sequence);
    };
    let mut buffer: Vec<Value> = items.into_iter().collect();
    buffer.shuffle(rng);
    Value::Vec(buffer.into_iter().collect())
}

/// Collection: slice - wraps the arguments into a sequence.
#[must_use]
pub fn slice(args: &[Value]) -> Value {
    Value::Vec(args.iter().cloned().collect())
}

/// Collection: append - `values` added to the end of `seq`.
///
/// An unset `seq` yields a sequence of `values`; any other non-collection
/// is returned unchanged.
#[must_use]
pub fn append(seq: &Value, values: &[Value]) -> Value {
    if seq.is_nil() {
        return slice(values);
    }
    let Some(items) = elements(seq) else {
        log::trace!("append: unsupported {} input, returned unchanged", seq.kind());
        return seq.clone();
    };
    Value::Vec(items.into_iter().chain(values.iter().cloned()).collect())
}
