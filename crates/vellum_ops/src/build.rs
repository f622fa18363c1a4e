//! Constructors that assemble new collections or text from their arguments.

use url::form_urlencoded;
use vellum_foundation::{LtMap, LtVec, Value};

use crate::coerce::{to_int, to_text};
use crate::view::elements;

/// Collection: merge - left-to-right key overwrite across mappings.
///
/// Keys keep their kind. Operands that are not mappings are skipped.
#[must_use]
pub fn merge(maps: &[Value]) -> Value {
    let merged = maps
        .iter()
        .filter_map(|operand| {
            let map = operand.as_map();
            if map.is_none() {
                log::trace!("merge: skipping {} operand", operand.kind());
            }
            map
        })
        .fold(LtMap::new(), |acc, next| acc.union(next));
    Value::Map(merged)
}

/// Collection: dictionary - a mapping from alternating key/value arguments.
///
/// Keys are coerced to text; a trailing unpaired key is dropped.
#[must_use]
pub fn dictionary(pairs: &[Value]) -> Value {
    let map: LtMap<Value, Value> = pairs
        .chunks_exact(2)
        .map(|pair| (Value::from(to_text(&pair[0]).into_owned()), pair[1].clone()))
        .collect();
    Value::Map(map)
}

/// Collection: seq - an inclusive integer range.
///
/// One argument counts `1..=n`, two give `start..=stop` by one, three give
/// `start..=stop` by `step`. The direction follows the sign of the step.
/// A zero step or an argument count outside `1..=3` yields the empty
/// sequence.
#[must_use]
pub fn seq(args: &[Value]) -> Value {
    let (start, stop, step) = match args {
        [n] => (1, to_int(n), 1),
        [start, stop] => (to_int(start), to_int(stop), 1),
        [start, stop, step] => (to_int(start), to_int(stop), to_int(step)),
        _ => return Value::Vec(LtVec::new()),
    };
    if step == 0 {
        return Value::Vec(LtVec::new());
    }
    let in_range = |i: i64| if step > 0 { i <= stop } else { i >= stop };
    let items: LtVec<Value> = std::iter::successors(Some(start), |i| i.checked_add(step))
        .take_while(|&i| in_range(i))
        .map(Value::Int)
        .collect();
    Value::Vec(items)
}

/// Collection: delimit - joins element text with `sep`.
///
/// `last_sep`, when given, goes before the final element of a collection
/// with at least two elements. A non-collection renders as its text, and
/// unset renders as the empty string.
#[must_use]
pub fn delimit(seq: &Value, sep: &Value, last_sep: Option<&Value>) -> Value {
    if seq.is_nil() {
        return Value::from("");
    }
    let Some(items) = elements(seq) else {
        return Value::from(to_text(seq).into_owned());
    };
    let sep = to_text(sep);
    let last_sep = last_sep.map_or_else(|| sep.clone(), to_text);
    let count = items.len();

    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(if i == count - 1 { &last_sep } else { &sep });
        }
        out.push_str(&to_text(item));
    }
    Value::from(out)
}

/// Collection: querify - a form-encoded query string.
///
/// Arguments alternate key and value; a single sequence argument supplies
/// the pairs instead. Pairs are sorted by key, keeping argument order for
/// equal keys, and a trailing unpaired key is dropped.
#[must_use]
pub fn querify(args: &[Value]) -> Value {
    let flattened;
    let args = match args {
        [Value::Vec(items)] => {
            flattened = items.iter().cloned().collect::<Vec<_>>();
            flattened.as_slice()
        }
        _ => args,
    };
    let mut pairs: Vec<(String, String)> = args
        .chunks_exact(2)
        .map(|pair| (to_text(&pair[0]).into_owned(), to_text(&pair[1]).into_owned()))
        .collect();
    pairs.sort_by(|a, b| a.0.cmp(&b.0));

    let mut query = form_urlencoded::Serializer::new(String::new());
    for (key, value) in &pairs {
        query.append_pair(key, value);
    }
    Value::from(query.finish())
}
