//! Element views over collections.

use vellum_foundation::{LtVec, Value};

/// Returns the elements a sequence operation sees in `value`.
///
/// Sequences yield their items; mappings yield their values ordered by
/// ascending key text. Every other kind yields `None`.
#[must_use]
pub fn elements(value: &Value) -> Option<LtVec<Value>> {
    match value {
        Value::Vec(v) => Some(v.clone()),
        Value::Map(m) => Some(
            Value::sorted_entries(m)
                .into_iter()
                .map(|(_, v)| v.clone())
                .collect(),
        ),
        _ => None,
    }
}
