//! Kind predicates.

use vellum_foundation::{Arity, Result, Value};

use crate::context::CallContext;
use crate::table::NativeFn;

pub(crate) const FUNCTIONS: &[NativeFn] = &[
    NativeFn { name: "reflect.IsMap", arity: Arity::Exact(1), func: is_map },
    NativeFn { name: "reflect.IsSlice", arity: Arity::Exact(1), func: is_slice },
];

pub(crate) const ALIASES: &[(&str, &str)] = &[];

fn is_map(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::Bool(matches!(args[0], Value::Map(_))))
}

fn is_slice(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::Bool(matches!(args[0], Value::Vec(_))))
}
