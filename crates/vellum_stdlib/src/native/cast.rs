//! Scalar conversions.

use vellum_foundation::{Arity, Result, Value};
use vellum_ops::{to_float, to_int, to_text};

use crate::context::CallContext;
use crate::table::NativeFn;

pub(crate) const FUNCTIONS: &[NativeFn] = &[
    NativeFn { name: "cast.ToFloat", arity: Arity::Exact(1), func: to_float_fn },
    NativeFn { name: "cast.ToInt", arity: Arity::Exact(1), func: to_int_fn },
    NativeFn { name: "cast.ToString", arity: Arity::Exact(1), func: to_string_fn },
];

pub(crate) const ALIASES: &[(&str, &str)] = &[
    ("float", "cast.ToFloat"),
    ("int", "cast.ToInt"),
    ("string", "cast.ToString"),
];

fn to_float_fn(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::Float(to_float(&args[0])))
}

fn to_int_fn(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::Int(to_int(&args[0])))
}

fn to_string_fn(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::from(to_text(&args[0]).into_owned()))
}
