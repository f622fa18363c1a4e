//! Comparison predicates and selection.

use vellum_foundation::{Arity, Result, Value};
use vellum_ops::compare;

use crate::context::CallContext;
use crate::table::NativeFn;

pub(crate) const FUNCTIONS: &[NativeFn] = &[
    NativeFn { name: "compare.Conditional", arity: Arity::Exact(3), func: conditional },
    NativeFn { name: "compare.Default", arity: Arity::Exact(2), func: default },
    NativeFn { name: "compare.Eq", arity: Arity::Exact(2), func: eq },
    NativeFn { name: "compare.Ge", arity: Arity::Exact(2), func: ge },
    NativeFn { name: "compare.Gt", arity: Arity::Exact(2), func: gt },
    NativeFn { name: "compare.Le", arity: Arity::Exact(2), func: le },
    NativeFn { name: "compare.Lt", arity: Arity::Exact(2), func: lt },
    NativeFn { name: "compare.Ne", arity: Arity::Exact(2), func: ne },
];

pub(crate) const ALIASES: &[(&str, &str)] = &[
    ("cond", "compare.Conditional"),
    ("default", "compare.Default"),
    ("eq", "compare.Eq"),
    ("ge", "compare.Ge"),
    ("gt", "compare.Gt"),
    ("le", "compare.Le"),
    ("lt", "compare.Lt"),
    ("ne", "compare.Ne"),
];

fn conditional(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(compare::conditional(&args[0], &args[1], &args[2]))
}

fn default(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(compare::default(&args[0], &args[1]))
}

fn eq(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::Bool(compare::eq(&args[0], &args[1])))
}

fn ne(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::Bool(compare::ne(&args[0], &args[1])))
}

fn gt(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::Bool(compare::gt(&args[0], &args[1])))
}

fn ge(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::Bool(compare::ge(&args[0], &args[1])))
}

fn lt(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::Bool(compare::lt(&args[0], &args[1])))
}

fn le(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::Bool(compare::le(&args[0], &args[1])))
}
