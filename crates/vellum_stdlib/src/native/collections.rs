//! Collection functions.
//!
//! Thin adapters from the calling convention onto `vellum_ops`, plus
//! `Apply`, which needs the table.

use std::borrow::Cow;

use vellum_foundation::{Arity, LtVec, Result, Value};
use vellum_ops::{Shape, build, elements, fallback, lookup, select, sets, to_text};

use crate::context::CallContext;
use crate::table::NativeFn;

pub(crate) const FUNCTIONS: &[NativeFn] = &[
    NativeFn { name: "collections.After", arity: Arity::Exact(2), func: after },
    NativeFn { name: "collections.Append", arity: Arity::Variadic(1), func: append },
    NativeFn { name: "collections.Apply", arity: Arity::Variadic(2), func: apply },
    NativeFn { name: "collections.Complement", arity: Arity::Variadic(0), func: complement },
    NativeFn { name: "collections.Delimit", arity: Arity::Range(2, 3), func: delimit },
    NativeFn { name: "collections.Dictionary", arity: Arity::Variadic(0), func: dictionary },
    NativeFn { name: "collections.First", arity: Arity::Exact(2), func: first },
    NativeFn { name: "collections.In", arity: Arity::Exact(2), func: in_fn },
    NativeFn { name: "collections.Index", arity: Arity::Variadic(1), func: index },
    NativeFn { name: "collections.Intersect", arity: Arity::Exact(2), func: intersect },
    NativeFn { name: "collections.IsSet", arity: Arity::Exact(2), func: is_set },
    NativeFn { name: "collections.Last", arity: Arity::Exact(2), func: last },
    NativeFn { name: "collections.Merge", arity: Arity::Variadic(0), func: merge },
    NativeFn { name: "collections.Querify", arity: Arity::Variadic(0), func: querify },
    NativeFn { name: "collections.Reverse", arity: Arity::Exact(1), func: reverse },
    NativeFn { name: "collections.Seq", arity: Arity::Variadic(0), func: seq },
    NativeFn { name: "collections.Shuffle", arity: Arity::Exact(1), func: shuffle },
    NativeFn { name: "collections.Slice", arity: Arity::Variadic(0), func: slice },
    NativeFn { name: "collections.Sort", arity: Arity::Range(1, 3), func: sort },
    NativeFn { name: "collections.Union", arity: Arity::Exact(2), func: union },
    NativeFn { name: "collections.Uniq", arity: Arity::Exact(1), func: uniq },
    NativeFn { name: "collections.Where", arity: Arity::Range(3, 4), func: where_fn },
];

pub(crate) const ALIASES: &[(&str, &str)] = &[
    ("after", "collections.After"),
    ("append", "collections.Append"),
    ("apply", "collections.Apply"),
    ("complement", "collections.Complement"),
    ("delimit", "collections.Delimit"),
    ("dict", "collections.Dictionary"),
    ("first", "collections.First"),
    ("in", "collections.In"),
    ("index", "collections.Index"),
    ("intersect", "collections.Intersect"),
    ("isSet", "collections.IsSet"),
    ("isset", "collections.IsSet"),
    ("last", "collections.Last"),
    ("merge", "collections.Merge"),
    ("querify", "collections.Querify"),
    ("reverse", "collections.Reverse"),
    ("seq", "collections.Seq"),
    ("shuffle", "collections.Shuffle"),
    ("slice", "collections.Slice"),
    ("sort", "collections.Sort"),
    ("union", "collections.Union"),
    ("uniq", "collections.Uniq"),
    ("where", "collections.Where"),
];

// =============================================================================
// Selection
// =============================================================================

fn first(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(select::first(&args[0], &args[1]))
}

fn last(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(select::last(&args[0], &args[1]))
}

fn after(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(select::after(&args[0], &args[1]))
}

fn reverse(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(select::reverse(&args[0]))
}

fn sort(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(select::sort(&args[0], args.get(1), args.get(2)))
}

fn shuffle(ctx: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(select::shuffle(ctx.rng(), &args[0]))
}

fn slice(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(select::slice(args))
}

fn append(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(select::append(&args[0], &args[1..]))
}

// =============================================================================
// Sets
// =============================================================================

fn uniq(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(sets::uniq(&args[0]))
}

fn union(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(sets::union(&args[0], &args[1]))
}

fn intersect(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(sets::intersect(&args[0], &args[1]))
}

fn complement(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(sets::complement(args))
}

// =============================================================================
// Lookup
// =============================================================================

fn index(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(lookup::index(&args[0], &args[1..]))
}

fn is_set(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::Bool(lookup::is_set(&args[0], &args[1])))
}

fn in_fn(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::Bool(lookup::contains(&args[0], &args[1])))
}

/// Collection: where - `(seq, field, value)` compares with `eq`;
/// `(seq, field, op, value)` names the operator.
fn where_fn(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let field = to_text(&args[1]);
    let (op, value) = match args {
        [_, _, op, value] => (to_text(op), value),
        _ => (Cow::Borrowed("eq"), &args[2]),
    };
    Ok(lookup::filter(&args[0], &field, &op, value))
}

// =============================================================================
// Construction
// =============================================================================

fn merge(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(build::merge(args))
}

fn dictionary(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(build::dictionary(args))
}

fn seq(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(build::seq(args))
}

fn delimit(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(build::delimit(&args[0], &args[1], args.get(2)))
}

fn querify(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(build::querify(args))
}

// =============================================================================
// Apply
// =============================================================================

/// Collection: apply - calls a table function once per element.
///
/// `(seq, name, params...)`. A `"."` parameter is replaced by the element;
/// without one the element is appended as the last argument. An unknown
/// function yields the empty sequence and a failing call yields unset in
/// that element's slot.
fn apply(ctx: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let (seq, name, params) = (&args[0], to_text(&args[1]), &args[2..]);
    let Some(items) = elements(seq) else {
        return Ok(fallback("apply", seq, Shape::Sequence));
    };
    if !ctx.table().contains(&name) {
        log::warn!("apply: unknown function {name}");
        return Ok(Value::Vec(LtVec::new()));
    }

    let has_dot = params.iter().any(|p| p.as_str() == Some("."));
    let mut results = Vec::with_capacity(items.len());
    for item in &items {
        let call_args: Vec<Value> = if has_dot {
            params
                .iter()
                .map(|p| if p.as_str() == Some(".") { item.clone() } else { p.clone() })
                .collect()
        } else {
            params.iter().cloned().chain(std::iter::once(item.clone())).collect()
        };
        let result = ctx.call(&name, &call_args).unwrap_or_else(|err| {
            log::debug!("apply: {name} failed on {item:?}: {err}");
            Value::Nil
        });
        results.push(result);
    }
    Ok(Value::Vec(results.into_iter().collect()))
}
