//! Slash-separated path munging.
//!
//! Paths are purely lexical. Backslashes are read as forward slashes before
//! anything else happens.

use vellum_foundation::{Arity, Result, Value};
use vellum_ops::{elements, to_text};

use crate::context::CallContext;
use crate::native::text;
use crate::table::NativeFn;

pub(crate) const FUNCTIONS: &[NativeFn] = &[
    NativeFn { name: "path.Base", arity: Arity::Exact(1), func: base },
    NativeFn { name: "path.BaseName", arity: Arity::Exact(1), func: base_name },
    NativeFn { name: "path.Clean", arity: Arity::Exact(1), func: clean_fn },
    NativeFn { name: "path.Dir", arity: Arity::Exact(1), func: dir },
    NativeFn { name: "path.Ext", arity: Arity::Exact(1), func: ext },
    NativeFn { name: "path.Join", arity: Arity::Variadic(0), func: join },
    NativeFn { name: "path.Split", arity: Arity::Exact(1), func: split },
];

pub(crate) const ALIASES: &[(&str, &str)] = &[];

fn slashed(args: &[Value]) -> String {
    text(args, 0).replace('\\', "/")
}

/// Lexically shortest equivalent path.
pub(crate) fn clean(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }
    let rooted = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                _ if rooted => {}
                _ => parts.push(".."),
            },
            other => parts.push(other),
        }
    }
    let joined = parts.join("/");
    match (rooted, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Splits after the final slash.
fn split_last(path: &str) -> (&str, &str) {
    path.rfind('/').map_or(("", path), |i| path.split_at(i + 1))
}

fn last_element(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if path.is_empty() {
        return ".".to_string();
    }
    if trimmed.is_empty() {
        return "/".to_string();
    }
    split_last(trimmed).1.to_string()
}

fn extension(path: &str) -> &str {
    let file = split_last(path).1;
    file.rfind('.').map_or("", |i| &file[i..])
}

fn base(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::from(last_element(&slashed(args))))
}

/// Path: BaseName - the last element without its extension.
fn base_name(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let name = last_element(&slashed(args));
    let stem = name.strip_suffix(extension(&name)).unwrap_or(&name);
    Ok(Value::from(stem))
}

fn clean_fn(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::from(clean(&slashed(args))))
}

fn dir(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let path = slashed(args);
    Ok(Value::from(clean(split_last(&path).0)))
}

fn ext(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::from(extension(&slashed(args))))
}

/// Path: Join - joins the non-empty elements, flattening sequences.
fn join(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let parts: Vec<String> = args
        .iter()
        .flat_map(|arg| match elements(arg) {
            Some(items) => items.into_iter().collect(),
            None => vec![arg.clone()],
        })
        .map(|v| to_text(&v).replace('\\', "/"))
        .filter(|s| !s.is_empty())
        .collect();
    if parts.is_empty() {
        return Ok(Value::from(""));
    }
    Ok(Value::from(clean(&parts.join("/"))))
}

/// Path: Split - `[dir, file]`, where `dir` keeps its trailing slash.
fn split(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let path = slashed(args);
    let (dir, file) = split_last(&path);
    Ok(Value::seq([dir, file]))
}
