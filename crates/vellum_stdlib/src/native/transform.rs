//! HTML escaping and tag stripping.

use vellum_foundation::{Arity, Result, Value};

use crate::context::CallContext;
use crate::native::text;
use crate::table::NativeFn;

pub(crate) const FUNCTIONS: &[NativeFn] = &[
    NativeFn { name: "transform.HTMLEscape", arity: Arity::Exact(1), func: html_escape },
    NativeFn { name: "transform.HTMLUnescape", arity: Arity::Exact(1), func: html_unescape },
    NativeFn { name: "transform.Plainify", arity: Arity::Exact(1), func: plainify },
];

pub(crate) const ALIASES: &[(&str, &str)] = &[
    ("htmlEscape", "transform.HTMLEscape"),
    ("htmlUnescape", "transform.HTMLUnescape"),
    ("plainify", "transform.Plainify"),
];

const ESCAPES: &[(char, &str)] = &[
    ('&', "&amp;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('"', "&#34;"),
    ('\'', "&#39;"),
];

/// Named and numeric references recognised when unescaping.
const ENTITIES: &[(&str, char)] = &[
    ("&amp;", '&'),
    ("&lt;", '<'),
    ("&gt;", '>'),
    ("&quot;", '"'),
    ("&#34;", '"'),
    ("&apos;", '\''),
    ("&#39;", '\''),
    ("&nbsp;", '\u{a0}'),
];

fn html_escape(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let mut out = String::new();
    for c in text(args, 0).chars() {
        match ESCAPES.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => out.push_str(to),
            None => out.push(c),
        }
    }
    Ok(Value::from(out))
}

fn html_unescape(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let input = text(args, 0);
    let mut out = String::with_capacity(input.len());
    let mut rest = input.as_str();
    while let Some(at) = rest.find('&') {
        out.push_str(&rest[..at]);
        rest = &rest[at..];
        match ENTITIES.iter().find(|(entity, _)| rest.starts_with(entity)) {
            Some((entity, c)) => {
                out.push(*c);
                rest = &rest[entity.len()..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    Ok(Value::from(out))
}

/// Transform: plainify - strips HTML tags.
///
/// An unclosed `<` drops the rest of the input.
fn plainify(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let mut out = String::new();
    let mut in_tag = false;
    for c in text(args, 0).chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    Ok(Value::from(out))
}
