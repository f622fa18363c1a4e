//! Text manipulation.
//!
//! Every argument is read through its text rendering. Positions and
//! lengths count characters, not bytes.

use regex::Regex;
use vellum_foundation::{Arity, LtVec, Result, Value};
use vellum_ops::{Shape, fallback, to_int};

use crate::context::CallContext;
use crate::native::text;
use crate::table::NativeFn;

pub(crate) const FUNCTIONS: &[NativeFn] = &[
    NativeFn { name: "strings.Chomp", arity: Arity::Exact(1), func: chomp },
    NativeFn { name: "strings.Contains", arity: Arity::Exact(2), func: contains },
    NativeFn { name: "strings.ContainsAny", arity: Arity::Exact(2), func: contains_any },
    NativeFn { name: "strings.ContainsNonSpace", arity: Arity::Exact(1), func: contains_non_space },
    NativeFn { name: "strings.Count", arity: Arity::Exact(2), func: count },
    NativeFn { name: "strings.CountRunes", arity: Arity::Exact(1), func: count_runes },
    NativeFn { name: "strings.CountWords", arity: Arity::Exact(1), func: count_words },
    NativeFn { name: "strings.FindRE", arity: Arity::Range(2, 3), func: find_re },
    NativeFn { name: "strings.FirstUpper", arity: Arity::Exact(1), func: first_upper },
    NativeFn { name: "strings.HasPrefix", arity: Arity::Exact(2), func: has_prefix },
    NativeFn { name: "strings.HasSuffix", arity: Arity::Exact(2), func: has_suffix },
    NativeFn { name: "strings.Repeat", arity: Arity::Exact(2), func: repeat },
    NativeFn { name: "strings.Replace", arity: Arity::Range(3, 4), func: replace },
    NativeFn { name: "strings.ReplaceRE", arity: Arity::Range(3, 4), func: replace_re },
    NativeFn { name: "strings.RuneCount", arity: Arity::Exact(1), func: rune_count },
    NativeFn { name: "strings.SliceString", arity: Arity::Range(1, 3), func: slice_string },
    NativeFn { name: "strings.Split", arity: Arity::Exact(2), func: split },
    NativeFn { name: "strings.Substr", arity: Arity::Range(1, 3), func: substr },
    NativeFn { name: "strings.Title", arity: Arity::Exact(1), func: title },
    NativeFn { name: "strings.ToLower", arity: Arity::Exact(1), func: to_lower },
    NativeFn { name: "strings.ToUpper", arity: Arity::Exact(1), func: to_upper },
    NativeFn { name: "strings.Trim", arity: Arity::Exact(2), func: trim },
    NativeFn { name: "strings.TrimLeft", arity: Arity::Exact(2), func: trim_left },
    NativeFn { name: "strings.TrimPrefix", arity: Arity::Exact(2), func: trim_prefix },
    NativeFn { name: "strings.TrimRight", arity: Arity::Exact(2), func: trim_right },
    NativeFn { name: "strings.TrimSpace", arity: Arity::Exact(1), func: trim_space },
    NativeFn { name: "strings.TrimSuffix", arity: Arity::Exact(2), func: trim_suffix },
    NativeFn { name: "strings.Truncate", arity: Arity::Range(2, 3), func: truncate },
];

pub(crate) const ALIASES: &[(&str, &str)] = &[
    ("chomp", "strings.Chomp"),
    ("countrunes", "strings.CountRunes"),
    ("countwords", "strings.CountWords"),
    ("findRE", "strings.FindRE"),
    ("hasPrefix", "strings.HasPrefix"),
    ("lower", "strings.ToLower"),
    ("replace", "strings.Replace"),
    ("replaceRE", "strings.ReplaceRE"),
    ("slicestr", "strings.SliceString"),
    ("split", "strings.Split"),
    ("substr", "strings.Substr"),
    ("title", "strings.Title"),
    ("trim", "strings.Trim"),
    ("truncate", "strings.Truncate"),
    ("upper", "strings.ToUpper"),
];

/// Compiles a pattern, logging and returning `None` when it is invalid.
fn pattern(source: &str, op: &str) -> Option<Regex> {
    match Regex::new(source) {
        Ok(re) => Some(re),
        Err(err) => {
            log::debug!("{op}: invalid pattern {source:?}: {err}");
            None
        }
    }
}

/// Reads an optional limit argument; negative or absent means unlimited.
fn limit(args: &[Value], index: usize) -> Option<usize> {
    args.get(index).and_then(|v| usize::try_from(to_int(v)).ok())
}

/// Resolves a possibly negative character offset against `len`.
fn offset(position: i64, len: usize) -> usize {
    let len_i = i64::try_from(len).unwrap_or(i64::MAX);
    let resolved = if position < 0 { len_i.saturating_add(position) } else { position };
    usize::try_from(resolved.clamp(0, len_i)).unwrap_or(0)
}

fn chars_between(s: &str, start: usize, end: usize) -> String {
    s.chars().skip(start).take(end.saturating_sub(start)).collect()
}

// =============================================================================
// Predicates and counts
// =============================================================================

fn contains(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::Bool(text(args, 0).contains(&text(args, 1))))
}

fn contains_any(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let chars = text(args, 1);
    Ok(Value::Bool(text(args, 0).chars().any(|c| chars.contains(c))))
}

fn contains_non_space(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::Bool(text(args, 0).chars().any(|c| !c.is_whitespace())))
}

fn has_prefix(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::Bool(text(args, 0).starts_with(&text(args, 1))))
}

fn has_suffix(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::Bool(text(args, 0).ends_with(&text(args, 1))))
}

/// Strings: count - non-overlapping occurrences of a substring.
///
/// `(substr, s)`. An empty substring counts the gaps between characters.
fn count(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let (needle, haystack) = (text(args, 0), text(args, 1));
    let n = if needle.is_empty() {
        haystack.chars().count() + 1
    } else {
        haystack.matches(needle.as_str()).count()
    };
    Ok(Value::Int(i64::try_from(n).unwrap_or(i64::MAX)))
}

/// Strings: countrunes - characters that are not whitespace.
fn count_runes(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let n = text(args, 0).chars().filter(|c| !c.is_whitespace()).count();
    Ok(Value::Int(i64::try_from(n).unwrap_or(i64::MAX)))
}

fn count_words(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let n = text(args, 0).split_whitespace().count();
    Ok(Value::Int(i64::try_from(n).unwrap_or(i64::MAX)))
}

fn rune_count(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let n = text(args, 0).chars().count();
    Ok(Value::Int(i64::try_from(n).unwrap_or(i64::MAX)))
}

// =============================================================================
// Case
// =============================================================================

fn to_lower(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::from(text(args, 0).to_lowercase()))
}

fn to_upper(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::from(text(args, 0).to_uppercase()))
}

fn first_upper(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let s = text(args, 0);
    let mut chars = s.chars();
    let out = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    Ok(Value::from(out))
}

/// Strings: title - upper-cases the first letter of every word.
fn title(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let mut out = String::new();
    let mut at_word_start = true;
    for c in text(args, 0).chars() {
        if at_word_start && c.is_alphanumeric() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = !c.is_alphanumeric() && c != '\'';
    }
    Ok(Value::from(out))
}

// =============================================================================
// Trimming
// =============================================================================

/// Strings: chomp - removes trailing newlines.
fn chomp(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::from(text(args, 0).trim_end_matches(['\r', '\n'])))
}

/// Strings: trim - `(s, cutset)`, both ends.
fn trim(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let cutset: Vec<char> = text(args, 1).chars().collect();
    Ok(Value::from(text(args, 0).trim_matches(cutset.as_slice())))
}

fn trim_left(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let cutset: Vec<char> = text(args, 1).chars().collect();
    Ok(Value::from(text(args, 0).trim_start_matches(cutset.as_slice())))
}

fn trim_right(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let cutset: Vec<char> = text(args, 1).chars().collect();
    Ok(Value::from(text(args, 0).trim_end_matches(cutset.as_slice())))
}

/// Strings: trimPrefix - `(prefix, s)`.
fn trim_prefix(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let (prefix, s) = (text(args, 0), text(args, 1));
    Ok(Value::from(s.strip_prefix(prefix.as_str()).unwrap_or(&s)))
}

/// Strings: trimSuffix - `(suffix, s)`.
fn trim_suffix(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let (suffix, s) = (text(args, 0), text(args, 1));
    Ok(Value::from(s.strip_suffix(suffix.as_str()).unwrap_or(&s)))
}

fn trim_space(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::from(text(args, 0).trim()))
}

// =============================================================================
// Slicing
// =============================================================================

/// Strings: substr - `(s, start?, length?)`.
///
/// A negative start counts from the end; a negative length leaves that many
/// characters off the end.
fn substr(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let s = text(args, 0);
    let len = s.chars().count();
    let start = offset(args.get(1).map_or(0, to_int), len);
    let end = match args.get(2).map(to_int) {
        None => len,
        Some(n) if n < 0 => offset(n, len),
        Some(n) => start.saturating_add(usize::try_from(n).unwrap_or(0)).min(len),
    };
    Ok(Value::from(chars_between(&s, start, end)))
}

/// Strings: slicestr - `(s, start?, end?)`; an out-of-range span is empty.
fn slice_string(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let s = text(args, 0);
    let len = s.chars().count();
    let start = args.get(1).map_or(0, to_int);
    let end = args.get(2).map_or(i64::try_from(len).unwrap_or(i64::MAX), to_int);
    let span = usize::try_from(start)
        .ok()
        .zip(usize::try_from(end).ok())
        .filter(|(start, end)| start <= end && *end <= len);
    let out = span.map_or_else(String::new, |(start, end)| chars_between(&s, start, end));
    Ok(Value::from(out))
}

/// Strings: split - `(s, delimiter)`; an empty delimiter splits characters.
fn split(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let (s, delim) = (text(args, 0), text(args, 1));
    let parts: LtVec<Value> = if delim.is_empty() {
        s.chars().map(|c| Value::from(c.to_string())).collect()
    } else {
        s.split(delim.as_str()).map(Value::from).collect()
    };
    Ok(Value::Vec(parts))
}

/// Largest result `Repeat` will build, in bytes.
const MAX_REPEAT_BYTES: usize = 1 << 26;

/// Strings: repeat - `(n, s)`; a negative count is empty, and so is a
/// result that would exceed [`MAX_REPEAT_BYTES`].
fn repeat(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let n = usize::try_from(to_int(&args[0])).unwrap_or(0);
    let s = text(args, 1);
    match n.checked_mul(s.len()) {
        Some(size) if size <= MAX_REPEAT_BYTES => Ok(Value::from(s.repeat(n))),
        _ => Ok(fallback("repeat", &args[0], Shape::Text)),
    }
}

/// Strings: truncate - `(size, s)` or `(size, ellipsis, s)`.
///
/// Cuts at the last word boundary that fits and appends the ellipsis
/// (the configured one when none is given). Text within `size` characters
/// is returned unchanged.
fn truncate(ctx: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let size = usize::try_from(to_int(&args[0])).unwrap_or(0);
    let (ellipsis, s) = match args {
        [_, ellipsis, s] => (vellum_ops::to_text(ellipsis).into_owned(), vellum_ops::to_text(s)),
        _ => (ctx.config().truncate_ellipsis.clone(), vellum_ops::to_text(&args[1])),
    };
    if s.chars().count() <= size {
        return Ok(Value::from(s.into_owned()));
    }

    let cut = s.char_indices().nth(size).map_or(s.len(), |(i, _)| i);
    let head = &s[..cut];
    let next_is_space = s[cut..].starts_with(char::is_whitespace);
    let kept = if next_is_space {
        head
    } else {
        head.rfind(char::is_whitespace).map_or(head, |i| &head[..i])
    };
    Ok(Value::from(format!("{}{ellipsis}", kept.trim_end())))
}

// =============================================================================
// Replacement and regular expressions
// =============================================================================

/// Strings: replace - `(s, old, new, limit?)`.
fn replace(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let (s, old, new) = (text(args, 0), text(args, 1), text(args, 2));
    let out = match limit(args, 3) {
        Some(n) => s.replacen(old.as_str(), &new, n),
        None => s.replace(old.as_str(), &new),
    };
    Ok(Value::from(out))
}

/// Strings: replaceRE - `(pattern, replacement, s, limit?)`.
///
/// `$1` and `${name}` expand capture groups. An invalid pattern returns the
/// input unchanged.
fn replace_re(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let (source, replacement, s) = (text(args, 0), text(args, 1), text(args, 2));
    let Some(re) = pattern(&source, "replaceRE") else {
        return Ok(Value::from(s));
    };
    let out = re.replacen(&s, limit(args, 3).unwrap_or(0), replacement.as_str());
    Ok(Value::from(out.into_owned()))
}

/// Strings: findRE - `(pattern, s, limit?)`, every match in order.
///
/// An invalid pattern finds nothing.
fn find_re(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let (source, s) = (text(args, 0), text(args, 1));
    let Some(re) = pattern(&source, "findRE") else {
        return Ok(Value::Vec(LtVec::new()));
    };
    let found: LtVec<Value> = re
        .find_iter(&s)
        .take(limit(args, 2).unwrap_or(usize::MAX))
        .map(|m| Value::from(m.as_str()))
        .collect();
    Ok(Value::Vec(found))
}
