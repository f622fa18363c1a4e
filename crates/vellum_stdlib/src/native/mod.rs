//! Built-in function families.
//!
//! Each family module exposes a `FUNCTIONS` list of canonical entries and
//! an `ALIASES` list of `(short name, canonical name)` records:
//! - `cast`: scalar conversions
//! - `collections`: the collection algebra plus `Apply`
//! - `compare`: predicates, `Conditional` and `Default`
//! - `math`: arithmetic and rounding
//! - `strings`: text manipulation and regular expressions
//! - `encoding`: base64 and JSON
//! - `hash`: FNV and message digests
//! - `fmt`: `Print`, `Println` and `Printf`
//! - `path`: slash-separated path munging
//! - `reflect`: kind predicates
//! - `time`: timestamps and durations
//! - `transform`: HTML escaping and tag stripping
//! - `urls`: URL construction and parsing

#[allow(clippy::unnecessary_wraps)]
mod cast;
#[allow(clippy::unnecessary_wraps)]
mod collections;
#[allow(clippy::unnecessary_wraps)]
mod compare;
mod encoding;
#[allow(clippy::unnecessary_wraps)]
mod fmt;
#[allow(clippy::unnecessary_wraps)]
mod hash;
#[allow(clippy::unnecessary_wraps)]
mod math;
#[allow(clippy::unnecessary_wraps)]
mod path;
#[allow(clippy::unnecessary_wraps)]
mod reflect;
#[allow(clippy::unnecessary_wraps)]
mod strings;
mod time;
#[allow(clippy::unnecessary_wraps)]
mod transform;
mod urls;

use vellum_foundation::Value;
use vellum_ops::to_text;

use crate::table::NativeFn;

const FAMILIES: &[(&[NativeFn], &[(&str, &str)])] = &[
    (cast::FUNCTIONS, cast::ALIASES),
    (collections::FUNCTIONS, collections::ALIASES),
    (compare::FUNCTIONS, compare::ALIASES),
    (encoding::FUNCTIONS, encoding::ALIASES),
    (fmt::FUNCTIONS, fmt::ALIASES),
    (hash::FUNCTIONS, hash::ALIASES),
    (math::FUNCTIONS, math::ALIASES),
    (path::FUNCTIONS, path::ALIASES),
    (reflect::FUNCTIONS, reflect::ALIASES),
    (strings::FUNCTIONS, strings::ALIASES),
    (time::FUNCTIONS, time::ALIASES),
    (transform::FUNCTIONS, transform::ALIASES),
    (urls::FUNCTIONS, urls::ALIASES),
];

/// Every built-in entry.
pub(crate) fn functions() -> impl Iterator<Item = &'static NativeFn> {
    FAMILIES.iter().flat_map(|(functions, _)| functions.iter())
}

/// Every alias record.
pub(crate) fn aliases() -> impl Iterator<Item = (&'static str, &'static str)> {
    FAMILIES
        .iter()
        .flat_map(|(_, aliases)| aliases.iter().copied())
}

/// Returns the text of the argument at `index`, empty when absent.
pub(crate) fn text(args: &[Value], index: usize) -> String {
    args.get(index).map(|v| to_text(v).into_owned()).unwrap_or_default()
}
