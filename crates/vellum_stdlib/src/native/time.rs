//! Timestamps and durations.

use std::fmt::Write as _;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use vellum_foundation::{Arity, Error, Result, Value};

use crate::config::FuncsConfig;
use crate::context::CallContext;
use crate::native::text;
use crate::table::NativeFn;

pub(crate) const FUNCTIONS: &[NativeFn] = &[
    NativeFn { name: "time.AsTime", arity: Arity::Exact(1), func: as_time },
    NativeFn { name: "time.Format", arity: Arity::Exact(2), func: format },
    NativeFn { name: "time.Now", arity: Arity::Exact(0), func: now },
    NativeFn { name: "time.ParseDuration", arity: Arity::Exact(1), func: parse_duration },
];

pub(crate) const ALIASES: &[(&str, &str)] = &[
    ("dateFormat", "time.Format"),
    ("now", "time.Now"),
    ("time", "time.AsTime"),
];

/// Reads a timestamp from a time, RFC 3339 text, text in one of the
/// configured formats, or integer Unix seconds.
fn parse_time(value: &Value, config: &FuncsConfig) -> Option<DateTime<FixedOffset>> {
    let s = match value {
        Value::Time(t) => return Some(*t),
        Value::Int(secs) => return Utc.timestamp_opt(*secs, 0).single().map(|t| t.fixed_offset()),
        Value::String(s) => s.trim(),
        _ => return None,
    };
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Some(t);
    }
    config.time_formats.iter().find_map(|layout| {
        DateTime::parse_from_str(s, layout)
            .ok()
            .or_else(|| {
                NaiveDateTime::parse_from_str(s, layout)
                    .ok()
                    .map(|t| t.and_utc().fixed_offset())
            })
            .or_else(|| {
                NaiveDate::parse_from_str(s, layout)
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
                    .map(|t| t.and_utc().fixed_offset())
            })
    })
}

/// Time: AsTime - the timestamp, or nil when the input is not one.
fn as_time(ctx: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let parsed = parse_time(&args[0], ctx.config());
    if parsed.is_none() {
        log::debug!("time: cannot read {:?} as a time", args[0]);
    }
    Ok(parsed.map_or(Value::Nil, Value::Time))
}

/// Time: Format - `(layout, t)` with a strftime-style layout.
///
/// An unreadable time or a malformed layout renders as empty text.
fn format(ctx: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let layout = text(args, 0);
    let Some(t) = parse_time(&args[1], ctx.config()) else {
        return Ok(Value::from(""));
    };
    let mut out = String::new();
    if write!(out, "{}", t.format(&layout)).is_err() {
        log::debug!("dateFormat: malformed layout {layout:?}");
        out.clear();
    }
    Ok(Value::from(out))
}

fn now(_: &mut CallContext<'_>, _: &[Value]) -> Result<Value> {
    Ok(Value::Time(Utc::now().fixed_offset()))
}

const UNITS: &[(&str, f64)] = &[
    ("ns", 1.0),
    ("us", 1e3),
    ("µs", 1e3),
    ("μs", 1e3),
    ("ms", 1e6),
    ("s", 1e9),
    ("m", 60e9),
    ("h", 3600e9),
];

/// Parses text like `1h30m`, `-1.5s` or `250ms` into nanoseconds.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn duration_nanos(input: &str) -> Option<i64> {
    let (negative, mut rest) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input.strip_prefix('+').unwrap_or(input)),
    };
    if rest == "0" {
        return Some(0);
    }
    if rest.is_empty() {
        return None;
    }

    let mut total = 0.0_f64;
    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        let number: f64 = rest[..number_len].parse().ok()?;
        rest = &rest[number_len..];

        let unit_len = rest
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(rest.len());
        let scale = UNITS
            .iter()
            .find(|(unit, _)| *unit == &rest[..unit_len])
            .map(|(_, scale)| *scale)?;
        rest = &rest[unit_len..];

        total += number * scale;
    }

    let signed = if negative { -total } else { total };
    (signed.abs() <= i64::MAX as f64).then(|| signed.round() as i64)
}

/// Time: ParseDuration - nanoseconds as an integer.
fn parse_duration(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let input = text(args, 0);
    duration_nanos(input.trim())
        .map(Value::Int)
        .ok_or_else(|| Error::invalid_duration(input))
}
