//! URL construction and parsing.
//!
//! `AbsURL` and `RelURL` resolve against the configured site root.

use url::{ParseError, Url};
use vellum_foundation::{Arity, Error, Result, Value};
use vellum_ops::{elements, to_text};

use crate::context::CallContext;
use crate::native::path::clean;
use crate::native::text;
use crate::table::NativeFn;

pub(crate) const FUNCTIONS: &[NativeFn] = &[
    NativeFn { name: "urls.AbsURL", arity: Arity::Exact(1), func: abs_url },
    NativeFn { name: "urls.Anchorize", arity: Arity::Exact(1), func: anchorize },
    NativeFn { name: "urls.JoinPath", arity: Arity::Variadic(1), func: join_path },
    NativeFn { name: "urls.Parse", arity: Arity::Exact(1), func: parse },
    NativeFn { name: "urls.RelURL", arity: Arity::Exact(1), func: rel_url },
    NativeFn { name: "urls.URLize", arity: Arity::Exact(1), func: urlize },
];

pub(crate) const ALIASES: &[(&str, &str)] = &[
    ("absURL", "urls.AbsURL"),
    ("anchorize", "urls.Anchorize"),
    ("relURL", "urls.RelURL"),
    ("urlize", "urls.URLize"),
];

/// Base used to resolve relative references in `Parse`.
const RELATIVE_BASE: &str = "relative:///";

fn is_absolute(input: &str) -> bool {
    input.starts_with("//") || Url::parse(input).is_ok()
}

/// Urls: absURL - prefixes relative input with the site root.
#[allow(clippy::unnecessary_wraps)]
fn abs_url(ctx: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let input = text(args, 0);
    if is_absolute(&input) {
        return Ok(Value::from(input));
    }
    let root = ctx.config().base_url.trim_end_matches('/');
    Ok(Value::from(format!("{root}/{}", input.trim_start_matches('/'))))
}

/// Urls: relURL - a root-relative path under the site root's path.
///
/// Input already under the site root has the root's origin removed.
/// Other absolute URLs pass through.
#[allow(clippy::unnecessary_wraps)]
fn rel_url(ctx: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let input = text(args, 0);
    let root = ctx.config().base_url.trim_end_matches('/');
    let root_path = Url::parse(root)
        .map(|u| u.path().trim_matches('/').to_string())
        .unwrap_or_default();

    if let Some(rest) = input.strip_prefix(root) {
        if rest.is_empty() || rest.starts_with('/') {
            let under = format!("{root_path}/{}", rest.trim_start_matches('/'));
            return Ok(Value::from(format!("/{}", under.trim_start_matches('/'))));
        }
    }
    if is_absolute(&input) {
        return Ok(Value::from(input));
    }
    let already_under = input
        .strip_prefix('/')
        .and_then(|p| p.strip_prefix(root_path.as_str()))
        .is_some_and(|p| !root_path.is_empty() && (p.is_empty() || p.starts_with('/')));
    if already_under {
        return Ok(Value::from(input));
    }

    let under = format!("{root_path}/{}", input.trim_start_matches('/'));
    Ok(Value::from(format!("/{}", under.trim_start_matches('/'))))
}

/// Urls: anchorize - lowercase, dash-separated, stripped to word
/// characters.
#[allow(clippy::unnecessary_wraps)]
fn anchorize(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let out: String = text(args, 0)
        .trim()
        .chars()
        .filter_map(|c| match c {
            c if c.is_whitespace() => Some('-'),
            c if c.is_alphanumeric() || c == '-' || c == '_' => Some(c),
            _ => None,
        })
        .flat_map(char::to_lowercase)
        .collect();
    Ok(Value::from(out))
}

/// Urls: urlize - whitespace runs become dashes and the result is
/// percent-encoded as a path.
#[allow(clippy::unnecessary_wraps)]
fn urlize(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let dashed = text(args, 0).split_whitespace().collect::<Vec<_>>().join("-");
    let encoded = Url::parse(RELATIVE_BASE).map(|mut u| {
        u.set_path(&dashed);
        u.path().to_string()
    });
    let out = match encoded {
        Ok(path) if dashed.starts_with('/') => path,
        Ok(path) => path.trim_start_matches('/').to_string(),
        Err(_) => dashed,
    };
    Ok(Value::from(out))
}

/// Urls: JoinPath - joins elements onto a base, cleaning the path.
///
/// Sequences are flattened. An absolute first element keeps its origin.
fn join_path(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let parts: Vec<String> = args
        .iter()
        .flat_map(|arg| match elements(arg) {
            Some(items) => items.into_iter().collect(),
            None => vec![arg.clone()],
        })
        .map(|v| to_text(&v).into_owned())
        .collect();
    let (first, rest) = parts.split_first().map_or(("", &[][..]), |(f, r)| (f.as_str(), r));
    let trailing = parts.last().is_some_and(|p| p.ends_with('/'));

    let joined_path = |base: &str| {
        let mut path = std::iter::once(base)
            .chain(rest.iter().map(String::as_str))
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join("/");
        if path.is_empty() {
            return path;
        }
        path = clean(&path);
        if trailing && !path.ends_with('/') {
            path.push('/');
        }
        path
    };

    match Url::parse(first) {
        Ok(mut url) if !url.cannot_be_a_base() => {
            let path = joined_path(url.path());
            url.set_path(&path);
            Ok(Value::from(url.to_string()))
        }
        Ok(_) => Err(Error::invalid_url(first, "cannot be a base")),
        Err(_) => Ok(Value::from(joined_path(first))),
    }
}

/// Urls: Parse - a mapping of `scheme host port path query fragment`.
///
/// Relative references parse with empty `scheme` and `host`.
fn parse(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let input = text(args, 0);
    let (url, relative) = match Url::parse(&input) {
        Ok(url) => (url, false),
        Err(ParseError::RelativeUrlWithoutBase) => {
            let base = Url::parse(RELATIVE_BASE)
                .map_err(|err| Error::invalid_url(&input, err.to_string()))?;
            let joined = base
                .join(&input)
                .map_err(|err| Error::invalid_url(&input, err.to_string()))?;
            (joined, true)
        }
        Err(err) => return Err(Error::invalid_url(input, err.to_string())),
    };

    let path = if relative && !input.starts_with('/') {
        url.path().trim_start_matches('/').to_string()
    } else {
        url.path().to_string()
    };
    let (scheme, host) = if relative {
        (String::new(), String::new())
    } else {
        (url.scheme().to_string(), url.host_str().unwrap_or_default().to_string())
    };
    let port = url.port().map_or(Value::Nil, |p| Value::Int(i64::from(p)));

    Ok(Value::map([
        ("scheme", Value::from(scheme)),
        ("host", Value::from(host)),
        ("port", port),
        ("path", Value::from(path)),
        ("query", Value::from(url.query().unwrap_or_default())),
        ("fragment", Value::from(url.fragment().unwrap_or_default())),
    ]))
}
