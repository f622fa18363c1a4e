//! Printing to text.
//!
//! `Printf` understands a small verb set:
//! `%v %s %d %f %.Nf %t %q %x %%`. A verb without an argument renders as
//! `%!v(MISSING)`; an unknown verb renders as `%!c(value)`.

use std::fmt::Write as _;
use std::iter::Peekable;
use std::str::Chars;

use vellum_foundation::{Arity, Result, Value};
use vellum_ops::{to_float, to_int, to_text};

use crate::context::CallContext;
use crate::native::text;
use crate::table::NativeFn;

pub(crate) const FUNCTIONS: &[NativeFn] = &[
    NativeFn { name: "fmt.Print", arity: Arity::Variadic(0), func: print },
    NativeFn { name: "fmt.Printf", arity: Arity::Variadic(1), func: printf },
    NativeFn { name: "fmt.Println", arity: Arity::Variadic(0), func: println },
];

pub(crate) const ALIASES: &[(&str, &str)] = &[
    ("print", "fmt.Print"),
    ("printf", "fmt.Printf"),
    ("println", "fmt.Println"),
];

/// Concatenates operands, with a space between two adjacent non-text ones.
fn print(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let mut out = String::new();
    for (i, arg) in args.iter().enumerate() {
        let spaced = i > 0 && arg.as_str().is_none() && args[i - 1].as_str().is_none();
        if spaced {
            out.push(' ');
        }
        out.push_str(&to_text(arg));
    }
    Ok(Value::from(out))
}

/// Joins every operand with spaces and ends with a newline.
fn println(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let mut out = args.iter().map(to_text).collect::<Vec<_>>().join(" ");
    out.push('\n');
    Ok(Value::from(out))
}

fn printf(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::from(format(&text(args, 0), &args[1..])))
}

/// Reads an optional `.N` precision after a `%`.
fn precision(chars: &mut Peekable<Chars<'_>>) -> Option<usize> {
    if chars.peek() != Some(&'.') {
        return None;
    }
    chars.next();
    let mut digits = String::new();
    while let Some(c) = chars.peek().copied().filter(char::is_ascii_digit) {
        digits.push(c);
        chars.next();
    }
    Some(digits.parse().unwrap_or(0))
}

fn format(layout: &str, args: &[Value]) -> String {
    let mut out = String::new();
    let mut next = args.iter();
    let mut chars = layout.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        let prec = precision(&mut chars);
        let Some(verb) = chars.next() else {
            out.push_str("%!(NOVERB)");
            break;
        };
        if verb == '%' {
            out.push('%');
            continue;
        }
        let Some(arg) = next.next() else {
            let _ = write!(out, "%!{verb}(MISSING)");
            continue;
        };
        let _ = match verb {
            'v' | 's' => write!(out, "{}", to_text(arg)),
            'd' => write!(out, "{}", to_int(arg)),
            'f' => write!(out, "{:.*}", prec.unwrap_or(6), to_float(arg)),
            't' => write!(out, "{}", arg.is_truthy()),
            'q' => write!(out, "{:?}", to_text(arg).as_ref()),
            'x' => match arg {
                Value::Int(n) => write!(out, "{n:x}"),
                _ => to_text(arg).bytes().try_for_each(|b| write!(out, "{b:02x}")),
            },
            other => write!(out, "%!{other}({})", to_text(arg)),
        };
    }

    let extra: Vec<_> = next.map(|a| to_text(a).into_owned()).collect();
    if !extra.is_empty() {
        let _ = write!(out, "%!(EXTRA {})", extra.join(", "));
    }
    out
}
