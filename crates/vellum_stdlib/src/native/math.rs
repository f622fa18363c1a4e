//! Arithmetic.
//!
//! Integer operands stay integers; any float operand, or an integer
//! overflow, promotes the result to a float.

use rand::distributions::{Distribution, Standard};
use vellum_foundation::{Arity, Result, Value};
use vellum_ops::{elements, to_int};

use crate::context::CallContext;
use crate::table::NativeFn;

pub(crate) const FUNCTIONS: &[NativeFn] = &[
    NativeFn { name: "math.Abs", arity: Arity::Exact(1), func: abs },
    NativeFn { name: "math.Add", arity: Arity::Variadic(2), func: add },
    NativeFn { name: "math.Ceil", arity: Arity::Exact(1), func: ceil },
    NativeFn { name: "math.Div", arity: Arity::Variadic(2), func: div },
    NativeFn { name: "math.Floor", arity: Arity::Exact(1), func: floor },
    NativeFn { name: "math.Max", arity: Arity::Variadic(1), func: max },
    NativeFn { name: "math.Min", arity: Arity::Variadic(1), func: min },
    NativeFn { name: "math.Mod", arity: Arity::Exact(2), func: modulo },
    NativeFn { name: "math.Mul", arity: Arity::Variadic(2), func: mul },
    NativeFn { name: "math.Pi", arity: Arity::Exact(0), func: pi },
    NativeFn { name: "math.Pow", arity: Arity::Exact(2), func: pow },
    NativeFn { name: "math.Rand", arity: Arity::Exact(0), func: rand_fn },
    NativeFn { name: "math.Round", arity: Arity::Exact(1), func: round },
    NativeFn { name: "math.Sqrt", arity: Arity::Exact(1), func: sqrt },
    NativeFn { name: "math.Sub", arity: Arity::Variadic(2), func: sub },
];

pub(crate) const ALIASES: &[(&str, &str)] = &[
    ("add", "math.Add"),
    ("div", "math.Div"),
    ("mod", "math.Mod"),
    ("mul", "math.Mul"),
    ("sub", "math.Sub"),
];

// =============================================================================
// Numbers
// =============================================================================

#[derive(Copy, Clone, Debug, PartialEq)]
enum Num {
    Int(i64),
    Float(f64),
}

impl Num {
    /// Reads a number, preferring an integer reading of text.
    fn of(value: &Value) -> Self {
        match value {
            Value::Int(n) => Self::Int(*n),
            Value::Float(n) => Self::Float(*n),
            Value::String(s) => s
                .parse()
                .map(Self::Int)
                .or_else(|_| s.parse().map(Self::Float))
                .unwrap_or(Self::Int(0)),
            _ => Self::Int(0),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn float(self) -> f64 {
        match self {
            Self::Int(n) => n as f64,
            Self::Float(n) => n,
        }
    }

    fn value(self) -> Value {
        match self {
            Self::Int(n) => Value::Int(n),
            Self::Float(n) => Value::Float(n),
        }
    }
}

/// Folds operands left to right with an integer operation (falling back to
/// floats on overflow) and a float operation.
fn fold(
    args: &[Value],
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> Value {
    let mut operands = args.iter().map(Num::of);
    let Some(first) = operands.next() else {
        return Value::Int(0);
    };
    operands
        .fold(first, |acc, next| match (acc, next) {
            (Num::Int(a), Num::Int(b)) => {
                int_op(a, b).map_or_else(|| Num::Float(float_op(acc.float(), next.float())), Num::Int)
            }
            _ => Num::Float(float_op(acc.float(), next.float())),
        })
        .value()
}

// =============================================================================
// Arithmetic
// =============================================================================

fn add(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(fold(args, i64::checked_add, |a, b| a + b))
}

fn sub(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(fold(args, i64::checked_sub, |a, b| a - b))
}

fn mul(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(fold(args, i64::checked_mul, |a, b| a * b))
}

/// Math: div - integer division for integers; a zero divisor is skipped.
fn div(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let (dividend, divisors) = args.split_at(1);
    let kept: Vec<Value> = dividend
        .iter()
        .cloned()
        .chain(divisors.iter().filter(|d| Num::of(d).float() != 0.0).cloned())
        .collect();
    if kept.len() < args.len() {
        log::trace!("div: skipped {} zero divisor(s)", args.len() - kept.len());
    }
    Ok(fold(&kept, i64::checked_div, |a, b| a / b))
}

/// Math: mod - integer remainder; a zero divisor yields 0.
fn modulo(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let (a, b) = (to_int(&args[0]), to_int(&args[1]));
    Ok(Value::Int(a.checked_rem(b).unwrap_or(0)))
}

#[allow(clippy::cast_precision_loss)]
fn abs(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let n = match Num::of(&args[0]) {
        Num::Int(n) => n.checked_abs().map_or_else(|| Num::Float(n.abs_diff(0) as f64), Num::Int),
        Num::Float(n) => Num::Float(n.abs()),
    };
    Ok(n.value())
}

fn ceil(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::Float(Num::of(&args[0]).float().ceil()))
}

fn floor(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::Float(Num::of(&args[0]).float().floor()))
}

/// Math: round - half away from zero.
fn round(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::Float(Num::of(&args[0]).float().round()))
}

fn sqrt(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::Float(Num::of(&args[0]).float().sqrt()))
}

fn pow(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let (base, exp) = (Num::of(&args[0]).float(), Num::of(&args[1]).float());
    Ok(Value::Float(base.powf(exp)))
}

fn pi(_: &mut CallContext<'_>, _: &[Value]) -> Result<Value> {
    Ok(Value::Float(std::f64::consts::PI))
}

/// Math: rand - a float in `[0, 1)` from the render's generator.
fn rand_fn(ctx: &mut CallContext<'_>, _: &[Value]) -> Result<Value> {
    let n: f64 = Standard.sample(ctx.rng());
    Ok(Value::Float(n))
}

// =============================================================================
// Extremes
// =============================================================================

/// Collects numeric operands, flattening collections one level.
fn numbers(args: &[Value]) -> Vec<Num> {
    args.iter()
        .flat_map(|arg| match elements(arg) {
            Some(items) => items.into_iter().map(|v| Num::of(&v)).collect(),
            None => vec![Num::of(arg)],
        })
        .collect()
}

fn extreme(args: &[Value], pick_left: fn(f64, f64) -> bool) -> Value {
    numbers(args)
        .into_iter()
        .reduce(|best, next| if pick_left(best.float(), next.float()) { best } else { next })
        .map_or(Value::Int(0), Num::value)
}

fn max(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(extreme(args, |a, b| a >= b))
}

fn min(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(extreme(args, |a, b| a <= b))
}
