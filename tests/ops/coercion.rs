//! Integration tests for coercion
//!
//! Every value normalizes to a float, an integer and text without failing.

use vellum_foundation::Value;
use vellum_ops::{is_numeric_like, to_float, to_int, to_text};

#[test]
fn text_parses_as_number() {
    assert_eq!(to_float(&Value::from("2.5")), 2.5);
    assert_eq!(to_int(&Value::from("42")), 42);
    assert_eq!(to_int(&Value::from("-17")), -17);
}

#[test]
fn unparsable_text_is_zero() {
    assert_eq!(to_float(&Value::from("abc")), 0.0);
    assert_eq!(to_int(&Value::from("")), 0);
    // Integer syntax only; no float fallback
    assert_eq!(to_int(&Value::from("4.9")), 0);
    assert_eq!(to_float(&Value::from(" 2.5 ")), 0.0);
}

#[test]
fn booleans_and_nil() {
    assert_eq!(to_int(&Value::Bool(true)), 0);
    assert_eq!(to_float(&Value::Bool(true)), 0.0);
    assert_eq!(to_text(&Value::Bool(false)), "false");
    assert_eq!(to_float(&Value::Nil), 0.0);
    assert_eq!(to_text(&Value::Nil), "<nil>");
}

#[test]
fn collections_coerce_to_zero() {
    assert_eq!(to_int(&Value::seq([1, 2])), 0);
    assert_eq!(to_float(&Value::map([("a", 1)])), 0.0);
}

#[test]
fn float_to_int_truncates_toward_zero() {
    assert_eq!(to_int(&Value::Float(-7.9)), -7);
    assert_eq!(to_int(&Value::Float(f64::NAN)), 0);
    assert_eq!(to_int(&Value::Float(1e300)), i64::MAX);
}

#[test]
fn text_rendering() {
    assert_eq!(to_text(&Value::Int(7)), "7");
    assert_eq!(to_text(&Value::Float(0.5)), "0.5");
    assert_eq!(to_text(&Value::Float(1e21)), "1e+21");
    assert_eq!(to_text(&Value::Float(1e-7)), "1e-07");
    assert_eq!(to_text(&Value::bytes(&b"hi"[..])), "hi");
    assert_eq!(to_text(&Value::seq(["a", "b"])), "[a b]");
}

#[test]
fn numeric_likeness() {
    assert!(is_numeric_like(&Value::Int(1)));
    assert!(is_numeric_like(&Value::from("1e3")));
    assert!(!is_numeric_like(&Value::from("one")));
    assert!(!is_numeric_like(&Value::Nil));
}
