//! Integration tests for ordering and equality

use std::cmp::Ordering;

use chrono::{TimeZone, Utc};
use vellum_foundation::Value;
use vellum_ops::compare::{conditional, default, ge, lt};
use vellum_ops::{compare, equal};

#[test]
fn equality_is_strict_across_kinds() {
    assert!(equal(&Value::Int(1), &Value::Int(1)));
    assert!(!equal(&Value::Int(1), &Value::Float(1.0)));
    assert!(!equal(&Value::Int(1), &Value::from("1")));
    assert!(equal(&Value::seq([1, 2]), &Value::seq([1, 2])));
}

#[test]
fn numeric_text_compares_as_number() {
    assert_eq!(compare(&Value::from("10"), &Value::Int(9)), Ordering::Greater);
    assert_eq!(compare(&Value::Float(2.0), &Value::Int(2)), Ordering::Equal);
    assert!(lt(&Value::Int(2), &Value::from("10")));
}

#[test]
fn other_pairs_compare_as_text() {
    assert_eq!(compare(&Value::from("b"), &Value::from("a")), Ordering::Greater);
    assert_eq!(compare(&Value::from("abc"), &Value::Int(1)), Ordering::Greater);
    assert!(ge(&Value::from("same"), &Value::from("same")));
}

#[test]
fn large_integers_compare_exactly() {
    let big = Value::Int(i64::MAX);
    let smaller = Value::Int(i64::MAX - 1);
    assert_eq!(compare(&big, &smaller), Ordering::Greater);
}

#[test]
fn times_compare_chronologically() {
    let early = Value::Time(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap().fixed_offset());
    let late = Value::Time(Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap().fixed_offset());
    assert_eq!(compare(&early, &late), Ordering::Less);
}

#[test]
fn default_replaces_empty_values() {
    let fb = Value::from("fb");
    for empty in [
        Value::Nil,
        Value::Bool(false),
        Value::from(""),
        Value::seq(Vec::<Value>::new()),
        Value::map(Vec::<(Value, Value)>::new()),
    ] {
        assert_eq!(default(&fb, &empty), fb, "{empty:?} should be empty");
    }
    assert_eq!(default(&fb, &Value::Int(0)), Value::Int(0));
}

#[test]
fn conditional_uses_truthiness() {
    let (a, b) = (Value::from("a"), Value::from("b"));
    assert_eq!(conditional(&Value::from(""), &a, &b), a);
    assert_eq!(conditional(&Value::Nil, &a, &b), b);
}
