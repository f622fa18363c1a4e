//! Integration tests for Value types
//!
//! Tests Value variants, kinds, equality, hashing, display, and serde.

use chrono::{FixedOffset, TimeZone};
use std::collections::HashSet;
use std::sync::Arc;
use vellum_foundation::{Kind, LtMap, Value};

// =============================================================================
// Value Construction
// =============================================================================

#[test]
fn value_nil() {
    let v = Value::Nil;
    assert!(v.is_nil());
    assert!(!v.is_truthy());
    assert_eq!(v.kind(), Kind::Unset);
}

#[test]
fn value_bool() {
    assert!(Value::Bool(true).is_truthy());
    assert!(!Value::Bool(false).is_truthy());
    assert_eq!(Value::Bool(true).as_bool(), Some(true));
}

#[test]
fn value_numbers_keep_their_kind() {
    assert_eq!(Value::Int(42).as_int(), Some(42));
    assert_eq!(Value::Float(1.5).as_int(), None);
    assert_eq!(Value::Int(3).as_number(), Some(3.0));
    assert!(Value::Int(0).kind().is_number());
}

#[test]
fn value_text_and_bytes() {
    let text = Value::String(Arc::from("hello"));
    assert_eq!(text.as_str(), Some("hello"));
    assert_eq!(text.kind(), Kind::Text);

    let bytes = Value::bytes(&b"raw"[..]);
    assert_eq!(bytes.as_bytes(), Some(&b"raw"[..]));
    assert_eq!(bytes.kind(), Kind::Bytes);
}

#[test]
fn empty_text_is_truthy() {
    // Only nil and false are falsy
    assert!(Value::from("").is_truthy());
    assert!(Value::Int(0).is_truthy());
}

#[test]
fn value_collections() {
    let seq = Value::seq([1, 2, 3]);
    assert_eq!(seq.kind(), Kind::Sequence);
    assert_eq!(seq.as_vec().map(|v| v.len()), Some(3));

    let map = Value::map([("a", 1)]);
    assert_eq!(map.kind(), Kind::Mapping);
    assert!(map.kind().is_collection());
}

// =============================================================================
// Equality and Hashing
// =============================================================================

#[test]
fn int_and_float_are_distinct() {
    assert_ne!(Value::Int(1), Value::Float(1.0));
}

#[test]
fn nan_equals_itself_by_bits() {
    assert_eq!(Value::Float(f64::NAN), Value::Float(f64::NAN));
}

#[test]
fn structural_equality() {
    let a = Value::map([("k", Value::seq([1, 2]))]);
    let b = Value::map([("k", Value::seq([1, 2]))]);
    assert_eq!(a, b);
}

#[test]
fn map_hash_ignores_insertion_order() {
    let forward: LtMap<Value, Value> = [("a", 1), ("b", 2)]
        .into_iter()
        .map(|(k, v)| (Value::from(k), Value::from(v)))
        .collect();
    let backward = LtMap::new()
        .insert(Value::from("b"), Value::Int(2))
        .insert(Value::from("a"), Value::Int(1));

    let mut set = HashSet::new();
    set.insert(Value::Map(forward));
    assert!(set.contains(&Value::Map(backward)));
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn display_scalars() {
    assert_eq!(Value::Nil.to_string(), "<nil>");
    assert_eq!(Value::Int(-3).to_string(), "-3");
    assert_eq!(Value::Float(2.5).to_string(), "2.5");
    assert_eq!(Value::from("x").to_string(), "x");
}

#[test]
fn display_collections() {
    assert_eq!(Value::seq([1, 2]).to_string(), "[1 2]");
    assert_eq!(Value::map([("b", 2), ("a", 1)]).to_string(), "map[a:1 b:2]");
}

#[test]
fn display_time_is_rfc3339() {
    let offset = FixedOffset::east_opt(3600).unwrap();
    let t = offset.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap();
    assert_eq!(Value::Time(t).to_string(), "2024-05-06T07:08:09+01:00");
}

// =============================================================================
// Serde
// =============================================================================

#[test]
fn json_round_trip() {
    let v = Value::map([("list", Value::seq([1, 2])), ("name", Value::from("x"))]);
    let json = serde_json::to_string(&v).unwrap();
    assert_eq!(json, r#"{"list":[1,2],"name":"x"}"#);
    let back: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(back, v);
}

#[test]
fn json_rejects_non_finite_floats() {
    assert!(serde_json::to_string(&Value::Float(f64::INFINITY)).is_err());
}
