//! Integration tests for persistent collections
//!
//! Tests `LtVec` and `LtMap` structural sharing and views.

use vellum_foundation::{LtMap, LtVec, Value};

#[test]
fn vec_push_is_persistent() {
    let a: LtVec<i64> = LtVec::new();
    let b = a.push_back(1);
    let c = b.push_back(2);
    assert!(a.is_empty());
    assert_eq!(b.len(), 1);
    assert_eq!(c.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn vec_slice_clamps() {
    let v: LtVec<i64> = (1..=5).collect();
    assert_eq!(v.slice(1, 3).iter().copied().collect::<Vec<_>>(), vec![2, 3]);
    assert!(v.slice(4, 99).len() == 1);
    assert!(v.slice(9, 99).is_empty());
}

#[test]
fn vec_get_is_bounded() {
    let v: LtVec<i64> = vec![7, 8, 9].into();
    assert_eq!(v.get(1), Some(&8));
    assert_eq!(v.get(3), None);
    assert_eq!(LtVec::<i64>::default().get(0), None);
}

#[test]
fn map_insert_and_remove_are_persistent() {
    let m: LtMap<Value, Value> = LtMap::new();
    let m1 = m.insert(Value::from("a"), Value::Int(1));
    let m2 = m1.remove(&Value::from("a"));
    assert!(m.is_empty());
    assert!(m1.contains_key(&Value::from("a")));
    assert!(m2.is_empty());
}

#[test]
fn map_union_prefers_other() {
    let left: LtMap<Value, Value> = LtMap::new()
        .insert(Value::from("a"), Value::Int(1))
        .insert(Value::from("b"), Value::Int(2));
    let right = LtMap::new().insert(Value::from("b"), Value::Int(20));
    let merged = left.union(&right);
    assert_eq!(merged.get(&Value::from("a")), Some(&Value::Int(1)));
    assert_eq!(merged.get(&Value::from("b")), Some(&Value::Int(20)));
}

#[test]
fn map_union_prefers_other_when_other_is_smaller() {
    let big: LtMap<Value, Value> = (0..64).map(|i| (Value::Int(i), Value::Int(i))).collect();
    let small = LtMap::new().insert(Value::Int(5), Value::from("five"));
    assert_eq!(big.union(&small).get(&Value::Int(5)), Some(&Value::from("five")));
    assert_eq!(small.union(&big).get(&Value::Int(5)), Some(&Value::Int(5)));
}

#[test]
fn sorted_entries_follow_key_text() {
    let m = LtMap::new()
        .insert(Value::Int(10), Value::from("ten"))
        .insert(Value::Int(9), Value::from("nine"));
    let keys: Vec<_> = Value::sorted_entries(&m)
        .into_iter()
        .map(|(k, _)| k.clone())
        .collect();
    // Key text "10" sorts before "9"
    assert_eq!(keys, vec![Value::Int(10), Value::Int(9)]);
}
