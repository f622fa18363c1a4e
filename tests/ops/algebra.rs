//! Integration tests for the collection algebra
//!
//! Scenario tests across selection, set operations, lookup and builders,
//! plus properties that must hold for any input.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use vellum_foundation::{LtVec, Value};
use vellum_ops::{build, lookup, select, sets};

fn empty() -> Value {
    Value::Vec(LtVec::new())
}

fn pages() -> Value {
    Value::seq([
        Value::map([("title", Value::from("b")), ("weight", Value::Int(3))]),
        Value::map([("title", Value::from("a")), ("weight", Value::Int(1))]),
        Value::map([("title", Value::from("c")), ("weight", Value::Int(2))]),
    ])
}

fn titles(seq: &Value) -> Vec<String> {
    seq.as_vec()
        .unwrap()
        .iter()
        .map(|page| lookup::project(page, "title").to_string())
        .collect()
}

// =============================================================================
// Selection
// =============================================================================

#[test]
fn first_last_after_on_a_sequence() {
    let five = Value::seq([1, 2, 3, 4, 5]);
    assert_eq!(select::first(&Value::Int(2), &five), Value::seq([1, 2]));
    assert_eq!(select::last(&Value::Int(10), &five), five);
    assert_eq!(select::after(&Value::Int(-1), &five), five);
    assert_eq!(select::after(&Value::Int(-2), &five), empty());
    assert_eq!(select::after(&Value::Int(5), &five), empty());
}

#[test]
fn selection_on_mapping_uses_sorted_values() {
    let m = Value::map([("b", 2), ("a", 1), ("c", 3)]);
    assert_eq!(select::first(&Value::Int(2), &m), Value::seq([1, 2]));
    assert_eq!(select::reverse(&m), Value::seq([3, 2, 1]));
}

#[test]
fn unsupported_inputs_degrade() {
    assert_eq!(select::first(&Value::Int(1), &Value::Int(7)), empty());
    assert_eq!(select::first(&Value::Int(1), &Value::Nil), Value::Nil);
    assert_eq!(select::reverse(&Value::from("abc")), empty());
}

#[test]
fn sort_is_textual() {
    // Numbers sort by their rendering, so 10 comes before 2
    let sorted = select::sort(&Value::seq([10, 2, 1]), None, None);
    assert_eq!(sorted, Value::seq([1, 10, 2]));
}

#[test]
fn sort_by_field_desc() {
    let sorted = select::sort(&pages(), Some(&Value::from("title")), Some(&Value::from("DESC")));
    assert_eq!(titles(&sorted), vec!["c", "b", "a"]);
}

#[test]
fn seeded_shuffle_is_a_permutation() {
    let input = Value::seq((1..=20).collect::<Vec<i64>>());
    let a = select::shuffle(&mut ChaCha8Rng::seed_from_u64(3), &input);
    let b = select::shuffle(&mut ChaCha8Rng::seed_from_u64(3), &input);
    assert_eq!(a, b);

    let mut items: Vec<i64> = a.as_vec().unwrap().iter().filter_map(Value::as_int).collect();
    items.sort_unstable();
    assert_eq!(items, (1..=20).collect::<Vec<_>>());
}

// =============================================================================
// Lookup and filtering
// =============================================================================

#[test]
fn where_with_operators() {
    let heavy = lookup::filter(&pages(), "weight", ">=", &Value::Int(2));
    assert_eq!(titles(&heavy), vec!["b", "c"]);

    let named = lookup::filter(&pages(), "title", "in", &Value::seq(["a", "c"]));
    assert_eq!(titles(&named), vec!["a", "c"]);

    let unknown = lookup::filter(&pages(), "title", "~=", &Value::from("a"));
    assert_eq!(unknown, empty());
}

#[test]
fn where_eq_is_strict() {
    let eq = lookup::filter(&pages(), "weight", "eq", &Value::from("1"));
    assert_eq!(eq, empty());
}

#[test]
fn index_walks_nested_containers() {
    let doc = Value::map([("list", Value::seq([Value::map([("name", "x")])]))]);
    let path = [Value::from("list"), Value::Int(0), Value::from("name")];
    assert_eq!(lookup::index(&doc, &path), Value::from("x"));
    assert_eq!(lookup::index(&doc, &[Value::from("missing")]), Value::Nil);
}

// =============================================================================
// Set operations
// =============================================================================

#[test]
fn set_operations_keep_first_occurrence_order() {
    let a = Value::seq([3, 1, 3, 2]);
    let b = Value::seq([2, 4]);
    assert_eq!(sets::uniq(&a), Value::seq([3, 1, 2]));
    assert_eq!(sets::union(&a, &b), Value::seq([3, 1, 2, 4]));
    assert_eq!(sets::intersect(&a, &b), Value::seq([2]));
    assert_eq!(
        sets::complement(&[b.clone(), a.clone()]),
        Value::seq([3, 1, 3])
    );
}

#[test]
fn set_membership_is_kind_strict() {
    let ints = Value::seq([1, 2]);
    let floats = Value::seq([Value::Float(1.0)]);
    assert_eq!(sets::intersect(&ints, &floats), empty());
}

// =============================================================================
// Builders
// =============================================================================

#[test]
fn merge_later_wins() {
    let merged = build::merge(&[
        Value::map([("a", 1), ("b", 1)]),
        Value::map([("b", 2)]),
    ]);
    assert_eq!(merged, Value::map([("a", 1), ("b", 2)]));
}

#[test]
fn seq_forms() {
    assert_eq!(build::seq(&[Value::Int(3)]), Value::seq([1, 2, 3]));
    assert_eq!(build::seq(&[Value::Int(-2)]), empty());
    assert_eq!(build::seq(&[Value::Int(2), Value::Int(4)]), Value::seq([2, 3, 4]));
    assert_eq!(
        build::seq(&[Value::Int(1), Value::Int(7), Value::Int(2)]),
        Value::seq([1, 3, 5, 7])
    );
    assert_eq!(
        build::seq(&[Value::Int(5), Value::Int(1), Value::Int(-2)]),
        Value::seq([5, 3, 1])
    );
}

#[test]
fn querify_sorts_and_encodes() {
    let q = build::querify(&[Value::from("z"), Value::Int(1), Value::from("a b"), Value::from("&")]);
    assert_eq!(q, Value::from("a+b=%26&z=1"));
}

// =============================================================================
// Properties
// =============================================================================

fn small_seq() -> impl Strategy<Value = Value> {
    prop::collection::vec(-5i64..5, 0..12).prop_map(Value::seq)
}

proptest! {
    #[test]
    fn first_then_after_rebuilds(items in prop::collection::vec(any::<i64>(), 0..16), k in 0usize..17) {
        let seq = Value::seq(items.clone());
        let k = k.min(items.len());
        let k_value = Value::Int(i64::try_from(k).unwrap());
        let before = select::first(&k_value, &seq);
        let rest = select::after(&Value::Int(i64::try_from(k).unwrap() - 1), &seq);
        let rebuilt: Vec<Value> = before
            .as_vec()
            .unwrap()
            .iter()
            .chain(rest.as_vec().unwrap().iter())
            .cloned()
            .collect();
        prop_assert_eq!(Value::seq(rebuilt), seq);
    }

    #[test]
    fn union_contains_both(a in small_seq(), b in small_seq()) {
        let u = sets::union(&a, &b);
        for item in a.as_vec().unwrap().iter().chain(b.as_vec().unwrap().iter()) {
            prop_assert!(lookup::contains(&u, item));
        }
    }

    #[test]
    fn complement_excludes_earlier(a in small_seq(), b in small_seq()) {
        let c = sets::complement(&[a.clone(), b]);
        for item in c.as_vec().unwrap().iter() {
            prop_assert!(!lookup::contains(&a, item));
        }
    }
}
