//! Integration tests for the function table

use std::sync::Arc;
use std::thread;

use vellum_foundation::{Arity, Error, ErrorKind, Value};
use vellum_stdlib::{FuncTable, FuncsConfig};

#[test]
fn every_alias_resolves() {
    let table = FuncTable::new();
    for (alias, canonical) in table.aliases() {
        assert!(table.contains(alias), "{alias}");
        assert_eq!(table.arity(alias), table.arity(canonical), "{alias}");
    }
}

#[test]
fn families_are_registered() {
    let names = FuncTable::new().builtin_names();
    for family in [
        "cast.", "collections.", "compare.", "crypto.", "encoding.", "fmt.", "hash.", "math.",
        "path.", "reflect.", "strings.", "time.", "transform.", "urls.",
    ] {
        assert!(names.iter().any(|n| n.starts_with(family)), "no {family} functions");
    }
}

#[test]
fn arity_error_names_the_called_name() {
    let table = FuncTable::new();
    let err = table.scope().call("upper", &[]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ArityMismatch { actual: 0, .. }));
    assert_eq!(err.context.unwrap().function.as_deref(), Some("upper"));
}

#[test]
fn host_function_overrides_builtin_name() {
    let mut table = FuncTable::new();
    table.register("strings.ToUpper", Arity::Exact(1), |_, args| {
        Ok(Value::from(format!("<{}>", args[0])))
    });
    let out = table.scope().call("strings.ToUpper", &[Value::from("x")]).unwrap();
    assert_eq!(out, Value::from("<x>"));
    // The alias still reaches the built-in
    let out = table.scope().call("upper", &[Value::from("x")]).unwrap();
    assert_eq!(out, Value::from("X"));
}

#[test]
fn host_function_errors_surface() {
    let mut table = FuncTable::new();
    table.register("lookupUser", Arity::Exact(1), |_, args| {
        Err(Error::host(format!("no user {}", args[0])))
    });
    let err = table.scope().call("lookupUser", &[Value::Int(7)]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Host(_)));
    assert_eq!(err.to_string(), "no user 7");
}

#[test]
fn table_is_shared_across_threads() {
    let table = Arc::new(FuncTable::with_config(FuncsConfig::seeded(5)));
    let input = [Value::seq((1..=8).collect::<Vec<i64>>())];
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let table = Arc::clone(&table);
            let input = input.clone();
            thread::spawn(move || table.scope().call("shuffle", &input).unwrap())
        })
        .collect();
    let results: Vec<Value> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    // Same seed, independent scopes: identical permutations
    assert!(results.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn unseeded_scopes_still_permute() {
    let table = FuncTable::new();
    let input = [Value::seq((1..=8).collect::<Vec<i64>>())];
    let out = table.scope().call("shuffle", &input).unwrap();
    let mut items: Vec<i64> = out.as_vec().unwrap().iter().filter_map(Value::as_int).collect();
    items.sort_unstable();
    assert_eq!(items, (1..=8).collect::<Vec<_>>());
}
