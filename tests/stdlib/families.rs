//! Integration tests for the function families, called by alias

use vellum_foundation::{ErrorKind, Value};
use vellum_stdlib::{FuncTable, FuncsConfig};

fn call(name: &str, args: &[Value]) -> Value {
    FuncTable::with_config(FuncsConfig::seeded(1))
        .scope()
        .call(name, args)
        .unwrap_or_else(|err| panic!("{name}: {err}"))
}

fn s(text: &str) -> Value {
    Value::from(text)
}

#[test]
fn strings_family() {
    assert_eq!(call("upper", &[s("go")]), s("GO"));
    assert_eq!(call("substr", &[s("template"), Value::Int(-4)]), s("late"));
    assert_eq!(call("truncate", &[Value::Int(5), s("one two three")]), s("one…"));
    assert_eq!(call("replaceRE", &[s("a+"), s("-"), s("baaad")]), s("b-d"));
}

#[test]
fn truncate_uses_configured_ellipsis() {
    let table = FuncTable::with_config(FuncsConfig::seeded(1).with_truncate_ellipsis(" [more]"));
    let out = table.scope().call("truncate", &[Value::Int(3), s("one two")]).unwrap();
    assert_eq!(out, s("one [more]"));
}

#[test]
fn math_family() {
    assert_eq!(call("add", &[Value::Int(1), s("2")]), Value::Int(3));
    assert_eq!(call("div", &[Value::Float(1.0), Value::Int(4)]), Value::Float(0.25));
    assert_eq!(call("math.Max", &[Value::seq([3, 9, 4])]), Value::Int(9));
}

#[test]
fn encoding_and_hashing() {
    assert_eq!(call("base64Decode", &[call("base64Encode", &[s("vellum")])]), s("vellum"));
    assert_eq!(call("jsonify", &[Value::seq([Value::Nil, Value::Bool(true)])]), s("[null,true]"));
    assert_eq!(call("sha256", &[s("")]).to_string().len(), 64);
}

#[test]
fn fallible_functions_report_errors() {
    let table = FuncTable::new();
    let mut scope = table.scope();
    let cases = [
        ("base64Decode", s("@@@")),
        ("time.ParseDuration", s("later")),
        ("urls.Parse", s("http://[oops")),
    ];
    for (name, input) in cases {
        let err = scope.call(name, &[input]).unwrap_err();
        let expected = match name {
            "base64Decode" => matches!(err.kind, ErrorKind::Decode(_)),
            "time.ParseDuration" => matches!(err.kind, ErrorKind::InvalidDuration(_)),
            _ => matches!(err.kind, ErrorKind::InvalidUrl { .. }),
        };
        assert!(expected, "{name}: {err}");
    }
}

#[test]
fn fmt_family() {
    assert_eq!(call("printf", &[s("%d-%s"), Value::Int(4), s("x")]), s("4-x"));
    assert_eq!(call("println", &[s("a")]), s("a\n"));
}

#[test]
fn path_and_urls() {
    assert_eq!(call("path.Join", &[s("a"), s("b/../c")]), s("a/c"));
    assert_eq!(call("anchorize", &[s("Getting Started")]), s("getting-started"));
    assert_eq!(call("absURL", &[s("css/site.css")]), s("http://localhost/css/site.css"));
    assert_eq!(call("relURL", &[s("css/site.css")]), s("/css/site.css"));
}

#[test]
fn time_family() {
    let t = call("time", &[s("2023-11-05T08:00:00Z")]);
    assert_eq!(call("dateFormat", &[s("%d %b %Y"), t]), s("05 Nov 2023"));
    assert_eq!(call("time.ParseDuration", &[s("1m30s")]), Value::Int(90_000_000_000));
}

#[test]
fn transform_and_reflect() {
    assert_eq!(call("htmlEscape", &[s("<b>")]), s("&lt;b&gt;"));
    assert_eq!(call("plainify", &[s("<i>hi</i>")]), s("hi"));
    assert_eq!(call("reflect.IsMap", &[Value::map([("a", 1)])]), Value::Bool(true));
}

#[test]
fn cast_and_compare() {
    assert_eq!(call("int", &[s("12")]), Value::Int(12));
    assert_eq!(call("string", &[Value::Float(0.5)]), s("0.5"));
    assert_eq!(call("gt", &[s("10"), Value::Int(9)]), Value::Bool(true));
    assert_eq!(call("default", &[s("n/a"), Value::Nil]), s("n/a"));
}
