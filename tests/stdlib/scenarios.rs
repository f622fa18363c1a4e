//! End-to-end template scenarios
//!
//! Each test chains calls the way a template pipeline would.

use vellum_foundation::{LtVec, Value};
use vellum_stdlib::{FuncTable, FuncsConfig, Scope};

fn s(text: &str) -> Value {
    Value::from(text)
}

fn post(title: &str, tags: &[&str], draft: bool) -> Value {
    Value::map([
        ("title", s(title)),
        ("tags", Value::seq(tags.iter().copied())),
        ("draft", Value::Bool(draft)),
    ])
}

fn posts() -> Value {
    Value::seq([
        post("Rust tips", &["rust", "tips"], false),
        post("Go notes", &["go"], true),
        post("Async Rust", &["rust", "async"], false),
    ])
}

fn run(scope: &mut Scope<'_>, name: &str, args: &[Value]) -> Value {
    scope.call(name, args).unwrap_or_else(|err| panic!("{name}: {err}"))
}

#[test]
fn published_titles_sorted_and_joined() {
    let table = FuncTable::new();
    let mut scope = table.scope();
    let published = run(&mut scope, "where", &[posts(), s("draft"), Value::Bool(false)]);
    let sorted = run(&mut scope, "sort", &[published, s("title")]);
    let titles = run(&mut scope, "apply", &[sorted, s("index"), s("."), s("title")]);
    let joined = run(&mut scope, "delimit", &[titles, s(", "), s(" and ")]);
    assert_eq!(joined, s("Async Rust and Rust tips"));
}

#[test]
fn tag_cloud_from_unions() {
    let table = FuncTable::new();
    let mut scope = table.scope();
    let mut tags = Value::Vec(LtVec::new());
    for post in posts().as_vec().unwrap().iter() {
        let post_tags = run(&mut scope, "index", &[post.clone(), s("tags")]);
        tags = run(&mut scope, "union", &[tags, post_tags]);
    }
    assert_eq!(tags, Value::seq(["rust", "tips", "go", "async"]));
    let upper = run(&mut scope, "apply", &[tags, s("upper"), s(".")]);
    assert_eq!(upper, Value::seq(["RUST", "TIPS", "GO", "ASYNC"]));
}

#[test]
fn posts_with_a_tag() {
    let table = FuncTable::new();
    let mut scope = table.scope();
    let tagged = [posts(), s("tags"), s("intersect"), Value::seq(["rust"])];
    let rusty = run(&mut scope, "where", &tagged);
    // Unknown operators select nothing rather than failing
    assert_eq!(rusty, Value::Vec(LtVec::new()));

    let titled = [posts(), s("title"), s("in"), Value::seq(["Go notes"])];
    let by_title = run(&mut scope, "where", &titled);
    assert_eq!(by_title.as_vec().unwrap().len(), 1);
}

#[test]
fn seeded_random_pick_repeats_per_scope() {
    let table = FuncTable::with_config(FuncsConfig::seeded(2024));
    let pick = |table: &FuncTable| {
        let mut scope = table.scope();
        let shuffled = run(&mut scope, "shuffle", &[posts()]);
        run(&mut scope, "first", &[Value::Int(1), shuffled])
    };
    assert_eq!(pick(&table), pick(&table));
}

#[test]
fn query_string_from_params() {
    let table = FuncTable::new();
    let mut scope = table.scope();
    let params = run(&mut scope, "dict", &[s("page"), Value::Int(2), s("q"), s("rust & go")]);
    let merged = run(&mut scope, "merge", &[params, Value::map([("page", 3)])]);
    let page = run(&mut scope, "index", &[merged.clone(), s("page")]);
    let q = run(&mut scope, "index", &[merged, s("q")]);
    let query = run(&mut scope, "querify", &[s("q"), q, s("page"), page]);
    assert_eq!(query, s("page=3&q=rust+%26+go"));
}
