//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use vellum_foundation::{Arity, Error, ErrorContext, ErrorKind};

#[test]
fn error_unknown_function() {
    let err = Error::unknown_function("frobnicate");
    assert!(matches!(err.kind, ErrorKind::UnknownFunction(_)));
    assert!(err.to_string().contains("frobnicate"));
}

#[test]
fn error_arity_mismatch_uses_arity_text() {
    let err = Error::arity_mismatch(Arity::Range(1, 3).to_string(), 5);
    assert_eq!(err.to_string(), "arity mismatch: expected 1..=3, got 5");
}

#[test]
fn error_decode_and_encode() {
    assert!(matches!(Error::decode("x").kind, ErrorKind::Decode(_)));
    assert!(matches!(Error::encode("x").kind, ErrorKind::Encode(_)));
}

#[test]
fn error_invalid_duration_quotes_input() {
    let err = Error::invalid_duration("3 days");
    assert_eq!(err.to_string(), "invalid duration: \"3 days\"");
}

#[test]
fn error_host_message_passes_through() {
    let err = Error::host("backend unavailable");
    assert_eq!(err.to_string(), "backend unavailable");
}

#[test]
fn error_context_lists_callers() {
    let err = Error::decode("bad").with_context(
        ErrorContext::new()
            .with_function("base64Decode")
            .with_frame("apply")
            .with_frame("render"),
    );
    let ctx = err.context.unwrap();
    assert_eq!(ctx.stack, vec!["apply".to_string(), "render".to_string()]);
    let shown = ctx.to_string();
    assert!(shown.starts_with("in base64Decode"));
    assert!(shown.contains("via apply"));
}
