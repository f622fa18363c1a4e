//! Base64 and JSON.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use vellum_foundation::{Arity, Error, Result, Value};

use crate::context::CallContext;
use crate::native::text;
use crate::table::NativeFn;

pub(crate) const FUNCTIONS: &[NativeFn] = &[
    NativeFn { name: "encoding.Base64Decode", arity: Arity::Exact(1), func: base64_decode },
    NativeFn { name: "encoding.Base64Encode", arity: Arity::Exact(1), func: base64_encode },
    NativeFn { name: "encoding.Jsonify", arity: Arity::Exact(1), func: jsonify },
];

pub(crate) const ALIASES: &[(&str, &str)] = &[
    ("base64Decode", "encoding.Base64Decode"),
    ("base64Encode", "encoding.Base64Encode"),
    ("jsonify", "encoding.Jsonify"),
];

/// Encodes raw bytes as-is and everything else through its text.
#[allow(clippy::unnecessary_wraps)]
fn base64_encode(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let encoded = match args[0].as_bytes() {
        Some(bytes) => STANDARD.encode(bytes),
        None => STANDARD.encode(text(args, 0)),
    };
    Ok(Value::from(encoded))
}

/// Decodes to text when the payload is UTF-8, otherwise to bytes.
fn base64_decode(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let input = text(args, 0);
    let bytes = STANDARD
        .decode(input.trim())
        .map_err(|err| Error::decode(format!("base64 {input:?}: {err}")))?;
    Ok(match String::from_utf8(bytes) {
        Ok(s) => Value::from(s),
        Err(err) => Value::bytes(err.into_bytes()),
    })
}

fn jsonify(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    serde_json::to_string(&args[0])
        .map(Value::from)
        .map_err(|err| Error::encode(err.to_string()))
}
