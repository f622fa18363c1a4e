//! Non-cryptographic hashes and message digests.
//!
//! Digests are rendered as lowercase hex. Byte values are hashed raw; all
//! other values through their text.

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256};
use vellum_foundation::{Arity, Result, Value};

use crate::context::CallContext;
use crate::native::text;
use crate::table::NativeFn;

pub(crate) const FUNCTIONS: &[NativeFn] = &[
    NativeFn { name: "crypto.FNV32a", arity: Arity::Exact(1), func: fnv32a },
    NativeFn { name: "crypto.MD5", arity: Arity::Exact(1), func: md5_hex },
    NativeFn { name: "crypto.SHA1", arity: Arity::Exact(1), func: sha1_hex },
    NativeFn { name: "crypto.SHA256", arity: Arity::Exact(1), func: sha256_hex },
    NativeFn { name: "hash.FNV32a", arity: Arity::Exact(1), func: fnv32a },
];

pub(crate) const ALIASES: &[(&str, &str)] = &[
    ("md5", "crypto.MD5"),
    ("sha1", "crypto.SHA1"),
    ("sha256", "crypto.SHA256"),
];

const FNV_OFFSET: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

fn payload(args: &[Value]) -> Vec<u8> {
    match args[0].as_bytes() {
        Some(bytes) => bytes.to_vec(),
        None => text(args, 0).into_bytes(),
    }
}

fn hex_digest<D: Digest>(args: &[Value]) -> Value {
    let digest = D::digest(payload(args));
    Value::from(digest.iter().map(|b| format!("{b:02x}")).collect::<String>())
}

/// 32-bit FNV-1a.
fn fnv32a(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    let hash = payload(args)
        .iter()
        .fold(FNV_OFFSET, |h, &b| (h ^ u32::from(b)).wrapping_mul(FNV_PRIME));
    Ok(Value::Int(i64::from(hash)))
}

fn md5_hex(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(hex_digest::<Md5>(args))
}

fn sha1_hex(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(hex_digest::<Sha1>(args))
}

fn sha256_hex(_: &mut CallContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(hex_digest::<Sha256>(args))
}
