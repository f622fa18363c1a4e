//! Function table and template function families for Vellum.
//!
//! This crate provides:
//! - [`FuncTable`] - canonical built-ins, alias records and host entries
//! - [`Scope`] - a per-render handle owning the random generator
//! - [`CallContext`] - what every callable sees besides its arguments
//! - [`FuncsConfig`] - site root, truncation suffix, time formats and seed
//!
//! Built-in families: cast, collections, compare, crypto, encoding, fmt,
//! hash, math, path, reflect, strings, time, transform and urls.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod config;
mod context;
mod native;
mod table;

pub use config::FuncsConfig;
pub use context::CallContext;
pub use table::{BuiltinFn, FuncTable, HostFn, NativeFn, Scope};
