//! Core value type, kinds, persistent collections and errors for Vellum.
//!
//! This crate provides:
//! - [`Value`] - The runtime-typed unit every template function consumes and produces
//! - [`Kind`] - The kind discriminator discovered per call
//! - [`Arity`] - Argument-count contracts for callable entries
//! - [`Error`] - Error type for the few operations allowed to fail
//! - Persistent collections ([`LtVec`], [`LtMap`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod types;
pub mod value;

pub use collections::{LtMap, LtVec};
pub use error::{Error, ErrorContext, ErrorKind};
pub use types::{Arity, Kind};
pub use value::Value;

/// Result type alias using Vellum's Error type.
pub type Result<T> = std::result::Result<T, Error>;
