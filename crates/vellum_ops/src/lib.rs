//! Dynamic value operations for Vellum.
//!
//! Three layers, each built only on the ones above it in this list:
//! - [`coerce`] - normalizes any value to a float, integer or text
//! - [`compare`] - deep equality and the numeric-first ordering rule
//! - collection algebra ([`select`], [`sets`], [`lookup`], [`build`]) -
//!   sequence/mapping transformations that accept any value kind
//!
//! Every operation is total: unsupported inputs degrade to the neutral
//! value of the operation's result shape (see [`neutral`]) instead of
//! failing. Inputs are never modified.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod build;
pub mod coerce;
pub mod compare;
pub mod lookup;
pub mod neutral;
pub mod select;
pub mod sets;
mod view;

pub use coerce::{is_numeric_like, to_float, to_int, to_text};
pub use compare::{compare, equal};
pub use lookup::Operator;
pub use neutral::{Shape, fallback, neutral};
pub use view::elements;
