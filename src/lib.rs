//! Vellum - dynamic value operations for text-templating engines
//!
//! This crate re-exports all layers of the Vellum system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: vellum_stdlib     - Function table, aliases, template function families
//! Layer 1: vellum_ops        - Coercion, ordering, collection algebra
//! Layer 0: vellum_foundation - Core types (Value, Kind, Arity, Error)
//! ```

pub use vellum_foundation as foundation;
pub use vellum_ops as ops;
pub use vellum_stdlib as stdlib;
