//! Integration tests for Layer 1: Ops
//!
//! Tests for coercion, ordering and equality, and the collection algebra.

mod algebra;
mod coercion;
mod ordering;
