//! Integration tests for Layer 2: Stdlib
//!
//! Tests for the function table, aliases, host entries, and the function
//! families driven through it.

mod families;
mod scenarios;
mod table;
