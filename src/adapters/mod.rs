//! # Adapters
//!
//! Implementations of the port traits and the typed surface:
//! - Index adapters: `ColumnIndex` (hash map of buckets)
//! - Typed adapter: `TypedTable` over Rust tuples

pub mod index;
pub mod typed;
