//! # Typed Adapter
//!
//! Per-column operations on tuples, translated to the engine's positional
//! interface.

mod record;
mod table;

pub use record::{Column, ColumnAt, Record};
pub use table::TypedTable;
