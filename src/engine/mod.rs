//! # Engine
//!
//! The orchestration layer.
//!
//! This is where:
//! - Indexes are created, backfilled and kept consistent
//! - The positional table interface is exposed

mod table;

pub use table::IndexedTable;
