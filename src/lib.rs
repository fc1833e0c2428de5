//! # Tuple Index
//!
//! An in-memory table of fixed-arity rows that can be looked up, in constant
//! expected time, by any subset of its columns.
//!
//! ## Model
//!
//! - **Rows** are fixed-length sequences of optional values. `None` marks an
//!   absent value, and in a query it marks an unconstrained position.
//! - **Indexes** cover one set of columns each and bucket every row by its
//!   projection onto that set. All indexes of a table hold the same rows.
//! - **Lazy materialization**: querying a column set with no index creates
//!   one, backfilled from the root index. Composite indexes can also be
//!   declared before any row is inserted.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       TUPLE INDEX                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  CORE (pure types)                                          │
//! │    Key, Row, Constraint, Value, TableConfig                 │
//! │                                                              │
//! │  PORTS (trait contracts)                                     │
//! │    RowIndex, TableError                                     │
//! │                                                              │
//! │  ADAPTERS (implementations)                                 │
//! │    Index: ColumnIndex + Bucket                              │
//! │    Typed: TypedTable over tuples                            │
//! │                                                              │
//! │  ENGINE (orchestration)                                      │
//! │    IndexedTable - index creation, backfill, consistency     │
//! │                                                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use tuple_index::TypedTable;
//!
//! let mut table = TypedTable::<(i64, i64, String)>::new();
//! for i in 0..10 {
//!     for j in 0..10 {
//!         table.insert((i, j, format!("{i}{j}"))).unwrap();
//!     }
//! }
//!
//! assert_eq!(table.find_by_column::<0>(3).unwrap().len(), 10);
//! assert_eq!(table.find_by_columns::<0, 1>(3, 4).unwrap().len(), 1);
//!
//! table.remove_all_matching_column::<0>(2).unwrap();
//! assert!(table.find_by_column::<0>(2).unwrap().is_empty());
//! ```
//!
//! ## Concurrency
//!
//! Tables are plain owned data with no internal locking. Share one across
//! threads by wrapping it in a lock of your choice.

// ============================================================================
// MODULES
// ============================================================================

/// Core domain - pure types, no indexing logic
pub mod core;

/// Port definitions - trait contracts and errors
pub mod ports;

/// Adapter implementations - index storage and the typed surface
pub mod adapters;

/// Engine - the table manager
pub mod engine;

// ============================================================================
// RE-EXPORTS (public API)
// ============================================================================

// Core types
pub use crate::core::config::TableConfig;
pub use crate::core::{Constraint, Key, Row, Value};

// Ports
pub use crate::ports::{RowIndex, TableError, TableResult};

// Adapters
pub use crate::adapters::index::{Bucket, ColumnIndex};
pub use crate::adapters::typed::{Column, ColumnAt, Record, TypedTable};

// Engine
pub use crate::engine::IndexedTable;
