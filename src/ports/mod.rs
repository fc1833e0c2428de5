//! # Ports
//!
//! Trait contracts and error types shared by the engine and adapters.
//!
//! - `RowIndex` - one column-subset index over a table's rows
//! - `TableError` - the ways a table operation can be misused

use thiserror::Error;

use crate::core::{Key, Row};

/// Errors from table operations.
///
/// Every variant is a programming error: the operation is aborted and the
/// table is left unchanged. A lookup that matches nothing is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A column position is not below the table's arity
    #[error("Column {column} out of range: 0 <= column < {arity}")]
    ColumnOutOfRange { column: usize, arity: usize },

    /// A row, pattern or config has the wrong number of positions
    #[error("Arity mismatch: expected {expected} values, got {got}")]
    ArityMismatch { expected: usize, got: usize },

    /// The same column was named twice in one multi-column query
    #[error("Column {column} given more than once")]
    DuplicateColumn { column: usize },
}

pub type TableResult<T> = Result<T, TableError>;

/// One column-subset index.
///
/// An index maps key patterns (rows projected onto its columns) to the
/// bucket of rows sharing that projection. Every index of a table holds the
/// full set of rows; indexes differ only in how the rows are bucketed.
pub trait RowIndex<V> {
    /// Covered column positions, ascending
    fn columns(&self) -> &[usize];

    /// True iff `columns` (ascending) is exactly this index's column set
    fn covers(&self, columns: &[usize]) -> bool {
        self.columns() == columns
    }

    /// Add a row to the bucket of its projection.
    /// Returns false if the row was already present.
    fn insert(&mut self, row: Row<V>) -> bool;

    /// Remove a row from the bucket of its projection, if present
    fn remove_row(&mut self, row: &Row<V>) -> bool;

    /// Drop the whole bucket for `key`, returning its rows
    fn remove_key(&mut self, key: &Key<V>) -> Vec<Row<V>>;

    /// Rows in the bucket for `key`; empty if the key was never populated
    fn lookup(&self, key: &Key<V>) -> Vec<Row<V>>;

    /// Every row in every bucket
    fn rows(&self) -> Vec<Row<V>>;

    /// Number of rows across all buckets
    fn len(&self) -> usize;

    /// True if the index holds no rows
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every bucket, keeping the column definition
    fn clear(&mut self);
}
