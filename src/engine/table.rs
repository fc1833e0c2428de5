//! # Indexed Table
//!
//! The table manager.
//!
//! Owns every index of one table and keeps them consistent:
//! - inserts and removals are applied to every index
//! - a query over a column set with no index creates one and backfills it
//!   from the root index before answering
//!
//! The root index is the first one created. It is the source for backfills
//! and for full-table scans.

use std::hash::Hash;

use tracing::{debug, trace};

use crate::adapters::index::ColumnIndex;
use crate::core::config::TableConfig;
use crate::core::{Constraint, Key, Row};
use crate::ports::{RowIndex, TableError, TableResult};

/// A table of fixed-arity rows, queryable by any subset of columns
///
/// Not internally synchronized. Wrap it in a lock to share it across threads.
#[derive(Debug, Clone)]
pub struct IndexedTable<V> {
    /// Configuration
    config: TableConfig,

    /// Indexes in creation order; `indexes[0]` is the root
    indexes: Vec<ColumnIndex<V>>,
}

impl<V: Eq + Hash + Clone> IndexedTable<V> {
    /// Create an empty table for rows of `arity` columns, with no indexes
    pub fn new(arity: usize) -> Self {
        Self {
            config: TableConfig::new(arity),
            indexes: Vec::new(),
        }
    }

    /// Create from a config, building the root index up front if
    /// `root_columns` is set
    pub fn with_config(config: TableConfig) -> TableResult<Self> {
        let root_columns = config.root_columns.clone();
        let mut table = Self {
            config,
            indexes: Vec::new(),
        };
        if let Some(columns) = root_columns {
            table.ensure_index(&columns)?;
        }
        Ok(table)
    }

    /// Get the configuration
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Number of columns in every row
    pub fn arity(&self) -> usize {
        self.config.arity
    }

    // ========================================================================
    // INDEXES
    // ========================================================================

    /// Make sure an index over exactly `columns` exists, returning its
    /// position in [`indexes`](Self::indexes).
    ///
    /// Column order and duplicates are irrelevant. A new index is backfilled
    /// from the root index, so it holds every row before this returns.
    pub fn ensure_index(&mut self, columns: &[usize]) -> TableResult<usize> {
        let mut columns = columns.to_vec();
        columns.sort_unstable();
        columns.dedup();

        if let Some(pos) = self.position_of(&columns) {
            return Ok(pos);
        }

        let arity = self.config.arity;
        if let Some(&column) = columns.iter().find(|&&c| c >= arity) {
            return Err(TableError::ColumnOutOfRange { column, arity });
        }

        let mut index = ColumnIndex::with_bucket_capacity(columns, self.config.bucket_capacity);
        if let Some(root) = self.indexes.first() {
            for row in root.iter() {
                index.insert(row.clone());
            }
        }

        debug!(
            columns = ?index.columns(),
            backfilled = index.len(),
            indexes = self.indexes.len() + 1,
            "created index"
        );

        self.indexes.push(index);
        Ok(self.indexes.len() - 1)
    }

    /// Every index, in creation order
    pub fn indexes(&self) -> &[ColumnIndex<V>] {
        &self.indexes
    }

    /// Number of indexes materialized so far
    pub fn index_count(&self) -> usize {
        self.indexes.len()
    }

    fn position_of(&self, columns: &[usize]) -> Option<usize> {
        self.indexes.iter().position(|index| index.covers(columns))
    }

    // ========================================================================
    // MUTATION
    // ========================================================================

    /// Insert a row into every index.
    ///
    /// If the table has no index yet, the root index is derived from this
    /// row's non-absent positions. A later row with a different absence
    /// pattern is still stored correctly; only the root index's selectivity
    /// depends on the first row.
    ///
    /// Inserting a row equal to one already present changes nothing.
    pub fn insert(&mut self, values: Vec<Option<V>>) -> TableResult<Row<V>> {
        self.check_arity(values.len())?;
        let row = Row::new(values);

        if self.indexes.is_empty() {
            let columns = row.present_columns();
            debug!(columns = ?columns, "root index derived from first row");
            self.ensure_index(&columns)?;
        }

        for index in &mut self.indexes {
            index.insert(row.clone());
        }
        Ok(row)
    }

    /// Remove a row from every index. Returns false if it was not present.
    pub fn remove_row(&mut self, row: &Row<V>) -> bool {
        let mut removed = false;
        for index in &mut self.indexes {
            removed |= index.remove_row(row);
        }
        removed
    }

    /// Remove every row matching `pattern`, returning the removed rows.
    ///
    /// The index for the pattern's constrained columns is created if needed;
    /// its bucket is dropped whole, then each removed row is taken out of
    /// every other index.
    pub fn remove_all_matching(&mut self, pattern: Vec<Constraint<V>>) -> TableResult<Vec<Row<V>>> {
        let key = self.pattern_key(pattern)?;
        let pos = self.ensure_index(&key.present_columns())?;

        let removed = self.indexes[pos].remove_key(&key);
        for (i, index) in self.indexes.iter_mut().enumerate() {
            if i == pos {
                continue;
            }
            for row in &removed {
                index.remove_row(row);
            }
        }

        trace!(columns = ?self.indexes[pos].columns(), removed = removed.len(), "removed matching rows");
        Ok(removed)
    }

    /// Drop every row, keeping all index definitions
    pub fn clear(&mut self) {
        for index in &mut self.indexes {
            index.clear();
        }
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// Rows matching `pattern`. `Any` positions match every value, absent
    /// ones included.
    ///
    /// The first query over a given set of constrained columns creates and
    /// backfills an index for exactly that set; later queries reuse it.
    pub fn find(&mut self, pattern: Vec<Constraint<V>>) -> TableResult<Vec<Row<V>>> {
        let key = self.pattern_key(pattern)?;
        let pos = self.ensure_index(&key.present_columns())?;
        Ok(self.indexes[pos].lookup(&key))
    }

    /// Every row, read from the root index
    pub fn rows(&self) -> Vec<Row<V>> {
        self.indexes.first().map(|root| root.rows()).unwrap_or_default()
    }

    /// True if an equal row is stored
    pub fn contains(&self, row: &Row<V>) -> bool {
        self.indexes.first().is_some_and(|root| root.contains(row))
    }

    /// Number of rows stored
    pub fn len(&self) -> usize {
        self.indexes.first().map_or(0, |root| root.len())
    }

    /// True if no rows are stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn pattern_key(&self, pattern: Vec<Constraint<V>>) -> TableResult<Key<V>> {
        self.check_arity(pattern.len())?;
        Ok(Key::new(pattern.into_iter().map(Constraint::into_slot).collect()))
    }

    fn check_arity(&self, got: usize) -> TableResult<()> {
        if got != self.config.arity {
            return Err(TableError::ArityMismatch {
                expected: self.config.arity,
                got,
            });
        }
        Ok(())
    }
}
