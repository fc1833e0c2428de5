//! # Typed Table
//!
//! Tuple-typed façade over [`IndexedTable<Value>`].
//!
//! ```rust
//! use tuple_index::TypedTable;
//!
//! let mut table = TypedTable::<(i64, i64, String)>::new();
//! table.insert((3, 4, "34".to_string())).unwrap();
//!
//! let hits = table.find_by_columns::<0, 1>(3, 4).unwrap();
//! assert_eq!(hits, vec![(3, 4, "34".to_string())]);
//! ```
//!
//! Passing `None` for an `Option` column in a query leaves that column
//! unconstrained, so it matches absent and present values alike.

use std::marker::PhantomData;

use super::record::{Column, ColumnAt, Record};
use crate::core::config::TableConfig;
use crate::core::{Constraint, Row, Value};
use crate::engine::IndexedTable;
use crate::ports::{TableError, TableResult};

/// An indexed table of `T` tuples
pub struct TypedTable<T> {
    table: IndexedTable<Value>,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> Default for TypedTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> TypedTable<T> {
    /// Create an empty table; the root index follows the first record
    pub fn new() -> Self {
        Self {
            table: IndexedTable::new(T::ARITY),
            _record: PhantomData,
        }
    }

    /// Create from a config whose arity must match `T`
    pub fn with_config(config: TableConfig) -> TableResult<Self> {
        if config.arity != T::ARITY {
            return Err(TableError::ArityMismatch {
                expected: T::ARITY,
                got: config.arity,
            });
        }
        Ok(Self {
            table: IndexedTable::with_config(config)?,
            _record: PhantomData,
        })
    }

    /// Declare a composite index, one flag per column.
    ///
    /// Meant to be called before the first insert so the index does not
    /// need a backfill; calling it later still works.
    ///
    /// ```text
    /// add_index(&[true, true, false])  ->  index over columns 0 and 1
    /// ```
    pub fn add_index(&mut self, columns: &[bool]) -> TableResult<()> {
        if columns.len() != T::ARITY {
            return Err(TableError::ArityMismatch {
                expected: T::ARITY,
                got: columns.len(),
            });
        }
        let positions: Vec<usize> = columns
            .iter()
            .enumerate()
            .filter_map(|(i, &covered)| covered.then_some(i))
            .collect();
        self.table.ensure_index(&positions)?;
        Ok(())
    }

    /// Insert a record; inserting an equal record again is a no-op
    pub fn insert(&mut self, record: T) -> TableResult<()> {
        self.table.insert(record.into_row())?;
        Ok(())
    }

    /// Remove one record. Returns false if it was not present.
    pub fn remove(&mut self, record: &T) -> bool
    where
        T: Clone,
    {
        self.table.remove_row(&Row::new(record.clone().into_row()))
    }

    /// Records whose column `I` equals `value`
    pub fn find_by_column<const I: usize>(
        &mut self,
        value: <T as ColumnAt<I>>::Type,
    ) -> TableResult<Vec<T>>
    where
        T: ColumnAt<I>,
    {
        let mut pattern = Self::unconstrained();
        pattern[I] = value.into_value().into();
        Ok(Self::decode(self.table.find(pattern)?))
    }

    /// Records whose columns `I` and `J` equal `a` and `b`.
    ///
    /// Served by a composite index over `{I, J}`, created on first use
    /// unless declared with [`add_index`](Self::add_index). Fails with
    /// `DuplicateColumn` if `I == J`.
    pub fn find_by_columns<const I: usize, const J: usize>(
        &mut self,
        a: <T as ColumnAt<I>>::Type,
        b: <T as ColumnAt<J>>::Type,
    ) -> TableResult<Vec<T>>
    where
        T: ColumnAt<I> + ColumnAt<J>,
    {
        Self::distinct(&[I, J])?;
        let mut pattern = Self::unconstrained();
        pattern[I] = a.into_value().into();
        pattern[J] = b.into_value().into();
        Ok(Self::decode(self.table.find(pattern)?))
    }

    /// Records whose columns `I`, `J` and `K` equal `a`, `b` and `c`.
    /// The three positions must differ.
    pub fn find_by_columns3<const I: usize, const J: usize, const K: usize>(
        &mut self,
        a: <T as ColumnAt<I>>::Type,
        b: <T as ColumnAt<J>>::Type,
        c: <T as ColumnAt<K>>::Type,
    ) -> TableResult<Vec<T>>
    where
        T: ColumnAt<I> + ColumnAt<J> + ColumnAt<K>,
    {
        Self::distinct(&[I, J, K])?;
        let mut pattern = Self::unconstrained();
        pattern[I] = a.into_value().into();
        pattern[J] = b.into_value().into();
        pattern[K] = c.into_value().into();
        Ok(Self::decode(self.table.find(pattern)?))
    }

    /// Remove every record whose column `I` equals `value`, returning how
    /// many were removed
    pub fn remove_all_matching_column<const I: usize>(
        &mut self,
        value: <T as ColumnAt<I>>::Type,
    ) -> TableResult<usize>
    where
        T: ColumnAt<I>,
    {
        let mut pattern = Self::unconstrained();
        pattern[I] = value.into_value().into();
        Ok(self.table.remove_all_matching(pattern)?.len())
    }

    /// Every record
    pub fn all(&self) -> Vec<T> {
        Self::decode(self.table.rows())
    }

    /// Number of records stored
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// True if no records are stored
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Remove every record, keeping the declared indexes
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// The positional table underneath
    pub fn inner(&self) -> &IndexedTable<Value> {
        &self.table
    }

    fn distinct(columns: &[usize]) -> TableResult<()> {
        for (i, &column) in columns.iter().enumerate() {
            if columns[..i].contains(&column) {
                return Err(TableError::DuplicateColumn { column });
            }
        }
        Ok(())
    }

    fn unconstrained() -> Vec<Constraint<Value>> {
        (0..T::ARITY).map(|_| Constraint::Any).collect()
    }

    // Rows only enter through `insert`, so every one decodes
    fn decode(rows: Vec<Row<Value>>) -> Vec<T> {
        rows.iter().filter_map(T::from_row).collect()
    }
}
