//! # Column Index
//!
//! In-memory hash index over a fixed subset of columns.
//!
//! Maps each key pattern to its bucket. With 4 integer columns and an index
//! over columns `[1, 2]`, one entry could be:
//!
//! ```text
//! (None, 2, 12, None) -> {(11, 2, 12, 65), (53, 2, 12, 73), (25, 2, 12, 53)}
//! ```

use std::collections::HashMap;
use std::hash::Hash;

use super::bucket::Bucket;
use crate::core::{Key, Row};
use crate::ports::RowIndex;

/// Hash index over one column subset
#[derive(Debug, Clone)]
pub struct ColumnIndex<V> {
    /// Covered positions, ascending
    columns: Vec<usize>,

    /// Key pattern -> rows sharing it
    buckets: HashMap<Key<V>, Bucket<V>>,

    /// Rows across all buckets
    len: usize,

    /// Set capacity for promoted buckets
    bucket_capacity: usize,
}

impl<V> ColumnIndex<V> {
    /// Create an index over `columns`, which must be ascending and within
    /// the table's arity. Only `IndexedTable::ensure_index` builds indexes,
    /// after checking both.
    pub(crate) fn with_bucket_capacity(columns: Vec<usize>, bucket_capacity: usize) -> Self {
        debug_assert!(columns.windows(2).all(|w| w[0] < w[1]));
        Self {
            columns,
            buckets: HashMap::new(),
            len: 0,
            bucket_capacity,
        }
    }

    /// Number of distinct key patterns currently populated
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Iterate over every row without collecting
    pub fn iter(&self) -> impl Iterator<Item = &Row<V>> + '_ {
        self.buckets.values().flat_map(|bucket| bucket.iter())
    }
}

impl<V: Eq + Hash + Clone> ColumnIndex<V> {
    /// The key pattern `row` falls under in this index
    pub fn key_of(&self, row: &Row<V>) -> Key<V> {
        row.project(&self.columns)
    }

    /// True if `row` is in the bucket of its projection
    pub fn contains(&self, row: &Row<V>) -> bool {
        self.buckets
            .get(&self.key_of(row))
            .is_some_and(|bucket| bucket.contains(row))
    }
}

impl<V: Eq + Hash + Clone> RowIndex<V> for ColumnIndex<V> {
    fn columns(&self) -> &[usize] {
        &self.columns
    }

    fn insert(&mut self, row: Row<V>) -> bool {
        let key = self.key_of(&row);
        let capacity = self.bucket_capacity;
        let inserted = self.buckets.entry(key).or_default().insert(row, capacity);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    fn remove_row(&mut self, row: &Row<V>) -> bool {
        let key = self.key_of(row);
        let Some(bucket) = self.buckets.get_mut(&key) else {
            return false;
        };

        let removed = bucket.remove(row);
        if removed {
            self.len -= 1;
        }
        if bucket.is_empty() {
            self.buckets.remove(&key);
        }
        removed
    }

    fn remove_key(&mut self, key: &Key<V>) -> Vec<Row<V>> {
        match self.buckets.remove(key) {
            Some(mut bucket) => {
                let rows = bucket.drain();
                self.len -= rows.len();
                rows
            }
            None => Vec::new(),
        }
    }

    fn lookup(&self, key: &Key<V>) -> Vec<Row<V>> {
        self.buckets
            .get(key)
            .map(|bucket| bucket.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn rows(&self) -> Vec<Row<V>> {
        let mut rows = Vec::with_capacity(self.len);
        rows.extend(self.iter().cloned());
        rows
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        self.buckets.clear();
        self.len = 0;
    }
}
