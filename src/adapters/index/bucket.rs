//! # Bucket
//!
//! The set of rows sharing one key pattern within one index.
//!
//! Most composite indexes are near-unique, so a bucket starts out holding a
//! single row inline and only allocates a set once a second row arrives.
//! A promoted bucket stays a set even if it shrinks back to one row.

use std::collections::HashSet;
use std::hash::Hash;

use crate::core::Row;

/// Rows sharing one key pattern
#[derive(Debug, Clone)]
pub enum Bucket<V> {
    Empty,
    One(Row<V>),
    Many(HashSet<Row<V>>),
}

impl<V> Default for Bucket<V> {
    fn default() -> Self {
        Bucket::Empty
    }
}

impl<V: Eq + Hash> Bucket<V> {
    /// Add a row, promoting `One` to `Many` on the second distinct row.
    /// `capacity` sizes the set on promotion.
    ///
    /// Returns false if the row was already present.
    pub fn insert(&mut self, row: Row<V>, capacity: usize) -> bool {
        match self {
            Bucket::Empty => {
                *self = Bucket::One(row);
                true
            }
            Bucket::One(existing) => {
                if *existing == row {
                    return false;
                }
                let mut set = HashSet::with_capacity(capacity.max(2));
                set.insert(existing.clone());
                set.insert(row);
                *self = Bucket::Many(set);
                true
            }
            Bucket::Many(set) => set.insert(row),
        }
    }

    /// Remove a row if present. Never demotes `Many`.
    pub fn remove(&mut self, row: &Row<V>) -> bool {
        match self {
            Bucket::Empty => false,
            Bucket::One(existing) => {
                if existing == row {
                    *self = Bucket::Empty;
                    true
                } else {
                    false
                }
            }
            Bucket::Many(set) => set.remove(row),
        }
    }

    /// True if an equal row is held
    pub fn contains(&self, row: &Row<V>) -> bool {
        match self {
            Bucket::Empty => false,
            Bucket::One(existing) => existing == row,
            Bucket::Many(set) => set.contains(row),
        }
    }
}

impl<V> Bucket<V> {
    /// Rows held
    pub fn len(&self) -> usize {
        match self {
            Bucket::Empty => 0,
            Bucket::One(_) => 1,
            Bucket::Many(set) => set.len(),
        }
    }

    /// True if no rows are held
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True once the bucket has been promoted to a set
    pub fn is_promoted(&self) -> bool {
        matches!(self, Bucket::Many(_))
    }

    /// Held rows, in no particular order
    pub fn iter(&self) -> Box<dyn Iterator<Item = &Row<V>> + '_> {
        match self {
            Bucket::Empty => Box::new(std::iter::empty()),
            Bucket::One(row) => Box::new(std::iter::once(row)),
            Bucket::Many(set) => Box::new(set.iter()),
        }
    }

    /// Take every row out, leaving the bucket empty
    pub fn drain(&mut self) -> Vec<Row<V>> {
        match std::mem::take(self) {
            Bucket::Empty => Vec::new(),
            Bucket::One(row) => vec![row],
            Bucket::Many(set) => set.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(a: i64, b: i64) -> Row<i64> {
        Row::new(vec![Some(a), Some(b)])
    }

    #[test]
    fn test_bucket_promotes_on_second_row() {
        let mut bucket = Bucket::default();
        assert!(bucket.is_empty());

        assert!(bucket.insert(row(1, 1), 2));
        assert!(matches!(bucket, Bucket::One(_)));

        assert!(bucket.insert(row(1, 2), 2));
        assert!(bucket.is_promoted());
        assert_eq!(bucket.len(), 2);
    }

    #[test]
    fn test_bucket_duplicate_does_not_promote() {
        let mut bucket = Bucket::default();
        bucket.insert(row(1, 1), 2);

        assert!(!bucket.insert(row(1, 1), 2));
        assert!(!bucket.is_promoted());
        assert_eq!(bucket.len(), 1);
    }

    #[test]
    fn test_bucket_never_demotes() {
        let mut bucket = Bucket::default();
        bucket.insert(row(1, 1), 2);
        bucket.insert(row(1, 2), 2);

        assert!(bucket.remove(&row(1, 2)));
        assert_eq!(bucket.len(), 1);
        assert!(bucket.is_promoted());

        assert!(bucket.remove(&row(1, 1)));
        assert!(bucket.is_empty());
        assert!(bucket.is_promoted());
    }

    #[test]
    fn test_bucket_remove_single() {
        let mut bucket = Bucket::default();
        bucket.insert(row(1, 1), 2);

        assert!(!bucket.remove(&row(9, 9)));
        assert!(bucket.contains(&row(1, 1)));

        assert!(bucket.remove(&row(1, 1)));
        assert!(matches!(bucket, Bucket::Empty));
        assert!(!bucket.remove(&row(1, 1)));
    }

    #[test]
    fn test_bucket_drain() {
        let mut bucket = Bucket::default();
        for i in 0..5 {
            bucket.insert(row(0, i), 8);
        }

        let mut drained: Vec<i64> = bucket
            .drain()
            .iter()
            .filter_map(|r| r.get(1).copied())
            .collect();
        drained.sort();

        assert_eq!(drained, vec![0, 1, 2, 3, 4]);
        assert!(matches!(bucket, Bucket::Empty));
    }
}
