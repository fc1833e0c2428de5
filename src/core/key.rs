//! # Key
//!
//! Fixed-length value sequences with structural equality and a cached,
//! order-sensitive hash, usable as `HashMap` keys.
//!
//! The same type serves two roles:
//! - a stored **row** (every position holds the stored value or `None`)
//! - a **key pattern** (positions outside an index's columns are `None`)

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;
use std::sync::Arc;

use crate::ports::{TableError, TableResult};

/// A fixed-length, immutable sequence of optional values.
///
/// `None` is the absence marker. Two keys are equal iff they have the same
/// length and every position is either absent in both or present in both
/// with equal values.
///
/// Cloning is cheap: the values are shared behind an `Arc`, so every index
/// that references a row holds the same allocation.
pub struct Key<V> {
    values: Arc<[Option<V>]>,
    hash: u64,
}

/// A row stored in a table. Rows are keys whose positions carry the stored
/// values; they are never mutated after insertion.
pub type Row<V> = Key<V>;

impl<V: Hash> Key<V> {
    /// Wrap a value sequence, computing its combined hash once.
    pub fn new(values: Vec<Option<V>>) -> Self {
        let hash = combined_hash(&values);
        Self {
            values: values.into(),
            hash,
        }
    }

    /// Project this key onto `columns`: values at those positions are kept,
    /// every other position becomes `None`. Columns past the end of the key
    /// select nothing.
    ///
    /// ```text
    /// (63, 0, 765, 7) projected onto [1, 2]  ->  (None, 0, 765, None)
    /// ```
    pub fn project(&self, columns: &[usize]) -> Key<V>
    where
        V: Clone,
    {
        let mut values: Vec<Option<V>> = vec![None; self.values.len()];
        for &column in columns {
            if let (Some(slot), Some(value)) = (values.get_mut(column), self.values.get(column)) {
                slot.clone_from(value);
            }
        }
        Key::new(values)
    }
}

impl<V> Key<V> {
    /// Number of positions (the schema arity)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if the key has no positions
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at `position`; `None` if absent or out of range
    pub fn get(&self, position: usize) -> Option<&V> {
        self.values.get(position).and_then(Option::as_ref)
    }

    /// All positions, absent ones included
    pub fn values(&self) -> &[Option<V>] {
        &self.values
    }

    /// Positions holding a value, ascending.
    pub fn present_columns(&self) -> Vec<usize> {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.as_ref().map(|_| i))
            .collect()
    }

    /// The cached combined hash
    pub fn hash_code(&self) -> u64 {
        self.hash
    }

    /// True if both keys share the same allocation
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.values, &other.values)
    }
}

/// Order-sensitive combination: `h = h * 31 + hash(value)`, absent slots
/// contribute 0.
fn combined_hash<V: Hash>(values: &[Option<V>]) -> u64 {
    values.iter().fold(0u64, |acc, slot| {
        let part = match slot {
            Some(value) => {
                let mut hasher = DefaultHasher::new();
                value.hash(&mut hasher);
                hasher.finish()
            }
            None => 0,
        };
        acc.wrapping_mul(31).wrapping_add(part)
    })
}

impl<V> Clone for Key<V> {
    fn clone(&self) -> Self {
        Self {
            values: Arc::clone(&self.values),
            hash: self.hash,
        }
    }
}

impl<V: PartialEq> PartialEq for Key<V> {
    fn eq(&self, other: &Self) -> bool {
        if self.hash != other.hash || self.values.len() != other.values.len() {
            return false;
        }
        if self.ptr_eq(other) {
            return true;
        }
        self.values
            .iter()
            .zip(other.values.iter())
            .all(|(a, b)| match (a, b) {
                (None, None) => true,
                (Some(a), Some(b)) => a == b,
                _ => false,
            })
    }
}

impl<V: Eq> Eq for Key<V> {}

impl<V> Hash for Key<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl<V> Index<usize> for Key<V> {
    type Output = Option<V>;

    fn index(&self, position: usize) -> &Option<V> {
        &self.values[position]
    }
}

impl<V: fmt::Debug> fmt::Debug for Key<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values.iter()).finish()
    }
}

impl<V: Hash> From<Vec<Option<V>>> for Key<V> {
    fn from(values: Vec<Option<V>>) -> Self {
        Key::new(values)
    }
}

/// One position of a query pattern.
///
/// `Any` leaves the position unconstrained. A stored absent value is
/// indistinguishable from "unconstrained": converting `None` yields `Any`,
/// so a query that explicitly asks for absence at a position matches every
/// row regardless of that position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Constraint<V> {
    /// Match any value, including absent ones
    Any,
    /// Match rows holding exactly this value
    Eq(V),
}

impl<V> Constraint<V> {
    /// True if this position narrows the match
    pub fn is_constrained(&self) -> bool {
        matches!(self, Constraint::Eq(_))
    }

    /// The slot this constraint occupies in a key pattern
    pub fn into_slot(self) -> Option<V> {
        match self {
            Constraint::Any => None,
            Constraint::Eq(v) => Some(v),
        }
    }
}

impl<V> From<Option<V>> for Constraint<V> {
    fn from(value: Option<V>) -> Self {
        match value {
            Some(v) => Constraint::Eq(v),
            None => Constraint::Any,
        }
    }
}

/// Build a pattern with `value` at `column` and `Any` elsewhere.
///
/// Fails with `ColumnOutOfRange` if `column >= arity`.
pub fn single<V>(arity: usize, column: usize, value: V) -> TableResult<Vec<Constraint<V>>> {
    if column >= arity {
        return Err(TableError::ColumnOutOfRange { column, arity });
    }
    let mut pattern: Vec<Constraint<V>> = (0..arity).map(|_| Constraint::Any).collect();
    pattern[column] = Constraint::Eq(value);
    Ok(pattern)
}
