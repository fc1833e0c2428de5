//! # Configuration
//!
//! Table shape and tuning knobs.

/// Configuration for an [`IndexedTable`](crate::IndexedTable)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    /// Number of columns in every row
    pub arity: usize,

    /// Columns of the root index, created up front.
    ///
    /// When `None`, the first inserted row defines the root index from its
    /// non-absent positions. That makes the root index's selectivity depend
    /// on whichever row happens to arrive first; set this to pin it.
    pub root_columns: Option<Vec<usize>>,

    /// Initial capacity of a bucket's set when it is promoted from a single
    /// row to many rows
    pub bucket_capacity: usize,
}

impl TableConfig {
    /// Create a config for rows of `arity` columns
    pub fn new(arity: usize) -> Self {
        Self {
            arity,
            root_columns: None,
            bucket_capacity: 2,
        }
    }

    /// Pin the root index to `columns`
    pub fn with_root_columns(mut self, columns: impl Into<Vec<usize>>) -> Self {
        self.root_columns = Some(columns.into());
        self
    }

    /// Set the initial capacity of promoted buckets
    pub fn with_bucket_capacity(mut self, capacity: usize) -> Self {
        self.bucket_capacity = capacity.max(2);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = TableConfig::new(3)
            .with_root_columns(vec![0, 2])
            .with_bucket_capacity(16);

        assert_eq!(config.arity, 3);
        assert_eq!(config.root_columns, Some(vec![0, 2]));
        assert_eq!(config.bucket_capacity, 16);
    }

    #[test]
    fn test_config_bucket_capacity_floor() {
        // a promoted bucket always holds at least two rows
        let config = TableConfig::new(2).with_bucket_capacity(0);
        assert_eq!(config.bucket_capacity, 2);
    }
}
