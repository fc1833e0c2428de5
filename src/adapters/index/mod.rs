//! # Index Adapters
//!
//! Implementations of the `RowIndex` port.
//!
//! Available adapters:
//! - `ColumnIndex` - hash map from key pattern to bucket

mod bucket;
mod column;

pub use bucket::Bucket;
pub use column::ColumnIndex;
