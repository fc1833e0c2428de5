//! # Core
//!
//! Pure types, no indexing logic:
//! - `Key` / `Row` - value sequences with structural equality and hashing
//! - `Constraint` - one position of a query pattern
//! - `Value` - a heterogeneous cell type
//! - `TableConfig` - table shape

pub mod config;
pub mod key;
pub mod value;

pub use key::{Constraint, Key, Row};
pub use value::Value;
