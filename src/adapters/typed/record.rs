//! # Records
//!
//! Conversions between Rust tuples and positional rows of [`Value`]s.
//!
//! - `Column` - a Rust type that can live in one cell
//! - `Record` - a tuple of columns, implemented for arities 2 to 6
//! - `ColumnAt<I>` - the type of column `I` of a record; only implemented
//!   for `I < ARITY`, so out-of-range columns do not compile

use crate::core::{Row, Value};

/// A type that can be stored in one cell.
///
/// `into_value` returning `None` stores the absence marker, which also
/// means "unconstrained" when the value is used in a query.
pub trait Column: Sized {
    fn into_value(self) -> Option<Value>;

    /// `None` if the cell does not hold a value of this type
    fn from_value(value: Option<&Value>) -> Option<Self>;
}

impl<T: Column> Column for Option<T> {
    fn into_value(self) -> Option<Value> {
        self.and_then(Column::into_value)
    }

    fn from_value(value: Option<&Value>) -> Option<Self> {
        match value {
            None => Some(None),
            Some(_) => T::from_value(value).map(Some),
        }
    }
}

impl Column for Value {
    fn into_value(self) -> Option<Value> {
        Some(self)
    }

    fn from_value(value: Option<&Value>) -> Option<Self> {
        value.cloned()
    }
}

macro_rules! impl_column_int {
    ($variant:ident, $wide:ty; $($t:ty),+) => {
        $(
            impl Column for $t {
                fn into_value(self) -> Option<Value> {
                    <$wide>::try_from(self).ok().map(Value::$variant)
                }

                fn from_value(value: Option<&Value>) -> Option<Self> {
                    match value {
                        Some(Value::$variant(v)) => <$t>::try_from(*v).ok(),
                        _ => None,
                    }
                }
            }
        )+
    };
}

impl_column_int!(Int, i64; i8, i16, i32, i64, isize);
impl_column_int!(UInt, u64; u8, u16, u32, u64, usize);

macro_rules! impl_column_simple {
    ($($t:ty => $variant:ident),+) => {
        $(
            impl Column for $t {
                fn into_value(self) -> Option<Value> {
                    Some(Value::$variant(self))
                }

                fn from_value(value: Option<&Value>) -> Option<Self> {
                    match value {
                        Some(Value::$variant(v)) => Some(v.clone()),
                        _ => None,
                    }
                }
            }
        )+
    };
}

impl_column_simple!(
    bool => Bool,
    char => Char,
    f64 => Float,
    String => Str,
    Vec<u8> => Bytes
);

impl Column for f32 {
    fn into_value(self) -> Option<Value> {
        Some(Value::Float(f64::from(self)))
    }

    fn from_value(value: Option<&Value>) -> Option<Self> {
        match value {
            Some(Value::Float(v)) => Some(*v as f32),
            _ => None,
        }
    }
}

/// A fixed-arity tuple of columns
pub trait Record: Sized {
    const ARITY: usize;

    fn into_row(self) -> Vec<Option<Value>>;

    /// `None` if any cell does not decode to its column type
    fn from_row(row: &Row<Value>) -> Option<Self>;
}

/// Column `I` of a record
pub trait ColumnAt<const I: usize>: Record {
    type Type: Column;
}

macro_rules! impl_record {
    (@column [$($all:ident),+] $t:ident $idx:tt) => {
        impl<$($all: Column),+> ColumnAt<$idx> for ($($all,)+) {
            type Type = $t;
        }
    };
    ($arity:literal; $generics:tt; $($t:ident $idx:tt),+) => {
        impl<$($t: Column),+> Record for ($($t,)+) {
            const ARITY: usize = $arity;

            fn into_row(self) -> Vec<Option<Value>> {
                vec![$(self.$idx.into_value()),+]
            }

            fn from_row(row: &Row<Value>) -> Option<Self> {
                if row.len() != $arity {
                    return None;
                }
                Some(($($t::from_value(row.get($idx))?,)+))
            }
        }

        $( impl_record!(@column $generics $t $idx); )+
    };
}

impl_record!(2; [A, B]; A 0, B 1);
impl_record!(3; [A, B, C]; A 0, B 1, C 2);
impl_record!(4; [A, B, C, D]; A 0, B 1, C 2, D 3);
impl_record!(5; [A, B, C, D, E]; A 0, B 1, C 2, D 3, E 4);
impl_record!(6; [A, B, C, D, E, F]; A 0, B 1, C 2, D 3, E 4, F 5);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_into_row() {
        let row = (1i64, None::<u32>, "x".to_string()).into_row();
        assert_eq!(
            row,
            vec![Some(Value::Int(1)), None, Some(Value::Str("x".into()))]
        );
    }

    #[test]
    fn test_record_from_row() {
        let row = Row::new(vec![Some(Value::Int(4)), None, Some(Value::Bool(true))]);
        let record = <(i32, Option<String>, bool)>::from_row(&row);

        assert_eq!(record, Some((4, None, true)));
    }

    #[test]
    fn test_record_from_row_type_mismatch() {
        let row = Row::new(vec![Some(Value::Str("a".into())), Some(Value::Int(1))]);
        assert_eq!(<(i64, i64)>::from_row(&row), None);

        // a required column cannot be absent
        let row = Row::new(vec![Some(Value::Int(1)), None]);
        assert_eq!(<(i64, i64)>::from_row(&row), None);
    }

    #[test]
    fn test_column_int_range() {
        assert_eq!(u8::from_value(Some(&Value::UInt(300))), None);
        assert_eq!(i8::from_value(Some(&Value::Int(-5))), Some(-5));
        assert_eq!(u64::MAX.into_value(), Some(Value::UInt(u64::MAX)));
    }

    #[test]
    fn test_column_arity() {
        assert_eq!(<(u8, u8)>::ARITY, 2);
        assert_eq!(<(u8, u8, u8, u8, u8, u8)>::ARITY, 6);
    }
}
