// Copyright 2026 the Binframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed, nullable columns.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

/// Element type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// No element type: every row is null.
    Void,
    /// Booleans.
    Bool,
    /// 32-bit signed integers.
    Int32,
    /// 64-bit signed integers.
    Int64,
    /// 32-bit floats.
    Float32,
    /// 64-bit floats.
    Float64,
    /// UTF-8 strings.
    Str,
}

impl ColumnType {
    /// Short storage-type name, as shown in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::Bool => "bool8",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Str => "str32",
        }
    }

    /// Returns `true` if values of this type have a floating-point view.
    ///
    /// `Void` counts as numeric: it has no values that could contradict it.
    pub fn is_numeric(self) -> bool {
        !matches!(self, Self::Str)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Column storage: one `Option` per row, `None` meaning null.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    /// An all-null column of the given length.
    Void(usize),
    /// Boolean values.
    Bool(Vec<Option<bool>>),
    /// `i32` values.
    Int32(Vec<Option<i32>>),
    /// `i64` values.
    Int64(Vec<Option<i64>>),
    /// `f32` values.
    Float32(Vec<Option<f32>>),
    /// `f64` values.
    Float64(Vec<Option<f64>>),
    /// String values.
    Str(Vec<Option<String>>),
}

impl ColumnData {
    /// Create an all-null column of the given type.
    pub fn null(ty: ColumnType, len: usize) -> Self {
        match ty {
            ColumnType::Void => Self::Void(len),
            ColumnType::Bool => Self::Bool(alloc::vec![None; len]),
            ColumnType::Int32 => Self::Int32(alloc::vec![None; len]),
            ColumnType::Int64 => Self::Int64(alloc::vec![None; len]),
            ColumnType::Float32 => Self::Float32(alloc::vec![None; len]),
            ColumnType::Float64 => Self::Float64(alloc::vec![None; len]),
            ColumnType::Str => Self::Str(alloc::vec![None; len]),
        }
    }

    /// Returns the element type.
    pub fn column_type(&self) -> ColumnType {
        match self {
            Self::Void(_) => ColumnType::Void,
            Self::Bool(_) => ColumnType::Bool,
            Self::Int32(_) => ColumnType::Int32,
            Self::Int64(_) => ColumnType::Int64,
            Self::Float32(_) => ColumnType::Float32,
            Self::Float64(_) => ColumnType::Float64,
            Self::Str(_) => ColumnType::Str,
        }
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        match self {
            Self::Void(n) => *n,
            Self::Bool(v) => v.len(),
            Self::Int32(v) => v.len(),
            Self::Int64(v) => v.len(),
            Self::Float32(v) => v.len(),
            Self::Float64(v) => v.len(),
            Self::Str(v) => v.len(),
        }
    }

    /// Returns `true` if the column has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Floating-point view of a row.
    ///
    /// Booleans map to `0.0`/`1.0`. Returns `None` for nulls, out-of-range rows, and strings.
    /// Float values are returned as stored, including `NaN` and infinities.
    pub fn f64(&self, row: usize) -> Option<f64> {
        match self {
            Self::Void(_) | Self::Str(_) => None,
            Self::Bool(v) => v.get(row).copied().flatten().map(|b| f64::from(u8::from(b))),
            Self::Int32(v) => v.get(row).copied().flatten().map(f64::from),
            Self::Int64(v) => v.get(row).copied().flatten().map(|x| x as f64),
            Self::Float32(v) => v.get(row).copied().flatten().map(f64::from),
            Self::Float64(v) => v.get(row).copied().flatten(),
        }
    }

    /// Integer view of a row, for booleans and integer types only.
    pub fn i64(&self, row: usize) -> Option<i64> {
        match self {
            Self::Bool(v) => v.get(row).copied().flatten().map(i64::from),
            Self::Int32(v) => v.get(row).copied().flatten().map(i64::from),
            Self::Int64(v) => v.get(row).copied().flatten(),
            Self::Void(_) | Self::Float32(_) | Self::Float64(_) | Self::Str(_) => None,
        }
    }

    /// Gather rows by index into a new column of the same type.
    ///
    /// Out-of-range indices produce nulls.
    pub fn take(&self, rows: &[usize]) -> Self {
        match self {
            Self::Void(_) => Self::Void(rows.len()),
            Self::Bool(v) => Self::Bool(gather(v, rows)),
            Self::Int32(v) => Self::Int32(gather(v, rows)),
            Self::Int64(v) => Self::Int64(gather(v, rows)),
            Self::Float32(v) => Self::Float32(gather(v, rows)),
            Self::Float64(v) => Self::Float64(gather(v, rows)),
            Self::Str(v) => Self::Str(gather(v, rows)),
        }
    }

    /// Compare two rows of this column.
    ///
    /// Nulls sort before every value; floats use IEEE total ordering.
    pub fn cmp_rows(&self, a: usize, b: usize) -> Ordering {
        match self {
            Self::Void(_) => Ordering::Equal,
            Self::Bool(v) => cmp_opt(v, a, b, Ord::cmp),
            Self::Int32(v) => cmp_opt(v, a, b, Ord::cmp),
            Self::Int64(v) => cmp_opt(v, a, b, Ord::cmp),
            Self::Float32(v) => cmp_opt(v, a, b, f32::total_cmp),
            Self::Float64(v) => cmp_opt(v, a, b, f64::total_cmp),
            Self::Str(v) => cmp_opt(v, a, b, Ord::cmp),
        }
    }
}

fn gather<T: Clone>(values: &[Option<T>], rows: &[usize]) -> Vec<Option<T>> {
    rows.iter()
        .map(|&row| values.get(row).cloned().flatten())
        .collect()
}

fn cmp_opt<T>(values: &[Option<T>], a: usize, b: usize, cmp: fn(&T, &T) -> Ordering) -> Ordering {
    let a = values.get(a).and_then(Option::as_ref);
    let b = values.get(b).and_then(Option::as_ref);
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => cmp(a, b),
    }
}

macro_rules! impl_from_values {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<Vec<Option<$ty>>> for ColumnData {
                fn from(values: Vec<Option<$ty>>) -> Self {
                    Self::$variant(values)
                }
            }

            impl From<Vec<$ty>> for ColumnData {
                fn from(values: Vec<$ty>) -> Self {
                    Self::$variant(values.into_iter().map(Some).collect())
                }
            }
        )*
    };
}

impl_from_values! {
    bool => Bool,
    i32 => Int32,
    i64 => Int64,
    f32 => Float32,
    f64 => Float64,
    String => Str,
}

/// A named column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    data: ColumnData,
}

impl Column {
    /// Create a column from a name and its data.
    pub fn new(name: impl Into<String>, data: impl Into<ColumnData>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }

    /// Returns the column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the column data.
    pub fn data(&self) -> &ColumnData {
        &self.data
    }

    /// Returns the element type.
    pub fn column_type(&self) -> ColumnType {
        self.data.column_type()
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the column has no rows.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Replace the name, keeping the data.
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: self.data,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec;

    use super::*;

    #[test]
    fn f64_view_promotes_bools_and_ints() {
        let bools = ColumnData::from(vec![Some(true), None, Some(false)]);
        assert_eq!(bools.f64(0), Some(1.0));
        assert_eq!(bools.f64(1), None);
        assert_eq!(bools.f64(2), Some(0.0));

        let ints = ColumnData::from(vec![-3_i64, 7]);
        assert_eq!(ints.f64(0), Some(-3.0));
        assert_eq!(ints.f64(5), None, "out of range rows read as null");
    }

    #[test]
    fn strings_and_void_have_no_numeric_view() {
        let strs = ColumnData::from(vec![String::from("1")]);
        assert_eq!(strs.f64(0), None);
        assert!(!strs.column_type().is_numeric());
        assert!(ColumnType::Void.is_numeric());
        assert_eq!(ColumnData::Void(3).f64(1), None);
    }

    #[test]
    fn take_gathers_and_nulls_out_of_range() {
        let data = ColumnData::from(vec![10_i32, 20, 30]);
        let taken = data.take(&[2, 0, 9]);
        assert_eq!(taken, ColumnData::Int32(vec![Some(30), Some(10), None]));
    }

    #[test]
    fn cmp_rows_puts_nulls_first() {
        let data = ColumnData::Float64(vec![Some(2.0), None, Some(-1.0)]);
        assert_eq!(data.cmp_rows(1, 2), Ordering::Less);
        assert_eq!(data.cmp_rows(0, 2), Ordering::Greater);
        assert_eq!(data.cmp_rows(1, 1), Ordering::Equal);
    }

    #[test]
    fn type_names_match_storage_names() {
        assert_eq!(ColumnType::Str.to_string(), "str32");
        assert_eq!(ColumnType::Bool.to_string(), "bool8");
        assert_eq!(ColumnData::null(ColumnType::Int32, 2).column_type(), ColumnType::Int32);
    }
}
