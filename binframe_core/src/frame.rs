// Copyright 2026 the Binframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned frame representation used as transform input and output.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashSet;

use crate::column::{Column, ColumnData, ColumnType};

/// Errors returned when building a [`Frame`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    /// A column's row count differs from the first column's.
    #[error("column `{name}` has {actual} rows, but the frame has {expected}")]
    LengthMismatch {
        /// Name of the offending column.
        name: String,
        /// Row count of the frame.
        expected: usize,
        /// Row count of the offending column.
        actual: usize,
    },
    /// Two columns share a name.
    #[error("duplicate column name `{0}`")]
    DuplicateName(String),
}

/// An ordered set of equally long, uniquely named columns.
///
/// Zero columns and zero rows are both valid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    columns: Vec<Column>,
    nrows: usize,
}

impl Frame {
    /// Create a frame with no columns and no rows.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a frame from named columns.
    pub fn new(columns: Vec<Column>) -> Result<Self, FrameError> {
        let nrows = check_lengths(&columns)?;
        let mut seen = HashSet::with_capacity(columns.len());
        for col in &columns {
            if !seen.insert(col.name()) {
                return Err(FrameError::DuplicateName(col.name().into()));
            }
        }
        drop(seen);
        Ok(Self { columns, nrows })
    }

    /// Create a frame from named columns, renaming duplicates.
    ///
    /// A repeated name `x` becomes `x.1`, `x.2`, … (the first free suffix).
    pub fn with_deduplicated_names(columns: Vec<Column>) -> Result<Self, FrameError> {
        let nrows = check_lengths(&columns)?;
        let mut seen: HashSet<String> = HashSet::with_capacity(columns.len());
        let mut out = Vec::with_capacity(columns.len());
        for col in columns {
            let col = if seen.contains(col.name()) {
                let base = String::from(col.name());
                let mut k = 1_usize;
                let mut name = format!("{base}.{k}");
                while seen.contains(&name) {
                    k += 1;
                    name = format!("{base}.{k}");
                }
                col.with_name(name)
            } else {
                col
            };
            seen.insert(col.name().into());
            out.push(col);
        }
        Ok(Self {
            columns: out,
            nrows,
        })
    }

    /// Create a frame from unnamed data, naming columns `C0`, `C1`, ….
    pub fn from_data<I>(data: I) -> Result<Self, FrameError>
    where
        I: IntoIterator,
        I::Item: Into<ColumnData>,
    {
        let columns = data
            .into_iter()
            .enumerate()
            .map(|(i, d)| Column::new(format!("C{i}"), d))
            .collect();
        Self::new(columns)
    }

    /// Returns the number of columns.
    pub fn ncols(&self) -> usize {
        self.columns.len()
    }

    /// Returns the number of rows.
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Returns `(nrows, ncols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.columns.len())
    }

    /// Returns the columns in order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the column at `index`, if present.
    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Returns the column called `name`, if present.
    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    /// Returns column names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(Column::name)
    }

    /// Returns column types in order.
    pub fn types(&self) -> Vec<ColumnType> {
        self.columns.iter().map(Column::column_type).collect()
    }

    /// Gather rows by index into a new frame with the same columns.
    pub fn take_rows(&self, rows: &[usize]) -> Self {
        let columns = self
            .columns
            .iter()
            .map(|c| Column::new(c.name(), c.data().take(rows)))
            .collect();
        Self {
            columns,
            nrows: rows.len(),
        }
    }
}

fn check_lengths(columns: &[Column]) -> Result<usize, FrameError> {
    let Some(first) = columns.first() else {
        return Ok(0);
    };
    let expected = first.len();
    for col in &columns[1..] {
        if col.len() != expected {
            return Err(FrameError::LengthMismatch {
                name: col.name().into(),
                expected,
                actual: col.len(),
            });
        }
    }
    Ok(expected)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn from_data_names_columns_positionally() {
        let frame = Frame::from_data([vec![1_i32, 2], vec![3, 4]]).unwrap();
        assert_eq!(frame.names().collect::<Vec<_>>(), ["C0", "C1"]);
        assert_eq!(frame.shape(), (2, 2));
    }

    #[test]
    fn empty_frame_has_no_rows() {
        let frame = Frame::new(Vec::new()).unwrap();
        assert_eq!(frame, Frame::empty());
        assert_eq!(frame.shape(), (0, 0));
    }

    #[test]
    fn rejects_ragged_columns() {
        let err = Frame::new(vec![
            Column::new("a", vec![1_i32, 2]),
            Column::new("b", vec![1_i32]),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            FrameError::LengthMismatch {
                name: "b".into(),
                expected: 2,
                actual: 1,
            }
        );
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = Frame::new(vec![
            Column::new("a", vec![1_i32]),
            Column::new("a", vec![2_i32]),
        ])
        .unwrap_err();
        assert_eq!(err, FrameError::DuplicateName("a".into()));
    }

    #[test]
    fn deduplication_appends_first_free_suffix() {
        let frame = Frame::with_deduplicated_names(vec![
            Column::new("a", vec![1_i32]),
            Column::new("a.1", vec![2_i32]),
            Column::new("a", vec![3_i32]),
        ])
        .unwrap();
        assert_eq!(frame.names().collect::<Vec<_>>(), ["a", "a.1", "a.2"]);
    }

    #[test]
    fn take_rows_reorders_every_column() {
        let frame = Frame::new(vec![
            Column::new("k", vec![2_i32, 1]),
            Column::new("v", vec![true, false]),
        ])
        .unwrap();
        let taken = frame.take_rows(&[1, 0]);
        assert_eq!(taken.column(0).unwrap().data(), &ColumnData::from(vec![1_i32, 2]));
        assert_eq!(
            taken.column_by_name("v").unwrap().data(),
            &ColumnData::from(vec![false, true])
        );
    }
}
