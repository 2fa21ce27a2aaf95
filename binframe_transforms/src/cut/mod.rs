// Copyright 2026 the Binframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Equal-width binning of numeric columns.
//!
//! Every column is handled independently: its finite range is scanned once, a [`Binning`] is
//! resolved from that range and the requested bin count, and then every row is mapped to an
//! `int32` bin id (or null). Columns share nothing, so with the `parallel` feature they are
//! binned on the rayon pool.

extern crate alloc;

mod binning;
mod range;
pub(crate) mod validate;

use alloc::vec::Vec;

use binframe_core::{Column, ColumnData, Frame};

use crate::bins::{Bins, CutOptions};
use crate::context::EvalContext;
use crate::error::CutError;

pub use binning::{Binning, LinearBins};
pub use range::FiniteRange;

/// Bin every column of `frame` into `bins` equal-width, right-closed intervals.
///
/// Output columns keep their names and row counts and have type `int32`.
pub fn cut(frame: &Frame, bins: impl Into<Bins>) -> Result<Frame, CutError> {
    cut_with(frame, &CutOptions::new(bins))
}

/// Bin every column of `frame` using `options`.
pub fn cut_with(frame: &Frame, options: &CutOptions) -> Result<Frame, CutError> {
    let columns = cut_columns(frame.columns(), options, &EvalContext::ungrouped())?;
    Ok(Frame::new(columns)?)
}

/// Bin a set of columns, as produced by an expression, under an evaluation context.
///
/// All validation happens before the first column is scanned.
pub fn cut_columns(
    columns: &[Column],
    options: &CutOptions,
    ctx: &EvalContext,
) -> Result<Vec<Column>, CutError> {
    validate::check_context(ctx)?;
    let counts = validate::bin_counts(&options.bins, columns)?;
    tracing::debug!(
        ncols = columns.len(),
        nrows = columns.first().map_or(0, Column::len),
        right_closed = options.right_closed,
        "cut"
    );
    Ok(bin_all(columns, &counts, options.right_closed))
}

/// Bin a single column into `nbins` intervals.
///
/// Counts above `i32::MAX` behave like `i32::MAX`; [`cut_columns`] rejects them instead.
pub fn cut_column(column: &Column, nbins: u32, right_closed: bool) -> Column {
    let nbins = nbins.min(i32::MAX.unsigned_abs());
    let data = column.data();
    let binning = Binning::resolve(FiniteRange::scan(data), nbins, right_closed);
    tracing::trace!(column = column.name(), ?binning, "resolved binning");
    let out = (0..data.len()).map(|row| binning.bin(data.f64(row))).collect();
    Column::new(column.name(), ColumnData::Int32(out))
}

#[cfg(not(feature = "parallel"))]
fn bin_all(columns: &[Column], counts: &[u32], right_closed: bool) -> Vec<Column> {
    columns
        .iter()
        .zip(counts)
        .map(|(col, &n)| cut_column(col, n, right_closed))
        .collect()
}

#[cfg(feature = "parallel")]
fn bin_all(columns: &[Column], counts: &[u32], right_closed: bool) -> Vec<Column> {
    use rayon::prelude::*;

    columns
        .par_iter()
        .zip(counts.par_iter())
        .map(|(col, &n)| cut_column(col, n, right_closed))
        .collect()
}
