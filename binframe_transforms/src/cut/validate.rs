// Copyright 2026 the Binframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Argument validation, run before any column is scanned.

use binframe_core::Column;
use smallvec::SmallVec;

use crate::bins::Bins;
use crate::context::{EvalContext, Grouping};
use crate::error::CutError;

/// Per-column bin counts after validation.
pub(crate) type BinCounts = SmallVec<[u32; 4]>;

/// `cut` takes exactly one positional input.
pub(crate) fn check_arity(nargs: usize) -> Result<(), CutError> {
    match nargs {
        0 => Err(CutError::MissingArgument),
        1 => Ok(()),
        n => Err(CutError::TooManyArguments(n)),
    }
}

/// `cut` is not a reducer and refuses to run per group.
pub(crate) fn check_context(ctx: &EvalContext) -> Result<(), CutError> {
    match ctx.grouping() {
        Grouping::None => Ok(()),
        Grouping::By { keys } => {
            tracing::debug!(keys, "cut rejected in grouped context");
            Err(CutError::GroupByContext)
        }
    }
}

/// Validate bin counts against the input columns and expand them to one count per column.
///
/// Checks run in order: column types, count signs and magnitude, list length.
pub(crate) fn bin_counts(bins: &Bins, columns: &[Column]) -> Result<BinCounts, CutError> {
    if let Some((index, col)) = columns
        .iter()
        .enumerate()
        .find(|(_, c)| !c.column_type().is_numeric())
    {
        return Err(CutError::NonNumericColumn {
            index,
            column_type: col.column_type(),
        });
    }

    let mut counts = BinCounts::with_capacity(bins.counts().len());
    for &n in bins.counts() {
        counts.push(check_count(n)?);
    }

    match bins {
        Bins::All(_) => Ok(core::iter::repeat_n(counts[0], columns.len()).collect()),
        Bins::PerColumn(list) if list.len() != columns.len() => Err(CutError::BinsLengthMismatch {
            expected: columns.len(),
            actual: list.len(),
        }),
        Bins::PerColumn(_) => Ok(counts),
    }
}

fn check_count(n: i64) -> Result<u32, CutError> {
    if n < 0 {
        return Err(CutError::NegativeBins(n));
    }
    i32::try_from(n)
        .map(i32::unsigned_abs)
        .map_err(|_| CutError::TooManyBins(n))
}
