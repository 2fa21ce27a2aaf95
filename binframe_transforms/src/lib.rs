// Copyright 2026 the Binframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Equal-width binning (`cut`) for binframe frames.
//!
//! This crate provides:
//! - [`cut`] / [`cut_with`], which replace every numeric column of a frame by the `int32` id of
//!   the equal-width interval each value falls into, and
//! - a small column expression IR ([`Expr`]) with a [`Projection`] executor, so `cut` can be
//!   composed with other row-wise expressions, e.g. `cut(cut(f[0] - f[1]))`.
//!
//! Per column, the finite range is scanned first and then every row is assigned:
//! - nulls, infinities and `NaN` map to null,
//! - zero bins, or a column without finite values, map every row to null,
//! - a constant column maps every finite value to bin `0`,
//! - otherwise values map into `[0, nbins - 1]`, with the maximum always in the last bin.
//!
//! `cut` is not a reducer: evaluating it under a grouped [`EvalContext`] fails before any data
//! is read.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

mod arith;
mod bins;
mod context;
mod cut;
mod error;
mod expr;
#[cfg(not(feature = "std"))]
mod float;
mod program;

pub use bins::{Bins, CutOptions, DEFAULT_BINS};
pub use context::{EvalContext, Grouping};
pub use cut::{Binning, FiniteRange, LinearBins, cut, cut_column, cut_columns, cut_with};
pub use error::{CutError, ErrorKind};
pub use expr::{BinaryOp, ColumnRef, Expr};
pub use program::{EvalError, Projection};
