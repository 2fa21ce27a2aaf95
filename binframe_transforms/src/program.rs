// Copyright 2026 the Binframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Projection executor.
//!
//! A [`Projection`] evaluates a list of [`Expr`]s against one input frame and concatenates the
//! resulting columns into an output frame. With grouping keys (`by`), rows are stably ordered by
//! the keys, the key columns come first, and every expression sees a grouped [`EvalContext`].
//!
//! The executor is full-recompute and keeps no state between calls.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;

use binframe_core::{Column, ColumnType, Frame, FrameError};

use crate::arith;
use crate::context::EvalContext;
use crate::cut::{cut_columns, validate};
use crate::error::{CutError, ErrorKind};
use crate::expr::{BinaryOp, ColumnRef, Expr};

/// Errors returned when evaluating expressions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// A `cut` call was rejected.
    #[error(transparent)]
    Cut(#[from] CutError),
    /// A column index is past the last column.
    #[error("column index {index} is out of range for a frame with {ncols} columns")]
    ColumnIndex {
        /// Requested index.
        index: usize,
        /// Number of columns in the frame.
        ncols: usize,
    },
    /// No column has the requested name.
    #[error("column `{0}` does not exist in the frame")]
    UnknownColumn(String),
    /// An arithmetic operand is not numeric.
    #[error("operator `{op}` cannot be applied to a column of type {column_type}")]
    NonNumericOperand {
        /// Operator.
        op: BinaryOp,
        /// Offending operand type.
        column_type: ColumnType,
    },
    /// Arithmetic operands have incompatible column counts.
    #[error("cannot combine {lhs} columns with {rhs} columns")]
    WidthMismatch {
        /// Columns on the left.
        lhs: usize,
        /// Columns on the right.
        rhs: usize,
    },
    /// The evaluated columns could not be assembled into a frame.
    #[error(transparent)]
    Frame(#[from] FrameError),
}

impl EvalError {
    /// Returns the error category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Cut(err) => err.kind(),
            Self::NonNumericOperand { .. } => ErrorKind::Type,
            Self::ColumnIndex { .. }
            | Self::UnknownColumn(_)
            | Self::WidthMismatch { .. }
            | Self::Frame(_) => ErrorKind::Value,
        }
    }
}

impl Expr {
    /// Check the structure of this expression against a context without touching any data.
    ///
    /// This catches wrong `cut` arity and `cut` inside a grouped projection.
    pub fn check(&self, ctx: &EvalContext) -> Result<(), EvalError> {
        match self {
            Self::Column(_) | Self::AllColumns => Ok(()),
            Self::Binary { lhs, rhs, .. } => {
                lhs.check(ctx)?;
                rhs.check(ctx)
            }
            Self::Cut { args, .. } => {
                validate::check_arity(args.len())?;
                validate::check_context(ctx)?;
                args.iter().try_for_each(|arg| arg.check(ctx))
            }
        }
    }

    /// Evaluate this expression against `frame`.
    pub fn evaluate(&self, frame: &Frame, ctx: &EvalContext) -> Result<Vec<Column>, EvalError> {
        match self {
            Self::Column(ColumnRef::Index(index)) => frame
                .column(*index)
                .map(|c| alloc::vec![c.clone()])
                .ok_or(EvalError::ColumnIndex {
                    index: *index,
                    ncols: frame.ncols(),
                }),
            Self::Column(ColumnRef::Name(name)) => frame
                .column_by_name(name)
                .map(|c| alloc::vec![c.clone()])
                .ok_or_else(|| EvalError::UnknownColumn(name.clone())),
            Self::AllColumns => Ok(frame.columns().to_vec()),
            Self::Binary { op, lhs, rhs } => {
                let lhs = lhs.evaluate(frame, ctx)?;
                let rhs = rhs.evaluate(frame, ctx)?;
                arith::apply(*op, &lhs, &rhs)
            }
            Self::Cut { args, options } => {
                validate::check_arity(args.len())?;
                validate::check_context(ctx)?;
                let input = args[0].evaluate(frame, ctx)?;
                Ok(cut_columns(&input, options, ctx)?)
            }
        }
    }
}

/// A row-wise projection: `frame[:, exprs, by(keys)]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Projection {
    exprs: Vec<Expr>,
    by: Vec<Expr>,
}

impl Projection {
    /// Create a projection of the given expressions.
    pub fn new(exprs: impl IntoIterator<Item = Expr>) -> Self {
        Self {
            exprs: exprs.into_iter().collect(),
            by: Vec::new(),
        }
    }

    /// Group rows by the given key expressions.
    pub fn by(mut self, keys: impl IntoIterator<Item = Expr>) -> Self {
        self.by = keys.into_iter().collect();
        self
    }

    /// Evaluate the projection against `frame`.
    ///
    /// Structural errors are reported before any expression is evaluated. Duplicate output
    /// names are disambiguated with a numeric suffix.
    pub fn evaluate(&self, frame: &Frame) -> Result<Frame, EvalError> {
        let ungrouped = EvalContext::ungrouped();
        if self.by.is_empty() {
            for expr in &self.exprs {
                expr.check(&ungrouped)?;
            }
            tracing::debug!(exprs = self.exprs.len(), nrows = frame.nrows(), "projection");
            let mut out = Vec::new();
            for expr in &self.exprs {
                out.extend(expr.evaluate(frame, &ungrouped)?);
            }
            return Ok(Frame::with_deduplicated_names(out)?);
        }

        for key in &self.by {
            key.check(&ungrouped)?;
        }
        let mut keys = Vec::new();
        for key in &self.by {
            keys.extend(key.evaluate(frame, &ungrouped)?);
        }
        let grouped = EvalContext::grouped(keys.len());
        for expr in &self.exprs {
            expr.check(&grouped)?;
        }
        tracing::debug!(
            exprs = self.exprs.len(),
            keys = keys.len(),
            nrows = frame.nrows(),
            "grouped projection"
        );

        let order = group_order(&keys, frame.nrows());
        let sorted = frame.take_rows(&order);
        let mut out: Vec<Column> = keys
            .iter()
            .map(|k| Column::new(k.name(), k.data().take(&order)))
            .collect();
        for expr in &self.exprs {
            out.extend(expr.evaluate(&sorted, &grouped)?);
        }
        Ok(Frame::with_deduplicated_names(out)?)
    }
}

/// Row permutation that stably sorts rows by `keys`, nulls first.
fn group_order(keys: &[Column], nrows: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..nrows).collect();
    order.sort_by(|&a, &b| {
        keys.iter()
            .map(|k| k.data().cmp_rows(a, b))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    });
    order
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec;

    use binframe_core::ColumnData;

    use super::*;
    use crate::bins::CutOptions;

    fn frame() -> Frame {
        Frame::new(vec![
            Column::new("k", vec![Some(2_i32), None, Some(1), Some(2)]),
            Column::new("v", vec![10_i32, 20, 30, 40]),
        ])
        .unwrap()
    }

    #[test]
    fn projects_by_index_and_name() {
        let out = Projection::new([Expr::named("v"), Expr::col(0)])
            .evaluate(&frame())
            .unwrap();
        assert_eq!(out.names().collect::<Vec<_>>(), ["v", "k"]);
        assert_eq!(out.nrows(), 4);
    }

    #[test]
    fn duplicate_outputs_are_renamed() {
        let out = Projection::new([Expr::col(1), Expr::col(1)])
            .evaluate(&frame())
            .unwrap();
        assert_eq!(out.names().collect::<Vec<_>>(), ["v", "v.1"]);
    }

    #[test]
    fn missing_columns_are_reported() {
        assert_eq!(
            Projection::new([Expr::col(5)]).evaluate(&frame()),
            Err(EvalError::ColumnIndex { index: 5, ncols: 2 })
        );
        let err = Projection::new([Expr::named("nope")])
            .evaluate(&frame())
            .unwrap_err();
        assert_eq!(err, EvalError::UnknownColumn("nope".into()));
        assert_eq!(err.kind(), ErrorKind::Value);
    }

    #[test]
    fn grouping_orders_rows_stably_with_keys_first() {
        let out = Projection::new([Expr::named("v")])
            .by([Expr::named("k")])
            .evaluate(&frame())
            .unwrap();
        assert_eq!(out.names().collect::<Vec<_>>(), ["k", "v"]);
        assert_eq!(
            out.column(0).unwrap().data(),
            &ColumnData::Int32(vec![None, Some(1), Some(2), Some(2)])
        );
        assert_eq!(
            out.column(1).unwrap().data(),
            &ColumnData::from(vec![20_i32, 30, 10, 40])
        );
    }

    #[test]
    fn every_key_column_leads_the_output() {
        let out = Projection::new([Expr::col(1)])
            .by([Expr::col(0), Expr::col(1)])
            .evaluate(&frame())
            .unwrap();
        assert_eq!(out.names().collect::<Vec<_>>(), ["k", "v", "v.1"]);
        assert_eq!(
            out.column(1).unwrap().data(),
            &ColumnData::from(vec![20_i32, 30, 10, 40])
        );
    }

    #[test]
    fn cut_in_grouped_projection_fails_structurally() {
        let err = Projection::new([Expr::cut(Expr::col(0))])
            .by([Expr::col(0)])
            .evaluate(&frame())
            .unwrap_err();
        assert_eq!(err, EvalError::Cut(CutError::GroupByContext));
        assert_eq!(err.kind(), ErrorKind::NotImplemented);
        assert_eq!(err.to_string(), "cut() cannot be used in a groupby context");
    }

    #[test]
    fn nested_cut_in_grouped_projection_also_fails() {
        let nested = Expr::col(1) - Expr::cut(Expr::col(1));
        assert_eq!(
            nested.check(&EvalContext::grouped(1)),
            Err(EvalError::Cut(CutError::GroupByContext))
        );
    }

    #[test]
    fn cut_call_without_arguments_is_an_argument_error() {
        let err = Projection::new([Expr::cut_call(Vec::new(), CutOptions::default())])
            .evaluate(&frame())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Argument);
        assert_eq!(
            err.to_string(),
            "Function cut() requires one positional argument, but none were given"
        );
    }
}
