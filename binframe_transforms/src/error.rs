// Copyright 2026 the Binframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised by the cut transform.

use binframe_core::{ColumnType, FrameError};

/// Broad error category, for callers that map errors onto exception classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required argument is missing or extra arguments were given.
    Argument,
    /// An input has the wrong column type.
    Type,
    /// An argument has an invalid value.
    Value,
    /// The operation is not supported in the current evaluation context.
    NotImplemented,
}

/// Usage errors from [`cut`](crate::cut).
///
/// All of these are detected before any column is scanned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CutError {
    /// `cut` was called without an input.
    #[error("Function cut() requires one positional argument, but none were given")]
    MissingArgument,
    /// `cut` was called with more than one input.
    #[error("Function cut() requires one positional argument, but {0} were given")]
    TooManyArguments(usize),
    /// An input column is not numeric.
    #[error(
        "cut() can only be applied to numeric columns, instead column {index} has an stype: {column_type}"
    )]
    NonNumericColumn {
        /// Position of the column in the input.
        index: usize,
        /// Its actual type.
        column_type: ColumnType,
    },
    /// A bin count is negative.
    #[error("Integer value cannot be negative")]
    NegativeBins(i64),
    /// A bin count does not fit the `int32` bin ids.
    #[error("Integer value is too large: {0}")]
    TooManyBins(i64),
    /// A per-column bin list does not match the number of columns.
    #[error(
        "When bins is a list or a tuple, its length must be the same as the number of columns in the frame/expression, i.e. {expected}, instead got: {actual}"
    )]
    BinsLengthMismatch {
        /// Number of input columns.
        expected: usize,
        /// Length of the bin list.
        actual: usize,
    },
    /// `cut` was evaluated as part of a grouped projection.
    #[error("cut() cannot be used in a groupby context")]
    GroupByContext,
    /// The binned columns could not be assembled into a frame.
    #[error(transparent)]
    Frame(#[from] FrameError),
}

impl CutError {
    /// Returns the error category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingArgument | Self::TooManyArguments(_) => ErrorKind::Argument,
            Self::NonNumericColumn { .. } => ErrorKind::Type,
            Self::NegativeBins(_)
            | Self::TooManyBins(_)
            | Self::BinsLengthMismatch { .. }
            | Self::Frame(_) => ErrorKind::Value,
            Self::GroupByContext => ErrorKind::NotImplemented,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;

    use super::*;

    #[test]
    fn kinds_follow_the_failure_category() {
        assert_eq!(CutError::TooManyArguments(2).kind(), ErrorKind::Argument);
        assert_eq!(
            CutError::NonNumericColumn {
                index: 0,
                column_type: ColumnType::Str,
            }
            .kind(),
            ErrorKind::Type
        );
        assert_eq!(CutError::TooManyBins(1 << 40).kind(), ErrorKind::Value);
        assert_eq!(CutError::GroupByContext.kind(), ErrorKind::NotImplemented);
    }

    #[test]
    fn oversized_counts_name_the_value() {
        let err = CutError::TooManyBins(4_294_967_296);
        assert_eq!(err.to_string(), "Integer value is too large: 4294967296");
    }

    #[test]
    fn frame_errors_pass_through() {
        let err = CutError::from(FrameError::DuplicateName("x".into()));
        assert_eq!(err.kind(), ErrorKind::Value);
        assert_eq!(err.to_string(), "duplicate column name `x`");
    }
}
