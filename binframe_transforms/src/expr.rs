// Copyright 2026 the Binframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Column expression IR.

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::ops;

use crate::bins::CutOptions;

/// Reference to a column of the frame an expression is evaluated against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnRef {
    /// Column at a 0-based position.
    Index(usize),
    /// Column with a given name.
    Name(String),
}

/// Element-wise arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/` (always produces `float64`)
    Div,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        })
    }
}

/// An expression producing one or more columns from an input frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A single input column.
    Column(ColumnRef),
    /// Every input column, in order.
    AllColumns,
    /// Element-wise arithmetic.
    ///
    /// Operands must have the same number of columns, or one of them a single column which is
    /// then applied to every column of the other.
    Binary {
        /// Operator.
        op: BinaryOp,
        /// Left operand; output columns take its names.
        lhs: Box<Expr>,
        /// Right operand.
        rhs: Box<Expr>,
    },
    /// Equal-width binning of every column produced by the argument.
    ///
    /// `args` holds the positional arguments as written; exactly one is required and this is
    /// checked when the expression is evaluated.
    Cut {
        /// Positional arguments.
        args: Vec<Expr>,
        /// Bin counts and interval closure.
        options: CutOptions,
    },
}

impl Expr {
    /// The column at `index`.
    pub fn col(index: usize) -> Self {
        Self::Column(ColumnRef::Index(index))
    }

    /// The column called `name`.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Column(ColumnRef::Name(name.into()))
    }

    /// Every column.
    pub fn all() -> Self {
        Self::AllColumns
    }

    /// `cut(arg)` with default options.
    pub fn cut(arg: Self) -> Self {
        Self::cut_with(arg, CutOptions::default())
    }

    /// `cut(arg)` with the given options.
    pub fn cut_with(arg: Self, options: CutOptions) -> Self {
        Self::Cut {
            args: vec![arg],
            options,
        }
    }

    /// A `cut` call with arbitrary positional arguments.
    pub fn cut_call(args: Vec<Self>, options: CutOptions) -> Self {
        Self::Cut { args, options }
    }

    /// Element-wise `lhs op rhs`.
    pub fn binary(op: BinaryOp, lhs: Self, rhs: Self) -> Self {
        Self::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }
}

impl ops::Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::binary(BinaryOp::Add, self, rhs)
    }
}

impl ops::Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::binary(BinaryOp::Sub, self, rhs)
    }
}

impl ops::Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::binary(BinaryOp::Mul, self, rhs)
    }
}

impl ops::Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::binary(BinaryOp::Div, self, rhs)
    }
}
