// Copyright 2026 the Binframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element-wise arithmetic for [`Expr::Binary`](crate::Expr::Binary).
//!
//! Types promote along `void < bool/int32 < int64 < float64`; `/` always yields `float64`.
//! Integer arithmetic wraps, and division by zero yields null.

extern crate alloc;

use alloc::vec::Vec;

use binframe_core::{Column, ColumnData, ColumnType};

use crate::expr::BinaryOp;
use crate::program::EvalError;

/// Apply `op` to two column sets, broadcasting a single column over the other side.
pub(crate) fn apply(
    op: BinaryOp,
    lhs: &[Column],
    rhs: &[Column],
) -> Result<Vec<Column>, EvalError> {
    match (lhs.len(), rhs.len()) {
        (l, r) if l == r => lhs
            .iter()
            .zip(rhs)
            .map(|(l, r)| binary_column(op, l, r))
            .collect(),
        (1, _) => rhs.iter().map(|r| binary_column(op, &lhs[0], r)).collect(),
        (_, 1) => lhs.iter().map(|l| binary_column(op, l, &rhs[0])).collect(),
        (l, r) => Err(EvalError::WidthMismatch { lhs: l, rhs: r }),
    }
}

fn binary_column(op: BinaryOp, lhs: &Column, rhs: &Column) -> Result<Column, EvalError> {
    for col in [lhs, rhs] {
        if !col.column_type().is_numeric() {
            return Err(EvalError::NonNumericOperand {
                op,
                column_type: col.column_type(),
            });
        }
    }

    let (l, r) = (lhs.data(), rhs.data());
    let n = l.len().max(r.len());
    let data = match result_type(op, l.column_type(), r.column_type()) {
        ColumnType::Int32 => ColumnData::Int32(
            (0..n)
                .map(|row| {
                    let a = l.i64(row).and_then(|v| i32::try_from(v).ok())?;
                    let b = r.i64(row).and_then(|v| i32::try_from(v).ok())?;
                    int32(op, a, b)
                })
                .collect(),
        ),
        ColumnType::Int64 => ColumnData::Int64(
            (0..n)
                .map(|row| int64(op, l.i64(row)?, r.i64(row)?))
                .collect(),
        ),
        ColumnType::Float64 => ColumnData::Float64(
            (0..n)
                .map(|row| float64(op, l.f64(row)?, r.f64(row)?))
                .collect(),
        ),
        _ => ColumnData::Void(n),
    };
    Ok(Column::new(lhs.name(), data))
}

fn result_type(op: BinaryOp, lhs: ColumnType, rhs: ColumnType) -> ColumnType {
    if op == BinaryOp::Div {
        return ColumnType::Float64;
    }
    let (lhs, rhs) = (promote(lhs), promote(rhs));
    if rank(lhs) >= rank(rhs) { lhs } else { rhs }
}

fn promote(ty: ColumnType) -> ColumnType {
    match ty {
        ColumnType::Bool => ColumnType::Int32,
        ColumnType::Float32 => ColumnType::Float64,
        other => other,
    }
}

fn rank(ty: ColumnType) -> u8 {
    match ty {
        ColumnType::Void => 0,
        ColumnType::Bool | ColumnType::Int32 => 1,
        ColumnType::Int64 => 2,
        ColumnType::Float32 | ColumnType::Float64 => 3,
        ColumnType::Str => 4,
    }
}

fn int32(op: BinaryOp, a: i32, b: i32) -> Option<i32> {
    match op {
        BinaryOp::Add => Some(a.wrapping_add(b)),
        BinaryOp::Sub => Some(a.wrapping_sub(b)),
        BinaryOp::Mul => Some(a.wrapping_mul(b)),
        BinaryOp::Div => a.checked_div(b),
    }
}

fn int64(op: BinaryOp, a: i64, b: i64) -> Option<i64> {
    match op {
        BinaryOp::Add => Some(a.wrapping_add(b)),
        BinaryOp::Sub => Some(a.wrapping_sub(b)),
        BinaryOp::Mul => Some(a.wrapping_mul(b)),
        BinaryOp::Div => a.checked_div(b),
    }
}

fn float64(op: BinaryOp, a: f64, b: f64) -> Option<f64> {
    match op {
        BinaryOp::Add => Some(a + b),
        BinaryOp::Sub => Some(a - b),
        BinaryOp::Mul => Some(a * b),
        BinaryOp::Div if b == 0.0 => None,
        BinaryOp::Div => Some(a / b),
    }
}
