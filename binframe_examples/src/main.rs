// Copyright 2026 the Binframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Example binary for `binframe_transforms`.
//!
//! Run with `RUST_LOG=binframe_transforms=trace` to see the resolved binning of every column.

use binframe_core::{Column, ColumnData, Frame};
use binframe_transforms::{CutOptions, Expr, Projection, cut, cut_with};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let frame = match measurements() {
        Ok(frame) => frame,
        Err(err) => {
            tracing::error!(%err, "invalid input frame");
            return;
        }
    };
    println!("input:");
    print_frame(&frame);

    match cut(&frame, [2_i64, 3, 10, 4]) {
        Ok(out) => {
            println!("cut(bins = [2, 3, 10, 4]):");
            print_frame(&out);
        }
        Err(err) => tracing::error!(kind = ?err.kind(), %err, "cut failed"),
    }

    let left_closed = CutOptions::new(4_i64).with_right_closed(false);
    match cut_with(&frame, &left_closed) {
        Ok(out) => {
            println!("cut(bins = 4, right_closed = false):");
            print_frame(&out);
        }
        Err(err) => tracing::error!(kind = ?err.kind(), %err, "cut failed"),
    }

    let steps = match Frame::from_data([
        (0..30).step_by(3).collect::<Vec<i32>>(),
        (0..20).step_by(2).collect::<Vec<i32>>(),
    ]) {
        Ok(frame) => frame,
        Err(err) => {
            tracing::error!(%err, "invalid input frame");
            return;
        }
    };
    let nested = Projection::new([Expr::cut(Expr::cut(Expr::col(0) - Expr::col(1)))]);
    match nested.evaluate(&steps) {
        Ok(out) => {
            println!("cut(cut(C0 - C1)):");
            print_frame(&out);
        }
        Err(err) => tracing::error!(kind = ?err.kind(), %err, "projection failed"),
    }

    // Binning is undefined per group; this is rejected before any data is read.
    let grouped = Projection::new([Expr::cut(Expr::col(1))]).by([Expr::col(0)]);
    if let Err(err) = grouped.evaluate(&steps) {
        println!("grouped cut: {:?}: {err}", err.kind());
    }
}

fn measurements() -> Result<Frame, binframe_core::FrameError> {
    Frame::new(vec![
        Column::new(
            "flag",
            vec![Some(true), None, Some(false), Some(false), Some(true), None],
        ),
        Column::new("count", vec![Some(3_i32), None, Some(4), Some(1), Some(5), Some(4)]),
        Column::new(
            "length",
            vec![None, Some(1.4_f64), Some(4.1), Some(1.5), Some(5.9), Some(1.4)],
        ),
        Column::new("spread", vec![f64::INFINITY, -97.0, 0.0, 97.0, f64::NAN, 12.5]),
    ])
}

fn print_frame(frame: &Frame) {
    let names: Vec<_> = frame.names().collect();
    println!("  {}", names.join("\t"));
    for row in 0..frame.nrows() {
        let cells: Vec<String> = frame
            .columns()
            .iter()
            .map(|c| format_cell(c.data(), row))
            .collect();
        println!("  {}", cells.join("\t"));
    }
}

fn format_cell(data: &ColumnData, row: usize) -> String {
    match data {
        ColumnData::Str(v) => v[row].clone().unwrap_or_else(|| "NA".into()),
        ColumnData::Bool(v) => v[row].map_or_else(|| "NA".into(), |b| b.to_string()),
        ColumnData::Int32(v) => v[row].map_or_else(|| "NA".into(), |x| x.to_string()),
        ColumnData::Int64(v) => v[row].map_or_else(|| "NA".into(), |x| x.to_string()),
        _ => data.f64(row).map_or_else(|| "NA".into(), |x| x.to_string()),
    }
}
