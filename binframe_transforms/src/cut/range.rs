// Copyright 2026 the Binframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range scanning over the finite values of a column.

use binframe_core::ColumnData;

/// Minimum and maximum over the finite values of a column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiniteRange {
    /// Smallest finite value.
    pub min: f64,
    /// Largest finite value.
    pub max: f64,
}

impl FiniteRange {
    /// Scan a column once, skipping nulls and non-finite values.
    ///
    /// Returns `None` if no finite value is present (empty, all-null, all-infinite, or
    /// non-numeric columns).
    pub fn scan(data: &ColumnData) -> Option<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for row in 0..data.len() {
            let Some(v) = data.f64(row) else {
                continue;
            };
            if !v.is_finite() {
                continue;
            }
            min = min.min(v);
            max = max.max(v);
        }
        if min.is_finite() && max.is_finite() {
            Some(Self { min, max })
        } else {
            None
        }
    }

    /// Returns `true` if every finite value is the same.
    pub fn is_constant(&self) -> bool {
        self.min == self.max
    }
}
