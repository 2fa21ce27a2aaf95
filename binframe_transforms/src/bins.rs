// Copyright 2026 the Binframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bin-count specification and cut options.

extern crate alloc;

use alloc::vec::Vec;

use smallvec::SmallVec;

/// Default number of bins when none is given.
pub const DEFAULT_BINS: i64 = 10;

/// Requested bin counts.
///
/// Counts are signed so that negative requests can be reported rather than unrepresentable;
/// they are checked before any column is scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bins {
    /// One count applied to every column.
    All(i64),
    /// One count per column, in column order.
    PerColumn(SmallVec<[i64; 4]>),
}

impl Bins {
    /// Returns every count that was supplied.
    pub fn counts(&self) -> &[i64] {
        match self {
            Self::All(n) => core::slice::from_ref(n),
            Self::PerColumn(v) => v,
        }
    }
}

impl Default for Bins {
    fn default() -> Self {
        Self::All(DEFAULT_BINS)
    }
}

impl From<i64> for Bins {
    fn from(n: i64) -> Self {
        Self::All(n)
    }
}

impl From<i32> for Bins {
    fn from(n: i32) -> Self {
        Self::All(i64::from(n))
    }
}

impl From<&[i64]> for Bins {
    fn from(v: &[i64]) -> Self {
        Self::PerColumn(SmallVec::from_slice(v))
    }
}

impl From<Vec<i64>> for Bins {
    fn from(v: Vec<i64>) -> Self {
        Self::PerColumn(SmallVec::from_vec(v))
    }
}

impl<const N: usize> From<[i64; N]> for Bins {
    fn from(v: [i64; N]) -> Self {
        Self::PerColumn(v.into_iter().collect())
    }
}

/// Options for the cut transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CutOptions {
    /// Requested bin counts.
    pub bins: Bins,
    /// Whether bins include their right edge.
    ///
    /// With right-closed bins a value lying exactly on an interior edge goes to the lower bin,
    /// otherwise to the upper one. The column minimum is always bin `0` and the maximum is
    /// always the last bin.
    pub right_closed: bool,
}

impl Default for CutOptions {
    fn default() -> Self {
        Self {
            bins: Bins::default(),
            right_closed: true,
        }
    }
}

impl CutOptions {
    /// Options with the given bin counts and right-closed bins.
    pub fn new(bins: impl Into<Bins>) -> Self {
        Self {
            bins: bins.into(),
            ..Self::default()
        }
    }

    /// Set whether bins include their right edge.
    pub fn with_right_closed(mut self, right_closed: bool) -> Self {
        self.right_closed = right_closed;
        self
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn defaults_to_ten_right_closed_bins() {
        let opts = CutOptions::default();
        assert_eq!(opts.bins, Bins::All(10));
        assert!(opts.right_closed);
    }

    #[test]
    fn lists_and_arrays_become_per_column_counts() {
        let from_vec = Bins::from(vec![2_i64, 3]);
        let from_array = Bins::from([2_i64, 3]);
        assert_eq!(from_vec, from_array);
        assert_eq!(from_vec.counts(), [2, 3]);
        assert_eq!(Bins::from(7_i64).counts(), [7]);
    }
}
