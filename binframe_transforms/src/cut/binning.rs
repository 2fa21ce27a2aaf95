// Copyright 2026 the Binframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolved per-column binning and row assignment.
//!
//! For a column with distinct finite values in `[min, max]` and `n` bins, a finite value `v`
//! maps to
//!
//! ```text
//! trunc(scale * v + offset) + shift,   scale = (1 - ε) * n / (max - min)
//! ```
//!
//! where `ε` is `f32::EPSILON`. The `(1 - ε)` contraction maps `[min, max]` onto
//! `[0, n * (1 - ε)]`, so a value lying exactly on an interior edge lands deterministically in
//! the lower bin (right-closed). Left-closed bins mirror the interval onto `[(ε - 1) * n, 0]`
//! and shift by `n - 1`, which sends edge values to the upper bin instead.
//!
//! Results are clamped into `[0, n - 1]`; `v == min` is always bin `0` and `v == max` is always
//! the last bin.
//!
//! When `scale` is not a normal float (ranges near the subnormal limit, or spans that overflow
//! `f64`), each row is first normalized to `t = (v - min) / (max - min)` and then mapped to
//! `t * (1 - ε) * n`. Spans that overflow are computed on halved operands.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use super::range::FiniteRange;

const EPSILON: f64 = f32::EPSILON as f64;

/// Binning resolved once per column, before any row is assigned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Binning {
    /// Every row maps to null: no finite values, or zero bins requested.
    Null,
    /// Every finite value maps to bin `0`: all finite values are equal.
    Constant,
    /// Equal-width bins over a non-degenerate range.
    Linear(LinearBins),
}

impl Binning {
    /// Resolve the binning for a column.
    ///
    /// `nbins` must not exceed `i32::MAX`; larger counts are rejected during validation.
    pub fn resolve(range: Option<FiniteRange>, nbins: u32, right_closed: bool) -> Self {
        let Some(range) = range else {
            return Self::Null;
        };
        if nbins == 0 {
            return Self::Null;
        }
        if range.is_constant() {
            return Self::Constant;
        }
        Self::Linear(LinearBins::new(range, nbins, right_closed))
    }

    /// Map one row to its bin id.
    ///
    /// Nulls, infinities and `NaN` always map to null.
    pub fn bin(&self, value: Option<f64>) -> Option<i32> {
        let v = value.filter(|v| v.is_finite())?;
        match self {
            Self::Null => None,
            Self::Constant => Some(0),
            Self::Linear(bins) => Some(bins.bin(v)),
        }
    }
}

/// Equal-width bins over `[min, max]` with `min < max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearBins {
    min: f64,
    max: f64,
    nbins: u32,
    map: Mapping,
    stretch: f64,
    lead: f64,
    shift: i32,
    last: i32,
}

/// How a value is mapped onto `[lead, lead + stretch]` before truncation.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Mapping {
    /// Precomputed `scale * v + offset`.
    Affine { scale: f64, offset: f64 },
    /// Normalize to `[0, 1]` per row; `scale` over- or underflows for this range.
    Normalized {
        /// `max - min` overflows, so all three terms are halved.
        halved: bool,
    },
}

impl LinearBins {
    fn new(range: FiniteRange, nbins: u32, right_closed: bool) -> Self {
        let n = f64::from(nbins);
        let last = i32::try_from(nbins - 1).unwrap_or(i32::MAX);
        let stretch = (1.0 - EPSILON) * n;
        let (lead, shift) = if right_closed {
            (0.0, 0)
        } else {
            ((EPSILON - 1.0) * n, last)
        };
        let span = range.max - range.min;
        let scale = stretch / span;
        let offset = -scale * range.min + lead;
        let map = if scale.is_normal() && offset.is_finite() {
            Mapping::Affine { scale, offset }
        } else {
            Mapping::Normalized {
                halved: !span.is_finite(),
            }
        };
        Self {
            min: range.min,
            max: range.max,
            nbins,
            map,
            stretch,
            lead,
            shift,
            last,
        }
    }

    /// Left edge of bin `0`.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Right edge of the last bin.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Width of every bin.
    pub fn width(&self) -> f64 {
        let n = f64::from(self.nbins);
        let span = self.max - self.min;
        if span.is_finite() {
            span / n
        } else {
            (self.max / 2.0 - self.min / 2.0) / n * 2.0
        }
    }

    /// Number of bins.
    pub fn nbins(&self) -> u32 {
        self.nbins
    }

    fn bin(&self, v: f64) -> i32 {
        if v == self.max {
            return self.last;
        }
        // The contraction leaves `n * ε` bins of slack, which matters once `n` nears 2^23.
        if v == self.min {
            return 0;
        }
        let pos = match self.map {
            Mapping::Affine { scale, offset } => scale * v + offset,
            Mapping::Normalized { halved: false } => {
                (v - self.min) / (self.max - self.min) * self.stretch + self.lead
            }
            Mapping::Normalized { halved: true } => {
                (v / 2.0 - self.min / 2.0) / (self.max / 2.0 - self.min / 2.0) * self.stretch
                    + self.lead
            }
        };
        let raw = pos.trunc();
        debug_assert!(
            !raw.is_nan(),
            "bin position of {v} in [{}, {}] is NaN",
            self.min,
            self.max
        );
        #[allow(clippy::cast_possible_truncation, reason = "clamped before cast")]
        let id = raw.clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32;
        id.saturating_add(self.shift).clamp(0, self.last)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec::Vec;

    use super::*;

    fn bins_of(values: &[f64], nbins: u32, right_closed: bool) -> Vec<Option<i32>> {
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let binning = Binning::resolve(Some(FiniteRange { min, max }), nbins, right_closed);
        values.iter().map(|&v| binning.bin(Some(v))).collect()
    }

    #[test]
    fn right_edge_lands_in_last_bin() {
        assert_eq!(
            bins_of(&[-97.0, 0.0, 97.0], 42, true),
            [Some(0), Some(20), Some(41)]
        );
    }

    #[test]
    fn interior_edges_follow_closure() {
        // Edges at 1 and 2.
        let values = [0.0, 1.0, 2.0, 3.0];
        assert_eq!(
            bins_of(&values, 3, true),
            [Some(0), Some(0), Some(1), Some(2)]
        );
        assert_eq!(
            bins_of(&values, 3, false),
            [Some(0), Some(1), Some(2), Some(2)]
        );
    }

    #[test]
    fn min_and_max_are_first_and_last_bins_for_large_counts() {
        let nbins = i32::MAX as u32;
        for right_closed in [true, false] {
            let out = bins_of(&[-1.0e300, 0.5, 1.0e300], nbins, right_closed);
            assert_eq!(out[0], Some(0));
            assert_eq!(out[2], Some(i32::MAX - 1));
        }
    }

    #[test]
    fn degenerate_binnings() {
        let range = Some(FiniteRange { min: 3.0, max: 3.0 });
        assert_eq!(Binning::resolve(range, 10, true), Binning::Constant);
        assert_eq!(Binning::resolve(range, 0, true), Binning::Null);
        assert_eq!(Binning::resolve(None, 10, true), Binning::Null);
        assert_eq!(Binning::Constant.bin(Some(3.0)), Some(0));
        assert_eq!(Binning::Null.bin(Some(3.0)), None);
    }

    #[test]
    fn non_finite_values_are_null() {
        let binning = Binning::resolve(Some(FiniteRange { min: 0.0, max: 1.0 }), 4, true);
        assert_eq!(binning.bin(None), None);
        assert_eq!(binning.bin(Some(f64::INFINITY)), None);
        assert_eq!(binning.bin(Some(f64::NEG_INFINITY)), None);
        assert_eq!(binning.bin(Some(f64::NAN)), None);
    }

    #[test]
    fn linear_bins_expose_width() {
        let Binning::Linear(bins) =
            Binning::resolve(Some(FiniteRange { min: 0.0, max: 9.0 }), 10, true)
        else {
            panic!("expected linear bins");
        };
        assert!((bins.width() - 0.9).abs() < 1e-12);
        assert_eq!(bins.nbins(), 10);
        assert_eq!(bins.min(), 0.0);
    }

    #[test]
    fn tiny_ranges_keep_interior_bins() {
        assert_eq!(
            bins_of(&[0.0, 1.0e-308, 2.0e-308], 10, true),
            [Some(0), Some(4), Some(9)]
        );
        assert_eq!(
            bins_of(&[0.0, 1.0e-308, 2.0e-308], 10, false),
            [Some(0), Some(5), Some(9)]
        );
    }

    #[test]
    fn subnormal_ranges_keep_interior_bins() {
        assert_eq!(
            bins_of(&[1.0e-320, 2.0e-320, 3.0e-320], 10, true),
            [Some(0), Some(4), Some(9)]
        );
    }

    #[test]
    fn tiny_range_with_many_bins() {
        let nbins = i32::MAX as u32;
        let out = bins_of(&[0.0, 0.75e-300, 1.0e-300], nbins, true);
        assert_eq!(out[0], Some(0));
        assert_eq!(out[2], Some(i32::MAX - 1));
        let mid = out[1].unwrap();
        assert!(
            (1_610_612_000..1_610_613_000).contains(&mid),
            "{mid} is not three quarters of the way up"
        );
    }

    #[test]
    fn overflowing_spans_keep_interior_bins() {
        assert_eq!(
            bins_of(&[-1.0e308, 0.9e308, 1.0e308], 4, true),
            [Some(0), Some(3), Some(3)]
        );
        assert_eq!(
            bins_of(&[-f64::MAX, 0.0, f64::MAX], 4, true),
            [Some(0), Some(1), Some(3)]
        );
        assert_eq!(
            bins_of(&[-f64::MAX, 0.0, f64::MAX], 4, false),
            [Some(0), Some(2), Some(3)]
        );

        let Binning::Linear(bins) = Binning::resolve(
            Some(FiniteRange {
                min: -f64::MAX,
                max: f64::MAX,
            }),
            4,
            true,
        ) else {
            panic!("expected linear bins");
        };
        assert!(bins.width().is_finite());
        assert!((bins.width() / f64::MAX - 0.5).abs() < 1e-12);
    }
}
