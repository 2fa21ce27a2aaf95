// Copyright 2026 the Binframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float helpers for `no_std` builds.
//!
//! `f64::trunc` is not available in `core`. This trait dispatches to `libm` when `std` is off;
//! with `std` on, the inherent method is used and this module is not compiled.

/// Float math helpers for `f64` in `no_std` mode.
pub(crate) trait FloatExt {
    fn trunc(self) -> Self;
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
impl FloatExt for f64 {
    fn trunc(self) -> Self {
        libm::trunc(self)
    }
}

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("binframe_transforms requires either the `std` or `libm` feature");
