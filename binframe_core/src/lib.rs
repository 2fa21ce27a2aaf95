// Copyright 2026 the Binframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Columnar data model for binframe.
//!
//! This crate provides:
//! - typed, nullable [`ColumnData`] with a promoted floating-point view for numeric code, and
//! - [`Frame`], an ordered set of equally long named columns.
//!
//! Transforms live in `binframe_transforms`; this crate owns storage only.

#![no_std]

extern crate alloc;

mod column;
mod frame;

pub use column::{Column, ColumnData, ColumnType};
pub use frame::{Frame, FrameError};
