// Copyright 2026 the Fdt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout of styled text over FDT bitmap fonts.
//!
//! Text is tokenized into characters and inline style toggles (see
//! [`markup`]), each character is resolved to a glyph, pens are advanced with
//! kerning, lines are wrapped at word break points and finally aligned. The
//! result is a [`LayoutPlan`] for a painter to draw.
//!
//! ## Features
//!
//! - `std` (enabled by default): Get floating point functions from the standard library
//!   (likely using your target's libc).
//! - `libm`: Use floating point implementations from `core_maths`.
//!
//! At least one of `std` and `libm` is required; `std` overrides `libm`.

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("fdt_layout requires either the `std` or `libm` feature to be enabled");

// Suppress the unused_crate_dependencies lint when both std and libm are specified.
#[cfg(all(feature = "std", feature = "libm"))]
use core_maths as _;

extern crate alloc;

mod alignment;
mod builder;
mod line_break;
mod plan;

pub mod classify;
pub mod markup;


pub use alignment::{Alignment, ParseAlignmentError};
pub use builder::{LayoutBuilder, LayoutOptions};
pub use plan::{LayoutPlan, PositionedElement};
