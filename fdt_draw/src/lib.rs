// Copyright 2026 the Fdt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rasterizes FDT text layouts into RGBA bitmaps.
//!
//! Glyph cells are copied out of the face's atlas textures, smeared
//! horizontally for synthetic bold, sheared row by row for synthetic italic,
//! and optionally surrounded by a soft outline. Overlapping glyphs are
//! combined with max compositing so they never thin each other out.
//!
//! Bitmaps are [`Pixmap`]s from `vello_common`, holding premultiplied RGBA.
//! Use [`Pixmap::take_unpremultiplied`] for straight alpha.
//!
//! ```no_run
//! use fdt::FontFace;
//! use fdt_draw::{AtlasPages, TextRenderer, TextStyle};
//!
//! # fn load() -> (Vec<u8>, Vec<Vec<u8>>) { unimplemented!() }
//! let (table, textures) = load();
//! let face = FontFace::decode(&table).unwrap();
//! let atlas = AtlasPages::for_face(&face, textures).unwrap();
//! let label = TextRenderer::new(&face, &atlas)
//!     .render_label("Limsa Lominsa", &TextStyle::map_label())
//!     .unwrap();
//! println!("{}x{}", label.width(), label.height());
//! ```
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
compile_error!("fdt_draw requires either the `std` or `libm` feature to be enabled");

// Suppress the unused_crate_dependencies lint when both std and libm are specified.
#[cfg(all(feature = "std", feature = "libm"))]
use core_maths as _;

extern crate alloc;

mod atlas;
mod error;
mod kernel;
mod raster;
mod renderer;
mod style;


pub use atlas::{AtlasError, AtlasPages, CHANNEL_ORDER};
pub use error::RenderError;
pub use kernel::{BorderKernel, border_pad};
pub use raster::{GlyphRasterizer, Paint};
pub use renderer::TextRenderer;
pub use style::TextStyle;
pub use vello_common::peniko;
pub use vello_common::pixmap::Pixmap;
