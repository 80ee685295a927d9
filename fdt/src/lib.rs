// Copyright 2026 the Fdt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decoder for FDT bitmap font tables.
//!
//! An FDT table describes a bitmap font whose glyphs live in separate atlas
//! textures. It carries the face metrics, a glyph table and a kerning table,
//! both sorted by [`PackedKey`] so that lookups are binary searches.
//!
//! ## Features
//!
//! - `std` (enabled by default): Enables the `std` feature of `log`.
//!
//! ## Example
//!
//! ```no_run
//! # fn load() -> Vec<u8> { Vec::new() }
//! let face = fdt::FontFace::decode(&load())?;
//! let glyph = face.glyph('A')?;
//! let advance = glyph.advance() + face.kerning('A', 'V');
//! # let _ = advance;
//! # Ok::<(), fdt::Error>(())
//! ```

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

extern crate alloc;

mod collection;
mod error;
mod face;
mod key;
mod lookup;
mod raw;

#[cfg(test)]
mod tests;

pub use collection::{FaceCollection, STOCK_FACE_NAMES};
pub use error::{Error, ErrorKind, Section};
pub use face::{FontFace, GlyphDescriptor, KerningPair};
pub use key::PackedKey;
pub use lookup::FALLBACK_CHARS;
