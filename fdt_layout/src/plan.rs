// Copyright 2026 the Fdt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::ops::Range;

use fdt::GlyphDescriptor;
use smallvec::SmallVec;

#[cfg(not(feature = "std"))]
use core_maths::CoreFloat as _;

/// A character with its resolved glyph and final pen position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PositionedElement {
    /// The character as it appeared in the text.
    pub ch: char,
    /// Italic shear in effect for this character.
    pub italic: f32,
    /// Bold smear in effect for this character.
    pub bold: f32,
    /// The glyph drawn for this character. May be a fallback glyph.
    pub glyph: GlyphDescriptor,
    /// Pen position relative to the plan origin.
    pub x: i32,
    /// Top of the line box relative to the plan origin.
    pub y: i32,
}

impl PositionedElement {
    /// Extra pixels the simulated styles add to the right of the glyph cell.
    pub fn style_growth(&self) -> i32 {
        (self.bold + self.italic.abs()).ceil() as i32
    }

    /// Right edge of the glyph cell including style growth.
    pub fn ink_right(&self) -> i32 {
        self.x + i32::from(self.glyph.width) + self.style_growth()
    }

    /// Bottom edge of the glyph cell.
    pub fn bottom(&self) -> i32 {
        self.y + i32::from(self.glyph.height)
    }
}

/// Positioned, line broken and aligned text, ready for painting.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutPlan {
    pub(crate) left: i32,
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) elements: Vec<PositionedElement>,
    pub(crate) line_starts: SmallVec<[usize; 8]>,
}

impl LayoutPlan {
    /// Smallest starting x of any non-empty line.
    ///
    /// Painters subtract this from every element so that the bitmap starts at
    /// the left-most ink.
    pub fn left(&self) -> i32 {
        self.left
    }

    /// Width of the tight bounding box, including style growth.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the tight bounding box; never less than the line height
    /// times the number of lines.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Elements in text order, style markers excluded.
    pub fn elements(&self) -> &[PositionedElement] {
        &self.elements
    }

    /// Number of lines, including empty ones.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Index of the first element of every line.
    pub fn line_starts(&self) -> &[usize] {
        &self.line_starts
    }

    /// Element ranges of every line, trailing whitespace included.
    pub fn lines(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        let ends = self
            .line_starts
            .iter()
            .skip(1)
            .copied()
            .chain(core::iter::once(self.elements.len()));
        self.line_starts
            .iter()
            .copied()
            .zip(ends)
            .map(|(start, end)| start..end)
    }
}
