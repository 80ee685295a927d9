// Copyright 2026 the Fdt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use fdt::{Error, FontFace};

use crate::alignment::{Alignment, align};
use crate::line_break::break_lines;
use crate::markup::{apply_styles, tokenize};
use crate::plan::{LayoutPlan, PositionedElement};

/// Parameters of a layout.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutOptions {
    /// Bold smear in pixels while bold is toggled on.
    pub boldness: f32,
    /// Italic shear in pixels while italic is toggled on. Negative values
    /// slant to the left.
    pub italicness: f32,
    /// Lines wrap before any glyph reaching this x coordinate.
    pub max_width: i32,
    /// Offset added to every element once lines are broken.
    pub translate: (i32, i32),
    /// Alignment of lines within `max_width`.
    pub alignment: Alignment,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            boldness: 1.0,
            italicness: 4.0,
            max_width: i32::MAX,
            translate: (0, 0),
            alignment: Alignment::Left,
        }
    }
}

/// A builder for laying out marked-up text with a font face.
#[derive(Debug)]
#[must_use = "Methods on the builder don't do anything until `build` is called."]
pub struct LayoutBuilder<'a> {
    face: &'a FontFace,
    text: &'a str,
    options: LayoutOptions,
}

impl<'a> LayoutBuilder<'a> {
    /// Creates a builder with default options.
    pub fn new(face: &'a FontFace, text: &'a str) -> Self {
        Self {
            face,
            text,
            options: LayoutOptions::default(),
        }
    }

    /// Replaces all options at once.
    pub fn options(mut self, options: LayoutOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the bold smear used while bold is toggled on.
    pub fn boldness(mut self, boldness: f32) -> Self {
        self.options.boldness = boldness;
        self
    }

    /// Set the italic shear used while italic is toggled on.
    pub fn italicness(mut self, italicness: f32) -> Self {
        self.options.italicness = italicness;
        self
    }

    /// Set the width at which lines wrap.
    pub fn max_width(mut self, max_width: i32) -> Self {
        self.options.max_width = max_width;
        self
    }

    /// Set the offset applied to every element after wrapping.
    pub fn translate(mut self, dx: i32, dy: i32) -> Self {
        self.options.translate = (dx, dy);
        self
    }

    /// Set the horizontal alignment of lines.
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.options.alignment = alignment;
        self
    }

    /// Consumes the builder and lays out the text.
    ///
    /// Fails only when a character has no glyph and the face lacks every
    /// fallback glyph as well.
    pub fn build(self) -> Result<LayoutPlan, Error> {
        let LayoutOptions {
            boldness,
            italicness,
            max_width,
            translate: (dx, dy),
            alignment,
        } = self.options;

        let mut elements = apply_styles(tokenize(self.text), italicness, boldness)
            .map(|styled| {
                Ok(PositionedElement {
                    ch: styled.ch,
                    italic: styled.italic,
                    bold: styled.bold,
                    glyph: *self.face.glyph(styled.ch)?,
                    x: 0,
                    y: 0,
                })
            })
            .collect::<Result<Vec<_>, Error>>()?;

        let line_starts = break_lines(&mut elements, self.face, max_width);

        for element in &mut elements {
            element.x += dx;
            element.y += dy;
        }

        let mut plan = LayoutPlan {
            elements,
            line_starts,
            ..LayoutPlan::default()
        };
        align(&mut plan, self.face.line_height(), max_width, alignment);

        log::debug!(
            "laid out {} elements on {} lines, {}x{} at left {}",
            plan.elements.len(),
            plan.line_count(),
            plan.width,
            plan.height,
            plan.left
        );
        Ok(plan)
    }
}
