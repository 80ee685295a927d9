// Copyright 2026 the Fdt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use fdt_layout::{Alignment, LayoutOptions};
use vello_common::peniko::Color;
use vello_common::peniko::color::palette::css;

use crate::kernel::border_pad;
use crate::raster::Paint;

/// Everything that controls how a piece of text is laid out and painted.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Bold smear in pixels inside `_..._` spans.
    pub boldness: f32,
    /// Italic shear in pixels inside `*...*` spans.
    pub italicness: f32,
    /// Outline width in pixels. Zero disables the outline.
    pub border_width: f32,
    /// Outline falloff exponent; larger values keep the outline opaque
    /// further from the ink.
    pub border_strength: f32,
    /// Ink color.
    pub fill_color: Color,
    /// Outline color.
    pub border_color: Color,
    /// Horizontal alignment of lines.
    pub alignment: Alignment,
    /// Width of the output bitmap at which lines wrap, outline included.
    pub max_width: i32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            boldness: 1.0,
            italicness: 4.0,
            border_width: 0.0,
            border_strength: 0.0,
            fill_color: css::WHITE,
            border_color: css::BLACK,
            alignment: Alignment::Left,
            max_width: i32::MAX,
        }
    }
}

impl TextStyle {
    /// The look of place names on the in-game map: heavy white text with a
    /// soft six pixel black outline.
    pub fn map_label() -> Self {
        Self {
            boldness: 4.0,
            border_width: 6.0,
            border_strength: 1.0,
            ..Self::default()
        }
    }

    /// Margin the outline adds on every side of the ink.
    pub fn pad(&self) -> i32 {
        border_pad(self.border_width)
    }

    /// The same style without an outline.
    pub fn without_border(&self) -> Self {
        Self {
            border_width: 0.0,
            ..*self
        }
    }

    /// Layout parameters for this style.
    ///
    /// Lines wrap early enough that the outline still fits in `max_width`.
    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            boldness: self.boldness,
            italicness: self.italicness,
            max_width: self.max_width.saturating_sub(2 * self.pad()),
            translate: (0, 0),
            alignment: self.alignment,
        }
    }

    /// Painting parameters for this style.
    pub fn paint(&self) -> Paint {
        Paint {
            fill_color: self.fill_color,
            border_color: self.border_color,
            border_width: self.border_width,
            border_strength: self.border_strength,
        }
    }
}
