// Copyright 2026 the Fdt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use fdt::FontFace;
use fdt_dev::{AtlasWriter, FontTableWriter, block_face};
use fdt_draw::{AtlasPages, Pixmap, TextStyle};

/// A decoded face together with its atlas.
pub(crate) struct Fixture {
    pub(crate) face: FontFace,
    pub(crate) atlas: AtlasPages,
}

impl Fixture {
    pub(crate) fn new(table: &FontTableWriter, atlas: AtlasWriter) -> Self {
        let face = FontFace::decode(&table.to_bytes()).unwrap();
        let atlas = AtlasPages::for_face(&face, atlas.into_textures()).unwrap();
        Self { face, atlas }
    }

    /// Solid 8x10 blocks on 16 pixel lines.
    pub(crate) fn blocks() -> Self {
        let (table, atlas) = block_face(8, 10);
        Self::new(&table, atlas)
    }

    pub(crate) fn renderer(&self) -> fdt_draw::TextRenderer<'_> {
        fdt_draw::TextRenderer::new(&self.face, &self.atlas)
    }
}

/// No synthetic styles, no outline.
pub(crate) fn plain() -> TextStyle {
    TextStyle {
        boldness: 0.0,
        italicness: 0.0,
        ..TextStyle::default()
    }
}

/// Premultiplied RGBA at (`x`, `y`).
pub(crate) fn pixel(pixmap: &Pixmap, x: u16, y: u16) -> [u8; 4] {
    let i = 4 * (usize::from(x) + usize::from(y) * usize::from(pixmap.width()));
    pixmap.data_as_u8_slice()[i..i + 4].try_into().unwrap()
}

/// Alpha of every pixel in row `y`.
pub(crate) fn alpha_row(pixmap: &Pixmap, y: u16) -> Vec<u8> {
    (0..pixmap.width()).map(|x| pixel(pixmap, x, y)[3]).collect()
}

/// Columns of row `y` with any coverage, as a half-open range.
pub(crate) fn ink_span(pixmap: &Pixmap, y: u16) -> Option<(u16, u16)> {
    let row = alpha_row(pixmap, y);
    let start = row.iter().position(|&a| a > 0)?;
    let end = row.iter().rposition(|&a| a > 0)? + 1;
    Some((start.try_into().unwrap(), end.try_into().unwrap()))
}
