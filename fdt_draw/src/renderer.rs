// Copyright 2026 the Fdt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

use fdt::FontFace;
use fdt_layout::{LayoutBuilder, LayoutPlan};
use vello_common::kurbo::{Affine, Rect};
use vello_common::peniko::{self, ImageSampler};
use vello_common::pixmap::Pixmap;
use vello_cpu::{Image, ImageSource, RenderContext};

use crate::atlas::AtlasPages;
use crate::error::RenderError;
use crate::raster::GlyphRasterizer;
use crate::style::TextStyle;

/// Lays out and paints text with one face.
#[derive(Clone, Copy, Debug)]
pub struct TextRenderer<'a> {
    face: &'a FontFace,
    atlas: &'a AtlasPages,
}

impl<'a> TextRenderer<'a> {
    /// Creates a renderer drawing `face` glyphs from `atlas`.
    pub fn new(face: &'a FontFace, atlas: &'a AtlasPages) -> Self {
        Self { face, atlas }
    }

    /// The face text is laid out with.
    pub fn face(&self) -> &'a FontFace {
        self.face
    }

    /// Lays out `text` the way [`render`](Self::render) would.
    pub fn layout(&self, text: &str, style: &TextStyle) -> Result<LayoutPlan, fdt::Error> {
        LayoutBuilder::new(self.face, text)
            .options(style.layout_options())
            .build()
    }

    /// Renders `text` into a bitmap.
    ///
    /// The bitmap is the text's bounding box grown by [`TextStyle::pad`] on
    /// every side, and is no wider than `style.max_width` unless a single
    /// glyph is.
    pub fn render(&self, text: &str, style: &TextStyle) -> Result<Pixmap, RenderError> {
        let plan = self.layout(text, style)?;
        let pixmap = GlyphRasterizer::new(self.face, self.atlas)
            .rasterize(&plan, &style.paint())?;
        Ok(pixmap)
    }

    /// Renders `text` as a map label: the outlined text, with the ink painted
    /// again on top so the outline never bleeds into it.
    pub fn render_label(&self, text: &str, style: &TextStyle) -> Result<Pixmap, RenderError> {
        let plan = self.layout(text, style)?;
        let rasterizer = GlyphRasterizer::new(self.face, self.atlas);
        let outlined = rasterizer.rasterize(&plan, &style.paint())?;
        let pad = style.pad();
        let label = if pad > 0 {
            let ink = rasterizer.rasterize(&plan, &style.without_border().paint())?;
            layer(outlined, ink, f64::from(pad))
        } else {
            outlined
        };
        log::debug!(
            "rendered label {text:?} at {}x{}",
            label.width(),
            label.height()
        );
        Ok(label)
    }
}

/// Draws `top` over `bottom` with its top left corner at (`offset`, `offset`).
fn layer(bottom: Pixmap, top: Pixmap, offset: f64) -> Pixmap {
    let (width, height) = (bottom.width(), bottom.height());
    let mut ctx = RenderContext::new(width, height);
    for (pixmap, origin) in [(bottom, 0.0), (top, offset)] {
        let area = Rect::new(0.0, 0.0, pixmap.width().into(), pixmap.height().into());
        ctx.set_paint(Image {
            image: ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: ImageSampler {
                x_extend: peniko::Extend::Pad,
                y_extend: peniko::Extend::Pad,
                // Pixel aligned, so every sample is an exact copy.
                quality: peniko::ImageQuality::Low,
                alpha: 1.0,
            },
        });
        ctx.set_transform(Affine::translate((origin, origin)));
        ctx.fill_rect(&area);
    }
    ctx.flush();
    let mut label = Pixmap::new(width, height);
    ctx.render_to_pixmap(&mut label);
    label
}
