// Copyright 2026 the Fdt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Painting of layout plans into RGBA bitmaps.

use alloc::vec;
use alloc::vec::Vec;

use fdt::FontFace;
use fdt_layout::classify::{is_control, is_space};
use fdt_layout::{LayoutPlan, PositionedElement};
use vello_common::color::PremulRgba8;
use vello_common::peniko::Color;
use vello_common::pixmap::Pixmap;

#[cfg(not(feature = "std"))]
use core_maths::CoreFloat as _;

use crate::atlas::{AtlasError, AtlasPages};
use crate::kernel::BorderKernel;

/// Colors and outline of rasterized text.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Paint {
    /// Color of the glyph ink.
    pub fill_color: Color,
    /// Color of the outline.
    pub border_color: Color,
    /// Outline width in pixels; zero or less draws no outline.
    pub border_width: f32,
    /// Falloff exponent of the outline.
    pub border_strength: f32,
}

/// A single-channel coverage buffer with max compositing.
struct Coverage {
    width: usize,
    height: usize,
    alpha: Vec<u8>,
}

impl Coverage {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            alpha: vec![0; width * height],
        }
    }

    /// Raises the coverage at (`x`, `y`) to `value`, ignoring points outside.
    fn max_at(&mut self, x: i32, y: i32, value: u8) {
        let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
            return;
        };
        if x >= self.width || y >= self.height {
            return;
        }
        let a = &mut self.alpha[x + y * self.width];
        *a = (*a).max(value);
    }
}

/// Paints the glyphs of one face into a bitmap.
#[derive(Clone, Copy, Debug)]
pub struct GlyphRasterizer<'a> {
    face: &'a FontFace,
    atlas: &'a AtlasPages,
}

impl<'a> GlyphRasterizer<'a> {
    /// Creates a rasterizer sampling glyphs of `face` from `atlas`.
    pub fn new(face: &'a FontFace, atlas: &'a AtlasPages) -> Self {
        Self { face, atlas }
    }

    /// Paints `plan` into a new bitmap.
    ///
    /// The bitmap is the plan's bounds grown by the outline's pad on every
    /// side, clipped to 65535 pixels in each direction. Fails before painting
    /// anything if a glyph's texture is missing.
    pub fn rasterize(&self, plan: &LayoutPlan, paint: &Paint) -> Result<Pixmap, AtlasError> {
        let inked: Vec<&PositionedElement> = plan
            .elements()
            .iter()
            .filter(|e| !is_control(e.ch) && !is_space(e.ch))
            .collect();
        for element in &inked {
            self.atlas.check(&element.glyph)?;
        }

        let kernel = BorderKernel::new(paint.border_width, paint.border_strength);
        let pad = kernel.pad();
        let width = to_extent(plan.width().saturating_add(2 * pad));
        let height = to_extent(plan.height().saturating_add(2 * pad));

        let mut fill = Coverage::new(width.into(), height.into());
        for element in &inked {
            // Relative to the plan first: right-aligned elements sit near i32::MAX.
            let x = element.x - plan.left() + pad;
            let y = element.y + pad;
            self.stamp(&mut fill, element, x, y, 1.0);
        }

        let data = if pad > 0 {
            let mut border = Coverage::new(width.into(), height.into());
            for element in &inked {
                for (kx, ky, weight) in kernel.taps() {
                    let x = kx + (element.x - plan.left());
                    let y = ky + element.y;
                    self.stamp(&mut border, element, x, y, weight);
                }
            }
            composite_outlined(&fill, &border, paint)
        } else {
            composite_plain(&fill, paint.fill_color)
        };

        log::debug!(
            "rasterized {} glyphs into {width}x{height} with pad {pad}",
            inked.len()
        );
        Ok(Pixmap::from_parts(data, width, height))
    }

    /// Max-composites the glyph of `element` with its top left cell corner at
    /// (`x`, `y`), smeared for bold and sheared for italic.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Shifted columns stay within the bitmap's i32 extent."
    )]
    fn stamp(
        &self,
        target: &mut Coverage,
        element: &PositionedElement,
        x: i32,
        y: i32,
        weight: f32,
    ) {
        let glyph = &element.glyph;
        let line_height = self.face.line_height() as f32;
        let w = i32::from(glyph.width);
        let tx = i32::from(glyph.texture_x);
        let ty = i32::from(glyph.texture_y);
        let sample = |i: i32, j: i32| -> f32 {
            if (0..w).contains(&i) {
                f32::from(self.atlas.sample(glyph.page, tx + i, ty + j))
            } else {
                0.0
            }
        };

        let mut xbold = 0;
        while (xbold as f32) < element.bold + 1.0 {
            let strength = (element.bold + 1.0 - xbold as f32).min(1.0) * weight;
            for j in 0..i32::from(glyph.height) {
                let shift = (x + xbold) as f32
                    + shear(element.italic, glyph.baseline_offset, j, line_height);
                let base = shift.floor();
                let frac = shift - base;
                let base = base as i32;
                for i in -1..w {
                    let value = sample(i, j) * frac + sample(i + 1, j) * (1.0 - frac);
                    target.max_at(base + i + 1, y + j, coverage(strength * value));
                }
            }
            xbold += 1;
        }
    }
}

/// Horizontal displacement of glyph row `row` for an italic slant of `italic`.
///
/// Positive slants lean right, moving the top of the line box by the full
/// amount; negative slants lean left, moving rows below the baseline.
fn shear(italic: f32, baseline_offset: i8, row: i32, line_height: f32) -> f32 {
    if line_height <= 0.0 {
        return 0.0;
    }
    let offset = f32::from(baseline_offset);
    let row = row as f32;
    if italic > 0.0 {
        italic * (line_height - offset - row) / line_height
    } else if italic < 0.0 {
        -italic * (offset + row) / line_height
    } else {
        0.0
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "Coverage is clamped to the u8 range first."
)]
fn coverage(value: f32) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

fn to_extent(length: i32) -> u16 {
    u16::try_from(length.max(0)).unwrap_or(u16::MAX)
}

fn premultiply([r, g, b, a]: [u8; 4]) -> PremulRgba8 {
    let scale = |c: u8| {
        let scaled = (u32::from(c) * u32::from(a) + 127) / 255;
        u8::try_from(scaled).unwrap_or(u8::MAX)
    };
    PremulRgba8 {
        r: scale(r),
        g: scale(g),
        b: scale(b),
        a,
    }
}

fn composite_plain(fill: &Coverage, color: Color) -> Vec<PremulRgba8> {
    let c = color.to_rgba8();
    fill.alpha
        .iter()
        .map(|&f| {
            let a = u8::try_from(u32::from(f) * u32::from(c.a) / 255).unwrap_or(u8::MAX);
            premultiply([c.r, c.g, c.b, a])
        })
        .collect()
}

fn composite_outlined(fill: &Coverage, border: &Coverage, paint: &Paint) -> Vec<PremulRgba8> {
    let fc = paint.fill_color.to_rgba8();
    let bc = paint.border_color.to_rgba8();
    let fill_rgb = [fc.r, fc.g, fc.b].map(f32::from);
    let border_rgb = [bc.r, bc.g, bc.b].map(f32::from);
    let fill_a = f32::from(fc.a) / 255.0;
    let border_a = f32::from(bc.a) / 255.0;

    fill.alpha
        .iter()
        .zip(&border.alpha)
        .map(|(&f, &o)| {
            let fa = f32::from(f) / 255.0;
            let ba = f32::from(o.min(255 - f)) / 255.0;
            let mix = |c: usize| coverage(fill_rgb[c] * fa + border_rgb[c] * (1.0 - fa));
            let [r, g, b] = [mix(0), mix(1), mix(2)];
            let ink = fa * fill_a;
            let a = coverage(255.0 * (ink + (1.0 - ink) * ba * border_a));
            premultiply([r, g, b, a])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes(data: &[PremulRgba8]) -> Vec<[u8; 4]> {
        data.iter().map(|p| [p.r, p.g, p.b, p.a]).collect()
    }

    #[test]
    fn upright_rows_are_not_sheared() {
        assert_eq!(shear(0.0, 3, 5, 16.0), 0.0);
    }

    #[test]
    fn positive_shear_leans_from_the_top() {
        assert_eq!(shear(4.0, 0, 0, 16.0), 4.0);
        assert_eq!(shear(4.0, 0, 8, 16.0), 2.0);
        assert_eq!(shear(4.0, 4, 12, 16.0), 0.0);
    }

    #[test]
    fn negative_shear_leans_from_the_baseline() {
        assert_eq!(shear(-4.0, 0, 0, 16.0), 0.0);
        assert_eq!(shear(-4.0, 0, 8, 16.0), 2.0);
        assert_eq!(shear(-4.0, 4, 12, 16.0), 4.0);
    }

    #[test]
    fn degenerate_line_height() {
        assert_eq!(shear(4.0, 0, 0, 0.0), 0.0);
    }

    #[test]
    fn max_compositing_never_lowers_coverage() {
        let mut target = Coverage::new(2, 1);
        target.max_at(0, 0, 200);
        target.max_at(0, 0, 100);
        target.max_at(1, 0, 50);
        target.max_at(1, 0, 150);
        target.max_at(2, 0, 255);
        target.max_at(-1, 0, 255);
        assert_eq!(target.alpha, [200, 150]);
    }

    #[test]
    fn plain_composite_scales_alpha() {
        let mut fill = Coverage::new(3, 1);
        fill.alpha.copy_from_slice(&[0, 255, 128]);
        let data = composite_plain(&fill, Color::from_rgba8(10, 20, 30, 128));
        assert_eq!(
            bytes(&data),
            [[0, 0, 0, 0], [5, 10, 15, 128], [3, 5, 8, 64]],
            "premultiplied"
        );
    }

    #[test]
    fn outlined_composite() {
        let mut fill = Coverage::new(3, 1);
        let mut border = Coverage::new(3, 1);
        fill.alpha.copy_from_slice(&[255, 0, 0]);
        border.alpha.copy_from_slice(&[255, 255, 0]);
        let paint = Paint {
            fill_color: Color::from_rgba8(255, 255, 255, 255),
            border_color: Color::from_rgba8(0, 0, 0, 255),
            border_width: 1.0,
            border_strength: 0.0,
        };
        let data = composite_outlined(&fill, &border, &paint);
        assert_eq!(
            bytes(&data),
            [[255, 255, 255, 255], [0, 0, 0, 255], [0, 0, 0, 0]],
            "ink, outline, empty"
        );
    }
}
