// Copyright 2026 the Fdt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use core_maths::CoreFloat as _;

/// Number of whole pixels a border of `border_width` extends past the ink.
#[expect(
    clippy::cast_possible_truncation,
    reason = "Border widths are a handful of pixels."
)]
pub fn border_pad(border_width: f32) -> i32 {
    if border_width > 0.0 {
        border_width.ceil() as i32
    } else {
        0
    }
}

/// Falloff weights of the outline drawn around glyphs.
///
/// Covers a `(2 * pad + 1)` square grid of offsets centered on `(pad, pad)`.
/// The weight at distance `d` from the center is
/// `(1 - min(1, d / border_width)) ^ (2 ^ -strength)`, so larger strengths
/// keep the outline opaque further from the ink.
#[derive(Clone, Debug)]
pub struct BorderKernel {
    pad: i32,
    weights: Vec<f32>,
}

impl BorderKernel {
    /// Computes the kernel for an outline `border_width` pixels wide.
    pub fn new(border_width: f32, strength: f32) -> Self {
        let pad = border_pad(border_width);
        let size = 2 * pad + 1;
        let exponent = 2_f32.powf(-strength);
        let mut weights = Vec::with_capacity((size * size) as usize);
        for y in 0..size {
            for x in 0..size {
                let dx = (x - pad) as f32;
                let dy = (y - pad) as f32;
                let distance = (dx * dx + dy * dy).sqrt();
                let falloff = if border_width > 0.0 {
                    1.0 - (distance / border_width).min(1.0)
                } else {
                    1.0
                };
                weights.push(falloff.powf(exponent));
            }
        }
        Self { pad, weights }
    }

    /// Distance in pixels from the center to the edge of the grid.
    pub fn pad(&self) -> i32 {
        self.pad
    }

    /// Weight at grid offset (`x`, `y`), both in `0..=2 * pad`.
    pub fn weight(&self, x: i32, y: i32) -> f32 {
        let size = 2 * self.pad + 1;
        if !(0..size).contains(&x) || !(0..size).contains(&y) {
            return 0.0;
        }
        self.weights[(x + y * size) as usize]
    }

    /// Grid offsets with a non-zero weight.
    pub fn taps(&self) -> impl Iterator<Item = (i32, i32, f32)> + '_ {
        let size = 2 * self.pad + 1;
        (0..size)
            .flat_map(move |y| (0..size).map(move |x| (x, y)))
            .map(|(x, y)| (x, y, self.weight(x, y)))
            .filter(|&(_, _, weight)| weight > 0.0)
    }
}
