// Copyright 2026 the Fdt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph atlas textures.

use alloc::vec::Vec;
use core::fmt;

use fdt::{FontFace, GlyphDescriptor};

/// Byte within an RGBA pixel holding each of the four logical pages that
/// share one texture.
pub const CHANNEL_ORDER: [usize; 4] = [2, 1, 0, 3];

/// The RGBA textures a face draws its glyphs from.
///
/// Every texture interleaves four single-channel logical pages: a glyph on
/// page `p` lives in texture `p / 4`, in byte [`CHANNEL_ORDER`]`[p % 4]` of
/// each pixel.
#[derive(Clone, Debug)]
pub struct AtlasPages {
    width: u16,
    height: u16,
    textures: Vec<Vec<u8>>,
}

impl AtlasPages {
    /// Wraps textures of `width` x `height` RGBA pixels.
    ///
    /// Fails if any texture is not exactly `width * height * 4` bytes long.
    pub fn new(width: u16, height: u16, textures: Vec<Vec<u8>>) -> Result<Self, AtlasError> {
        let expected = 4 * usize::from(width) * usize::from(height);
        if let Some((index, texture)) = textures
            .iter()
            .enumerate()
            .find(|(_, texture)| texture.len() != expected)
        {
            return Err(AtlasError::PageSize {
                index,
                expected,
                actual: texture.len(),
            });
        }
        Ok(Self {
            width,
            height,
            textures,
        })
    }

    /// Wraps textures sized by the face's texture geometry.
    pub fn for_face(face: &FontFace, textures: Vec<Vec<u8>>) -> Result<Self, AtlasError> {
        Self::new(face.texture_width(), face.texture_height(), textures)
    }

    /// Width of every texture in pixels.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height of every texture in pixels.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Number of RGBA textures, each holding four logical pages.
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Whether no textures were supplied.
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    /// Whether the texture holding logical `page` was supplied.
    pub fn has_page(&self, page: u16) -> bool {
        usize::from(page / 4) < self.textures.len()
    }

    /// Ensures the texture of `glyph` is present.
    pub fn check(&self, glyph: &GlyphDescriptor) -> Result<(), AtlasError> {
        if self.has_page(glyph.page) {
            Ok(())
        } else {
            Err(AtlasError::MissingPage {
                page: glyph.page,
                available: self.textures.len(),
            })
        }
    }

    /// Intensity of logical `page` at texel (`x`, `y`).
    ///
    /// Coordinates outside the texture, or a page without a texture, read as 0.
    pub fn sample(&self, page: u16, x: i32, y: i32) -> u8 {
        let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
            return 0;
        };
        if x >= usize::from(self.width) || y >= usize::from(self.height) {
            return 0;
        }
        let Some(texture) = self.textures.get(usize::from(page / 4)) else {
            return 0;
        };
        let index = 4 * (x + y * usize::from(self.width)) + CHANNEL_ORDER[usize::from(page % 4)];
        texture.get(index).copied().unwrap_or(0)
    }
}

/// Rejected atlas input.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum AtlasError {
    /// A texture's byte length does not match the face's texture geometry.
    PageSize {
        /// Index of the offending texture.
        index: usize,
        /// `width * height * 4`.
        expected: usize,
        /// The texture's byte length.
        actual: usize,
    },
    /// A glyph lives on a logical page whose texture was not supplied.
    MissingPage {
        /// The glyph's logical page.
        page: u16,
        /// Number of textures supplied.
        available: usize,
    },
}

impl fmt::Display for AtlasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PageSize {
                index,
                expected,
                actual,
            } => write!(
                f,
                "atlas texture {index} is {actual} bytes long, expected {expected}"
            ),
            Self::MissingPage { page, available } => write!(
                f,
                "glyph on page {page} needs atlas texture {}, but only {available} were supplied",
                page / 4
            ),
        }
    }
}

impl core::error::Error for AtlasError {}
