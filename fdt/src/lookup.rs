// Copyright 2026 the Fdt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolving characters to glyphs and character pairs to kerning offsets.

use crate::error::Error;
use crate::face::{FontFace, GlyphDescriptor};
use crate::key::PackedKey;

/// Characters tried, in order, when a face has no glyph for a character.
pub const FALLBACK_CHARS: [char; 3] = ['\u{FF1D}', '=', '!'];

impl FontFace {
    /// Returns the glyph stored under exactly the packed key of `c`.
    pub fn find_glyph(&self, c: char) -> Option<&GlyphDescriptor> {
        self.find_glyph_by_key(PackedKey::from_char(c))
    }

    /// Returns the glyph stored under `key`.
    pub fn find_glyph_by_key(&self, key: PackedKey) -> Option<&GlyphDescriptor> {
        let index = self.glyphs.binary_search_by_key(&key, |g| g.key).ok()?;
        self.glyphs.get(index)
    }

    /// Returns the glyph for `c`, or the first fallback glyph the face has.
    ///
    /// A face without any of the [`FALLBACK_CHARS`] cannot render arbitrary
    /// text, so a miss on all of them is an [`ErrorKind::MissingFallback`]
    /// error rather than something callers should paper over.
    ///
    /// [`ErrorKind::MissingFallback`]: crate::ErrorKind::MissingFallback
    pub fn glyph(&self, c: char) -> Result<&GlyphDescriptor, Error> {
        if let Some(glyph) = self.find_glyph(c) {
            return Ok(glyph);
        }
        let glyph = FALLBACK_CHARS
            .iter()
            .find_map(|&fallback| self.find_glyph(fallback))
            .ok_or_else(|| Error::missing_fallback(c))?;
        // Line breaks and tabs are never drawn.
        if c.is_control() {
            log::trace!("no glyph for control {c:?}, using {:?}", glyph.key);
        } else {
            log::warn!(
                "no glyph for {c:?} (U+{:04X}), using {:?}",
                c as u32,
                glyph.key
            );
        }
        Ok(glyph)
    }

    /// Horizontal adjustment between `left` and `right` when they are adjacent.
    ///
    /// Pairs not present in the kerning table have no adjustment.
    pub fn kerning(&self, left: char, right: char) -> i32 {
        let key = (PackedKey::from_char(left), PackedKey::from_char(right));
        self.kerning
            .binary_search_by_key(&key, |pair| (pair.left, pair.right))
            .map_or(0, |index| self.kerning[index].offset)
    }
}
