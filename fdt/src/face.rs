// Copyright 2026 the Fdt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decoded font faces.

use alloc::vec::Vec;

use bytemuck::Pod;

use crate::error::{Error, Section};
use crate::key::PackedKey;
use crate::raw;

/// Placement of one glyph in the atlas plus its metrics.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GlyphDescriptor {
    /// Packed code point this glyph is stored under.
    pub key: PackedKey,
    /// Legacy Shift-JIS code of the glyph. Carried through, not used for lookup.
    pub sjis: u16,
    /// Logical atlas page. `page / 4` selects the texture, `page % 4` the channel.
    pub page: u16,
    /// Left edge of the glyph cell within its page, in pixels.
    pub texture_x: u16,
    /// Top edge of the glyph cell within its page, in pixels.
    pub texture_y: u16,
    /// Width of the glyph cell in pixels.
    pub width: u8,
    /// Height of the glyph cell in pixels.
    pub height: u8,
    /// Added to `width` to get the pen advance.
    pub advance_delta: i8,
    /// Vertical offset of the cell from the top of the line box.
    pub baseline_offset: i8,
}

impl GlyphDescriptor {
    /// Horizontal distance from this glyph's pen position to the next one,
    /// before kerning.
    pub fn advance(&self) -> i32 {
        i32::from(self.width) + i32::from(self.advance_delta)
    }
}

impl From<raw::GlyphEntry> for GlyphDescriptor {
    fn from(entry: raw::GlyphEntry) -> Self {
        Self {
            key: PackedKey::new(u32::from_le(entry.key)),
            sjis: u16::from_le(entry.sjis),
            page: u16::from_le(entry.texture_index),
            texture_x: u16::from_le(entry.texture_x),
            texture_y: u16::from_le(entry.texture_y),
            width: entry.width,
            height: entry.height,
            advance_delta: entry.advance_delta,
            baseline_offset: entry.baseline_offset,
        }
    }
}

/// Horizontal adjustment between two adjacent characters.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KerningPair {
    /// Packed key of the left character.
    pub left: PackedKey,
    /// Packed key of the right character.
    pub right: PackedKey,
    /// Legacy Shift-JIS code of the left character.
    pub left_sjis: u16,
    /// Legacy Shift-JIS code of the right character.
    pub right_sjis: u16,
    /// Pixels added to the pen position of the right character.
    pub offset: i32,
}

impl From<raw::KerningEntry> for KerningPair {
    fn from(entry: raw::KerningEntry) -> Self {
        Self {
            left: PackedKey::new(u32::from_le(entry.left)),
            right: PackedKey::new(u32::from_le(entry.right)),
            left_sjis: u16::from_le(entry.left_sjis),
            right_sjis: u16::from_le(entry.right_sjis),
            offset: i32::from_le(entry.offset),
        }
    }
}

/// A decoded font table.
///
/// Immutable once decoded; layout and rasterization only ever borrow it, so a
/// single face can be shared between any number of concurrent callers.
#[derive(Clone, Debug, PartialEq)]
pub struct FontFace {
    pub(crate) texture_width: u16,
    pub(crate) texture_height: u16,
    pub(crate) points: f32,
    pub(crate) line_height: i32,
    pub(crate) ascent: i32,
    pub(crate) glyphs: Vec<GlyphDescriptor>,
    pub(crate) kerning: Vec<KerningPair>,
}

impl FontFace {
    /// Decodes a complete font table.
    ///
    /// Fails if any header or entry array lies outside `data`, if a section
    /// signature is wrong, or if either table is not sorted by key.
    pub fn decode(data: &[u8]) -> Result<Self, Error> {
        let file: raw::FileHeader = read(data, 0, Section::FileHeader)?;
        check_signature(&file.signature[..4], &raw::FILE_SIGNATURE, Section::FileHeader, 0, data)?;

        let glyph_offset = u32::from_le(file.glyph_table_offset) as usize;
        let header: raw::GlyphTableHeader = read(data, glyph_offset, Section::GlyphHeader)?;
        check_signature(
            &header.signature,
            &raw::GLYPH_SIGNATURE,
            Section::GlyphHeader,
            glyph_offset,
            data,
        )?;
        let glyphs: Vec<GlyphDescriptor> = read_array::<raw::GlyphEntry>(
            data,
            glyph_offset + size_of::<raw::GlyphTableHeader>(),
            u32::from_le(header.glyph_count) as usize,
            Section::GlyphEntries,
        )?
        .map(GlyphDescriptor::from)
        .collect();
        if let Some(index) = first_unsorted(&glyphs, |g| g.key) {
            return Err(Error::unsorted(Section::GlyphEntries, index, data.len()));
        }

        let kerning_offset = u32::from_le(file.kerning_table_offset) as usize;
        let kerning_header: raw::KerningTableHeader =
            read(data, kerning_offset, Section::KerningHeader)?;
        check_signature(
            &kerning_header.signature,
            &raw::KERNING_SIGNATURE,
            Section::KerningHeader,
            kerning_offset,
            data,
        )?;
        let kerning: Vec<KerningPair> = read_array::<raw::KerningEntry>(
            data,
            kerning_offset + size_of::<raw::KerningTableHeader>(),
            u32::from_le(kerning_header.count) as usize,
            Section::KerningEntries,
        )?
        .map(KerningPair::from)
        .collect();
        if let Some(index) = first_unsorted(&kerning, |k| (k.left, k.right)) {
            return Err(Error::unsorted(Section::KerningEntries, index, data.len()));
        }

        if u32::from_le(header.kerning_count) as usize != kerning.len() {
            log::debug!(
                "glyph table header announces {} kerning pairs, kerning table holds {}",
                u32::from_le(header.kerning_count),
                kerning.len()
            );
        }

        let face = Self {
            texture_width: u16::from_le(header.texture_width),
            texture_height: u16::from_le(header.texture_height),
            points: f32::from_bits(u32::from_le(header.points)),
            line_height: i32::from_le(header.line_height),
            ascent: i32::from_le(header.ascent),
            glyphs,
            kerning,
        };
        log::debug!(
            "decoded {}pt face: {} glyphs, {} kerning pairs, line height {}, {}x{} atlas",
            face.points,
            face.glyphs.len(),
            face.kerning.len(),
            face.line_height,
            face.texture_width,
            face.texture_height
        );
        Ok(face)
    }

    /// Width of each atlas texture in pixels.
    pub fn texture_width(&self) -> u16 {
        self.texture_width
    }

    /// Height of each atlas texture in pixels.
    pub fn texture_height(&self) -> u16 {
        self.texture_height
    }

    /// Nominal point size.
    pub fn points(&self) -> f32 {
        self.points
    }

    /// Distance between consecutive baselines in pixels.
    pub fn line_height(&self) -> i32 {
        self.line_height
    }

    /// Distance from the top of the line box to the baseline in pixels.
    pub fn ascent(&self) -> i32 {
        self.ascent
    }

    /// All glyphs, sorted by packed key.
    pub fn glyphs(&self) -> &[GlyphDescriptor] {
        &self.glyphs
    }

    /// All kerning pairs, sorted by `(left, right)`.
    pub fn kerning_pairs(&self) -> &[KerningPair] {
        &self.kerning
    }

    /// Number of atlas textures the glyphs of this face reference.
    pub fn texture_count(&self) -> usize {
        self.glyphs
            .iter()
            .map(|g| usize::from(g.page) / 4 + 1)
            .max()
            .unwrap_or(0)
    }
}

fn read<T: Pod>(data: &[u8], offset: usize, section: Section) -> Result<T, Error> {
    let end = offset.saturating_add(size_of::<T>());
    data.get(offset..end)
        .map(bytemuck::pod_read_unaligned)
        .ok_or_else(|| Error::truncated(section, offset, end, data.len()))
}

fn read_array<T: Pod>(
    data: &[u8],
    offset: usize,
    count: usize,
    section: Section,
) -> Result<impl Iterator<Item = T> + '_, Error> {
    let end = count
        .checked_mul(size_of::<T>())
        .and_then(|size| offset.checked_add(size))
        .unwrap_or(usize::MAX);
    let bytes = data
        .get(offset..end)
        .ok_or_else(|| Error::truncated(section, offset, end, data.len()))?;
    Ok(bytes
        .chunks_exact(size_of::<T>())
        .map(bytemuck::pod_read_unaligned))
}

fn check_signature(
    found: &[u8],
    expected: &[u8; 4],
    section: Section,
    offset: usize,
    data: &[u8],
) -> Result<(), Error> {
    if found == expected {
        Ok(())
    } else {
        Err(Error::bad_signature(section, offset, data.len()))
    }
}

/// Index of the first entry whose key is smaller than its predecessor's.
fn first_unsorted<T, K: Ord>(entries: &[T], key: impl Fn(&T) -> K) -> Option<usize> {
    entries
        .windows(2)
        .position(|pair| key(&pair[0]) > key(&pair[1]))
        .map(|i| i + 1)
}
