// Copyright 2026 the Fdt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Fdt Dev
//!
//! This crate writes synthetic font tables and atlas textures for tests.
//!
//! It deliberately does not depend on the decoder: the bytes it produces are
//! assembled field by field, so a decoder bug cannot hide behind a matching
//! encoder bug.

/// Physical RGBA channel holding logical page `page % 4`.
pub const CHANNEL_ORDER: [usize; 4] = [2, 1, 0, 3];

/// Packs a character the way font tables key their entries.
pub fn pack(c: char) -> u32 {
    let mut buf = [0_u8; 4];
    c.encode_utf8(&mut buf)
        .bytes()
        .fold(0, |packed, byte| (packed << 8) | u32::from(byte))
}

/// Description of one glyph entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GlyphSpec {
    /// The character the entry is keyed by.
    pub ch: char,
    /// Legacy Shift-JIS code.
    pub sjis: u16,
    /// Logical atlas page.
    pub page: u16,
    /// Cell left edge within the page.
    pub x: u16,
    /// Cell top edge within the page.
    pub y: u16,
    /// Cell width.
    pub width: u8,
    /// Cell height.
    pub height: u8,
    /// Pen advance delta.
    pub advance_delta: i8,
    /// Baseline offset.
    pub baseline_offset: i8,
}

impl GlyphSpec {
    /// A `width` x `height` glyph at the origin of page 0.
    pub const fn new(ch: char, width: u8, height: u8) -> Self {
        Self {
            ch,
            sjis: 0,
            page: 0,
            x: 0,
            y: 0,
            width,
            height,
            advance_delta: 0,
            baseline_offset: 0,
        }
    }

    /// Places the cell on `page` at (`x`, `y`).
    pub const fn at(mut self, page: u16, x: u16, y: u16) -> Self {
        self.page = page;
        self.x = x;
        self.y = y;
        self
    }

    /// Sets the pen advance delta.
    pub const fn advance(mut self, delta: i8) -> Self {
        self.advance_delta = delta;
        self
    }

    /// Sets the baseline offset.
    pub const fn baseline(mut self, offset: i8) -> Self {
        self.baseline_offset = offset;
        self
    }

    /// Sets the Shift-JIS code.
    pub const fn sjis(mut self, sjis: u16) -> Self {
        self.sjis = sjis;
        self
    }
}

/// Assembles a font table byte buffer.
#[derive(Clone, Debug)]
pub struct FontTableWriter {
    texture_width: u16,
    texture_height: u16,
    points: f32,
    line_height: i32,
    ascent: i32,
    glyphs: Vec<GlyphSpec>,
    kerning: Vec<(char, char, i32)>,
    keep_order: bool,
}

impl Default for FontTableWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl FontTableWriter {
    /// Size of the file header and of the glyph table header.
    pub const HEADER_SIZE: usize = 0x20;
    /// Size of the kerning table header.
    pub const KERNING_HEADER_SIZE: usize = 0x10;
    /// Size of one glyph or kerning entry.
    pub const ENTRY_SIZE: usize = 0x10;

    /// An empty 12pt table with a 256x256 atlas and 16 pixel lines.
    pub fn new() -> Self {
        Self {
            texture_width: 256,
            texture_height: 256,
            points: 12.0,
            line_height: 16,
            ascent: 12,
            glyphs: Vec::new(),
            kerning: Vec::new(),
            keep_order: false,
        }
    }

    /// Sets the atlas texture size.
    pub fn texture_size(mut self, width: u16, height: u16) -> Self {
        self.texture_width = width;
        self.texture_height = height;
        self
    }

    /// Sets the point size.
    pub fn points(mut self, points: f32) -> Self {
        self.points = points;
        self
    }

    /// Sets the line height.
    pub fn line_height(mut self, line_height: i32) -> Self {
        self.line_height = line_height;
        self
    }

    /// Sets the ascent.
    pub fn ascent(mut self, ascent: i32) -> Self {
        self.ascent = ascent;
        self
    }

    /// Adds a glyph entry.
    pub fn glyph(mut self, glyph: GlyphSpec) -> Self {
        self.glyphs.push(glyph);
        self
    }

    /// Adds a kerning entry.
    pub fn kern(mut self, left: char, right: char, offset: i32) -> Self {
        self.kerning.push((left, right, offset));
        self
    }

    /// Writes entries in insertion order instead of sorting them by key.
    pub fn keep_order(mut self) -> Self {
        self.keep_order = true;
        self
    }

    /// The glyphs added so far.
    pub fn glyphs(&self) -> &[GlyphSpec] {
        &self.glyphs
    }

    /// Byte offset of the kerning table header in the output of [`Self::to_bytes`].
    pub fn kerning_table_offset(&self) -> usize {
        2 * Self::HEADER_SIZE + self.glyphs.len() * Self::ENTRY_SIZE
    }

    /// Serializes the table.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut glyphs = self.glyphs.clone();
        let mut kerning = self.kerning.clone();
        if !self.keep_order {
            glyphs.sort_by_key(|g| pack(g.ch));
            kerning.sort_by_key(|&(l, r, _)| (pack(l), pack(r)));
        }

        let glyph_table_offset = Self::HEADER_SIZE;
        let kerning_table_offset = self.kerning_table_offset();

        let mut out = Vec::with_capacity(
            kerning_table_offset + Self::KERNING_HEADER_SIZE + kerning.len() * Self::ENTRY_SIZE,
        );

        out.extend_from_slice(b"fcsv0100");
        out.extend_from_slice(&(glyph_table_offset as u32).to_le_bytes());
        out.extend_from_slice(&(kerning_table_offset as u32).to_le_bytes());
        out.extend_from_slice(&[0; 16]);

        out.extend_from_slice(b"fthd");
        out.extend_from_slice(&(glyphs.len() as u32).to_le_bytes());
        out.extend_from_slice(&(kerning.len() as u32).to_le_bytes());
        out.extend_from_slice(&[0; 4]);
        out.extend_from_slice(&self.texture_width.to_le_bytes());
        out.extend_from_slice(&self.texture_height.to_le_bytes());
        out.extend_from_slice(&self.points.to_le_bytes());
        out.extend_from_slice(&self.line_height.to_le_bytes());
        out.extend_from_slice(&self.ascent.to_le_bytes());

        for g in &glyphs {
            out.extend_from_slice(&pack(g.ch).to_le_bytes());
            out.extend_from_slice(&g.sjis.to_le_bytes());
            out.extend_from_slice(&g.page.to_le_bytes());
            out.extend_from_slice(&g.x.to_le_bytes());
            out.extend_from_slice(&g.y.to_le_bytes());
            out.push(g.width);
            out.push(g.height);
            out.extend_from_slice(&g.advance_delta.to_le_bytes());
            out.extend_from_slice(&g.baseline_offset.to_le_bytes());
        }

        out.extend_from_slice(b"knhd");
        out.extend_from_slice(&(kerning.len() as u32).to_le_bytes());
        out.extend_from_slice(&[0; 8]);

        for &(left, right, offset) in &kerning {
            out.extend_from_slice(&pack(left).to_le_bytes());
            out.extend_from_slice(&pack(right).to_le_bytes());
            out.extend_from_slice(&[0; 4]);
            out.extend_from_slice(&offset.to_le_bytes());
        }

        out
    }
}

/// Paints glyph cells into RGBA atlas textures.
#[derive(Clone, Debug)]
pub struct AtlasWriter {
    width: u16,
    height: u16,
    textures: Vec<Vec<u8>>,
}

impl AtlasWriter {
    /// An atlas of `width` x `height` textures, initially with none allocated.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            textures: Vec::new(),
        }
    }

    /// Fills the cell of `glyph` with `intensity(column, row)`.
    pub fn paint(&mut self, glyph: &GlyphSpec, intensity: impl Fn(u32, u32) -> u8) {
        let texture = usize::from(glyph.page / 4);
        let channel = CHANNEL_ORDER[usize::from(glyph.page % 4)];
        let size = 4 * usize::from(self.width) * usize::from(self.height);
        if self.textures.len() <= texture {
            self.textures.resize_with(texture + 1, || vec![0; size]);
        }
        let pixels = &mut self.textures[texture];
        for row in 0..u32::from(glyph.height) {
            for column in 0..u32::from(glyph.width) {
                let x = usize::from(glyph.x) + column as usize;
                let y = usize::from(glyph.y) + row as usize;
                pixels[4 * (x + y * usize::from(self.width)) + channel] = intensity(column, row);
            }
        }
    }

    /// Fills the cell of `glyph` with a constant intensity.
    pub fn fill(&mut self, glyph: &GlyphSpec, intensity: u8) {
        self.paint(glyph, |_, _| intensity);
    }

    /// Ensures at least `count` textures exist.
    pub fn reserve_textures(&mut self, count: usize) {
        let size = 4 * usize::from(self.width) * usize::from(self.height);
        if self.textures.len() < count {
            self.textures.resize_with(count, || vec![0; size]);
        }
    }

    /// The finished textures.
    pub fn into_textures(self) -> Vec<Vec<u8>> {
        self.textures
    }
}

/// A face in which every printable ASCII character is a solid
/// `width` x `height` block laid out in a grid on consecutive logical pages,
/// plus `'＝'` and a few CJK ideographs.
///
/// Returns the table writer and the painted atlas.
pub fn block_face(width: u8, height: u8) -> (FontTableWriter, AtlasWriter) {
    const TEXTURE: u16 = 256;
    let mut table = FontTableWriter::new().texture_size(TEXTURE, TEXTURE);
    let mut atlas = AtlasWriter::new(TEXTURE, TEXTURE);
    let per_row = TEXTURE / u16::from(width);
    let per_page = per_row * (TEXTURE / u16::from(height));
    let chars = (' '..='~').chain(['\u{FF1D}', '\u{4E00}', '\u{4E8C}', '\u{4E09}', '\u{3007}']);
    for (i, ch) in chars.enumerate() {
        let i = i as u16;
        let page = i / per_page;
        let slot = i % per_page;
        let glyph = GlyphSpec::new(ch, width, height).at(
            page,
            (slot % per_row) * u16::from(width),
            (slot / per_row) * u16::from(height),
        );
        if ch != ' ' {
            atlas.fill(&glyph, 255);
        }
        table = table.glyph(glyph);
    }
    atlas.reserve_textures(1);
    (table, atlas)
}

/// Text samples used across tests.
pub mod samples {
    /// Latin sentence with punctuation.
    pub const LATIN: &str = "Most words are short. But Antidisestablishmentarianism is long.";
    /// Mixed CJK and Latin text.
    pub const MIXED: &str = "\u{4E00}\u{4E8C}Hello";
    /// Text using both style markers.
    pub const STYLED: &str = "plain *slanted* _heavy_ *_both_*";
}
