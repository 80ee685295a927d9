// Copyright 2026 the Fdt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use fdt_dev::{FontTableWriter, GlyphSpec, pack};

use crate::{ErrorKind, FaceCollection, FontFace, PackedKey, Section};

fn latin_table() -> FontTableWriter {
    FontTableWriter::new()
        .texture_size(512, 1024)
        .points(14.0)
        .line_height(20)
        .ascent(15)
        .glyph(GlyphSpec::new('A', 8, 10).at(0, 2, 3).advance(1).baseline(2).sjis(0x8260))
        .glyph(GlyphSpec::new('V', 9, 10).at(1, 20, 3).advance(-1))
        .glyph(GlyphSpec::new('é', 7, 12).at(6, 40, 50).baseline(-1))
        .glyph(GlyphSpec::new('あ', 14, 14).at(9, 100, 200))
        .glyph(GlyphSpec::new('\u{20000}', 15, 15).at(12, 0, 0))
        .kern('A', 'V', -2)
        .kern('V', 'A', -3)
        .kern('A', 'é', 1)
}

#[test]
fn decode_round_trip() {
    let table = latin_table();
    let face = FontFace::decode(&table.to_bytes()).unwrap();

    assert_eq!(face.texture_width(), 512);
    assert_eq!(face.texture_height(), 1024);
    assert_eq!(face.points(), 14.0);
    assert_eq!(face.line_height(), 20);
    assert_eq!(face.ascent(), 15);
    assert_eq!(face.glyphs().len(), 5);
    assert_eq!(face.kerning_pairs().len(), 3);

    for spec in table.glyphs() {
        let glyph = face.find_glyph(spec.ch).unwrap();
        assert_eq!(glyph.key.get(), pack(spec.ch));
        assert_eq!(glyph.sjis, spec.sjis);
        assert_eq!(glyph.page, spec.page);
        assert_eq!((glyph.texture_x, glyph.texture_y), (spec.x, spec.y));
        assert_eq!((glyph.width, glyph.height), (spec.width, spec.height));
        assert_eq!(glyph.advance_delta, spec.advance_delta);
        assert_eq!(glyph.baseline_offset, spec.baseline_offset);
    }

    let pair = face.kerning_pairs()[0];
    assert_eq!(pair.left, PackedKey::from_char('A'));
    assert_eq!(pair.right, PackedKey::from_char('V'));
    assert_eq!(pair.offset, -2);
    assert_eq!(face.texture_count(), 4, "logical page 12 lives in the fourth texture");
}

#[test]
fn decoded_tables_are_sorted() {
    let face = FontFace::decode(&latin_table().to_bytes()).unwrap();
    assert!(face.glyphs().windows(2).all(|w| w[0].key < w[1].key));
    assert!(
        face.kerning_pairs()
            .windows(2)
            .all(|w| (w[0].left, w[0].right) < (w[1].left, w[1].right))
    );
}

#[test]
fn empty_tables() {
    let face = FontFace::decode(&FontTableWriter::new().to_bytes()).unwrap();
    assert!(face.glyphs().is_empty());
    assert!(face.kerning_pairs().is_empty());
    assert_eq!(face.find_glyph('A'), None);
    assert_eq!(face.kerning('A', 'V'), 0);
    assert_eq!(face.texture_count(), 0);
}

#[test]
fn exact_lookup_only_matches_exact_keys() {
    // Keys spaced two apart so every odd key falls between two entries.
    let mut table = FontTableWriter::new();
    for c in (b'0'..=b'z').step_by(2) {
        table = table.glyph(GlyphSpec::new(char::from(c), 4, 4));
    }
    let face = FontFace::decode(&table.to_bytes()).unwrap();

    for c in b'0'..=b'z' {
        let found = face.find_glyph(char::from(c));
        if (c - b'0') % 2 == 0 {
            assert_eq!(found.map(|g| g.key.get()), Some(u32::from(c)));
        } else {
            assert_eq!(found, None, "{:?} must not resolve", char::from(c));
        }
    }
    // Below the first and above the last entry.
    assert_eq!(face.find_glyph(' '), None);
    assert_eq!(face.find_glyph('~'), None);
    assert_eq!(face.find_glyph('\u{10FFFF}'), None);
}

#[test]
fn fallback_chain() {
    let only_bang = FontTableWriter::new().glyph(GlyphSpec::new('!', 2, 10));
    let face = FontFace::decode(&only_bang.to_bytes()).unwrap();
    assert_eq!(face.glyph('B').unwrap().key, PackedKey::from_char('!'));

    let with_equals = only_bang.clone().glyph(GlyphSpec::new('=', 5, 10));
    let face = FontFace::decode(&with_equals.to_bytes()).unwrap();
    assert_eq!(face.glyph('B').unwrap().key, PackedKey::from_char('='));

    let with_wide_equals = with_equals.glyph(GlyphSpec::new('\u{FF1D}', 12, 12));
    let face = FontFace::decode(&with_wide_equals.to_bytes()).unwrap();
    assert_eq!(face.glyph('B').unwrap().key, PackedKey::from_char('\u{FF1D}'));
    assert_eq!(face.glyph('!').unwrap().key, PackedKey::from_char('!'));
}

#[test]
fn exhausted_fallback_is_an_error() {
    let table = FontTableWriter::new().glyph(GlyphSpec::new('A', 8, 10));
    let face = FontFace::decode(&table.to_bytes()).unwrap();
    assert!(face.glyph('A').is_ok());
    let err = face.glyph('B').unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingFallback);
    assert_eq!(err.code_point(), Some('B'));
}

#[test]
fn kerning_lookup() {
    let face = FontFace::decode(&latin_table().to_bytes()).unwrap();
    assert_eq!(face.kerning('A', 'V'), -2);
    assert_eq!(face.kerning('V', 'A'), -3);
    assert_eq!(face.kerning('A', 'é'), 1);
    // Absent pairs, including reversed and unmapped ones, adjust nothing.
    assert_eq!(face.kerning('é', 'A'), 0);
    assert_eq!(face.kerning('V', 'V'), 0);
    assert_eq!(face.kerning('x', 'y'), 0);
}

#[test]
fn truncated_buffers_are_rejected() {
    let bytes = latin_table().to_bytes();

    let err = FontFace::decode(&bytes[..0x10]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Truncated(Section::FileHeader));

    let err = FontFace::decode(&bytes[..0x30]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Truncated(Section::GlyphHeader));

    let err = FontFace::decode(&bytes[..0x50]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Truncated(Section::GlyphEntries));
    assert_eq!(err.offset(), 0x40);
    assert_eq!(err.end(), 0x40 + 5 * 0x10);
    assert_eq!(err.len(), 0x50);

    let err = FontFace::decode(&bytes[..bytes.len() - 1]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Truncated(Section::KerningEntries));
}

#[test]
fn out_of_range_offsets_and_counts_are_rejected() {
    let mut bytes = latin_table().to_bytes();
    bytes[0x0C..0x10].copy_from_slice(&u32::MAX.to_le_bytes());
    let err = FontFace::decode(&bytes).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Truncated(Section::KerningHeader));

    let mut bytes = latin_table().to_bytes();
    bytes[0x24..0x28].copy_from_slice(&u32::MAX.to_le_bytes());
    let err = FontFace::decode(&bytes).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Truncated(Section::GlyphEntries));
}

#[test]
fn bad_signatures_are_rejected() {
    let mut bytes = latin_table().to_bytes();
    bytes[0x20..0x24].copy_from_slice(b"xxxx");
    let err = FontFace::decode(&bytes).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BadSignature(Section::GlyphHeader));
    assert_eq!(err.offset(), 0x20);

    let mut bytes = latin_table().to_bytes();
    bytes[0] = b'F';
    let err = FontFace::decode(&bytes).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BadSignature(Section::FileHeader));
}

#[test]
fn unsorted_tables_are_rejected() {
    let glyphs = FontTableWriter::new()
        .glyph(GlyphSpec::new('B', 1, 1))
        .glyph(GlyphSpec::new('A', 1, 1))
        .keep_order();
    let err = FontFace::decode(&glyphs.to_bytes()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsortedGlyphs);
    assert_eq!(err.index(), Some(1));

    let kerning = FontTableWriter::new()
        .kern('A', 'V', 1)
        .kern('A', 'T', 1)
        .keep_order();
    let err = FontFace::decode(&kerning.to_bytes()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsortedKerning);
}

#[test]
fn collection() {
    let bytes = latin_table().to_bytes();
    let mut faces = FaceCollection::new();
    assert!(faces.is_empty());
    faces.insert("AXIS_12", &bytes).unwrap();
    faces.insert("AXIS_14", &bytes).unwrap();
    assert_eq!(faces.len(), 2);
    assert_eq!(faces.get("AXIS_12").unwrap().line_height(), 20);
    assert!(faces.get("AXIS_18").is_none());

    let err = faces.insert("AXIS_12", &bytes).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DuplicateFace);
    assert_eq!(err.name(), Some("AXIS_12"));

    let err = faces.insert("broken", &bytes[..8]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Truncated(Section::FileHeader));
    assert_eq!(faces.len(), 2, "failed decodes are not stored");

    let mut names: Vec<_> = faces.iter().map(|(name, _)| name).collect();
    names.sort_unstable();
    assert_eq!(names, ["AXIS_12", "AXIS_14"]);
}
