// Copyright 2026 the Fdt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! On-disk record layouts.
//!
//! Every record is `repr(C)` with fields ordered so that no implicit padding is
//! introduced; the sizes are asserted below. All multi-byte fields are stored
//! little-endian and converted by the decoder.

#![allow(
    unsafe_code,
    reason = "The `bytemuck` marker traits are `unsafe` and require `unsafe impl`."
)]

use bytemuck::{Pod, Zeroable};

pub(crate) const FILE_SIGNATURE: [u8; 4] = *b"fcsv";
pub(crate) const GLYPH_SIGNATURE: [u8; 4] = *b"fthd";
pub(crate) const KERNING_SIGNATURE: [u8; 4] = *b"knhd";

#[derive(Copy, Clone, Debug)]
#[repr(C)]
pub(crate) struct FileHeader {
    pub(crate) signature: [u8; 8],
    pub(crate) glyph_table_offset: u32,
    pub(crate) kerning_table_offset: u32,
    #[allow(dead_code, reason = "Reserved bytes only pad the record.")]
    pub(crate) reserved: [u8; 16],
}

#[derive(Copy, Clone, Debug)]
#[repr(C)]
pub(crate) struct GlyphTableHeader {
    pub(crate) signature: [u8; 4],
    pub(crate) glyph_count: u32,
    pub(crate) kerning_count: u32,
    #[allow(dead_code, reason = "Reserved bytes only pad the record.")]
    pub(crate) reserved: [u8; 4],
    pub(crate) texture_width: u16,
    pub(crate) texture_height: u16,
    pub(crate) points: u32,
    pub(crate) line_height: i32,
    pub(crate) ascent: i32,
}

#[derive(Copy, Clone, Debug)]
#[repr(C)]
pub(crate) struct GlyphEntry {
    pub(crate) key: u32,
    pub(crate) sjis: u16,
    pub(crate) texture_index: u16,
    pub(crate) texture_x: u16,
    pub(crate) texture_y: u16,
    pub(crate) width: u8,
    pub(crate) height: u8,
    pub(crate) advance_delta: i8,
    pub(crate) baseline_offset: i8,
}

#[derive(Copy, Clone, Debug)]
#[repr(C)]
pub(crate) struct KerningTableHeader {
    pub(crate) signature: [u8; 4],
    pub(crate) count: u32,
    #[allow(dead_code, reason = "Reserved bytes only pad the record.")]
    pub(crate) reserved: [u8; 8],
}

#[derive(Copy, Clone, Debug)]
#[repr(C)]
pub(crate) struct KerningEntry {
    pub(crate) left: u32,
    pub(crate) right: u32,
    pub(crate) left_sjis: u16,
    pub(crate) right_sjis: u16,
    pub(crate) offset: i32,
}

const _: () = {
    assert!(size_of::<FileHeader>() == 0x20);
    assert!(size_of::<GlyphTableHeader>() == 0x20);
    assert!(size_of::<GlyphEntry>() == 0x10);
    assert!(size_of::<KerningTableHeader>() == 0x10);
    assert!(size_of::<KerningEntry>() == 0x10);
};

// Safety: All of the records below are `repr(C)`, consist only of integer and
// integer array fields, and have no padding (checked by the size assertions
// above). Every bit pattern is therefore valid and zero is a valid value.
unsafe impl Zeroable for FileHeader {}
unsafe impl Pod for FileHeader {}
unsafe impl Zeroable for GlyphTableHeader {}
unsafe impl Pod for GlyphTableHeader {}
unsafe impl Zeroable for GlyphEntry {}
unsafe impl Pod for GlyphEntry {}
unsafe impl Zeroable for KerningTableHeader {}
unsafe impl Pod for KerningTableHeader {}
unsafe impl Zeroable for KerningEntry {}
unsafe impl Pod for KerningEntry {}
