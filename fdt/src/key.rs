// Copyright 2026 the Fdt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Packed code point keys.

use core::fmt;

/// Sort and lookup key of a glyph or kerning entry.
///
/// The key is *not* the Unicode scalar value. It is the UTF-8 encoding of the
/// code point read as one big-endian integer, so ASCII maps to itself while
/// `'あ'` (UTF-8 `E3 81 82`) maps to `0x00E3_8182`.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackedKey(u32);

impl PackedKey {
    /// Key produced for values that are not Unicode scalars.
    pub const INVALID: Self = Self(0xFFFE);

    /// Wraps a raw key as stored in the font table.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Packs a character.
    pub fn from_char(c: char) -> Self {
        let mut buf = [0_u8; 4];
        let bytes = c.encode_utf8(&mut buf).as_bytes();
        Self(
            bytes
                .iter()
                .fold(0_u32, |packed, &byte| (packed << 8) | u32::from(byte)),
        )
    }

    /// Packs a raw code point, mapping anything that is not a Unicode scalar
    /// value to [`PackedKey::INVALID`].
    pub fn from_code_point(code_point: u32) -> Self {
        char::from_u32(code_point).map_or(Self::INVALID, Self::from_char)
    }

    /// The raw key.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Unpacks the key back into a character, if its bytes form exactly one
    /// UTF-8 encoded scalar.
    pub fn to_char(self) -> Option<char> {
        let bytes = self.0.to_be_bytes();
        let start = bytes.iter().position(|&b| b != 0).unwrap_or(3);
        let s = core::str::from_utf8(&bytes[start..]).ok()?;
        let mut chars = s.chars();
        let c = chars.next()?;
        chars.next().is_none().then_some(c)
    }
}

impl From<char> for PackedKey {
    fn from(c: char) -> Self {
        Self::from_char(c)
    }
}

impl fmt::Debug for PackedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_char() {
            Some(c) => write!(f, "PackedKey({:#X} {c:?})", self.0),
            None => write!(f, "PackedKey({:#X})", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PackedKey;

    #[test]
    fn ascii_packs_to_itself() {
        for c in ['\0', 'A', '!', '=', '~'] {
            assert_eq!(PackedKey::from_char(c).get(), c as u32);
        }
    }

    #[test]
    fn multi_byte_sequences_pack_in_encoding_order() {
        // U+00E9: C3 A9
        assert_eq!(PackedKey::from_char('é').get(), 0xC3A9);
        // U+3042: E3 81 82
        assert_eq!(PackedKey::from_char('あ').get(), 0xE3_8182);
        // U+FF1D: EF BC 9D
        assert_eq!(PackedKey::from_char('＝').get(), 0xEF_BC9D);
        // U+20000: F0 A0 80 80
        assert_eq!(PackedKey::from_char('\u{20000}').get(), 0xF0A0_8080);
    }

    #[test]
    fn invalid_code_points() {
        assert_eq!(PackedKey::from_code_point(0xD800), PackedKey::INVALID);
        assert_eq!(PackedKey::from_code_point(0x11_0000), PackedKey::INVALID);
        assert_eq!(PackedKey::from_code_point(0x41).get(), 0x41);
    }

    #[test]
    fn unpacks() {
        for c in ['A', 'é', 'あ', '＝', '\u{2A6D6}'] {
            assert_eq!(PackedKey::from_char(c).to_char(), Some(c));
        }
        assert_eq!(PackedKey::new(0xFFFF_FFFF).to_char(), None);
        // Two ASCII bytes are two scalars, not one.
        assert_eq!(PackedKey::new(0x4142).to_char(), None);
    }

    #[test]
    fn ordering_follows_unsigned_key() {
        assert!(PackedKey::from_char('z') < PackedKey::from_char('é'));
        assert!(PackedKey::from_char('あ') < PackedKey::from_char('\u{20000}'));
    }
}
