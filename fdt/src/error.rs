// Copyright 2026 the Fdt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// Error type for font table decoding and glyph resolution.
///
/// Carries a non-exhaustive [`ErrorKind`] plus whatever context was available
/// at the point of failure: the byte range that was being read, the length of
/// the buffer, the index of an offending entry or the code point being
/// resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    offset: usize,
    end: usize,
    len: usize,
    index: Option<usize>,
    code_point: Option<char>,
    name: Option<String>,
}

#[expect(
    clippy::len_without_is_empty,
    reason = "`Error::len` reports the length of the decoded buffer; an `is_empty` method would be meaningless."
)]
impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The start byte offset of the region being read when the error occurred.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The end byte offset (exclusive) of the region being read.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The length in bytes of the buffer being decoded.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Index of the first out-of-order table entry, for the `Unsorted*` kinds.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// The code point being resolved, for [`ErrorKind::MissingFallback`].
    pub fn code_point(&self) -> Option<char> {
        self.code_point
    }

    /// The face name involved, for [`ErrorKind::DuplicateFace`].
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            offset: 0,
            end: 0,
            len: 0,
            index: None,
            code_point: None,
            name: None,
        }
    }

    pub(crate) fn truncated(section: Section, offset: usize, end: usize, len: usize) -> Self {
        Self {
            offset,
            end,
            len,
            ..Self::new(ErrorKind::Truncated(section))
        }
    }

    pub(crate) fn bad_signature(section: Section, offset: usize, len: usize) -> Self {
        Self {
            offset,
            end: offset + 4,
            len,
            ..Self::new(ErrorKind::BadSignature(section))
        }
    }

    pub(crate) fn unsorted(section: Section, index: usize, len: usize) -> Self {
        let kind = match section {
            Section::KerningEntries | Section::KerningHeader => ErrorKind::UnsortedKerning,
            _ => ErrorKind::UnsortedGlyphs,
        };
        Self {
            len,
            index: Some(index),
            ..Self::new(kind)
        }
    }

    pub(crate) fn missing_fallback(code_point: char) -> Self {
        Self {
            code_point: Some(code_point),
            ..Self::new(ErrorKind::MissingFallback)
        }
    }

    pub(crate) fn duplicate_face(name: &str) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new(ErrorKind::DuplicateFace)
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::Truncated(section) => write!(
                f,
                "{} at {}..{} exceeds buffer of len {}",
                section.name(),
                self.offset,
                self.end,
                self.len
            ),
            ErrorKind::BadSignature(section) => write!(
                f,
                "{} at {} does not start with the expected signature",
                section.name(),
                self.offset
            ),
            ErrorKind::UnsortedGlyphs | ErrorKind::UnsortedKerning => {
                let table = if self.kind == ErrorKind::UnsortedGlyphs {
                    "glyph"
                } else {
                    "kerning"
                };
                match self.index {
                    Some(index) => write!(
                        f,
                        "{table} table is not sorted by key (entry {index} of {})",
                        self.len
                    ),
                    None => write!(f, "{table} table is not sorted by key"),
                }
            }
            ErrorKind::MissingFallback => match self.code_point {
                Some(c) => write!(
                    f,
                    "no glyph for U+{:04X} and the face has none of the fallback glyphs",
                    c as u32
                ),
                None => write!(f, "the face has none of the fallback glyphs"),
            },
            ErrorKind::DuplicateFace => write!(
                f,
                "a face named {:?} is already in the collection",
                self.name.as_deref().unwrap_or_default()
            ),
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A header, sub-table header or entry array extends past the end of the buffer.
    Truncated(Section),

    /// A header does not carry the signature of the section it should begin.
    BadSignature(Section),

    /// Glyph entries are not in ascending packed key order.
    UnsortedGlyphs,

    /// Kerning entries are not in ascending `(left, right)` order.
    UnsortedKerning,

    /// Neither the requested glyph nor any of the fallback glyphs exist.
    ///
    /// This means the face itself is unusable for text rendering.
    MissingFallback,

    /// A face with the same name was already added to a [`FaceCollection`].
    ///
    /// [`FaceCollection`]: crate::FaceCollection
    DuplicateFace,
}

/// Identifies a region of the font table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Section {
    /// The file header at offset zero.
    FileHeader,
    /// The header of the glyph sub-table.
    GlyphHeader,
    /// The glyph entry array.
    GlyphEntries,
    /// The header of the kerning sub-table.
    KerningHeader,
    /// The kerning entry array.
    KerningEntries,
}

impl Section {
    fn name(self) -> &'static str {
        match self {
            Self::FileHeader => "file header",
            Self::GlyphHeader => "glyph table header",
            Self::GlyphEntries => "glyph entries",
            Self::KerningHeader => "kerning table header",
            Self::KerningEntries => "kerning entries",
        }
    }
}
