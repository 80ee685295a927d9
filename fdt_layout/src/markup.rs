// Copyright 2026 the Fdt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inline style markers.
//!
//! Text may contain [`ITALIC_MARKER`] and [`BOLD_MARKER`] characters. Each
//! occurrence flips the respective style for everything that follows; the
//! markers themselves are never rendered.

/// Toggles the simulated italic slant.
pub const ITALIC_MARKER: char = '*';

/// Toggles the simulated bold smear.
pub const BOLD_MARKER: char = '_';

/// One unit of marked-up text.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// A character to lay out.
    Char(char),
    /// Flip italic on or off.
    ToggleItalic,
    /// Flip bold on or off.
    ToggleBold,
}

/// Splits `text` into characters and style toggles.
pub fn tokenize(text: &str) -> impl Iterator<Item = Token> + '_ {
    text.chars().map(|c| match c {
        ITALIC_MARKER => Token::ToggleItalic,
        BOLD_MARKER => Token::ToggleBold,
        c => Token::Char(c),
    })
}

/// A character together with the style magnitudes active where it occurs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StyledChar {
    /// The character.
    pub ch: char,
    /// Italic shear in pixels, or zero.
    pub italic: f32,
    /// Bold smear in pixels, or zero.
    pub bold: f32,
}

/// Resolves toggles into per-character style magnitudes.
///
/// `italicness` and `boldness` are the magnitudes used while the respective
/// style is on.
pub fn apply_styles(
    tokens: impl IntoIterator<Item = Token>,
    italicness: f32,
    boldness: f32,
) -> impl Iterator<Item = StyledChar> {
    let mut italic = false;
    let mut bold = false;
    tokens.into_iter().filter_map(move |token| match token {
        Token::ToggleItalic => {
            italic = !italic;
            None
        }
        Token::ToggleBold => {
            bold = !bold;
            None
        }
        Token::Char(ch) => Some(StyledChar {
            ch,
            italic: if italic { italicness } else { 0.0 },
            bold: if bold { boldness } else { 0.0 },
        }),
    })
}
