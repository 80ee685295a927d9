// Copyright 2026 the Fdt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Character classification used by line breaking and painting.
//!
//! These are pure functions of the character so that layout elements stay
//! plain data.

use icu_properties::CodePointMapData;
use icu_properties::props::GeneralCategory;

/// Whether `c` is a control character. Control characters take part in layout
/// but are never painted.
pub fn is_control(c: char) -> bool {
    c.is_control()
}

/// Whether `c` is whitespace. Whitespace never triggers a wrap and is trimmed
/// from the measured extent of a line.
pub fn is_space(c: char) -> bool {
    c.is_whitespace()
}

/// Whether `c` ends the current line unconditionally.
pub fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r')
}

/// Whether `c` is a CJK ideograph, including the ideographic number zero.
pub fn is_cjk_ideograph(c: char) -> bool {
    matches!(
        c as u32,
        // CJK Symbols and Punctuation (〇)
        0x3007
        // CJK Unified Ideographs Extension A
        | 0x3400..=0x4DBF
        // CJK Unified Ideographs
        | 0x4E00..=0x9FFF
        // CJK Unified Ideographs Extension B
        | 0x2_0000..=0x2_A6DF
        // CJK Unified Ideographs Extension C
        | 0x2_A700..=0x2_B73F
        // CJK Unified Ideographs Extension D
        | 0x2_B740..=0x2_B81F
        // CJK Unified Ideographs Extension E
        | 0x2_B820..=0x2_CEAF
        // CJK Unified Ideographs Extension F
        | 0x2_CEB0..=0x2_EBEF
    )
}

/// Whether a line may be wrapped right after `c`.
///
/// Ideographs always allow a break. Other characters in the Basic
/// Multilingual Plane allow one unless they are letters, marks or numbers.
/// Characters outside the BMP that are not ideographs never do.
pub fn is_word_break_point(c: char) -> bool {
    if is_cjk_ideograph(c) {
        return true;
    }
    if c as u32 >= 0x1_0000 {
        return false;
    }
    !matches!(
        CodePointMapData::<GeneralCategory>::new().get(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::NonspacingMark
            | GeneralCategory::SpacingMark
            | GeneralCategory::EnclosingMark
            | GeneralCategory::DecimalNumber
            | GeneralCategory::LetterNumber
            | GeneralCategory::OtherNumber
    )
}
