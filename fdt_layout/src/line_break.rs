// Copyright 2026 the Fdt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pen placement and greedy word wrapping.

use fdt::FontFace;
use smallvec::{SmallVec, smallvec};

use crate::classify::{is_line_break, is_space, is_word_break_point};
use crate::plan::PositionedElement;

/// Positions `elements` left to right, wrapping lines at `max_width`.
///
/// Returns the index of the first element of every line. Wrapping prefers the
/// most recent word break point on the current line; when there is none, the
/// overflowing element itself starts the next line.
pub(crate) fn break_lines(
    elements: &mut [PositionedElement],
    face: &FontFace,
    max_width: i32,
) -> SmallVec<[usize; 8]> {
    let line_height = face.line_height();
    let mut line_starts: SmallVec<[usize; 8]> = smallvec![0];
    let mut last_break = 0;
    let mut i = 1;

    while i < elements.len() {
        let prev = elements[i - 1];
        let curr = &mut elements[i];

        if is_line_break(prev.ch) {
            curr.x = 0;
            curr.y = prev.y + line_height;
            line_starts.push(i);
        } else {
            curr.x = prev.x + prev.glyph.advance() + face.kerning(prev.ch, curr.ch);
            curr.y = prev.y;
        }
        let curr = *curr;

        if is_word_break_point(prev.ch) {
            last_break = i;
        }

        if is_space(curr.ch) || curr.x + i32::from(curr.glyph.width) < max_width {
            i += 1;
            continue;
        }

        // The break point is on the current line: `last_break` is reset to
        // the start of every new line.
        let mut above = prev;
        if !is_space(prev.ch) && elements[last_break].x > 0 {
            log::trace!(
                "{:?} at x={} overflows, wrapping at {:?}",
                curr.ch,
                curr.x,
                elements[last_break].ch
            );
            i = last_break;
            above = elements[i - 1];
        } else {
            log::trace!("{:?} at x={} overflows, breaking before it", curr.ch, curr.x);
            last_break = i;
        }

        let start = &mut elements[i];
        start.x = 0;
        start.y = above.y + line_height;
        if line_starts.last() != Some(&i) {
            line_starts.push(i);
        }
        i += 1;
    }

    line_starts
}
