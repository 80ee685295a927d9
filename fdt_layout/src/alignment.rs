// Copyright 2026 the Fdt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::classify::is_space;
use crate::plan::LayoutPlan;

/// Horizontal alignment of lines within the maximum width.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Lines start at x = 0.
    #[default]
    Left,
    /// Lines are centered within the maximum width.
    Center,
    /// Lines end at the maximum width.
    Right,
}

impl Alignment {
    /// Offset that moves a line whose ink ends at `right` into place.
    pub fn offset(self, max_width: i32, right: i32) -> i32 {
        match self {
            Self::Left => 0,
            Self::Center => max_width.saturating_sub(right) / 2,
            Self::Right => max_width.saturating_sub(right),
        }
    }
}

impl FromStr for Alignment {
    type Err = ParseAlignmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("left") {
            Ok(Self::Left)
        } else if ["center", "centre", "middle"]
            .iter()
            .any(|name| s.eq_ignore_ascii_case(name))
        {
            Ok(Self::Center)
        } else if s.eq_ignore_ascii_case("right") {
            Ok(Self::Right)
        } else {
            Err(ParseAlignmentError { name: s.into() })
        }
    }
}

/// Error returned when parsing an unknown alignment name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseAlignmentError {
    name: String,
}

impl ParseAlignmentError {
    /// The string that failed to parse.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ParseAlignmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid horizontal alignment {:?}; expected left, center or right",
            self.name
        )
    }
}

impl core::error::Error for ParseAlignmentError {}

/// Trims, measures and aligns every line of `plan`, filling in its bounds.
pub(crate) fn align(plan: &mut LayoutPlan, line_height: i32, max_width: i32, alignment: Alignment) {
    let mut left: Option<i32> = None;
    let mut width = 0;
    let mut height = 0;

    for line in 0..plan.line_starts.len() {
        let start = plan.line_starts[line];
        let mut end = plan
            .line_starts
            .get(line + 1)
            .copied()
            .unwrap_or(plan.elements.len());
        while end > start && is_space(plan.elements[end - 1].ch) {
            end -= 1;
        }
        if start >= end {
            continue;
        }

        let elements = &mut plan.elements[start..end];
        let mut right = 0;
        for element in elements.iter() {
            right = right.max(element.ink_right());
            height = height.max(element.bottom());
        }
        width = width.max(right - elements[0].x);

        let offset = alignment.offset(max_width, right);
        for element in elements.iter_mut() {
            element.x += offset;
        }

        let line_left = elements[0].x;
        left = Some(left.map_or(line_left, |l| l.min(line_left)));
    }

    let line_count = i32::try_from(plan.line_starts.len()).unwrap_or(i32::MAX);
    plan.left = left.unwrap_or(0);
    plan.width = width;
    plan.height = height.max(line_height.saturating_mul(line_count));
}
