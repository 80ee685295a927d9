// Copyright 2026 the Fdt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use fdt_draw::TextStyle;
use fdt_draw::peniko::color::palette::css;

use crate::util::{Fixture, ink_span, pixel, plain};

#[test]
fn label_map_style() {
    let fixture = Fixture::blocks();
    let style = TextStyle::map_label();
    assert_eq!(style.pad(), 6);

    let label = fixture.renderer().render_label("Ab", &style).unwrap();
    assert_eq!((label.width(), label.height()), (16 + 12, 16 + 12));
    assert_eq!(pixel(&label, 9, 9), [255, 255, 255, 255], "ink");
    assert_eq!(pixel(&label, 0, 0)[3], 0, "beyond the outline");

    let [r, g, b, a] = pixel(&label, 3, 9);
    assert_eq!([r, g, b], [0, 0, 0], "outline");
    assert!(a > 0 && a < 255, "outline fades, got {a}");
}

#[test]
fn label_matches_manual_layering() {
    let fixture = Fixture::blocks();
    let style = TextStyle {
        border_width: 3.0,
        border_strength: 0.5,
        fill_color: css::GOLD,
        border_color: css::NAVY,
        max_width: 80,
        ..TextStyle::default()
    };
    let renderer = fixture.renderer();
    let label = renderer.render_label("a *b* _c_ d", &style).unwrap();

    let outlined = renderer.render("a *b* _c_ d", &style).unwrap();
    let ink = renderer
        .render("a *b* _c_ d", &TextStyle {
            border_width: 0.0,
            max_width: 80 - 6,
            ..style
        })
        .unwrap();
    assert_eq!(
        (label.width(), label.height()),
        (outlined.width(), outlined.height())
    );
    assert_eq!(
        (ink.width() + 6, ink.height() + 6),
        (label.width(), label.height())
    );

    // Premultiplied source-over of the ink at (3, 3), give or take rounding.
    for y in 0..label.height() {
        for x in 0..label.width() {
            let below = pixel(&outlined, x, y);
            let above = match (x.checked_sub(3), y.checked_sub(3)) {
                (Some(ix), Some(iy)) if ix < ink.width() && iy < ink.height() => {
                    pixel(&ink, ix, iy)
                }
                _ => [0; 4],
            };
            let got = pixel(&label, x, y);
            for c in 0..4 {
                let over = u32::from(above[c])
                    + u32::from(below[c]) * (255 - u32::from(above[3])) / 255;
                assert!(
                    u32::from(got[c]).abs_diff(over) <= 1,
                    "({x}, {y}) channel {c}: {got:?} from {above:?} over {below:?}"
                );
            }
        }
    }
}

#[test]
fn label_ink_is_crisp() {
    let fixture = Fixture::blocks();
    let style = TextStyle {
        border_width: 2.0,
        ..plain()
    };
    let label = fixture.renderer().render_label("a", &style).unwrap();
    let ink = fixture.renderer().render("a", &plain()).unwrap();
    for y in 0..10 {
        for x in 0..8 {
            assert_eq!(pixel(&label, x + 2, y + 2), pixel(&ink, x, y), "({x}, {y})");
        }
    }
    assert_eq!(ink_span(&label, 5), Some((1, 11)), "outline reaches one pixel out");
}
