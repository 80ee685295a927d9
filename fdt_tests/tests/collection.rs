// Copyright 2026 the Fdt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use fdt::{FaceCollection, STOCK_FACE_NAMES};
use fdt_dev::block_face;
use fdt_draw::{AtlasPages, TextRenderer, TextStyle};

#[test]
fn collection_renders_by_name() {
    let mut faces = FaceCollection::new();
    let mut atlases = Vec::new();
    for (name, size) in [("AXIS_12", 6_u8), ("AXIS_18", 9), ("AXIS_36", 18)] {
        assert!(STOCK_FACE_NAMES.contains(&name));
        let (table, atlas) = block_face(size, size);
        let face = faces
            .insert(name, &table.line_height(i32::from(size) + 4).to_bytes())
            .unwrap();
        atlases.push((name, AtlasPages::for_face(face, atlas.into_textures()).unwrap()));
    }
    assert_eq!(faces.len(), 3);

    let style = TextStyle {
        boldness: 0.0,
        italicness: 0.0,
        ..TextStyle::default()
    };
    for (name, atlas) in &atlases {
        let face = faces.get(name).unwrap();
        let pixmap = TextRenderer::new(face, atlas).render("Hi", &style).unwrap();
        let glyph = u16::from(face.glyph('H').unwrap().width);
        assert_eq!(pixmap.width(), 2 * glyph, "{name}");
        assert_eq!(i32::from(pixmap.height()), face.line_height(), "{name}");
    }
}
