// Copyright 2026 the Fdt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

use crate::error::Error;
use crate::face::FontFace;

/// Names of the faces shipped with the game client, in the client's order.
pub const STOCK_FACE_NAMES: &[&str] = &[
    "AXIS_96",
    "AXIS_12",
    "AXIS_14",
    "AXIS_18",
    "AXIS_36",
    "Jupiter_16",
    "Jupiter_20",
    "Jupiter_23",
    "Jupiter_46",
    "MiedingerMid_10",
    "MiedingerMid_12",
    "MiedingerMid_14",
    "MiedingerMid_18",
    "MiedingerMid_36",
    "TrumpGothic_184",
    "TrumpGothic_23",
    "TrumpGothic_34",
    "TrumpGothic_68",
];

/// A set of decoded faces addressed by name.
#[derive(Clone, Debug, Default)]
pub struct FaceCollection {
    faces: HashMap<String, FontFace>,
}

impl FaceCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes `data` and stores the face under `name`.
    pub fn insert(&mut self, name: &str, data: &[u8]) -> Result<&FontFace, Error> {
        match self.faces.entry(name.into()) {
            Entry::Occupied(_) => Err(Error::duplicate_face(name)),
            Entry::Vacant(entry) => {
                let face = FontFace::decode(data)?;
                log::debug!("registered face {name}");
                Ok(entry.insert(face))
            }
        }
    }

    /// Returns the face stored under `name`.
    pub fn get(&self, name: &str) -> Option<&FontFace> {
        self.faces.get(name)
    }

    /// Iterates over all faces in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FontFace)> + '_ {
        self.faces.iter().map(|(name, face)| (name.as_str(), face))
    }

    /// Number of faces in the collection.
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Whether the collection holds no faces.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}
