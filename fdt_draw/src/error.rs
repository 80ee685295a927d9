// Copyright 2026 the Fdt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::atlas::AtlasError;

/// Failure to render text.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum RenderError {
    /// The face cannot represent the text.
    Face(fdt::Error),
    /// The atlas does not hold a glyph the layout needs.
    Atlas(AtlasError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Face(err) => write!(f, "layout failed: {err}"),
            Self::Atlas(err) => write!(f, "rasterization failed: {err}"),
        }
    }
}

impl core::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Face(err) => Some(err),
            Self::Atlas(err) => Some(err),
        }
    }
}

impl From<fdt::Error> for RenderError {
    fn from(err: fdt::Error) -> Self {
        Self::Face(err)
    }
}

impl From<AtlasError> for RenderError {
    fn from(err: AtlasError) -> Self {
        Self::Atlas(err)
    }
}
