// Copyright 2026 the Fdt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integration tests running text through decoding, layout and rasterization.
//!
//! - `util` builds the synthetic faces shared by the other modules.
//! - Name tests with their topic first (`label_*`, `wrap_*`) so related cases
//!   sort together.

#![allow(missing_docs, reason = "we don't need docs for testing")]
#![allow(clippy::cast_possible_truncation, reason = "not critical for testing")]

mod collection;
mod label;
mod util;
