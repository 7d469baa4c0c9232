// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Crease contributors.

//! I/O module - mesh loading, mesh writing, and segment export

mod export;
mod loader;
mod writer;

pub use export::{collect_segments, edges_output_path, to_json_string, write_json, EdgeSegments, Segment};
pub use loader::load;
pub use writer::write_off;

use std::path::Path;

/// Supported mesh input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Object File Format (geomview).
    Off,
    /// Wavefront OBJ.
    Obj,
}

impl Format {
    /// Detect format from a file extension.
    pub fn from_extension(ext: &str) -> Option<Format> {
        match ext.to_lowercase().as_str() {
            "off" => Some(Format::Off),
            "obj" => Some(Format::Obj),
            _ => None,
        }
    }

    /// Detect format from a file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Format> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Format::from_extension)
    }
}
