// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Crease contributors.

//! OFF mesh writer

use crate::error::{CreaseError, Result};
use crate::geometry::SurfaceMesh;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Write a triangle mesh to an OFF file.
///
/// Coordinates are written with 17 significant digits so a loaded copy
/// round-trips every `f64` exactly.
pub fn write_off<P: AsRef<Path>>(mesh: &SurfaceMesh, path: P) -> Result<()> {
    let path = path.as_ref();

    let mut out = String::new();
    let _ = writeln!(out, "OFF");
    let _ = writeln!(out, "{} {} 0", mesh.vertex_count(), mesh.face_count());
    for v in &mesh.vertices {
        let _ = writeln!(out, "{:.16e} {:.16e} {:.16e}", v.x, v.y, v.z);
    }
    for f in &mesh.faces {
        let _ = writeln!(out, "3 {} {} {}", f[0], f[1], f[2]);
    }

    fs::write(path, out).map_err(|e| CreaseError::Write {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
