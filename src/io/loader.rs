// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Crease contributors.

//! Mesh loading with validation
//!
//! Loads OFF and OBJ files into a [`SurfaceMesh`]. The loader rejects
//! missing paths, unrecognized formats, empty meshes, and non-triangular
//! faces; everything downstream may assume a well-formed triangle mesh.

use super::Format;
use crate::error::{CreaseError, Result};
use crate::geometry::SurfaceMesh;
use nalgebra::Point3;
use std::fs;
use std::path::Path;

/// Load a triangle mesh from an OFF or OBJ file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<SurfaceMesh> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(CreaseError::PathNotFound(path.to_path_buf()));
    }

    let format = Format::from_path(path).ok_or_else(|| CreaseError::Load {
        path: path.to_path_buf(),
        message: format!(
            "unrecognized format \"{}\" (supported: off, obj)",
            path.extension()
                .and_then(|e| e.to_str())
                .unwrap_or("(none)")
        ),
    })?;

    let source = fs::read_to_string(path).map_err(|e| CreaseError::Load {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mesh = match format {
        Format::Off => parse_off(&source),
        Format::Obj => parse_obj(&source),
    }
    .map_err(|message| CreaseError::Load {
        path: path.to_path_buf(),
        message,
    })?;

    Ok(mesh)
}

/// Parse OFF source text.
///
/// Works on the whitespace token stream, so counts on the header line and
/// arbitrary line breaks are both accepted. Comments start with `#`.
fn parse_off(source: &str) -> std::result::Result<SurfaceMesh, String> {
    let mut tokens = source
        .lines()
        .map(|line| line.split('#').next().unwrap_or(""))
        .flat_map(str::split_whitespace);

    let header = tokens.next().ok_or("file is empty")?;
    if header != "OFF" {
        return Err(format!("expected OFF header, found \"{header}\""));
    }

    let vertex_count = next_usize(&mut tokens, "vertex count")?;
    let face_count = next_usize(&mut tokens, "face count")?;
    let _edge_count = next_usize(&mut tokens, "edge count")?;

    if face_count == 0 {
        return Err("mesh has no faces".to_string());
    }

    let mut mesh = SurfaceMesh::with_capacity(vertex_count, face_count);

    for i in 0..vertex_count {
        let x = next_f64(&mut tokens, &format!("vertex {i} x"))?;
        let y = next_f64(&mut tokens, &format!("vertex {i} y"))?;
        let z = next_f64(&mut tokens, &format!("vertex {i} z"))?;
        mesh.add_vertex(Point3::new(x, y, z));
    }

    for i in 0..face_count {
        let arity = next_usize(&mut tokens, &format!("face {i} vertex count"))?;
        if arity != 3 {
            return Err(format!("face {i} has {arity} vertices, mesh is not triangulated"));
        }
        let mut indices = [0usize; 3];
        for slot in &mut indices {
            let v = next_usize(&mut tokens, &format!("face {i} vertex index"))?;
            if v >= vertex_count {
                return Err(format!("face {i} references invalid vertex index {v}"));
            }
            *slot = v;
        }
        mesh.add_face(indices);
    }

    Ok(mesh)
}

/// Parse Wavefront OBJ source text.
///
/// Only `v` and `f` records matter here; normals, texture coordinates,
/// groups, and materials are skipped. Indices are 1-based, negative indices
/// count back from the current vertex list.
fn parse_obj(source: &str) -> std::result::Result<SurfaceMesh, String> {
    let mut mesh = SurfaceMesh::new();

    for (line_no, line) in source.lines().enumerate() {
        let line = line.split('#').next().unwrap_or("").trim();
        let mut fields = line.split_whitespace();

        match fields.next() {
            Some("v") => {
                let mut coords = [0.0f64; 3];
                for coord in &mut coords {
                    let field = fields
                        .next()
                        .ok_or(format!("line {}: vertex has fewer than 3 coordinates", line_no + 1))?;
                    *coord = field
                        .parse()
                        .map_err(|_| format!("line {}: invalid coordinate \"{field}\"", line_no + 1))?;
                }
                mesh.add_vertex(Point3::new(coords[0], coords[1], coords[2]));
            }
            Some("f") => {
                let corners: Vec<&str> = fields.collect();
                if corners.len() != 3 {
                    return Err(format!(
                        "line {}: face has {} vertices, mesh is not triangulated",
                        line_no + 1,
                        corners.len()
                    ));
                }
                let mut indices = [0usize; 3];
                for (slot, corner) in indices.iter_mut().zip(&corners) {
                    *slot = parse_obj_index(corner, mesh.vertex_count())
                        .ok_or(format!("line {}: invalid face index \"{corner}\"", line_no + 1))?;
                }
                mesh.add_face(indices);
            }
            _ => {}
        }
    }

    if mesh.face_count() == 0 {
        return Err("mesh has no faces".to_string());
    }

    Ok(mesh)
}

/// Resolve one `f` record corner (`7`, `7/1`, `7//3`, `-1`) to a 0-based index.
fn parse_obj_index(corner: &str, vertex_count: usize) -> Option<usize> {
    let raw: i64 = corner.split('/').next()?.parse().ok()?;
    let index = if raw > 0 {
        (raw - 1) as usize
    } else if raw < 0 {
        vertex_count.checked_sub(raw.unsigned_abs() as usize)?
    } else {
        return None;
    };
    (index < vertex_count).then_some(index)
}

fn next_usize<'a, I: Iterator<Item = &'a str>>(
    tokens: &mut I,
    what: &str,
) -> std::result::Result<usize, String> {
    let token = tokens.next().ok_or(format!("unexpected end of file, expected {what}"))?;
    token
        .parse()
        .map_err(|_| format!("invalid {what}: \"{token}\""))
}

fn next_f64<'a, I: Iterator<Item = &'a str>>(
    tokens: &mut I,
    what: &str,
) -> std::result::Result<f64, String> {
    let token = tokens.next().ok_or(format!("unexpected end of file, expected {what}"))?;
    token
        .parse()
        .map_err(|_| format!("invalid {what}: \"{token}\""))
}
