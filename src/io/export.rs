// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Crease contributors.

//! Segment export: classified edges as line segments in JSON

use crate::error::{CreaseError, Result};
use crate::geometry::{EdgeClassification, MeshTopology, SurfaceMesh};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A 3D line segment with a start and end point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: [f64; 3],
    pub end: [f64; 3],
}

/// The output artifact: classified edges grouped by category.
///
/// The two lists are independent; an edge that is both sharp and on the
/// boundary would appear under each category it was tagged with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeSegments {
    pub feature_edges: Vec<Segment>,
    pub border_edges: Vec<Segment>,
}

impl EdgeSegments {
    pub fn feature_count(&self) -> usize {
        self.feature_edges.len()
    }

    pub fn border_count(&self) -> usize {
        self.border_edges.len()
    }
}

/// Resolve classified edges to endpoint coordinates.
///
/// Segments follow the topology's edge order within each category, so the
/// same loaded mesh always produces the same artifact.
pub fn collect_segments(
    mesh: &SurfaceMesh,
    topology: &MeshTopology,
    classification: &EdgeClassification,
) -> EdgeSegments {
    EdgeSegments {
        feature_edges: classification
            .feature_edges()
            .map(|edge| segment_for(mesh, topology, edge))
            .collect(),
        border_edges: classification
            .border_edges()
            .map(|edge| segment_for(mesh, topology, edge))
            .collect(),
    }
}

fn segment_for(mesh: &SurfaceMesh, topology: &MeshTopology, edge: usize) -> Segment {
    let (v0, v1) = topology.edge_endpoints(edge);
    let start = &mesh.vertices[v0];
    let end = &mesh.vertices[v1];
    Segment {
        start: [start.x, start.y, start.z],
        end: [end.x, end.y, end.z],
    }
}

/// Serialize the artifact with 4-space indentation.
pub fn to_json_string(segments: &EdgeSegments) -> serde_json::Result<String> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    segments.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Persist the artifact as a JSON document.
pub fn write_json<P: AsRef<Path>>(segments: &EdgeSegments, path: P) -> Result<()> {
    let path = path.as_ref();
    let json = to_json_string(segments).map_err(|e| CreaseError::Write {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    fs::write(path, json).map_err(|e| CreaseError::Write {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Output path convention: `<directory of input>/<stem of input>_edges.json`.
pub fn edges_output_path<P: AsRef<Path>>(input: P) -> PathBuf {
    let input = input.as_ref();
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("mesh");
    match input.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(format!("{stem}_edges.json")),
        _ => PathBuf::from(format!("{stem}_edges.json")),
    }
}
