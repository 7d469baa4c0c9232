// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Crease contributors.

//! Geometric predicates: face normals and dihedral angles

use super::{MeshTopology, SurfaceMesh};
use nalgebra::Vector3;

/// Cross-product magnitude below which a triangle counts as zero-area.
const DEGENERATE_AREA_EPSILON: f64 = 1e-12;

/// Unit normal of a triangular face.
///
/// Returns `None` for a degenerate (near-zero-area) triangle instead of
/// dividing by a vanishing magnitude.
pub fn face_normal(mesh: &SurfaceMesh, face: usize) -> Option<Vector3<f64>> {
    let [p0, p1, p2] = mesh.face_points(face);
    let cross = (p1 - p0).cross(&(p2 - p0));
    let magnitude = cross.norm();
    if magnitude < DEGENERATE_AREA_EPSILON {
        return None;
    }
    Some(cross / magnitude)
}

/// Dihedral angle across an edge, in degrees in [0, 180].
///
/// Defined only for interior edges; returns `None` for a border edge or
/// when either incident face is degenerate.
pub fn dihedral_angle(mesh: &SurfaceMesh, topology: &MeshTopology, edge: usize) -> Option<f64> {
    let (f1, f2) = topology.edge_faces(edge);
    let f2 = f2?;

    let n1 = face_normal(mesh, f1)?;
    let n2 = face_normal(mesh, f2)?;

    // Clamp before acos: accumulated rounding can push the dot product
    // fractionally outside [-1, 1].
    let cosine = n1.dot(&n2).clamp(-1.0, 1.0);
    Some(cosine.acos().to_degrees())
}
