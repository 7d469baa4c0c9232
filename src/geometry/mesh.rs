// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Crease contributors.

//! Triangle surface mesh representation

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// An indexed triangle surface mesh.
///
/// Vertices are positions, faces are ordered triples of vertex indices.
/// The mesh is populated once by the loader and read-only afterwards;
/// triangulation is a type invariant (`[usize; 3]`), so a constructed mesh
/// can never hold a non-triangular face.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceMesh {
    pub vertices: Vec<Point3<f64>>,
    pub faces: Vec<[usize; 3]>,
}

impl SurfaceMesh {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Add a vertex and return its index.
    pub fn add_vertex(&mut self, position: Point3<f64>) -> usize {
        let index = self.vertices.len();
        self.vertices.push(position);
        index
    }

    /// Add a triangular face.
    pub fn add_face(&mut self, indices: [usize; 3]) {
        self.faces.push(indices);
    }

    /// Get vertex count.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get face count.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// The three corner positions of a face.
    pub fn face_points(&self, face: usize) -> [&Point3<f64>; 3] {
        let [a, b, c] = self.faces[face];
        [&self.vertices[a], &self.vertices[b], &self.vertices[c]]
    }

    /// True if every face references only valid vertex indices.
    pub fn indices_in_bounds(&self) -> bool {
        let n = self.vertices.len();
        self.faces
            .iter()
            .all(|f| f.iter().all(|&v| v < n))
    }
}

impl Default for SurfaceMesh {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_count() {
        let mut mesh = SurfaceMesh::new();
        let a = mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
        let b = mesh.add_vertex(Point3::new(1.0, 0.0, 0.0));
        let c = mesh.add_vertex(Point3::new(0.0, 1.0, 0.0));
        mesh.add_face([a, b, c]);

        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.face_count(), 1);
        assert!(mesh.indices_in_bounds());
    }

    #[test]
    fn test_out_of_bounds_face() {
        let mut mesh = SurfaceMesh::new();
        mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
        mesh.add_face([0, 1, 2]);
        assert!(!mesh.indices_in_bounds());
    }

    #[test]
    fn test_face_points() {
        let mut mesh = SurfaceMesh::new();
        mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
        mesh.add_vertex(Point3::new(1.0, 0.0, 0.0));
        mesh.add_vertex(Point3::new(1.0, 1.0, 0.0));
        mesh.add_face([0, 1, 2]);

        let [p0, _, p2] = mesh.face_points(0);
        assert_eq!(p0.x, 0.0);
        assert_eq!(p2.y, 1.0);
    }
}
