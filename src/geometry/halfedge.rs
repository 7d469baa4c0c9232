// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Crease contributors.

//! Half-edge adjacency over a triangle mesh
//!
//! The half-edge graph is stored as flat arrays of records indexed by
//! integer handles; `twin: None` is the sentinel for a boundary half-edge.
//! This keeps the naturally cyclic structure (half-edge -> twin -> face ->
//! half-edge) free of owning references.

use super::SurfaceMesh;
use crate::error::{CreaseError, Result};
use std::collections::HashMap;

/// One directed traversal of an edge, bound to a single face.
#[derive(Debug, Clone, Copy)]
pub struct HalfEdge {
    /// Next half-edge around the same face (counter-clockwise).
    pub next: usize,
    /// Previous half-edge around the same face.
    pub prev: usize,
    /// Opposite half-edge in the adjacent face, `None` on the boundary.
    pub twin: Option<usize>,
    /// Vertex this half-edge starts from.
    pub origin: usize,
    /// Vertex this half-edge points to.
    pub target: usize,
    /// Face this half-edge belongs to.
    pub face: usize,
}

/// An undirected edge: one half-edge plus its twin, if any.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    /// The half-edge encountered first while scanning faces.
    pub half_edge_a: usize,
    /// Its twin, `None` for a border edge.
    pub half_edge_b: Option<usize>,
}

/// Half-edge topology built once from a [`SurfaceMesh`] and immutable after.
#[derive(Debug, Clone)]
pub struct MeshTopology {
    pub half_edges: Vec<HalfEdge>,
    pub edges: Vec<Edge>,
}

impl MeshTopology {
    /// Build the half-edge adjacency for a triangle mesh.
    ///
    /// Edges are recorded in the order their first half-edge appears while
    /// scanning faces, so the same mesh always produces the same edge
    /// ordering. Fails with [`CreaseError::Topology`] if an undirected edge
    /// is shared by more than two faces.
    pub fn build(mesh: &SurfaceMesh) -> Result<Self> {
        let mut half_edges = Vec::with_capacity(mesh.face_count() * 3);

        for (face_idx, face) in mesh.faces.iter().enumerate() {
            let base = half_edges.len();
            for corner in 0..3 {
                half_edges.push(HalfEdge {
                    next: base + (corner + 1) % 3,
                    prev: base + (corner + 2) % 3,
                    twin: None,
                    origin: face[corner],
                    target: face[(corner + 1) % 3],
                    face: face_idx,
                });
            }
        }

        // Pair twins by unordered endpoint key. Edges keep first-seen order;
        // the map never drives output ordering.
        let mut edges: Vec<Edge> = Vec::with_capacity(half_edges.len() / 2 + 1);
        let mut edge_of_key: HashMap<(usize, usize), usize> = HashMap::new();

        for he_idx in 0..half_edges.len() {
            let (origin, target) = (half_edges[he_idx].origin, half_edges[he_idx].target);
            let key = if origin < target {
                (origin, target)
            } else {
                (target, origin)
            };

            match edge_of_key.get(&key) {
                None => {
                    edge_of_key.insert(key, edges.len());
                    edges.push(Edge {
                        half_edge_a: he_idx,
                        half_edge_b: None,
                    });
                }
                Some(&edge_idx) => {
                    let edge = &mut edges[edge_idx];
                    if edge.half_edge_b.is_some() {
                        // Third face on the same undirected edge.
                        return Err(CreaseError::Topology {
                            v0: key.0,
                            v1: key.1,
                            faces: 3,
                        });
                    }
                    edge.half_edge_b = Some(he_idx);
                    let first = edge.half_edge_a;
                    half_edges[he_idx].twin = Some(first);
                    half_edges[first].twin = Some(he_idx);
                }
            }
        }

        Ok(Self { half_edges, edges })
    }

    /// The two endpoint vertices of an edge, in first-half-edge order.
    pub fn edge_endpoints(&self, edge: usize) -> (usize, usize) {
        let he = &self.half_edges[self.edges[edge].half_edge_a];
        (he.origin, he.target)
    }

    /// Faces incident to an edge: always at least one, two for interior edges.
    pub fn edge_faces(&self, edge: usize) -> (usize, Option<usize>) {
        let e = &self.edges[edge];
        let first = self.half_edges[e.half_edge_a].face;
        let second = e.half_edge_b.map(|he| self.half_edges[he].face);
        (first, second)
    }

    /// Number of faces incident to an edge.
    pub fn incident_face_count(&self, edge: usize) -> usize {
        match self.edges[edge].half_edge_b {
            Some(_) => 2,
            None => 1,
        }
    }

    /// True if the edge lies on the mesh's topological boundary.
    pub fn is_border_edge(&self, edge: usize) -> bool {
        self.edges[edge].half_edge_b.is_none()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn half_edge_count(&self) -> usize {
        self.half_edges.len()
    }
}
