// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Crease contributors.

//! Geometry module - mesh representation, adjacency, and edge classification

mod classification;
mod halfedge;
mod mesh;
pub mod predicates;

pub use classification::{classify_edges, EdgeClassification, DEFAULT_ANGLE_THRESHOLD};
pub use halfedge::{Edge, HalfEdge, MeshTopology};
pub use mesh::SurfaceMesh;
