// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Crease contributors.

//! Edge classification: feature edges and border edges

use super::{predicates, MeshTopology, SurfaceMesh};
use crate::error::{CreaseError, Result};

/// Default sharpness threshold in degrees.
pub const DEFAULT_ANGLE_THRESHOLD: f64 = 60.0;

/// Per-edge classification tags, parallel to the topology's edge list.
#[derive(Debug, Clone)]
pub struct EdgeClassification {
    /// Interior edge whose dihedral angle meets the threshold.
    pub is_feature: Vec<bool>,
    /// Edge with fewer than two incident faces.
    pub is_border: Vec<bool>,
}

impl EdgeClassification {
    /// Edge handles tagged as feature, in edge order.
    pub fn feature_edges(&self) -> impl Iterator<Item = usize> + '_ {
        self.is_feature
            .iter()
            .enumerate()
            .filter(|(_, &tag)| tag)
            .map(|(edge, _)| edge)
    }

    /// Edge handles tagged as border, in edge order.
    pub fn border_edges(&self) -> impl Iterator<Item = usize> + '_ {
        self.is_border
            .iter()
            .enumerate()
            .filter(|(_, &tag)| tag)
            .map(|(edge, _)| edge)
    }

    pub fn feature_count(&self) -> usize {
        self.is_feature.iter().filter(|&&tag| tag).count()
    }

    pub fn border_count(&self) -> usize {
        self.is_border.iter().filter(|&&tag| tag).count()
    }
}

/// Classify every edge of the mesh in a single linear pass.
///
/// An edge is a border edge iff it has fewer than two incident faces; this
/// is a pure topological test. An interior edge is a feature edge iff its
/// dihedral angle is at least `threshold_degrees`. Border edges are never
/// angle-tested and always report `is_feature = false`, even when the local
/// geometry is sharp; a crease sitting on an open boundary shows up only
/// under the border category. An interior edge with a degenerate incident
/// face has no usable dihedral angle and is likewise reported non-feature.
pub fn classify_edges(
    mesh: &SurfaceMesh,
    topology: &MeshTopology,
    threshold_degrees: f64,
) -> Result<EdgeClassification> {
    let edge_count = topology.edge_count();
    let mut is_feature = vec![false; edge_count];
    let mut is_border = vec![false; edge_count];

    for edge in 0..edge_count {
        match topology.incident_face_count(edge) {
            1 => is_border[edge] = true,
            2 => {
                if let Some(angle) = predicates::dihedral_angle(mesh, topology, edge) {
                    is_feature[edge] = angle >= threshold_degrees;
                }
            }
            faces => {
                let (v0, v1) = topology.edge_endpoints(edge);
                return Err(CreaseError::Topology { v0, v1, faces });
            }
        }
    }

    Ok(EdgeClassification {
        is_feature,
        is_border,
    })
}
