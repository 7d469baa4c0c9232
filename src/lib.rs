// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Crease contributors.

//! Crease
//!
//! Classifies the edges of a triangulated surface mesh into geometric
//! *feature* edges (dihedral angle at or above a threshold) and topological
//! *border* edges (edges bounding an open boundary), and exports the result
//! as line segments for downstream visualization.

pub mod error;
pub mod geometry;
pub mod io;

pub use error::{CreaseError, Result};
pub use geometry::{
    classify_edges, EdgeClassification, MeshTopology, SurfaceMesh, DEFAULT_ANGLE_THRESHOLD,
};
pub use io::{collect_segments, edges_output_path, load, write_json, write_off, EdgeSegments, Segment};

use std::path::Path;

/// Run the full pipeline on a mesh file: load, build adjacency, classify,
/// and resolve the tagged edges to line segments.
pub fn detect_edges<P: AsRef<Path>>(path: P, threshold_degrees: f64) -> Result<EdgeSegments> {
    let mesh = io::load(path)?;
    let topology = MeshTopology::build(&mesh)?;
    let classification = classify_edges(&mesh, &topology, threshold_degrees)?;
    Ok(collect_segments(&mesh, &topology, &classification))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_detect_edges_from_file() {
        let mut file = tempfile::Builder::new().suffix(".off").tempfile().unwrap();
        write!(file, "OFF\n4 2 5\n0 0 0\n1 0 0\n1 1 0\n0 1 0\n3 0 1 2\n3 0 2 3\n").unwrap();

        let segments = detect_edges(file.path(), DEFAULT_ANGLE_THRESHOLD).unwrap();
        assert_eq!(segments.feature_count(), 0);
        assert_eq!(segments.border_count(), 4);
    }

    #[test]
    fn test_detect_edges_missing_path() {
        let err = detect_edges("nope.off", DEFAULT_ANGLE_THRESHOLD).unwrap_err();
        assert!(matches!(err, CreaseError::PathNotFound(_)));
    }
}
