// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Crease contributors.

//! End-to-end edge classification properties

use anyhow::Result;
use crease::{
    classify_edges, collect_segments, detect_edges, geometry::predicates, io, CreaseError,
    MeshTopology, SurfaceMesh, DEFAULT_ANGLE_THRESHOLD,
};
use nalgebra::Point3;
use std::io::Write;

/// Axis-aligned unit cube: 8 vertices, 12 triangles, 18 edges.
///
/// Each square face is split along a diagonal, so 12 of the edges are the
/// cube's 90-degree creases and 6 are flat face diagonals.
fn unit_cube() -> SurfaceMesh {
    let mut mesh = SurfaceMesh::new();
    for z in [0.0, 1.0] {
        mesh.add_vertex(Point3::new(0.0, 0.0, z));
        mesh.add_vertex(Point3::new(1.0, 0.0, z));
        mesh.add_vertex(Point3::new(1.0, 1.0, z));
        mesh.add_vertex(Point3::new(0.0, 1.0, z));
    }
    let faces: [[usize; 3]; 12] = [
        [0, 2, 1], [0, 3, 2], // bottom
        [4, 5, 6], [4, 6, 7], // top
        [0, 1, 5], [0, 5, 4], // front
        [2, 3, 7], [2, 7, 6], // back
        [0, 4, 7], [0, 7, 3], // left
        [1, 2, 6], [1, 6, 5], // right
    ];
    for f in faces {
        mesh.add_face(f);
    }
    mesh
}

fn flat_quad() -> SurfaceMesh {
    let mut mesh = SurfaceMesh::new();
    mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
    mesh.add_vertex(Point3::new(1.0, 0.0, 0.0));
    mesh.add_vertex(Point3::new(1.0, 1.0, 0.0));
    mesh.add_vertex(Point3::new(0.0, 1.0, 0.0));
    mesh.add_face([0, 1, 2]);
    mesh.add_face([0, 2, 3]);
    mesh
}

#[test]
fn test_cube_counts() -> Result<()> {
    let mesh = unit_cube();
    let topo = MeshTopology::build(&mesh)?;

    assert_eq!(mesh.vertex_count(), 8);
    assert_eq!(mesh.face_count(), 12);
    assert_eq!(topo.edge_count(), 18);
    Ok(())
}

#[test]
fn test_cube_is_closed_with_twelve_creases() -> Result<()> {
    let mesh = unit_cube();
    let topo = MeshTopology::build(&mesh)?;
    let tags = classify_edges(&mesh, &topo, DEFAULT_ANGLE_THRESHOLD)?;

    // Closed manifold: no border edges; the 12 cube edges sit at 90 degrees.
    assert_eq!(tags.border_count(), 0);
    assert_eq!(tags.feature_count(), 12);
    Ok(())
}

#[test]
fn test_cube_threshold_above_ninety() -> Result<()> {
    let mesh = unit_cube();
    let topo = MeshTopology::build(&mesh)?;
    let tags = classify_edges(&mesh, &topo, 90.1)?;

    assert_eq!(tags.feature_count(), 0);
    assert_eq!(tags.border_count(), 0);
    Ok(())
}

#[test]
fn test_cube_threshold_exactly_ninety() -> Result<()> {
    // The comparison is >=, so the creases stay in at exactly 90 degrees.
    let mesh = unit_cube();
    let topo = MeshTopology::build(&mesh)?;
    let tags = classify_edges(&mesh, &topo, 90.0)?;

    assert_eq!(tags.feature_count(), 12);
    Ok(())
}

#[test]
fn test_quad_border_and_interior() -> Result<()> {
    let mesh = flat_quad();
    let topo = MeshTopology::build(&mesh)?;
    let tags = classify_edges(&mesh, &topo, DEFAULT_ANGLE_THRESHOLD)?;

    assert_eq!(topo.edge_count(), 5);
    assert_eq!(tags.border_count(), 4);
    assert_eq!(tags.feature_count(), 0);

    // Exactly one edge is interior and therefore angle-evaluated; it is flat.
    let interior: Vec<usize> = (0..topo.edge_count())
        .filter(|&e| !topo.is_border_edge(e))
        .collect();
    assert_eq!(interior.len(), 1);
    assert_eq!(predicates::dihedral_angle(&mesh, &topo, interior[0]), Some(0.0));
    Ok(())
}

#[test]
fn test_border_implies_not_feature() -> Result<()> {
    let mesh = flat_quad();
    let topo = MeshTopology::build(&mesh)?;
    // Threshold 0 would mark any evaluated edge; border edges still stay out.
    let tags = classify_edges(&mesh, &topo, 0.0)?;

    for edge in 0..topo.edge_count() {
        if tags.is_border[edge] {
            assert!(!tags.is_feature[edge]);
        } else {
            assert!(tags.is_feature[edge]);
        }
    }
    Ok(())
}

#[test]
fn test_interior_edges_follow_threshold() -> Result<()> {
    let mesh = unit_cube();
    let topo = MeshTopology::build(&mesh)?;
    let tags = classify_edges(&mesh, &topo, 45.0)?;

    for edge in 0..topo.edge_count() {
        assert!(!tags.is_border[edge]);
        let angle = predicates::dihedral_angle(&mesh, &topo, edge).unwrap();
        assert_eq!(tags.is_feature[edge], angle >= 45.0);
    }
    Ok(())
}

#[test]
fn test_threshold_monotonicity() -> Result<()> {
    let mesh = unit_cube();
    let topo = MeshTopology::build(&mesh)?;

    let mut previous_count = usize::MAX;
    for threshold in [0.0, 30.0, 60.0, 90.0, 120.0, 180.0] {
        let tags = classify_edges(&mesh, &topo, threshold)?;
        let count = tags.feature_count();
        assert!(
            count <= previous_count,
            "raising threshold to {threshold} added feature edges"
        );
        previous_count = count;
    }
    Ok(())
}

#[test]
fn test_output_is_idempotent() -> Result<()> {
    let mesh = unit_cube();

    let run = || -> Result<String> {
        let topo = MeshTopology::build(&mesh)?;
        let tags = classify_edges(&mesh, &topo, DEFAULT_ANGLE_THRESHOLD)?;
        let segments = collect_segments(&mesh, &topo, &tags);
        Ok(io::to_json_string(&segments)?)
    };

    assert_eq!(run()?, run()?);
    Ok(())
}

#[test]
fn test_missing_path_fails_before_processing() {
    let err = detect_edges("no_such_mesh.off", DEFAULT_ANGLE_THRESHOLD).unwrap_err();
    assert!(matches!(err, CreaseError::PathNotFound(_)));
}

#[test]
fn test_full_pipeline_writes_artifact() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("cube.off");

    let mesh = unit_cube();
    crease::write_off(&mesh, &input)?;

    let segments = detect_edges(&input, DEFAULT_ANGLE_THRESHOLD)?;
    let output = crease::edges_output_path(&input);
    io::write_json(&segments, &output)?;

    assert_eq!(output, dir.path().join("cube_edges.json"));
    let written: crease::EdgeSegments = serde_json::from_str(&std::fs::read_to_string(&output)?)?;
    assert_eq!(written.feature_count(), 12);
    assert_eq!(written.border_count(), 0);
    Ok(())
}

#[test]
fn test_malformed_off_is_load_error() -> Result<()> {
    let mut file = tempfile::Builder::new().suffix(".off").tempfile()?;
    write!(file, "OFF\n4 1 4\n0 0 0\n1 0 0\n1 1 0\n0 1 0\n4 0 1 2 3\n")?;

    let err = detect_edges(file.path(), DEFAULT_ANGLE_THRESHOLD).unwrap_err();
    assert!(matches!(err, CreaseError::Load { .. }));
    Ok(())
}
