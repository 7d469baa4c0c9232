// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Crease contributors.

//! Error types for crease.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`CreaseError`].
pub type Result<T> = std::result::Result<T, CreaseError>;

/// Errors that can occur while loading, classifying, or exporting a mesh.
///
/// All failures are structural (missing file, malformed mesh, broken
/// invariant) and fatal to the run; none of them is worth retrying with
/// the same input.
#[derive(Error, Debug)]
pub enum CreaseError {
    /// The input path does not exist.
    #[error("path not found: {0}")]
    PathNotFound(PathBuf),

    /// The input file could not be parsed into a valid triangle mesh.
    #[error("invalid input {path}: {message}")]
    Load {
        /// The offending file path.
        path: PathBuf,
        /// What went wrong while parsing or validating.
        message: String,
    },

    /// An edge has an invalid number of incident faces.
    ///
    /// Every edge of a well-formed mesh has one or two incident faces.
    /// Hitting this means an internal invariant broke, not that the input
    /// file was bad.
    #[error("edge ({v0}, {v1}) has {faces} incident faces, expected 1 or 2")]
    Topology {
        /// First endpoint vertex index.
        v0: usize,
        /// Second endpoint vertex index.
        v1: usize,
        /// The invalid incident face count.
        faces: usize,
    },

    /// The output artifact could not be persisted.
    #[error("failed to write {path}: {message}")]
    Write {
        /// The output file path.
        path: PathBuf,
        /// The underlying I/O failure.
        message: String,
    },
}
