// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Crease contributors.

//! Crease CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use crease::{classify_edges, collect_segments, edges_output_path, io, MeshTopology, DEFAULT_ANGLE_THRESHOLD};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "crease")]
#[command(about = "Detect feature and border edges of a triangle mesh", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input mesh file (.off or .obj)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output JSON file (default: <input dir>/<input stem>_edges.json)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Dihedral angle threshold for feature edges, in degrees
    #[arg(short, long, default_value_t = DEFAULT_ANGLE_THRESHOLD)]
    threshold: f64,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify mesh edges and write the segment artifact
    Detect {
        /// Input mesh file (.off or .obj)
        input: PathBuf,

        /// Output JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Dihedral angle threshold for feature edges, in degrees
        #[arg(short, long, default_value_t = DEFAULT_ANGLE_THRESHOLD)]
        threshold: f64,
    },

    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Detect {
            input,
            output,
            threshold,
        }) => {
            detect_command(input, output.as_deref(), *threshold, cli.verbose)?;
        }
        Some(Commands::Version) => {
            println!("crease v{}", env!("CARGO_PKG_VERSION"));
        }
        None => {
            // Default behavior: detect edges of the positional input.
            if let Some(input) = &cli.input {
                detect_command(input, cli.output.as_deref(), cli.threshold, cli.verbose)?;
            } else {
                eprintln!("{} input file required", "error:".red().bold());
                eprintln!("Usage: crease <FILE> [--output <FILE>] [--threshold <DEGREES>]");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn detect_command(
    input: &Path,
    output: Option<&Path>,
    threshold: f64,
    verbose: bool,
) -> Result<()> {
    let start = std::time::Instant::now();

    let mesh = io::load(input)?;
    let topology = MeshTopology::build(&mesh)?;

    println!(
        "INFO: Mesh loaded with: {} vertices, {} edges, {} faces.",
        mesh.vertex_count(),
        topology.edge_count(),
        mesh.face_count()
    );

    let classification = classify_edges(&mesh, &topology, threshold)?;
    let segments = collect_segments(&mesh, &topology, &classification);

    if verbose {
        println!("Threshold: {threshold} degrees");
        println!("Feature edges: {}", segments.feature_count());
        println!("Border edges: {}", segments.border_count());
        println!("Classified in {:.2?}", start.elapsed());
    }

    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| edges_output_path(input));
    io::write_json(&segments, &output)?;

    println!("Edge data saved to: {}", output.display());

    Ok(())
}
