//! CLI logic for the terrace layout tool.
//!
//! Reads a graph, lays it out and writes the six flat artifacts.

mod args;
mod config;
mod error;
mod output;

pub use args::{Args, Heuristic};
pub use config::{LOCAL_CONFIG, load_config};
pub use error::{CliError, Result};
pub use output::{OutputDirs, write_artifacts};

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use terrace::{Artifacts, ExportOptions, Graph, GraphInput};

/// Runs the pipeline for `args`.
///
/// Nothing is written unless the graph was read, validated and laid out successfully.
pub fn run(args: &Args) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    args.apply_overrides(&mut config);

    let graph = read_graph(args.input_path())?;
    tracing::info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "read graph"
    );

    if config.prune {
        tracing::info!(depth = config.prune_depth, "filtering graph");
    }
    let layout = terrace::layout(graph, &config)?;
    let report = layout.prune_report();
    if !report.removed_nodes.is_empty() {
        tracing::info!(
            removed_nodes = report.removed_nodes.len(),
            removed_edges = report.removed_edges,
            "filtered graph"
        );
    }

    tracing::info!(layers = layout.layer_count(), "generating artifacts");
    let artifacts = Artifacts::render(&layout, &ExportOptions { pretty: args.pretty })?;

    let dirs = OutputDirs {
        json: args.json_dir().to_path_buf(),
        data: args.data_dir().to_path_buf(),
    };
    write_artifacts(&artifacts, &dirs)?;

    tracing::info!("completed successfully");
    Ok(())
}

/// Reads and validates a graph from `path`, or stdin when `None`.
pub fn read_graph(path: Option<&Path>) -> Result<Graph> {
    let text = read_input(path)?;
    let input: GraphInput = serde_json::from_str(&text).map_err(CliError::Input)?;
    let graph = Graph::try_from(input).map_err(terrace::Error::from)?;
    Ok(graph)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| CliError::Read {
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
            Ok(buf)
        }
        Some(path) => fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}
