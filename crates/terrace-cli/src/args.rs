//! Command-line argument definitions.
//!
//! Every layout flag is optional; a flag that is present overrides the matching key of the
//! loaded configuration file.

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use terrace::{LayoutConfig, OrderHeuristic};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Graph input as JSON (`{"nodes": [...], "edges": [...]}`); `-` or absent reads stdin
    pub input: Option<PathBuf>,

    /// Directory receiving all artifacts unless `--json-dir`/`--data-dir` say otherwise
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Directory for nodes.json, edges.json and positions.json
    #[arg(long)]
    pub json_dir: Option<PathBuf>,

    /// Directory for nodes.dat, edges.dat and coordinates.dat
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Pretty-print the JSON artifacts
    #[arg(long)]
    pub pretty: bool,

    /// Skip structural pruning
    #[arg(long)]
    pub no_prune: bool,

    #[arg(long, value_name = "DEPTH")]
    pub prune_depth: Option<u32>,

    #[arg(long, value_name = "N")]
    pub node_spacing: Option<f64>,

    #[arg(long, value_name = "N")]
    pub layer_spacing: Option<f64>,

    /// Keep nodes at their order-derived x instead of centring parents over children
    #[arg(long)]
    pub no_parent_centralization: bool,

    /// Cap on down+up crossing-reduction sweeps
    #[arg(long, value_name = "N")]
    pub max_sweeps: Option<usize>,

    #[arg(long, value_enum)]
    pub heuristic: Option<Heuristic>,

    /// Log level (off, error, warn, info, debug, trace); `RUST_LOG` takes precedence
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    Barycenter,
    Median,
}

impl From<Heuristic> for OrderHeuristic {
    fn from(value: Heuristic) -> Self {
        match value {
            Heuristic::Barycenter => OrderHeuristic::Barycenter,
            Heuristic::Median => OrderHeuristic::Median,
        }
    }
}

impl Args {
    /// Input path, or `None` for stdin.
    pub fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }

    pub fn json_dir(&self) -> &Path {
        self.json_dir.as_deref().unwrap_or(&self.out_dir)
    }

    pub fn data_dir(&self) -> &Path {
        self.data_dir.as_deref().unwrap_or(&self.out_dir)
    }

    /// Applies the layout flags given on the command line on top of `config`.
    pub fn apply_overrides(&self, config: &mut LayoutConfig) {
        if self.no_prune {
            config.prune = false;
        }
        if let Some(depth) = self.prune_depth {
            config.prune_depth = depth;
        }
        if let Some(spacing) = self.node_spacing {
            config.node_spacing = spacing;
        }
        if let Some(spacing) = self.layer_spacing {
            config.layer_spacing = spacing;
        }
        if self.no_parent_centralization {
            config.parent_centralization = false;
        }
        if let Some(sweeps) = self.max_sweeps {
            config.max_sweeps = sweeps;
        }
        if let Some(heuristic) = self.heuristic {
            config.heuristic = heuristic.into();
        }
    }
}
