#![forbid(unsafe_code)]

//! Headless layered DAG layout.
//!
//! [`layout`] runs the whole pipeline over a [`Graph`]: structural pruning ([`prune`]), layer
//! assignment ([`rank`]), crossing reduction ([`order`]) and coordinate assignment
//! ([`position`]). Each stage is also usable on its own; stages read the graph and return plain
//! values, so they can be tested in isolation. [`export`] renders the result into the flat
//! artifacts consumed downstream.

pub use terrace_graph as graph;

pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod order;
pub mod position;
pub mod prune;
pub mod rank;

pub use config::{LayoutConfig, OrderHeuristic, OrderOptions, PositionOptions};
pub use error::{Error, LayoutWarning, Result};
pub use export::{Artifact, Artifacts, Destination, ExportOptions};
pub use model::{ChildCount, LayoutAttributes, Point};
pub use prune::PruneReport;
pub use terrace_graph::{Edge, Graph, GraphInput, Group, Node, NodeId};

use indexmap::IndexMap;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result of a layout run: the pruned graph plus a side-table of derived attributes.
#[derive(Debug, Clone)]
pub struct Layout {
    graph: Graph,
    prune: PruneReport,
    attributes: IndexMap<NodeId, LayoutAttributes>,
    layer_count: usize,
    crossings: usize,
    warnings: Vec<LayoutWarning>,
}

impl Layout {
    /// The graph after pruning. Layout never adds nodes or edges.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }

    pub fn prune_report(&self) -> &PruneReport {
        &self.prune
    }

    /// Derived attributes of every surviving node, in node order.
    pub fn attributes(&self) -> &IndexMap<NodeId, LayoutAttributes> {
        &self.attributes
    }

    pub fn attributes_of(&self, id: &NodeId) -> Option<&LayoutAttributes> {
        self.attributes.get(id)
    }

    pub fn position(&self, id: &NodeId) -> Option<Point> {
        self.attributes.get(id).map(|a| a.position)
    }

    pub fn positions(&self) -> IndexMap<NodeId, Point> {
        self.attributes
            .iter()
            .map(|(id, a)| (id.clone(), a.position))
            .collect()
    }

    /// Number of occupied layers. Layer numbers themselves can be sparse when `level` hints
    /// push nodes down.
    pub fn layer_count(&self) -> usize {
        self.layer_count
    }

    /// Crossings between adjacent layers in the final ordering.
    pub fn crossings(&self) -> usize {
        self.crossings
    }

    pub fn warnings(&self) -> &[LayoutWarning] {
        &self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }
}

/// Lays out `graph`.
///
/// Fails on an invalid configuration or a cycle among the edges that survive pruning. An empty
/// graph and an unstable crossing reduction are reported through [`Layout::warnings`].
pub fn layout(mut graph: Graph, config: &LayoutConfig) -> Result<Layout> {
    config.validate()?;

    let prune = if config.prune {
        prune::prune(&mut graph, config.prune_depth)
    } else {
        PruneReport::unpruned(&graph)
    };

    let mut warnings: Vec<LayoutWarning> = Vec::new();
    if graph.is_empty() {
        tracing::warn!("graph is empty after pruning; producing an empty layout");
        warnings.push(LayoutWarning::EmptyGraph);
        return Ok(Layout {
            graph,
            prune,
            attributes: IndexMap::new(),
            layer_count: 0,
            crossings: 0,
            warnings,
        });
    }

    let layering = rank::assign_layers(&graph)?;
    let ordering = order::reduce_crossings(&graph, &layering, &config.order_options());
    if !ordering.converged {
        warnings.push(LayoutWarning::IterationLimitExceeded {
            sweeps: ordering.sweeps,
        });
    }
    let points = position::assign_coordinates(
        &graph,
        &layering,
        &ordering.order,
        &config.position_options(),
    );

    let order_of = ordering.order.positions();
    let attributes: IndexMap<NodeId, LayoutAttributes> = graph
        .nodes()
        .iter()
        .enumerate()
        .map(|(ix, node)| {
            let attrs = LayoutAttributes {
                child_count: prune.child_count(&node.id),
                layer: layering.layer_of(ix).unwrap_or(0),
                order: order_of.get(ix).copied().flatten().unwrap_or(0),
                position: points.get(ix).copied().unwrap_or_default(),
            };
            (node.id.clone(), attrs)
        })
        .collect();

    tracing::info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        layers = layering.layer_count(),
        crossings = ordering.crossings,
        "layout complete"
    );

    Ok(Layout {
        graph,
        prune,
        attributes,
        layer_count: layering.layer_count(),
        crossings: ordering.crossings,
        warnings,
    })
}
