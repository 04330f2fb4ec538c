//! Structural pruning.
//!
//! Producers emit a lot of shallow entries that only carry a single bare leaf. A node at depth `D`
//! with no incoming edges is such an entry; its targets are marked prunable and dropped unless
//! they sit deeper than `D + 1`. Nodes that are never marked are always kept.

use crate::model::ChildCount;
use indexmap::IndexMap;
use terrace_graph::{Graph, NodeId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PruneReport {
    /// Child count of every inspected node, dropped ones included, in node order.
    pub child_counts: IndexMap<NodeId, ChildCount>,
    pub removed_nodes: Vec<NodeId>,
    pub removed_edges: usize,
}

impl PruneReport {
    /// Report for a graph that was not pruned: plain incoming-edge counts, nothing removed.
    pub fn unpruned(graph: &Graph) -> Self {
        Self {
            child_counts: collect_counts(graph, child_counts(graph)),
            removed_nodes: Vec::new(),
            removed_edges: 0,
        }
    }

    pub fn child_count(&self, id: &NodeId) -> ChildCount {
        self.child_counts.get(id).copied().unwrap_or_default()
    }
}

/// Incoming-edge count of every node, indexed by node position.
pub fn child_counts(graph: &Graph) -> Vec<ChildCount> {
    (0..graph.node_count())
        .map(|ix| ChildCount::Count(graph.in_degree(ix)))
        .collect()
}

/// Child counts with the targets of bare depth-`depth` entries replaced by
/// [`ChildCount::Prunable`].
///
/// A bare entry has no incoming edges, so it is never itself a marked target and the result
/// does not depend on edge order.
pub fn mark_prunable(graph: &Graph, depth: u32) -> Vec<ChildCount> {
    let mut counts = child_counts(graph);
    for &(from, to) in graph.edge_endpoints() {
        let from_level = graph.node(from).and_then(|n| n.level);
        if graph.in_degree(from) == 0 && from_level == Some(depth) {
            counts[to] = ChildCount::Prunable;
        }
    }
    counts
}

/// Removes prunable nodes in place, along with every edge touching them.
pub fn prune(graph: &mut Graph, depth: u32) -> PruneReport {
    let counts = mark_prunable(graph, depth);
    let keep_below = depth.saturating_add(1);

    let child_counts = collect_counts(graph, counts.clone());
    let retained = graph.retain_nodes(|ix, node| {
        let prunable = counts.get(ix).is_some_and(|c| c.is_prunable());
        !prunable || node.level.is_some_and(|level| level > keep_below)
    });

    tracing::debug!(
        depth,
        removed_nodes = retained.removed_nodes.len(),
        removed_edges = retained.removed_edges,
        "pruned graph"
    );

    PruneReport {
        child_counts,
        removed_nodes: retained.removed_nodes,
        removed_edges: retained.removed_edges,
    }
}

fn collect_counts(graph: &Graph, counts: Vec<ChildCount>) -> IndexMap<NodeId, ChildCount> {
    graph
        .nodes()
        .iter()
        .zip(counts)
        .map(|(n, c)| (n.id.clone(), c))
        .collect()
}
