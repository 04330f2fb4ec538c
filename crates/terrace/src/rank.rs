//! Layer assignment (longest path).
//!
//! A node's layer is one more than the deepest of its parents, and never less than the `level`
//! hint the producer attached to it. Sources without a hint land on layer 0.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use terrace_graph::{Graph, NodeId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layering {
    layer_of: Vec<usize>,
    ranks: Vec<usize>,
    layers: Vec<Vec<usize>>,
}

impl Layering {
    /// Layer of the node at index `ix`.
    pub fn layer_of(&self, ix: usize) -> Option<usize> {
        self.layer_of.get(ix).copied()
    }

    /// Occupied layers, top to bottom; each holds node indices in insertion order. Layers no
    /// node landed on have no bucket, so `layers()[i]` sits on layer `ranks()[i]`.
    pub fn layers(&self) -> &[Vec<usize>] {
        &self.layers
    }

    /// Layer number of each bucket in [`Layering::layers`], strictly increasing.
    pub fn ranks(&self) -> &[usize] {
        &self.ranks
    }

    /// Number of occupied layers.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn max_layer(&self) -> Option<usize> {
        self.ranks.last().copied()
    }

    pub fn node_count(&self) -> usize {
        self.layer_of.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done(usize),
}

struct Frame {
    node: usize,
    cursor: usize,
}

/// Assigns every node of `graph` a layer such that `layer(u) < layer(v)` for each edge `u -> v`.
///
/// The walk is an explicit-stack depth-first search over predecessors, so deep chains do not
/// grow the call stack. Reaching a node that is still in progress means the graph has a cycle.
pub fn assign_layers(graph: &Graph) -> Result<Layering> {
    let n = graph.node_count();
    let mut marks: Vec<Mark> = vec![Mark::Unvisited; n];
    let mut stack: Vec<Frame> = Vec::new();

    for root in 0..n {
        if marks[root] != Mark::Unvisited {
            continue;
        }
        marks[root] = Mark::InProgress;
        stack.push(Frame {
            node: root,
            cursor: 0,
        });

        while let Some(frame) = stack.last_mut() {
            let v = frame.node;
            if let Some(&u) = graph.predecessors(v).get(frame.cursor) {
                frame.cursor += 1;
                match marks[u] {
                    Mark::Done(_) => {}
                    Mark::Unvisited => {
                        marks[u] = Mark::InProgress;
                        stack.push(Frame { node: u, cursor: 0 });
                    }
                    Mark::InProgress => return Err(cycle_error(graph, &stack, u)),
                }
                continue;
            }

            let floor = graph
                .node(v)
                .and_then(|node| node.level)
                .map_or(0, |level| level as usize);
            let layer = graph
                .predecessors(v)
                .iter()
                .filter_map(|&u| match marks[u] {
                    Mark::Done(l) => Some(l.saturating_add(1)),
                    _ => None,
                })
                .fold(floor, usize::max);
            marks[v] = Mark::Done(layer);
            stack.pop();
        }
    }

    let layer_of: Vec<usize> = marks
        .into_iter()
        .map(|m| match m {
            Mark::Done(l) => l,
            _ => 0,
        })
        .collect();

    let mut buckets: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for (ix, &layer) in layer_of.iter().enumerate() {
        buckets.entry(layer).or_default().push(ix);
    }
    let (ranks, layers): (Vec<usize>, Vec<Vec<usize>>) = buckets.into_iter().unzip();

    tracing::debug!(nodes = n, layers = layers.len(), "assigned layers");

    Ok(Layering {
        layer_of,
        ranks,
        layers,
    })
}

// The stack runs from a descendant up through its ancestors, so the cycle in edge direction is
// `u`, then the stack from the top back down to just above `u`.
fn cycle_error(graph: &Graph, stack: &[Frame], u: usize) -> Error {
    let id_of = |ix: usize| -> NodeId {
        graph
            .node(ix)
            .map(|n| n.id.clone())
            .unwrap_or(NodeId::Int(-1))
    };

    let start = stack.iter().rposition(|f| f.node == u).unwrap_or(0);
    let mut cycle: Vec<NodeId> = vec![id_of(u)];
    cycle.extend(
        stack
            .iter()
            .skip(start + 1)
            .rev()
            .map(|f| id_of(f.node)),
    );

    Error::CyclicGraph {
        node: id_of(u),
        cycle,
    }
}
