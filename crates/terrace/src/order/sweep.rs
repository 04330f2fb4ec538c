//! Median / barycenter layer sweeps.

use super::LayerOrder;
use crate::config::OrderHeuristic;
use terrace_graph::Graph;

/// Which neighbours a layer is sorted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relationship {
    /// Parents, already ordered above (top-to-bottom sweep).
    InEdges,
    /// Children, already ordered below (bottom-to-top sweep).
    OutEdges,
}

/// Top-to-bottom sweep: layers `1..` are re-sorted by the positions of their parents.
pub fn sweep_down(g: &Graph, order: LayerOrder, heuristic: OrderHeuristic) -> LayerOrder {
    let ranks: Vec<usize> = (1..order.layer_count()).collect();
    sweep(g, order, &ranks, Relationship::InEdges, heuristic)
}

/// Bottom-to-top sweep: layers `..last` are re-sorted by the positions of their children.
pub fn sweep_up(g: &Graph, order: LayerOrder, heuristic: OrderHeuristic) -> LayerOrder {
    let ranks: Vec<usize> = (0..order.layer_count().saturating_sub(1)).rev().collect();
    sweep(g, order, &ranks, Relationship::OutEdges, heuristic)
}

fn sweep(
    g: &Graph,
    mut order: LayerOrder,
    ranks: &[usize],
    relationship: Relationship,
    heuristic: OrderHeuristic,
) -> LayerOrder {
    let mut pos = order.positions();

    for &rank in ranks {
        let Some(layer) = order.layers_mut().get_mut(rank) else {
            continue;
        };

        let keys: Vec<Option<f64>> = layer
            .iter()
            .map(|&v| {
                let neighbors = match relationship {
                    Relationship::InEdges => g.predecessors(v),
                    Relationship::OutEdges => g.successors(v),
                };
                let mut positions: Vec<f64> = neighbors
                    .iter()
                    .filter_map(|&u| pos.get(u).copied().flatten())
                    .map(|p| p as f64)
                    .collect();
                sort_key(heuristic, &mut positions)
            })
            .collect();

        let sorted = reorder_layer(layer, &keys);
        for (p, &v) in sorted.iter().enumerate() {
            if let Some(slot) = pos.get_mut(v) {
                *slot = Some(p);
            }
        }
        *layer = sorted;
    }

    order
}

/// Median or barycenter of the neighbour positions; `None` when there are no neighbours.
pub fn sort_key(heuristic: OrderHeuristic, positions: &mut [f64]) -> Option<f64> {
    if positions.is_empty() {
        return None;
    }
    match heuristic {
        OrderHeuristic::Barycenter => {
            Some(positions.iter().sum::<f64>() / positions.len() as f64)
        }
        OrderHeuristic::Median => {
            positions.sort_by(f64::total_cmp);
            let mid = positions.len() / 2;
            if positions.len() % 2 == 1 {
                Some(positions[mid])
            } else {
                Some((positions[mid - 1] + positions[mid]) / 2.0)
            }
        }
    }
}

/// Re-sorts one layer by `keys` (parallel to `layer`).
///
/// Nodes without a key stay in their slot. Keyed nodes are sorted by `(key, previous position)`
/// and fill the remaining slots left to right, which makes the result independent of anything
/// but the input order.
pub fn reorder_layer(layer: &[usize], keys: &[Option<f64>]) -> Vec<usize> {
    let mut slots: Vec<usize> = Vec::new();
    let mut keyed: Vec<(f64, usize, usize)> = Vec::new();
    for (i, (&v, key)) in layer.iter().zip(keys).enumerate() {
        if let Some(key) = *key {
            slots.push(i);
            keyed.push((key, i, v));
        }
    }
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

    let mut out = layer.to_vec();
    for (slot, (_, _, v)) in slots.into_iter().zip(keyed) {
        out[slot] = v;
    }
    out
}
