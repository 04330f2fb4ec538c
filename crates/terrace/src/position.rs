//! Coordinate assignment.
//!
//! `y` comes straight from the layer. `x` starts from the order within the layer and, with
//! parent centralization on, is pulled toward the middle of each node's children. The
//! left-to-right order fixed by crossing reduction is never changed here.

use crate::config::PositionOptions;
use crate::model::Point;
use crate::order::LayerOrder;
use crate::rank::Layering;
use terrace_graph::Graph;

/// Computes a position for every node, indexed by node index.
pub fn assign_coordinates(
    g: &Graph,
    layering: &Layering,
    order: &LayerOrder,
    opts: &PositionOptions,
) -> Vec<Point> {
    let n = g.node_count();
    let mut xs: Vec<f64> = vec![0.0; n];
    for layer in order.layers() {
        for (pos, &v) in layer.iter().enumerate() {
            if let Some(x) = xs.get_mut(v) {
                *x = pos as f64 * opts.node_spacing;
            }
        }
    }

    if opts.parent_centralization {
        for _ in 0..opts.centering_passes {
            // Deepest layer first: children settle before their parents read them.
            for layer in order.layers().iter().rev() {
                center_layer(g, layer, &mut xs, opts.node_spacing);
            }
        }
    }

    for layer in order.layers() {
        resolve_overlaps(layer, &mut xs, opts.node_spacing);
    }

    (0..n)
        .map(|ix| {
            let layer = layering.layer_of(ix).unwrap_or(0);
            Point::new(xs[ix], layer as f64 * opts.layer_spacing)
        })
        .collect()
}

fn center_layer(g: &Graph, layer: &[usize], xs: &mut [f64], spacing: f64) {
    let targets: Vec<f64> = layer
        .iter()
        .map(|&v| {
            let children = g.successors(v);
            if children.is_empty() {
                xs[v]
            } else {
                children.iter().map(|&c| xs[c]).sum::<f64>() / children.len() as f64
            }
        })
        .collect();
    for (&v, &target) in layer.iter().zip(&targets) {
        xs[v] = target;
    }

    resolve_overlaps(layer, xs, spacing);

    for (&v, &target) in layer.iter().zip(&targets) {
        let delta = xs[v] - target;
        if delta.abs() > f64::EPSILON && !g.successors(v).is_empty() {
            shift_owned_subtree(g, v, delta, xs);
        }
    }
}

/// Moves every descendant that `v` owns exclusively (reached only through single-parent
/// nodes) by `delta`, keeping `v` centred over them after it was pushed aside.
fn shift_owned_subtree(g: &Graph, v: usize, delta: f64, xs: &mut [f64]) {
    let owned = |c: &usize| g.in_degree(*c) == 1;
    let mut stack: Vec<usize> = g.successors(v).iter().copied().filter(owned).collect();
    while let Some(c) = stack.pop() {
        xs[c] += delta;
        stack.extend(g.successors(c).iter().copied().filter(owned));
    }
}

/// Spreads one layer so adjacent nodes are at least `spacing` apart, without reordering.
///
/// The result is the midpoint of a left-to-right push and a right-to-left push, so a layer that
/// already satisfies the spacing is left untouched and conflicts are split evenly.
pub fn resolve_overlaps(layer: &[usize], xs: &mut [f64], spacing: f64) {
    if layer.len() < 2 {
        return;
    }

    let desired: Vec<f64> = layer.iter().map(|&v| xs[v]).collect();

    let mut left = desired.clone();
    for i in 1..left.len() {
        left[i] = left[i].max(left[i - 1] + spacing);
    }
    let mut right = desired;
    for i in (0..right.len() - 1).rev() {
        right[i] = right[i].min(right[i + 1] - spacing);
    }

    let mut prev: Option<f64> = None;
    for (i, &v) in layer.iter().enumerate() {
        let mut x = (left[i] + right[i]) / 2.0;
        if let Some(p) = prev.filter(|p| x - p < spacing) {
            x = p + spacing;
        }
        xs[v] = x;
        prev = Some(x);
    }
}
