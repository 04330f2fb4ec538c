//! Node ordering / crossing minimization.
//!
//! Layers are swept alternately top-to-bottom and bottom-to-top, each layer re-sorted by the
//! median or barycenter of its neighbours in the layer just fixed. Sweeps stop when a full pass
//! leaves the order unchanged or the sweep cap is reached.

mod cross_count;
mod layer_order;
mod sweep;

pub use cross_count::cross_count;
pub use layer_order::LayerOrder;
pub use sweep::{Relationship, reorder_layer, sort_key, sweep_down, sweep_up};

use crate::config::OrderOptions;
use crate::rank::Layering;
use terrace_graph::Graph;

#[derive(Debug, Clone, PartialEq)]
pub struct Ordering {
    /// The ordering with the fewest crossings seen.
    pub order: LayerOrder,
    pub crossings: usize,
    /// Number of down+up sweep pairs run.
    pub sweeps: usize,
    /// `false` when the sweep cap was hit before the order stabilized.
    pub converged: bool,
}

pub fn reduce_crossings(g: &Graph, layering: &Layering, opts: &OrderOptions) -> Ordering {
    let initial = LayerOrder::from_layering(layering);
    let initial_cc = cross_count(g, &initial);

    if !opts.edge_minimization {
        return Ordering {
            order: initial,
            crossings: initial_cc,
            sweeps: 0,
            converged: true,
        };
    }

    let mut best_cc = initial_cc;
    let mut best = initial.clone();
    let mut current = initial;
    let mut sweeps: usize = 0;
    let mut converged = false;

    while sweeps < opts.max_sweeps {
        let next = sweep_up(
            g,
            sweep_down(g, current.clone(), opts.heuristic),
            opts.heuristic,
        );
        sweeps += 1;

        let cc = cross_count(g, &next);
        if cc < best_cc {
            best_cc = cc;
            best = next.clone();
        }
        if next == current {
            converged = true;
            break;
        }
        current = next;
    }

    if converged {
        tracing::debug!(sweeps, crossings = best_cc, "crossing reduction converged");
    } else {
        tracing::warn!(
            sweeps,
            crossings = best_cc,
            "crossing reduction hit the sweep cap before stabilizing"
        );
    }

    Ordering {
        order: best,
        crossings: best_cc,
        sweeps,
        converged,
    }
}
