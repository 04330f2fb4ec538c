//! Property tests over random DAGs.
//!
//! Edges only point from a lower to a higher node index, so every generated graph is acyclic.

use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use terrace::graph::{Edge, Graph, Node};
use terrace::{LayoutConfig, OrderHeuristic, layout};

fn dag() -> impl Strategy<Value = Graph> {
    (1usize..40)
        .prop_flat_map(|n| {
            (
                prop::collection::vec(prop::option::of(0u32..4), n),
                prop::collection::vec((0..n, 0..n), 0..(n * 2)),
            )
        })
        .prop_map(|(levels, pairs)| {
            let nodes = levels
                .iter()
                .enumerate()
                .map(|(i, level)| {
                    let node = Node::new(i as i64, format!("n{i}"));
                    match level {
                        Some(level) => node.with_level(*level),
                        None => node,
                    }
                })
                .collect();
            let pairs: BTreeSet<(usize, usize)> = pairs.into_iter().filter(|(v, w)| v < w).collect();
            let edges = pairs
                .into_iter()
                .map(|(v, w)| Edge::new(v as i64, w as i64))
                .collect();
            Graph::new(nodes, edges).unwrap()
        })
}

fn config(heuristic: OrderHeuristic) -> LayoutConfig {
    LayoutConfig {
        prune: false,
        heuristic,
        ..Default::default()
    }
}

proptest! {
    #[test]
    fn prop_edges_point_to_deeper_layers(g in dag()) {
        let out = layout(g, &config(OrderHeuristic::Barycenter)).unwrap();
        for edge in out.graph().edges() {
            let from = out.attributes_of(&edge.from).unwrap();
            let to = out.attributes_of(&edge.to).unwrap();
            prop_assert!(from.layer < to.layer);
            prop_assert!(from.position.y < to.position.y);
        }
        for node in out.graph().nodes() {
            let attrs = out.attributes_of(&node.id).unwrap();
            prop_assert!(attrs.layer >= node.level.unwrap_or(0) as usize);
        }
    }

    #[test]
    fn prop_nodes_in_a_layer_keep_their_spacing(
        g in dag(),
        median in any::<bool>(),
    ) {
        let heuristic = if median { OrderHeuristic::Median } else { OrderHeuristic::Barycenter };
        let cfg = config(heuristic);
        let out = layout(g, &cfg).unwrap();

        let mut by_layer: BTreeMap<usize, Vec<(usize, f64)>> = BTreeMap::new();
        for attrs in out.attributes().values() {
            by_layer.entry(attrs.layer).or_default().push((attrs.order, attrs.position.x));
        }
        prop_assert_eq!(by_layer.len(), out.layer_count());
        for layer in by_layer.values_mut() {
            layer.sort_by_key(|(order, _)| *order);
            for pair in layer.windows(2) {
                prop_assert!(pair[1].1 - pair[0].1 >= cfg.node_spacing - 1e-6);
            }
        }
    }

    #[test]
    fn prop_layout_is_deterministic(g in dag()) {
        let cfg = config(OrderHeuristic::Barycenter);
        let first = layout(g.clone(), &cfg).unwrap();
        let second = layout(g, &cfg).unwrap();
        prop_assert_eq!(first.attributes(), second.attributes());
        prop_assert_eq!(first.crossings(), second.crossings());
    }
}
