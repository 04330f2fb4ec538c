use terrace::graph::{Edge, Graph, Node};
use terrace::order::{LayerOrder, cross_count, reduce_crossings, sweep_down, sweep_up};
use terrace::rank::assign_layers;
use terrace::{OrderHeuristic, OrderOptions};

fn graph(ids: &[&str], edges: &[(&str, &str)]) -> Graph {
    Graph::new(
        ids.iter().map(|id| Node::new(*id, *id)).collect(),
        edges.iter().map(|(v, w)| Edge::new(*v, *w)).collect(),
    )
    .unwrap()
}

// a1, a2 on top; b1, b2 below; a1 -> b2 and a2 -> b1 cross once.
fn crossed() -> Graph {
    graph(&["a1", "a2", "b1", "b2"], &[("a1", "b2"), ("a2", "b1")])
}

#[test]
fn cross_count_returns_0_for_an_empty_layering() {
    let g = graph(&[], &[]);
    assert_eq!(cross_count(&g, &LayerOrder::default()), 0);
}

#[test]
fn cross_count_returns_0_for_a_layering_with_no_crossings() {
    let g = graph(&["a1", "a2", "b1", "b2"], &[("a1", "b1"), ("a2", "b2")]);
    assert_eq!(cross_count(&g, &LayerOrder::new(vec![vec![0, 1], vec![2, 3]])), 0);
}

#[test]
fn cross_count_returns_1_for_a_layering_with_1_crossing() {
    let g = crossed();
    assert_eq!(cross_count(&g, &LayerOrder::new(vec![vec![0, 1], vec![2, 3]])), 1);
}

#[test]
fn cross_count_calculates_crossings_across_layers() {
    let g = graph(
        &["a1", "a2", "b1", "b2", "c1", "c2"],
        &[
            ("a1", "b1"),
            ("b1", "c1"),
            ("a2", "b2"),
            ("b2", "c2"),
        ],
    );
    let order = LayerOrder::new(vec![vec![0, 1], vec![3, 2], vec![4, 5]]);
    assert_eq!(cross_count(&g, &order), 2);
}

#[test]
fn cross_count_works_for_graph_1() {
    let g = graph(
        &["a", "b", "c", "d", "e", "f", "i"],
        &[
            ("a", "b"),
            ("b", "c"),
            ("d", "e"),
            ("e", "c"),
            ("a", "f"),
            ("f", "i"),
            ("a", "e"),
        ],
    );
    let layers = |rows: &[&[&str]]| -> LayerOrder {
        LayerOrder::new(
            rows.iter()
                .map(|layer| {
                    layer
                        .iter()
                        .map(|id| g.node_ix(&(*id).into()).unwrap())
                        .collect()
                })
                .collect(),
        )
    };

    let first: [&[&str]; 3] = [&["a", "d"], &["b", "e", "f"], &["c", "i"]];
    assert_eq!(cross_count(&g, &layers(&first)), 1);

    let second: [&[&str]; 3] = [&["d", "a"], &["e", "b", "f"], &["c", "i"]];
    assert_eq!(cross_count(&g, &layers(&second)), 0);
}

#[test]
fn sweep_down_sorts_children_under_their_parents() {
    let g = crossed();
    let order = LayerOrder::new(vec![vec![0, 1], vec![2, 3]]);
    let next = sweep_down(&g, order, OrderHeuristic::Barycenter);
    assert_eq!(next.layers(), &[vec![0, 1], vec![3, 2]]);
}

#[test]
fn sweep_up_sorts_parents_over_their_children() {
    let g = crossed();
    let order = LayerOrder::new(vec![vec![0, 1], vec![2, 3]]);
    let next = sweep_up(&g, order, OrderHeuristic::Median);
    assert_eq!(next.layers(), &[vec![1, 0], vec![2, 3]]);
}

#[test]
fn sweeps_leave_nodes_without_neighbours_in_their_slot() {
    // "lone" has no parent and must stay first in its layer.
    let g = graph(
        &["p1", "p2", "lone", "c1", "c2"],
        &[("p1", "c2"), ("p2", "c1")],
    );
    let order = LayerOrder::new(vec![vec![0, 1], vec![2, 3, 4]]);
    let next = sweep_down(&g, order, OrderHeuristic::Barycenter);
    assert_eq!(next.layers(), &[vec![0, 1], vec![2, 4, 3]]);
}

#[test]
fn reduce_crossings_removes_a_simple_crossing() {
    let g = crossed();
    let layering = assign_layers(&g).unwrap();
    let ordering = reduce_crossings(&g, &layering, &OrderOptions::default());

    assert_eq!(ordering.crossings, 0);
    assert!(ordering.converged);
    assert_eq!(ordering.order.layers(), &[vec![0, 1], vec![3, 2]]);
}

#[test]
fn reduce_crossings_is_deterministic() {
    let g = graph(
        &["r", "a", "b", "c", "x", "y", "z"],
        &[
            ("r", "a"),
            ("r", "b"),
            ("r", "c"),
            ("a", "z"),
            ("b", "y"),
            ("c", "x"),
            ("a", "x"),
        ],
    );
    let layering = assign_layers(&g).unwrap();
    let first = reduce_crossings(&g, &layering, &OrderOptions::default());
    for _ in 0..5 {
        assert_eq!(reduce_crossings(&g, &layering, &OrderOptions::default()), first);
    }
    assert!(first.crossings <= cross_count(&g, &LayerOrder::from_layering(&layering)));
}

#[test]
fn reduce_crossings_without_edge_minimization_keeps_input_order() {
    let g = crossed();
    let layering = assign_layers(&g).unwrap();
    let opts = OrderOptions {
        edge_minimization: false,
        ..Default::default()
    };
    let ordering = reduce_crossings(&g, &layering, &opts);
    assert_eq!(ordering.order, LayerOrder::from_layering(&layering));
    assert_eq!(ordering.crossings, 1);
    assert_eq!(ordering.sweeps, 0);
}

#[test]
fn reduce_crossings_reports_an_exhausted_sweep_cap() {
    let g = crossed();
    let layering = assign_layers(&g).unwrap();
    let opts = OrderOptions {
        max_sweeps: 0,
        ..Default::default()
    };
    let ordering = reduce_crossings(&g, &layering, &opts);
    assert!(!ordering.converged);
    assert_eq!(ordering.sweeps, 0);
    assert_eq!(ordering.order, LayerOrder::from_layering(&layering));
}

#[test]
fn layer_order_positions_index_by_node() {
    let order = LayerOrder::new(vec![vec![2, 0], vec![1]]);
    assert_eq!(order.positions(), vec![Some(1), Some(0), Some(0)]);
}
