use terrace_graph::{Edge, Error, Graph, GraphInput, Group, Node, NodeId};

fn chain() -> Graph {
    Graph::new(
        vec![
            Node::new("a", "A").with_level(0),
            Node::new("b", "B").with_level(1),
            Node::new("c", "C").with_level(2),
        ],
        vec![Edge::new("a", "b"), Edge::new("b", "c"), Edge::new("a", "c")],
    )
    .unwrap()
}

#[test]
fn graph_keeps_insertion_order_and_adjacency() {
    let g = chain();
    let ids: Vec<String> = g.nodes().iter().map(|n| n.id.to_string()).collect();
    assert_eq!(ids, ["a", "b", "c"]);

    assert_eq!(g.successors(0), &[1, 2]);
    assert_eq!(g.predecessors(2), &[1, 0]);
    assert_eq!(g.in_degree(0), 0);
    assert_eq!(g.out_degree(0), 2);
    assert_eq!(g.edge_endpoints(), &[(0, 1), (1, 2), (0, 2)]);
}

#[test]
fn graph_out_of_range_index_has_no_neighbors() {
    let g = chain();
    assert!(g.successors(99).is_empty());
    assert!(g.predecessors(99).is_empty());
    assert!(g.node(99).is_none());
}

#[test]
fn graph_rejects_edge_with_missing_endpoint() {
    let err = Graph::new(
        vec![Node::new(1, "one")],
        vec![Edge::new(1, 2)],
    )
    .unwrap_err();
    assert_eq!(
        err,
        Error::DanglingEdge {
            from: NodeId::from(1),
            to: NodeId::from(2),
            missing: NodeId::from(2),
        }
    );
}

#[test]
fn graph_rejects_self_loops_duplicates_and_repeated_ids() {
    assert!(matches!(
        Graph::new(vec![Node::new(1, "x")], vec![Edge::new(1, 1)]),
        Err(Error::SelfLoop { .. })
    ));
    assert!(matches!(
        Graph::new(
            vec![Node::new(1, "x"), Node::new(2, "y")],
            vec![Edge::new(1, 2), Edge::new(1, 2)]
        ),
        Err(Error::DuplicateEdge { .. })
    ));
    assert!(matches!(
        Graph::new(vec![Node::new(1, "x"), Node::new(1, "y")], vec![]),
        Err(Error::DuplicateNode { .. })
    ));
}

#[test]
fn graph_rejects_ids_that_print_the_same() {
    let err = Graph::new(
        vec![Node::new(1, "n"), Node::new("1", "s")],
        vec![Edge::new(1, "1")],
    )
    .unwrap_err();
    assert_eq!(
        err,
        Error::DuplicateNode {
            id: NodeId::from("1")
        }
    );
}

#[test]
fn graph_keeps_numeric_and_string_ids_that_print_differently() {
    let g = Graph::new(vec![Node::new(1, "n"), Node::new("01", "s")], vec![]).unwrap();
    assert_eq!(g.node_count(), 2);
    assert_eq!(g.node_ix(&NodeId::from("01")), Some(1));
    assert_eq!(g.node_ix(&NodeId::from(1)), Some(0));
}

#[test]
fn retain_nodes_drops_edges_touching_removed_nodes() {
    let mut g = chain();
    let retained = g.retain_nodes(|_, n| n.id != NodeId::from("b"));

    assert_eq!(retained.removed_nodes, vec![NodeId::from("b")]);
    assert_eq!(retained.removed_edges, 2);
    assert_eq!(g.node_count(), 2);
    assert_eq!(g.edges(), &[Edge::new("a", "c")]);
    assert_eq!(g.node_ix(&NodeId::from("c")), Some(1));
    assert_eq!(g.successors(0), &[1]);
    assert!(!g.has_node(&NodeId::from("b")));
}

#[test]
fn retain_nodes_keeping_everything_is_a_no_op() {
    let mut g = chain();
    let retained = g.retain_nodes(|_, _| true);
    assert!(retained.removed_nodes.is_empty());
    assert_eq!(g.edge_count(), 3);
}

#[test]
fn graph_input_deserializes_mixed_ids_and_groups() {
    let json = r#"{
        "nodes": [
            {"id": 1, "label": "root", "level": 0, "group": "root"},
            {"id": "x", "label": "cmd", "group": "command"},
            {"id": 3, "label": "plain"}
        ],
        "edges": [{"from": 1, "to": "x"}]
    }"#;
    let input: GraphInput = serde_json::from_str(json).unwrap();
    assert_eq!(input.nodes[0].group, Group::Root);
    assert_eq!(input.nodes[1].group, Group::Other("command".to_string()));
    assert_eq!(input.nodes[1].level, None);
    assert_eq!(input.nodes[2].group.code(), 2);

    let g = Graph::try_from(input).unwrap();
    assert_eq!(g.successors(0), &[1]);
}

#[test]
fn node_serialization_omits_a_missing_level() {
    let node = Node::new(7, "seven").with_group("node");
    assert_eq!(
        serde_json::to_string(&node).unwrap(),
        r#"{"id":7,"label":"seven","group":"node"}"#
    );
}
