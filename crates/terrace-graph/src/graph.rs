//! Graph container.
//!
//! Nodes and edges are stored in insertion order and every accessor iterates in that order. Node
//! indices are dense positions into [`Graph::nodes`]; they are invalidated by
//! [`Graph::retain_nodes`].

use crate::{Error, NodeId, Result};
use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Producer-side category of a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Group {
    Root,
    Node,
    /// Any other tag (`command`, ...). The tag text is kept for round-tripping.
    Other(String),
}

impl Group {
    pub fn as_str(&self) -> &str {
        match self {
            Group::Root => "root",
            Group::Node => "node",
            Group::Other(s) => s.as_str(),
        }
    }

    /// Numeric code used by the flat `nodes.dat` export.
    pub fn code(&self) -> u8 {
        match self {
            Group::Root => 0,
            Group::Node => 1,
            Group::Other(_) => 2,
        }
    }
}

impl Default for Group {
    fn default() -> Self {
        Group::Other(String::new())
    }
}

impl From<&str> for Group {
    fn from(value: &str) -> Self {
        match value {
            "root" => Group::Root,
            "node" => Group::Node,
            other => Group::Other(other.to_string()),
        }
    }
}

impl From<String> for Group {
    fn from(value: String) -> Self {
        match value.as_str() {
            "root" => Group::Root,
            "node" => Group::Node,
            _ => Group::Other(value),
        }
    }
}

impl Serialize for Group {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Group {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        String::deserialize(deserializer).map(Group::from)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    #[serde(default)]
    pub label: String,
    /// Depth hint from the producer. Acts as a lower bound on the assigned layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    #[serde(default)]
    pub group: Group,
}

impl Node {
    pub fn new(id: impl Into<NodeId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            level: None,
            group: Group::default(),
        }
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_group(mut self, group: impl Into<Group>) -> Self {
        self.group = group.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
}

impl Edge {
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Raw producer payload: `{ "nodes": [...], "edges": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphInput {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

/// What [`Graph::retain_nodes`] removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Retained {
    pub removed_nodes: Vec<NodeId>,
    pub removed_edges: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    node_index: HashMap<NodeId, usize>,
    edge_ends: Vec<(usize, usize)>,
    out_adj: Vec<Vec<usize>>,
    in_adj: Vec<Vec<usize>>,
}

impl Graph {
    /// Builds a validated graph.
    ///
    /// Rejects duplicate node ids, edges with a missing endpoint, self-loops and repeated
    /// `(from, to)` pairs. Ids count as duplicates when they print the same, so `1` and `"1"`
    /// cannot coexist: every export keys nodes by their printed id.
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self> {
        let mut node_index: HashMap<NodeId, usize> = HashMap::default();
        let mut printed: HashSet<String> = HashSet::default();
        for (ix, node) in nodes.iter().enumerate() {
            let collides = !printed.insert(node.id.to_string());
            if node_index.insert(node.id.clone(), ix).is_some() || collides {
                return Err(Error::DuplicateNode {
                    id: node.id.clone(),
                });
            }
        }

        let mut seen: HashSet<(usize, usize)> = HashSet::default();
        let mut edge_ends: Vec<(usize, usize)> = Vec::with_capacity(edges.len());
        for e in &edges {
            let Some(&v) = node_index.get(&e.from) else {
                return Err(dangling(e, &e.from));
            };
            let Some(&w) = node_index.get(&e.to) else {
                return Err(dangling(e, &e.to));
            };
            if v == w {
                return Err(Error::SelfLoop { id: e.from.clone() });
            }
            if !seen.insert((v, w)) {
                return Err(Error::DuplicateEdge {
                    from: e.from.clone(),
                    to: e.to.clone(),
                });
            }
            edge_ends.push((v, w));
        }

        let mut out_adj: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
        let mut in_adj: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
        for &(v, w) in &edge_ends {
            out_adj[v].push(w);
            in_adj[w].push(v);
        }

        Ok(Self {
            nodes,
            edges,
            node_index,
            edge_ends,
            out_adj,
            in_adj,
        })
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, ix: usize) -> Option<&Node> {
        self.nodes.get(ix)
    }

    pub fn node_ix(&self, id: &NodeId) -> Option<usize> {
        self.node_index.get(id).copied()
    }

    pub fn node_by_id(&self, id: &NodeId) -> Option<&Node> {
        self.node_ix(id).and_then(|ix| self.nodes.get(ix))
    }

    pub fn has_node(&self, id: &NodeId) -> bool {
        self.node_index.contains_key(id)
    }

    /// `(from, to)` node indices of every edge, in edge insertion order.
    pub fn edge_endpoints(&self) -> &[(usize, usize)] {
        &self.edge_ends
    }

    /// Direct children of `ix` (targets of its outgoing edges), in edge insertion order.
    pub fn successors(&self, ix: usize) -> &[usize] {
        self.out_adj.get(ix).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Direct parents of `ix` (sources of its incoming edges), in edge insertion order.
    pub fn predecessors(&self, ix: usize) -> &[usize] {
        self.in_adj.get(ix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn in_degree(&self, ix: usize) -> usize {
        self.predecessors(ix).len()
    }

    pub fn out_degree(&self, ix: usize) -> usize {
        self.successors(ix).len()
    }

    /// Keeps only the nodes for which `keep(ix, node)` returns `true`.
    ///
    /// Every edge with a removed endpoint is removed as well, so the graph stays closed: all
    /// remaining edges reference remaining nodes. Node indices are renumbered densely.
    pub fn retain_nodes<F>(&mut self, mut keep: F) -> Retained
    where
        F: FnMut(usize, &Node) -> bool,
    {
        let mask: Vec<bool> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(ix, n)| keep(ix, n))
            .collect();
        if mask.iter().all(|&k| k) {
            return Retained::default();
        }

        let mut removed_nodes: Vec<NodeId> = Vec::new();
        let mut remap: Vec<Option<usize>> = Vec::with_capacity(self.nodes.len());
        let mut nodes: Vec<Node> = Vec::with_capacity(self.nodes.len());
        for (node, kept) in std::mem::take(&mut self.nodes).into_iter().zip(&mask) {
            if *kept {
                remap.push(Some(nodes.len()));
                nodes.push(node);
            } else {
                remap.push(None);
                removed_nodes.push(node.id);
            }
        }

        let mut edges: Vec<Edge> = Vec::with_capacity(self.edges.len());
        let mut edge_ends: Vec<(usize, usize)> = Vec::with_capacity(self.edges.len());
        let mut removed_edges = 0usize;
        for (edge, &(v, w)) in std::mem::take(&mut self.edges)
            .into_iter()
            .zip(&self.edge_ends)
        {
            match (remap[v], remap[w]) {
                (Some(v), Some(w)) => {
                    edges.push(edge);
                    edge_ends.push((v, w));
                }
                _ => removed_edges += 1,
            }
        }

        let mut out_adj: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
        let mut in_adj: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
        for &(v, w) in &edge_ends {
            out_adj[v].push(w);
            in_adj[w].push(v);
        }

        self.node_index = nodes
            .iter()
            .enumerate()
            .map(|(ix, n)| (n.id.clone(), ix))
            .collect();
        self.nodes = nodes;
        self.edges = edges;
        self.edge_ends = edge_ends;
        self.out_adj = out_adj;
        self.in_adj = in_adj;

        Retained {
            removed_nodes,
            removed_edges,
        }
    }

    pub fn into_input(self) -> GraphInput {
        GraphInput {
            nodes: self.nodes,
            edges: self.edges,
        }
    }
}

impl TryFrom<GraphInput> for Graph {
    type Error = Error;

    fn try_from(input: GraphInput) -> Result<Self> {
        Graph::new(input.nodes, input.edges)
    }
}

fn dangling(e: &Edge, missing: &NodeId) -> Error {
    Error::DanglingEdge {
        from: e.from.clone(),
        to: e.to.clone(),
        missing: missing.clone(),
    }
}
