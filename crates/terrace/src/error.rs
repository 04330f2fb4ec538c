use terrace_graph::NodeId;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] terrace_graph::Error),

    #[error("graph contains a cycle through node {node}")]
    CyclicGraph {
        node: NodeId,
        /// Node ids along the detected cycle, in edge direction, starting at `node`.
        cycle: Vec<NodeId>,
    },

    #[error("invalid layout configuration: {message}")]
    InvalidConfig { message: String },

    #[error("artifact JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Non-fatal conditions. The layout is still valid when any of these are reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutWarning {
    /// No node survived pruning; every artifact is empty.
    EmptyGraph,
    /// Crossing reduction hit its sweep cap before the order stabilized. The ordering with the
    /// fewest crossings seen so far is used.
    IterationLimitExceeded { sweeps: usize },
}

impl std::fmt::Display for LayoutWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutWarning::EmptyGraph => write!(f, "graph is empty after pruning"),
            LayoutWarning::IterationLimitExceeded { sweeps } => {
                write!(f, "crossing reduction did not stabilize within {sweeps} sweeps")
            }
        }
    }
}
