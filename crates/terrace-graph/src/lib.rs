#![forbid(unsafe_code)]

//! Graph model shared by every `terrace` layout stage.
//!
//! A [`Graph`] owns the producer-supplied [`Node`]s and [`Edge`]s in insertion order. Stages never
//! add nodes or edges: they remove them through [`Graph::retain_nodes`] or keep their derived
//! state in side-tables indexed by node position.

mod error;
mod graph;
mod id;

pub use error::{Error, Result};
pub use graph::{Edge, Graph, GraphInput, Group, Node, Retained};
pub use id::NodeId;
