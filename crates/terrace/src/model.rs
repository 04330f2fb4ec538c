//! Layout-derived node state.
//!
//! Producer data stays on [`terrace_graph::Node`]; everything computed by the stages lives here,
//! keyed by node id.

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Incoming-edge count computed by the pruner, or the prunable marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildCount {
    Count(usize),
    Prunable,
}

impl ChildCount {
    /// Numeric form used in exports; the prunable marker is `-1`.
    pub fn value(self) -> i64 {
        match self {
            ChildCount::Count(n) => i64::try_from(n).unwrap_or(i64::MAX),
            ChildCount::Prunable => -1,
        }
    }

    pub fn is_prunable(self) -> bool {
        matches!(self, ChildCount::Prunable)
    }
}

impl Default for ChildCount {
    fn default() -> Self {
        ChildCount::Count(0)
    }
}

impl Serialize for ChildCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.value())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutAttributes {
    pub child_count: ChildCount,
    pub layer: usize,
    /// Rank within the layer, left to right.
    pub order: usize,
    pub position: Point,
}
