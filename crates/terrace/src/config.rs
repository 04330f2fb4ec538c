//! Layout configuration.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Key used to sort a layer during a crossing-reduction sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderHeuristic {
    /// Mean position of the neighbours in the adjacent layer.
    #[default]
    Barycenter,
    /// Median position of the neighbours; the two middle values are averaged for even counts.
    Median,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LayoutConfig {
    pub prune: bool,
    /// Depth `D` of the shallow entries whose bare leaves get pruned.
    pub prune_depth: u32,
    pub layer_spacing: f64,
    pub node_spacing: f64,
    pub edge_minimization: bool,
    pub heuristic: OrderHeuristic,
    pub max_sweeps: usize,
    pub parent_centralization: bool,
    pub centering_passes: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            prune: true,
            prune_depth: 1,
            layer_spacing: 150.0,
            node_spacing: 140.0,
            edge_minimization: true,
            heuristic: OrderHeuristic::Barycenter,
            max_sweeps: 32,
            parent_centralization: true,
            centering_passes: 4,
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("layer-spacing", self.layer_spacing),
            ("node-spacing", self.node_spacing),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidConfig {
                    message: format!("{name} must be a positive number, got {value}"),
                });
            }
        }
        Ok(())
    }

    pub fn order_options(&self) -> OrderOptions {
        OrderOptions {
            edge_minimization: self.edge_minimization,
            heuristic: self.heuristic,
            max_sweeps: self.max_sweeps,
        }
    }

    pub fn position_options(&self) -> PositionOptions {
        PositionOptions {
            layer_spacing: self.layer_spacing,
            node_spacing: self.node_spacing,
            parent_centralization: self.parent_centralization,
            centering_passes: self.centering_passes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderOptions {
    pub edge_minimization: bool,
    pub heuristic: OrderHeuristic,
    pub max_sweeps: usize,
}

impl Default for OrderOptions {
    fn default() -> Self {
        LayoutConfig::default().order_options()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionOptions {
    pub layer_spacing: f64,
    pub node_spacing: f64,
    pub parent_centralization: bool,
    pub centering_passes: usize,
}

impl Default for PositionOptions {
    fn default() -> Self {
        LayoutConfig::default().position_options()
    }
}
