use crate::rank::Layering;

/// Left-to-right node order of every layer.
///
/// A plain value: sweeps take one by value and return the next, so two orders can be compared
/// to detect stabilization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayerOrder {
    layers: Vec<Vec<usize>>,
}

impl LayerOrder {
    pub fn new(layers: Vec<Vec<usize>>) -> Self {
        Self { layers }
    }

    /// Starts from the layering's buckets, i.e. node insertion order within each layer.
    pub fn from_layering(layering: &Layering) -> Self {
        Self::new(layering.layers().to_vec())
    }

    pub fn layers(&self) -> &[Vec<usize>] {
        &self.layers
    }

    pub fn layer(&self, ix: usize) -> Option<&[usize]> {
        self.layers.get(ix).map(Vec::as_slice)
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn into_layers(self) -> Vec<Vec<usize>> {
        self.layers
    }

    pub(crate) fn layers_mut(&mut self) -> &mut [Vec<usize>] {
        &mut self.layers
    }

    /// Position of every node within its layer, indexed by node index. Nodes that appear in no
    /// layer map to `None`.
    pub fn positions(&self) -> Vec<Option<usize>> {
        let len = self
            .layers
            .iter()
            .flatten()
            .max()
            .map_or(0, |&max| max + 1);
        let mut out: Vec<Option<usize>> = vec![None; len];
        for layer in &self.layers {
            for (pos, &v) in layer.iter().enumerate() {
                out[v] = Some(pos);
            }
        }
        out
    }
}
