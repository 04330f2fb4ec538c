use super::LayerOrder;
use rustc_hash::FxHashMap as HashMap;
use terrace_graph::Graph;

/// Number of edge crossings between every pair of consecutive occupied layers.
///
/// Edges that skip over an occupied layer are not counted.
pub fn cross_count(g: &Graph, order: &LayerOrder) -> usize {
    let layers = order.layers();
    let mut cc: usize = 0;
    for i in 1..layers.len() {
        cc += two_layer_cross_count(g, &layers[i - 1], &layers[i]);
    }
    cc
}

// Accumulator tree over the south positions (Barth, Jünger & Mutzel).
fn two_layer_cross_count(g: &Graph, north: &[usize], south: &[usize]) -> usize {
    if south.is_empty() {
        return 0;
    }

    let south_pos: HashMap<usize, usize> = south.iter().enumerate().map(|(i, &v)| (v, i)).collect();

    let mut south_entries: Vec<usize> = Vec::new();
    for &v in north {
        let mut entries: Vec<usize> = g
            .successors(v)
            .iter()
            .filter_map(|w| south_pos.get(w).copied())
            .collect();
        entries.sort_unstable();
        south_entries.extend(entries);
    }

    let mut first_index: usize = 1;
    while first_index < south.len() {
        first_index <<= 1;
    }
    let tree_size = 2 * first_index - 1;
    first_index -= 1;
    let mut tree: Vec<usize> = vec![0; tree_size];

    let mut cc: usize = 0;
    for pos in south_entries {
        let mut index = pos + first_index;
        tree[index] += 1;
        let mut weight_sum: usize = 0;
        while index > 0 {
            if index % 2 == 1 {
                weight_sum += tree[index + 1];
            }
            index = (index - 1) >> 1;
            tree[index] += 1;
        }
        cc += weight_sum;
    }

    cc
}
