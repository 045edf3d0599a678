//! Degree-based pruning of low-connectivity noise

use crate::graph::undirected::{NodeId, UndirectedGraph};
use std::collections::BTreeSet;

/// Return the induced subgraph over nodes whose degree in `graph` meets
/// `min_degree`.
///
/// Degrees are measured against the input graph's full edge set, so a node
/// kept by the threshold can still lose edges to discarded neighbors. The
/// input graph is never mutated; if nothing passes the threshold the result
/// is an empty graph, which is a valid outcome rather than an error.
pub fn filter_by_degree(graph: &UndirectedGraph, min_degree: usize) -> UndirectedGraph {
    let keep: BTreeSet<NodeId> = graph
        .nodes()
        .filter(|id| graph.degree(id) >= min_degree)
        .cloned()
        .collect();
    graph.induced_subgraph(&keep)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star() -> UndirectedGraph {
        let mut g = UndirectedGraph::new();
        for leaf in ["b", "c", "d", "e"] {
            g.add_edge("a", leaf);
        }
        g
    }

    #[test]
    fn star_prunes_to_lone_center() {
        let pruned = filter_by_degree(&star(), 2);
        assert_eq!(pruned.node_count(), 1);
        assert_eq!(pruned.edge_count(), 0);
        assert!(pruned.contains("a"));
    }

    #[test]
    fn input_graph_is_untouched() {
        let g = star();
        let before = g.clone();
        let _ = filter_by_degree(&g, 2);
        assert_eq!(g, before);
    }

    #[test]
    fn pruning_is_idempotent_at_fixed_point() {
        let g = star();
        let once = filter_by_degree(&g, 2);
        let twice = filter_by_degree(&once, 2);
        assert_eq!(once, twice);
    }

    #[test]
    fn threshold_zero_keeps_everything() {
        let g = star();
        let pruned = filter_by_degree(&g, 0);
        assert_eq!(pruned, g);
    }

    #[test]
    fn unreachable_threshold_yields_empty_graph() {
        let pruned = filter_by_degree(&star(), 10);
        assert_eq!(pruned.node_count(), 0);
        assert_eq!(pruned.edge_count(), 0);
    }
}
