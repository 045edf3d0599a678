//! Undirected graph representation shared by the analysis pipeline

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Opaque account identifier
pub type NodeId = String;

/// An undirected edge, normalized so the smaller endpoint comes first.
///
/// Normalizing at construction makes equality, hashing and ordering
/// independent of the order the endpoints were given in, and the derived
/// `Ord` doubles as the deterministic tie-break order used during
/// community detection.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge(pub NodeId, pub NodeId);

impl Edge {
    pub fn new(a: &str, b: &str) -> Self {
        if a <= b {
            Edge(a.to_string(), b.to_string())
        } else {
            Edge(b.to_string(), a.to_string())
        }
    }
}

/// Simple undirected graph: no self-loops, no parallel edges.
///
/// Adjacency is kept in sorted containers so every iteration over nodes,
/// neighbors or edges is deterministic. Mutation is limited to node/edge
/// insertion and edge removal; everything else treats the graph as a
/// snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndirectedGraph {
    /// Neighbor sets per node; isolated nodes map to an empty set
    adjacency: BTreeMap<NodeId, BTreeSet<NodeId>>,

    /// Number of undirected edges
    edge_count: usize,
}

impl UndirectedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with no incident edges. No-op if already present.
    pub fn add_node(&mut self, id: &str) {
        self.adjacency.entry(id.to_string()).or_default();
    }

    /// Add an undirected edge, creating missing endpoints.
    ///
    /// Self-loops are rejected and duplicate insertions are no-ops; returns
    /// whether the edge set actually grew.
    pub fn add_edge(&mut self, a: &str, b: &str) -> bool {
        if a == b {
            return false;
        }
        let inserted = self
            .adjacency
            .entry(a.to_string())
            .or_default()
            .insert(b.to_string());
        if inserted {
            self.adjacency
                .entry(b.to_string())
                .or_default()
                .insert(a.to_string());
            self.edge_count += 1;
        }
        inserted
    }

    /// Remove an undirected edge; returns whether it was present.
    pub fn remove_edge(&mut self, a: &str, b: &str) -> bool {
        let removed = self
            .adjacency
            .get_mut(a)
            .map(|neighbors| neighbors.remove(b))
            .unwrap_or(false);
        if removed {
            if let Some(neighbors) = self.adjacency.get_mut(b) {
                neighbors.remove(a);
            }
            self.edge_count -= 1;
        }
        removed
    }

    pub fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        self.adjacency
            .get(a)
            .map(|neighbors| neighbors.contains(b))
            .unwrap_or(false)
    }

    /// Neighbor set of a node, if the node exists.
    pub fn neighbors(&self, id: &str) -> Option<&BTreeSet<NodeId>> {
        self.adjacency.get(id)
    }

    /// Number of incident edges; 0 for unknown nodes.
    pub fn degree(&self, id: &str) -> usize {
        self.adjacency.get(id).map_or(0, |neighbors| neighbors.len())
    }

    /// Nodes in sorted order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.adjacency.keys()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Edges in sorted order, each reported once with endpoints ordered.
    pub fn edges(&self) -> impl Iterator<Item = (&NodeId, &NodeId)> {
        self.adjacency.iter().flat_map(|(a, neighbors)| {
            neighbors
                .iter()
                .filter(move |b| a < *b)
                .map(move |b| (a, b))
        })
    }

    /// Subgraph over `keep`: surviving nodes plus the edges whose both
    /// endpoints survive. The input graph is untouched.
    pub fn induced_subgraph(&self, keep: &BTreeSet<NodeId>) -> UndirectedGraph {
        let mut sub = UndirectedGraph::new();
        for id in keep {
            if self.contains(id) {
                sub.add_node(id);
            }
        }
        for (a, b) in self.edges() {
            if keep.contains(a) && keep.contains(b) {
                sub.add_edge(a, b);
            }
        }
        sub
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_is_order_independent() {
        assert_eq!(Edge::new("b", "a"), Edge::new("a", "b"));
        assert!(Edge::new("a", "b") < Edge::new("a", "c"));
    }

    #[test]
    fn add_edge_is_idempotent_and_symmetric() {
        let mut g = UndirectedGraph::new();
        assert!(g.add_edge("a", "b"));
        assert!(!g.add_edge("b", "a"));
        assert_eq!(g.edge_count(), 1);
        assert!(g.has_edge("a", "b"));
        assert!(g.has_edge("b", "a"));
        assert_eq!(g.degree("a"), 1);
        assert_eq!(g.degree("b"), 1);
    }

    #[test]
    fn self_loops_are_rejected() {
        let mut g = UndirectedGraph::new();
        assert!(!g.add_edge("a", "a"));
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn remove_edge_keeps_nodes() {
        let mut g = UndirectedGraph::new();
        g.add_edge("a", "b");
        assert!(g.remove_edge("b", "a"));
        assert!(!g.remove_edge("a", "b"));
        assert_eq!(g.edge_count(), 0);
        assert!(g.contains("a"));
        assert!(g.contains("b"));
    }

    #[test]
    fn edges_are_reported_once_in_order() {
        let mut g = UndirectedGraph::new();
        g.add_edge("c", "a");
        g.add_edge("a", "b");
        let edges: Vec<(String, String)> = g
            .edges()
            .map(|(a, b)| (a.clone(), b.clone()))
            .collect();
        assert_eq!(
            edges,
            vec![
                ("a".to_string(), "b".to_string()),
                ("a".to_string(), "c".to_string()),
            ]
        );
    }

    #[test]
    fn induced_subgraph_drops_outside_edges() {
        let mut g = UndirectedGraph::new();
        g.add_edge("a", "b");
        g.add_edge("b", "c");
        g.add_edge("c", "d");
        let keep: BTreeSet<NodeId> = ["a", "b", "d"].iter().map(|s| s.to_string()).collect();
        let sub = g.induced_subgraph(&keep);
        assert_eq!(sub.node_count(), 3);
        assert_eq!(sub.edge_count(), 1);
        assert!(sub.has_edge("a", "b"));
        assert!(!sub.has_edge("c", "d"));
    }
}
