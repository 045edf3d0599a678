//! Relationship graph construction from raw follow observations

use crate::graph::undirected::{NodeId, UndirectedGraph};
use std::collections::{BTreeMap, BTreeSet};

/// Build the undirected relationship graph from raw directed observations.
///
/// `observations` maps each observed account to the set of accounts that
/// follow it; `roots` is the set of tracked seed accounts. An observed
/// follower only becomes an edge when it is itself tracked (a root or an
/// observed account), so the graph stays within the accounts of interest.
///
/// A single observed direction is enough to create the undirected edge;
/// mutual follows are not required. Self-referential observations are
/// dropped rather than stored as self-loops.
pub fn build_graph(
    observations: &BTreeMap<NodeId, BTreeSet<NodeId>>,
    roots: &BTreeSet<NodeId>,
) -> UndirectedGraph {
    let tracked: BTreeSet<&str> = roots
        .iter()
        .map(String::as_str)
        .chain(observations.keys().map(String::as_str))
        .collect();

    let mut graph = UndirectedGraph::new();
    for (subject, followers) in observations {
        for follower in followers {
            if !tracked.contains(follower.as_str()) {
                continue;
            }
            if follower == subject {
                // observed following itself; keep the node, drop the loop
                graph.add_node(subject);
                continue;
            }
            graph.add_edge(follower, subject);
        }
    }
    graph
}
