//! Divisive community detection (Girvan-Newman style)

use crate::cluster::betweenness::edge_betweenness;
use crate::cluster::{metrics, Cluster};
use crate::error::AnalyzerError;
use crate::graph::prune::filter_by_degree;
use crate::graph::{Edge, NodeId, UndirectedGraph};
use std::collections::{BTreeMap, HashMap};

/// Union-Find structure for connected component analysis
pub struct DisjointSets {
    /// parent[i] = parent of node i
    parent: Vec<u32>,

    /// Size of each root's set (union by rank)
    rank: Vec<u32>,
}

impl DisjointSets {
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size as u32).collect(),
            rank: vec![1; size],
        }
    }

    /// Find the root of the set containing x with path compression
    pub fn find(&mut self, x: u32) -> u32 {
        let px = self.parent[x as usize];
        if px != x {
            self.parent[x as usize] = self.find(px);
        }
        self.parent[x as usize]
    }

    /// Union the sets containing x and y
    pub fn union(&mut self, x: u32, y: u32) {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return;
        }
        if self.rank[root_x as usize] > self.rank[root_y as usize] {
            self.parent[root_y as usize] = root_x;
            self.rank[root_x as usize] += self.rank[root_y as usize];
        } else {
            self.parent[root_x as usize] = root_y;
            self.rank[root_y as usize] += self.rank[root_x as usize];
        }
    }
}

/// Connected components of `graph`, each as a sorted member list.
///
/// Components are keyed by union-find root, so the order is stable for a
/// given graph; isolated nodes form singleton components.
pub fn connected_components(graph: &UndirectedGraph) -> Vec<Vec<NodeId>> {
    let nodes: Vec<&NodeId> = graph.nodes().collect();
    let index: HashMap<&str, u32> = nodes
        .iter()
        .enumerate()
        .map(|(i, id)| (id.as_str(), i as u32))
        .collect();

    let mut sets = DisjointSets::new(nodes.len());
    for (a, b) in graph.edges() {
        sets.union(index[a.as_str()], index[b.as_str()]);
    }

    let mut groups: BTreeMap<u32, Vec<NodeId>> = BTreeMap::new();
    for (i, id) in nodes.iter().enumerate() {
        let root = sets.find(i as u32);
        groups.entry(root).or_default().push((*id).clone());
    }
    groups.into_values().collect()
}

/// Partition `graph` into at least `target_clusters` connected components
/// by repeatedly removing the edge with the highest betweenness.
///
/// Works on a private copy, so the input stays usable for reporting.
/// Betweenness is recomputed after every removal because each removal
/// changes the shortest-path structure of the remainder. Ties on the
/// maximum score go to the lexicographically smallest edge, which makes
/// the whole run reproducible.
///
/// Terminates early when no edges remain; sparse graphs can therefore end
/// with fewer components than requested, and severing one edge can also
/// overshoot the target. Whatever partition is current at termination is
/// returned.
pub fn detect(graph: &UndirectedGraph, target_clusters: usize) -> Result<Vec<Cluster>, AnalyzerError> {
    if target_clusters == 0 {
        return Err(AnalyzerError::InvalidParameter(
            "target cluster count must be positive".to_string(),
        ));
    }

    let mut working = graph.clone();
    let mut components = connected_components(&working);
    log::debug!(
        "Starting detection with {} nodes, {} edges, {} components (target {})",
        working.node_count(),
        working.edge_count(),
        components.len(),
        target_clusters
    );

    let mut removals = 0usize;
    while components.len() < target_clusters && working.edge_count() > 0 {
        let scores = edge_betweenness(&working);
        let best = scores
            .iter()
            .max_by(|a, b| a.1.total_cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(edge, score)| (edge.clone(), *score));
        let Some((edge, score)) = best else { break };

        working.remove_edge(&edge.0, &edge.1);
        removals += 1;
        components = connected_components(&working);
        log::debug!(
            "Removed edge {:?} (betweenness {:.3}), now {} components",
            edge,
            score,
            components.len()
        );
    }

    log::info!(
        "Detection finished after {} edge removals with {} components",
        removals,
        components.len()
    );
    Ok(build_clusters(&working, components))
}

/// Prune low-degree noise, then partition what remains.
///
/// Returns the pruned graph alongside the clusters so callers can report
/// node and edge counts before and after detection.
pub fn detect_communities(
    graph: &UndirectedGraph,
    min_degree: usize,
    target_clusters: usize,
) -> Result<(UndirectedGraph, Vec<Cluster>), AnalyzerError> {
    if target_clusters == 0 {
        return Err(AnalyzerError::InvalidParameter(
            "target cluster count must be positive".to_string(),
        ));
    }

    let pruned = filter_by_degree(graph, min_degree);
    log::info!(
        "Pruned graph (min degree {}): {} of {} nodes, {} of {} edges kept",
        min_degree,
        pruned.node_count(),
        graph.node_count(),
        pruned.edge_count(),
        graph.edge_count()
    );

    let clusters = detect(&pruned, target_clusters)?;
    Ok((pruned, clusters))
}

/// Copy each component out of the working graph as an independent cluster,
/// ordered largest-first.
fn build_clusters(working: &UndirectedGraph, components: Vec<Vec<NodeId>>) -> Vec<Cluster> {
    let mut clusters: Vec<Cluster> = components
        .into_iter()
        .map(|members| {
            let keep = members.iter().cloned().collect();
            let sub = working.induced_subgraph(&keep);
            let edges: Vec<Edge> = sub.edges().map(|(a, b)| Edge::new(a, b)).collect();
            Cluster {
                id: 0,
                size: members.len(),
                density: metrics::calculate_density(members.len(), edges.len()),
                members,
                edges,
            }
        })
        .collect();

    clusters.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.members.cmp(&b.members)));
    for (id, cluster) in clusters.iter_mut().enumerate() {
        cluster.id = id as u32;
    }
    clusters
}
