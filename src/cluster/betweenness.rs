//! Edge betweenness centrality via Brandes' algorithm.
//!
//! For every source node we run one BFS to count shortest paths, then walk
//! the BFS order backwards accumulating, for each edge, the fraction of
//! shortest paths that cross it. Summing over all sources counts every
//! unordered pair twice, so the totals are halved at the end.
//!
//! Complexity: O(V * E) for unweighted graphs.
//!
//! Sources are swept in parallel with rayon. Each fixed-size chunk of
//! sources accumulates a private score vector, and the chunk partials are
//! folded in chunk order afterwards, so the merged totals do not depend on
//! thread scheduling.

use crate::graph::{Edge, NodeId, UndirectedGraph};
use rayon::prelude::*;
use std::collections::{BTreeMap, HashMap, VecDeque};

/// Sources per parallel work unit. Fixed so the floating-point summation
/// grouping is the same from run to run.
const SOURCE_CHUNK: usize = 64;

/// Compute edge betweenness centrality for every edge of `graph`.
///
/// Scores are summed over unordered node pairs and not otherwise
/// normalized; pairs in different components contribute nothing. Every
/// edge appears in the output, bridges with high scores and cycle-internal
/// edges possibly with 0.
pub fn edge_betweenness(graph: &UndirectedGraph) -> BTreeMap<Edge, f64> {
    let nodes: Vec<&NodeId> = graph.nodes().collect();
    let n = nodes.len();
    if n == 0 || graph.edge_count() == 0 {
        return BTreeMap::new();
    }

    let index: HashMap<&str, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, id)| (id.as_str(), i))
        .collect();

    // Index-based adjacency for the sweeps; neighbor lists stay sorted.
    let adjacency: Vec<Vec<usize>> = nodes
        .iter()
        .map(|id| {
            graph
                .neighbors(id)
                .map(|neighbors| neighbors.iter().map(|nb| index[nb.as_str()]).collect())
                .unwrap_or_default()
        })
        .collect();

    // Dense edge ids, assigned in sorted edge order.
    let mut edge_list: Vec<Edge> = Vec::with_capacity(graph.edge_count());
    let mut edge_ids: HashMap<(usize, usize), usize> = HashMap::with_capacity(graph.edge_count());
    for (a, b) in graph.edges() {
        let (i, j) = (index[a.as_str()], index[b.as_str()]);
        let key = if i < j { (i, j) } else { (j, i) };
        edge_ids.insert(key, edge_list.len());
        edge_list.push(Edge::new(a, b));
    }
    let edge_count = edge_list.len();

    let sources: Vec<usize> = (0..n).collect();
    let partials: Vec<Vec<f64>> = sources
        .par_chunks(SOURCE_CHUNK)
        .map(|chunk| {
            let mut local = vec![0.0f64; edge_count];
            for &s in chunk {
                accumulate_from_source(s, &adjacency, &edge_ids, &mut local);
            }
            local
        })
        .collect();

    let mut totals = vec![0.0f64; edge_count];
    for partial in partials {
        for (total, value) in totals.iter_mut().zip(partial) {
            *total += value;
        }
    }

    // Each unordered pair was seen from both endpoints.
    for total in &mut totals {
        *total /= 2.0;
    }

    edge_list.into_iter().zip(totals).collect()
}

/// One Brandes sweep: BFS from `s`, then dependency back-propagation in
/// reverse BFS order, adding this source's contribution to `scores`.
fn accumulate_from_source(
    s: usize,
    adjacency: &[Vec<usize>],
    edge_ids: &HashMap<(usize, usize), usize>,
    scores: &mut [f64],
) {
    let n = adjacency.len();

    // Nodes in discovery order; popped farthest-first for accumulation.
    let mut stack: Vec<usize> = Vec::with_capacity(n);

    // predecessors[w] = neighbors immediately before w on shortest paths from s
    let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];

    // sigma[t] = number of shortest paths from s to t
    let mut sigma = vec![0.0f64; n];
    sigma[s] = 1.0;

    // dist[t] = BFS distance from s (-1 = unreached)
    let mut dist = vec![-1i64; n];
    dist[s] = 0;

    let mut queue: VecDeque<usize> = VecDeque::new();
    queue.push_back(s);

    while let Some(v) = queue.pop_front() {
        stack.push(v);
        for &w in &adjacency[v] {
            if dist[w] < 0 {
                dist[w] = dist[v] + 1;
                queue.push_back(w);
            }
            if dist[w] == dist[v] + 1 {
                sigma[w] += sigma[v];
                predecessors[w].push(v);
            }
        }
    }

    // delta[v] = dependency of s on v
    let mut delta = vec![0.0f64; n];

    while let Some(w) = stack.pop() {
        for &v in &predecessors[w] {
            let contribution = sigma[v] / sigma[w] * (1.0 + delta[w]);
            let key = if v < w { (v, w) } else { (w, v) };
            scores[edge_ids[&key]] += contribution;
            delta[v] += contribution;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn graph_from(edges: &[(&str, &str)]) -> UndirectedGraph {
        let mut g = UndirectedGraph::new();
        for (a, b) in edges {
            g.add_edge(a, b);
        }
        g
    }

    fn score(scores: &BTreeMap<Edge, f64>, a: &str, b: &str) -> f64 {
        scores[&Edge::new(a, b)]
    }

    #[test]
    fn empty_graph_has_no_scores() {
        assert!(edge_betweenness(&UndirectedGraph::new()).is_empty());
    }

    #[test]
    fn path_graph_peaks_in_the_middle() {
        // a - b - c - d: the inner edge carries one more pair
        let g = graph_from(&[("a", "b"), ("b", "c"), ("c", "d")]);
        let scores = edge_betweenness(&g);
        assert!((score(&scores, "a", "b") - 3.0).abs() < TOLERANCE);
        assert!((score(&scores, "b", "c") - 4.0).abs() < TOLERANCE);
        assert!((score(&scores, "c", "d") - 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn triangle_edges_only_carry_their_own_pair() {
        let g = graph_from(&[("a", "b"), ("a", "c"), ("b", "c")]);
        let scores = edge_betweenness(&g);
        for (_, value) in &scores {
            assert!((value - 1.0).abs() < TOLERANCE);
        }
    }

    #[test]
    fn square_splits_pairs_across_two_routes() {
        // a - b
        // |   |
        // d - c : opposite corners have two shortest paths, half each way
        let g = graph_from(&[("a", "b"), ("b", "c"), ("c", "d"), ("d", "a")]);
        let scores = edge_betweenness(&g);
        for (_, value) in &scores {
            assert!((value - 2.0).abs() < TOLERANCE);
        }
    }

    #[test]
    fn components_do_not_interact() {
        let g = graph_from(&[("a", "b"), ("x", "y")]);
        let scores = edge_betweenness(&g);
        assert!((score(&scores, "a", "b") - 1.0).abs() < TOLERANCE);
        assert!((score(&scores, "x", "y") - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn bridge_between_triangles_dominates() {
        let g = graph_from(&[
            ("a", "b"),
            ("a", "c"),
            ("b", "c"),
            ("c", "d"),
            ("d", "e"),
            ("d", "f"),
            ("e", "f"),
        ]);
        let scores = edge_betweenness(&g);
        let bridge = score(&scores, "c", "d");
        for (edge, value) in &scores {
            if *edge != Edge::new("c", "d") {
                assert!(bridge > *value);
            }
        }
        // 3 nodes on each side, every cross pair uses the bridge
        assert!((bridge - 9.0).abs() < TOLERANCE);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let g = graph_from(&[
            ("a", "b"),
            ("b", "c"),
            ("c", "d"),
            ("d", "a"),
            ("b", "d"),
            ("d", "e"),
        ]);
        let first = edge_betweenness(&g);
        for _ in 0..5 {
            assert_eq!(first, edge_betweenness(&g));
        }
    }
}
