//! Link prediction via degree-weighted Jaccard scoring

use crate::error::AnalyzerError;
use crate::graph::{NodeId, UndirectedGraph};
use itertools::Itertools;
use serde::Serialize;
use std::collections::BTreeSet;

/// Score for one candidate edge `(source, candidate)`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkScore {
    pub source: NodeId,
    pub candidate: NodeId,
    pub score: f64,
}

/// Score every non-neighbor of `node` as a potential new edge.
///
/// Shared neighbors are weighted by the reciprocal of their degree, so an
/// exclusive mutual contact counts for more than a hub everyone follows.
/// The denominator combines the two endpoints' total neighbor-degree mass
/// harmonically, which likewise discounts hub-heavy neighborhoods:
///
/// ```text
/// score = sum(1/deg(n) for n in N(node) & N(c))
///         / (1/sum(deg of N(node)) + 1/sum(deg of N(c)))
/// ```
///
/// An isolated side contributes nothing to the denominator; with both
/// sides isolated the score is 0. Results come back sorted best-first,
/// with ties broken by candidate id so the order is reproducible.
pub fn score_links(graph: &UndirectedGraph, node: &str) -> Result<Vec<LinkScore>, AnalyzerError> {
    let Some(neighbors) = graph.neighbors(node) else {
        return Err(AnalyzerError::UnknownNode(node.to_string()));
    };

    let source_mass = degree_mass(graph, neighbors);

    let scored = graph
        .nodes()
        .filter(|id| id.as_str() != node && !neighbors.contains(id.as_str()))
        .map(|candidate| {
            // candidates come from the node set, so neighbors() is present
            let candidate_neighbors = graph
                .neighbors(candidate)
                .cloned()
                .unwrap_or_default();
            LinkScore {
                source: node.to_string(),
                candidate: candidate.clone(),
                score: weighted_jaccard(graph, neighbors, &candidate_neighbors, source_mass),
            }
        })
        .sorted_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.candidate.cmp(&b.candidate))
        })
        .collect();

    Ok(scored)
}

/// Total degree mass of a neighborhood
fn degree_mass(graph: &UndirectedGraph, neighbors: &BTreeSet<NodeId>) -> f64 {
    neighbors.iter().map(|n| graph.degree(n) as f64).sum()
}

fn weighted_jaccard(
    graph: &UndirectedGraph,
    side_a: &BTreeSet<NodeId>,
    side_b: &BTreeSet<NodeId>,
    mass_a: f64,
) -> f64 {
    // a common neighbor is adjacent to both sides, so its degree is >= 2
    let numerator: f64 = side_a
        .intersection(side_b)
        .map(|n| 1.0 / graph.degree(n) as f64)
        .sum();

    let mass_b = degree_mass(graph, side_b);
    let mut inverse_mass = 0.0;
    if mass_a > 0.0 {
        inverse_mass += 1.0 / mass_a;
    }
    if mass_b > 0.0 {
        inverse_mass += 1.0 / mass_b;
    }
    if inverse_mass > 0.0 {
        numerator / inverse_mass
    } else {
        0.0
    }
}
