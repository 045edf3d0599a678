//! Cluster statistics and metrics

use crate::cluster::Cluster;
use serde::Serialize;

/// Aggregate statistics over a detected partition, for reporting
#[derive(Debug, Clone, Serialize)]
pub struct ClusterStats {
    /// Number of communities discovered
    pub cluster_count: usize,

    /// Total members across all communities
    pub total_members: usize,

    /// Average members per community
    pub avg_cluster_size: f64,

    /// Size of the largest community
    pub largest_cluster_size: usize,

    /// Size of the smallest community
    pub smallest_cluster_size: usize,
}

/// Summarize a partition. Clusters arrive sorted largest-first from
/// detection, so largest/smallest read off the ends.
pub fn summarize(clusters: &[Cluster]) -> ClusterStats {
    let cluster_count = clusters.len();
    let total_members: usize = clusters.iter().map(|c| c.size).sum();
    let avg_cluster_size = if cluster_count == 0 {
        0.0
    } else {
        total_members as f64 / cluster_count as f64
    };

    ClusterStats {
        cluster_count,
        total_members,
        avg_cluster_size,
        largest_cluster_size: clusters.first().map_or(0, |c| c.size),
        smallest_cluster_size: clusters.last().map_or(0, |c| c.size),
    }
}

/// Density of an undirected cluster: actual edges / potential edges.
/// Singleton clusters have density 1 by convention.
pub fn calculate_density(member_count: usize, edge_count: usize) -> f32 {
    if member_count <= 1 {
        return 1.0;
    }
    let potential_edges = member_count * (member_count - 1) / 2;
    edge_count as f32 / potential_edges as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;

    fn cluster(id: u32, members: &[&str], edges: &[(&str, &str)]) -> Cluster {
        Cluster {
            id,
            size: members.len(),
            density: calculate_density(members.len(), edges.len()),
            members: members.iter().map(|s| s.to_string()).collect(),
            edges: edges.iter().map(|(a, b)| Edge::new(a, b)).collect(),
        }
    }

    #[test]
    fn density_of_triangle_is_one() {
        let c = cluster(0, &["a", "b", "c"], &[("a", "b"), ("a", "c"), ("b", "c")]);
        assert!((c.density - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn density_of_path_is_partial() {
        let c = cluster(0, &["a", "b", "c"], &[("a", "b"), ("b", "c")]);
        assert!((c.density - 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn singleton_density_is_one() {
        assert!((calculate_density(1, 0) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn summary_over_a_partition() {
        let clusters = vec![
            cluster(0, &["a", "b", "c"], &[("a", "b"), ("b", "c")]),
            cluster(1, &["x"], &[]),
        ];
        let stats = summarize(&clusters);
        assert_eq!(stats.cluster_count, 2);
        assert_eq!(stats.total_members, 4);
        assert!((stats.avg_cluster_size - 2.0).abs() < f64::EPSILON);
        assert_eq!(stats.largest_cluster_size, 3);
        assert_eq!(stats.smallest_cluster_size, 1);
    }

    #[test]
    fn summary_of_empty_partition() {
        let stats = summarize(&[]);
        assert_eq!(stats.cluster_count, 0);
        assert_eq!(stats.avg_cluster_size, 0.0);
    }
}
