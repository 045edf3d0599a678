//! Configuration for the follow-graph analyzer

/// Analysis parameters, passed explicitly into the pipeline (no
/// process-wide state)
pub struct Config {
    /// Minimum degree for a node to survive pruning
    pub min_degree: usize,

    /// Number of communities the detector aims for
    pub target_clusters: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_degree: 3,
            target_clusters: 4,
        }
    }
}

impl Config {
    /// Create a configuration with custom values
    pub fn new(min_degree: usize, target_clusters: usize) -> Self {
        Self {
            min_degree,
            target_clusters,
        }
    }
}
