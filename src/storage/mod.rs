//! Results persistence module

use crate::cluster::{metrics, Cluster};
use crate::graph::UndirectedGraph;
use crate::predict::LinkScore;
use anyhow::Result;
use serde_json::{json, to_string_pretty};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Save analysis results to the specified directory
pub fn save_results(
    clusters: &[Cluster],
    full_graph: &UndirectedGraph,
    pruned_graph: &UndirectedGraph,
    output_dir: &Path,
) -> Result<()> {
    log::info!(
        "Saving {} clusters to {}",
        clusters.len(),
        output_dir.display()
    );

    fs::create_dir_all(output_dir)?;
    save_summary(clusters, full_graph, pruned_graph, output_dir)?;
    save_clusters(clusters, output_dir)?;

    log::info!("Results saved successfully");
    Ok(())
}

/// Save graph and cluster summary information
fn save_summary(
    clusters: &[Cluster],
    full_graph: &UndirectedGraph,
    pruned_graph: &UndirectedGraph,
    output_dir: &Path,
) -> Result<()> {
    let stats = metrics::summarize(clusters);
    let avg_density = if clusters.is_empty() {
        0.0
    } else {
        clusters.iter().map(|c| c.density as f64).sum::<f64>() / clusters.len() as f64
    };

    let summary = json!({
        "graph_stats": {
            "node_count": full_graph.node_count(),
            "edge_count": full_graph.edge_count(),
            "pruned_node_count": pruned_graph.node_count(),
            "pruned_edge_count": pruned_graph.edge_count(),
        },
        "cluster_stats": {
            "cluster_count": stats.cluster_count,
            "total_members": stats.total_members,
            "avg_cluster_size": stats.avg_cluster_size,
            "largest_cluster_size": stats.largest_cluster_size,
            "smallest_cluster_size": stats.smallest_cluster_size,
            "avg_density": avg_density,
        }
    });

    let mut file = File::create(output_dir.join("summary.json"))?;
    file.write_all(to_string_pretty(&summary)?.as_bytes())?;
    Ok(())
}

/// Save per-cluster membership lists
fn save_clusters(clusters: &[Cluster], output_dir: &Path) -> Result<()> {
    let mut file = File::create(output_dir.join("clusters.json"))?;
    file.write_all(to_string_pretty(clusters)?.as_bytes())?;
    Ok(())
}

/// Save link-prediction scores for a queried node
pub fn save_link_scores(scores: &[LinkScore], output_dir: &Path) -> Result<()> {
    fs::create_dir_all(output_dir)?;
    let mut file = File::create(output_dir.join("link_scores.json"))?;
    file.write_all(to_string_pretty(scores)?.as_bytes())?;
    Ok(())
}
