use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod cluster;
mod config;
mod data;
mod error;
mod graph;
mod predict;
mod storage;

use config::Config;

#[derive(Parser, Debug)]
#[clap(
    name = "follow-graph-analyzer",
    about = "Community detection and link prediction over follow-relationship graphs"
)]
struct Cli {
    /// Path to the observation JSON file
    #[clap(long)]
    input: PathBuf,

    /// Output directory for results
    #[clap(long, default_value = "cluster_results")]
    output_dir: PathBuf,

    /// Minimum degree for a node to survive pruning
    #[clap(long, default_value = "3")]
    min_degree: usize,

    /// Number of communities to aim for
    #[clap(long, default_value = "4")]
    target_clusters: usize,

    /// Also score candidate links for this node (against the pruned graph)
    #[clap(long)]
    score_node: Option<String>,

    /// Number of worker threads (0 = use all available cores)
    #[clap(long, default_value = "0")]
    threads: usize,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    let num_threads = if args.threads > 0 {
        args.threads
    } else {
        num_cpus::get()
    };

    log::info!("Using {} worker threads", num_threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()?;

    let config = Config::new(args.min_degree, args.target_clusters);

    log::info!("Starting follow-graph analysis");
    log::info!("Input: {}", args.input.display());
    log::info!("Output: {}", args.output_dir.display());

    // 1. Load observations
    let observations = data::load_observations(&args.input)?;

    // 2. Build the relationship graph
    let full_graph = graph::builder::build_graph(&observations.observations, &observations.roots);
    log::info!(
        "Built graph with {} nodes and {} edges",
        full_graph.node_count(),
        full_graph.edge_count()
    );

    // 3. Prune and detect communities
    let (pruned_graph, clusters) = cluster::detection::detect_communities(
        &full_graph,
        config.min_degree,
        config.target_clusters,
    )?;

    let stats = cluster::metrics::summarize(&clusters);
    log::info!(
        "Found {} communities, {:.1} members on average",
        stats.cluster_count,
        stats.avg_cluster_size
    );

    // 4. Save results
    storage::save_results(&clusters, &full_graph, &pruned_graph, &args.output_dir)?;

    // 5. Optional link-prediction query
    if let Some(node) = &args.score_node {
        let scores = predict::score_links(&pruned_graph, node)?;
        log::info!("Scored {} candidate links for {}", scores.len(), node);
        storage::save_link_scores(&scores, &args.output_dir)?;
    }

    log::info!(
        "Analysis complete. Results saved to {}",
        args.output_dir.display()
    );

    Ok(())
}
