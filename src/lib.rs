//! Core library functions for the follow-graph community analyzer

pub mod config;
pub mod data;
pub mod error;
pub mod graph;
pub mod cluster;
pub mod predict;
pub mod storage;

pub use cluster::detection::detect_communities;
pub use error::AnalyzerError;
pub use graph::builder::build_graph;
pub use predict::score_links;

pub use anyhow::{Result, anyhow};
