//! Library error types

use thiserror::Error;

/// Errors reported by the analysis entry points.
///
/// All failures are synchronous and atomic: a failing call never leaves a
/// caller-visible structure partially mutated.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// A parameter was rejected before any computation began
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A query referenced a node the graph does not contain
    #[error("node {0:?} is not present in the graph")]
    UnknownNode(String),
}
