//! Community detection module

pub mod betweenness;
pub mod detection;
pub mod metrics;

use crate::graph::{Edge, NodeId};
use serde::{Deserialize, Serialize};

/// A detected community: one connected component of the working graph at
/// the moment detection terminated.
///
/// Members and edges are copied out of the working graph, so a cluster is
/// unaffected by anything that happens to the graph afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cluster {
    /// Position in the size-ordered output
    pub id: u32,

    /// Member accounts, sorted
    pub members: Vec<NodeId>,

    /// Edges of the induced subgraph over the members
    pub edges: Vec<Edge>,

    /// Number of members
    pub size: usize,

    /// Actual edges / potential edges
    pub density: f32,
}
