//! Loading of already-materialized observation data
//!
//! Acquisition from the network (polling, pagination, rate limits) happens
//! upstream; this module only reads the resulting file. Expected JSON
//! shape:
//!
//! ```json
//! {
//!   "roots": ["alice", "bob"],
//!   "observations": {
//!     "alice": ["bob", "carol"],
//!     "bob": ["alice"]
//!   }
//! }
//! ```

use crate::graph::NodeId;
use anyhow::Result;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Raw observation input: who was observed following whom, plus the
/// tracked root accounts
#[derive(Debug, Deserialize)]
pub struct ObservationData {
    /// Observed account -> accounts seen following it
    pub observations: BTreeMap<NodeId, BTreeSet<NodeId>>,

    /// Tracked seed accounts
    #[serde(default)]
    pub roots: BTreeSet<NodeId>,
}

/// Load an observation file from disk
pub fn load_observations(path: &Path) -> Result<ObservationData> {
    let file = File::open(path)?;
    let data: ObservationData = serde_json::from_reader(BufReader::new(file))?;
    log::info!(
        "Loaded {} observation entries and {} roots from {}",
        data.observations.len(),
        data.roots.len(),
        path.display()
    );
    Ok(data)
}
