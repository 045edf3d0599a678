//! Graph representation and construction module

pub mod builder;
pub mod prune;
pub mod undirected;

pub use undirected::{Edge, NodeId, UndirectedGraph};
