//! Directed-graph snapshot and edge-list loading
//!
//! This module implements the immutable graph data model consumed by the
//! PageRank engine:
//! - Opaque node identifiers (`NodeId`)
//! - An immutable snapshot (`Graph`) holding the node sequence and the
//!   forward adjacency map, validated at construction
//! - An edge-list file loader producing validated snapshots

pub mod loader;
pub mod store;
pub mod types;

// Re-export main types
pub use loader::{read_edges, read_graph, LoadError, LoadResult};
pub use store::{Graph, GraphError, GraphResult};
pub use types::NodeId;
