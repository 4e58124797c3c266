//! Noderank
//!
//! A PageRank engine for directed graphs: load an edge-list file into an
//! immutable snapshot, run the damped fixed-point iteration until the
//! scores stabilize, report the top-ranked nodes.
//!
//! # Example
//!
//! ```rust
//! use noderank::algo::PageRank;
//! use noderank::graph::{Graph, NodeId};
//!
//! // 1 -> 2: node 2 collects rank from node 1
//! let graph = Graph::from_pairs([(1, 2)]).unwrap();
//! let scores = PageRank::default().compute(&graph).unwrap();
//!
//! assert!(scores[&NodeId::new(2)] > scores[&NodeId::new(1)]);
//! ```

#![warn(clippy::all)]

pub mod algo;
pub mod graph;
pub mod report;

// Re-export main types for convenience
pub use algo::{invert_edges, PageRank, DAMPING_FACTOR};
pub use graph::{read_graph, Graph, GraphError, GraphResult, LoadError, NodeId};
pub use report::rank_descending;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
