//! Graph algorithms

pub mod pagerank;

pub use pagerank::{invert_edges, PageRank, DAMPING_FACTOR};
