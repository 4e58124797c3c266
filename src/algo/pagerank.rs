//! PageRank algorithm implementation
//!
//! Computes the PageRank of each node A in a directed graph from the
//! recursive definition:
//!
//! `PR(A) = (1 - d) + d * (PR(T1)/C(T1) + ... + PR(Tn)/C(Tn))`
//!
//! where `T1..Tn` are the nodes with an edge into A and `C(Ti)` is the
//! number of edges leaving Ti.

use crate::graph::{Graph, GraphError, GraphResult, NodeId};
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

/// Damping factor `d`, fixed by the algorithm definition.
pub const DAMPING_FACTOR: f64 = 0.85;

/// PageRank engine configuration
///
/// Both parameters are immutable after construction; the engine carries no
/// other state, so one instance can be reused across independent graphs.
#[derive(Debug, Clone)]
pub struct PageRank {
    /// Per-node convergence threshold: a score update smaller than this is
    /// discarded and the node counts as settled for the sweep
    tolerance: f64,
    /// Hard stop on the number of sweeps
    max_iterations: u64,
}

impl Default for PageRank {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            max_iterations: 100,
        }
    }
}

impl PageRank {
    /// Create an engine with an explicit tolerance and iteration cap.
    /// Both must be positive.
    pub fn new(tolerance: f64, max_iterations: u64) -> Self {
        debug_assert!(tolerance > 0.0, "tolerance must be positive");
        debug_assert!(max_iterations > 0, "max_iterations must be positive");
        Self {
            tolerance,
            max_iterations,
        }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn max_iterations(&self) -> u64 {
        self.max_iterations
    }

    /// Compute a PageRank score for every node of `graph`.
    ///
    /// Every score starts at 1.0 (deliberately not 1/N: ranks are not a
    /// probability distribution and do not sum to 1) and is refined by
    /// full sweeps over the nodes in graph order until a sweep changes no
    /// node by more than the tolerance, or the iteration cap is hit. In
    /// the capped case a warning is logged and the (unreliable) scores are
    /// still returned.
    ///
    /// Updates are applied in place as the sweep progresses: a predecessor
    /// processed earlier in the same sweep is read at its updated value.
    /// This matches the reference trajectory; the fixed point is the same
    /// as under a double-buffered sweep.
    ///
    /// Each call rebuilds the reverse index and score table from scratch,
    /// so repeated calls on the same graph are fully independent.
    pub fn compute(&self, graph: &Graph) -> GraphResult<FxHashMap<NodeId, f64>> {
        let inverted = invert_edges(graph);

        let mut scores: FxHashMap<NodeId, f64> =
            graph.nodes().iter().map(|&node| (node, 1.0)).collect();

        let mut iteration = 0u64;
        loop {
            let mut changed = 0usize;
            let mut max_change = 0.0f64;

            for &node in graph.nodes() {
                // PR(T1)/C(T1) + ... + PR(Tn)/C(Tn) over the nodes pointing
                // at `node`; zero when nothing points here
                let mut weight_sum = 0.0;
                if let Some(pointing) = inverted.get(&node) {
                    for &source in pointing {
                        let out_degree = graph.out_degree(source);
                        if out_degree == 0 {
                            // A predecessor owns at least the edge that made
                            // it one, so this can only mean a corrupted graph
                            return Err(GraphError::SinkPredecessor {
                                node,
                                predecessor: source,
                            });
                        }
                        weight_sum += scores[&source] / out_degree as f64;
                    }
                }

                let pr = (1.0 - DAMPING_FACTOR) + DAMPING_FACTOR * weight_sum;

                // Commit only movements above the tolerance; sub-threshold
                // drift is discarded and the node counts as settled
                let change = scores[&node] - pr;
                if change.abs() > self.tolerance {
                    changed += 1;
                    scores.insert(node, pr);
                    if change.abs() > max_change {
                        max_change = change.abs();
                    }
                }
            }

            iteration += 1;
            debug!(iteration, changed, max_change, "pagerank sweep");

            // Cap check comes first: a run that spends its whole budget is
            // flagged even when its last sweep happened to change nothing
            if iteration >= self.max_iterations {
                warn!(
                    iteration,
                    max_iterations = self.max_iterations,
                    "iteration cap reached before stabilization; returned scores are not reliable"
                );
                break;
            }
            if changed == 0 {
                break;
            }
        }

        Ok(scores)
    }
}

/// Build the reverse adjacency map: node -> nodes with an edge into it.
///
/// Scans the node sequence in order, then each forward list in order, so
/// predecessor lists come out in a deterministic insertion order. Nodes
/// with zero in-degree are simply absent; callers treat a missing key as
/// "no predecessors".
pub fn invert_edges(graph: &Graph) -> FxHashMap<NodeId, Vec<NodeId>> {
    let mut inverted: FxHashMap<NodeId, Vec<NodeId>> = FxHashMap::default();
    for &parent in graph.nodes() {
        for &child in graph.neighbors(parent) {
            inverted.entry(child).or_default().push(parent);
        }
    }
    inverted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    fn id(n: u64) -> NodeId {
        NodeId::new(n)
    }

    #[test]
    fn test_invert_edges() {
        // edges {1:[2,3], 2:[3]} invert to {2:[1], 3:[1,2]}
        let graph = Graph::from_pairs([(1, 2), (1, 3), (2, 3)]).unwrap();
        let inverted = invert_edges(&graph);

        assert_eq!(inverted.get(&id(1)), None);
        assert_eq!(inverted.get(&id(2)), Some(&vec![id(1)]));
        assert_eq!(inverted.get(&id(3)), Some(&vec![id(1), id(2)]));
    }

    #[test]
    fn test_empty_graph_yields_empty_scores() {
        let graph = Graph::from_pairs([]).unwrap();
        let scores = PageRank::default().compute(&graph).unwrap();
        assert!(scores.is_empty());
    }

    #[test]
    fn test_isolated_node_settles_at_base_score() {
        let graph = Graph::new(
            vec![id(7)],
            [(id(7), Vec::new())].into_iter().collect(),
        )
        .unwrap();
        let scores = PageRank::default().compute(&graph).unwrap();
        assert_eq!(scores[&id(7)], 1.0 - DAMPING_FACTOR);
    }

    #[test]
    fn test_scores_never_fall_below_base() {
        let graph = Graph::from_pairs([(1, 2), (2, 3), (3, 1), (1, 3)]).unwrap();
        let scores = PageRank::default().compute(&graph).unwrap();
        for &node in graph.nodes() {
            assert!(scores[&node] >= 1.0 - DAMPING_FACTOR);
        }
    }

    #[test]
    fn test_star_center_ranks_highest() {
        // Center exchanges edges with two leaves; it collects rank from both
        let graph = Graph::from_pairs([(0, 1), (0, 2), (1, 0), (2, 0)]).unwrap();
        let scores = PageRank::default().compute(&graph).unwrap();
        assert!(scores[&id(0)] > scores[&id(1)]);
        assert!(scores[&id(0)] > scores[&id(2)]);
    }

    #[test]
    fn test_default_config() {
        let engine = PageRank::default();
        assert_eq!(engine.tolerance(), 1e-6);
        assert_eq!(engine.max_iterations(), 100);
    }
}
