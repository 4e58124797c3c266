//! Score-table ordering for display
//!
//! The engine returns an unordered score map; reporting wants nodes in
//! decreasing PageRank order.

use crate::graph::NodeId;
use rustc_hash::FxHashMap;

/// Order a score table by descending score. Ties break on ascending node
/// id so the ordering is deterministic across runs.
pub fn rank_descending(scores: &FxHashMap<NodeId, f64>) -> Vec<(NodeId, f64)> {
    let mut ranked: Vec<(NodeId, f64)> = scores
        .iter()
        .map(|(&node, &score)| (node, score))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u64) -> NodeId {
        NodeId::new(n)
    }

    #[test]
    fn test_rank_descending() {
        let scores: FxHashMap<NodeId, f64> =
            [(id(1), 0.15), (id(2), 1.4), (id(3), 0.9)].into_iter().collect();
        let ranked = rank_descending(&scores);
        assert_eq!(
            ranked,
            vec![(id(2), 1.4), (id(3), 0.9), (id(1), 0.15)]
        );
    }

    #[test]
    fn test_ties_break_on_node_id() {
        let scores: FxHashMap<NodeId, f64> =
            [(id(9), 0.5), (id(2), 0.5), (id(5), 0.5)].into_iter().collect();
        let ranked = rank_descending(&scores);
        assert_eq!(
            ranked,
            vec![(id(2), 0.5), (id(5), 0.5), (id(9), 0.5)]
        );
    }

    #[test]
    fn test_empty_scores() {
        let scores = FxHashMap::default();
        assert!(rank_descending(&scores).is_empty());
    }
}
