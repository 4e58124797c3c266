//! Immutable directed-graph snapshot
//!
//! A `Graph` is built once from input data and never mutated afterwards.
//! Node order is the order of first appearance and drives both the
//! PageRank sweep order and the report order, so it is preserved exactly.

use super::types::NodeId;
use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Errors that can occur when constructing or traversing a graph
#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    #[error("Node {0} declared more than once")]
    DuplicateNode(NodeId),

    #[error("Node {0} has no adjacency entry")]
    MissingAdjacency(NodeId),

    #[error("Adjacency entry for {0} does not match any declared node")]
    UnknownSource(NodeId),

    #[error("Edge {0} -> {1} points to an undeclared node")]
    UnknownTarget(NodeId, NodeId),

    #[error("Edge {0} -> {1} declared more than once")]
    DuplicateEdge(NodeId, NodeId),

    #[error("Predecessor {predecessor} of node {node} has no outgoing edges")]
    SinkPredecessor { node: NodeId, predecessor: NodeId },
}

pub type GraphResult<T> = Result<T, GraphError>;

/// An immutable snapshot of a directed graph.
///
/// Invariants, enforced at construction:
/// - `nodes` contains each node exactly once, in first-seen order
/// - every node in `nodes` has an entry in `edges` (possibly empty)
/// - `edges` contains no keys or targets outside `nodes`
/// - each adjacency list is duplicate-free
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: Vec<NodeId>,
    edges: IndexMap<NodeId, Vec<NodeId>>,
}

impl Graph {
    /// Build a snapshot from a node sequence and a forward adjacency map.
    /// Any violation of the data-model invariants is rejected here, before
    /// the graph can reach an algorithm.
    pub fn new(nodes: Vec<NodeId>, edges: IndexMap<NodeId, Vec<NodeId>>) -> GraphResult<Self> {
        let mut known: FxHashSet<NodeId> = FxHashSet::default();
        known.reserve(nodes.len());
        for &node in &nodes {
            if !known.insert(node) {
                return Err(GraphError::DuplicateNode(node));
            }
        }

        for &node in &nodes {
            if !edges.contains_key(&node) {
                return Err(GraphError::MissingAdjacency(node));
            }
        }

        for (&source, targets) in &edges {
            if !known.contains(&source) {
                return Err(GraphError::UnknownSource(source));
            }
            let mut seen: FxHashSet<NodeId> = FxHashSet::default();
            for &target in targets {
                if !known.contains(&target) {
                    return Err(GraphError::UnknownTarget(source, target));
                }
                if !seen.insert(target) {
                    return Err(GraphError::DuplicateEdge(source, target));
                }
            }
        }

        Ok(Graph { nodes, edges })
    }

    /// Build a snapshot from `(source, target)` pairs. Nodes are registered
    /// in order of first appearance; duplicate pairs are dropped.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (u64, u64)>) -> GraphResult<Self> {
        let mut nodes: Vec<NodeId> = Vec::new();
        let mut seen_nodes: FxHashSet<NodeId> = FxHashSet::default();
        let mut edges: IndexMap<NodeId, Vec<NodeId>> = IndexMap::new();
        let mut seen_edges: FxHashSet<(NodeId, NodeId)> = FxHashSet::default();

        for (u, v) in pairs {
            let u = NodeId::new(u);
            let v = NodeId::new(v);
            for id in [u, v] {
                if seen_nodes.insert(id) {
                    nodes.push(id);
                }
            }
            if seen_edges.insert((u, v)) {
                edges.entry(u).or_default().push(v);
            }
        }

        // Sinks still need an (empty) adjacency entry
        for &node in &nodes {
            edges.entry(node).or_default();
        }

        Graph::new(nodes, edges)
    }

    /// Node identifiers in first-seen order
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Forward adjacency: node -> ordered, duplicate-free out-neighbors
    pub fn edges(&self) -> &IndexMap<NodeId, Vec<NodeId>> {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Out-neighbors of `node`; empty for sinks and unknown ids
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        self.edges.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of outgoing edges from `node` (`C(T)` in the PageRank formula)
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.edges.get(&node).map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn id(n: u64) -> NodeId {
        NodeId::new(n)
    }

    #[test]
    fn test_empty_graph_is_valid() {
        let graph = Graph::new(Vec::new(), IndexMap::new()).unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.node_count(), 0);
    }

    #[test]
    fn test_from_pairs_preserves_first_seen_order() {
        let graph = Graph::from_pairs([(3, 1), (1, 2), (2, 3)]).unwrap();
        assert_eq!(graph.nodes(), &[id(3), id(1), id(2)]);
        assert_eq!(graph.neighbors(id(3)), &[id(1)]);
        assert_eq!(graph.out_degree(id(3)), 1);
    }

    #[test]
    fn test_from_pairs_drops_duplicate_edges() {
        let graph = Graph::from_pairs([(1, 2), (1, 2), (1, 3)]).unwrap();
        assert_eq!(graph.neighbors(id(1)), &[id(2), id(3)]);
    }

    #[test]
    fn test_sinks_get_empty_adjacency() {
        let graph = Graph::from_pairs([(1, 2)]).unwrap();
        assert_eq!(graph.neighbors(id(2)), &[] as &[NodeId]);
        assert_eq!(graph.out_degree(id(2)), 0);
    }

    #[test]
    fn test_duplicate_node_rejected() {
        let mut edges = IndexMap::new();
        edges.insert(id(1), Vec::new());
        let result = Graph::new(vec![id(1), id(1)], edges);
        assert_eq!(result.unwrap_err(), GraphError::DuplicateNode(id(1)));
    }

    #[test]
    fn test_missing_adjacency_rejected() {
        let result = Graph::new(vec![id(1)], IndexMap::new());
        assert_eq!(result.unwrap_err(), GraphError::MissingAdjacency(id(1)));
    }

    #[test]
    fn test_unknown_source_rejected() {
        let mut edges = IndexMap::new();
        edges.insert(id(1), Vec::new());
        edges.insert(id(9), vec![id(1)]);
        let result = Graph::new(vec![id(1)], edges);
        assert_eq!(result.unwrap_err(), GraphError::UnknownSource(id(9)));
    }

    #[test]
    fn test_unknown_target_rejected() {
        let mut edges = IndexMap::new();
        edges.insert(id(1), vec![id(9)]);
        let result = Graph::new(vec![id(1)], edges);
        assert_eq!(result.unwrap_err(), GraphError::UnknownTarget(id(1), id(9)));
    }

    #[test]
    fn test_duplicate_edge_rejected() {
        let mut edges = IndexMap::new();
        edges.insert(id(1), vec![id(2), id(2)]);
        edges.insert(id(2), Vec::new());
        let result = Graph::new(vec![id(1), id(2)], edges);
        assert_eq!(result.unwrap_err(), GraphError::DuplicateEdge(id(1), id(2)));
    }
}
