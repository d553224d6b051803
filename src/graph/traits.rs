//! Trait definitions for graph abstractions.
//!
//! Algorithms in [`algorithms`](crate::graph::algorithms) are written against
//! these traits rather than the concrete [`Graph`](crate::graph::Graph), so they
//! can run over any adjacency source that hands out dense [`NodeId`] values.
//!
//! - [`GraphBase`] - node count, node iteration and edge semantics
//! - [`Successors`] - unweighted forward adjacency
//! - [`WeightedSuccessors`] - forward adjacency with edge weights

use crate::graph::{NodeId, Weight};

/// Base trait providing core graph properties.
pub trait GraphBase {
    /// Returns the number of nodes in the graph.
    ///
    /// Valid identifiers are exactly `NodeId::new(0)..NodeId::new(node_count())`.
    fn node_count(&self) -> usize;

    /// Returns an iterator over all node identifiers in ascending order.
    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.node_count()).map(NodeId::new)
    }

    /// Returns `true` if every edge was stored in one direction only.
    fn is_directed(&self) -> bool;

    /// Returns `true` if `node` is a valid identifier for this graph.
    fn contains_node(&self, node: NodeId) -> bool {
        node.index() < self.node_count()
    }
}

/// Trait for graphs that support forward edge traversal.
pub trait Successors: GraphBase {
    /// Returns the nodes reachable over one edge from `node`, in insertion order.
    ///
    /// Multi-edges yield the same successor more than once.
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs whose edges carry integer weights.
pub trait WeightedSuccessors: Successors {
    /// Returns `(neighbor, weight)` pairs for every edge leaving `node`, in insertion order.
    fn weighted_successors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, Weight)>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // A minimal test graph implementation for trait testing
    struct TestGraph {
        node_count: usize,
        edges: Vec<(NodeId, NodeId, Weight)>,
    }

    impl GraphBase for TestGraph {
        fn node_count(&self) -> usize {
            self.node_count
        }

        fn is_directed(&self) -> bool {
            true
        }
    }

    impl Successors for TestGraph {
        fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
            self.weighted_successors(node).map(|(to, _)| to)
        }
    }

    impl WeightedSuccessors for TestGraph {
        fn weighted_successors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, Weight)> {
            self.edges
                .iter()
                .filter(move |(src, _, _)| *src == node)
                .map(|&(_, dst, w)| (dst, w))
        }
    }

    #[test]
    fn test_graph_base_defaults() {
        let graph = TestGraph {
            node_count: 3,
            edges: vec![],
        };

        let ids: Vec<NodeId> = graph.node_ids().collect();
        assert_eq!(ids, vec![NodeId::new(0), NodeId::new(1), NodeId::new(2)]);
        assert!(graph.contains_node(NodeId::new(2)));
        assert!(!graph.contains_node(NodeId::new(3)));
    }

    #[test]
    fn test_weighted_successors() {
        let graph = TestGraph {
            node_count: 3,
            edges: vec![
                (NodeId::new(0), NodeId::new(1), 4),
                (NodeId::new(0), NodeId::new(2), 7),
                (NodeId::new(1), NodeId::new(2), 1),
            ],
        };

        let out: Vec<(NodeId, Weight)> = graph.weighted_successors(NodeId::new(0)).collect();
        assert_eq!(out, vec![(NodeId::new(1), 4), (NodeId::new(2), 7)]);

        let succ: Vec<NodeId> = graph.successors(NodeId::new(1)).collect();
        assert_eq!(succ, vec![NodeId::new(2)]);
        assert_eq!(graph.successors(NodeId::new(2)).count(), 0);
    }
}
