//! Node identifier for the city graph.
//!
//! [`NodeId`] is the dense integer identity handed out by the
//! [`StringIndex`](crate::graph::StringIndex): the first registered name gets
//! `NodeId(0)`, the next one `NodeId(1)`, and so on. Because identifiers are
//! dense, algorithms keep their per-node state in plain vectors indexed by
//! [`NodeId::index`].

use std::fmt;

/// A strongly-typed identifier for nodes within a [`Graph`](crate::graph::Graph).
///
/// `NodeId` wraps a `usize` index, providing type safety to prevent accidental
/// mixing of node identities with weights, distances or counts.
///
/// # Examples
///
/// ```rust
/// use citygraph::{graph::NodeId, Graph};
///
/// let mut graph = Graph::new(false);
/// let harbor = graph.add_node("Harbor");
/// let market = graph.add_node("Market");
///
/// assert_eq!(harbor, NodeId::new(0));
/// assert_eq!(market.index(), 1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a new `NodeId` from a raw index value.
    ///
    /// Normal usage should obtain identifiers from
    /// [`Graph::add_node`](crate::graph::Graph::add_node) or
    /// [`Graph::id_of`](crate::graph::Graph::id_of); a hand-made id is only
    /// meaningful if it is below the graph's node count.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw index value of this node identifier.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_node_id_roundtrip_index() {
        let node = NodeId::new(42);
        assert_eq!(node.index(), 42);

        let raw: usize = node.into();
        assert_eq!(raw, 42);
        assert_eq!(NodeId::from(raw), node);
    }

    #[test]
    fn test_node_id_ordering() {
        let mut nodes = vec![NodeId::new(3), NodeId::new(1), NodeId::new(2)];
        nodes.sort();
        assert_eq!(nodes, vec![NodeId::new(1), NodeId::new(2), NodeId::new(3)]);
    }

    #[test]
    fn test_node_id_hash() {
        let mut set: HashSet<NodeId> = HashSet::new();
        set.insert(NodeId::new(1));
        set.insert(NodeId::new(2));
        set.insert(NodeId::new(1));

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_node_id_formatting() {
        let node = NodeId::new(7);
        assert_eq!(format!("{node:?}"), "NodeId(7)");
        assert_eq!(format!("{node}"), "n7");
    }

    #[test]
    fn test_node_id_array_indexing() {
        let distances = [0_i64, 5, 12];
        assert_eq!(distances[NodeId::new(2).index()], 12);
    }
}
