//! Adjacency entry type.
//!
//! Every node owns an ordered list of [`Edge`] values describing where its
//! outgoing connections lead and what they cost. Undirected graphs store one
//! entry at each endpoint, so an `Edge` never needs to know its own source.

use std::fmt;

use crate::graph::NodeId;

/// Edge weight type. Weights are signed so that callers can express any
/// integer input, but routing and spanning-tree algorithms require them to be
/// non-negative.
pub type Weight = i64;

/// One adjacency entry: the neighbor reached and the weight of the connection.
///
/// # Examples
///
/// ```rust
/// use citygraph::{graph::Edge, Graph};
///
/// let mut graph = Graph::new(true);
/// graph.add_edge("Depot", "Harbor", 4);
///
/// let depot = graph.id_of("Depot")?;
/// let harbor = graph.id_of("Harbor")?;
/// assert_eq!(graph.neighbors(depot), &[Edge::new(harbor, 4)]);
/// # Ok::<(), citygraph::Error>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Node this entry leads to
    pub to: NodeId,
    /// Cost of traversing the connection
    pub weight: Weight,
}

impl Edge {
    /// Creates a new adjacency entry.
    #[must_use]
    #[inline]
    pub const fn new(to: NodeId, weight: Weight) -> Self {
        Edge { to, weight }
    }
}

impl fmt::Debug for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge(->{}, {})", self.to, self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_new() {
        let edge = Edge::new(NodeId::new(3), 9);
        assert_eq!(edge.to, NodeId::new(3));
        assert_eq!(edge.weight, 9);
    }

    #[test]
    fn test_edge_debug_format() {
        let edge = Edge::new(NodeId::new(1), -2);
        assert_eq!(format!("{edge:?}"), "Edge(->n1, -2)");
    }
}
