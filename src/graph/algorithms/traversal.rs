//! Breadth-first traversal.
//!
//! [`bfs`] collects the discovery order from a start node; [`bfs_iter`] yields
//! the same order lazily. Each reachable node appears exactly once and nodes
//! outside the start's reach are simply absent.

use std::collections::VecDeque;

use crate::{
    graph::{algorithms::ensure_node, NodeId, Successors},
    Result,
};

/// Breadth-first search iterator over graph nodes.
///
/// A node is marked visited when it is enqueued, so it can never be queued
/// twice even when several edges (or multi-edges) lead to it.
pub struct BfsIterator<'g, G: Successors> {
    graph: &'g G,
    queue: VecDeque<NodeId>,
    visited: Vec<bool>,
}

impl<'g, G: Successors> BfsIterator<'g, G> {
    fn new(graph: &'g G, start: NodeId) -> Self {
        let mut visited = vec![false; graph.node_count()];
        visited[start.index()] = true;

        let mut queue = VecDeque::new();
        queue.push_back(start);

        BfsIterator {
            graph,
            queue,
            visited,
        }
    }
}

impl<G: Successors> Iterator for BfsIterator<'_, G> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;

        for succ in self.graph.successors(node) {
            if !self.visited[succ.index()] {
                self.visited[succ.index()] = true;
                self.queue.push_back(succ);
            }
        }

        Some(node)
    }
}

/// Returns a breadth-first iterator starting from `start`.
///
/// # Errors
///
/// Returns [`Error::InvalidId`](crate::Error::InvalidId) if `start` is not a node of `graph`.
pub fn bfs_iter<G: Successors>(graph: &G, start: NodeId) -> Result<BfsIterator<'_, G>> {
    ensure_node(graph, start)?;
    Ok(BfsIterator::new(graph, start))
}

/// Computes the breadth-first discovery order from `start`.
///
/// The result starts with `start`, contains every node reachable from it
/// exactly once, and is never longer than the node count. Neighbors are
/// explored in adjacency insertion order.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V) for the visited markers and queue
///
/// # Errors
///
/// Returns [`Error::InvalidId`](crate::Error::InvalidId) if `start` is not a node of `graph`.
///
/// # Examples
///
/// ```rust
/// use citygraph::{graph::algorithms::bfs, Graph};
///
/// let mut roads = Graph::new(false);
/// roads.add_edge("Harbor", "Market", 1);
/// roads.add_edge("Harbor", "Mill", 1);
/// roads.add_edge("Market", "Quarry", 1);
/// roads.add_node("Island");
///
/// let order = bfs(&roads, roads.id_of("Harbor")?)?;
/// assert_eq!(roads.names_of(&order)?, ["Harbor", "Market", "Mill", "Quarry"]);
/// # Ok::<(), citygraph::Error>(())
/// ```
pub fn bfs<G: Successors>(graph: &G, start: NodeId) -> Result<Vec<NodeId>> {
    Ok(bfs_iter(graph, start)?.collect())
}
