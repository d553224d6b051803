//! Topological ordering with Kahn's algorithm.
//!
//! Nodes are released in rounds: a node is emitted once every edge pointing
//! into it has been consumed. Whatever remains when the queue runs dry sits on,
//! or behind, a cycle.

use std::collections::VecDeque;

use tracing::debug;

use crate::{
    graph::{algorithms::ensure_directed, NodeId, Successors},
    Result,
};

/// Outcome of a topological ordering attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologicalOrder {
    order: Vec<NodeId>,
    node_count: usize,
}

impl TopologicalOrder {
    /// Returns `true` if every node was ordered, i.e. the graph has no cycle.
    #[must_use]
    pub fn is_dag(&self) -> bool {
        self.order.len() == self.node_count
    }

    /// The emitted nodes in order.
    ///
    /// For a DAG this is a permutation of all nodes in which every edge
    /// `u -> v` has `u` before `v`. Otherwise it holds only the nodes that were
    /// released before the cycle blocked progress and is not a valid ordering
    /// of the whole graph.
    #[must_use]
    pub fn order(&self) -> &[NodeId] {
        &self.order
    }

    /// The full ordering, or `None` if the graph contains a cycle.
    #[must_use]
    pub fn into_order(self) -> Option<Vec<NodeId>> {
        self.is_dag().then_some(self.order)
    }

    /// Number of nodes that could not be ordered because of a cycle.
    #[must_use]
    pub fn blocked(&self) -> usize {
        self.node_count - self.order.len()
    }
}

/// Computes a topological ordering of a directed graph using Kahn's algorithm.
///
/// In-degrees count every stored edge, multi-edges and self-loops included,
/// so a self-loop keeps its node from ever being released. The queue is
/// seeded with the zero in-degree nodes in ascending identifier order and then
/// drained first in, first out, which makes the ordering deterministic.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
///
/// # Errors
///
/// Returns [`Error::DirectedOnly`](crate::Error::DirectedOnly) for an undirected graph.
///
/// # Examples
///
/// ```rust
/// use citygraph::{graph::algorithms::topological_order, Graph};
///
/// let mut tasks = Graph::new(true);
/// tasks.add_edge("A", "B", 1);
/// tasks.add_edge("A", "C", 1);
/// tasks.add_edge("B", "D", 1);
/// tasks.add_edge("C", "D", 1);
///
/// let result = topological_order(&tasks)?;
/// assert!(result.is_dag());
/// assert_eq!(tasks.names_of(result.order())?, ["A", "B", "C", "D"]);
///
/// tasks.add_edge("D", "A", 1);
/// assert!(!topological_order(&tasks)?.is_dag());
/// # Ok::<(), citygraph::Error>(())
/// ```
pub fn topological_order<G: Successors>(graph: &G) -> Result<TopologicalOrder> {
    ensure_directed(graph, "topological ordering")?;

    let node_count = graph.node_count();
    let mut in_degree = vec![0usize; node_count];
    for node in graph.node_ids() {
        for succ in graph.successors(node) {
            in_degree[succ.index()] += 1;
        }
    }

    let mut queue: VecDeque<NodeId> = graph
        .node_ids()
        .filter(|node| in_degree[node.index()] == 0)
        .collect();

    let mut order = Vec::with_capacity(node_count);
    while let Some(node) = queue.pop_front() {
        order.push(node);

        for succ in graph.successors(node) {
            in_degree[succ.index()] -= 1;
            if in_degree[succ.index()] == 0 {
                queue.push_back(succ);
            }
        }
    }

    let result = TopologicalOrder { order, node_count };
    debug!(
        ordered = result.order.len(),
        blocked = result.blocked(),
        "topological ordering finished"
    );

    Ok(result)
}
