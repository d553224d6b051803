//! Directed cycle detection.
//!
//! A depth-first search over every node with three visit states. Reaching a
//! node that is still on the current path means a back edge, and a back edge
//! means a cycle. The search keeps an explicit stack of `(node, successors)`
//! frames instead of recursing, so long dependency chains cannot exhaust the
//! call stack.

use tracing::debug;

use crate::{
    graph::{algorithms::ensure_directed, NodeId, Successors},
    Result,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    Unvisited,
    OnPath,
    Finished,
}

/// Checks whether a directed graph contains at least one cycle.
///
/// Every node is used as a search root (already finished nodes are skipped),
/// so cycles are found even in parts of the graph not reachable from node 0.
/// A self-loop counts as a cycle. The graph is not modified.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
///
/// # Errors
///
/// Returns [`Error::DirectedOnly`](crate::Error::DirectedOnly) for an undirected
/// graph, where every edge would otherwise read as a two-node cycle.
///
/// # Examples
///
/// ```rust
/// use citygraph::{graph::algorithms::has_directed_cycle, Graph};
///
/// let mut tasks = Graph::new(true);
/// tasks.add_edge("A", "B", 1);
/// tasks.add_edge("B", "C", 1);
/// assert!(!has_directed_cycle(&tasks)?);
///
/// tasks.add_edge("C", "A", 1);
/// assert!(has_directed_cycle(&tasks)?);
/// # Ok::<(), citygraph::Error>(())
/// ```
pub fn has_directed_cycle<G: Successors>(graph: &G) -> Result<bool> {
    ensure_directed(graph, "cycle detection")?;

    let mut state = vec![VisitState::Unvisited; graph.node_count()];
    let mut stack = Vec::new();

    for root in graph.node_ids() {
        if state[root.index()] != VisitState::Unvisited {
            continue;
        }

        state[root.index()] = VisitState::OnPath;
        stack.push((root, graph.successors(root)));

        loop {
            let (node, next): (NodeId, Option<NodeId>) = match stack.last_mut() {
                Some((node, successors)) => (*node, successors.next()),
                None => break,
            };

            match next {
                Some(succ) => match state[succ.index()] {
                    VisitState::OnPath => {
                        debug!(from = %node, to = %succ, "back edge found");
                        return Ok(true);
                    }
                    VisitState::Unvisited => {
                        state[succ.index()] = VisitState::OnPath;
                        stack.push((succ, graph.successors(succ)));
                    }
                    VisitState::Finished => {}
                },
                None => {
                    state[node.index()] = VisitState::Finished;
                    stack.pop();
                }
            }
        }
    }

    Ok(false)
}
