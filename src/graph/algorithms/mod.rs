//! Graph algorithms for road networks and task dependencies.
//!
//! Every algorithm here reads a graph through the traits in
//! [`crate::graph`] and never mutates it, so several of them may run over one
//! graph at the same time.
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`bfs`] - Breadth-first discovery order from a start node
//! - [`bfs_iter`] - Lazy breadth-first iterator
//!
//! ## Cycle Detection
//!
//! - [`has_directed_cycle`] - Check whether a directed graph contains any cycle
//!
//! ## Routing
//!
//! - [`shortest_path`] - Dijkstra single-pair shortest path
//! - [`ShortestPath`] - Distance and node sequence of a route
//!
//! ## Spanning Trees
//!
//! - [`minimum_spanning_tree`] - Prim's algorithm from a start node
//! - [`SpanningTree`] - Parent links and total cost of the tree
//!
//! ## Topological Ordering
//!
//! - [`topological_order`] - Kahn's algorithm with cycle reporting
//! - [`TopologicalOrder`] - Ordering plus DAG verdict
//!
//! ## Batches
//!
//! - [`batch`] - Many independent queries over one graph, in parallel
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | BFS | O(V + E) | Reachability, hop layers |
//! | Cycle detection | O(V + E) | Validating a task graph |
//! | Dijkstra | O((V + E) log V) | Cheapest route between two places |
//! | Prim | O((V + E) log V) | Cheapest road network connecting everything |
//! | Kahn | O(V + E) | Task scheduling order |
//!
//! # Examples
//!
//! ## Routing
//!
//! ```rust
//! use citygraph::{graph::algorithms, Graph};
//!
//! let mut roads = Graph::new(false);
//! roads.add_edge("A", "B", 5);
//! roads.add_edge("B", "C", 7);
//! roads.add_edge("A", "C", 20);
//!
//! let route = algorithms::shortest_path(&roads, roads.id_of("A")?, roads.id_of("C")?)?;
//! assert_eq!(route.distance(), Some(12));
//! assert_eq!(roads.names_of(route.path())?, ["A", "B", "C"]);
//! # Ok::<(), citygraph::Error>(())
//! ```
//!
//! ## Scheduling
//!
//! ```rust
//! use citygraph::{graph::algorithms, Graph};
//!
//! let mut tasks = Graph::new(true);
//! tasks.add_edge("survey", "excavate", 1);
//! tasks.add_edge("excavate", "pave", 1);
//! tasks.add_edge("survey", "permits", 1);
//!
//! assert!(!algorithms::has_directed_cycle(&tasks)?);
//!
//! let schedule = algorithms::topological_order(&tasks)?;
//! assert!(schedule.is_dag());
//! assert_eq!(
//!     tasks.names_of(schedule.order())?,
//!     ["survey", "excavate", "permits", "pave"]
//! );
//! # Ok::<(), citygraph::Error>(())
//! ```

pub mod batch;
mod cycles;
mod frontier;
mod shortest_path;
mod spanning_tree;
mod topological;
mod traversal;

pub use cycles::has_directed_cycle;
pub use shortest_path::{shortest_path, ShortestPath};
pub use spanning_tree::{minimum_spanning_tree, SpanningTree};
pub use topological::{topological_order, TopologicalOrder};
pub use traversal::{bfs, bfs_iter, BfsIterator};

use crate::{
    graph::{GraphBase, NodeId},
    Error, Result,
};

/// Fails with [`Error::InvalidId`] unless `node` belongs to `graph`.
pub(crate) fn ensure_node<G: GraphBase>(graph: &G, node: NodeId) -> Result<()> {
    if graph.contains_node(node) {
        Ok(())
    } else {
        Err(Error::InvalidId {
            id: node,
            node_count: graph.node_count(),
        })
    }
}

/// Fails with [`Error::DirectedOnly`] when `graph` stores edges in both directions.
pub(crate) fn ensure_directed<G: GraphBase>(graph: &G, operation: &'static str) -> Result<()> {
    if graph.is_directed() {
        Ok(())
    } else {
        Err(Error::DirectedOnly(operation))
    }
}
