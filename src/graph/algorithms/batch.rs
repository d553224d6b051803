//! Parallel batches of independent queries.
//!
//! Every algorithm in this crate borrows the graph immutably, so a batch of
//! queries can be spread over the rayon thread pool without any locking. The
//! results come back in the order the queries were given, and each query
//! succeeds or fails on its own.
//!
//! # Examples
//!
//! ```rust
//! use citygraph::{graph::algorithms::batch, Graph};
//!
//! let mut roads = Graph::new(false);
//! roads.add_edge("A", "B", 5);
//! roads.add_edge("B", "C", 7);
//! roads.add_edge("A", "C", 20);
//!
//! let a = roads.id_of("A")?;
//! let c = roads.id_of("C")?;
//! let routes = batch::shortest_paths(&roads, &[(a, c), (c, a), (a, a)]);
//!
//! let distances: Vec<_> = routes
//!     .iter()
//!     .map(|r| r.as_ref().ok().and_then(|route| route.distance()))
//!     .collect();
//! assert_eq!(distances, [Some(12), Some(12), Some(0)]);
//! # Ok::<(), citygraph::Error>(())
//! ```

use rayon::prelude::*;
use tracing::debug;

use crate::{
    graph::{
        algorithms::{bfs, minimum_spanning_tree, shortest_path, ShortestPath, SpanningTree},
        NodeId, Successors, WeightedSuccessors,
    },
    Result,
};

/// Runs one [`shortest_path`] query per `(source, target)` pair, in parallel.
///
/// The returned vector is aligned with `queries`. An invalid identifier only
/// fails its own entry.
pub fn shortest_paths<G>(graph: &G, queries: &[(NodeId, NodeId)]) -> Vec<Result<ShortestPath>>
where
    G: WeightedSuccessors + Sync,
{
    debug!(queries = queries.len(), "running shortest path batch");
    queries
        .par_iter()
        .map(|&(source, target)| shortest_path(graph, source, target))
        .collect()
}

/// Runs one [`bfs`] per start node, in parallel, preserving input order.
pub fn bfs_orders<G>(graph: &G, starts: &[NodeId]) -> Vec<Result<Vec<NodeId>>>
where
    G: Successors + Sync,
{
    debug!(queries = starts.len(), "running traversal batch");
    starts.par_iter().map(|&start| bfs(graph, start)).collect()
}

/// Builds one [`minimum_spanning_tree`] per start node, in parallel,
/// preserving input order.
pub fn spanning_trees<G>(graph: &G, starts: &[NodeId]) -> Vec<Result<SpanningTree>>
where
    G: WeightedSuccessors + Sync,
{
    debug!(queries = starts.len(), "running spanning tree batch");
    starts
        .par_iter()
        .map(|&start| minimum_spanning_tree(graph, start))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, Graph};

    fn create_grid(size: usize) -> Graph {
        let mut graph = Graph::undirected();
        for row in 0..size {
            for col in 0..size {
                let here = format!("{row},{col}");
                if col + 1 < size {
                    graph.add_edge(&here, &format!("{row},{}", col + 1), 1);
                }
                if row + 1 < size {
                    graph.add_edge(&here, &format!("{},{col}", row + 1), 2);
                }
            }
        }
        graph
    }

    #[test]
    fn test_shortest_paths_match_sequential() {
        let graph = create_grid(8);
        let queries: Vec<(NodeId, NodeId)> = (0..graph.node_count())
            .map(|i| (NodeId::new(0), NodeId::new(i)))
            .collect();

        let parallel = shortest_paths(&graph, &queries);
        assert_eq!(parallel.len(), queries.len());

        for (result, &(source, target)) in parallel.into_iter().zip(&queries) {
            let expected = shortest_path(&graph, source, target).unwrap();
            assert_eq!(result.unwrap(), expected);
        }
    }

    #[test]
    fn test_errors_stay_in_their_slot() {
        let graph = create_grid(3);
        let results = shortest_paths(
            &graph,
            &[
                (NodeId::new(0), NodeId::new(8)),
                (NodeId::new(0), NodeId::new(100)),
                (NodeId::new(8), NodeId::new(0)),
            ],
        );

        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(Error::InvalidId { .. })));
        assert!(results[2].is_ok());
    }

    #[test]
    fn test_bfs_orders_preserve_input_order() {
        let graph = create_grid(4);
        let starts: Vec<NodeId> = (0..graph.node_count()).rev().map(NodeId::new).collect();

        let orders = bfs_orders(&graph, &starts);
        for (order, start) in orders.into_iter().zip(starts) {
            let order = order.unwrap();
            assert_eq!(order[0], start);
            assert_eq!(order.len(), graph.node_count());
        }
    }

    #[test]
    fn test_spanning_trees_agree_on_cost() {
        let graph = create_grid(5);
        let starts: Vec<NodeId> = graph.node_ids().collect();

        let costs: Vec<i64> = spanning_trees(&graph, &starts)
            .into_iter()
            .map(|tree| tree.unwrap().total_cost())
            .collect();

        assert!(costs.windows(2).all(|pair| pair[0] == pair[1]));
    }
}
