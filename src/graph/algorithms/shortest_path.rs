//! Single-pair shortest paths with Dijkstra's algorithm.
//!
//! The search settles nodes in order of distance from the source and stops as
//! soon as the target is settled. A settled node is never revisited, so each
//! node is expanded at most once. Edge weights must be non-negative; the
//! result is unspecified otherwise (the search still terminates).
//!
//! Distances accumulate in a 128-bit [`Cost`] so no intermediate sum can
//! overflow. Only the final distance has to fit in a [`Weight`].

use tracing::{debug, instrument};

use crate::{
    graph::{
        algorithms::{
            ensure_node,
            frontier::{Cost, Frontier},
        },
        NodeId, Weight, WeightedSuccessors,
    },
    Error, Result,
};

/// Result of a single-pair shortest path query.
///
/// An unreachable target is a normal outcome, reported by
/// [`is_reachable`](Self::is_reachable) returning `false`, an absent distance
/// and an empty path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    distance: Option<Weight>,
    path: Vec<NodeId>,
    settled: usize,
}

impl ShortestPath {
    fn unreachable(settled: usize) -> Self {
        ShortestPath {
            distance: None,
            path: Vec::new(),
            settled,
        }
    }

    /// Returns `true` if the target can be reached from the source.
    #[must_use]
    pub fn is_reachable(&self) -> bool {
        self.distance.is_some()
    }

    /// Total weight of the path, or `None` when the target is unreachable.
    #[must_use]
    pub fn distance(&self) -> Option<Weight> {
        self.distance
    }

    /// Nodes from source to target inclusive; empty when unreachable.
    ///
    /// Consecutive entries are joined by an edge of the graph and the weights
    /// of those edges sum to [`distance`](Self::distance).
    #[must_use]
    pub fn path(&self) -> &[NodeId] {
        &self.path
    }

    /// Consumes the result and returns the node sequence.
    #[must_use]
    pub fn into_path(self) -> Vec<NodeId> {
        self.path
    }

    /// Number of edges on the path, or `None` when unreachable.
    #[must_use]
    pub fn hops(&self) -> Option<usize> {
        self.is_reachable().then(|| self.path.len() - 1)
    }

    /// Number of nodes settled before the search finished.
    #[must_use]
    pub fn settled(&self) -> usize {
        self.settled
    }
}

/// Finds the minimum-total-weight path from `source` to `target`.
///
/// Among several paths of equal weight the one produced is reproducible: the
/// frontier breaks ties on the lowest node identifier and a node's
/// predecessor only changes on a strict improvement. When `source == target`
/// the result is distance 0 with the single-node path `[source]`.
///
/// # Complexity
///
/// - Time: O((V + E) log V)
/// - Space: O(V + E) for the distance table and the lazy frontier
///
/// # Errors
///
/// Returns [`Error::InvalidId`] if either endpoint is not a node of `graph`,
/// and [`Error::Overflow`] if the shortest distance exceeds [`Weight::MAX`].
///
/// # Examples
///
/// ```rust
/// use citygraph::{graph::algorithms::shortest_path, Graph};
///
/// let mut roads = Graph::new(false);
/// roads.add_edge("A", "B", 5);
/// roads.add_edge("B", "C", 7);
/// roads.add_edge("A", "C", 20);
/// let island = roads.add_node("D");
///
/// let route = shortest_path(&roads, roads.id_of("A")?, roads.id_of("C")?)?;
/// assert_eq!(route.distance(), Some(12));
/// assert_eq!(route.hops(), Some(2));
///
/// let nowhere = shortest_path(&roads, roads.id_of("A")?, island)?;
/// assert!(!nowhere.is_reachable());
/// assert!(nowhere.path().is_empty());
/// # Ok::<(), citygraph::Error>(())
/// ```
#[instrument(level = "debug", skip_all, fields(source = %source, target = %target))]
pub fn shortest_path<G: WeightedSuccessors>(
    graph: &G,
    source: NodeId,
    target: NodeId,
) -> Result<ShortestPath> {
    ensure_node(graph, source)?;
    ensure_node(graph, target)?;

    let node_count = graph.node_count();
    let mut distance: Vec<Option<Cost>> = vec![None; node_count];
    let mut parent: Vec<Option<NodeId>> = vec![None; node_count];
    let mut done = vec![false; node_count];
    let mut frontier = Frontier::with_capacity(node_count);
    let mut settled = 0;

    distance[source.index()] = Some(0);
    frontier.push(0, source);

    while let Some(entry) = frontier.pop() {
        let node = entry.node;
        if done[node.index()] || distance[node.index()] != Some(entry.priority) {
            // Stale entry, the node was reached more cheaply later
            continue;
        }

        done[node.index()] = true;
        settled += 1;
        if node == target {
            break;
        }

        for (next, weight) in graph.weighted_successors(node) {
            let candidate = entry.priority + Cost::from(weight);
            let improves = distance[next.index()].map_or(true, |best| candidate < best);
            if !done[next.index()] && improves {
                distance[next.index()] = Some(candidate);
                parent[next.index()] = Some(node);
                frontier.push(candidate, next);
            }
        }
    }

    debug!(settled, pushes = frontier.pushes(), "search finished");

    let Some(total) = distance[target.index()] else {
        return Ok(ShortestPath::unreachable(settled));
    };
    let total = Weight::try_from(total).map_err(|_| Error::Overflow("shortest path distance"))?;

    let Some(path) = trace_back(&parent, source, target) else {
        return Ok(ShortestPath::unreachable(settled));
    };

    Ok(ShortestPath {
        distance: Some(total),
        path,
        settled,
    })
}

/// Walks predecessor links from `target` back to `source`.
///
/// The walk is bounded by the node count.
fn trace_back(parent: &[Option<NodeId>], source: NodeId, target: NodeId) -> Option<Vec<NodeId>> {
    let mut path = vec![target];
    let mut current = target;

    while current != source {
        if path.len() > parent.len() {
            return None;
        }
        current = parent[current.index()]?;
        path.push(current);
    }

    path.reverse();
    Some(path)
}

#[cfg(test)]
mod tests {
    use crate::{
        graph::{algorithms::shortest_path::shortest_path, NodeId},
        Error, Graph,
    };

    fn create_triangle() -> Graph {
        let mut graph = Graph::undirected();
        graph.add_edge("A", "B", 5);
        graph.add_edge("B", "C", 7);
        graph.add_edge("A", "C", 20);
        graph
    }

    #[test]
    fn test_prefers_cheaper_two_hop_route() {
        let graph = create_triangle();
        let a = graph.id_of("A").unwrap();
        let c = graph.id_of("C").unwrap();

        let result = shortest_path(&graph, a, c).unwrap();
        assert!(result.is_reachable());
        assert_eq!(result.distance(), Some(12));
        assert_eq!(graph.names_of(result.path()).unwrap(), ["A", "B", "C"]);
    }

    #[test]
    fn test_source_equals_target() {
        let graph = create_triangle();
        let b = graph.id_of("B").unwrap();

        let result = shortest_path(&graph, b, b).unwrap();
        assert_eq!(result.distance(), Some(0));
        assert_eq!(result.path(), &[b]);
        assert_eq!(result.hops(), Some(0));
    }

    #[test]
    fn test_unreachable_target() {
        let mut graph = create_triangle();
        let d = graph.add_node("D");
        let a = graph.id_of("A").unwrap();

        let result = shortest_path(&graph, a, d).unwrap();
        assert!(!result.is_reachable());
        assert_eq!(result.distance(), None);
        assert!(result.path().is_empty());
        assert_eq!(result.hops(), None);
    }

    #[test]
    fn test_directed_edges_are_one_way() {
        let mut graph = Graph::directed();
        graph.add_edge("A", "B", 1);

        let a = graph.id_of("A").unwrap();
        let b = graph.id_of("B").unwrap();
        assert_eq!(shortest_path(&graph, a, b).unwrap().distance(), Some(1));
        assert!(!shortest_path(&graph, b, a).unwrap().is_reachable());
    }

    #[test]
    fn test_multi_edge_uses_cheapest() {
        let mut graph = Graph::undirected();
        graph.add_edge("A", "B", 9);
        graph.add_edge("A", "B", 3);

        let a = graph.id_of("A").unwrap();
        let b = graph.id_of("B").unwrap();
        assert_eq!(shortest_path(&graph, a, b).unwrap().distance(), Some(3));
    }

    #[test]
    fn test_zero_weight_edges_and_self_loops() {
        let mut graph = Graph::directed();
        graph.add_edge("A", "A", 0);
        graph.add_edge("A", "B", 0);
        graph.add_edge("B", "C", 4);

        let a = graph.id_of("A").unwrap();
        let c = graph.id_of("C").unwrap();
        let result = shortest_path(&graph, a, c).unwrap();
        assert_eq!(result.distance(), Some(4));
        assert_eq!(graph.names_of(result.path()).unwrap(), ["A", "B", "C"]);
    }

    #[test]
    fn test_equal_cost_tie_goes_to_lower_id() {
        // S -> L -> T and S -> H -> T both cost 2; L has the lower id
        let mut graph = Graph::directed();
        graph.add_node("S");
        graph.add_node("L");
        graph.add_node("H");
        graph.add_node("T");
        graph.add_edge("S", "H", 1);
        graph.add_edge("S", "L", 1);
        graph.add_edge("H", "T", 1);
        graph.add_edge("L", "T", 1);

        let s = graph.id_of("S").unwrap();
        let t = graph.id_of("T").unwrap();
        let result = shortest_path(&graph, s, t).unwrap();
        assert_eq!(graph.names_of(result.path()).unwrap(), ["S", "L", "T"]);
    }

    #[test]
    fn test_stops_once_target_settled() {
        // Target is one cheap hop away; the expensive tail should never be settled
        let mut graph = Graph::directed();
        graph.add_edge("S", "T", 1);
        graph.add_edge("S", "X", 50);
        graph.add_edge("X", "Y", 50);

        let s = graph.id_of("S").unwrap();
        let t = graph.id_of("T").unwrap();
        let result = shortest_path(&graph, s, t).unwrap();
        assert_eq!(result.settled(), 2);
    }

    #[test]
    fn test_path_weights_sum_to_distance() {
        let mut graph = Graph::undirected();
        graph.add_edge("A", "B", 2);
        graph.add_edge("B", "C", 2);
        graph.add_edge("C", "D", 2);
        graph.add_edge("A", "D", 7);
        graph.add_edge("B", "D", 5);

        let a = graph.id_of("A").unwrap();
        let d = graph.id_of("D").unwrap();
        let result = shortest_path(&graph, a, d).unwrap();

        let sum: i64 = result
            .path()
            .windows(2)
            .map(|pair| {
                graph
                    .neighbors(pair[0])
                    .iter()
                    .filter(|edge| edge.to == pair[1])
                    .map(|edge| edge.weight)
                    .min()
                    .unwrap()
            })
            .sum();
        assert_eq!(result.distance(), Some(6));
        assert_eq!(sum, 6);
    }

    #[test]
    fn test_maximum_weight_edge_is_reachable() {
        let mut graph = Graph::undirected();
        graph.add_edge("A", "B", i64::MAX);

        let a = graph.id_of("A").unwrap();
        let b = graph.id_of("B").unwrap();
        let result = shortest_path(&graph, a, b).unwrap();
        assert!(result.is_reachable());
        assert_eq!(result.distance(), Some(i64::MAX));
        assert_eq!(result.path(), &[a, b]);
    }

    #[test]
    fn test_distance_beyond_weight_range_is_an_error() {
        let mut graph = Graph::directed();
        graph.add_edge("A", "B", i64::MAX - 1);
        graph.add_edge("B", "C", 5);

        let a = graph.id_of("A").unwrap();
        let c = graph.id_of("C").unwrap();
        assert!(matches!(
            shortest_path(&graph, a, c),
            Err(Error::Overflow(_))
        ));
    }

    #[test]
    fn test_huge_detour_does_not_hide_short_route() {
        // The A -> B -> C sum exceeds i64 but the direct edge is cheap
        let mut graph = Graph::directed();
        graph.add_edge("A", "B", i64::MAX);
        graph.add_edge("B", "C", i64::MAX);
        graph.add_edge("A", "C", 1);

        let a = graph.id_of("A").unwrap();
        let b = graph.id_of("B").unwrap();
        let c = graph.id_of("C").unwrap();
        assert_eq!(shortest_path(&graph, a, c).unwrap().distance(), Some(1));
        assert_eq!(shortest_path(&graph, a, b).unwrap().distance(), Some(i64::MAX));
    }

    #[test]
    fn test_invalid_endpoint() {
        let graph = create_triangle();
        assert!(matches!(
            shortest_path(&graph, NodeId::new(0), NodeId::new(3)),
            Err(Error::InvalidId { node_count: 3, .. })
        ));
        assert!(matches!(
            shortest_path(&graph, NodeId::new(99), NodeId::new(0)),
            Err(Error::InvalidId { .. })
        ));
    }
}
