//! Minimum spanning trees with Prim's algorithm.
//!
//! The tree grows from a start node by repeatedly attaching the cheapest edge
//! that leads to a node not yet in the tree. Only the start's connected
//! component is covered; nodes elsewhere stay outside the tree.
//!
//! On a directed graph the same greedy procedure follows outgoing edges only.
//! The result is a tree of nodes reachable from the start, but it is not
//! guaranteed to be a minimum arborescence.

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

/// A spanning tree grown from a start node.
///
/// `parent(start)` and `parent(n)` for nodes outside the tree are `None`;
/// every other tree node links to the node it was attached through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree {
    start: NodeId,
    total_cost: Weight,
    parent: Vec<Option<NodeId>>,
    /// Weight of the edge each node was attached with, `None` outside the tree.
    attach_weight: Vec<Option<Weight>>,
}

impl SpanningTree {
    /// Node the tree was grown from.
    #[must_use]
    pub fn start(&self) -> NodeId {
        self.start
    }

    /// Sum of the weights of all tree edges.
    #[must_use]
    pub fn total_cost(&self) -> Weight {
        self.total_cost
    }

    /// Parent link of `node`; `None` for the start, for nodes outside the tree
    /// and for identifiers outside the graph.
    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.parent.get(node.index()).copied().flatten()
    }

    /// Parent links for every node, indexed by identifier.
    #[must_use]
    pub fn parents(&self) -> &[Option<NodeId>] {
        &self.parent
    }

    /// Returns `true` if `node` was attached to the tree (the start included).
    #[must_use]
    pub fn in_tree(&self, node: NodeId) -> bool {
        self.attach_weight
            .get(node.index())
            .is_some_and(Option::is_some)
    }

    /// Number of nodes in the tree, the start included.
    #[must_use]
    pub fn reached_count(&self) -> usize {
        self.attach_weight.iter().filter(|w| w.is_some()).count()
    }

    /// Returns `true` if every node of the graph is in the tree.
    #[must_use]
    pub fn is_spanning(&self) -> bool {
        self.reached_count() == self.attach_weight.len()
    }

    /// Tree edges as `(parent, child, weight)`, in child identifier order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, Weight)> + '_ {
        self.parent
            .iter()
            .zip(&self.attach_weight)
            .enumerate()
            .filter_map(|(child, (parent, weight))| {
                Some((parent.as_ref().copied()?, NodeId::new(child), (*weight)?))
            })
    }
}

/// Computes a minimum spanning tree of `start`'s component with Prim's algorithm.
///
/// Each node's key is the cheapest known edge connecting it to the tree. A
/// node joins the tree exactly once, with the key it has when it is first
/// popped; later entries for it are stale and skipped. Ties between equal keys
/// go to the lowest node identifier and a key only changes on a strict
/// improvement, so the tree is reproducible.
///
/// # Complexity
///
/// - Time: O((V + E) log V)
/// - Space: O(V + E)
///
/// # Errors
///
/// Returns [`Error::InvalidId`] if `start` is not a node of `graph`, and
/// [`Error::Overflow`] if the total cost exceeds the [`Weight`] range.
///
/// # Examples
///
/// ```rust
/// use citygraph::{graph::algorithms::minimum_spanning_tree, Graph};
///
/// let mut roads = Graph::new(false);
/// roads.add_edge("Hub", "North", 4);
/// roads.add_edge("Hub", "East", 1);
/// roads.add_edge("Hub", "South", 8);
/// roads.add_edge("North", "East", 2);
///
/// let hub = roads.id_of("Hub")?;
/// let tree = minimum_spanning_tree(&roads, hub)?;
/// assert_eq!(tree.total_cost(), 11);
/// assert_eq!(tree.parent(roads.id_of("North")?), Some(roads.id_of("East")?));
/// assert!(tree.is_spanning());
/// # Ok::<(), citygraph::Error>(())
/// ```
#[instrument(level = "debug", skip_all, fields(start = %start))]
pub fn minimum_spanning_tree<G: WeightedSuccessors>(
    graph: &G,
    start: NodeId,
) -> Result<SpanningTree> {
    ensure_node(graph, start)?;

    let node_count = graph.node_count();
    let mut key: Vec<Option<Weight>> = vec![None; node_count];
    let mut parent: Vec<Option<NodeId>> = vec![None; node_count];
    let mut attach_weight: Vec<Option<Weight>> = vec![None; node_count];
    let mut frontier = Frontier::with_capacity(node_count);

    key[start.index()] = Some(0);
    frontier.push(0, start);

    while let Some(entry) = frontier.pop() {
        let node = entry.node;
        if attach_weight[node.index()].is_some() {
            continue;
        }
        attach_weight[node.index()] = key[node.index()];

        for (next, weight) in graph.weighted_successors(node) {
            let improves = key[next.index()].map_or(true, |best| weight < best);
            if attach_weight[next.index()].is_none() && improves {
                key[next.index()] = Some(weight);
                parent[next.index()] = Some(node);
                frontier.push(Cost::from(weight), next);
            }
        }
    }

    let total_cost: Cost = attach_weight
        .iter()
        .enumerate()
        .filter(|&(index, _)| index != start.index())
        .filter_map(|(_, weight)| weight.map(Cost::from))
        .sum();
    let total_cost =
        Weight::try_from(total_cost).map_err(|_| Error::Overflow("spanning tree cost"))?;

    let tree = SpanningTree {
        start,
        total_cost,
        parent,
        attach_weight,
    };
    debug!(
        reached = tree.reached_count(),
        total_cost,
        pushes = frontier.pushes(),
        "spanning tree built"
    );

    Ok(tree)
}
