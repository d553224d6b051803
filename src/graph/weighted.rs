//! String-keyed weighted graph.
//!
//! This module provides [`Graph`], the shared representation every algorithm
//! in this crate reads from. It combines three flat tables addressed by
//! [`NodeId`]:
//!
//! - a [`StringIndex`] mapping node names to identifiers
//! - a name table mapping identifiers back to names (`names[id]`)
//! - an adjacency table holding each node's outgoing [`Edge`] list in insertion order
//!
//! Nodes and edges are only ever added. Whether an edge is stored once
//! (directed) or at both endpoints (undirected) is decided when the graph is
//! created and cannot change afterwards.

use tracing::instrument;

use crate::{
    graph::{
        edge::{Edge, Weight},
        index::StringIndex,
        node::NodeId,
        traits::{GraphBase, Successors, WeightedSuccessors},
        GraphConfig,
    },
    Error, Result,
};

/// A weighted graph whose nodes are identified by name.
///
/// `Graph` supports:
///
/// - Idempotent node registration by name, with dense identifiers
/// - Implicit node registration when an edge mentions an unseen name
/// - Multi-edges and self-loops (neither is deduplicated)
/// - O(1) access to a node's adjacency list
///
/// # Edge Weights
///
/// Weights are stored as given. [`shortest_path`](crate::graph::algorithms::shortest_path)
/// and [`minimum_spanning_tree`](crate::graph::algorithms::minimum_spanning_tree)
/// require non-negative weights; the graph does not check this and the output of
/// those algorithms is unspecified otherwise.
///
/// # Thread Safety
///
/// `Graph` is [`Send`] and [`Sync`]. All queries take `&self`, so any number of
/// algorithms may read one graph concurrently; mutation needs `&mut self`.
///
/// # Examples
///
/// ```rust
/// use citygraph::Graph;
///
/// let mut roads = Graph::new(false);
/// roads.add_edge("Harbor", "Market", 4);
/// roads.add_edge("Market", "Mill", 2);
///
/// assert_eq!(roads.node_count(), 3);
/// assert_eq!(roads.edge_count(), 2);
///
/// let market = roads.id_of("Market")?;
/// assert_eq!(roads.neighbors(market).len(), 2);
/// assert_eq!(roads.name_of(market)?, "Market");
/// # Ok::<(), citygraph::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    /// Edge semantics, fixed at construction
    directed: bool,
    /// Name to identifier
    index: StringIndex,
    /// Identifier to name
    names: Vec<String>,
    /// Outgoing adjacency per node, insertion ordered
    adjacency: Vec<Vec<Edge>>,
    /// Number of `add_edge` calls
    edge_count: usize,
}

impl Default for Graph {
    fn default() -> Self {
        Self::with_config(&GraphConfig::default())
    }
}

impl Graph {
    /// Creates an empty graph with default capacities.
    #[must_use]
    pub fn new(directed: bool) -> Self {
        Self::with_config(&GraphConfig::new().directed(directed))
    }

    /// Creates an empty directed graph.
    #[must_use]
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Creates an empty undirected graph.
    #[must_use]
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Creates an empty graph from an explicit configuration.
    #[must_use]
    pub fn with_config(config: &GraphConfig) -> Self {
        Graph {
            directed: config.directed,
            index: StringIndex::new(config.index_capacity),
            names: Vec::with_capacity(config.node_capacity),
            adjacency: Vec::with_capacity(config.node_capacity),
            edge_count: 0,
        }
    }

    /// Registers `name` and returns its identifier.
    ///
    /// Idempotent: a name that is already known returns its existing identifier
    /// and leaves the node count unchanged.
    pub fn add_node(&mut self, name: &str) -> NodeId {
        let id = self.index.get_or_create(name);
        if id.index() == self.names.len() {
            self.names.push(name.to_string());
            self.adjacency.push(Vec::new());
        }
        id
    }

    /// Adds an edge between two named nodes, registering either name if new.
    ///
    /// In a directed graph one adjacency entry `from -> to` is appended; in an
    /// undirected graph `to -> from` is appended as well. Parallel edges and
    /// self-loops are stored as given.
    ///
    /// Weights are not validated. Routing and spanning-tree queries assume
    /// they are non-negative.
    #[instrument(level = "trace", skip(self))]
    pub fn add_edge(&mut self, from: &str, to: &str, weight: Weight) {
        let source = self.add_node(from);
        let target = self.add_node(to);

        self.adjacency[source.index()].push(Edge::new(target, weight));
        if !self.directed {
            self.adjacency[target.index()].push(Edge::new(source, weight));
        }
        self.edge_count += 1;
    }

    /// Returns `true` if edges are stored one-way.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns the number of registered nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    /// Returns the number of edges added, counting each undirected edge once.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the adjacency list of `node` in insertion order.
    ///
    /// An identifier outside the graph yields an empty slice.
    #[must_use]
    pub fn neighbors(&self, node: NodeId) -> &[Edge] {
        self.adjacency
            .get(node.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns the identifier registered for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if `name` was never added.
    pub fn id_of(&self, name: &str) -> Result<NodeId> {
        self.index.require(name)
    }

    /// Returns the identifier registered for `name`, if any.
    #[must_use]
    pub fn try_id_of(&self, name: &str) -> Option<NodeId> {
        self.index.lookup(name)
    }

    /// Returns `true` if `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains(name)
    }

    /// Returns the name of `node`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidId`] if `node` is not below [`node_count`](Self::node_count).
    pub fn name_of(&self, node: NodeId) -> Result<&str> {
        self.names
            .get(node.index())
            .map(String::as_str)
            .ok_or(Error::InvalidId {
                id: node,
                node_count: self.names.len(),
            })
    }

    /// Checks that `node` belongs to this graph.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidId`] if it does not.
    pub fn check_node(&self, node: NodeId) -> Result<()> {
        if node.index() < self.names.len() {
            Ok(())
        } else {
            Err(Error::InvalidId {
                id: node,
                node_count: self.names.len(),
            })
        }
    }

    /// Returns an iterator over all node identifiers in ascending order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.names.len()).map(NodeId::new)
    }

    /// Returns an iterator over `(id, name)` pairs in identifier order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &str)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (NodeId::new(i), name.as_str()))
    }

    /// Maps a sequence of identifiers back to names.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidId`] for the first identifier outside the graph.
    pub fn names_of(&self, nodes: &[NodeId]) -> Result<Vec<&str>> {
        nodes.iter().map(|&node| self.name_of(node)).collect()
    }

    /// Returns the name index backing this graph.
    #[must_use]
    pub fn index(&self) -> &StringIndex {
        &self.index
    }
}

impl GraphBase for Graph {
    fn node_count(&self) -> usize {
        self.names.len()
    }

    fn is_directed(&self) -> bool {
        self.directed
    }
}

impl Successors for Graph {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.neighbors(node).iter().map(|edge| edge.to)
    }
}

impl WeightedSuccessors for Graph {
    fn weighted_successors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, Weight)> {
        self.neighbors(node).iter().map(|edge| (edge.to, edge.weight))
    }
}
