//! Construction-time configuration for [`Graph`](crate::graph::Graph).

/// Initial bucket count requested for a graph's name index.
pub const DEFAULT_GRAPH_INDEX_CAPACITY: usize = 32;

/// Configuration for building a [`Graph`](crate::graph::Graph).
///
/// # Examples
///
/// ```rust
/// use citygraph::{Graph, GraphConfig};
///
/// let config = GraphConfig::new().directed(true).node_capacity(1_000);
/// let graph = Graph::with_config(&config);
/// assert!(graph.is_directed());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphConfig {
    /// Whether edges are stored one-way (`true`) or at both endpoints (`false`).
    pub directed: bool,
    /// Initial bucket request for the name index (rounded to a power of two).
    pub index_capacity: usize,
    /// Expected number of nodes, used to pre-size the node tables.
    pub node_capacity: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            directed: false,
            index_capacity: DEFAULT_GRAPH_INDEX_CAPACITY,
            node_capacity: 0,
        }
    }
}

impl GraphConfig {
    /// Creates the default configuration (undirected).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the edge semantics.
    #[must_use]
    pub const fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Sets the initial name-index bucket request.
    #[must_use]
    pub const fn index_capacity(mut self, capacity: usize) -> Self {
        self.index_capacity = capacity;
        self
    }

    /// Sets the expected node count.
    #[must_use]
    pub const fn node_capacity(mut self, capacity: usize) -> Self {
        self.node_capacity = capacity;
        self
    }
}
