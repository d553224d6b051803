//! # citygraph Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the citygraph library. Import it to get the graph, the algorithms and the loader
//! in one line.
//!
//! ```rust
//! use citygraph::prelude::*;
//!
//! let mut tasks = Graph::new(true);
//! tasks.add_edge("survey", "dig", 1);
//! tasks.add_edge("dig", "pour", 1);
//!
//! let schedule = algorithms::topological_order(&tasks)?;
//! assert!(schedule.is_dag());
//! # Ok::<(), Error>(())
//! ```

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all citygraph operations
pub use crate::Error;

/// The result type used throughout citygraph
pub use crate::Result;

// ================================================================================================
// Graph Storage
// ================================================================================================

/// The string-keyed graph and its construction options
pub use crate::graph::{Graph, GraphConfig};

/// Node identifiers, adjacency entries and weights
pub use crate::graph::{Edge, NodeId, Weight};

/// The name index used by every graph
pub use crate::graph::StringIndex;

/// Graph abstraction traits the algorithms are written against
pub use crate::graph::{GraphBase, Successors, WeightedSuccessors};

// ================================================================================================
// Algorithms
// ================================================================================================

/// The algorithms module, for `algorithms::shortest_path(...)` style calls
pub use crate::graph::algorithms;

/// Algorithm result records
pub use crate::graph::algorithms::{ShortestPath, SpanningTree, TopologicalOrder};

// ================================================================================================
// Loading
// ================================================================================================

/// Edge-list formats, options and load summaries
pub use crate::loader::{EdgeListKind, EdgeRecord, LoadOptions, LoadSummary};
