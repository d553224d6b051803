// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
//#![deny(unsafe_code)]
// - 'loader.rs' uses mmap to map an edge list into memory

//! # citygraph
//!
//! A compact graph engine for city-scale road and task networks. Nodes are
//! addressed by name (`"Harbor"`, `"pour-foundation"`) and internally mapped
//! to dense integer identifiers through a purpose-built string index, which
//! lets every algorithm work on flat, index-addressed arrays.
//!
//! ## Features
//!
//! - **String-keyed nodes** - A chained hash index assigns dense ids in first-seen order
//! - **Directed or undirected** - Edge semantics are fixed when the graph is built
//! - **Reachability** - Breadth-first traversal and directed cycle detection
//! - **Routing** - Dijkstra shortest paths over non-negative integer weights
//! - **Connectivity** - Prim minimum spanning tree from a chosen start node
//! - **Scheduling** - Kahn topological order for dependency graphs
//! - **Loading** - `from;to;weight` edge lists from strings or memory-mapped files
//!
//! ## Quick Start
//!
//! ```rust
//! use citygraph::prelude::*;
//!
//! let mut roads = Graph::new(false);
//! roads.add_edge("A", "B", 5);
//! roads.add_edge("B", "C", 7);
//! roads.add_edge("A", "C", 20);
//!
//! let from = roads.id_of("A")?;
//! let to = roads.id_of("C")?;
//! let route = algorithms::shortest_path(&roads, from, to)?;
//!
//! assert_eq!(route.distance(), Some(12));
//! let names: Vec<&str> = route
//!     .path()
//!     .iter()
//!     .map(|&id| roads.name_of(id))
//!     .collect::<citygraph::Result<_>>()?;
//! assert_eq!(names, ["A", "B", "C"]);
//! # Ok::<(), citygraph::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`graph`] - [`graph::StringIndex`], [`graph::Graph`] and the identifier types
//! - [`graph::algorithms`] - BFS, cycle detection, Dijkstra, Prim, Kahn and batch queries
//! - [`loader`] - Edge-list parsing for road and task files
//! - [`prelude`] - Convenient re-exports of commonly used types
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Concurrency
//!
//! Every operation is synchronous and runs to completion. Algorithms borrow the
//! graph immutably, so any number of queries may share one snapshot; mutation
//! requires exclusive access, which the borrow checker enforces.

#[macro_use]
pub(crate) mod error;

pub mod graph;
pub mod loader;
pub mod prelude;

/// `citygraph` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always [`Error`].
///
/// # Examples
///
/// ```rust
/// use citygraph::{Graph, Result};
///
/// fn first_name(graph: &Graph) -> Result<&str> {
///     graph.name_of(citygraph::graph::NodeId::new(0))
/// }
///
/// let mut graph = Graph::new(true);
/// graph.add_node("depot");
/// assert_eq!(first_name(&graph)?, "depot");
/// # Ok::<(), citygraph::Error>(())
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `citygraph` Error type
///
/// The main error type for all operations in this crate.
pub use error::Error;

/// The string-keyed weighted graph.
///
/// See [`graph::Graph`] for construction and queries.
pub use graph::{Graph, GraphConfig};

/// Edge-list loading entry points.
pub use loader::{EdgeListKind, LoadOptions, LoadSummary};
