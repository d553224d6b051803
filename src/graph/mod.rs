//! Graph storage and algorithms for road networks and task dependencies.
//!
//! # Architecture
//!
//! - [`NodeId`] - Dense, copyable node identifier
//! - [`StringIndex`] - Chained hash table mapping node names to identifiers
//! - [`Edge`] - Adjacency entry: target node and integer weight
//! - [`Graph`] - Name-keyed adjacency-list graph, directed or undirected
//! - [`GraphConfig`] - Construction options for [`Graph`]
//! - [`algorithms`] - BFS, cycle detection, Dijkstra, Prim and Kahn
//!
//! # Traits
//!
//! Algorithms are generic over small traits instead of the concrete graph:
//!
//! - [`GraphBase`] - node count, identifier iteration, edge semantics
//! - [`Successors`] - forward adjacency
//! - [`WeightedSuccessors`] - forward adjacency with weights
//!
//! # Identifiers
//!
//! Nodes are numbered `0, 1, 2, …` in the order their names are first seen.
//! Identifiers stay valid for the lifetime of the graph because nodes are
//! never removed, which lets every algorithm keep its per-node state in a flat
//! `Vec` indexed by [`NodeId::index`].

mod config;
mod edge;
mod index;
mod node;
mod traits;
mod weighted;

pub mod algorithms;

pub use config::{GraphConfig, DEFAULT_GRAPH_INDEX_CAPACITY};
pub use edge::{Edge, Weight};
pub use index::{fnv1a64, next_pow2, StringIndex, DEFAULT_INDEX_CAPACITY, MAX_LOAD_FACTOR};
pub use node::NodeId;
pub use traits::{GraphBase, Successors, WeightedSuccessors};
pub use weighted::Graph;
