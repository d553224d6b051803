use thiserror::Error;

use crate::graph::NodeId;

macro_rules! parse_error {
    // Single string version
    ($line:expr, $msg:expr) => {
        crate::Error::Parse {
            line: $line,
            message: $msg.to_string(),
        }
    };

    // Format string with arguments version
    ($line:expr, $fmt:expr, $($arg:tt)*) => {
        crate::Error::Parse {
            line: $line,
            message: format!($fmt, $($arg)*),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Reachability and acyclicity are *not* errors: an unreachable target or a cyclic
/// dependency graph is reported through the corresponding result record
/// ([`ShortestPath::is_reachable`](crate::graph::algorithms::ShortestPath::is_reachable),
/// [`TopologicalOrder::is_dag`](crate::graph::algorithms::TopologicalOrder::is_dag)).
///
/// # Error Categories
///
/// ## Identity Errors
/// - [`Error::NotFound`] - A node name is not registered in the graph
/// - [`Error::InvalidId`] - A node identifier lies outside `[0, node_count)`
///
/// ## Algorithm Preconditions
/// - [`Error::DirectedOnly`] - A directed-only algorithm was run on an undirected graph
/// - [`Error::Overflow`] - A distance or tree cost does not fit in a [`Weight`](crate::graph::Weight)
///
/// ## Loading Errors
/// - [`Error::Parse`] - An edge-list line could not be parsed
/// - [`Error::FileError`] - Filesystem I/O errors
/// - [`Error::Error`] - Miscellaneous failures (mapping, encoding)
///
/// # Examples
///
/// ```rust
/// use citygraph::{Error, Graph};
///
/// let graph = Graph::new(false);
/// match graph.id_of("Harbor") {
///     Ok(id) => println!("Harbor is {id}"),
///     Err(Error::NotFound(name)) => println!("no such place: {name}"),
///     Err(e) => println!("Error: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A strict name lookup did not find the key.
    ///
    /// Returned by [`StringIndex::require`](crate::graph::StringIndex::require) and
    /// [`Graph::id_of`](crate::graph::Graph::id_of). Interactive callers that expect
    /// misses should use the `Option`-returning variants instead.
    #[error("Node not found - {0}")]
    NotFound(String),

    /// A node identifier does not belong to the graph.
    ///
    /// # Fields
    ///
    /// * `id` - The offending identifier
    /// * `node_count` - Number of nodes in the graph at the time of the call
    #[error("Invalid node id {id} for graph with {node_count} nodes")]
    InvalidId {
        /// The identifier that was passed in
        id: NodeId,
        /// The number of nodes in the graph
        node_count: usize,
    },

    /// The operation is only defined for directed graphs.
    #[error("{0} requires a directed graph")]
    DirectedOnly(&'static str),

    /// A summed distance or tree cost exceeds the 64-bit weight range.
    ///
    /// Sums are accumulated in 128 bits, so this is only reported for the
    /// final value, never for an intermediate candidate that loses anyway.
    #[error("{0} does not fit in a 64-bit weight")]
    Overflow(&'static str),

    /// An edge-list line could not be parsed.
    ///
    /// # Fields
    ///
    /// * `line` - 1-based line number within the input
    /// * `message` - Description of what was wrong
    #[error("Parse error on line {line}: {message}")]
    Parse {
        /// The 1-based line number of the failing line
        line: usize,
        /// The message to be printed for the Parse error
        message: String,
    },

    /// File I/O error.
    #[error("{0}")]
    FileError(#[from] std::io::Error),

    /// Generic error for miscellaneous failures.
    #[error("{0}")]
    Error(String),
}
