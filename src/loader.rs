//! Edge-list loading for road networks and task dependencies.
//!
//! Both formats are plain text with one edge per line and `;` separated fields:
//!
//! | Kind | Line format | Weight | Graph |
//! |------|-------------|--------|-------|
//! | [`EdgeListKind::Roads`] | `<from>;<to>;<weight>` | parsed integer | undirected |
//! | [`EdgeListKind::Tasks`] | `<before>;<after>` | always 1 | directed |
//!
//! # Line Handling
//!
//! - Blank lines are ignored.
//! - A line with fewer fields than its kind requires is skipped and counted in
//!   [`LoadSummary::skipped`]. A trailing empty field (`A;B;`) counts as missing.
//! - Fields beyond the required ones are ignored.
//! - A road weight that is not an integer fails the whole load with
//!   [`Error::Parse`](crate::Error::Parse) carrying the 1-based line number.
//! - A trailing carriage return is stripped, so CRLF files load unchanged.
//!
//! # Examples
//!
//! ```rust
//! use citygraph::{loader, EdgeListKind, Graph};
//!
//! let mut roads = Graph::new(false);
//! let summary = loader::load_str(
//!     &mut roads,
//!     EdgeListKind::Roads,
//!     "Harbor;Market;4\nMarket;Mill;2\n\nMill;Quarry\n",
//! )?;
//!
//! assert_eq!(summary.edges, 2);
//! assert_eq!(summary.nodes, 3);
//! assert_eq!(summary.skipped, 1);
//! # Ok::<(), citygraph::Error>(())
//! ```

use std::{fs, path::Path};

use memmap2::Mmap;
use strum::{Display, EnumIter, EnumString};
use tracing::{debug, info, instrument, warn};

use crate::{
    graph::{Graph, GraphConfig, Weight, DEFAULT_GRAPH_INDEX_CAPACITY},
    Error, Result,
};

/// Field separator used by both edge-list formats.
pub const FIELD_SEPARATOR: char = ';';

/// Which edge-list format a file uses.
///
/// Parses from and displays as `"roads"` / `"tasks"`.
///
/// ```rust
/// use citygraph::EdgeListKind;
///
/// let kind: EdgeListKind = "tasks".parse()?;
/// assert_eq!(kind, EdgeListKind::Tasks);
/// assert_eq!(kind.to_string(), "tasks");
/// # Ok::<(), strum::ParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum EdgeListKind {
    /// `<from>;<to>;<weight>`, loaded into an undirected graph
    Roads,
    /// `<before>;<after>`, loaded into a directed graph with weight 1
    Tasks,
}

impl EdgeListKind {
    /// Number of leading fields a line must provide.
    #[must_use]
    pub const fn required_fields(self) -> usize {
        match self {
            EdgeListKind::Roads => 3,
            EdgeListKind::Tasks => 2,
        }
    }

    /// Whether graphs of this kind store edges one-way.
    #[must_use]
    pub const fn is_directed(self) -> bool {
        matches!(self, EdgeListKind::Tasks)
    }

    /// Weight assigned to every edge, if the format carries none.
    #[must_use]
    pub const fn fixed_weight(self) -> Option<Weight> {
        match self {
            EdgeListKind::Roads => None,
            EdgeListKind::Tasks => Some(1),
        }
    }
}

/// One parsed edge, borrowing its names from the input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeRecord<'a> {
    /// Source name (for tasks: the prerequisite)
    pub from: &'a str,
    /// Target name (for tasks: the dependent task)
    pub to: &'a str,
    /// Edge weight
    pub weight: Weight,
}

/// Counts reported after a load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Edges added by this load
    pub edges: usize,
    /// Node count of the graph once the load finished
    pub nodes: usize,
    /// Non-blank lines skipped for missing fields
    pub skipped: usize,
}

/// Options for [`load_file`].
///
/// Directedness always follows the [`EdgeListKind`]; the remaining settings
/// size the graph up front.
///
/// ```rust
/// use citygraph::{EdgeListKind, LoadOptions};
///
/// let options = LoadOptions::new(EdgeListKind::Roads).node_capacity(10_000);
/// assert!(!options.graph_config().directed);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Format of the input
    pub kind: EdgeListKind,
    /// Initial name-index bucket request
    pub index_capacity: usize,
    /// Expected number of nodes
    pub node_capacity: usize,
}

impl LoadOptions {
    /// Creates options for `kind` with default sizing.
    #[must_use]
    pub fn new(kind: EdgeListKind) -> Self {
        LoadOptions {
            kind,
            index_capacity: DEFAULT_GRAPH_INDEX_CAPACITY,
            node_capacity: 0,
        }
    }

    /// Sets the initial name-index bucket request.
    #[must_use]
    pub fn index_capacity(mut self, capacity: usize) -> Self {
        self.index_capacity = capacity;
        self
    }

    /// Sets the expected node count.
    #[must_use]
    pub fn node_capacity(mut self, capacity: usize) -> Self {
        self.node_capacity = capacity;
        self
    }

    /// Graph configuration matching these options.
    #[must_use]
    pub fn graph_config(&self) -> GraphConfig {
        GraphConfig::new()
            .directed(self.kind.is_directed())
            .index_capacity(self.index_capacity)
            .node_capacity(self.node_capacity)
    }
}

/// Parses one line of an edge list.
///
/// Returns `Ok(None)` for lines that are blank or lack a required field.
/// `line_number` is 1-based and only used for error reporting.
///
/// # Errors
///
/// Returns [`Error::Parse`] if a road weight is not a valid integer.
///
/// # Examples
///
/// ```rust
/// use citygraph::{loader::parse_line, EdgeListKind};
///
/// let record = parse_line(EdgeListKind::Roads, 1, "A;B;5")?.unwrap();
/// assert_eq!((record.from, record.to, record.weight), ("A", "B", 5));
///
/// assert!(parse_line(EdgeListKind::Roads, 2, "A;B;")?.is_none());
/// assert!(parse_line(EdgeListKind::Roads, 3, "A;B;five").is_err());
/// # Ok::<(), citygraph::Error>(())
/// ```
pub fn parse_line(kind: EdgeListKind, line_number: usize, line: &str) -> Result<Option<EdgeRecord<'_>>> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.is_empty() {
        return Ok(None);
    }

    let mut parts = line.split(FIELD_SEPARATOR).peekable();
    let mut fields = [""; 3];
    for field in fields.iter_mut().take(kind.required_fields()) {
        match parts.next() {
            // Nothing after the final separator: the field is missing
            Some("") if parts.peek().is_none() => return Ok(None),
            Some(value) => *field = value,
            None => return Ok(None),
        }
    }

    let weight = match kind.fixed_weight() {
        Some(weight) => weight,
        None => {
            let raw = fields[2].trim();
            raw.parse::<Weight>()
                .map_err(|err| parse_error!(line_number, "invalid weight '{}' - {}", raw, err))?
        }
    };

    Ok(Some(EdgeRecord {
        from: fields[0],
        to: fields[1],
        weight,
    }))
}

/// Loads edge-list text into an existing graph.
///
/// The graph's directedness is used as is. Loading a road list into a
/// directed graph (or a task list into an undirected one) is allowed but
/// logged as a warning.
///
/// # Errors
///
/// Returns [`Error::Parse`] for the first line with an invalid weight. Edges
/// from earlier lines remain in the graph.
pub fn load_str(graph: &mut Graph, kind: EdgeListKind, text: &str) -> Result<LoadSummary> {
    if graph.is_directed() != kind.is_directed() {
        warn!(%kind, directed = graph.is_directed(), "edge list kind does not match graph direction");
    }

    let mut summary = LoadSummary::default();
    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        match parse_line(kind, line_number, line)? {
            Some(record) => {
                graph.add_edge(record.from, record.to, record.weight);
                summary.edges += 1;
            }
            None if line.trim_end_matches('\r').is_empty() => {}
            None => {
                debug!(line = line_number, "skipping line with missing fields");
                summary.skipped += 1;
            }
        }
    }
    summary.nodes = graph.node_count();

    info!(
        %kind,
        edges = summary.edges,
        nodes = summary.nodes,
        skipped = summary.skipped,
        "edge list loaded"
    );
    Ok(summary)
}

/// Loads edge-list bytes, which must be valid UTF-8, into an existing graph.
///
/// # Errors
///
/// Returns [`Error::Error`] if `data` is not UTF-8, otherwise as [`load_str`].
pub fn load_bytes(graph: &mut Graph, kind: EdgeListKind, data: &[u8]) -> Result<LoadSummary> {
    let text = std::str::from_utf8(data)
        .map_err(|err| Error::Error(format!("edge list is not valid UTF-8 - {err}")))?;
    load_str(graph, kind, text)
}

/// Memory-maps an edge-list file and builds a new graph from it.
///
/// An empty file produces an empty graph.
///
/// # Errors
///
/// Returns [`Error::FileError`] if the file cannot be opened, [`Error::Error`]
/// if mapping fails or the content is not UTF-8, and [`Error::Parse`] for an
/// invalid weight.
///
/// # Examples
///
/// ```rust,no_run
/// use citygraph::{loader, EdgeListKind, LoadOptions};
///
/// let (roads, summary) = loader::load_file("roads.txt", &LoadOptions::new(EdgeListKind::Roads))?;
/// println!("{} roads between {} places", summary.edges, roads.node_count());
/// # Ok::<(), citygraph::Error>(())
/// ```
#[instrument(skip_all, fields(path = %path.as_ref().display(), kind = %options.kind))]
pub fn load_file(path: impl AsRef<Path>, options: &LoadOptions) -> Result<(Graph, LoadSummary)> {
    let mut graph = Graph::with_config(&options.graph_config());

    let file = fs::File::open(path.as_ref())?;
    if file.metadata()?.len() == 0 {
        let summary = LoadSummary::default();
        info!("edge list file is empty");
        return Ok((graph, summary));
    }

    let mmap = match unsafe { Mmap::map(&file) } {
        Ok(mmap) => mmap,
        Err(error) => return Err(Error::Error(error.to_string())),
    };

    let summary = load_bytes(&mut graph, options.kind, &mmap)?;
    Ok((graph, summary))
}
