//! Min-priority frontier shared by Dijkstra and Prim.
//!
//! Both algorithms use the lazy-deletion discipline: when a node's key
//! improves, a new entry is pushed and the old one is left in the heap. Callers
//! discard stale entries when they are popped.
//!
//! Priorities are [`Cost`] values, wide enough that adding any number of
//! 64-bit edge weights along a path cannot overflow. Whether a node has been
//! reached is tracked by the callers with `Option`, never by a sentinel value.
//!
//! Entries order by `(priority, node)`, smallest first, so ties between equal
//! priorities resolve to the lowest node identifier. That makes results among
//! equal-cost alternatives reproducible across runs.

use std::{cmp::Ordering, collections::BinaryHeap};

use crate::graph::NodeId;

/// Accumulated path cost; a sum of 64-bit weights over at most `usize::MAX` edges.
pub(crate) type Cost = i128;

/// Entry in the priority frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FrontierEntry {
    pub(crate) priority: Cost,
    pub(crate) node: NodeId,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap (lower priority, then lower id, pops first)
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Binary-heap frontier that pops the smallest `(priority, node)` first.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    pushes: usize,
}

impl Frontier {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Frontier {
            heap: BinaryHeap::with_capacity(capacity),
            pushes: 0,
        }
    }

    pub(crate) fn push(&mut self, priority: Cost, node: NodeId) {
        self.heap.push(FrontierEntry { priority, node });
        self.pushes += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    /// Total number of entries ever pushed, stale ones included.
    pub(crate) fn pushes(&self) -> usize {
        self.pushes
    }
}
