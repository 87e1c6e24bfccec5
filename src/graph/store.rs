//! Graph store: label↔index mapping plus a dense adjacency relation.
//!
//! This is the leaf component everything else consumes. Labels are interned
//! into dense indices in insertion order; edges live in a growable square
//! boolean relation indexed by those indices. Node removal is not supported,
//! so indices are stable for the lifetime of the graph.

use rustc_hash::FxHashMap;

use crate::types::{EdgeStatus, NodeStatus};

/// A mutable directed graph with string-labeled nodes.
///
/// Designed for small-N graphs: the adjacency relation is a dense N×N
/// boolean matrix, which keeps out-degree and transition-matrix
/// construction trivial at the cost of O(N²) memory. For graphs beyond a
/// few thousand nodes an adjacency-list representation would be the better
/// trade.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Maps label -> dense node index.
    label_to_index: FxHashMap<String, usize>,
    /// Labels in index order (index -> label).
    labels: Vec<String>,
    /// Adjacency relation: `adj[src][dst]` is true iff the edge exists.
    adj: Vec<Vec<bool>>,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with pre-allocated capacity for `node_capacity` nodes.
    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            label_to_index: FxHashMap::with_capacity_and_hasher(
                node_capacity,
                Default::default(),
            ),
            labels: Vec::with_capacity(node_capacity),
            adj: Vec::with_capacity(node_capacity),
        }
    }

    /// Add a node with the given label.
    ///
    /// New nodes get the next dense index (insertion order, 0-based) and the
    /// adjacency relation grows by one row and one column, preserving
    /// existing entries. Re-adding an existing label is a no-op reported as
    /// [`NodeStatus::AlreadyExists`].
    pub fn add_node(&mut self, label: impl Into<String>) -> NodeStatus {
        let label = label.into();
        if self.label_to_index.contains_key(&label) {
            return NodeStatus::AlreadyExists;
        }

        let index = self.labels.len();
        self.label_to_index.insert(label.clone(), index);
        self.labels.push(label);

        for row in &mut self.adj {
            row.push(false);
        }
        self.adj.push(vec![false; index + 1]);

        NodeStatus::Added
    }

    /// Add a directed edge from `src` to `dst`.
    ///
    /// Unknown labels drop the edge rather than failing; the outcome is
    /// reported as [`EdgeStatus::UnknownEndpoint`] and logged at debug
    /// level. Self-edges are allowed, and re-adding an existing edge is a
    /// no-op.
    pub fn add_edge(&mut self, src: &str, dst: &str) -> EdgeStatus {
        let (Some(&s), Some(&d)) = (
            self.label_to_index.get(src),
            self.label_to_index.get(dst),
        ) else {
            log::debug!("edge {src:?} -> {dst:?} references an unknown node; dropped");
            return EdgeStatus::UnknownEndpoint;
        };

        if self.adj[s][d] {
            return EdgeStatus::AlreadyExists;
        }
        self.adj[s][d] = true;
        EdgeStatus::Added
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.adj
            .iter()
            .map(|row| row.iter().filter(|&&e| e).count())
            .sum()
    }

    /// Returns `true` if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Get the dense index for a label.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.label_to_index.get(label).copied()
    }

    /// Get the label for a dense index.
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Labels in index order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns `true` if the edge `src -> dst` exists (by index).
    pub fn has_edge(&self, src: usize, dst: usize) -> bool {
        self.adj
            .get(src)
            .and_then(|row| row.get(dst))
            .copied()
            .unwrap_or(false)
    }

    /// Iterate over all edges as `(src_label, dst_label)` pairs, in
    /// row-major index order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.adj.iter().enumerate().flat_map(move |(s, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, &e)| e)
                .map(move |(d, _)| (self.labels[s].as_str(), self.labels[d].as_str()))
        })
    }

    /// Out-degree of a node: the number of `true` entries in its adjacency
    /// row. A node with out-degree zero is a dangling node.
    pub fn out_degree(&self, index: usize) -> usize {
        self.adj[index].iter().filter(|&&e| e).count()
    }

    /// Borrow a node's adjacency row.
    pub(crate) fn adjacency_row(&self, index: usize) -> &[bool] {
        &self.adj[index]
    }
}
