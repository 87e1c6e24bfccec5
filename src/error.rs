//! Crate error type.

use thiserror::Error;

/// Errors surfaced by the ranking engine.
///
/// The engine rejects degenerate input up front; it never fails mid-flight.
/// Hitting the iteration cap is not an error (see
/// [`PageRankResult::converged`](crate::PageRankResult)).
#[derive(Debug, Error)]
pub enum RankError {
    /// `compute_pagerank` was called on a graph with zero nodes. The
    /// transition matrix is undefined for an empty graph (every entry would
    /// divide by the node count), so this is checked before any matrix is
    /// built.
    #[error("graph has no nodes; add at least one node before ranking")]
    EmptyGraph,

    /// A JSON graph description failed to parse.
    #[error("invalid graph description: {0}")]
    InvalidDescription(#[from] serde_json::Error),
}
