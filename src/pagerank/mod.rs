//! PageRank result types.
//!
//! [`PageRankResult`] is the index-ordered output of the solver;
//! [`PageRankReport`] is the serializable label-keyed projection consumed
//! by render and response layers.

pub mod solver;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::graph::Graph;

pub use solver::PowerIteration;

/// Result of a PageRank computation.
#[derive(Debug, Clone)]
pub struct PageRankResult {
    /// Scores for each node, in node-index order. Non-negative, summing
    /// to 1 within floating-point tolerance.
    pub scores: Vec<f64>,
    /// Number of iterations performed. Equals the configured cap when the
    /// computation was exhausted without converging.
    pub iterations: usize,
    /// Final L1 difference between the last two score vectors.
    pub delta: f64,
    /// Whether the L1 difference dropped below the threshold. `false`
    /// signals the iteration cap was reached; the scores are still the last
    /// computed vector.
    pub converged: bool,
    /// L1 difference recorded after each iteration, in order.
    pub convergence_history: Vec<f64>,
}

impl PageRankResult {
    /// Get the score for a node index.
    pub fn score(&self, node: usize) -> f64 {
        self.scores.get(node).copied().unwrap_or(0.0)
    }

    /// Get the top N nodes by score.
    pub fn top_n(&self, n: usize) -> Vec<(usize, f64)> {
        let mut indexed: Vec<_> = self.scores.iter().copied().enumerate().collect();
        indexed.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap());
        indexed.truncate(n);
        indexed
    }

    /// Consume the per-iteration convergence differences as a one-shot
    /// sequence.
    pub fn into_history(self) -> impl Iterator<Item = f64> {
        self.convergence_history.into_iter()
    }
}

/// Serializable, label-keyed view of a [`PageRankResult`].
///
/// This is the stability boundary for external consumers: field names and
/// shapes match the JSON response assembled by the historical HTTP layer
/// (`scores` map, `iterations`, `convergence_history`).
#[derive(Debug, Clone, Serialize)]
pub struct PageRankReport {
    /// Node label -> score.
    pub scores: BTreeMap<String, f64>,
    /// Number of iterations performed.
    pub iterations: usize,
    /// L1 difference per iteration.
    pub convergence_history: Vec<f64>,
}

impl PageRankReport {
    /// Project a result onto the graph's labels.
    ///
    /// Scores are zipped with the store's labels in index order, so the
    /// graph must be the one the result was computed from.
    pub fn new(graph: &Graph, result: &PageRankResult) -> Self {
        let scores = graph
            .labels()
            .iter()
            .cloned()
            .zip(result.scores.iter().copied())
            .collect();

        Self {
            scores,
            iterations: result.iterations,
            convergence_history: result.convergence_history.clone(),
        }
    }
}
