//! Damped power iteration over the Google matrix.
//!
//! The solver is deterministic given a graph and a config: it rebuilds the
//! Google matrix from the current store state, starts from the uniform
//! distribution, and repeatedly propagates until the L1 change between
//! iterations drops below the threshold or the iteration cap is hit.

use super::PageRankResult;
use crate::error::RankError;
use crate::graph::{Graph, Matrix};
use crate::types::PageRankConfig;

/// Power-iteration PageRank solver.
///
/// Holds only the configuration; all per-computation state (matrices, score
/// vectors) is built fresh in [`run`](Self::run) and discarded when it
/// returns.
#[derive(Debug, Clone, Copy, Default)]
pub struct PowerIteration {
    /// Damping and convergence parameters for this solver.
    pub config: PageRankConfig,
}

impl PowerIteration {
    /// Create a solver with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a solver with an explicit configuration.
    pub fn with_config(config: PageRankConfig) -> Self {
        Self { config }
    }

    /// Run PageRank on a graph.
    ///
    /// Fails with [`RankError::EmptyGraph`] for a zero-node graph. Reaching
    /// the iteration cap is not a failure: the result is returned with
    /// `converged == false` and the last computed score vector.
    ///
    /// This is a blocking, CPU-bound call of cost `O(N² · max_iterations)`.
    /// There is no internal cancellation point; callers wanting a
    /// wall-clock bound must impose it at the call boundary. Concurrent
    /// computations need independent [`Graph`] instances.
    pub fn run(&self, graph: &Graph) -> Result<PageRankResult, RankError> {
        let n = graph.node_count();
        if n == 0 {
            return Err(RankError::EmptyGraph);
        }

        let google = Matrix::google(graph, self.config.damping)?;

        let mut scores = vec![1.0 / n as f64; n];
        let mut convergence_history = Vec::new();
        let mut iterations = 0;
        let mut delta = f64::MAX;
        let mut converged = false;

        while iterations < self.config.max_iterations {
            iterations += 1;

            let new_scores = google.left_mul(&scores);

            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();
            convergence_history.push(delta);
            scores = new_scores;

            log::trace!("iteration {iterations}: l1 delta {delta:.3e}");

            if delta < self.config.epsilon {
                converged = true;
                break;
            }
        }

        log::debug!(
            "pagerank over {n} nodes: {iterations} iterations, converged: {converged}"
        );

        Ok(PageRankResult {
            scores,
            iterations,
            delta,
            converged,
            convergence_history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cycle_graph() -> Graph {
        let mut g = Graph::new();
        g.add_node("a");
        g.add_node("b");
        g.add_node("c");
        g.add_edge("a", "b");
        g.add_edge("b", "c");
        g.add_edge("c", "a");
        g
    }

    /// a is the only source; b..e are dangling sinks.
    fn star_graph() -> Graph {
        let mut g = Graph::new();
        for label in ["a", "b", "c", "d", "e"] {
            g.add_node(label);
        }
        for sink in ["b", "c", "d", "e"] {
            g.add_edge("a", sink);
        }
        g
    }

    #[test]
    fn test_empty_graph_rejected() {
        let g = Graph::new();
        let result = PowerIteration::new().run(&g);
        assert!(matches!(result, Err(RankError::EmptyGraph)));
    }

    #[test]
    fn test_cycle_converges_to_uniform() {
        let g = cycle_graph();
        let result = PowerIteration::new().run(&g).unwrap();

        assert!(result.converged);
        assert!(result.iterations < 20);
        for &score in &result.scores {
            assert_relative_eq!(score, 1.0 / 3.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_star_sinks_outrank_source() {
        let g = star_graph();
        let result = PowerIteration::new().run(&g).unwrap();

        assert!(result.converged);

        // Closed form for N=5, damping 0.75: the source keeps only its
        // teleport/dangling share, r_a = 0.2/1.15; each sink adds a quarter
        // of the damped edge mass, r_sink = 0.2 + 0.0375 * r_a.
        let r_a = 0.2 / 1.15;
        let r_sink = 0.2 + 0.0375 * r_a;

        assert_relative_eq!(result.score(0), r_a, epsilon = 1e-4);
        for sink in 1..5 {
            assert_relative_eq!(result.score(sink), r_sink, epsilon = 1e-4);
            assert!(result.score(sink) > result.score(0));
        }
    }

    #[test]
    fn test_single_isolated_node() {
        let mut g = Graph::new();
        g.add_node("only");

        let result = PowerIteration::new().run(&g).unwrap();

        assert!(result.converged);
        assert_eq!(result.iterations, 1);
        assert_eq!(result.scores, vec![1.0]);
        assert_eq!(result.convergence_history, vec![0.0]);
    }

    #[test]
    fn test_scores_form_a_distribution() {
        let mut g = cycle_graph();
        g.add_node("d"); // isolated, dangling
        g.add_edge("a", "d");

        let result = PowerIteration::new().run(&g).unwrap();

        let sum: f64 = result.scores.iter().sum();
        assert_relative_eq!(sum, 1.0, epsilon = 1e-9);
        assert!(result.scores.iter().all(|&s| s >= 0.0));
    }

    #[test]
    fn test_iteration_cap_is_not_an_error() {
        let g = star_graph();
        let config = PageRankConfig::new()
            .with_max_iterations(1)
            .with_epsilon(0.0); // unreachable threshold

        let result = PowerIteration::with_config(config).run(&g).unwrap();

        assert!(!result.converged);
        assert_eq!(result.iterations, 1);
        assert_eq!(result.scores.len(), 5);
    }

    #[test]
    fn test_history_tracks_every_iteration() {
        let g = star_graph();
        let result = PowerIteration::new().run(&g).unwrap();

        assert_eq!(result.convergence_history.len(), result.iterations);
        // The converging iteration is the last entry.
        assert!(*result.convergence_history.last().unwrap() < 1e-6);
    }

    #[test]
    fn test_deterministic_across_runs() {
        let g = star_graph();
        let solver = PowerIteration::new();

        let first = solver.run(&g).unwrap();
        let second = solver.run(&g).unwrap();

        assert_eq!(first.scores, second.scores);
        assert_eq!(first.iterations, second.iterations);
    }
}
