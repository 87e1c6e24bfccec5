//! rapid-pagerank — a directed-graph PageRank engine.
//!
//! Given string-labeled nodes and directed edges, the engine computes each
//! node's stationary importance score by damped power iteration on a dense
//! row-stochastic Google matrix. Three components compose sequentially:
//!
//! - [`Graph`] — label↔index mapping plus the adjacency relation;
//! - [`Matrix`] — transition / teleportation / Google matrices derived
//!   from the store on each call;
//! - [`PowerIteration`] — the solver, iterating until the L1 change drops
//!   below threshold or the cap is reached.
//!
//! # Example
//!
//! ```
//! use rapid_pagerank::{compute_pagerank, Graph};
//!
//! let mut graph = Graph::new();
//! graph.add_node("a");
//! graph.add_node("b");
//! graph.add_node("c");
//! graph.add_edge("a", "b");
//! graph.add_edge("b", "c");
//! graph.add_edge("c", "a");
//!
//! let result = compute_pagerank(&graph).unwrap();
//! assert!(result.converged);
//! assert!((result.scores.iter().sum::<f64>() - 1.0).abs() < 1e-9);
//! ```

pub mod error;
pub mod graph;
pub mod input;
pub mod pagerank;
pub mod types;

pub use error::RankError;
pub use graph::{Graph, Matrix};
pub use input::{GraphSpec, ValidationEngine, ValidationReport};
pub use pagerank::{PageRankReport, PageRankResult, PowerIteration};
pub use types::{EdgeStatus, NodeStatus, PageRankConfig};

/// Compute PageRank for a graph with the default configuration
/// (damping `0.75`, threshold `1e-6`, cap `100`).
///
/// Equivalent to `PowerIteration::new().run(graph)`. Use
/// [`PowerIteration::with_config`] to override the constants.
pub fn compute_pagerank(graph: &Graph) -> Result<PageRankResult, RankError> {
    PowerIteration::new().run(graph)
}
