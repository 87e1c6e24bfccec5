//! Dense matrices derived from the graph store.
//!
//! The ranking engine works on three N×N matrices, rebuilt from the current
//! store state on every computation:
//!
//! - **transition**: out-degree-normalized edge probabilities, with dangling
//!   rows filled uniformly so no probability mass leaks;
//! - **teleportation**: every entry `1/N`;
//! - **google**: the damped blend `damping * T + (1 - damping) * P`.
//!
//! All three are row-stochastic: row `i` holds node `i`'s outgoing
//! probabilities and sums to 1.

use rayon::prelude::*;

use super::store::Graph;
use crate::error::RankError;

/// Below this order the propagation product stays sequential; the rayon
/// fan-out only pays for itself on larger graphs.
const PARALLEL_THRESHOLD: usize = 512;

/// A dense square matrix in row-major order.
#[derive(Debug, Clone)]
pub struct Matrix {
    n: usize,
    data: Vec<f64>,
}

impl Matrix {
    fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![0.0; n * n],
        }
    }

    /// The matrix order N (the matrix is N×N).
    pub fn order(&self) -> usize {
        self.n
    }

    /// Entry at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.n + col]
    }

    /// Borrow one row.
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.n..(row + 1) * self.n]
    }

    /// Build the transition matrix from the graph's adjacency relation.
    ///
    /// For a node with out-degree `d > 0`, each outgoing edge gets
    /// probability `1/d`. A dangling node (out-degree 0) redistributes
    /// uniformly: its whole row is `1/N`.
    ///
    /// Fails with [`RankError::EmptyGraph`] for a zero-node graph, where
    /// `1/N` is undefined.
    pub fn transition(graph: &Graph) -> Result<Self, RankError> {
        let n = graph.node_count();
        if n == 0 {
            return Err(RankError::EmptyGraph);
        }

        let uniform = 1.0 / n as f64;
        let mut m = Self::zeros(n);

        for row in 0..n {
            let out_degree = graph.out_degree(row);
            let dst = &mut m.data[row * n..(row + 1) * n];

            if out_degree == 0 {
                dst.fill(uniform);
            } else {
                let weight = 1.0 / out_degree as f64;
                for (cell, &edge) in dst.iter_mut().zip(graph.adjacency_row(row)) {
                    *cell = if edge { weight } else { 0.0 };
                }
            }
        }

        Ok(m)
    }

    /// Build the uniform teleportation matrix: every entry is `1/N`.
    pub fn teleportation(n: usize) -> Result<Self, RankError> {
        if n == 0 {
            return Err(RankError::EmptyGraph);
        }

        Ok(Self {
            n,
            data: vec![1.0 / n as f64; n * n],
        })
    }

    /// Build the Google matrix: `damping * T + (1 - damping) * P`.
    ///
    /// Row-stochasticity is preserved by the blend, so each row still sums
    /// to 1.
    pub fn google(graph: &Graph, damping: f64) -> Result<Self, RankError> {
        let transition = Self::transition(graph)?;
        let teleportation = Self::teleportation(graph.node_count())?;
        let teleport = 1.0 - damping;

        let data = transition
            .data
            .iter()
            .zip(teleportation.data.iter())
            .map(|(&t, &p)| damping * t + teleport * p)
            .collect();

        Ok(Self {
            n: transition.n,
            data,
        })
    }

    /// Propagate a score vector one step: `out[col] = Σ_row v[row] * M[row][col]`.
    ///
    /// This is the left product `vᵀ·M`, which moves probability mass along
    /// edges when `M` is row-stochastic. Columns are computed independently
    /// (in parallel for large matrices); each column sums rows in ascending
    /// order, so the result is identical on either path.
    pub fn left_mul(&self, v: &[f64]) -> Vec<f64> {
        debug_assert_eq!(v.len(), self.n);

        let column = |col: usize| -> f64 {
            v.iter()
                .enumerate()
                .map(|(row, &score)| score * self.data[row * self.n + col])
                .sum()
        };

        if self.n >= PARALLEL_THRESHOLD {
            (0..self.n).into_par_iter().map(column).collect()
        } else {
            (0..self.n).map(column).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// a -> b, a -> c, b -> c; c is dangling.
    fn chain_graph() -> Graph {
        let mut g = Graph::new();
        g.add_node("a");
        g.add_node("b");
        g.add_node("c");
        g.add_edge("a", "b");
        g.add_edge("a", "c");
        g.add_edge("b", "c");
        g
    }

    #[test]
    fn test_transition_normalizes_by_out_degree() {
        let g = chain_graph();
        let t = Matrix::transition(&g).unwrap();

        assert_eq!(t.row(0), &[0.0, 0.5, 0.5]);
        assert_eq!(t.row(1), &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_dangling_row_is_uniform() {
        let g = chain_graph();
        let t = Matrix::transition(&g).unwrap();

        let third = 1.0 / 3.0;
        for &cell in t.row(2) {
            assert_relative_eq!(cell, third, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_transition_rows_are_stochastic() {
        let g = chain_graph();
        let t = Matrix::transition(&g).unwrap();

        for row in 0..t.order() {
            let sum: f64 = t.row(row).iter().sum();
            assert_relative_eq!(sum, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_teleportation_is_uniform() {
        let p = Matrix::teleportation(4).unwrap();

        assert_eq!(p.order(), 4);
        for row in 0..4 {
            for col in 0..4 {
                assert_relative_eq!(p.get(row, col), 0.25, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_google_blend() {
        let g = chain_graph();
        let google = Matrix::google(&g, 0.75).unwrap();

        // Row a: 0.75 * [0, 0.5, 0.5] + 0.25 * [1/3, 1/3, 1/3]
        let teleport = 0.25 / 3.0;
        assert_relative_eq!(google.get(0, 0), teleport, epsilon = 1e-12);
        assert_relative_eq!(google.get(0, 1), 0.375 + teleport, epsilon = 1e-12);
        assert_relative_eq!(google.get(0, 2), 0.375 + teleport, epsilon = 1e-12);
    }

    #[test]
    fn test_google_rows_are_stochastic() {
        let g = chain_graph();
        let google = Matrix::google(&g, 0.75).unwrap();

        for row in 0..google.order() {
            let sum: f64 = google.row(row).iter().sum();
            assert_relative_eq!(sum, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_empty_graph_rejected() {
        let g = Graph::new();

        assert!(matches!(
            Matrix::transition(&g),
            Err(RankError::EmptyGraph)
        ));
        assert!(matches!(
            Matrix::teleportation(0),
            Err(RankError::EmptyGraph)
        ));
        assert!(matches!(
            Matrix::google(&g, 0.75),
            Err(RankError::EmptyGraph)
        ));
    }

    #[test]
    fn test_left_mul_preserves_mass() {
        let g = chain_graph();
        let google = Matrix::google(&g, 0.75).unwrap();

        let v = vec![1.0 / 3.0; 3];
        let out = google.left_mul(&v);

        let sum: f64 = out.iter().sum();
        assert_relative_eq!(sum, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_left_mul_moves_mass_along_edges() {
        // Two nodes, a -> b only. With no teleport at all (damping 1.0),
        // everything at `a` must land on `b`, while `b` (dangling) splits
        // its mass uniformly.
        let mut g = Graph::new();
        g.add_node("a");
        g.add_node("b");
        g.add_edge("a", "b");

        let google = Matrix::google(&g, 1.0).unwrap();
        let out = google.left_mul(&[1.0, 0.0]);

        assert_relative_eq!(out[0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(out[1], 1.0, epsilon = 1e-12);
    }
}
