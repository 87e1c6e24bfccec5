//! Shared configuration and outcome types.

/// Configuration for a PageRank computation.
///
/// The defaults match the engine's historical constants: damping `0.75`,
/// convergence threshold `1e-6`, iteration cap `100`. A config is cheap to
/// copy and is passed to the solver at call time; nothing is cached between
/// computations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRankConfig {
    /// Damping factor: probability of following an outgoing edge rather
    /// than teleporting uniformly.
    pub damping: f64,
    /// L1 convergence threshold.
    pub epsilon: f64,
    /// Maximum number of power iterations.
    pub max_iterations: usize,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping: 0.75,
            epsilon: 1e-6,
            max_iterations: 100,
        }
    }
}

impl PageRankConfig {
    /// Create a config with the default constants.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor.
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the convergence threshold.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Teleportation weight `1 - damping`.
    pub fn teleport(&self) -> f64 {
        1.0 - self.damping
    }
}

/// Outcome of [`Graph::add_node`](crate::Graph::add_node).
///
/// Both outcomes leave the graph in a valid state; callers that only care
/// about the original fire-and-forget semantics can ignore the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeStatus {
    /// The label was new and got the next dense index.
    Added,
    /// The label was already present; nothing changed.
    AlreadyExists,
}

/// Outcome of [`Graph::add_edge`](crate::Graph::add_edge).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeStatus {
    /// The edge was inserted.
    Added,
    /// The edge was already present; nothing changed.
    AlreadyExists,
    /// One or both endpoints are unknown labels; the edge was dropped.
    UnknownEndpoint,
}

impl EdgeStatus {
    /// Returns `true` if the edge exists after the call.
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Added | Self::AlreadyExists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let cfg = PageRankConfig::default();
        assert_eq!(cfg.damping, 0.75);
        assert_eq!(cfg.epsilon, 1e-6);
        assert_eq!(cfg.max_iterations, 100);
    }

    #[test]
    fn test_builder_methods() {
        let cfg = PageRankConfig::new()
            .with_damping(0.85)
            .with_epsilon(1e-9)
            .with_max_iterations(50);

        assert_eq!(cfg.damping, 0.85);
        assert_eq!(cfg.epsilon, 1e-9);
        assert_eq!(cfg.max_iterations, 50);
    }

    #[test]
    fn test_teleport_complements_damping() {
        let cfg = PageRankConfig::default();
        assert!((cfg.teleport() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_edge_status_presence() {
        assert!(EdgeStatus::Added.is_present());
        assert!(EdgeStatus::AlreadyExists.is_present());
        assert!(!EdgeStatus::UnknownEndpoint.is_present());
    }
}
