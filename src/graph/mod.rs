//! Graph storage and derived matrices.
//!
//! [`store::Graph`] owns the label↔index mapping and the adjacency
//! relation; [`matrix::Matrix`] holds the dense transition, teleportation,
//! and Google matrices derived from it.

pub mod matrix;
pub mod store;

pub use matrix::Matrix;
pub use store::Graph;
