//! JSON graph descriptions and their validation.
//!
//! [`spec::GraphSpec`] deserializes the node/edge list shape produced by
//! upstream request and CLI layers; [`validation::ValidationEngine`] runs
//! every rule against a description and reports all findings at once.

pub mod spec;
pub mod validation;

pub use spec::GraphSpec;
pub use validation::{ValidationEngine, ValidationReport};
