//! Graph description types.
//!
//! A [`GraphSpec`] is the declarative form of a graph: labels plus directed
//! label pairs. It is what request handlers and CLI front-ends deserialize
//! before handing the engine a live [`Graph`].
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "nodes": ["a", "b", "c"],
//!   "edges": [["a", "b"], ["b", "c"]]
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::RankError;
use crate::graph::Graph;
use crate::input::validation::{ValidationEngine, ValidationReport};

/// Declarative graph description.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphSpec {
    /// Node labels, in insertion order.
    #[serde(default)]
    pub nodes: Vec<String>,

    /// Directed edges as `[src, dst]` label pairs.
    #[serde(default)]
    pub edges: Vec<(String, String)>,

    /// Captures any fields not recognized by the schema. Reported as
    /// warnings by the validation engine rather than silently ignored.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl GraphSpec {
    /// Parse a description from JSON.
    pub fn from_json(json: &str) -> Result<Self, RankError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Run the default validation rules against this description.
    pub fn validate(&self) -> ValidationReport {
        ValidationEngine::with_defaults().validate(self)
    }

    /// Build a live [`Graph`] from this description.
    ///
    /// Node and edge insertion follow the store's semantics: duplicate
    /// labels and duplicate edges are no-ops, edges with unknown endpoints
    /// are dropped. Run [`validate`](Self::validate) first to surface those
    /// conditions to the caller.
    pub fn build(&self) -> Graph {
        let mut graph = Graph::with_capacity(self.nodes.len());
        for label in &self.nodes {
            graph.add_node(label.clone());
        }
        for (src, dst) in &self.edges {
            graph.add_edge(src, dst);
        }
        graph
    }
}
