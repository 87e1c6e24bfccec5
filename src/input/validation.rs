//! Validation engine for graph descriptions.
//!
//! The engine runs every registered [`ValidationRule`] against a
//! [`GraphSpec`] and collects each diagnostic into a [`ValidationReport`].
//! Rules never short-circuit, so callers see all problems at once.
//!
//! Severities mirror how upstream layers treat each condition: an empty
//! node list is rejected outright, while unknown edge endpoints and
//! duplicate labels are absorbed by the store and only warrant a warning.

use std::fmt;

use rustc_hash::FxHashSet;
use serde::Serialize;

use super::spec::GraphSpec;

// ─── Error codes ────────────────────────────────────────────────────────────

/// Machine-readable code for a validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// No nodes declared; ranking an empty graph is undefined.
    EmptyGraph,
    /// An edge references a label missing from `nodes`.
    UnknownEndpoint,
    /// A label appears more than once in `nodes`.
    DuplicateNode,
    /// A JSON field not recognized by the schema.
    UnknownField,
}

impl ErrorCode {
    /// The user-facing name used in JSON and messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyGraph => "empty_graph",
            Self::UnknownEndpoint => "unknown_endpoint",
            Self::DuplicateNode => "duplicate_node",
            Self::UnknownField => "unknown_field",
        }
    }
}

// ─── Findings ───────────────────────────────────────────────────────────────

/// A single validation finding: code, location, and message.
#[derive(Debug, Clone, Serialize)]
pub struct SpecError {
    /// What went wrong.
    pub code: ErrorCode,
    /// JSON-pointer-ish path to the offending element, e.g. `edges[3]`.
    pub path: String,
    /// Human-readable description.
    pub message: String,
}

impl SpecError {
    pub fn new(code: ErrorCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for SpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}: {}", self.code.as_str(), self.path, self.message)
    }
}

/// How seriously a finding should be taken: errors block ranking,
/// warnings do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

/// A finding tagged with its severity.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub error: SpecError,
}

impl ValidationDiagnostic {
    pub fn error(err: SpecError) -> Self {
        Self {
            severity: Severity::Error,
            error: err,
        }
    }

    pub fn warning(err: SpecError) -> Self {
        Self {
            severity: Severity::Warning,
            error: err,
        }
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// Collected diagnostics from running all validation rules.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    /// The error-severity findings.
    pub fn errors(&self) -> impl Iterator<Item = &SpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| &d.error)
    }

    /// The warning-severity findings.
    pub fn warnings(&self) -> impl Iterator<Item = &SpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .map(|d| &d.error)
    }

    /// Returns `true` if any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Returns `true` if there are no errors (warnings are acceptable).
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }
}

// ─── Rules ──────────────────────────────────────────────────────────────────

/// One validation rule, applied against the whole description.
pub trait ValidationRule {
    fn check(&self, spec: &GraphSpec, report: &mut ValidationReport);
}

/// The description must declare at least one node.
struct NonEmptyRule;

impl ValidationRule for NonEmptyRule {
    fn check(&self, spec: &GraphSpec, report: &mut ValidationReport) {
        if spec.nodes.is_empty() {
            report.diagnostics.push(ValidationDiagnostic::error(
                SpecError::new(
                    ErrorCode::EmptyGraph,
                    "nodes",
                    "no nodes declared; ranking needs at least one node",
                ),
            ));
        }
    }
}

/// Every edge endpoint must be a declared label.
struct EdgeEndpointRule;

impl ValidationRule for EdgeEndpointRule {
    fn check(&self, spec: &GraphSpec, report: &mut ValidationReport) {
        let known: FxHashSet<&str> = spec.nodes.iter().map(String::as_str).collect();

        for (i, (src, dst)) in spec.edges.iter().enumerate() {
            for endpoint in [src, dst] {
                if !known.contains(endpoint.as_str()) {
                    report.diagnostics.push(ValidationDiagnostic::warning(
                        SpecError::new(
                            ErrorCode::UnknownEndpoint,
                            format!("edges[{i}]"),
                            format!("edge references undeclared node {endpoint:?}; it will be dropped"),
                        ),
                    ));
                }
            }
        }
    }
}

/// Labels should be declared once; repeats collapse to the first index.
struct DuplicateNodeRule;

impl ValidationRule for DuplicateNodeRule {
    fn check(&self, spec: &GraphSpec, report: &mut ValidationReport) {
        let mut seen = FxHashSet::default();
        for (i, label) in spec.nodes.iter().enumerate() {
            if !seen.insert(label.as_str()) {
                report.diagnostics.push(ValidationDiagnostic::warning(
                    SpecError::new(
                        ErrorCode::DuplicateNode,
                        format!("nodes[{i}]"),
                        format!("node {label:?} is declared more than once"),
                    ),
                ));
            }
        }
    }
}

/// Fields the schema does not recognize are flagged, not dropped silently.
struct UnknownFieldRule;

impl ValidationRule for UnknownFieldRule {
    fn check(&self, spec: &GraphSpec, report: &mut ValidationReport) {
        for field in spec.unknown_fields.keys() {
            report.diagnostics.push(ValidationDiagnostic::warning(
                SpecError::new(
                    ErrorCode::UnknownField,
                    field.clone(),
                    format!("unrecognized field {field:?}"),
                ),
            ));
        }
    }
}

// ─── Engine ─────────────────────────────────────────────────────────────────

/// Runs a set of validation rules over a description.
#[derive(Default)]
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// An engine with no rules registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine with the standard rule set.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.register(NonEmptyRule);
        engine.register(EdgeEndpointRule);
        engine.register(DuplicateNodeRule);
        engine.register(UnknownFieldRule);
        engine
    }

    /// Register an additional rule.
    pub fn register(&mut self, rule: impl ValidationRule + 'static) {
        self.rules.push(Box::new(rule));
    }

    /// Run every rule, collecting all diagnostics.
    pub fn validate(&self, spec: &GraphSpec) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            rule.check(spec, &mut report);
        }
        report
    }
}
