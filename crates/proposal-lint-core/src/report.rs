//! Per-file collection of validation results.

use crate::validate::{ValidationError, ValidationResult};
use serde::Serialize;
use std::collections::HashMap;

/// Validation results for every linted document, in lint order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintReport {
    results: HashMap<String, ValidationResult>,
    order: Vec<String>,
}

/// A single finding flattened for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry<'a> {
    /// Line number of the finding.
    pub line: usize,
    /// Name of the rule that reported it.
    pub rule: &'static str,
    /// Human-readable message.
    pub message: String,
    /// The structured finding.
    #[serde(skip)]
    pub error: &'a ValidationError,
}

impl<'a> From<&'a ValidationError> for ReportEntry<'a> {
    fn from(error: &'a ValidationError) -> Self {
        Self {
            line: error.line(),
            rule: error.rule(),
            message: error.to_string(),
            error,
        }
    }
}

impl LintReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds results for a document, merging with earlier results for it.
    pub fn add(&mut self, document: impl Into<String>, result: ValidationResult) {
        let name = document.into();
        if !self.results.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.results.entry(name).or_default().merge(result);
    }

    /// Returns the results for a document.
    pub fn get(&self, document: &str) -> Option<&ValidationResult> {
        self.results.get(document)
    }

    /// Iterates over documents and their results in lint order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidationResult)> {
        self.order
            .iter()
            .filter_map(|name| self.results.get(name).map(|r| (name.as_str(), r)))
    }

    /// Returns the number of linted documents.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if no document was linted.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the total number of findings across all documents.
    pub fn total_errors(&self) -> usize {
        self.results.values().map(|r| r.errors.len()).sum()
    }

    /// Returns true if any document has findings.
    pub fn has_errors(&self) -> bool {
        self.total_errors() > 0
    }

    /// Returns the number of documents with at least one finding.
    pub fn files_with_errors(&self) -> usize {
        self.results.values().filter(|r| r.has_errors()).count()
    }

    /// Flattens a document's findings for output.
    pub fn entries<'a>(&'a self, document: &str) -> Vec<ReportEntry<'a>> {
        self.get(document)
            .map(|r| r.errors.iter().map(ReportEntry::from).collect())
            .unwrap_or_default()
    }
}
