//! Linting pipeline: read, tokenize, validate and collect.

use crate::document::Document;
use crate::report::LintReport;
use crate::validate::rules::RuleRunner;
use crate::validate::{Template, ValidationResult};
use log::{debug, info};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that abort a lint run.
#[derive(Debug, Error)]
pub enum LintError {
    /// A proposal could not be read.
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        /// Path of the proposal.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

/// Lints proposal documents against a template.
#[derive(Debug)]
pub struct Linter {
    template: Template,
    runner: RuleRunner,
}

impl Default for Linter {
    fn default() -> Self {
        Self::new(Template::default())
    }
}

impl Linter {
    /// Creates a linter with all built-in rules.
    pub fn new(template: Template) -> Self {
        Self::with_runner(template, RuleRunner::with_all_rules())
    }

    /// Creates a linter with a custom rule runner.
    pub fn with_runner(template: Template, runner: RuleRunner) -> Self {
        Self { template, runner }
    }

    /// Returns the template in use.
    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Returns the rule runner in use.
    pub fn runner(&self) -> &RuleRunner {
        &self.runner
    }

    /// Lints an already tokenized document.
    pub fn lint_document(&self, document: &Document) -> ValidationResult {
        self.runner.run(document, &self.template)
    }

    /// Lints raw document content.
    pub fn lint_source(&self, id: &str, content: &str) -> ValidationResult {
        self.lint_document(&Document::parse(id, content))
    }

    /// Reads and lints a proposal file.
    pub fn lint_file(&self, path: &Path) -> Result<ValidationResult, LintError> {
        debug!("Reading {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|source| LintError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.lint_source(&path.display().to_string(), &content))
    }

    /// Reads and lints proposal files in order.
    ///
    /// Stops at the first file that cannot be read.
    pub fn lint_files<P: AsRef<Path>>(&self, paths: &[P]) -> Result<LintReport, LintError> {
        info!("Linting {} proposals", paths.len());
        let mut report = LintReport::new();

        for path in paths {
            let path = path.as_ref();
            let result = self.lint_file(path)?;
            report.add(path.display().to_string(), result);
        }

        info!(
            "Lint complete: {} issues in {} of {} files",
            report.total_errors(),
            report.files_with_errors(),
            report.len()
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::ValidationError;
    use crate::validate::rules::names;
    use std::fs;
    use tempfile::TempDir;

    const VALID: &str = "---\nsimd: '0042'\ntitle: Example\nauthors:\n  - Alice\ncategory: Standard\ntype: Core\nstatus: Review\ncreated: 2024-01-01\n---\n\n# Example\n\n## Summary\n\n## Motivation\n\n## Alternatives Considered\n\n## New Terminology\n\n## Detailed Design\n\n## Impact\n\n## Security Considerations\n";

    #[test]
    fn lint_valid_source() {
        let result = Linter::default().lint_source("0042.md", VALID);
        assert!(result.is_ok(), "unexpected findings: {:?}", result.errors);
    }

    #[test]
    fn lint_source_with_byte_order_mark() {
        let content = format!("\u{FEFF}{}", VALID);
        let result = Linter::default().lint_source("bom.md", &content);
        assert!(result.is_ok(), "unexpected findings: {:?}", result.errors);
    }

    #[test]
    fn lint_meta_proposal_without_sections() {
        let content = VALID
            .replace("category: Standard", "category: Meta")
            .split("\n# Example")
            .next()
            .unwrap_or_default()
            .to_string();
        let result = Linter::default().lint_source("meta.md", &content);
        assert!(result.is_ok(), "unexpected findings: {:?}", result.errors);
    }

    #[test]
    fn lint_with_selected_rules() {
        let runner = RuleRunner::with_all_rules().select(&[names::STATUS]);
        let linter = Linter::with_runner(Template::default(), runner);
        let result = linter.lint_source("x.md", "---\nstatus: Draft\n---\n");
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].rule(), names::STATUS);
    }

    #[test]
    fn lint_files_builds_report_in_order() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("0042-good.md");
        let bad = dir.path().join("0043-bad.md");
        fs::write(&good, VALID).unwrap();
        fs::write(&bad, "# No front matter\n").unwrap();

        let report = Linter::default().lint_files(&[&bad, &good]).unwrap();
        let names: Vec<_> = report.iter().map(|(n, _)| n.to_string()).collect();
        assert_eq!(
            names,
            vec![bad.display().to_string(), good.display().to_string()]
        );
        assert_eq!(report.total_errors(), 1);
        assert_eq!(
            report.get(&bad.display().to_string()).map(|r| r.errors.clone()),
            Some(vec![ValidationError::MissingFrontMatter])
        );
    }

    #[test]
    fn lint_files_reports_unreadable_file() {
        let error = Linter::default()
            .lint_files(&[Path::new("/nonexistent/0001.md")])
            .unwrap_err();
        assert!(matches!(error, LintError::Read { .. }));
    }

    #[test]
    fn repeated_runs_are_identical() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("x.md");
        fs::write(&path, "---\nsimd: 12ab\nfoo: bar\nstatus: Draft\n---\n## Summary\n").unwrap();

        let linter = Linter::default();
        let first = linter.lint_files(&[&path]).unwrap();
        let second = linter.lint_files(&[&path]).unwrap();
        assert_eq!(first, second);
        assert!(first.has_errors());
    }
}
