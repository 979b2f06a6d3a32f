//! Output formatting for the CLI.
//!
//! This module provides human-readable, JSON and GitHub Actions annotation
//! formatters for lint reports.

use colored::Colorize;
use proposal_lint_core::{LintReport, ReportEntry, Rule, RuleRunner, ValidationResult};
use serde::Serialize;
use std::io::Write;

/// JSON output format.
#[derive(Debug, Serialize)]
pub struct JsonOutput<'a> {
    /// Findings per linted file, in lint order.
    pub files: Vec<JsonFile<'a>>,
    /// Total number of findings.
    pub total: usize,
}

/// The findings of a single file in JSON format.
#[derive(Debug, Serialize)]
pub struct JsonFile<'a> {
    /// Path of the file.
    pub path: &'a str,
    /// Findings, in rule order.
    pub issues: Vec<ReportEntry<'a>>,
}

impl<'a> JsonOutput<'a> {
    /// Builds the JSON output for a report.
    pub fn from_report(report: &'a LintReport) -> Self {
        let files = report
            .iter()
            .map(|(path, _)| JsonFile {
                path,
                issues: report.entries(path),
            })
            .collect();

        Self {
            files,
            total: report.total_errors(),
        }
    }

    /// Writes the JSON output to a writer.
    pub fn write<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        writeln!(writer, "{}", json)
    }
}

/// Output formatter for human-readable console output.
pub struct HumanOutput<W: Write> {
    writer: W,
    use_colors: bool,
}

impl<W: Write> HumanOutput<W> {
    /// Creates a new human output formatter.
    pub fn new(writer: W, use_colors: bool) -> Self {
        Self { writer, use_colors }
    }

    /// Writes a header for a file.
    pub fn write_file_header(&mut self, path: &str) -> std::io::Result<()> {
        let header = format!("==> {}", path);
        if self.use_colors {
            writeln!(self.writer, "\n{}", header.cyan().bold())?;
        } else {
            writeln!(self.writer, "\n{}", header)?;
        }
        Ok(())
    }

    /// Writes the findings for a file. Clean files produce no output.
    pub fn write_file_results(
        &mut self,
        path: &str,
        result: &ValidationResult,
    ) -> std::io::Result<()> {
        if result.is_ok() {
            return Ok(());
        }

        self.write_file_header(path)?;

        for error in &result.errors {
            self.write_issue(&ReportEntry::from(error))?;
        }

        Ok(())
    }

    /// Writes a single finding.
    pub fn write_issue(&mut self, entry: &ReportEntry<'_>) -> std::io::Result<()> {
        let location = format!("line {} {}:", entry.line, entry.rule);
        if self.use_colors {
            writeln!(
                self.writer,
                "  {} {} {}",
                "[ERROR]".red().bold(),
                location.dimmed(),
                entry.message
            )?;
        } else {
            writeln!(self.writer, "  [ERROR] {} {}", location, entry.message)?;
        }
        Ok(())
    }

    /// Writes a summary of the whole report.
    pub fn write_summary(&mut self, report: &LintReport) -> std::io::Result<()> {
        writeln!(self.writer)?;

        if !report.has_errors() {
            let message = format!("✓ All {} proposal(s) are valid", report.len());
            if self.use_colors {
                writeln!(self.writer, "{}", message.green().bold())?;
            } else {
                writeln!(self.writer, "{}", message)?;
            }
        } else {
            let message = format!(
                "✗ Found {} error(s) in {} of {} proposal(s)",
                report.total_errors(),
                report.files_with_errors(),
                report.len()
            );
            if self.use_colors {
                writeln!(self.writer, "{}", message.red().bold())?;
            } else {
                writeln!(self.writer, "{}", message)?;
            }
        }

        Ok(())
    }

    /// Writes the whole report followed by its summary.
    pub fn write_report(&mut self, report: &LintReport) -> std::io::Result<()> {
        for (path, result) in report.iter() {
            self.write_file_results(path, result)?;
        }
        self.write_summary(report)
    }

    /// Writes the list of available rules.
    pub fn write_rules(&mut self, runner: &RuleRunner) -> std::io::Result<()> {
        for rule in runner.rules() {
            self.write_rule(rule)?;
        }
        Ok(())
    }

    fn write_rule(&mut self, rule: &dyn Rule) -> std::io::Result<()> {
        let tags = rule.tags().join(", ");
        if self.use_colors {
            writeln!(self.writer, "{} [{}]", rule.name().bold(), tags.dimmed())?;
        } else {
            writeln!(self.writer, "{} [{}]", rule.name(), tags)?;
        }
        writeln!(self.writer, "    {}", rule.description())
    }
}

/// Output formatter for GitHub Actions workflow commands.
///
/// Each finding becomes an `::error` annotation on the offending file.
pub struct GithubOutput<W: Write> {
    writer: W,
}

impl<W: Write> GithubOutput<W> {
    /// Creates a new annotation formatter.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Writes one annotation per finding.
    pub fn write_report(&mut self, report: &LintReport) -> std::io::Result<()> {
        for (path, _) in report.iter() {
            for entry in report.entries(path) {
                self.write_annotation(path, &entry)?;
            }
        }
        Ok(())
    }

    /// Writes a single annotation.
    pub fn write_annotation(&mut self, path: &str, entry: &ReportEntry<'_>) -> std::io::Result<()> {
        writeln!(
            self.writer,
            "::error file={},line={},title={}::{}",
            escape_property(path),
            entry.line,
            escape_property(entry.rule),
            escape_data(&entry.message)
        )
    }
}

/// Escapes an annotation message.
fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escapes an annotation property value.
fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}
