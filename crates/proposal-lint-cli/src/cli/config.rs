//! Configuration handling for the CLI.
//!
//! This module converts CLI arguments into the library's configuration types
//! and resolves the list of proposals to lint.

use crate::cli::{Args, OutputFormat};
use proposal_lint_core::discover::{DiscoveryConfig, DiscoveryError, list_proposals};
use proposal_lint_core::validate::rules::names;
use proposal_lint_core::validate::{Template, TemplateError};
use proposal_lint_core::{LintReport, RuleRunner};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Invalid(String),

    /// The template could not be loaded.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// The proposals could not be listed.
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),
}

/// Application exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Every proposal passed.
    Success = 0,
    /// Application startup failed (wrong configuration or unreadable input).
    StartupFailure = 1,
    /// At least one proposal has findings.
    ValidationFailed = 3,
}

impl From<ExitCode> for u8 {
    fn from(code: ExitCode) -> Self {
        code as u8
    }
}

/// Validated and processed configuration for running the linter.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// The template proposals are validated against.
    pub template: Template,
    /// Names of the rules to run, in registration order.
    pub rules: Vec<&'static str>,
    /// Proposal files to lint.
    pub files: Vec<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments.
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let template = match &args.template {
            Some(path) => Template::load(path)?,
            None => Template::default(),
        };

        let rules = select_rules(args.rules.as_deref())?;

        let files = if args.files.is_empty() {
            let discovery = DiscoveryConfig::new().with_exclude(args.effective_exclude());
            list_proposals(&args.proposals_dir, &discovery)?
        } else {
            args.files.clone()
        };

        Ok(Self {
            template,
            rules,
            files,
            format: args.format,
        })
    }

    /// Builds a rule runner with the selected rules.
    pub fn runner(&self) -> RuleRunner {
        RuleRunner::with_all_rules().select(&self.rules)
    }

    /// Determines the exit code based on the lint report.
    pub fn exit_code_for_report(&self, report: &LintReport) -> ExitCode {
        if report.has_errors() {
            ExitCode::ValidationFailed
        } else {
            ExitCode::Success
        }
    }
}

/// Resolves requested rule names against the built-in rules.
///
/// `None` selects every rule. Unknown names are a configuration error.
pub fn select_rules(requested: Option<&[String]>) -> Result<Vec<&'static str>, ConfigError> {
    let Some(requested) = requested else {
        return Ok(names::ALL.to_vec());
    };

    let requested: Vec<&str> = requested
        .iter()
        .map(|r| r.trim())
        .filter(|r| !r.is_empty())
        .collect();

    if let Some(unknown) = requested.iter().find(|r| !names::ALL.contains(*r)) {
        return Err(ConfigError::Invalid(format!(
            "unknown rule '{}'. Available rules: {}",
            unknown,
            names::ALL.join(", ")
        )));
    }

    if requested.is_empty() {
        return Err(ConfigError::Invalid("no rules selected".to_string()));
    }

    Ok(names::ALL
        .iter()
        .copied()
        .filter(|name| requested.contains(name))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use proposal_lint_core::{ValidationError, ValidationResult};
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile::TempDir;

    fn proposals_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("0001-simd-process.md")).unwrap();
        File::create(dir.path().join("0002-b.md")).unwrap();
        File::create(dir.path().join("0003-a.md")).unwrap();
        dir
    }

    fn args(extra: &[&str]) -> Args {
        Args::parse_from(std::iter::once("proposal-lint").chain(extra.iter().copied()))
    }

    #[test]
    fn test_exit_code_values() {
        assert_eq!(u8::from(ExitCode::Success), 0);
        assert_eq!(u8::from(ExitCode::StartupFailure), 1);
        assert_eq!(u8::from(ExitCode::ValidationFailed), 3);
    }

    #[test]
    fn test_select_all_rules_by_default() {
        assert_eq!(select_rules(None).unwrap(), names::ALL.to_vec());
    }

    #[test]
    fn test_select_rules_keeps_registration_order() {
        let requested = vec![names::STATUS.to_string(), names::SIMD.to_string()];
        assert_eq!(
            select_rules(Some(&requested)).unwrap(),
            vec![names::SIMD, names::STATUS]
        );
    }

    #[test]
    fn test_select_unknown_rule() {
        let requested = vec!["no-such-rule".to_string()];
        let error = select_rules(Some(&requested)).unwrap_err();
        assert!(error.to_string().contains("no-such-rule"));
    }

    #[test]
    fn test_select_empty_rules() {
        let requested = vec![" ".to_string()];
        assert!(matches!(
            select_rules(Some(&requested)),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_from_args_discovers_proposals() {
        let dir = proposals_dir();
        let args = args(&["--proposals-dir", dir.path().to_str().unwrap()]);
        let config = ValidatedConfig::from_args(&args).unwrap();

        let found: Vec<_> = config
            .files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(found, vec!["0002-b.md", "0003-a.md"]);
        assert_eq!(config.template, Template::default());
        assert_eq!(config.runner().names(), names::ALL.to_vec());
    }

    #[test]
    fn test_from_args_explicit_files_skip_discovery() {
        let args = args(&["--proposals-dir", "/nonexistent", "a.md"]);
        let config = ValidatedConfig::from_args(&args).unwrap();
        assert_eq!(config.files, vec![PathBuf::from("a.md")]);
    }

    #[test]
    fn test_from_args_missing_directory() {
        let args = args(&["--proposals-dir", "/nonexistent/proposals"]);
        let error = ValidatedConfig::from_args(&args).unwrap_err();
        assert!(matches!(error, ConfigError::Discovery(_)));
    }

    #[test]
    fn test_from_args_loads_template() {
        let dir = proposals_dir();
        let template_path = dir.path().join("template.yaml");
        let mut file = File::create(&template_path).unwrap();
        writeln!(file, "max-title-length: 80").unwrap();

        let args = args(&[
            "--template",
            template_path.to_str().unwrap(),
            "--proposals-dir",
            dir.path().to_str().unwrap(),
        ]);
        let config = ValidatedConfig::from_args(&args).unwrap();
        assert_eq!(config.template.max_title_length, 80);
    }

    #[test]
    fn test_from_args_bad_template() {
        let dir = proposals_dir();
        let template_path = dir.path().join("template.yaml");
        fs::write(&template_path, "unknown-key: 1\n").unwrap();

        let args = args(&["--template", template_path.to_str().unwrap(), "a.md"]);
        let error = ValidatedConfig::from_args(&args).unwrap_err();
        assert!(matches!(error, ConfigError::Template(_)));
    }

    #[test]
    fn test_exit_code_for_report() {
        let config = ValidatedConfig::from_args(&args(&["a.md"])).unwrap();

        let mut report = LintReport::new();
        report.add("a.md", ValidationResult::new());
        assert_eq!(config.exit_code_for_report(&report), ExitCode::Success);

        report.add(
            "b.md",
            ValidationResult::with_errors(vec![ValidationError::AuthorsEmpty]),
        );
        assert_eq!(
            config.exit_code_for_report(&report),
            ExitCode::ValidationFailed
        );
    }
}
