//! CLI module for the proposal linter.
//!
//! Command-line arguments are parsed with Clap; every option can also be
//! set through an environment variable so the linter is easy to drive from
//! a CI workflow.

pub mod config;
pub mod output;

use clap::{Parser, ValueEnum};
use proposal_lint_core::discover::DEFAULT_EXCLUDE;
use std::path::PathBuf;

/// Proposal linter - validates proposal documents against the template.
///
/// Checks front-matter metadata and the heading structure of every proposal
/// in the proposals directory, or of the files given on the command line.
#[derive(Parser, Debug)]
#[command(name = "proposal-lint")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Proposal files to lint. When empty, the proposals directory is scanned.
    pub files: Vec<PathBuf>,

    /// Directory containing the proposals.
    #[arg(long, env = "PROPOSALS_DIR", default_value = "proposals")]
    pub proposals_dir: PathBuf,

    /// YAML file overriding the default proposal template.
    #[arg(long, env = "PROPOSAL_TEMPLATE")]
    pub template: Option<PathBuf>,

    /// Comma-separated list of rules to run (default: all).
    #[arg(long, env = "PROPOSAL_LINT_RULES", value_delimiter = ',')]
    pub rules: Option<Vec<String>>,

    /// Comma-separated file-name globs to skip when scanning.
    #[arg(
        long,
        env = "PROPOSAL_LINT_EXCLUDE",
        value_delimiter = ',',
        default_value = DEFAULT_EXCLUDE
    )]
    pub exclude: Vec<String>,

    /// Output format.
    #[arg(long, short = 'f', env = "OUTPUT_FORMAT", default_value = "human")]
    pub format: OutputFormat,

    /// Print the available rules and exit.
    #[arg(long)]
    pub list_rules: bool,

    /// Increase verbosity level (-v for info, -vv for debug, -vvv for trace).
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Output formats for lint results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report.
    #[default]
    Human,
    /// Machine-readable JSON report.
    Json,
    /// GitHub Actions workflow annotations.
    Github,
}

impl Args {
    /// Returns the exclude patterns with empty entries removed.
    pub fn effective_exclude(&self) -> Vec<String> {
        self.exclude
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Returns true if log output should be suppressed.
    pub fn is_machine_output(&self) -> bool {
        self.format == OutputFormat::Json
    }
}
