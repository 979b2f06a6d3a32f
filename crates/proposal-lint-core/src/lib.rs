//! Proposal Lint Core
//!
//! A library for validating proposal documents: Markdown files with a YAML
//! front-matter block that must follow the proposal template.
//!
//! # Features
//!
//! - **Document model**: Split front matter from the body and extract headings
//! - **Rules**: Required and known fields, field value constraints, heading structure
//! - **Templates**: Field vocabulary and constraints as injectable configuration
//! - **Discovery**: List the proposals of a directory
//!
//! # Quick Start
//!
//! ```rust
//! use proposal_lint_core::Linter;
//!
//! let input = r#"---
//! simd: '0042'
//! title: Example
//! authors:
//!   - Alice
//! category: Meta
//! type: Meta
//! status: Idea
//! created: 2024-01-01
//! ---
//!
//! # Example
//! "#;
//!
//! let result = Linter::default().lint_source("0042-example.md", input);
//! if result.is_ok() {
//!     println!("Proposal is valid!");
//! } else {
//!     for error in &result.errors {
//!         eprintln!("{}: {}", error.rule(), error);
//!     }
//! }
//! # assert!(result.is_ok());
//! ```
//!
//! # Modules
//!
//! - [`document`]: Front matter and heading extraction
//! - [`validate`]: Template, findings and rules
//! - [`discover`]: Proposal file discovery

pub mod discover;
pub mod document;
mod linter;
mod report;
pub mod validate;

// Re-export commonly used types at the crate root
pub use discover::{DiscoveryConfig, DiscoveryError, list_proposals};
pub use document::{Document, FrontMatter, HeadingToken};
pub use linter::{LintError, Linter};
pub use report::{LintReport, ReportEntry};
pub use validate::rules::{Rule, RuleContext, RuleRunner};
pub use validate::{Template, ValidationError, ValidationResult};
