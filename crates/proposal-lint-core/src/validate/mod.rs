//! Validation rules for proposal documents.
//!
//! # Example
//!
//! ```rust
//! use proposal_lint_core::document::Document;
//! use proposal_lint_core::validate::{Template, rules::RuleRunner};
//!
//! let document = Document::parse("0042-example.md", "---\nstatus: Draft\n---\n");
//! let result = RuleRunner::with_all_rules().run(&document, &Template::default());
//!
//! for error in &result.errors {
//!     eprintln!("line {} {}: {}", error.line(), error.rule(), error);
//! }
//! assert!(result.has_errors());
//! ```

mod error;
pub mod rules;
mod template;

// Re-export public types
pub use error::{REPORTED_LINE, ValidationError, ValidationResult};
pub use template::{ExpectedHeading, Template, TemplateError};
