//! Document model for proposal files.
//!
//! This module splits a proposal into its front-matter block and Markdown
//! body, decodes the front matter and extracts the heading tokens that the
//! validation rules operate on.
//!
//! # Example
//!
//! ```rust
//! use proposal_lint_core::document::Document;
//!
//! let input = "---\nsimd: '0001'\ntitle: Example\n---\n\n## Summary\n";
//! let document = Document::parse("0001-example.md", input);
//!
//! assert_eq!(document.front_matter_lines.len(), 4);
//! assert_eq!(document.headings[0].text, "Summary");
//! assert_eq!(document.headings[0].line, 6);
//! ```

mod error;
mod front_matter;
mod headings;
mod model;

// Re-export public types
pub use error::{FieldTypeError, FrontMatterError};
pub use front_matter::{
    FrontMatter, FrontMatterSplit, decode_front_matter, is_truthy, parse_front_matter,
    plain_scalar, render_value, split_front_matter,
};
pub use headings::extract_headings;
pub use model::{Document, HeadingToken};
