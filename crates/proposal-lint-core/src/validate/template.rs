//! Proposal template configuration.
//!
//! The template holds every constant the rules validate against. The
//! default is the SIMD proposal template; alternate templates can be loaded
//! from YAML, with omitted keys keeping their default values.
//!
//! ```rust
//! use proposal_lint_core::validate::Template;
//!
//! let template = Template::from_yaml_str("max-title-length: 60\n").unwrap();
//! assert_eq!(template.max_title_length, 60);
//! assert_eq!(template.required_fields.len(), 7);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a template.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The template file could not be read.
    #[error("failed to read template '{}': {source}", path.display())]
    Io {
        /// Path of the template file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The template is not valid YAML or has the wrong shape.
    #[error("invalid template: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// An expected heading is not an h1 or h2.
    #[error("invalid template: expected heading `{heading}` must be level 1 or 2, found {level}")]
    HeadingLevel {
        /// Text of the heading.
        heading: String,
        /// The configured level.
        level: u8,
    },
}

/// A heading the template requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedHeading {
    /// Heading level.
    #[serde(default = "default_heading_level")]
    pub level: u8,
    /// Heading text.
    pub text: String,
}

fn default_heading_level() -> u8 {
    2
}

impl ExpectedHeading {
    /// Creates a level-2 heading.
    pub fn h2(text: impl Into<String>) -> Self {
        Self {
            level: 2,
            text: text.into(),
        }
    }

    /// Returns true for h1 and h2 headings.
    pub fn is_structural(&self) -> bool {
        self.level == 1 || self.level == 2
    }
}

impl Display for ExpectedHeading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", "#".repeat(self.level as usize), self.text)
    }
}

/// Field vocabulary, value constraints and heading structure of a proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Template {
    /// Fields every proposal must set.
    pub required_fields: Vec<String>,
    /// Fields a proposal may set.
    pub optional_fields: Vec<String>,
    /// Allowed `category` values.
    pub categories: Vec<String>,
    /// Categories exempt from the heading structure check.
    pub exempt_categories: Vec<String>,
    /// Allowed `type` values, matched as substrings.
    pub types: Vec<String>,
    /// Allowed `status` values.
    pub statuses: Vec<String>,
    /// Headings every non-exempt proposal must have, in order.
    pub expected_headings: Vec<ExpectedHeading>,
    /// Maximum number of characters in `title`.
    pub max_title_length: usize,
    /// Number of digits in `simd`.
    pub simd_digits: usize,
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl Default for Template {
    fn default() -> Self {
        Self {
            required_fields: strings(&[
                "simd", "title", "authors", "category", "type", "status", "created",
            ]),
            optional_fields: strings(&["feature", "supersedes", "superseded-by", "extends"]),
            categories: strings(&["Meta", "Standard"]),
            exempt_categories: strings(&["Meta"]),
            types: strings(&["Core", "Networking", "Interface", "Meta"]),
            statuses: strings(&[
                "Idea",
                "Review",
                "Accepted",
                "Stagnant",
                "Withdrawn",
                "Implemented",
                "Activated",
            ]),
            expected_headings: [
                "Summary",
                "Motivation",
                "Alternatives Considered",
                "New Terminology",
                "Detailed Design",
                "Impact",
                "Security Considerations",
            ]
            .into_iter()
            .map(ExpectedHeading::h2)
            .collect(),
            max_title_length: 45,
            simd_digits: 4,
        }
    }
}

impl Template {
    /// Parses a template from YAML text.
    ///
    /// Only h1 and h2 headings take part in the structure check, so expected
    /// headings of any other level are rejected.
    pub fn from_yaml_str(input: &str) -> Result<Self, TemplateError> {
        let template: Self = serde_yaml::from_str(input)?;
        let deeper = template
            .expected_headings
            .iter()
            .find(|h| !h.is_structural());
        if let Some(heading) = deeper {
            return Err(TemplateError::HeadingLevel {
                heading: heading.text.clone(),
                level: heading.level,
            });
        }
        Ok(template)
    }

    /// Loads a template from a YAML file.
    pub fn load(path: &Path) -> Result<Self, TemplateError> {
        let content = std::fs::read_to_string(path).map_err(|source| TemplateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Returns true if the field is required or optional.
    pub fn is_known_field(&self, field: &str) -> bool {
        self.required_fields.iter().any(|f| f == field)
            || self.optional_fields.iter().any(|f| f == field)
    }

    /// Returns true if the category skips the heading structure check.
    pub fn is_exempt_category(&self, category: &str) -> bool {
        self.exempt_categories.iter().any(|c| c == category)
    }
}
