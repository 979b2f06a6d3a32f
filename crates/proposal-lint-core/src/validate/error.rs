//! Validation findings for proposal documents.
//!
//! Every rule violation is a [`ValidationError`]. Violations are data, not
//! failures: they are collected into a [`ValidationResult`] and the run
//! continues.

use super::rules::names;
use serde::Serialize;
use thiserror::Error;

/// Line reported for every finding.
///
/// Findings are attributed to the start of the document rather than to the
/// offending line.
pub const REPORTED_LINE: usize = 1;

/// A rule violation found in a proposal.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    /// The document has no decodable front matter.
    #[error("Missing front matter metadata formatted as YAML")]
    MissingFrontMatter,

    /// A required field is missing or unset.
    #[error("Front matter metadata either doesn't contain `{field}` or isn't formatted correctly")]
    MissingField {
        /// The required field name.
        field: String,
    },

    /// A field outside the template vocabulary.
    #[error("Front matter contains invalid metadata `{field}`")]
    UnknownField {
        /// The offending field name.
        field: String,
    },

    /// `simd` is not a number.
    #[error("Front matter `simd` must be a numerical string")]
    SimdNotNumeric {
        /// The rendered value.
        value: String,
    },

    /// `simd` has the wrong number of digits.
    #[error("Front matter `simd` must be {digits} digits")]
    SimdWrongLength {
        /// The rendered value.
        value: String,
        /// The expected number of digits.
        digits: usize,
    },

    /// `title` is too long.
    #[error("Metadata `title` should be no longer than {max} characters")]
    TitleTooLong {
        /// The title.
        title: String,
        /// Maximum allowed characters.
        max: usize,
    },

    /// `authors` is an empty list.
    #[error("Metadata `authors` exists but doesn't include any values")]
    AuthorsEmpty,

    /// `category` is not an allowed value.
    #[error("`{value}` is not supported as a value for category")]
    InvalidCategory {
        /// The rendered value.
        value: String,
    },

    /// `type` matches none of the allowed values.
    #[error("`{value}` is not supported as a value for type. Valid values for type are: {valid}")]
    InvalidType {
        /// The rendered value.
        value: String,
        /// Comma-separated allowed values.
        valid: String,
    },

    /// `status` is not an allowed value.
    #[error("`{value}` is not supported as a value for status. Valid values for status are: {valid}")]
    InvalidStatus {
        /// The rendered value.
        value: String,
        /// Comma-separated allowed values.
        valid: String,
    },

    /// A heading required by the template is missing.
    #[error("Expected heading `{heading}` and none exists. Please follow the structure outlined in the Proposal Template.")]
    MissingHeading {
        /// The heading as written in the template, e.g. `## Summary`.
        heading: String,
    },
}

impl ValidationError {
    /// Creates a missing field error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Creates an unknown field error.
    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::UnknownField {
            field: field.into(),
        }
    }

    /// Creates a non-numeric `simd` error.
    pub fn simd_not_numeric(value: impl Into<String>) -> Self {
        Self::SimdNotNumeric {
            value: value.into(),
        }
    }

    /// Creates a wrong-length `simd` error.
    pub fn simd_wrong_length(value: impl Into<String>, digits: usize) -> Self {
        Self::SimdWrongLength {
            value: value.into(),
            digits,
        }
    }

    /// Creates a title too long error.
    pub fn title_too_long(title: impl Into<String>, max: usize) -> Self {
        Self::TitleTooLong {
            title: title.into(),
            max,
        }
    }

    /// Creates an invalid category error.
    pub fn invalid_category(value: impl Into<String>) -> Self {
        Self::InvalidCategory {
            value: value.into(),
        }
    }

    /// Creates an invalid type error.
    pub fn invalid_type(value: impl Into<String>, valid: &[String]) -> Self {
        Self::InvalidType {
            value: value.into(),
            valid: valid.join(", "),
        }
    }

    /// Creates an invalid status error.
    pub fn invalid_status(value: impl Into<String>, valid: &[String]) -> Self {
        Self::InvalidStatus {
            value: value.into(),
            valid: valid.join(", "),
        }
    }

    /// Creates a missing heading error.
    pub fn missing_heading(heading: impl Into<String>) -> Self {
        Self::MissingHeading {
            heading: heading.into(),
        }
    }

    /// Returns the line this finding is reported on.
    pub fn line(&self) -> usize {
        REPORTED_LINE
    }

    /// Returns the name of the rule that reports this finding.
    pub fn rule(&self) -> &'static str {
        match self {
            ValidationError::MissingFrontMatter
            | ValidationError::MissingField { .. }
            | ValidationError::UnknownField { .. } => names::FRONT_MATTER_STRUCTURE,
            ValidationError::SimdNotNumeric { .. } | ValidationError::SimdWrongLength { .. } => {
                names::SIMD
            }
            ValidationError::TitleTooLong { .. } => names::TITLE,
            ValidationError::AuthorsEmpty => names::AUTHORS,
            ValidationError::InvalidCategory { .. } => names::CATEGORY,
            ValidationError::InvalidType { .. } => names::TYPE,
            ValidationError::InvalidStatus { .. } => names::STATUS,
            ValidationError::MissingHeading { .. } => names::HEADER_STRUCTURE,
        }
    }
}

/// The findings of one or more rules for a single document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// All findings, in the order they were reported.
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Creates a new empty validation result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validation result with the given errors.
    pub fn with_errors(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    /// Returns true if validation passed with no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns true if there are validation errors.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of findings.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if there are no findings.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Merges another validation result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
    }

    /// Returns findings reported by the named rule.
    pub fn by_rule<'a>(&'a self, rule: &'a str) -> impl Iterator<Item = &'a ValidationError> {
        self.errors.iter().filter(move |e| e.rule() == rule)
    }
}
