//! Error types for front-matter decoding and typed field access.

use thiserror::Error;

/// Why a front-matter block could not be decoded into a mapping.
///
/// Callers of [`parse_front_matter`](super::parse_front_matter) never see
/// this error; every variant collapses into [`FrontMatter::Absent`](super::FrontMatter::Absent).
#[derive(Debug, Error)]
pub enum FrontMatterError {
    /// The block was empty after delimiter lines were removed.
    #[error("front matter is empty")]
    Empty,

    /// The block is valid YAML but not a key/value mapping.
    #[error("front matter is a {0}, expected a mapping")]
    NotAMapping(&'static str),

    /// The block is not valid YAML.
    #[error("front matter is not valid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A front-matter field is present but holds a value of the wrong type.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("front matter field `{field}` is a {found}, expected a {expected}")]
pub struct FieldTypeError {
    /// The field name.
    pub field: String,
    /// The type the caller asked for.
    pub expected: &'static str,
    /// The type actually found in the document.
    pub found: &'static str,
}

impl FieldTypeError {
    /// Creates a new field type error.
    pub fn new(field: impl Into<String>, expected: &'static str, found: &'static str) -> Self {
        Self {
            field: field.into(),
            expected,
            found,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_type_error_message() {
        let error = FieldTypeError::new("title", "string", "sequence");
        assert_eq!(
            error.to_string(),
            "front matter field `title` is a sequence, expected a string"
        );
    }

    #[test]
    fn not_a_mapping_message() {
        let error = FrontMatterError::NotAMapping("string");
        assert!(error.to_string().contains("expected a mapping"));
    }
}
