//! `authors` presence check.

use super::{Rule, RuleContext, names};
use crate::document::is_truthy;
use crate::validate::{ValidationError, ValidationResult};

/// A rule that rejects an `authors` list with no entries.
#[derive(Debug, Clone, Default)]
pub struct AuthorsRule;

impl AuthorsRule {
    /// Creates a new authors rule.
    pub fn new() -> Self {
        Self
    }
}

impl Rule for AuthorsRule {
    fn name(&self) -> &'static str {
        names::AUTHORS
    }

    fn description(&self) -> &'static str {
        "Proposal front matter should include authors"
    }

    fn run(&self, ctx: &RuleContext) -> ValidationResult {
        let mut result = ValidationResult::new();

        if let Some(authors) = ctx.front_matter.value("authors").filter(|v| is_truthy(v))
            && authors.as_sequence().is_some_and(|list| list.is_empty())
        {
            result.add_error(ValidationError::AuthorsEmpty);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::rules::test_support::*;

    fn run_check(front_matter: &str) -> ValidationResult {
        run_rule(&AuthorsRule::new(), &proposal(front_matter, ""))
    }

    #[test]
    fn authors_listed() {
        assert!(run_check("authors:\n  - Alice\n  - Bob").is_ok());
    }

    #[test]
    fn single_author_string() {
        assert!(run_check("authors: Alice").is_ok());
    }

    #[test]
    fn empty_list() {
        let result = run_check("authors: []");
        assert_eq!(result.errors, vec![ValidationError::AuthorsEmpty]);
    }

    #[test]
    fn missing_authors_is_skipped() {
        assert!(run_check("title: x").is_ok());
        assert!(run_check("authors:").is_ok());
    }
}
