//! `category` value check.

use super::{Rule, RuleContext, names};
use crate::document::{is_truthy, render_value};
use crate::validate::{ValidationError, ValidationResult};

/// A rule that checks `category` against the allowed categories.
#[derive(Debug, Clone, Default)]
pub struct CategoryRule;

impl CategoryRule {
    /// Creates a new category rule.
    pub fn new() -> Self {
        Self
    }
}

impl Rule for CategoryRule {
    fn name(&self) -> &'static str {
        names::CATEGORY
    }

    fn description(&self) -> &'static str {
        "Proposal front matter should have a valid category"
    }

    fn run(&self, ctx: &RuleContext) -> ValidationResult {
        let mut result = ValidationResult::new();
        let Some(value) = ctx.front_matter.value("category").filter(|v| is_truthy(v)) else {
            return result;
        };

        let allowed = value
            .as_str()
            .is_some_and(|category| ctx.template.categories.iter().any(|c| c == category));
        if !allowed {
            result.add_error(ValidationError::invalid_category(render_value(value)));
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::rules::test_support::*;

    fn run_check(front_matter: &str) -> ValidationResult {
        run_rule(&CategoryRule::new(), &proposal(front_matter, ""))
    }

    #[test]
    fn valid_categories() {
        assert!(run_check("category: Meta").is_ok());
        assert!(run_check("category: Standard").is_ok());
    }

    #[test]
    fn invalid_category() {
        let result = run_check("category: Informational");
        assert_eq!(result.errors, vec![ValidationError::invalid_category("Informational")]);
        assert_eq!(
            result.errors[0].to_string(),
            "`Informational` is not supported as a value for category"
        );
    }

    #[test]
    fn match_is_case_sensitive() {
        assert_eq!(run_check("category: standard").errors.len(), 1);
    }

    #[test]
    fn non_string_category() {
        let result = run_check("category: 3");
        assert_eq!(result.errors, vec![ValidationError::invalid_category("3")]);
    }

    #[test]
    fn missing_category_is_skipped() {
        assert!(run_check("title: x").is_ok());
    }
}
