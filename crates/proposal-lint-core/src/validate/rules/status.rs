//! `status` value check.

use super::{Rule, RuleContext, names};
use crate::document::{is_truthy, render_value};
use crate::validate::{ValidationError, ValidationResult};

/// A rule that checks `status` against the allowed statuses.
#[derive(Debug, Clone, Default)]
pub struct StatusRule;

impl StatusRule {
    /// Creates a new status rule.
    pub fn new() -> Self {
        Self
    }
}

impl Rule for StatusRule {
    fn name(&self) -> &'static str {
        names::STATUS
    }

    fn description(&self) -> &'static str {
        "Proposal front matter should have a valid status"
    }

    fn run(&self, ctx: &RuleContext) -> ValidationResult {
        let mut result = ValidationResult::new();
        let Some(value) = ctx.front_matter.value("status").filter(|v| is_truthy(v)) else {
            return result;
        };
        let statuses = &ctx.template.statuses;

        let allowed = value
            .as_str()
            .is_some_and(|status| statuses.iter().any(|s| s == status));
        if !allowed {
            result.add_error(ValidationError::invalid_status(
                render_value(value),
                statuses,
            ));
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::rules::test_support::*;

    fn run_check(front_matter: &str) -> ValidationResult {
        run_rule(&StatusRule::new(), &proposal(front_matter, ""))
    }

    #[test]
    fn review_is_valid() {
        assert!(run_check("status: Review").is_ok());
    }

    #[test]
    fn every_lifecycle_status_is_valid() {
        for status in [
            "Idea",
            "Review",
            "Accepted",
            "Stagnant",
            "Withdrawn",
            "Implemented",
            "Activated",
        ] {
            assert!(run_check(&format!("status: {}", status)).is_ok(), "{}", status);
        }
    }

    #[test]
    fn draft_is_rejected() {
        let result = run_check("status: Draft");
        assert_eq!(
            result.errors,
            vec![ValidationError::InvalidStatus {
                value: "Draft".to_string(),
                valid: "Idea, Review, Accepted, Stagnant, Withdrawn, Implemented, Activated"
                    .to_string(),
            }]
        );
    }

    #[test]
    fn missing_status_is_skipped() {
        assert!(run_check("title: x").is_ok());
    }
}
