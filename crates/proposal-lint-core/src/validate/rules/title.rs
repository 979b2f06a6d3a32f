//! `title` length check.

use super::{Rule, RuleContext, names};
use crate::validate::{ValidationError, ValidationResult};

/// A rule that limits the length of `title`.
#[derive(Debug, Clone, Default)]
pub struct TitleRule;

impl TitleRule {
    /// Creates a new title rule.
    pub fn new() -> Self {
        Self
    }
}

impl Rule for TitleRule {
    fn name(&self) -> &'static str {
        names::TITLE
    }

    fn description(&self) -> &'static str {
        "Proposal front matter should include a title no longer than the maximum length"
    }

    fn run(&self, ctx: &RuleContext) -> ValidationResult {
        let mut result = ValidationResult::new();
        let max = ctx.template.max_title_length;

        if let Ok(Some(title)) = ctx.front_matter.string("title")
            && title.chars().count() > max
        {
            result.add_error(ValidationError::title_too_long(title, max));
        }

        result
    }
}
