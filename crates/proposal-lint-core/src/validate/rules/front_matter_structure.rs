//! Front-matter presence and vocabulary check.

use super::{Rule, RuleContext, names};
use crate::validate::{ValidationError, ValidationResult};

/// A rule that checks that front matter exists, sets every required field
/// and contains no field outside the template vocabulary.
#[derive(Debug, Clone, Default)]
pub struct FrontMatterStructureRule;

impl FrontMatterStructureRule {
    /// Creates a new front matter structure rule.
    pub fn new() -> Self {
        Self
    }
}

impl Rule for FrontMatterStructureRule {
    fn name(&self) -> &'static str {
        names::FRONT_MATTER_STRUCTURE
    }

    fn description(&self) -> &'static str {
        "Proposal front matter should be YAML following template structure"
    }

    fn run(&self, ctx: &RuleContext) -> ValidationResult {
        let mut result = ValidationResult::new();
        let front_matter = ctx.front_matter;

        if front_matter.is_absent() {
            result.add_error(ValidationError::MissingFrontMatter);
            return result;
        }

        for field in &ctx.template.required_fields {
            if !front_matter.is_set(field) {
                result.add_error(ValidationError::missing_field(field.as_str()));
            }
        }

        for key in front_matter.keys() {
            if !ctx.template.is_known_field(&key) {
                result.add_error(ValidationError::unknown_field(key.into_owned()));
            }
        }

        result
    }
}
