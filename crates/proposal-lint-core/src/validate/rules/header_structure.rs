//! Heading structure check.
//!
//! Verifies that a proposal has at least as many h1/h2 headings as the
//! template expects. Matching is positional: the n-th document heading
//! accounts for the n-th expected heading whatever its text.

use super::{Rule, RuleContext, names};
use crate::document::{is_truthy, render_value};
use crate::validate::{ValidationError, ValidationResult};
use log::trace;

/// A rule that checks the proposal against the template heading sequence.
///
/// Proposals without front matter, without a `category`, or in an exempt
/// category are skipped.
#[derive(Debug, Clone, Default)]
pub struct HeaderStructureRule;

impl HeaderStructureRule {
    /// Creates a new header structure rule.
    pub fn new() -> Self {
        Self
    }
}

impl Rule for HeaderStructureRule {
    fn name(&self) -> &'static str {
        names::HEADER_STRUCTURE
    }

    fn description(&self) -> &'static str {
        "Proposal header structure should follow template"
    }

    fn tags(&self) -> &'static [&'static str] {
        &["structure"]
    }

    fn run(&self, ctx: &RuleContext) -> ValidationResult {
        let mut result = ValidationResult::new();

        let Some(category) = ctx.front_matter.value("category").filter(|v| is_truthy(v)) else {
            return result;
        };
        if ctx.template.is_exempt_category(&render_value(category)) {
            trace!("Category is exempt from the heading structure check");
            return result;
        }

        let found = ctx.document.structural_headings().count();
        let expected = &ctx.template.expected_headings;

        // Every expected heading past the last document heading is missing.
        for missing in expected.iter().skip(found) {
            result.add_error(ValidationError::missing_heading(missing.to_string()));
        }

        result
    }
}
