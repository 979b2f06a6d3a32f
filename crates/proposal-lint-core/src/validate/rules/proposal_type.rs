//! `type` value check.

use super::{Rule, RuleContext, names};
use crate::document::{is_truthy, render_value};
use crate::validate::{ValidationError, ValidationResult};
use serde_yaml::Value;

/// A rule that checks `type` against the allowed types.
///
/// A string is accepted when it contains any allowed type, so combined values
/// such as `Core/Interface` pass. A list is accepted when one of its items is
/// exactly an allowed type.
#[derive(Debug, Clone, Default)]
pub struct TypeRule;

impl TypeRule {
    /// Creates a new type rule.
    pub fn new() -> Self {
        Self
    }
}

impl Rule for TypeRule {
    fn name(&self) -> &'static str {
        names::TYPE
    }

    fn description(&self) -> &'static str {
        "Proposal front matter should have a valid type"
    }

    fn run(&self, ctx: &RuleContext) -> ValidationResult {
        let mut result = ValidationResult::new();
        let Some(value) = ctx.front_matter.value("type").filter(|v| is_truthy(v)) else {
            return result;
        };
        let types = &ctx.template.types;

        let allowed = match value {
            Value::String(kind) => types.iter().any(|t| kind.contains(t.as_str())),
            Value::Sequence(items) => types
                .iter()
                .any(|t| items.iter().any(|item| item.as_str() == Some(t.as_str()))),
            _ => false,
        };
        if !allowed {
            result.add_error(ValidationError::invalid_type(render_value(value), types));
        }

        result
    }
}
