//! `simd` field format check.

use super::{Rule, RuleContext, names};
use crate::document::{is_truthy, plain_scalar, render_value};
use crate::validate::{ValidationError, ValidationResult};
use serde_yaml::Value;

/// A rule that checks that `simd` is a numerical string with the template's
/// number of digits.
///
/// The numeric and length checks run independently; both may fire.
#[derive(Debug, Clone, Default)]
pub struct SimdRule;

impl SimdRule {
    /// Creates a new simd rule.
    pub fn new() -> Self {
        Self
    }
}

/// Returns true if the text reads as a number.
///
/// Accepts signed decimals with optional fraction and exponent, signed
/// `Infinity`, and unsigned `0x`/`0o`/`0b` integers. Surrounding whitespace
/// is ignored and blank text reads as zero.
fn is_numerical(text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() {
        return true;
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = text.strip_prefix(prefix) {
            return !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
        }
    }

    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    if unsigned == "Infinity" {
        return true;
    }

    text.chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
        && text.parse::<f64>().is_ok()
}

/// Returns true for an integer in the YAML core schema, `[-+]?[0-9]+`.
fn is_core_int(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/// Whether a value reads as a number, and its length if it has one.
///
/// Scalars other than strings have no length. A sequence reads as a number
/// only when empty or holding a single numerical item.
fn measure(value: &Value, plain_int: bool) -> (bool, Option<usize>) {
    match value {
        Value::String(_) if plain_int => (true, None),
        Value::String(text) => (is_numerical(text), Some(text.chars().count())),
        Value::Number(_) | Value::Bool(_) => (true, None),
        Value::Sequence(items) => {
            let numeric = match items.as_slice() {
                [] => true,
                [item] => is_numerical(&render_value(item)),
                _ => false,
            };
            (numeric, Some(items.len()))
        }
        Value::Null | Value::Mapping(_) => (false, None),
        Value::Tagged(tagged) => measure(&tagged.value, plain_int),
    }
}

impl Rule for SimdRule {
    fn name(&self) -> &'static str {
        names::SIMD
    }

    fn description(&self) -> &'static str {
        "Metadata `simd` is a numerical string of the required number of digits"
    }

    fn run(&self, ctx: &RuleContext) -> ValidationResult {
        let mut result = ValidationResult::new();
        let Some(value) = ctx.front_matter.value("simd").filter(|v| is_truthy(v)) else {
            return result;
        };
        let digits = ctx.template.simd_digits;
        let rendered = render_value(value);

        // `simd: 0001` decodes to a string but is an integer in the core schema.
        let plain_int =
            plain_scalar(&ctx.document.front_matter_lines, "simd").is_some_and(is_core_int);
        let (numeric, length) = measure(value, plain_int);

        if !numeric {
            result.add_error(ValidationError::simd_not_numeric(rendered.as_str()));
        }
        if length != Some(digits) {
            result.add_error(ValidationError::simd_wrong_length(rendered, digits));
        }

        result
    }
}
