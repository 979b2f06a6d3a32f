//! Rule trait and runner for proposal validation.
//!
//! Each rule is an independent check over one document. The runner applies
//! rules in registration order and concatenates their findings.

mod authors;
mod category;
mod front_matter_structure;
mod header_structure;
mod proposal_type;
mod simd;
mod status;
mod title;

pub use authors::AuthorsRule;
pub use category::CategoryRule;
pub use front_matter_structure::FrontMatterStructureRule;
pub use header_structure::HeaderStructureRule;
pub use proposal_type::TypeRule;
pub use simd::SimdRule;
pub use status::StatusRule;
pub use title::TitleRule;

use crate::document::{Document, FrontMatter};
use crate::validate::{Template, ValidationResult};
use log::{debug, info};

/// Rule names, as used on the command line and in reports.
pub mod names {
    /// Heading sequence check.
    pub const HEADER_STRUCTURE: &str = "enforce-header-structure";
    /// Front-matter presence and field vocabulary check.
    pub const FRONT_MATTER_STRUCTURE: &str = "enforce-front-matter-structure";
    /// `simd` format check.
    pub const SIMD: &str = "front-matter-has-simd";
    /// `title` length check.
    pub const TITLE: &str = "front-matter-has-title";
    /// `authors` non-empty check.
    pub const AUTHORS: &str = "front-matter-has-authors";
    /// `category` value check.
    pub const CATEGORY: &str = "front-matter-has-valid-category";
    /// `type` value check.
    pub const TYPE: &str = "front-matter-has-valid-type";
    /// `status` value check.
    pub const STATUS: &str = "front-matter-has-valid-status";

    /// All built-in rule names in registration order.
    pub const ALL: [&str; 8] = [
        HEADER_STRUCTURE,
        FRONT_MATTER_STRUCTURE,
        SIMD,
        TITLE,
        AUTHORS,
        CATEGORY,
        TYPE,
        STATUS,
    ];
}

/// Context provided to rules.
#[derive(Debug)]
pub struct RuleContext<'a> {
    /// The document being linted.
    pub document: &'a Document,
    /// The decoded front matter of the document.
    pub front_matter: &'a FrontMatter,
    /// The template to validate against.
    pub template: &'a Template,
}

impl<'a> RuleContext<'a> {
    /// Creates a new rule context.
    pub fn new(
        document: &'a Document,
        front_matter: &'a FrontMatter,
        template: &'a Template,
    ) -> Self {
        Self {
            document,
            front_matter,
            template,
        }
    }
}

/// A validation rule.
pub trait Rule: Send + Sync {
    /// Returns the name of this rule.
    fn name(&self) -> &'static str;

    /// Returns a one-line description of what the rule enforces.
    fn description(&self) -> &'static str;

    /// Returns the tags this rule is grouped under.
    fn tags(&self) -> &'static [&'static str] {
        &["front-matter"]
    }

    /// Runs the rule and returns its findings.
    fn run(&self, ctx: &RuleContext) -> ValidationResult;
}

/// Runs multiple rules and collects results.
#[derive(Default)]
pub struct RuleRunner {
    rules: Vec<Box<dyn Rule>>,
}

impl std::fmt::Debug for RuleRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRunner")
            .field("rules", &self.names())
            .finish()
    }
}

impl RuleRunner {
    /// Creates a new rule runner with no rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a rule runner with all built-in rules.
    pub fn with_all_rules() -> Self {
        let mut runner = Self::new();
        runner.add_rule(HeaderStructureRule::new());
        runner.add_rule(FrontMatterStructureRule::new());
        runner.add_rule(SimdRule::new());
        runner.add_rule(TitleRule::new());
        runner.add_rule(AuthorsRule::new());
        runner.add_rule(CategoryRule::new());
        runner.add_rule(TypeRule::new());
        runner.add_rule(StatusRule::new());
        runner
    }

    /// Keeps only the rules whose names are listed, preserving order.
    pub fn select<S: AsRef<str>>(mut self, names: &[S]) -> Self {
        self.rules
            .retain(|rule| names.iter().any(|name| name.as_ref() == rule.name()));
        self
    }

    /// Adds a rule.
    pub fn add_rule<R: Rule + 'static>(&mut self, rule: R) {
        self.rules.push(Box::new(rule));
    }

    /// Returns the names of the registered rules, in order.
    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Returns the registered rules.
    pub fn rules(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(|rule| rule.as_ref())
    }

    /// Runs all rules against a document and returns combined results.
    pub fn run(&self, document: &Document, template: &Template) -> ValidationResult {
        info!("Running {} rules on {}", self.rules.len(), document.id);
        let front_matter = document.front_matter();
        let ctx = RuleContext::new(document, &front_matter, template);
        let mut result = ValidationResult::new();

        for rule in &self.rules {
            debug!("Running rule: {}", rule.name());
            let rule_result = rule.run(&ctx);
            debug!(
                "Rule '{}' found {} issues",
                rule.name(),
                rule_result.errors.len()
            );
            result.merge(rule_result);
        }

        info!("{}: {} total issues", document.id, result.errors.len());
        result
    }
}

/// Helpers shared by the rule tests.
#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Builds a proposal with the given front-matter body and Markdown body.
    pub fn proposal(front_matter: &str, body: &str) -> String {
        format!("---\n{}\n---\n{}", front_matter, body)
    }

    /// A complete, valid body.
    pub const FULL_BODY: &str = "\n# Title\n\n## Summary\n\n## Motivation\n\n## Alternatives Considered\n\n## New Terminology\n\n## Detailed Design\n\n## Impact\n\n## Security Considerations\n";

    /// A complete, valid front matter.
    pub const VALID_FRONT_MATTER: &str = "simd: '0042'\ntitle: Example Proposal\nauthors:\n  - Alice\ncategory: Standard\ntype: Core\nstatus: Review\ncreated: 2024-01-01";

    /// Runs a single rule against raw document content.
    pub fn run_rule<R: Rule>(rule: &R, content: &str) -> ValidationResult {
        run_rule_with(rule, content, &Template::default())
    }

    /// Runs a single rule with a custom template.
    pub fn run_rule_with<R: Rule>(
        rule: &R,
        content: &str,
        template: &Template,
    ) -> ValidationResult {
        let document = Document::parse("test.md", content);
        let front_matter = document.front_matter();
        let ctx = RuleContext::new(&document, &front_matter, template);
        rule.run(&ctx)
    }
}
