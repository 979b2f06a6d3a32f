//! Document and heading token types.

use super::front_matter::{FrontMatter, parse_front_matter, split_front_matter};
use super::headings::extract_headings;
use std::fmt::{self, Display};

/// A heading found in a document body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingToken {
    /// Heading level, 1 through 6.
    pub level: u8,
    /// Inline text of the heading.
    pub text: String,
    /// Line number in the file (1-based).
    pub line: usize,
}

impl HeadingToken {
    /// Creates a new heading token.
    pub fn new(level: u8, text: impl Into<String>, line: usize) -> Self {
        Self {
            level,
            text: text.into(),
            line,
        }
    }

    /// Returns true for h1 and h2 headings.
    pub fn is_structural(&self) -> bool {
        self.level == 1 || self.level == 2
    }
}

impl Display for HeadingToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", "#".repeat(self.level as usize), self.text)
    }
}

/// A proposal document prepared for linting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Identifier of the document, usually its path.
    pub id: String,
    /// Raw front-matter lines, delimiters included.
    pub front_matter_lines: Vec<String>,
    /// Every heading in the body, in document order.
    pub headings: Vec<HeadingToken>,
}

impl Document {
    /// Creates a document from already tokenized parts.
    pub fn new(
        id: impl Into<String>,
        front_matter_lines: Vec<String>,
        headings: Vec<HeadingToken>,
    ) -> Self {
        Self {
            id: id.into(),
            front_matter_lines,
            headings,
        }
    }

    /// Splits and tokenizes raw document content.
    pub fn parse(id: impl Into<String>, content: &str) -> Self {
        let split = split_front_matter(content);
        let headings = extract_headings(split.body, split.body_line_offset);
        Self {
            id: id.into(),
            front_matter_lines: split.lines.into_iter().map(str::to_string).collect(),
            headings,
        }
    }

    /// Decodes the front matter of this document.
    pub fn front_matter(&self) -> FrontMatter {
        parse_front_matter(&self.front_matter_lines)
    }

    /// Returns h1 and h2 headings in document order.
    pub fn structural_headings(&self) -> impl Iterator<Item = &HeadingToken> {
        self.headings.iter().filter(|h| h.is_structural())
    }
}
