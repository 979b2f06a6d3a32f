//! Front-matter extraction and decoding.
//!
//! The block is located with nom parsers, then decoded as YAML. Anything
//! that does not decode into a mapping is reported as [`FrontMatter::Absent`].

use super::error::{FieldTypeError, FrontMatterError};
use log::{debug, trace};
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::tag,
    character::complete::{line_ending, not_line_ending, space0},
    combinator::{eof, recognize},
    sequence::terminated,
};
use serde_yaml::{Mapping, Value};
use std::borrow::Cow;

/// A document split into its front-matter lines and Markdown body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatterSplit<'a> {
    /// Raw front-matter lines, delimiter lines included.
    pub lines: Vec<&'a str>,
    /// The remaining Markdown body.
    pub body: &'a str,
    /// Number of lines preceding the body.
    pub body_line_offset: usize,
}

/// Parses a `---` delimiter line, including its line ending.
fn delimiter_line(input: &str) -> IResult<&str, &str> {
    terminated(recognize((tag("---"), space0)), alt((line_ending, eof))).parse(input)
}

/// Parses any single line, excluding its line ending.
fn content_line(input: &str) -> IResult<&str, &str> {
    if input.is_empty() {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Eof,
        )));
    }
    terminated(not_line_ending, alt((line_ending, eof))).parse(input)
}

/// Parses a complete front-matter block from the start of the input.
fn front_matter_block(input: &str) -> IResult<&str, Vec<&str>> {
    let (mut remaining, open) = delimiter_line(input)?;
    let mut lines = vec![open];

    loop {
        if let Ok((after, close)) = delimiter_line(remaining) {
            lines.push(close);
            return Ok((after, lines));
        }
        let (after, line) = content_line(remaining)?;
        lines.push(line);
        remaining = after;
    }
}

/// Splits a document into front-matter lines and body.
///
/// Front matter must open on the first line with `---` and close with a
/// later `---` line. A leading byte order mark is ignored. An unterminated
/// block is not front matter; the whole input is then returned as the body.
pub fn split_front_matter(content: &str) -> FrontMatterSplit<'_> {
    let content = content.strip_prefix('\u{FEFF}').unwrap_or(content);
    match front_matter_block(content) {
        Ok((body, lines)) => {
            trace!("Found front matter block of {} lines", lines.len());
            FrontMatterSplit {
                body_line_offset: lines.len(),
                lines,
                body,
            }
        }
        Err(_) => FrontMatterSplit {
            lines: Vec::new(),
            body: content,
            body_line_offset: 0,
        },
    }
}

/// Blanks every line made only of `-` characters.
fn strip_delimiter_lines(text: &str) -> String {
    text.lines()
        .map(|line| {
            if line.chars().all(|c| c == '-') {
                ""
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Decodes raw front-matter lines into a YAML mapping.
///
/// This is the fallible form of [`parse_front_matter`].
pub fn decode_front_matter<S: AsRef<str>>(lines: &[S]) -> Result<Mapping, FrontMatterError> {
    let joined = lines
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n");
    let text = strip_delimiter_lines(joined.trim());

    if text.trim().is_empty() {
        return Err(FrontMatterError::Empty);
    }

    match serde_yaml::from_str::<Value>(&text)? {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Err(FrontMatterError::Empty),
        other => Err(FrontMatterError::NotAMapping(kind_name(&other))),
    }
}

/// Parses raw front-matter lines.
///
/// Empty or undecodable input yields [`FrontMatter::Absent`], never an error.
pub fn parse_front_matter<S: AsRef<str>>(lines: &[S]) -> FrontMatter {
    match decode_front_matter(lines) {
        Ok(mapping) => {
            debug!("Decoded front matter with {} keys", mapping.len());
            FrontMatter::Present(mapping)
        }
        Err(error) => {
            debug!("Front matter treated as absent: {}", error);
            FrontMatter::Absent
        }
    }
}

/// Returns the text of a top-level key's value when it is written inline as
/// an unquoted scalar.
///
/// The decoded YAML does not record quoting, so `simd: 0001` and
/// `simd: '0001'` decode to the same string. Trailing comments are dropped.
pub fn plain_scalar<'a, S: AsRef<str>>(lines: &'a [S], key: &str) -> Option<&'a str> {
    lines.iter().find_map(|line| {
        let rest = line.as_ref().strip_prefix(key)?.strip_prefix(':')?;
        let text = rest.find(" #").map_or(rest, |idx| &rest[..idx]).trim();
        let quoted = text.starts_with(['\'', '"']);
        (!text.is_empty() && !quoted).then_some(text)
    })
}

/// Decoded front matter of a document.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FrontMatter {
    /// No front matter, or a block that could not be decoded.
    #[default]
    Absent,
    /// A decoded key/value mapping.
    Present(Mapping),
}

impl FrontMatter {
    /// Returns true if there is no usable front matter.
    pub fn is_absent(&self) -> bool {
        matches!(self, FrontMatter::Absent)
    }

    /// Returns the decoded mapping, if present.
    pub fn mapping(&self) -> Option<&Mapping> {
        match self {
            FrontMatter::Absent => None,
            FrontMatter::Present(mapping) => Some(mapping),
        }
    }

    /// Returns the raw value of a field.
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.mapping()?.get(key)
    }

    /// Returns true if the field holds a truthy value.
    ///
    /// See [`is_truthy`] for which values count as unset.
    pub fn is_set(&self, key: &str) -> bool {
        self.value(key).is_some_and(is_truthy)
    }

    /// Returns a field as a string.
    ///
    /// `Ok(None)` means the field is missing; `Err` means it holds another type.
    pub fn string(&self, key: &str) -> Result<Option<&str>, FieldTypeError> {
        match self.value(key) {
            None => Ok(None),
            Some(value) => match untag(value) {
                Value::String(s) => Ok(Some(s.as_str())),
                other => Err(FieldTypeError::new(key, "string", kind_name(other))),
            },
        }
    }

    /// Returns a field as a list of strings.
    pub fn string_list(&self, key: &str) -> Result<Option<Vec<&str>>, FieldTypeError> {
        let Some(value) = self.value(key) else {
            return Ok(None);
        };
        let Value::Sequence(items) = untag(value) else {
            return Err(FieldTypeError::new(
                key,
                "sequence of strings",
                kind_name(untag(value)),
            ));
        };

        items
            .iter()
            .map(|item| match untag(item) {
                Value::String(s) => Ok(s.as_str()),
                other => Err(FieldTypeError::new(key, "sequence of strings", kind_name(other))),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    /// Returns the field names in document order.
    pub fn keys(&self) -> Vec<Cow<'_, str>> {
        self.mapping()
            .map(|mapping| {
                mapping
                    .keys()
                    .map(|key| match key {
                        Value::String(s) => Cow::Borrowed(s.as_str()),
                        other => Cow::Owned(render_value(other)),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Strips YAML tags, returning the tagged value.
fn untag(value: &Value) -> &Value {
    match value {
        Value::Tagged(tagged) => untag(&tagged.value),
        other => other,
    }
}

/// Returns a human-readable name for the type of a YAML value.
fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(tagged) => kind_name(&tagged.value),
    }
}

/// Returns whether a value counts as set.
///
/// Null, `false`, zero and the empty string are unset. Sequences and
/// mappings are set even when empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Sequence(_) | Value::Mapping(_) => true,
        Value::Tagged(tagged) => is_truthy(&tagged.value),
    }
}

/// Renders a value as it would appear in a diagnostic message.
///
/// Sequences are joined with commas; mappings are rendered as YAML.
pub fn render_value(value: &Value) -> String {
    match untag(value) {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(items) => items
            .iter()
            .map(render_value)
            .collect::<Vec<_>>()
            .join(","),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| format!("{:?}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn front_matter(yaml: &str) -> FrontMatter {
        let lines: Vec<&str> = std::iter::once("---")
            .chain(yaml.lines())
            .chain(std::iter::once("---"))
            .collect();
        parse_front_matter(&lines)
    }

    #[test]
    fn split_document_with_front_matter() {
        let input = "---\nsimd: '0001'\n---\n# Title\n";
        let split = split_front_matter(input);
        assert_eq!(split.lines, vec!["---", "simd: '0001'", "---"]);
        assert_eq!(split.body, "# Title\n");
        assert_eq!(split.body_line_offset, 3);
    }

    #[test]
    fn split_document_without_front_matter() {
        let input = "# Title\n\nBody\n";
        let split = split_front_matter(input);
        assert!(split.lines.is_empty());
        assert_eq!(split.body, input);
        assert_eq!(split.body_line_offset, 0);
    }

    #[test]
    fn split_unterminated_front_matter() {
        let input = "---\nsimd: '0001'\n# Title\n";
        let split = split_front_matter(input);
        assert!(split.lines.is_empty());
        assert_eq!(split.body, input);
    }

    #[test]
    fn split_handles_crlf_and_trailing_spaces() {
        let input = "---  \r\ntitle: x\r\n---\r\nbody";
        let split = split_front_matter(input);
        assert_eq!(split.lines.len(), 3);
        assert_eq!(split.body, "body");
    }

    #[test]
    fn split_ignores_leading_byte_order_mark() {
        let input = "\u{FEFF}---\ncategory: Meta\n---\n# X\n";
        let split = split_front_matter(input);
        assert_eq!(split.lines, vec!["---", "category: Meta", "---"]);
        assert_eq!(split.body, "# X\n");
    }

    #[test]
    fn split_requires_exact_delimiter() {
        let input = "----\ntitle: x\n----\n";
        assert!(split_front_matter(input).lines.is_empty());
    }

    #[test]
    fn parse_simple_mapping() {
        let fm = front_matter("simd: '0001'\ntitle: Example");
        assert!(!fm.is_absent());
        assert_eq!(fm.string("simd"), Ok(Some("0001")));
        assert_eq!(fm.string("title"), Ok(Some("Example")));
    }

    #[test]
    fn parse_empty_is_absent() {
        assert!(parse_front_matter::<&str>(&[]).is_absent());
        assert!(parse_front_matter(&["---", "---"]).is_absent());
    }

    #[test]
    fn parse_invalid_yaml_is_absent() {
        assert!(front_matter("title: [unclosed").is_absent());
    }

    #[test]
    fn parse_scalar_is_absent() {
        assert!(front_matter("just some text").is_absent());
        assert!(matches!(
            decode_front_matter(&["---", "just some text", "---"]),
            Err(FrontMatterError::NotAMapping("string"))
        ));
    }

    #[test]
    fn dash_only_lines_inside_block_are_blanked() {
        let fm = parse_front_matter(&["---", "title: x", "-----", "status: Idea", "---"]);
        assert_eq!(fm.string("status"), Ok(Some("Idea")));
    }

    #[test]
    fn string_accessor_distinguishes_missing_and_wrong_type() {
        let fm = front_matter("authors:\n  - Alice");
        assert_eq!(fm.string("title"), Ok(None));
        let error = fm.string("authors").unwrap_err();
        assert_eq!(error.found, "sequence");
    }

    #[test]
    fn string_list_accessor() {
        let fm = front_matter("authors:\n  - Alice\n  - Bob\nempty: []\nmixed: [a, 1]");
        assert_eq!(fm.string_list("authors"), Ok(Some(vec!["Alice", "Bob"])));
        assert_eq!(fm.string_list("empty"), Ok(Some(vec![])));
        assert_eq!(fm.string_list("missing"), Ok(None));
        assert!(fm.string_list("mixed").is_err());
    }

    #[test]
    fn plain_scalar_reports_unquoted_inline_values() {
        let lines = [
            "---",
            "simd: 0001",
            "title: 'Quoted'",
            "status: Idea # lifecycle",
            "authors:",
            "  - simd: nested",
            "---",
        ];
        assert_eq!(plain_scalar(&lines, "simd"), Some("0001"));
        assert_eq!(plain_scalar(&lines, "title"), None);
        assert_eq!(plain_scalar(&lines, "status"), Some("Idea"));
        assert_eq!(plain_scalar(&lines, "authors"), None);
        assert_eq!(plain_scalar(&lines, "missing"), None);
    }

    #[test]
    fn truthiness_follows_field_presence_rules() {
        let fm = front_matter("a: ''\nb: 0\nc: false\nd: ~\ne: []\nf: x\ng: 7");
        assert!(!fm.is_set("a"));
        assert!(!fm.is_set("b"));
        assert!(!fm.is_set("c"));
        assert!(!fm.is_set("d"));
        assert!(fm.is_set("e"));
        assert!(fm.is_set("f"));
        assert!(fm.is_set("g"));
        assert!(!fm.is_set("missing"));
    }

    #[test]
    fn keys_in_document_order() {
        let fm = front_matter("title: x\nsimd: '0001'\n3: numeric");
        assert_eq!(fm.keys(), vec!["title", "simd", "3"]);
    }

    #[test]
    fn render_values() {
        let fm = front_matter("s: text\nn: 12\nb: true\nl: [a, b]\nm: {k: v}");
        assert_eq!(render_value(fm.value("s").unwrap()), "text");
        assert_eq!(render_value(fm.value("n").unwrap()), "12");
        assert_eq!(render_value(fm.value("b").unwrap()), "true");
        assert_eq!(render_value(fm.value("l").unwrap()), "a,b");
        assert_eq!(render_value(fm.value("m").unwrap()), "k: v");
    }
}
