//! Heading extraction from the Markdown body.

use super::model::HeadingToken;
use log::trace;
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// Byte offsets at which each line of `text` starts.
fn line_starts(text: &str) -> Vec<usize> {
    std::iter::once(0)
        .chain(text.match_indices('\n').map(|(idx, _)| idx + 1))
        .collect()
}

/// Converts a byte offset into a 1-based line number.
fn line_at(starts: &[usize], offset: usize) -> usize {
    starts.partition_point(|&start| start <= offset)
}

fn level_number(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Extracts every heading from a Markdown body.
///
/// `line_offset` is the number of lines preceding the body in the file, so
/// that reported lines refer to the whole document.
pub fn extract_headings(body: &str, line_offset: usize) -> Vec<HeadingToken> {
    let starts = line_starts(body);
    let mut headings = Vec::new();
    let mut current: Option<HeadingToken> = None;

    for (event, range) in Parser::new_ext(body, Options::empty()).into_offset_iter() {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                let line = line_at(&starts, range.start) + line_offset;
                current = Some(HeadingToken::new(level_number(level), String::new(), line));
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some(heading) = current.as_mut() {
                    heading.text.push_str(&text);
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(heading) = current.take() {
                    trace!(
                        "Heading h{} at line {}: {}",
                        heading.level, heading.line, heading.text
                    );
                    headings.push(heading);
                }
            }
            _ => {}
        }
    }

    headings
}
