//! Attribute span location
//!
//! Finds every `#[Name]` / `#[Name(args)]` occurrence in arbitrary text. The
//! surrounding text is never interpreted, so spans are found in comments,
//! string literals and plain code alike.
//!
//! ## Matching rules
//!
//! - The name is one or more Unicode word characters; `#[a.b]` never matches.
//! - The argument group is captured lazily across lines, up to the first `)]`.
//! - A span directly preceded by another `#` (`##[Name]`) is commented out.
//!   Scanning resumes right after its `#[`, so spans it overlaps still match.
//! - A span without its closing `]` never matches.

use once_cell::sync::Lazy;
use regex::Regex;

static SPAN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)#\[(?P<name>\w+)(?:\((?P<args>.*?)\))?\]").expect("Invalid attribute span regex")
});

/// Raw attribute occurrence, borrowed from the scanned text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSpan<'a> {
    /// Attribute name (e.g., "MetaData")
    pub name: &'a str,
    /// Unparsed content between the outer parentheses; empty when absent
    pub args: &'a str,
    /// Byte offset of the leading `#`
    pub start: usize,
    /// Byte offset just past the closing `]`
    pub end: usize,
}

/// Locate all attribute spans in `text`, in document order
pub fn locate_spans(text: &str) -> Vec<AttributeSpan<'_>> {
    let mut spans = Vec::new();
    let mut pos = 0;

    while let Some(caps) = SPAN_RE.captures_at(text, pos) {
        let Some(whole) = caps.get(0) else {
            break;
        };

        if is_commented_out(text, whole.start()) {
            log::trace!("Skipping commented-out attribute at byte {}", whole.start());
            // Only the `#[` opener is disabled; later spans in the match still count
            pos = whole.start() + 2;
            continue;
        }
        pos = whole.end();

        let Some(name) = caps.name("name") else {
            continue;
        };

        spans.push(AttributeSpan {
            name: name.as_str(),
            args: caps.name("args").map_or("", |m| m.as_str()),
            start: whole.start(),
            end: whole.end(),
        });
    }

    spans
}

/// A `#` right before the span's own `#[` turns it into `##[`, which is ignored.
fn is_commented_out(text: &str, start: usize) -> bool {
    text[..start].ends_with('#')
}
