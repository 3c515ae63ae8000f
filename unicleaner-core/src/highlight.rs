//! Highlight builder
//!
//! Turns the spans found by [`crate::scan`] into a render-safe segment
//! sequence. Literal text is HTML-escaped and split on `\n` into explicit
//! line breaks; span text is kept verbatim since it never contains `&`, `<`,
//! `>` or `\n`.

use crate::classify::CharacterClass;
use crate::scan::{scan, HighlightSpan};
use std::fmt::Write as _;

/// One piece of highlighted output
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Segment {
    /// Literal, already HTML-escaped text without line breaks
    Text {
        /// Escaped text
        text: String,
    },
    /// A classified span
    Span(HighlightSpan),
    /// An explicit line break (`\n` in the input)
    LineBreak,
}

/// Result of [`highlight`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HighlightResult {
    /// Ordered segments covering the whole input
    pub segments: Vec<Segment>,
    /// Number of invisible characters (not spans)
    pub invisible_count: usize,
}

/// CSS classes used by [`HighlightResult::to_html`]
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HtmlClasses {
    /// Class attribute for invisible spans
    pub invisible: String,
    /// Class attribute for double-space spans
    pub double_space: String,
}

impl Default for HtmlClasses {
    fn default() -> Self {
        Self {
            invisible: "outline outline-1 outline-orange-400 bg-orange-100/50 rounded-sm \
                        box-decoration-clone [outline-offset:-1px]"
                .to_string(),
            double_space: "outline outline-1 outline-yellow-400 bg-yellow-100/50 rounded-sm \
                           px-0.5 mx-px box-decoration-clone"
                .to_string(),
        }
    }
}

impl HtmlClasses {
    fn for_class(&self, class: CharacterClass) -> &str {
        match class {
            CharacterClass::Invisible => &self.invisible,
            CharacterClass::DoubleSpace => &self.double_space,
            CharacterClass::Plain => "",
        }
    }
}

impl HighlightResult {
    /// Iterate over the classified spans
    pub fn spans(&self) -> impl Iterator<Item = &HighlightSpan> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Span(span) => Some(span),
            _ => None,
        })
    }

    /// Number of double-space runs
    pub fn double_space_runs(&self) -> usize {
        self.spans()
            .filter(|span| span.class == CharacterClass::DoubleSpace)
            .count()
    }

    /// Whether anything was highlighted at all
    pub fn has_findings(&self) -> bool {
        self.spans().next().is_some()
    }

    /// Render as HTML markup for an overlay
    pub fn to_html(&self, classes: &HtmlClasses) -> String {
        let mut html = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text { text } => html.push_str(text),
                Segment::Span(span) => {
                    let _ = write!(
                        html,
                        "<span class=\"{}\">{}</span>",
                        classes.for_class(span.class),
                        span.text
                    );
                }
                Segment::LineBreak => html.push_str("<br />"),
            }
        }
        html
    }

    /// Render for a terminal, see [`annotate`]
    pub fn to_annotated_text(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text { text } => out.push_str(&unescape_html(text)),
                Segment::Span(span) if span.is_invisible() => {
                    for ch in span.text.chars() {
                        let _ = write!(out, "[U+{:04X}]", ch as u32);
                    }
                }
                Segment::Span(span) => out.extend(std::iter::repeat('·').take(span.char_len)),
                Segment::LineBreak => out.push('\n'),
            }
        }
        out
    }
}

/// Escape the three HTML-significant characters
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Reverse [`escape_html`]; `&amp;` goes last so escaped entities survive
fn unescape_html(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Push literal text, splitting it on line breaks
fn push_literal(segments: &mut Vec<Segment>, literal: &str) {
    for (i, line) in literal.split('\n').enumerate() {
        if i > 0 {
            segments.push(Segment::LineBreak);
        }
        if !line.is_empty() {
            segments.push(Segment::Text {
                text: escape_html(line),
            });
        }
    }
}

/// Highlight invisible characters and double spaces in `text`
pub fn highlight(text: &str) -> HighlightResult {
    let mut segments = Vec::new();
    let mut invisible_count = 0;
    let mut cursor = 0;

    for span in scan(text) {
        push_literal(&mut segments, &text[cursor..span.start]);
        cursor = span.end;
        if span.is_invisible() {
            invisible_count += span.char_len;
        }
        segments.push(Segment::Span(span));
    }
    push_literal(&mut segments, &text[cursor..]);

    HighlightResult {
        segments,
        invisible_count,
    }
}

/// Render `text` for a terminal: invisible characters become `[U+XXXX]`
/// markers and the spaces of a double-space run become `·`.
pub fn annotate(text: &str) -> String {
    highlight(text).to_annotated_text()
}
