//! Single-pass span scanner
//!
//! Walks the text once, left to right, and emits non-overlapping spans:
//!
//! - every maximal run of invisible characters becomes an `Invisible` span;
//! - every maximal run of two or more U+0020 SPACE characters becomes a
//!   `DoubleSpace` span.
//!
//! Invisible runs win: a space is never part of an invisible run, so the two
//! span kinds cannot overlap. A run of spaces that directly follows an
//! invisible run starts its own span at the first space.

use crate::classify::{is_invisible, CharacterClass};

/// Minimum number of spaces for a `DoubleSpace` span
pub const MIN_DOUBLE_SPACE_RUN: usize = 2;

/// A classified, contiguous range of the scanned text
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HighlightSpan {
    /// `Invisible` or `DoubleSpace`
    pub class: CharacterClass,
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
    /// Character offset of the first character
    pub char_start: usize,
    /// Number of characters in the span
    pub char_len: usize,
    /// The covered text, verbatim
    pub text: String,
}

impl HighlightSpan {
    /// Whether this span holds invisible characters
    pub fn is_invisible(&self) -> bool {
        self.class == CharacterClass::Invisible
    }

    /// Byte length of the span
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Spans are never empty; provided for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Run currently being accumulated by the scanner
#[derive(Debug)]
struct Run {
    class: CharacterClass,
    start: usize,
    end: usize,
    char_start: usize,
    char_len: usize,
}

impl Run {
    fn begin(class: CharacterClass, byte_pos: usize, char_pos: usize, ch: char) -> Self {
        Self {
            class,
            start: byte_pos,
            end: byte_pos + ch.len_utf8(),
            char_start: char_pos,
            char_len: 1,
        }
    }

    fn extend(&mut self, ch: char) {
        self.end += ch.len_utf8();
        self.char_len += 1;
    }

    fn into_span(self, text: &str) -> Option<HighlightSpan> {
        let keep = match self.class {
            CharacterClass::Invisible => true,
            CharacterClass::DoubleSpace => self.char_len >= MIN_DOUBLE_SPACE_RUN,
            CharacterClass::Plain => false,
        };

        keep.then(|| HighlightSpan {
            class: self.class,
            start: self.start,
            end: self.end,
            char_start: self.char_start,
            char_len: self.char_len,
            text: text[self.start..self.end].to_string(),
        })
    }
}

/// Class a character would contribute to a run, if any
fn run_class(ch: char) -> Option<CharacterClass> {
    if is_invisible(ch) {
        Some(CharacterClass::Invisible)
    } else if ch == ' ' {
        Some(CharacterClass::DoubleSpace)
    } else {
        None
    }
}

/// Scan `text` and return its spans ordered by position
pub fn scan(text: &str) -> Vec<HighlightSpan> {
    let mut spans = Vec::new();
    let mut current: Option<Run> = None;

    for (char_pos, (byte_pos, ch)) in text.char_indices().enumerate() {
        let class = run_class(ch);

        match (current.as_mut(), class) {
            (Some(run), Some(class)) if run.class == class => run.extend(ch),
            _ => {
                if let Some(span) = current.take().and_then(|run| run.into_span(text)) {
                    spans.push(span);
                }
                current = class.map(|class| Run::begin(class, byte_pos, char_pos, ch));
            }
        }
    }

    if let Some(span) = current.and_then(|run| run.into_span(text)) {
        spans.push(span);
    }

    spans
}
