//! Cleaning transform
//!
//! Collapses every maximal run of invisible and whitespace characters into a
//! single space and trims the ends. A run made only of format characters
//! (zero-width spaces, joiners, marks, BOMs) sits inside a word and is
//! removed outright, so `"a\u{200B}b"` cleans to `"ab"`.

use crate::classify::{count_invisible, is_collapsible, is_space};
use crate::plural::removal_notice;

/// Result of [`clean`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CleanResult {
    /// The cleaned text
    pub cleaned_text: String,
    /// Invisible characters found in the original, untrimmed input
    pub removed_invisible_count: usize,
    /// Character count of the original input
    pub original_chars: usize,
    /// Character count of the cleaned text
    pub cleaned_chars: usize,
}

impl CleanResult {
    /// Whether cleaning changed the text
    pub fn is_modified(&self, original: &str) -> bool {
        self.cleaned_text != original
    }

    /// User-facing summary of what was removed
    pub fn notice(&self) -> String {
        removal_notice(i64::try_from(self.removed_invisible_count).unwrap_or(i64::MAX))
    }
}

/// Pending collapsible run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pending {
    None,
    /// Only format characters so far
    Format,
    /// At least one whitespace or separator character
    Space,
}

/// Clean `text`
pub fn clean(text: &str) -> CleanResult {
    let mut cleaned = String::with_capacity(text.len());
    let mut pending = Pending::None;
    let mut original_chars = 0;
    let mut cleaned_chars = 0;

    for ch in text.chars() {
        original_chars += 1;

        if is_collapsible(ch) {
            if is_space(ch) {
                pending = Pending::Space;
            } else if pending == Pending::None {
                pending = Pending::Format;
            }
            continue;
        }

        // Leading runs are dropped, which trims the start
        if pending == Pending::Space && !cleaned.is_empty() {
            cleaned.push(' ');
            cleaned_chars += 1;
        }
        pending = Pending::None;
        cleaned.push(ch);
        cleaned_chars += 1;
    }
    // A trailing run is never flushed, which trims the end

    CleanResult {
        cleaned_text: cleaned,
        removed_invisible_count: count_invisible(text),
        original_chars,
        cleaned_chars,
    }
}

/// Clean several independent documents
#[cfg(feature = "parallel")]
pub fn clean_batch<S: AsRef<str> + Sync>(texts: &[S]) -> Vec<CleanResult> {
    use rayon::prelude::*;

    texts.par_iter().map(|text| clean(text.as_ref())).collect()
}

/// Clean several independent documents
#[cfg(not(feature = "parallel"))]
pub fn clean_batch<S: AsRef<str>>(texts: &[S]) -> Vec<CleanResult> {
    texts.iter().map(|text| clean(text.as_ref())).collect()
}
