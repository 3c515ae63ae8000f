//! Character classification
//!
//! Every count and every span produced by this crate goes through the
//! predicates in this module, so the highlighter and the cleaner can never
//! disagree about what an invisible character is.

/// Classification of a scanned position
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CharacterClass {
    /// Line/paragraph separator or a `Cf` (format) character
    Invisible,
    /// Part of a run of two or more spaces
    DoubleSpace,
    /// Anything else
    Plain,
}

/// U+2028 LINE SEPARATOR
pub const LINE_SEPARATOR: char = '\u{2028}';

/// U+2029 PARAGRAPH SEPARATOR
pub const PARAGRAPH_SEPARATOR: char = '\u{2029}';

const NEXT_LINE: char = '\u{0085}';

// generated using ucd-generate: ucd-generate general-category --include Format --chars ucd-16.0.0
const FORMAT: &[(char, char)] = &[
    ('\u{ad}', '\u{ad}'),
    ('\u{600}', '\u{605}'),
    ('\u{61c}', '\u{61c}'),
    ('\u{6dd}', '\u{6dd}'),
    ('\u{70f}', '\u{70f}'),
    ('\u{890}', '\u{891}'),
    ('\u{8e2}', '\u{8e2}'),
    ('\u{180e}', '\u{180e}'),
    ('\u{200b}', '\u{200f}'),
    ('\u{202a}', '\u{202e}'),
    ('\u{2060}', '\u{2064}'),
    ('\u{2066}', '\u{206f}'),
    ('\u{feff}', '\u{feff}'),
    ('\u{fff9}', '\u{fffb}'),
    ('\u{110bd}', '\u{110bd}'),
    ('\u{110cd}', '\u{110cd}'),
    ('\u{13430}', '\u{1343f}'),
    ('\u{1bca0}', '\u{1bca3}'),
    ('\u{1d173}', '\u{1d17a}'),
    ('\u{e0001}', '\u{e0001}'),
    ('\u{e0020}', '\u{e007f}'),
];

/// Check whether `ch` belongs to the Unicode `Cf` (format) general category
pub fn is_format(ch: char) -> bool {
    FORMAT
        .binary_search_by(|&(start, end)| {
            if ch < start {
                std::cmp::Ordering::Greater
            } else if ch > end {
                std::cmp::Ordering::Less
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

/// Check whether `ch` is an invisible character.
///
/// Invisible means U+2028, U+2029 or any format character. Ordinary
/// whitespace is *not* invisible: it is handled by the double-space pass
/// when highlighting and by [`is_collapsible`] when cleaning.
pub fn is_invisible(ch: char) -> bool {
    ch == LINE_SEPARATOR || ch == PARAGRAPH_SEPARATOR || is_format(ch)
}

/// Check whether `ch` is whitespace that cleaning collapses.
///
/// This is Unicode `White_Space` minus U+0085 NEXT LINE, which is kept as
/// ordinary text.
pub fn is_space(ch: char) -> bool {
    ch.is_whitespace() && ch != NEXT_LINE
}

/// Check whether `ch` takes part in a collapsed run when cleaning
pub fn is_collapsible(ch: char) -> bool {
    is_invisible(ch) || is_space(ch)
}

/// Classify a single character outside of any run context.
///
/// A lone space is `Plain`; whether it ends up in a `DoubleSpace` span
/// depends on its neighbours, see [`crate::scan`].
pub fn classify(ch: char) -> CharacterClass {
    if is_invisible(ch) {
        CharacterClass::Invisible
    } else {
        CharacterClass::Plain
    }
}

/// Count invisible characters (not runs) in `text`
pub fn count_invisible(text: &str) -> usize {
    text.chars().filter(|&ch| is_invisible(ch)).count()
}
