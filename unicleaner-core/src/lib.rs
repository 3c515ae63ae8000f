//! Invisible-character detection and cleanup for pasted text
//!
//! The crate exposes two pure functions over strings:
//!
//! - [`highlight`] finds invisible characters (U+2028, U+2029 and every
//!   `Cf` format character) and runs of two or more spaces, and returns a
//!   render-safe segment sequence plus the number of invisible characters;
//! - [`clean`] collapses invisible and whitespace runs into single spaces,
//!   trims the ends and reports how many invisible characters the input had.
//!
//! Both count with the same predicate ([`classify::is_invisible`]), so the
//! live count and the post-clean report always agree.
//!
//! # Example
//!
//! ```rust
//! use unicleaner_core::{clean, highlight, pluralize};
//!
//! let text = "a\u{200B}b  c";
//!
//! let highlighted = highlight(text);
//! assert_eq!(highlighted.invisible_count, 1);
//!
//! let cleaned = clean(text);
//! assert_eq!(cleaned.cleaned_text, "ab c");
//! assert_eq!(cleaned.removed_invisible_count, 1);
//!
//! assert_eq!(pluralize(1), "невидимый символ");
//! ```

#![warn(missing_docs)]

pub mod classify;
pub mod clean;
pub mod highlight;
pub mod plural;
pub mod scan;

pub use classify::{
    classify, count_invisible, is_collapsible, is_invisible, is_space, CharacterClass,
};
pub use clean::{clean, clean_batch, CleanResult};
pub use highlight::{annotate, escape_html, highlight, HighlightResult, HtmlClasses, Segment};
pub use plural::{
    count_label, plural_form, pluralize, removal_notice, removal_verb, PluralForm,
};
pub use scan::{scan, HighlightSpan};
