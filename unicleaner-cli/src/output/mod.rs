//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use unicleaner_core::{CleanResult, HighlightResult, HtmlClasses};

pub mod html;
pub mod json;
pub mod markdown;
pub mod text;

pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text: cleaned text, annotated text or one stats line per input
    Text,
    /// JSON array with one record per input
    Json,
    /// Markdown report
    Markdown,
    /// HTML markup with highlight spans
    Html,
}

impl OutputFormat {
    /// All formats, in listing order
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Text,
        OutputFormat::Json,
        OutputFormat::Markdown,
        OutputFormat::Html,
    ];

    /// Lowercase name as accepted by `--format`
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Html => "html",
        }
    }

    /// One-line description for `list formats`
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "plain text, one document after another",
            OutputFormat::Json => "JSON array with one record per document",
            OutputFormat::Markdown => "markdown report with a section per document",
            OutputFormat::Html => "HTML markup with highlighted spans",
        }
    }
}

/// Per-document counters reported by the `stats` command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStats {
    /// Input name
    pub source: String,
    /// Characters in the input
    pub chars: usize,
    /// Invisible characters in the input
    pub invisible_count: usize,
    /// Localized label for `invisible_count`
    pub invisible_label: String,
    /// Runs of two or more spaces
    pub double_space_runs: usize,
    /// Characters left after cleaning
    pub cleaned_chars: usize,
}

/// Trait for output formatters
pub trait OutputFormatter: Send {
    /// Output the cleaned version of one document
    fn format_clean(&mut self, source: &str, result: &CleanResult) -> Result<()>;

    /// Output the highlight of one document
    fn format_highlight(&mut self, source: &str, result: &HighlightResult) -> Result<()>;

    /// Output the counters of one document
    fn format_stats(&mut self, stats: &DocumentStats) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Settings shared by the formatters
#[derive(Debug, Clone)]
pub struct FormatterOptions {
    /// Pretty print JSON output
    pub pretty_json: bool,
    /// CSS classes for HTML spans
    pub html_classes: HtmlClasses,
}

impl Default for FormatterOptions {
    fn default() -> Self {
        Self {
            pretty_json: true,
            html_classes: HtmlClasses::default(),
        }
    }
}

/// Build the formatter for `format`
pub fn create_formatter<W: Write + Send + 'static>(
    format: OutputFormat,
    writer: W,
    options: &FormatterOptions,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, options.pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        OutputFormat::Html => Box::new(HtmlFormatter::new(writer, options.html_classes.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn test_names_parse_back() {
        for format in OutputFormat::ALL {
            assert_eq!(OutputFormat::from_str(format.name(), false), Ok(format));
            assert!(!format.description().is_empty());
        }
    }

    #[test]
    fn test_all_covers_value_variants() {
        assert_eq!(OutputFormat::value_variants().len(), OutputFormat::ALL.len());
    }
}
