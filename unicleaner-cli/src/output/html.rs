//! HTML output formatter

use super::{DocumentStats, OutputFormatter};
use anyhow::Result;
use std::io::Write;
use unicleaner_core::{escape_html, CleanResult, HighlightResult, HtmlClasses};

/// HTML formatter - one `<section>` per document
pub struct HtmlFormatter<W: Write> {
    writer: W,
    classes: HtmlClasses,
}

impl<W: Write> HtmlFormatter<W> {
    /// Create a new HTML formatter
    pub fn new(writer: W, classes: HtmlClasses) -> Self {
        Self { writer, classes }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> OutputFormatter for HtmlFormatter<W> {
    fn format_clean(&mut self, source: &str, result: &CleanResult) -> Result<()> {
        writeln!(
            self.writer,
            "<section data-source=\"{}\"><pre>{}</pre></section>",
            escape_html(source),
            escape_html(&result.cleaned_text)
        )?;
        Ok(())
    }

    fn format_highlight(&mut self, source: &str, result: &HighlightResult) -> Result<()> {
        writeln!(
            self.writer,
            "<section data-source=\"{}\" data-invisible-count=\"{}\">{}</section>",
            escape_html(source),
            result.invisible_count,
            result.to_html(&self.classes)
        )?;
        Ok(())
    }

    fn format_stats(&mut self, stats: &DocumentStats) -> Result<()> {
        writeln!(
            self.writer,
            "<p data-source=\"{}\">{} символов | {}</p>",
            escape_html(&stats.source),
            stats.chars,
            escape_html(&stats.invisible_label)
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
