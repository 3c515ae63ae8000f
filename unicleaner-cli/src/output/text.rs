//! Plain text output formatter

use super::{DocumentStats, OutputFormatter};
use anyhow::Result;
use std::io::Write;
use unicleaner_core::{CleanResult, HighlightResult};

/// Plain text formatter
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> OutputFormatter for TextFormatter<W> {
    fn format_clean(&mut self, _source: &str, result: &CleanResult) -> Result<()> {
        writeln!(self.writer, "{}", result.cleaned_text)?;
        Ok(())
    }

    fn format_highlight(&mut self, _source: &str, result: &HighlightResult) -> Result<()> {
        writeln!(self.writer, "{}", result.to_annotated_text())?;
        Ok(())
    }

    fn format_stats(&mut self, stats: &DocumentStats) -> Result<()> {
        write!(
            self.writer,
            "{}: {} символов | {}",
            stats.source, stats.chars, stats.invisible_label
        )?;
        if stats.double_space_runs > 0 {
            write!(
                self.writer,
                " | двойных пробелов: {}",
                stats.double_space_runs
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
