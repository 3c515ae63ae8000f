//! Markdown output formatter

use super::{DocumentStats, OutputFormatter};
use anyhow::Result;
use std::io::Write;
use unicleaner_core::{count_label, CleanResult, HighlightResult};

/// Markdown formatter - outputs a section per document
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    document_count: usize,
    stats_header_written: bool,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            document_count: 0,
            stats_header_written: false,
        }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_block(&mut self, source: &str, body: &str, footer: &str) -> Result<()> {
        self.document_count += 1;
        writeln!(self.writer, "## {}", source)?;
        writeln!(self.writer)?;
        let fence = fence_for(body);
        writeln!(self.writer, "{}text", fence)?;
        writeln!(self.writer, "{}", body)?;
        writeln!(self.writer, "{}", fence)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "*{}*", footer)?;
        writeln!(self.writer)?;
        Ok(())
    }
}

/// Code fence longer than any backtick run in `body`
fn fence_for(body: &str) -> String {
    let longest = body
        .split(|ch: char| ch != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    "`".repeat(longest.max(2) + 1)
}

impl<W: Write + Send> OutputFormatter for MarkdownFormatter<W> {
    fn format_clean(&mut self, source: &str, result: &CleanResult) -> Result<()> {
        self.write_block(source, &result.cleaned_text, &result.notice())
    }

    fn format_highlight(&mut self, source: &str, result: &HighlightResult) -> Result<()> {
        let label = count_label(i64::try_from(result.invisible_count).unwrap_or(i64::MAX));
        self.write_block(source, &result.to_annotated_text(), &label)
    }

    fn format_stats(&mut self, stats: &DocumentStats) -> Result<()> {
        if !self.stats_header_written {
            writeln!(
                self.writer,
                "| Source | Characters | Invisible | Double spaces | Cleaned |"
            )?;
            writeln!(self.writer, "|---|---:|---|---:|---:|")?;
            self.stats_header_written = true;
        }
        self.document_count += 1;
        writeln!(
            self.writer,
            "| {} | {} | {} | {} | {} |",
            stats.source,
            stats.chars,
            stats.invisible_label,
            stats.double_space_runs,
            stats.cleaned_chars
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.stats_header_written {
            writeln!(self.writer)?;
        }
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total documents: {}*", self.document_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicleaner_core::{clean, highlight};

    fn output(formatter: MarkdownFormatter<Vec<u8>>) -> String {
        String::from_utf8(formatter.into_inner()).unwrap()
    }

    #[test]
    fn test_clean_section() {
        let mut formatter = MarkdownFormatter::new(Vec::new());
        formatter
            .format_clean("doc.txt", &clean("one\u{200B}two"))
            .unwrap();
        formatter.finish().unwrap();

        let out = output(formatter);
        assert!(out.starts_with("## doc.txt\n\n```text\nonetwo\n```\n"));
        assert!(out.contains("*Удален 1 невидимый символ.*"));
        assert!(out.ends_with("---\n*Total documents: 1*\n"));
    }

    #[test]
    fn test_highlight_section() {
        let text = "a\u{200B}\u{200B}b";
        let mut formatter = MarkdownFormatter::new(Vec::new());
        formatter
            .format_highlight("doc.txt", &highlight(text))
            .unwrap();

        let out = output(formatter);
        assert!(out.contains("a[U+200B][U+200B]b"));
        assert!(out.contains("*2 невидимых символа*"));
    }

    #[test]
    fn test_fence_outgrows_backticks_in_body() {
        assert_eq!(fence_for("plain"), "```");
        assert_eq!(fence_for("`inline`"), "```");
        assert_eq!(fence_for("```rust\nfn main() {}\n```"), "````");
        assert_eq!(fence_for("a ````` b"), "``````");
    }

    #[test]
    fn test_clean_section_with_code_fence_in_text() {
        let mut formatter = MarkdownFormatter::new(Vec::new());
        formatter
            .format_clean("doc.md", &clean("```\u{200B}sh\nls\n```"))
            .unwrap();

        let out = output(formatter);
        assert!(out.starts_with("## doc.md\n\n````text\n```sh ls ```\n````\n"));
    }

    #[test]
    fn test_stats_table() {
        let stats = DocumentStats {
            source: "a.txt".to_string(),
            chars: 5,
            invisible_count: 1,
            invisible_label: "1 невидимый символ".to_string(),
            double_space_runs: 0,
            cleaned_chars: 4,
        };
        let mut formatter = MarkdownFormatter::new(Vec::new());
        formatter.format_stats(&stats).unwrap();
        formatter.format_stats(&stats).unwrap();
        formatter.finish().unwrap();

        let out = output(formatter);
        assert_eq!(out.matches("| Source |").count(), 1);
        assert_eq!(out.matches("| a.txt | 5 | 1 невидимый символ | 0 | 4 |").count(), 2);
        assert!(out.contains("*Total documents: 2*"));
    }
}
