//! JSON output formatter

use super::{DocumentStats, OutputFormatter};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use unicleaner_core::{CleanResult, HighlightResult, Segment};

/// JSON formatter - outputs one record per document as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    records: Vec<serde_json::Value>,
}

/// Record for a cleaned document
#[derive(Debug, Serialize, Deserialize)]
pub struct CleanRecord {
    /// Input name
    pub source: String,
    /// Cleaned text
    pub cleaned_text: String,
    /// Invisible characters found in the input
    pub removed_invisible_count: usize,
    /// Characters before cleaning
    pub original_chars: usize,
    /// Characters after cleaning
    pub cleaned_chars: usize,
    /// Localized summary
    pub notice: String,
}

/// Record for a highlighted document
#[derive(Debug, Serialize, Deserialize)]
pub struct HighlightRecord {
    /// Input name
    pub source: String,
    /// Invisible characters found
    pub invisible_count: usize,
    /// Render-safe segments
    pub segments: Vec<Segment>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            records: Vec::new(),
        }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> OutputFormatter for JsonFormatter<W> {
    fn format_clean(&mut self, source: &str, result: &CleanResult) -> Result<()> {
        self.records.push(serde_json::to_value(CleanRecord {
            source: source.to_string(),
            cleaned_text: result.cleaned_text.clone(),
            removed_invisible_count: result.removed_invisible_count,
            original_chars: result.original_chars,
            cleaned_chars: result.cleaned_chars,
            notice: result.notice(),
        })?);
        Ok(())
    }

    fn format_highlight(&mut self, source: &str, result: &HighlightResult) -> Result<()> {
        self.records.push(serde_json::to_value(HighlightRecord {
            source: source.to_string(),
            invisible_count: result.invisible_count,
            segments: result.segments.clone(),
        })?);
        Ok(())
    }

    fn format_stats(&mut self, stats: &DocumentStats) -> Result<()> {
        self.records.push(serde_json::to_value(stats)?);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.records)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use unicleaner_core::{clean, highlight};

    fn parse(formatter: JsonFormatter<Vec<u8>>) -> Value {
        serde_json::from_slice(&formatter.into_inner()).unwrap()
    }

    #[test]
    fn test_empty_output_is_empty_array() {
        let mut formatter = JsonFormatter::new(Vec::new(), true);
        formatter.finish().unwrap();
        assert_eq!(parse(formatter), Value::Array(vec![]));
    }

    #[test]
    fn test_clean_record() {
        let mut formatter = JsonFormatter::new(Vec::new(), false);
        formatter
            .format_clean("in.txt", &clean("a\u{200B}b  c"))
            .unwrap();
        formatter.finish().unwrap();

        let value = parse(formatter);
        let record = &value[0];
        assert_eq!(record["source"], "in.txt");
        assert_eq!(record["cleaned_text"], "ab c");
        assert_eq!(record["removed_invisible_count"], 1);
        assert_eq!(record["original_chars"], 6);
        assert_eq!(record["cleaned_chars"], 4);
        assert_eq!(record["notice"], "Удален 1 невидимый символ.");
    }

    #[test]
    fn test_highlight_record_segments() {
        let text = "a\u{2028}b\nc";
        let mut formatter = JsonFormatter::new(Vec::new(), true);
        formatter
            .format_highlight("in.txt", &highlight(text))
            .unwrap();
        formatter.finish().unwrap();

        let value = parse(formatter);
        let segments = value[0]["segments"].as_array().unwrap();
        assert_eq!(value[0]["invisible_count"], 1);
        assert_eq!(segments[0]["kind"], "text");
        assert_eq!(segments[1]["kind"], "span");
        assert_eq!(segments[1]["class"], "invisible");
        assert_eq!(segments[1]["char_len"], 1);
        assert_eq!(segments[3]["kind"], "line_break");
    }

    #[test]
    fn test_stats_record() {
        let stats = DocumentStats {
            source: "<stdin>".to_string(),
            chars: 4,
            invisible_count: 0,
            invisible_label: "0 невидимых символов".to_string(),
            double_space_runs: 1,
            cleaned_chars: 3,
        };
        let mut formatter = JsonFormatter::new(Vec::new(), true);
        formatter.format_stats(&stats).unwrap();
        formatter.finish().unwrap();

        let value = parse(formatter);
        assert_eq!(value[0]["source"], "<stdin>");
        assert_eq!(value[0]["double_space_runs"], 1);
    }
}
