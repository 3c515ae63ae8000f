//! Stats command implementation

use super::shared::CommonArgs;
use crate::output::DocumentStats;
use anyhow::Result;
use clap::Args;
use unicleaner_core::{clean, count_label, highlight};

/// Arguments for the stats command
#[derive(Debug, Args)]
pub struct StatsArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Gather the counters for one document
pub fn collect_stats(source: &str, text: &str) -> DocumentStats {
    let highlighted = highlight(text);
    let cleaned = clean(text);

    DocumentStats {
        source: source.to_string(),
        chars: cleaned.original_chars,
        invisible_count: highlighted.invisible_count,
        invisible_label: count_label(
            i64::try_from(highlighted.invisible_count).unwrap_or(i64::MAX),
        ),
        double_space_runs: highlighted.double_space_runs(),
        cleaned_chars: cleaned.cleaned_chars,
    }
}

impl StatsArgs {
    /// Execute the stats command
    pub fn execute(&self) -> Result<()> {
        let mut session = self.common.start_session()?;
        let parallel = self.common.parallel_enabled(&session.config);

        let results = session.process(parallel, |text| collect_stats("", text))?;

        for (source, mut stats) in results {
            stats.source = source;
            session.formatter.format_stats(&stats)?;
        }
        session.formatter.finish()?;

        Ok(())
    }
}
