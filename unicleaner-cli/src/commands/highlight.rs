//! Highlight command implementation

use super::shared::CommonArgs;
use anyhow::Result;
use clap::Args;
use unicleaner_core::highlight;

/// Arguments for the highlight command
#[derive(Debug, Args)]
pub struct HighlightArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

impl HighlightArgs {
    /// Execute the highlight command
    pub fn execute(&self) -> Result<()> {
        let mut session = self.common.start_session()?;
        let parallel = self.common.parallel_enabled(&session.config);

        let results = session.process(parallel, highlight)?;

        for (source, result) in &results {
            log::info!("{}: {} invisible characters", source, result.invisible_count);
            session.formatter.format_highlight(source, result)?;
        }
        session.formatter.finish()?;

        Ok(())
    }
}
