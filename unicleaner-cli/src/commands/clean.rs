//! Clean command implementation

use super::shared::CommonArgs;
use anyhow::Result;
use clap::Args;
use unicleaner_core::clean;

/// Arguments for the clean command
#[derive(Debug, Args)]
pub struct CleanArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Print what was removed from each input to stderr
    #[arg(short, long)]
    pub report: bool,
}

impl CleanArgs {
    /// Execute the clean command
    pub fn execute(&self) -> Result<()> {
        let mut session = self.common.start_session()?;
        let parallel = self.common.parallel_enabled(&session.config);

        let results = session.process(parallel, clean)?;

        for (source, result) in &results {
            log::info!(
                "{}: {} invisible characters, {} -> {} chars",
                source,
                result.removed_invisible_count,
                result.original_chars,
                result.cleaned_chars
            );
            if self.report && !self.common.quiet {
                eprintln!("{}: {}", source, result.notice());
            }
            session.formatter.format_clean(source, result)?;
        }
        session.formatter.finish()?;

        Ok(())
    }
}
