//! Arguments and plumbing shared by the document commands

use crate::config::CliConfig;
use crate::input::{resolve_inputs, InputSource};
use crate::output::{create_formatter, FormatterOptions, OutputFormat, OutputFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

/// Input, output and runtime options common to `clean`, `highlight` and `stats`
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Input files or patterns (supports glob, `-` reads stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Process input files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Everything a document command needs once arguments are resolved
pub struct Session {
    /// Loaded configuration
    pub config: CliConfig,
    /// Resolved inputs, in order
    pub sources: Vec<InputSource>,
    /// Formatter writing to the selected sink
    pub formatter: Box<dyn OutputFormatter>,
    /// Progress bar for multi-file runs
    pub progress: ProgressReporter,
}

impl CommonArgs {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }

    /// Pick the output format: flag, then config, then text
    pub fn resolve_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        Ok(config.default_format()?.unwrap_or(OutputFormat::Text))
    }

    /// Open the output sink and wrap it in a formatter
    pub fn open_formatter(
        &self,
        format: OutputFormat,
        config: &CliConfig,
    ) -> Result<Box<dyn OutputFormatter>> {
        let options = FormatterOptions {
            pretty_json: config.output.pretty_json,
            html_classes: config.highlight.html_classes(),
        };

        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(create_formatter(format, BufWriter::new(file), &options))
            }
            None => Ok(create_formatter(format, io::stdout(), &options)),
        }
    }

    /// Load config, resolve inputs and open the output
    pub fn start_session(&self) -> Result<Session> {
        self.init_logging();
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let sources = resolve_inputs(&self.input)?;
        let format = self.resolve_format(&config)?;
        log::info!("Processing {} input(s) as {}", sources.len(), format.name());

        let formatter = self.open_formatter(format, &config)?;

        let mut progress = ProgressReporter::new(self.quiet || sources.len() < 2);
        progress.init_files(sources.len() as u64);

        Ok(Session {
            config,
            sources,
            formatter,
            progress,
        })
    }

    /// Whether to fan out over inputs
    pub fn parallel_enabled(&self, config: &CliConfig) -> bool {
        self.parallel || config.performance.parallel
    }
}

impl Session {
    /// Read and process every input, keeping input order in the result
    pub fn process<T, F>(&self, parallel: bool, f: F) -> Result<Vec<(String, T)>>
    where
        T: Send,
        F: Fn(&str) -> T + Sync + Send,
    {
        let progress = &self.progress;
        let sources = &self.sources;
        let run_one = |source: &InputSource| -> Result<(String, T)> {
            let name = source.to_string();
            let text = source.read_text()?;
            log::debug!("Read {} ({} bytes)", name, text.len());
            let output = f(&text);
            progress.file_completed(&name);
            Ok((name, output))
        };

        let results = if parallel && sources.len() > 1 {
            let threads = match self.config.performance.worker_threads {
                0 => num_cpus::get(),
                n => n,
            };
            log::info!("Using {} worker threads", threads);
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to build worker thread pool")?;
            pool.install(|| sources.par_iter().map(&run_one).collect::<Result<Vec<_>>>())?
        } else {
            sources
                .iter()
                .map(run_one)
                .collect::<Result<Vec<_>>>()?
        };

        self.progress.finish();
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(input: Vec<String>) -> CommonArgs {
        CommonArgs {
            input,
            output: None,
            format: None,
            config: None,
            parallel: false,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_format_flag_wins_over_config() {
        let mut common = args(vec!["-".to_string()]);
        common.format = Some(OutputFormat::Markdown);
        let config = CliConfig::from_toml("[output]\ndefault_format = \"json\"\n").unwrap();
        assert_eq!(
            common.resolve_format(&config).unwrap(),
            OutputFormat::Markdown
        );
    }

    #[test]
    fn test_format_falls_back_to_config_then_text() {
        let common = args(vec!["-".to_string()]);
        let config = CliConfig::from_toml("[output]\ndefault_format = \"html\"\n").unwrap();
        assert_eq!(common.resolve_format(&config).unwrap(), OutputFormat::Html);
        assert_eq!(
            common.resolve_format(&CliConfig::default()).unwrap(),
            OutputFormat::Text
        );
    }

    #[test]
    fn test_parallel_enabled_from_config() {
        let common = args(vec![]);
        let config = CliConfig::from_toml("[performance]\nparallel = true\n").unwrap();
        assert!(common.parallel_enabled(&config));
        assert!(!common.parallel_enabled(&CliConfig::default()));
    }

    #[test]
    fn test_session_processes_files_in_order() {
        let temp_dir = TempDir::new().unwrap();
        for (name, body) in [("a.txt", "a\u{200B}"), ("b.txt", "bb"), ("c.txt", "\u{2028}")] {
            fs::write(temp_dir.path().join(name), body).unwrap();
        }
        let mut common = args(vec![temp_dir
            .path()
            .join("*.txt")
            .to_string_lossy()
            .to_string()]);
        common.output = Some(temp_dir.path().join("out.json"));

        let session = common.start_session().unwrap();
        for parallel in [false, true] {
            let results = session
                .process(parallel, |text| unicleaner_core::count_invisible(text))
                .unwrap();
            let counts: Vec<_> = results.iter().map(|(_, count)| *count).collect();
            assert_eq!(counts, vec![1, 0, 1]);
            assert!(results[0].0.ends_with("a.txt"));
        }
    }
}
