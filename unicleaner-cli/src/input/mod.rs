//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use anyhow::Result;
use std::fmt;
use std::path::PathBuf;

/// Pattern that selects standard input
pub const STDIN_MARKER: &str = "-";

/// Where a document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl InputSource {
    /// Read the whole document
    pub fn read_text(&self) -> Result<String> {
        match self {
            InputSource::Stdin => FileReader::read_stdin(),
            InputSource::File(path) => FileReader::read_text(path),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Resolve command-line inputs; `-` stands for standard input
pub fn resolve_inputs(patterns: &[String]) -> Result<Vec<InputSource>> {
    let (stdin, file_patterns): (Vec<&String>, Vec<&String>) =
        patterns.iter().partition(|p| p.as_str() == STDIN_MARKER);

    let mut sources = Vec::new();
    if !stdin.is_empty() {
        sources.push(InputSource::Stdin);
    }
    if !file_patterns.is_empty() {
        let owned: Vec<String> = file_patterns.into_iter().cloned().collect();
        sources.extend(resolve_patterns(&owned)?.into_iter().map(InputSource::File));
    }

    Ok(sources)
}
