//! `unicleaner` binary entry point

use clap::Parser;
use std::process::ExitCode;
use unicleaner_cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_clean_command() {
        let cli = Cli::try_parse_from(["unicleaner", "clean", "-i", "-", "-f", "json", "-r"])
            .unwrap();
        let debug_str = format!("{:?}", cli);
        assert!(debug_str.contains("Clean"));
        assert!(debug_str.contains("Json"));
        assert!(debug_str.contains("report: true"));
    }

    #[test]
    fn test_input_is_required() {
        assert!(Cli::try_parse_from(["unicleaner", "stats"]).is_err());
    }
}
