use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Primary output format written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Summary,
    Csv,
}

/// Rendering for the detailed breakdown, active only with `--detailed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DetailedFormat {
    Console,
    Wiki,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "s3tests-report")]
#[command(about = "Classify test results against known-failure catalogues and report regressions")]
#[command(version)]
pub struct CliArgs {
    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Summary)]
    pub format: OutputFormat,

    /// Attribute catalogue enabling the detailed per-category breakdown
    #[arg(long, short = 'd', value_name = "ATTR_FILE")]
    pub detailed: Option<PathBuf>,

    /// Format of the detailed breakdown
    #[arg(long = "detailed-format", value_enum, default_value_t = DetailedFormat::Console)]
    pub detailed_format: DetailedFormat,

    /// Known-failure catalogue; may be given multiple times, later
    /// catalogues override earlier ones on conflicting entries
    #[arg(long = "known-failures", short = 'k', value_name = "FILE", action = clap::ArgAction::Append)]
    pub known_failures: Vec<PathBuf>,

    /// Test result file (JUnit XML)
    pub test_results: PathBuf,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = CliArgs::parse_from(["s3tests-report", "results.xml"]);
        assert_eq!(args.format, OutputFormat::Summary);
        assert_eq!(args.detailed_format, DetailedFormat::Console);
        assert!(args.detailed.is_none());
        assert!(args.known_failures.is_empty());
        assert_eq!(args.test_results, PathBuf::from("results.xml"));
    }

    #[test]
    fn test_repeated_known_failures() {
        let args = CliArgs::parse_from([
            "s3tests-report",
            "-k",
            "base.yaml",
            "-k",
            "override.yaml",
            "-f",
            "csv",
            "results.xml",
        ]);
        assert_eq!(args.format, OutputFormat::Csv);
        assert_eq!(args.known_failures.len(), 2);
    }

    #[test]
    fn test_detailed_wiki() {
        let args = CliArgs::parse_from([
            "s3tests-report",
            "--detailed",
            "attrs.yaml",
            "--detailed-format",
            "wiki",
            "results.xml",
        ]);
        assert_eq!(args.detailed, Some(PathBuf::from("attrs.yaml")));
        assert_eq!(args.detailed_format, DetailedFormat::Wiki);
    }

    #[test]
    fn test_missing_results_rejected() {
        assert!(CliArgs::try_parse_from(["s3tests-report"]).is_err());
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(CliArgs::try_parse_from(["s3tests-report", "-f", "xml", "results.xml"]).is_err());
    }
}
