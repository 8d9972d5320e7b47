//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::Result;

/// Detect installed development tools and report their versions.
#[derive(Debug, Parser)]
#[command(name = "toolver")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Comma-separated list of tools to check
    #[arg(long, value_name = "x,y,z", value_delimiter = ',')]
    pub tools: Option<Vec<String>>,

    /// Write output to FILE (JSON)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Parse arguments, returning help, version and invalid-option requests
    /// as [`ToolverError::Usage`](crate::error::ToolverError::Usage).
    pub fn parse_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Ok(Self::try_parse_from(args)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ToolverError;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Cli> {
        Cli::parse_args(std::iter::once("toolver").chain(args.iter().copied()))
    }

    #[test]
    fn no_args() {
        let cli = parse(&[]).unwrap();
        assert!(!cli.json);
        assert!(cli.tools.is_none());
        assert!(cli.output.is_none());
    }

    #[test]
    fn all_flags() {
        let cli = parse(&[
            "--json", "--tools", "ruby,gcc", "--output", "v.json", "--debug",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.tools, Some(vec!["ruby".to_string(), "gcc".to_string()]));
        assert_eq!(cli.output, Some(PathBuf::from("v.json")));
        assert!(cli.debug);
    }

    #[test]
    fn short_output_flag() {
        let cli = parse(&["-o", "v.json"]).unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("v.json")));
    }

    #[test]
    fn help_is_reported_as_usage() {
        let err = parse(&["-h"]).unwrap_err();
        match err {
            ToolverError::Usage(e) => assert_eq!(e.kind(), ErrorKind::DisplayHelp),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let err = parse(&["--bogus"]).unwrap_err();
        assert!(matches!(err, ToolverError::Usage(_)));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn tools_requires_a_value() {
        let err = parse(&["--tools"]).unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
