//! Error types for toolver operations.
//!
//! This module defines [`ToolverError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Argument and selection errors are fatal and carry their own exit code
//! - Probe failures are never errors; they are recorded as
//!   [`ProbeOutcome::NotFound`](crate::probe::ProbeOutcome::NotFound)
//! - Output-write failures name the path that could not be written

use std::path::PathBuf;
use thiserror::Error;

/// Exit code for a successful run (help and version included).
pub const EXIT_SUCCESS: u8 = 0;

/// Exit code for an unrecognized or malformed command-line option.
pub const EXIT_USAGE: u8 = 1;

/// Exit code for a `--tools` filter naming tools outside the registry.
pub const EXIT_UNKNOWN_TOOLS: u8 = 2;

/// Core error type for toolver operations.
#[derive(Debug, Error)]
pub enum ToolverError {
    /// Command-line arguments could not be parsed.
    #[error(transparent)]
    Usage(#[from] clap::Error),

    /// One or more requested tools are not in the registry.
    #[error(
        "Unknown tools requested: {}\nAvailable: {}",
        .unknown.join(", "),
        .available.join(", ")
    )]
    UnknownTools {
        unknown: Vec<String>,
        available: Vec<String>,
    },

    /// The JSON report could not be written to the requested file.
    #[error("Failed to write {}: {}", .path.display(), .source)]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The result set could not be serialized.
    #[error("Failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ToolverError {
    /// Process exit code this error maps to.
    pub fn exit_code(&self) -> u8 {
        match self {
            ToolverError::Usage(err) if !err.use_stderr() => EXIT_SUCCESS,
            ToolverError::UnknownTools { .. } => EXIT_UNKNOWN_TOOLS,
            ToolverError::Usage(_)
            | ToolverError::WriteOutput { .. }
            | ToolverError::Serialize(_)
            | ToolverError::Io(_) => EXIT_USAGE,
        }
    }
}

/// Result type alias for toolver operations.
pub type Result<T> = std::result::Result<T, ToolverError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn unknown_tools() -> ToolverError {
        ToolverError::UnknownTools {
            unknown: vec!["made_up".into(), "other".into()],
            available: vec!["ruby".into(), "gcc".into()],
        }
    }

    #[test]
    fn unknown_tools_lists_requested_names() {
        let msg = unknown_tools().to_string();
        assert!(msg.starts_with("Unknown tools requested: made_up, other"));
    }

    #[test]
    fn unknown_tools_lists_available_on_second_line() {
        let msg = unknown_tools().to_string();
        let second = msg.lines().nth(1).unwrap();
        assert_eq!(second, "Available: ruby, gcc");
    }

    #[test]
    fn unknown_tools_exits_with_two() {
        assert_eq!(unknown_tools().exit_code(), 2);
    }

    #[test]
    fn write_output_displays_path_and_cause() {
        let err = ToolverError::WriteOutput {
            path: PathBuf::from("/nope/out.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/nope/out.json"));
        assert!(msg.contains("no such directory"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn help_request_exits_with_zero() {
        let err = ToolverError::Usage(clap::Error::new(clap::error::ErrorKind::DisplayHelp));
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn invalid_option_exits_with_one() {
        let err = ToolverError::Usage(clap::Error::new(clap::error::ErrorKind::UnknownArgument));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: ToolverError = io_err.into();
        assert!(matches!(err, ToolverError::Io(_)));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(unknown_tools())
        }
        assert!(returns_error().is_err());
    }
}
