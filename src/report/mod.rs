//! Result reporting.
//!
//! Renders a [`ResultSet`] as aligned plain text or pretty-printed JSON, to a
//! writer or to the file named by `--output`.

pub mod json;
pub mod plain;

use std::io::Write;
use std::path::Path;

use crate::config::Configuration;
use crate::error::{Result, ToolverError};
use crate::probe::ResultSet;

pub use json::JsonFormatter;
pub use plain::PlainFormatter;

/// Trait for formatting probe results.
pub trait ReportFormatter {
    /// Format results to the given writer.
    fn format<W: Write>(&self, results: &ResultSet, writer: &mut W) -> std::io::Result<()>;
}

/// Emit results as the configuration asks.
///
/// JSON goes to the output file when one is configured, with a confirmation
/// line on `out`; otherwise JSON or plain text is written to `out`.
pub fn emit<W: Write>(
    results: &ResultSet,
    config: &Configuration,
    use_color: bool,
    out: &mut W,
) -> Result<()> {
    if !config.writes_json() {
        PlainFormatter::new(use_color).format(results, out)?;
        return Ok(());
    }

    match &config.output_file {
        Some(path) => {
            write_json_file(results, path)?;
            writeln!(out, "Wrote JSON output to {}", path.display())?;
        }
        None => {
            JsonFormatter::new().format(results, out)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

/// Write results as JSON to `path`, replacing any existing file.
pub fn write_json_file(results: &ResultSet, path: &Path) -> Result<()> {
    let json = JsonFormatter::new().render(results)?;
    std::fs::write(path, json).map_err(|source| ToolverError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Wrote {} results to {}", results.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::ProbeOutcome;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn sample() -> ResultSet {
        let mut results = ResultSet::new();
        results.insert("ruby", ProbeOutcome::found("ruby 3.3.0"));
        results.insert("gcc", ProbeOutcome::NotFound);
        results
    }

    fn config(json_output: bool, output_file: Option<PathBuf>) -> Configuration {
        Configuration {
            json_output,
            tool_filter: None,
            output_file,
        }
    }

    #[test]
    fn plain_mode_prints_table() {
        let mut out = Vec::new();
        emit(&sample(), &config(false, None), false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Detected tool versions:"));
        assert!(text.contains("ruby : ruby 3.3.0"));
    }

    #[test]
    fn json_mode_prints_json() {
        let mut out = Vec::new();
        emit(&sample(), &config(true, None), false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("}\n"));
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["gcc"], "not found");
    }

    #[test]
    fn output_file_writes_json_and_confirms() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.json");
        let mut out = Vec::new();
        emit(&sample(), &config(false, Some(path.clone())), false, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, format!("Wrote JSON output to {}\n", path.display()));

        let written = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed["ruby"], "ruby 3.3.0");
    }

    #[test]
    fn output_file_is_overwritten() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.json");
        std::fs::write(&path, "stale contents that are longer than the report").unwrap();

        write_json_file(&sample(), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(!written.contains("stale"));
        assert!(serde_json::from_str::<serde_json::Value>(&written).is_ok());
    }

    #[test]
    fn unwritable_output_path_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing-dir").join("out.json");
        let err = write_json_file(&sample(), &path).unwrap_err();
        assert!(matches!(err, ToolverError::WriteOutput { .. }));
        assert!(err.to_string().contains("missing-dir"));
    }
}
