//! Run configuration.
//!
//! [`Configuration`] is built once from parsed arguments and handed by
//! reference to the selection, probe and report stages.

use std::path::PathBuf;

use crate::cli::Cli;

/// Settings for a single run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    /// Print JSON instead of the plain table.
    pub json_output: bool,
    /// Tools to probe, in the order given. `None` probes every tool.
    pub tool_filter: Option<Vec<String>>,
    /// File to write the JSON report to.
    pub output_file: Option<PathBuf>,
}

impl Configuration {
    /// Whether results are rendered as JSON.
    ///
    /// An output file implies JSON even without `--json`.
    pub fn writes_json(&self) -> bool {
        self.json_output || self.output_file.is_some()
    }
}

impl From<&Cli> for Configuration {
    fn from(cli: &Cli) -> Self {
        Self {
            json_output: cli.json,
            tool_filter: cli.tools.as_deref().map(normalize_tool_names),
            output_file: cli.output.clone(),
        }
    }
}

/// Trim names, drop empty ones and collapse duplicates, keeping first-seen order.
fn normalize_tool_names(names: &[String]) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::new();
    for name in names.iter().map(|n| n.trim()).filter(|n| !n.is_empty()) {
        if !normalized.iter().any(|n| n == name) {
            normalized.push(name.to_string());
        }
    }
    normalized
}
