//! JSON output formatter.
//!
//! Formats results as a pretty-printed object of tool name to version text,
//! keys in probe order.

use super::ReportFormatter;
use crate::probe::ResultSet;
use std::io::Write;

/// Formats results as JSON.
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }

    /// Render results to a JSON string.
    pub fn render(&self, results: &ResultSet) -> serde_json::Result<String> {
        serde_json::to_string_pretty(results)
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, results: &ResultSet, writer: &mut W) -> std::io::Result<()> {
        serde_json::to_writer_pretty(writer, results).map_err(std::io::Error::other)?;

        Ok(())
    }
}
