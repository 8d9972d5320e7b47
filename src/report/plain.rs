//! Plain-text output formatter.
//!
//! Prints a header, one `name : version` row per tool with names padded to a
//! common width, and a closing tip about the JSON flags.

use console::Style;
use std::io::Write;

use super::ReportFormatter;
use crate::probe::ResultSet;

/// First line of plain output.
pub const HEADER: &str = "Detected tool versions:";

/// Last line of plain output.
pub const TIP: &str = "Tip: run with --json to get machine-readable output, or --output file.json to write JSON to disk.";

/// Formats results as an aligned table for terminals.
pub struct PlainFormatter {
    /// Whether to style the header and tip (ANSI escape codes).
    pub use_color: bool,
}

impl PlainFormatter {
    /// Create a new plain formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn header_style(&self) -> Style {
        Style::new().bold().force_styling(self.use_color)
    }

    fn tip_style(&self) -> Style {
        Style::new().dim().force_styling(self.use_color)
    }
}

impl ReportFormatter for PlainFormatter {
    fn format<W: Write>(&self, results: &ResultSet, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "{}", self.header_style().apply_to(HEADER))?;
        writeln!(writer)?;

        let width = results.name_width();
        for (name, outcome) in results.iter() {
            writeln!(writer, "{:<width$} : {}", name, outcome)?;
        }

        writeln!(writer)?;
        writeln!(writer, "{}", self.tip_style().apply_to(TIP))?;

        Ok(())
    }
}
