//! The probe pipeline: select, probe, report.

use std::io::Write;

use crate::config::Configuration;
use crate::error::Result;
use crate::probe::{select, ProbeRunner, ResultSet, ToolRegistry};
use crate::report;

/// Probe the configured tools and emit the report to `out`.
///
/// Returns the results that were reported. A selection error stops the run
/// before any probe executes or anything is written.
pub fn run<W: Write>(
    config: &Configuration,
    registry: &ToolRegistry,
    use_color: bool,
    out: &mut W,
) -> Result<ResultSet> {
    let selection = select(registry, config.tool_filter.as_deref())?;
    tracing::debug!("Probing {} of {} tools", selection.len(), registry.len());

    let results = ProbeRunner::new().run_all(selection);
    report::emit(&results, config, use_color, out)?;

    Ok(results)
}
