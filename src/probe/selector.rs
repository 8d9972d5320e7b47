//! Tool selection.
//!
//! Narrows the registry to the tools named by `--tools`. The selection always
//! follows registry order, not the order names were given in.

use crate::error::{Result, ToolverError};

use super::registry::{ToolRegistry, ToolSpec};

/// Select the tools to probe.
///
/// With no filter every registered tool is selected. With a filter, any name
/// missing from the registry fails the whole selection with
/// [`ToolverError::UnknownTools`].
pub fn select<'a>(
    registry: &'a ToolRegistry,
    filter: Option<&[String]>,
) -> Result<Vec<&'a ToolSpec>> {
    let Some(requested) = filter else {
        return Ok(registry.iter().collect());
    };

    let mut unknown: Vec<String> = Vec::new();
    for name in requested {
        if !registry.contains(name) && !unknown.contains(name) {
            unknown.push(name.clone());
        }
    }

    if !unknown.is_empty() {
        tracing::debug!("Rejecting unknown tools: {:?}", unknown);
        return Err(ToolverError::UnknownTools {
            unknown,
            available: registry.names().into_iter().map(String::from).collect(),
        });
    }

    Ok(registry
        .iter()
        .filter(|tool| requested.iter().any(|name| *name == tool.name))
        .collect())
}
