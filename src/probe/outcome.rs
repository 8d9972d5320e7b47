//! Probe outcomes and the ordered result set.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Text stored for any probe that did not succeed.
pub const NOT_FOUND: &str = "not found";

/// Outcome of probing a single tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The command exited 0; holds its combined output, trimmed.
    Found(String),
    /// The command could not be launched or exited non-zero.
    NotFound,
}

impl ProbeOutcome {
    /// Build a `Found` outcome, stripping surrounding whitespace.
    pub fn found(output: &str) -> Self {
        ProbeOutcome::Found(output.trim().to_string())
    }

    /// Text reported for this outcome.
    pub fn as_str(&self) -> &str {
        match self {
            ProbeOutcome::Found(version) => version,
            ProbeOutcome::NotFound => NOT_FOUND,
        }
    }

    /// Whether the probe succeeded.
    pub fn is_found(&self) -> bool {
        matches!(self, ProbeOutcome::Found(_))
    }
}

impl std::fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ProbeOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Tool name to outcome, iterated in registry order.
///
/// Serializes as a JSON object whose keys keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    entries: Vec<(String, ProbeOutcome)>,
}

impl ResultSet {
    /// Create an empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome for a tool.
    ///
    /// Re-recording a tool replaces its outcome in place.
    pub fn insert(&mut self, name: impl Into<String>, outcome: ProbeOutcome) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = outcome,
            None => self.entries.push((name, outcome)),
        }
    }

    /// Look up the outcome recorded for a tool.
    pub fn get(&self, name: &str) -> Option<&ProbeOutcome> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, outcome)| outcome)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProbeOutcome)> {
        self.entries.iter().map(|(n, o)| (n.as_str(), o))
    }

    /// Tool names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no tools were probed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Length of the longest tool name, used to align plain output.
    pub fn name_width(&self) -> usize {
        self.names().map(str::len).max().unwrap_or(0)
    }
}

impl Serialize for ResultSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, outcome) in &self.entries {
            map.serialize_entry(name, outcome)?;
        }
        map.end()
    }
}
