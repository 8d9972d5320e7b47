//! Tool registry.
//!
//! Maps each known tool to the command that reports its version. The
//! built-in table is fixed; custom registries exist so the pipeline can be
//! driven with deterministic commands.

/// Built-in tools in report order.
const BUILTIN_TOOLS: &[(&str, &str)] = &[
    ("ruby", "ruby -v"),
    ("crystal", "crystal -v"),
    ("shards", "shards --version"),
    ("llvm-config", "llvm-config --version"),
    ("clang", "clang --version"),
    ("gcc", "gcc --version"),
    ("sw_vers", "sw_vers -productVersion"),
    ("uname", "uname -srm"),
];

/// A tool and the command used to query its version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSpec {
    /// Tool name as accepted by `--tools` (e.g. "llvm-config").
    pub name: String,
    /// Command line run to probe the tool (e.g. "llvm-config --version").
    pub command: String,
}

impl ToolSpec {
    /// Create a tool entry.
    pub fn new(name: &str, command: &str) -> Self {
        Self {
            name: name.to_string(),
            command: command.to_string(),
        }
    }
}

/// Ordered, immutable table of probeable tools.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: Vec<ToolSpec>,
}

impl ToolRegistry {
    /// Create a registry with the built-in tools.
    pub fn builtin() -> Self {
        Self {
            tools: BUILTIN_TOOLS
                .iter()
                .map(|(name, command)| ToolSpec::new(name, command))
                .collect(),
        }
    }

    /// Create a registry from explicit entries, keeping their order.
    ///
    /// A later entry with an already-seen name is ignored.
    pub fn from_tools(tools: impl IntoIterator<Item = ToolSpec>) -> Self {
        let mut unique: Vec<ToolSpec> = Vec::new();
        for tool in tools {
            if !unique.iter().any(|t| t.name == tool.name) {
                unique.push(tool);
            }
        }
        Self { tools: unique }
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<&ToolSpec> {
        self.tools.iter().find(|t| t.name == name)
    }

    /// Check whether a tool is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Tool names in registry order.
    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name.as_str()).collect()
    }

    /// Iterate tools in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &ToolSpec> {
        self.tools.iter()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry has no tools.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
