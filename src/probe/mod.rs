//! Tool probing.
//!
//! - [`registry`] - The fixed table of tools and their version commands
//! - [`selector`] - Narrowing the registry to the requested tools
//! - [`runner`] - Executing probe commands
//! - [`outcome`] - Per-tool outcomes and the ordered [`ResultSet`]

pub mod outcome;
pub mod registry;
pub mod runner;
pub mod selector;

pub use outcome::{ProbeOutcome, ResultSet, NOT_FOUND};
pub use registry::{ToolRegistry, ToolSpec};
pub use runner::ProbeRunner;
pub use selector::select;
