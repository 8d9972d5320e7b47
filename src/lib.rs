//! toolver - Report installed versions of common development tools.
//!
//! toolver runs a fixed set of version commands (`ruby -v`, `gcc --version`,
//! `uname -srm`, ...) and reports what each printed, or `not found` when the
//! tool is missing or the command fails.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and the probe pipeline
//! - [`config`] - Run configuration built from arguments
//! - [`error`] - Error types, result alias and exit codes
//! - [`probe`] - Tool registry, selection and probe execution
//! - [`report`] - Plain-text and JSON reporting
//!
//! # Example
//!
//! ```
//! use toolver::probe::{select, ProbeRunner, ToolRegistry, ToolSpec};
//!
//! let registry = ToolRegistry::from_tools(vec![ToolSpec::new("echo", "echo 1.2.3")]);
//! let selection = select(&registry, None).unwrap();
//! let results = ProbeRunner::new().run_all(selection);
//! assert_eq!(results.get("echo").unwrap().as_str(), "1.2.3");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod probe;
pub mod report;

pub use config::Configuration;
pub use error::{Result, ToolverError};
