//! Command-line interface for toolver.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`run`] - The select → probe → report pipeline

pub mod args;
pub mod run;

pub use args::Cli;
pub use run::run;

use clap::CommandFactory;

use crate::error::ToolverError;

/// Print an error the way the binary reports it.
///
/// Help and version requests go to stdout. Invalid options print the parse
/// error followed by the full usage text on stderr.
pub fn report_error(err: &ToolverError) {
    match err {
        ToolverError::Usage(e) if !e.use_stderr() => {
            let _ = e.print();
        }
        ToolverError::Usage(e) => {
            eprintln!("{}", e.render());
            eprintln!("{}", Cli::command().render_help());
        }
        ToolverError::UnknownTools { .. } => eprintln!("{}", err),
        _ => eprintln!("Error: {}", err),
    }
}
