//! toolver CLI entry point.

use std::process::ExitCode;

use toolver::cli::{report_error, run, Cli};
use toolver::probe::ToolRegistry;
use toolver::Configuration;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr so JSON on stdout stays parseable.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("toolver=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("toolver=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = match Cli::parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => {
            report_error(&e);
            return ExitCode::from(e.exit_code());
        }
    };
    init_tracing(cli.debug);

    tracing::debug!("toolver starting with args: {:?}", cli);

    if cli.no_color {
        console::set_colors_enabled(false);
    }
    let use_color = console::colors_enabled();

    let config = Configuration::from(&cli);
    let registry = ToolRegistry::builtin();

    let stdout = std::io::stdout();
    match run(&config, &registry, use_color, &mut stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::from(e.exit_code())
        }
    }
}
