//! Probe execution.
//!
//! Each probe command is split with shell-word rules and executed directly,
//! one at a time, with stdout and stderr sharing a single pipe so the captured
//! text keeps the order the child wrote it in. There is no timeout.

use std::io::{self, Read};
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use super::outcome::{ProbeOutcome, ResultSet};
use super::registry::ToolSpec;

/// Combined result of running a probe command.
#[derive(Debug)]
struct CombinedOutput {
    status: ExitStatus,
    output: String,
    duration: Duration,
}

/// Runs probe commands and collects their outcomes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProbeRunner;

impl ProbeRunner {
    /// Create a new runner.
    pub fn new() -> Self {
        Self
    }

    /// Probe a single tool.
    ///
    /// Launch failures and non-zero exits both yield
    /// [`ProbeOutcome::NotFound`].
    pub fn probe(&self, tool: &ToolSpec) -> ProbeOutcome {
        match execute_combined(&tool.command) {
            Ok(result) if result.status.success() => {
                tracing::debug!(
                    "{}: `{}` succeeded in {:?}",
                    tool.name,
                    tool.command,
                    result.duration
                );
                ProbeOutcome::found(&result.output)
            }
            Ok(result) => {
                tracing::debug!(
                    "{}: `{}` exited with {:?}",
                    tool.name,
                    tool.command,
                    result.status.code()
                );
                ProbeOutcome::NotFound
            }
            Err(e) => {
                tracing::debug!("{}: `{}` could not run: {}", tool.name, tool.command, e);
                ProbeOutcome::NotFound
            }
        }
    }

    /// Probe every tool in order, returning their outcomes.
    pub fn run_all<'a, I>(&self, tools: I) -> ResultSet
    where
        I: IntoIterator<Item = &'a ToolSpec>,
    {
        let mut results = ResultSet::new();
        for tool in tools {
            results.insert(tool.name.clone(), self.probe(tool));
        }
        results
    }
}

/// Run a command with stdout and stderr merged into one stream.
fn execute_combined(command: &str) -> io::Result<CombinedOutput> {
    let start = Instant::now();

    let argv = shell_words::split(command).map_err(io::Error::other)?;
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty command"))?;

    let (mut reader, writer) = io::pipe()?;

    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(writer.try_clone()?)
        .stderr(writer);

    let mut child = cmd.spawn()?;
    // The builder still owns write ends of the pipe; release them so the
    // read below sees EOF once the child exits.
    drop(cmd);

    let mut bytes = Vec::new();
    let read = reader.read_to_end(&mut bytes);
    let status = child.wait()?;
    read?;

    Ok(CombinedOutput {
        status,
        output: String::from_utf8_lossy(&bytes).into_owned(),
        duration: start.elapsed(),
    })
}
