//! External tool invocation.

use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;
use std::time::Duration;

use crate::artifacts::remove_if_exists;
use crate::error::CompileError;
use crate::process::{ProcessOutcome, run_with_timeout};

/// Default wall-clock limit for one tool run.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Lines of tool output kept when no explicit error lines are found.
const DIAGNOSTIC_TAIL_LINES: usize = 20;

/// Program, leading arguments and timeout for an external tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    pub program: String,
    /// Arguments placed before the per-run operands.
    pub args: Vec<String>,
    pub timeout: Duration,
}

impl ToolConfig {
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `pdflatex -interaction=nonstopmode`.
    #[must_use]
    pub fn pdflatex() -> Self {
        Self::new("pdflatex").with_args(["-interaction=nonstopmode"])
    }

    /// `pandoc` with no extra arguments.
    #[must_use]
    pub fn pandoc() -> Self {
        Self::new("pandoc")
    }

    /// Run the tool with `operands` and require `expected` to exist afterwards.
    ///
    /// A stale `expected` file is removed first, so success always refers to
    /// a file written by this run.
    pub(crate) fn run(&self, operands: &[&OsStr], expected: &Path) -> Result<(), CompileError> {
        remove_if_exists(expected)?;

        let mut command = Command::new(&self.program);
        command.args(&self.args).args(operands);
        tracing::debug!(command = ?command, timeout = ?self.timeout, "Running external tool");

        match run_with_timeout(&mut command, self.timeout) {
            ProcessOutcome::Exited { status, .. } if status.success() => {
                if expected.exists() {
                    Ok(())
                } else {
                    Err(CompileError::MissingOutput(expected.to_path_buf()))
                }
            }
            ProcessOutcome::Exited {
                status,
                stdout,
                stderr,
            } => {
                tracing::debug!(program = %self.program, "Tool stdout:\n{stdout}");
                tracing::debug!(program = %self.program, "Tool stderr:\n{stderr}");
                Err(CompileError::Failed {
                    program: self.program.clone(),
                    code: status.code(),
                    diagnostics: summarize_diagnostics(&stdout, &stderr),
                })
            }
            ProcessOutcome::TimedOut => Err(CompileError::TimedOut {
                program: self.program.clone(),
                timeout: self.timeout,
            }),
            ProcessOutcome::NotFound => Err(CompileError::NotFound {
                program: self.program.clone(),
            }),
            ProcessOutcome::SpawnFailed(source) => Err(CompileError::Spawn {
                program: self.program.clone(),
                source,
            }),
        }
    }
}

/// Pick the useful part of a failed run's output.
///
/// TeX marks errors with lines starting with `!`; those and the line after
/// each (the `l.<n>` location) are kept. Otherwise the tail of stderr, or of
/// stdout when stderr is empty, is used.
fn summarize_diagnostics(stdout: &str, stderr: &str) -> String {
    let lines: Vec<&str> = stdout.lines().collect();
    let mut errors = Vec::new();
    for (index, line) in lines.iter().enumerate() {
        if line.starts_with('!') {
            errors.push(*line);
            if let Some(next) = lines.get(index + 1)
                && next.starts_with("l.")
            {
                errors.push(*next);
            }
        }
    }
    if !errors.is_empty() {
        return errors.join("\n");
    }

    let source = if stderr.trim().is_empty() { stdout } else { stderr };
    let tail: Vec<&str> = source.trim_end().lines().collect();
    tail[tail.len().saturating_sub(DIAGNOSTIC_TAIL_LINES)..].join("\n")
}
