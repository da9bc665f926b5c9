//! Build error types.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use cvtex_resume::LoadError;

/// Failure of an external tool: the LaTeX compiler or the DOCX converter.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    /// Executable not found on `PATH`.
    #[error("{program} not found; is it installed and on PATH?")]
    NotFound { program: String },

    /// Non-zero exit, with the tool's diagnostic output.
    #[error("{program} failed ({}):\n{diagnostics}", describe_exit(.code.as_ref()))]
    Failed {
        program: String,
        code: Option<i32>,
        diagnostics: String,
    },

    /// Did not finish within the configured timeout.
    #[error("{program} timed out after {}s", .timeout.as_secs_f64())]
    TimedOut { program: String, timeout: Duration },

    /// Exited successfully without producing the expected file.
    #[error("Expected output was not created: {}", .0.display())]
    MissingOutput(PathBuf),

    /// Could not be started.
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

fn describe_exit(code: Option<&i32>) -> String {
    code.map_or_else(
        || "terminated by signal".to_owned(),
        |code| format!("exit code {code}"),
    )
}

impl CompileError {
    /// Log this failure with a message specific to its kind.
    pub(crate) fn log(&self, stage: &str) {
        match self {
            Self::NotFound { program } => {
                tracing::error!(stage, program = %program, "Executable not found");
            }
            Self::Failed {
                program,
                code,
                diagnostics,
            } => {
                tracing::error!(stage, program = %program, code = ?code, "Tool reported errors:\n{diagnostics}");
            }
            Self::TimedOut { program, timeout } => {
                tracing::error!(stage, program = %program, timeout = ?timeout, "Tool timed out");
            }
            Self::MissingOutput(path) => {
                tracing::error!(stage, path = %path.display(), "Tool exited successfully but produced no output file");
            }
            Self::Spawn { program, source } => {
                tracing::error!(stage, program = %program, error = %source, "Failed to start tool");
            }
            Self::Io(e) => {
                tracing::error!(stage, error = %e, "I/O error");
            }
        }
    }
}

/// Reason a resume build produced no PDF.
#[derive(Debug, thiserror::Error)]
pub enum BuildFailure {
    /// Structured resume file does not exist.
    #[error("Structured resume not found: {}", .0.display())]
    InputMissing(PathBuf),

    /// Structured resume could not be read or parsed.
    #[error("{0}")]
    InvalidInput(LoadError),

    #[error("{0}")]
    Compile(#[from] CompileError),
}

impl From<LoadError> for BuildFailure {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::NotFound(path) => Self::InputMissing(path),
            other => Self::InvalidInput(other),
        }
    }
}
