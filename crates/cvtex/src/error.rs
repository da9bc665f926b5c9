//! CLI error types.

use cvtex_build::BuildFailure;
use cvtex_config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Build(#[from] BuildFailure),

    #[error("{0}")]
    Validation(String),
}
