//! `cvtex words` command implementation.

use std::path::PathBuf;

use clap::Args;
use cvtex_config::{CliSettings, Config};
use cvtex_resume::{WordCheck, check_word_count};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the words command.
#[derive(Args)]
pub(crate) struct WordsArgs {
    /// Plain text file to count, e.g. a cover letter.
    file: PathBuf,

    /// Target word count (overrides config).
    #[arg(short, long)]
    target: Option<usize>,

    /// Exit with an error when the count is outside the acceptable range.
    #[arg(long)]
    strict: bool,

    /// Path to configuration file (default: auto-discover cvtex.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl WordsArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let cli_settings = CliSettings {
            target_words: self.target,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let text = std::fs::read_to_string(&self.file)?;
        let check = check_word_count(&text, config.writing.target_words);
        tracing::info!(
            path = %self.file.display(),
            words = check.word_count,
            target = check.target,
            "Word count checked"
        );

        report(&output, &check);
        if self.strict && !check.is_within_target() {
            return Err(CliError::Validation(format!(
                "{} words is outside {}-{}",
                check.word_count, check.min_acceptable, check.max_acceptable
            )));
        }
        Ok(())
    }
}

fn report(output: &Output, check: &WordCheck) {
    if check.is_within_target() {
        output.success(&check.message());
    } else {
        output.warning(&check.message());
    }
}
