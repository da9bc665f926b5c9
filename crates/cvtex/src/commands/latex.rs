//! `cvtex latex` command implementation.

use clap::Args;
use cvtex_build::ResumeBuilder;
use cvtex_config::Config;

use super::{ResumeArgs, build_settings};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the latex command.
#[derive(Args)]
pub(crate) struct LatexArgs {
    #[command(flatten)]
    resume: ResumeArgs,
}

impl LatexArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.resume.config.as_deref(), Some(&self.resume.cli_settings()))?;

        let builder = ResumeBuilder::new(build_settings(&config));
        let source = builder.write_markup(
            &config.input_resolved.resume,
            Some(&config.input_resolved.job_analysis),
            &config.output_resolved.dir,
        )?;

        output.artifact("LaTeX", &source);
        Ok(())
    }
}
