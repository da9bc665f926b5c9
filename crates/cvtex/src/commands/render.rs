//! `cvtex render` command implementation.

use clap::Args;
use cvtex_build::ResumeBuilder;
use cvtex_config::{CliSettings, Config};

use super::{ResumeArgs, build_settings};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    #[command(flatten)]
    resume: ResumeArgs,

    /// Also convert the LaTeX source to DOCX.
    #[arg(long)]
    docx: bool,

    /// Keep the generated .tex file next to the PDF.
    #[arg(long)]
    keep_source: bool,
}

impl RenderArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            docx: self.docx.then_some(true),
            keep_source: self.keep_source.then_some(true),
            ..self.resume.cli_settings()
        };
        let config = Config::load(self.resume.config.as_deref(), Some(&cli_settings))?;

        output.artifact("Resume", &config.input_resolved.resume);
        output.artifact("Output", &config.output_resolved.dir);

        let builder = ResumeBuilder::new(build_settings(&config));
        let mut report = builder.build(
            &config.input_resolved.resume,
            Some(&config.input_resolved.job_analysis),
            &config.output_resolved.dir,
        );

        if let Some(failure) = report.failure.take() {
            return Err(failure.into());
        }
        let Some(pdf) = &report.pdf else {
            return Err(CliError::Validation("No PDF was produced".to_owned()));
        };

        output.success("Resume built");
        output.artifact("PDF", pdf);
        if let Some(docx) = &report.docx {
            output.artifact("DOCX", docx);
        }
        if let Some(err) = &report.docx_failure {
            output.warning(&format!("DOCX not generated: {err}"));
        }
        if let Some(source) = &report.source {
            output.artifact("LaTeX", source);
        }
        Ok(())
    }
}
