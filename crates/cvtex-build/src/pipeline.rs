//! End-to-end resume build.

use std::path::{Path, PathBuf};

use cvtex_renderer::{RenderOptions, render_document};
use cvtex_resume::{DEFAULT_JOB_TITLE, ResumeDocument, base_filename, load_job_title};

use crate::artifacts::{artifact_path, remove_if_exists};
use crate::convert::DocxConverter;
use crate::error::{BuildFailure, CompileError};
use crate::latex::LatexCompiler;
use crate::tool::ToolConfig;

/// Settings for [`ResumeBuilder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSettings {
    pub compiler: ToolConfig,
    /// DOCX converter; `None` skips DOCX output.
    pub converter: Option<ToolConfig>,
    /// Keep `<base>.tex` after the build.
    pub keep_source: bool,
    pub render: RenderOptions,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            compiler: ToolConfig::pdflatex(),
            converter: None,
            keep_source: false,
            render: RenderOptions::default(),
        }
    }
}

/// Outcome of one build. Failures are data, never panics or `Err`.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// File name stem shared by every artifact, once resolved.
    pub base_name: Option<String>,
    pub pdf: Option<PathBuf>,
    pub docx: Option<PathBuf>,
    /// Retained LaTeX source.
    pub source: Option<PathBuf>,
    /// Why no PDF was produced.
    pub failure: Option<BuildFailure>,
    /// Why the requested DOCX was not produced. Does not affect the PDF.
    pub docx_failure: Option<CompileError>,
}

impl BuildReport {
    fn failed(failure: BuildFailure) -> Self {
        Self {
            failure: Some(failure),
            ..Self::default()
        }
    }

    /// Whether the PDF was produced.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failure.is_none() && self.pdf.is_some()
    }
}

/// Loads, renders and compiles resumes.
#[derive(Debug, Clone)]
pub struct ResumeBuilder {
    compiler: LatexCompiler,
    converter: Option<DocxConverter>,
    keep_source: bool,
    render: RenderOptions,
}

impl Default for ResumeBuilder {
    fn default() -> Self {
        Self::new(BuildSettings::default())
    }
}

impl ResumeBuilder {
    #[must_use]
    pub fn new(settings: BuildSettings) -> Self {
        Self {
            compiler: LatexCompiler::new(settings.compiler),
            converter: settings.converter.map(DocxConverter::new),
            keep_source: settings.keep_source,
            render: settings.render,
        }
    }

    /// Build from a resume JSON file and an optional job analysis file.
    ///
    /// The job analysis only supplies the job title for the file name; when
    /// it is absent or unusable the default title is used.
    pub fn build(&self, resume: &Path, job_analysis: Option<&Path>, output_dir: &Path) -> BuildReport {
        let (doc, job_title) = match load_inputs(resume, job_analysis) {
            Ok(inputs) => inputs,
            Err(failure) => return BuildReport::failed(failure),
        };
        self.build_document(&doc, &job_title, output_dir)
    }

    /// Build from an already loaded resume.
    pub fn build_document(&self, doc: &ResumeDocument, job_title: &str, output_dir: &Path) -> BuildReport {
        let base = base_filename(&doc.candidate_name, Some(job_title));
        tracing::info!(base = %base, "Generating resume");

        let markup = render_document(doc, &self.render);
        let mut report = BuildReport {
            base_name: Some(base.clone()),
            ..BuildReport::default()
        };

        match self.compiler.compile(&markup, output_dir, &base) {
            Ok(pdf) => report.pdf = Some(pdf),
            Err(e) => report.failure = Some(BuildFailure::Compile(e)),
        }

        let source = artifact_path(output_dir, &base, "tex");
        if report.pdf.is_some()
            && let Some(converter) = &self.converter
        {
            match converter.convert(&source) {
                Ok(docx) => report.docx = Some(docx),
                Err(e) => {
                    tracing::warn!("DOCX conversion failed; the PDF is unaffected");
                    report.docx_failure = Some(e);
                }
            }
        }

        if self.keep_source {
            report.source = source.exists().then_some(source);
        } else {
            match remove_if_exists(&source) {
                Ok(_) => tracing::debug!(path = %source.display(), "Removed LaTeX source"),
                Err(e) => {
                    tracing::warn!(path = %source.display(), error = %e, "Failed to remove LaTeX source");
                }
            }
        }

        report
    }

    /// Render the resume and write `<base>.tex` without compiling it.
    pub fn write_markup(
        &self,
        resume: &Path,
        job_analysis: Option<&Path>,
        output_dir: &Path,
    ) -> Result<PathBuf, BuildFailure> {
        let (doc, job_title) = load_inputs(resume, job_analysis)?;
        let base = base_filename(&doc.candidate_name, Some(&job_title));
        let markup = render_document(&doc, &self.render);
        self.compiler
            .write_source(&markup, output_dir, &base)
            .map_err(|e| {
                e.log("latex");
                BuildFailure::Compile(e)
            })
    }
}

fn load_inputs(resume: &Path, job_analysis: Option<&Path>) -> Result<(ResumeDocument, String), BuildFailure> {
    let doc = ResumeDocument::load(resume).map_err(|e| {
        let failure = BuildFailure::from(e);
        match &failure {
            BuildFailure::InputMissing(path) => {
                tracing::error!(path = %path.display(), "Structured resume not found");
            }
            other => tracing::error!(error = %other, "Structured resume is not usable"),
        }
        failure
    })?;
    tracing::info!(path = %resume.display(), "Structured resume loaded");

    let job_title = job_analysis.map_or_else(
        || {
            tracing::warn!("No job analysis given, using default job title");
            DEFAULT_JOB_TITLE.to_owned()
        },
        load_job_title,
    );
    tracing::info!(job_title = %job_title, "Job title resolved");
    Ok((doc, job_title))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_missing_resume_is_input_missing() {
        let temp_dir = TempDir::new().unwrap();
        let builder = ResumeBuilder::default();

        let report = builder.build(&temp_dir.path().join("missing.json"), None, temp_dir.path());

        assert!(!report.is_success());
        assert!(matches!(report.failure, Some(BuildFailure::InputMissing(_))));
        assert_eq!(report.pdf, None);
    }

    #[test]
    fn test_invalid_resume_is_invalid_input() {
        let temp_dir = TempDir::new().unwrap();
        let resume = temp_dir.path().join("structured_resume.json");
        std::fs::write(&resume, r#""not a resume""#).unwrap();

        let report = ResumeBuilder::default().build(&resume, None, temp_dir.path());

        assert!(matches!(report.failure, Some(BuildFailure::InvalidInput(_))));
    }
}
