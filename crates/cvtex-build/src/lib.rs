//! Build pipeline for cvtex resumes.
//!
//! Loads a structured resume, renders it to LaTeX, compiles the PDF with an
//! external compiler (`pdflatex` by default) and optionally converts the
//! source to DOCX with `pandoc`. External tools run under a wall-clock
//! timeout, and every failure is reported as data in a [`BuildReport`].
//!
//! Builds writing to the same output directory and base name must not run
//! concurrently; nothing here locks the output files.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use cvtex_build::{BuildSettings, ResumeBuilder};
//!
//! let builder = ResumeBuilder::new(BuildSettings::default());
//! let report = builder.build(
//!     Path::new("output/structured_resume.json"),
//!     Some(Path::new("output/job_analysis.json")),
//!     Path::new("output"),
//! );
//! if let Some(pdf) = &report.pdf {
//!     println!("PDF at {}", pdf.display());
//! }
//! ```

mod artifacts;
mod convert;
mod error;
mod latex;
mod pipeline;
mod process;
mod tool;

pub use artifacts::{AUXILIARY_EXTENSIONS, artifact_path, remove_auxiliary_files};
pub use convert::DocxConverter;
pub use error::{BuildFailure, CompileError};
pub use latex::LatexCompiler;
pub use pipeline::{BuildReport, BuildSettings, ResumeBuilder};
pub use process::{ProcessOutcome, run_with_timeout};
pub use tool::{DEFAULT_TIMEOUT, ToolConfig};
