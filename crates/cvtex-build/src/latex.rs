//! LaTeX to PDF compilation.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::artifacts::{artifact_path, remove_auxiliary_files};
use crate::error::CompileError;
use crate::tool::ToolConfig;

/// Drives a `pdflatex`-compatible compiler.
#[derive(Debug, Clone)]
pub struct LatexCompiler {
    tool: ToolConfig,
}

impl Default for LatexCompiler {
    fn default() -> Self {
        Self::new(ToolConfig::pdflatex())
    }
}

impl LatexCompiler {
    #[must_use]
    pub fn new(tool: ToolConfig) -> Self {
        Self { tool }
    }

    /// Write `markup` to `<output_dir>/<base>.tex`, creating the directory.
    pub fn write_source(&self, markup: &str, output_dir: &Path, base: &str) -> Result<PathBuf, CompileError> {
        std::fs::create_dir_all(output_dir)?;
        let source = artifact_path(output_dir, base, "tex");
        std::fs::write(&source, markup)?;
        tracing::info!(path = %source.display(), "LaTeX source written");
        Ok(source)
    }

    /// Write `markup` and compile it to `<output_dir>/<base>.pdf`.
    ///
    /// Succeeds only when the compiler exits with status zero and the PDF
    /// exists afterwards. Auxiliary files are removed whatever the outcome;
    /// the `.tex` source is left in place.
    pub fn compile(&self, markup: &str, output_dir: &Path, base: &str) -> Result<PathBuf, CompileError> {
        let pdf = artifact_path(output_dir, base, "pdf");
        match self.run_compiler(markup, output_dir, base, &pdf) {
            Ok(()) => {
                tracing::info!(path = %pdf.display(), "PDF generated");
                Ok(pdf)
            }
            Err(e) => {
                e.log("latex");
                Err(e)
            }
        }
    }

    fn run_compiler(&self, markup: &str, output_dir: &Path, base: &str, pdf: &Path) -> Result<(), CompileError> {
        let source = self.write_source(markup, output_dir, base)?;

        tracing::info!(program = %self.tool.program, "Compiling LaTeX to PDF");
        let result = self.tool.run(
            &[
                OsStr::new("-output-directory"),
                output_dir.as_os_str(),
                source.as_os_str(),
            ],
            pdf,
        );
        remove_auxiliary_files(output_dir, base);
        result
    }
}
