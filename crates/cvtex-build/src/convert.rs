//! LaTeX to DOCX conversion.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::CompileError;
use crate::tool::ToolConfig;

/// Drives a pandoc-compatible converter: `<program> <args> <source> -o <output>`.
#[derive(Debug, Clone)]
pub struct DocxConverter {
    tool: ToolConfig,
}

impl Default for DocxConverter {
    fn default() -> Self {
        Self::new(ToolConfig::pandoc())
    }
}

impl DocxConverter {
    #[must_use]
    pub fn new(tool: ToolConfig) -> Self {
        Self { tool }
    }

    /// Convert `source` to a `.docx` file next to it.
    pub fn convert(&self, source: &Path) -> Result<PathBuf, CompileError> {
        let output = source.with_extension("docx");
        tracing::info!(program = %self.tool.program, "Converting LaTeX to DOCX");

        match self.tool.run(
            &[source.as_os_str(), OsStr::new("-o"), output.as_os_str()],
            &output,
        ) {
            Ok(()) => {
                tracing::info!(path = %output.display(), "DOCX generated");
                Ok(output)
            }
            Err(e) => {
                e.log("docx");
                Err(e)
            }
        }
    }
}
