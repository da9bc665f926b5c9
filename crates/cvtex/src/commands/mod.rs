//! CLI command implementations.

pub(crate) mod latex;
pub(crate) mod render;
pub(crate) mod words;

use std::path::PathBuf;

use clap::Args;
use cvtex_build::{BuildSettings, ToolConfig};
use cvtex_config::{CliSettings, Config};
use cvtex_renderer::{Language, RenderOptions};

pub(crate) use latex::LatexArgs;
pub(crate) use render::RenderArgs;
pub(crate) use words::WordsArgs;

/// Input and rendering flags shared by `render` and `latex`.
#[derive(Args, Debug, Default)]
pub(crate) struct ResumeArgs {
    /// Structured resume JSON (overrides config).
    #[arg(short, long)]
    resume: Option<PathBuf>,

    /// Job analysis JSON supplying the job title (overrides config).
    #[arg(short, long)]
    job_analysis: Option<PathBuf>,

    /// Output directory (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Section title language, e.g. "es" or "German" (overrides the resume's tag).
    #[arg(short, long)]
    language: Option<String>,

    /// Leave out the summary section.
    #[arg(long)]
    no_summary: bool,

    /// Path to configuration file (default: auto-discover cvtex.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl ResumeArgs {
    fn cli_settings(&self) -> CliSettings {
        CliSettings {
            resume: self.resume.clone(),
            job_analysis: self.job_analysis.clone(),
            output_dir: self.output_dir.clone(),
            language: self.language.clone(),
            include_summary: self.no_summary.then_some(false),
            ..CliSettings::default()
        }
    }
}

/// Map the loaded configuration onto pipeline settings.
fn build_settings(config: &Config) -> BuildSettings {
    let compiler = ToolConfig::new(&config.compiler.program)
        .with_args(&config.compiler.args)
        .with_timeout(config.compiler.timeout());
    let converter = config.output_resolved.docx.then(|| {
        ToolConfig::new(&config.converter.program)
            .with_args(&config.converter.args)
            .with_timeout(config.converter.timeout())
    });
    let language = config
        .render
        .language
        .as_deref()
        .map(|tag| Language::resolve(Some(tag)));

    BuildSettings {
        compiler,
        converter,
        keep_source: config.output_resolved.keep_source,
        render: RenderOptions {
            include_summary: config.render.include_summary,
            header: (!config.header.items.is_empty()).then(|| config.header.items.clone()),
            language,
        },
    }
}
