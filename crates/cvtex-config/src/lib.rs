//! Configuration management for cvtex.
//!
//! Parses `cvtex.toml` with serde and discovers it in the current directory
//! or any parent. Without a file, defaults apply relative to the current
//! directory. Relative paths in a file resolve against the file's directory.
//!
//! CLI settings are applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `output.dir`
//! - `compiler.program`
//! - `converter.program`

mod expand;

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::time::Duration;

use cvtex_resume::{ContactItem, DEFAULT_TARGET_WORDS};
use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "cvtex.toml";

const DEFAULT_RESUME: &str = "output/structured_resume.json";
const DEFAULT_JOB_ANALYSIS: &str = "output/job_analysis.json";
const DEFAULT_OUTPUT_DIR: &str = "output";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

const TIMEOUT_RANGE: RangeInclusive<u64> = 1..=600;
const TARGET_WORDS_RANGE: RangeInclusive<usize> = 100..=2000;

/// CLI settings that override configuration file values.
///
/// Only `Some` values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    pub resume: Option<PathBuf>,
    pub job_analysis: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub docx: Option<bool>,
    pub keep_source: Option<bool>,
    pub include_summary: Option<bool>,
    pub language: Option<String>,
    pub target_words: Option<usize>,
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input paths as written in TOML.
    input: InputConfigRaw,
    /// Output settings as written in TOML.
    output: OutputConfigRaw,
    pub render: RenderConfig,
    pub compiler: CompilerConfig,
    pub converter: ConverterConfig,
    pub writing: WritingConfig,
    pub header: HeaderConfig,

    /// Resolved input paths (set after loading).
    #[serde(skip)]
    pub input_resolved: InputConfig,
    /// Resolved output settings (set after loading).
    #[serde(skip)]
    pub output_resolved: OutputConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct InputConfigRaw {
    resume: Option<String>,
    job_analysis: Option<String>,
}

/// Resolved input files.
#[derive(Debug, Default)]
pub struct InputConfig {
    /// Structured resume JSON.
    pub resume: PathBuf,
    /// Job analysis JSON supplying the job title.
    pub job_analysis: PathBuf,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct OutputConfigRaw {
    dir: Option<String>,
    keep_source: Option<bool>,
    docx: Option<bool>,
}

/// Resolved output settings.
#[derive(Debug, Default)]
pub struct OutputConfig {
    pub dir: PathBuf,
    /// Retain `<base>.tex` after the build.
    pub keep_source: bool,
    /// Also produce `<base>.docx`.
    pub docx: bool,
}

/// Rendering configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub include_summary: bool,
    /// Section title language; overrides the resume's own tag.
    pub language: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            include_summary: true,
            language: None,
        }
    }
}

/// LaTeX compiler invocation.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    pub program: String,
    pub args: Vec<String>,
    pub timeout_secs: u64,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            program: "pdflatex".to_owned(),
            args: vec!["-interaction=nonstopmode".to_owned()],
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl CompilerConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// DOCX converter invocation.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    pub program: String,
    pub args: Vec<String>,
    pub timeout_secs: u64,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            program: "pandoc".to_owned(),
            args: Vec::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ConverterConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Word count target for `cvtex words`.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct WritingConfig {
    pub target_words: usize,
}

impl Default for WritingConfig {
    fn default() -> Self {
        Self {
            target_words: DEFAULT_TARGET_WORDS,
        }
    }
}

/// Structured header override.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct HeaderConfig {
    /// When non-empty, replaces the resume's contact line.
    pub items: Vec<ContactItem>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path, e.g. `compiler.program`.
        field: String,
        message: String,
    },
}

fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn require_in_range<T>(value: T, range: &RangeInclusive<T>, field: &str) -> Result<(), ConfigError>
where
    T: PartialOrd + std::fmt::Display,
{
    if !range.contains(&value) {
        return Err(ConfigError::Validation(format!(
            "{field} must be between {} and {}, got {value}",
            range.start(),
            range.end()
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `cvtex.toml` in the current directory and its parents.
    ///
    /// CLI settings are applied after path resolution and before validation,
    /// so an out-of-range override is rejected like a bad file value.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(resume) = &settings.resume {
            self.input_resolved.resume.clone_from(resume);
        }
        if let Some(job_analysis) = &settings.job_analysis {
            self.input_resolved.job_analysis.clone_from(job_analysis);
        }
        if let Some(dir) = &settings.output_dir {
            self.output_resolved.dir.clone_from(dir);
        }
        if let Some(docx) = settings.docx {
            self.output_resolved.docx = docx;
        }
        if let Some(keep_source) = settings.keep_source {
            self.output_resolved.keep_source = keep_source;
        }
        if let Some(include_summary) = settings.include_summary {
            self.render.include_summary = include_summary;
        }
        if let Some(language) = &settings.language {
            self.render.language = Some(language.clone());
        }
        if let Some(target_words) = settings.target_words {
            self.writing.target_words = target_words;
        }
    }

    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Defaults with paths relative to `base`.
    fn default_with_base(base: &Path) -> Self {
        Self {
            input: InputConfigRaw::default(),
            output: OutputConfigRaw::default(),
            render: RenderConfig::default(),
            compiler: CompilerConfig::default(),
            converter: ConverterConfig::default(),
            writing: WritingConfig::default(),
            header: HeaderConfig::default(),
            input_resolved: InputConfig {
                resume: base.join(DEFAULT_RESUME),
                job_analysis: base.join(DEFAULT_JOB_ANALYSIS),
            },
            output_resolved: OutputConfig {
                dir: base.join(DEFAULT_OUTPUT_DIR),
                keep_source: false,
                docx: false,
            },
            config_path: None,
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());
        tracing::debug!(path = %path.display(), "Configuration loaded");

        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.compiler.program, "compiler.program")?;
        require_in_range(self.compiler.timeout_secs, &TIMEOUT_RANGE, "compiler.timeout_secs")?;
        require_non_empty(&self.converter.program, "converter.program")?;
        require_in_range(self.converter.timeout_secs, &TIMEOUT_RANGE, "converter.timeout_secs")?;
        require_in_range(self.writing.target_words, &TARGET_WORDS_RANGE, "writing.target_words")?;
        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref dir) = self.output.dir {
            self.output.dir = Some(expand::expand_env(dir, "output.dir")?);
        }
        self.compiler.program = expand::expand_env(&self.compiler.program, "compiler.program")?;
        self.converter.program = expand::expand_env(&self.converter.program, "converter.program")?;
        Ok(())
    }

    /// Resolve relative paths against the config file's directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.input_resolved = InputConfig {
            resume: resolve(self.input.resume.as_deref(), DEFAULT_RESUME),
            job_analysis: resolve(self.input.job_analysis.as_deref(), DEFAULT_JOB_ANALYSIS),
        };
        self.output_resolved = OutputConfig {
            dir: resolve(self.output.dir.as_deref(), DEFAULT_OUTPUT_DIR),
            keep_source: self.output.keep_source.unwrap_or(false),
            docx: self.output.docx.unwrap_or(false),
        };
    }
}
