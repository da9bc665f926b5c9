//! Loading resume and job analysis JSON from disk.

use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::identity::DEFAULT_JOB_TITLE;
use crate::model::ResumeDocument;

/// Error loading a structured resume.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Resume file does not exist.
    #[error("Structured resume not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Resume file exists but could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Resume file is not valid resume JSON.
    #[error("Invalid resume JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ResumeDocument {
    /// Parse a resume from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load a resume from a JSON file.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                LoadError::NotFound(path.to_path_buf())
            } else {
                LoadError::Io {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;
        let doc = Self::from_json(&content).map_err(|e| LoadError::Json {
            path: path.to_path_buf(),
            source: e,
        })?;
        tracing::debug!(path = %path.display(), "Loaded structured resume");
        Ok(doc)
    }
}

#[derive(Deserialize)]
struct JobAnalysis {
    #[serde(default)]
    job_title: Option<String>,
}

/// Read the target job title from a job analysis file.
///
/// Only `job_title` is consulted. A missing, unreadable or malformed file,
/// or a missing or blank title, yields [`DEFAULT_JOB_TITLE`] with a warning.
#[must_use]
pub fn load_job_title(path: &Path) -> String {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Job analysis unavailable, using default job title"
            );
            return DEFAULT_JOB_TITLE.to_owned();
        }
    };

    match serde_json::from_str::<JobAnalysis>(&content) {
        Ok(JobAnalysis {
            job_title: Some(title),
        }) if !title.trim().is_empty() => title,
        Ok(_) => {
            tracing::warn!(
                path = %path.display(),
                "Job analysis has no job title, using default job title"
            );
            DEFAULT_JOB_TITLE.to_owned()
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Invalid job analysis JSON, using default job title"
            );
            DEFAULT_JOB_TITLE.to_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_load_resume() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("structured_resume.json");
        std::fs::write(&path, r#"{"candidate_name": "Ada Lovelace"}"#).unwrap();

        let doc = ResumeDocument::load(&path).unwrap();

        assert_eq!(doc.candidate_name, "Ada Lovelace");
    }

    #[test]
    fn test_load_missing_resume() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");

        let err = ResumeDocument::load(&path).unwrap_err();

        assert!(matches!(err, LoadError::NotFound(p) if p == path));
    }

    #[test]
    fn test_load_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("structured_resume.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = ResumeDocument::load(&path).unwrap_err();

        assert!(matches!(err, LoadError::Json { .. }));
        assert!(err.to_string().starts_with("Invalid resume JSON"));
    }

    #[test]
    fn test_load_wrong_shape() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("structured_resume.json");
        std::fs::write(&path, r#"{"work_experience": "not a list"}"#).unwrap();

        let err = ResumeDocument::load(&path).unwrap_err();

        assert!(matches!(err, LoadError::Json { .. }));
    }

    #[test]
    fn test_job_title() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("job_analysis.json");
        std::fs::write(
            &path,
            r#"{"job_title": "Data Engineer", "requirements": ["SQL"]}"#,
        )
        .unwrap();

        assert_eq!(load_job_title(&path), "Data Engineer");
    }

    #[test]
    fn test_job_title_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(load_job_title(&temp_dir.path().join("nope.json")), "Position");
    }

    #[test]
    fn test_job_title_missing_key_or_blank() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("job_analysis.json");

        std::fs::write(&path, r#"{"company": "Acme"}"#).unwrap();
        assert_eq!(load_job_title(&path), "Position");

        std::fs::write(&path, r#"{"job_title": "  "}"#).unwrap();
        assert_eq!(load_job_title(&path), "Position");

        std::fs::write(&path, r#"{"job_title": null}"#).unwrap();
        assert_eq!(load_job_title(&path), "Position");
    }

    #[test]
    fn test_job_title_malformed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("job_analysis.json");
        std::fs::write(&path, "[1, 2").unwrap();

        assert_eq!(load_job_title(&path), "Position");
    }
}
