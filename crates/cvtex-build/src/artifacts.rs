//! Generated file paths and cleanup.

use std::io;
use std::path::{Path, PathBuf};

/// Compiler by-products removed after every compile.
pub const AUXILIARY_EXTENSIONS: &[&str] = &["aux", "log", "out", "toc", "fls", "synctex.gz"];

/// `<dir>/<base>.<extension>`.
#[must_use]
pub fn artifact_path(dir: &Path, base: &str, extension: &str) -> PathBuf {
    dir.join(format!("{base}.{extension}"))
}

/// Delete compiler by-products for `base` in `dir`.
///
/// Returns how many files were removed. Failures are logged, not returned.
pub fn remove_auxiliary_files(dir: &Path, base: &str) -> usize {
    let mut removed = 0;
    for extension in AUXILIARY_EXTENSIONS {
        let path = artifact_path(dir, base, extension);
        match remove_if_exists(&path) {
            Ok(true) => removed += 1,
            Ok(false) => {}
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to remove auxiliary file");
            }
        }
    }
    tracing::debug!(dir = %dir.display(), base, removed, "Removed auxiliary files");
    removed
}

/// Remove `path` if it exists. Returns whether a file was removed.
pub(crate) fn remove_if_exists(path: &Path) -> io::Result<bool> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_artifact_path() {
        assert_eq!(
            artifact_path(Path::new("out"), "CV_Doe_Jane_Engineer", "pdf"),
            PathBuf::from("out/CV_Doe_Jane_Engineer.pdf")
        );
    }

    #[test]
    fn test_remove_auxiliary_files_keeps_outputs() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        for name in ["cv.aux", "cv.log", "cv.out", "cv.pdf", "cv.tex", "other.aux"] {
            std::fs::write(dir.join(name), "").unwrap();
        }

        let removed = remove_auxiliary_files(dir, "cv");

        assert_eq!(removed, 3);
        assert!(!dir.join("cv.aux").exists());
        assert!(!dir.join("cv.log").exists());
        assert!(!dir.join("cv.out").exists());
        assert!(dir.join("cv.pdf").exists());
        assert!(dir.join("cv.tex").exists());
        assert!(dir.join("other.aux").exists());
    }

    #[test]
    fn test_remove_if_exists() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("x.aux");

        assert!(!remove_if_exists(&path).unwrap());
        std::fs::write(&path, "").unwrap();
        assert!(remove_if_exists(&path).unwrap());
        assert!(!path.exists());
    }
}
