//! Candidate identity and output file naming.

use std::sync::LazyLock;

use regex::Regex;

/// Job title used when no job analysis is available.
pub const DEFAULT_JOB_TITLE: &str = "Position";

/// Maximum length, in characters, of each sanitized filename fragment.
pub const MAX_FILENAME_LENGTH: usize = 255;

/// Name used for file naming when the resume carries no candidate name.
const FALLBACK_NAME: &str = "Resume";

static DISALLOWED_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").unwrap());
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static UNDERSCORE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_+").unwrap());

/// First and last name split from a full candidate name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateName {
    pub first: String,
    pub last: String,
}

impl CandidateName {
    /// Split a full name on whitespace.
    ///
    /// With two or more tokens the first and last token are used. A single
    /// token is the first name with an empty last name. A blank name falls
    /// back to `"Resume"`.
    #[must_use]
    pub fn parse(full_name: &str) -> Self {
        let tokens: Vec<&str> = full_name.split_whitespace().collect();
        match tokens.as_slice() {
            [] => Self {
                first: FALLBACK_NAME.to_owned(),
                last: String::new(),
            },
            [only] => Self {
                first: (*only).to_owned(),
                last: String::new(),
            },
            [first, .., last] => Self {
                first: (*first).to_owned(),
                last: (*last).to_owned(),
            },
        }
    }
}

/// Make text safe for use as a filename fragment.
///
/// Drops characters other than word characters, whitespace and hyphens,
/// turns whitespace runs into a single underscore, collapses repeated
/// underscores, trims underscores at both ends and caps the result at
/// [`MAX_FILENAME_LENGTH`] characters.
#[must_use]
pub fn sanitize_for_filename(text: &str) -> String {
    let kept = DISALLOWED_CHARS.replace_all(text, "");
    let underscored = WHITESPACE_RUN.replace_all(&kept, "_");
    let collapsed = UNDERSCORE_RUN.replace_all(&underscored, "_");
    collapsed
        .trim_matches('_')
        .chars()
        .take(MAX_FILENAME_LENGTH)
        .collect()
}

/// Base name (without extension) for generated files:
/// `CV_<Last>_<First>_<JobTitle>`.
///
/// A missing or blank job title becomes [`DEFAULT_JOB_TITLE`].
#[must_use]
pub fn base_filename(candidate_name: &str, job_title: Option<&str>) -> String {
    let name = CandidateName::parse(candidate_name);
    let title = job_title
        .filter(|title| !title.trim().is_empty())
        .unwrap_or(DEFAULT_JOB_TITLE);
    format!(
        "CV_{}_{}_{}",
        sanitize_for_filename(&name.last),
        sanitize_for_filename(&name.first),
        sanitize_for_filename(title)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_full_name() {
        let name = CandidateName::parse("Ada King Lovelace");
        assert_eq!(name.first, "Ada");
        assert_eq!(name.last, "Lovelace");
    }

    #[test]
    fn test_parse_single_token() {
        let name = CandidateName::parse("  Prince ");
        assert_eq!(name.first, "Prince");
        assert_eq!(name.last, "");
    }

    #[test]
    fn test_parse_blank_name() {
        let name = CandidateName::parse("   ");
        assert_eq!(name.first, "Resume");
        assert_eq!(name.last, "");
    }

    #[test]
    fn test_sanitize_strips_and_collapses() {
        assert_eq!(sanitize_for_filename("Senior ML Engineer!!"), "Senior_ML_Engineer");
        assert_eq!(sanitize_for_filename("  C++ / Rust   Dev  "), "C_Rust_Dev");
        assert_eq!(sanitize_for_filename("__a__b__"), "a_b");
        assert_eq!(sanitize_for_filename("Back-End"), "Back-End");
    }

    #[test]
    fn test_sanitize_keeps_unicode_letters() {
        assert_eq!(sanitize_for_filename("José Müller"), "José_Müller");
    }

    #[test]
    fn test_sanitize_caps_length() {
        let long = "a".repeat(400);
        assert_eq!(sanitize_for_filename(&long).chars().count(), MAX_FILENAME_LENGTH);
    }

    #[test]
    fn test_sanitize_only_symbols() {
        assert_eq!(sanitize_for_filename("!!!"), "");
    }

    #[test]
    fn test_base_filename() {
        assert_eq!(
            base_filename("Ada Lovelace", Some("Senior ML Engineer!!")),
            "CV_Lovelace_Ada_Senior_ML_Engineer"
        );
    }

    #[test]
    fn test_base_filename_defaults() {
        assert_eq!(base_filename("Prince", None), "CV__Prince_Position");
        assert_eq!(base_filename("", Some("  ")), "CV__Resume_Position");
    }
}
