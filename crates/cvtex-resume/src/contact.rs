//! Contact information shown under the candidate name.

use serde::Deserialize;

/// Contact block of a resume.
///
/// Extraction either yields a single pre-formatted line or a list of
/// structured items that may carry links.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ContactInfo {
    /// Pre-formatted text, rendered escaped.
    Line(String),
    /// Structured items joined with bullet separators.
    Items(Vec<ContactItem>),
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self::Line(String::new())
    }
}

impl ContactInfo {
    /// Whether there is anything to print.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Line(line) => line.trim().is_empty(),
            Self::Items(items) => items.iter().all(ContactItem::is_blank),
        }
    }
}

/// One structured contact entry, e.g. `Email: ` + `ada@example.com`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactItem {
    /// Label printed before the text, verbatim apart from escaping.
    #[serde(default, alias = "label")]
    pub prefix: Option<String>,
    /// Display text.
    #[serde(default, alias = "display")]
    pub text: String,
    /// Link target. Emitted unescaped inside `\href`.
    #[serde(default, alias = "link")]
    pub url: Option<String>,
}

impl ContactItem {
    /// Create a plain-text item without prefix or link.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            prefix: None,
            text: text.into(),
            url: None,
        }
    }

    /// Create a linked item.
    #[must_use]
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            prefix: None,
            text: text.into(),
            url: Some(url.into()),
        }
    }

    /// Set the prefix label.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Link target, if non-blank.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.trim().is_empty())
    }

    fn is_blank(&self) -> bool {
        self.text.trim().is_empty() && self.url().is_none()
    }
}
