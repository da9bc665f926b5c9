//! Resume document model.
//!
//! Every field is optional on the wire: a missing key or an explicit `null`
//! yields the empty value, so partially extracted resumes still render.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::contact::ContactInfo;
use crate::content::{MixedContent, OrderedMap};

/// Structured resume as produced by the extraction step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResumeDocument {
    #[serde(deserialize_with = "lenient_text")]
    pub candidate_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub contact_info: ContactInfo,
    #[serde(deserialize_with = "optional_text")]
    pub summary: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub work_experience: Vec<WorkExperience>,
    #[serde(deserialize_with = "null_as_default")]
    pub education: Vec<Education>,
    #[serde(deserialize_with = "null_as_default")]
    pub certifications: Vec<Certification>,
    /// Category name to skill list, in document order.
    #[serde(deserialize_with = "null_as_default")]
    pub skills: OrderedMap<Vec<String>>,
    #[serde(deserialize_with = "null_as_default")]
    pub languages: MixedContent,
    #[serde(deserialize_with = "null_as_default")]
    pub projects: MixedContent,
    /// Freeform sections keyed by raw section name.
    #[serde(deserialize_with = "null_as_default")]
    pub additional_sections: OrderedMap<MixedContent>,
    /// Language tag of the resume text (`"en"`, `"Spanish"`, ...).
    #[serde(deserialize_with = "optional_text")]
    pub language: Option<String>,
}

/// One employer entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WorkExperience {
    #[serde(deserialize_with = "lenient_text")]
    pub institution: String,
    #[serde(deserialize_with = "optional_text")]
    pub location: Option<String>,
    /// Role titles held at this employer, combined on one line.
    #[serde(deserialize_with = "text_or_list")]
    pub roles: Vec<String>,
    #[serde(deserialize_with = "optional_text")]
    pub date_start: Option<String>,
    #[serde(deserialize_with = "optional_text")]
    pub date_end: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub achievements: Vec<String>,
    /// Phrases to set in bold within the achievements.
    #[serde(deserialize_with = "null_as_default")]
    pub keywords_to_bold: Vec<String>,
}

/// One education entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Education {
    #[serde(deserialize_with = "lenient_text")]
    pub institution: String,
    #[serde(deserialize_with = "optional_text")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub degree: String,
    #[serde(deserialize_with = "optional_text")]
    pub year_start: Option<String>,
    #[serde(deserialize_with = "optional_text")]
    pub year_end: Option<String>,
    #[serde(deserialize_with = "optional_text")]
    pub additional_info: Option<String>,
}

/// One course or certification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Certification {
    #[serde(deserialize_with = "optional_text")]
    pub year: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(deserialize_with = "optional_text")]
    pub provider: Option<String>,
    #[serde(deserialize_with = "optional_text")]
    pub grade: Option<String>,
}

impl Certification {
    /// Non-empty fields in display order: year, name, provider, grade.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        [
            self.year.as_deref(),
            Some(self.name.as_str()),
            self.provider.as_deref(),
            self.grade.as_deref(),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|field| !field.is_empty())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts strings, numbers and booleans; `null` becomes the empty string.
///
/// Extraction output often carries years as numbers.
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected text, found {other}"
        ))),
    }
}

/// Like [`lenient_text`], but blank values become `None`.
fn optional_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let text = lenient_text(deserializer)?;
    if text.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(text))
    }
}

/// A single string is read as a one-element list.
fn text_or_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrList {
        Text(String),
        List(Vec<String>),
    }

    Ok(match Option::<TextOrList>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(TextOrList::Text(text)) if text.trim().is_empty() => Vec::new(),
        Some(TextOrList::Text(text)) => vec![text],
        Some(TextOrList::List(items)) => items,
    })
}
