//! Keyword emphasis inside escaped text.
//!
//! Keywords are located in the raw text, then the text is escaped piece by
//! piece: the gaps between matches as plain text and each match inside
//! `\textbf{...}`. Matching raw text avoids searching through escape
//! sequences.

use std::cmp::Reverse;
use std::ops::Range;

use regex::RegexBuilder;

use crate::escape::escape_latex;

/// Escape `text` and set the first occurrence of each keyword in bold.
///
/// Matching is case-insensitive and keeps the casing found in `text`.
/// Longer keywords are matched first; a span already claimed by one
/// keyword cannot be matched by another. Blank keywords are ignored.
#[must_use]
pub fn emphasize_keywords<S: AsRef<str>>(text: &str, keywords: &[S]) -> String {
    let mut keywords: Vec<&str> = keywords
        .iter()
        .map(AsRef::as_ref)
        .filter(|keyword| !keyword.trim().is_empty())
        .collect();
    if keywords.is_empty() {
        return escape_latex(text);
    }
    keywords.sort_by_key(|keyword| Reverse(keyword.chars().count()));

    let mut spans: Vec<Range<usize>> = Vec::new();
    for keyword in keywords {
        if let Some(span) = first_unclaimed_match(text, keyword, &spans) {
            spans.push(span);
        }
    }
    spans.sort_by_key(|span| span.start);

    let mut result = String::with_capacity(text.len() + spans.len() * 10);
    let mut cursor = 0;
    for span in spans {
        result.push_str(&escape_latex(&text[cursor..span.start]));
        result.push_str(r"\textbf{");
        result.push_str(&escape_latex(&text[span.start..span.end]));
        result.push('}');
        cursor = span.end;
    }
    result.push_str(&escape_latex(&text[cursor..]));
    result
}

fn first_unclaimed_match(text: &str, keyword: &str, claimed: &[Range<usize>]) -> Option<Range<usize>> {
    let pattern = match RegexBuilder::new(&regex::escape(keyword))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => pattern,
        Err(e) => {
            tracing::debug!(keyword, error = %e, "Skipping keyword that cannot be matched");
            return None;
        }
    };

    let mut start = 0;
    while let Some(found) = pattern.find_at(text, start) {
        let overlaps = claimed
            .iter()
            .any(|span| found.start() < span.end && span.start < found.end());
        if !overlaps {
            return Some(found.range());
        }
        // Retry one character further so partially overlapping matches do
        // not hide a later valid one.
        start = found.start()
            + text[found.start()..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
    }
    None
}
