//! LaTeX text escaping.

/// Escape text for literal use in LaTeX body text.
///
/// Works in a single pass over the input, so the backslashes introduced for
/// other characters are never themselves escaped again.
#[must_use]
pub fn escape_latex(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => result.push_str(r"\textbackslash{}"),
            '&' => result.push_str(r"\&"),
            '%' => result.push_str(r"\%"),
            '$' => result.push_str(r"\$"),
            '#' => result.push_str(r"\#"),
            '_' => result.push_str(r"\_"),
            '{' => result.push_str(r"\{"),
            '}' => result.push_str(r"\}"),
            '~' => result.push_str(r"\textasciitilde{}"),
            '^' => result.push_str(r"\textasciicircum{}"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(escape_latex("R&D"), r"R\&D");
        assert_eq!(escape_latex("$100 #1"), r"\$100 \#1");
        assert_eq!(escape_latex("snake_case"), r"snake\_case");
        assert_eq!(escape_latex("{x}"), r"\{x\}");
        assert_eq!(escape_latex("~/x^2"), r"\textasciitilde{}/x\textasciicircum{}2");
    }

    #[test]
    fn test_backslash_is_not_reprocessed() {
        assert_eq!(escape_latex(r"50% \ done"), r"50\% \textbackslash{} done");
    }

    #[test]
    fn test_escape_is_not_idempotent() {
        let once = escape_latex("50%");
        assert_eq!(once, r"50\%");
        assert_eq!(escape_latex(&once), r"50\textbackslash{}\%");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_latex(""), "");
        assert_eq!(escape_latex("Zürich, 2020 -- 2022"), "Zürich, 2020 -- 2022");
    }
}
