//! Per-section markup.
//!
//! Each renderer returns an empty string when its section has nothing to
//! show, so absent sections leave no heading or spacing behind.

use std::fmt::Write;

use cvtex_resume::{
    Certification, ContactInfo, ContactItem, Education, MixedContent, OrderedMap, WorkExperience,
};

use crate::emphasis::emphasize_keywords;
use crate::escape::escape_latex;
use crate::language::SectionLabels;
use crate::mixed::{render_mixed_content, write_itemize};

/// Vertical space closing every section.
pub const SECTION_SPACING: &str = r"\vspace{12pt}";
/// Vertical space between entries of one section.
pub const ENTRY_SPACING: &str = r"\vspace{6pt}";

/// Separator between structured contact items.
const CONTACT_SEPARATOR: &str = r" $\bullet$ ";
/// Shown when the resume carries no candidate name.
const PLACEHOLDER_NAME: &str = "Candidate Name";

fn open_section(out: &mut String, title: &str) {
    let _ = write!(out, "\\resumesection{{{}}}\n\n", escape_latex(title));
}

fn close_section(out: &mut String) {
    out.push_str(SECTION_SPACING);
    out.push_str("\n\n");
}

fn non_blank(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// `left \hfill right`, or whichever side is present.
fn aligned_line(left: Option<String>, right: Option<String>) -> Option<String> {
    match (left, right) {
        (Some(left), Some(right)) => Some(format!(r"{left} \hfill {right}")),
        (Some(left), None) => Some(left),
        (None, Some(right)) => Some(format!(r"\hfill {right}")),
        (None, None) => None,
    }
}

/// Escaped `start -- end`, or the single bound that is present.
///
/// With `collapse_equal`, identical bounds print once.
fn format_range(start: Option<&str>, end: Option<&str>, collapse_equal: bool) -> Option<String> {
    match (start.and_then(non_blank), end.and_then(non_blank)) {
        (Some(start), Some(end)) if collapse_equal && start == end => Some(escape_latex(end)),
        (Some(start), Some(end)) => Some(format!("{} -- {}", escape_latex(start), escape_latex(end))),
        (Some(bound), None) | (None, Some(bound)) => Some(escape_latex(bound)),
        (None, None) => None,
    }
}

fn bold(text: &str) -> String {
    format!(r"\textbf{{{}}}", escape_latex(text))
}

/// Title block and contact line.
///
/// `header_override`, when given and non-empty, replaces the document's own
/// contact information.
#[must_use]
pub fn render_header(
    candidate_name: &str,
    contact_info: &ContactInfo,
    header_override: Option<&[ContactItem]>,
) -> String {
    let name = non_blank(candidate_name).unwrap_or(PLACEHOLDER_NAME);
    let mut out = String::new();
    let _ = write!(
        out,
        "\\begin{{center}}\n    \\textbf{{{}}}\\\\\n    \\hrulefill\n\\end{{center}}\n\n",
        escape_latex(name)
    );

    let contact = match header_override {
        Some(items) if !items.is_empty() => render_contact_items(items),
        _ => match contact_info {
            ContactInfo::Line(line) => escape_latex(line.trim()),
            ContactInfo::Items(items) => render_contact_items(items),
        },
    };
    if !contact.is_empty() {
        let _ = write!(out, "\\begin{{center}}\n    {contact}\n\\end{{center}}\n\n");
    }

    out.push_str("\\vspace{0.5pt}\n\n");
    out
}

/// Structured contact items joined with bullets.
///
/// Prefix and text are escaped; URLs are emitted as-is inside `\href`.
/// An item with a link but no text shows the escaped URL.
#[must_use]
pub fn render_contact_items(items: &[ContactItem]) -> String {
    items
        .iter()
        .filter_map(|item| {
            let text = non_blank(&item.text);
            let body = match (item.url(), text) {
                (Some(url), Some(text)) => format!(r"\href{{{url}}}{{{}}}", escape_latex(text)),
                (Some(url), None) => format!(r"\href{{{url}}}{{{}}}", escape_latex(url)),
                (None, Some(text)) => escape_latex(text),
                (None, None) => return None,
            };
            let prefix = item.prefix.as_deref().map(escape_latex).unwrap_or_default();
            Some(format!("{prefix}{body}"))
        })
        .collect::<Vec<_>>()
        .join(CONTACT_SEPARATOR)
}

#[must_use]
pub fn render_summary(summary: Option<&str>, labels: &SectionLabels) -> String {
    let Some(summary) = summary.and_then(non_blank) else {
        return String::new();
    };
    let mut out = String::new();
    open_section(&mut out, labels.summary);
    out.push_str(&escape_latex(summary));
    out.push_str("\n\n");
    close_section(&mut out);
    out
}

/// Write entries separated by [`ENTRY_SPACING`].
///
/// Returns `false` when no entry produced any markup.
fn write_entries<'a, T: 'a>(
    out: &mut String,
    entries: impl IntoIterator<Item = &'a T>,
    render: impl Fn(&T) -> Option<String>,
) -> bool {
    let mut written = false;
    for entry in entries.into_iter().filter_map(render) {
        if written {
            let _ = write!(out, "\n\n{ENTRY_SPACING}\n\n");
        }
        out.push_str(entry.trim_end());
        written = true;
    }
    written
}

fn render_section<'a, T: 'a>(
    title: &str,
    entries: impl IntoIterator<Item = &'a T>,
    render: impl Fn(&T) -> Option<String>,
) -> String {
    let mut body = String::new();
    if !write_entries(&mut body, entries, render) {
        return String::new();
    }
    let mut out = String::new();
    open_section(&mut out, title);
    out.push_str(&body);
    out.push_str("\n\n");
    close_section(&mut out);
    out
}

fn experience_entry(entry: &WorkExperience) -> Option<String> {
    let header = aligned_line(
        non_blank(&entry.institution).map(bold),
        entry.location.as_deref().and_then(non_blank).map(escape_latex),
    );
    let roles: Vec<&str> = entry.roles.iter().filter_map(|role| non_blank(role)).collect();
    let role_line = aligned_line(
        (!roles.is_empty()).then(|| bold(&roles.join(", "))),
        format_range(entry.date_start.as_deref(), entry.date_end.as_deref(), false),
    );
    let achievements: Vec<String> = entry
        .achievements
        .iter()
        .filter(|achievement| !achievement.trim().is_empty())
        .map(|achievement| emphasize_keywords(achievement, &entry.keywords_to_bold))
        .collect();

    if header.is_none() && role_line.is_none() && achievements.is_empty() {
        return None;
    }

    let mut out = String::new();
    if let Some(header) = header {
        let _ = write!(out, "{header}\n\n");
    }
    if let Some(role_line) = role_line {
        let _ = writeln!(out, "{role_line}");
    }
    write_itemize(&mut out, achievements);
    Some(out)
}

#[must_use]
pub fn render_experience(entries: &[WorkExperience], labels: &SectionLabels) -> String {
    render_section(labels.work_experience, entries, experience_entry)
}

fn education_entry(entry: &Education) -> Option<String> {
    let header = aligned_line(
        non_blank(&entry.institution).map(bold),
        entry.location.as_deref().and_then(non_blank).map(escape_latex),
    );
    let degree_line = aligned_line(
        non_blank(&entry.degree).map(escape_latex),
        format_range(entry.year_start.as_deref(), entry.year_end.as_deref(), true),
    );
    let info = entry.additional_info.as_deref().and_then(non_blank);

    if header.is_none() && degree_line.is_none() && info.is_none() {
        return None;
    }

    let mut out = String::new();
    if let Some(header) = header {
        let _ = write!(out, "{header}\n\n");
    }
    if let Some(degree_line) = degree_line {
        let _ = writeln!(out, "{degree_line}");
    }
    if let Some(info) = info {
        let _ = write!(out, "\n{}\n", escape_latex(info));
    }
    Some(out)
}

#[must_use]
pub fn render_education(entries: &[Education], labels: &SectionLabels) -> String {
    render_section(labels.education, entries, education_entry)
}

/// One line per entry: `year | name | provider | grade`, empty fields skipped.
#[must_use]
pub fn render_certifications(entries: &[Certification], labels: &SectionLabels) -> String {
    let lines: Vec<String> = entries
        .iter()
        .map(|cert| cert.fields().map(escape_latex).collect::<Vec<_>>().join(" | "))
        .filter(|line| !line.is_empty())
        .collect();
    if lines.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    open_section(&mut out, labels.certifications);
    for line in lines {
        let _ = write!(out, "{line}\n\n");
    }
    close_section(&mut out);
    out
}

/// One line per category: `\textbf{Category:} skill, skill`.
///
/// The joined skill list is escaped as one unit.
#[must_use]
pub fn render_skills(skills: &OrderedMap<Vec<String>>, labels: &SectionLabels) -> String {
    let lines: Vec<String> = skills
        .iter()
        .filter_map(|(category, list)| {
            let list: Vec<&str> = list.iter().filter_map(|skill| non_blank(skill)).collect();
            if list.is_empty() {
                return None;
            }
            let joined = escape_latex(&list.join(", "));
            Some(match non_blank(category) {
                Some(category) => format!(r"\textbf{{{}:}} {joined}", escape_latex(category)),
                None => joined,
            })
        })
        .collect();
    if lines.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    open_section(&mut out, labels.skills);
    for line in lines {
        let _ = write!(out, "{line}\n\n");
    }
    close_section(&mut out);
    out
}

/// Titled section of paragraphs and lists.
#[must_use]
pub fn render_mixed_section(title: &str, content: &MixedContent) -> String {
    let body = render_mixed_content(content);
    if body.is_empty() {
        return String::new();
    }
    let mut out = String::new();
    open_section(&mut out, title);
    out.push_str(&body);
    close_section(&mut out);
    out
}

/// Freeform sections in document order, with display titles derived from keys.
#[must_use]
pub fn render_additional_sections(sections: &OrderedMap<MixedContent>) -> String {
    sections
        .iter()
        .filter_map(|(name, content)| {
            let title = display_title(name);
            let title = if title.is_empty() { name.trim().to_owned() } else { title };
            if title.is_empty() {
                tracing::warn!("Skipping additional section with a blank name");
                return None;
            }
            Some(render_mixed_section(&title, content))
        })
        .collect()
}

/// Turn a section key such as `volunteer_work` into `Volunteer Work`.
///
/// Underscores and hyphens become spaces, whitespace runs collapse, and
/// each word is capitalized with the rest lowercased. A key made only of
/// separators yields an empty title.
#[must_use]
pub fn display_title(key: &str) -> String {
    key.split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use cvtex_resume::Block;
    use pretty_assertions::assert_eq;

    fn labels() -> &'static SectionLabels {
        Language::English.labels()
    }

    #[test]
    fn test_empty_sections_render_nothing() {
        assert_eq!(render_summary(None, labels()), "");
        assert_eq!(render_summary(Some("  "), labels()), "");
        assert_eq!(render_experience(&[], labels()), "");
        assert_eq!(render_experience(&[WorkExperience::default()], labels()), "");
        assert_eq!(render_education(&[], labels()), "");
        assert_eq!(render_certifications(&[Certification::default()], labels()), "");
        assert_eq!(render_skills(&OrderedMap::new(), labels()), "");
        assert_eq!(render_mixed_section("Projects", &MixedContent::default()), "");
    }

    #[test]
    fn test_summary() {
        assert_eq!(
            render_summary(Some("Engineer with 10% more grit."), labels()),
            "\\resumesection{Summary}\n\nEngineer with 10\\% more grit.\n\n\\vspace{12pt}\n\n"
        );
    }

    #[test]
    fn test_experience_entry() {
        let entry = WorkExperience {
            institution: "Acme & Co".to_owned(),
            location: Some("Berlin".to_owned()),
            roles: vec!["Engineer".to_owned(), "Team Lead".to_owned()],
            date_start: Some("2020".to_owned()),
            date_end: Some("Present".to_owned()),
            achievements: vec!["Shipped Rust services".to_owned()],
            keywords_to_bold: vec!["rust".to_owned()],
        };

        assert_eq!(
            render_experience(&[entry], labels()),
            "\\resumesection{Work Experience}\n\n\
             \\textbf{Acme \\& Co} \\hfill Berlin\n\n\
             \\textbf{Engineer, Team Lead} \\hfill 2020 -- Present\n\
             \\begin{itemize}[noitemsep, topsep=0pt, partopsep=0pt, parsep=0pt]\n\
             \x20   \\item Shipped \\textbf{Rust} services\n\
             \\end{itemize}\n\n\
             \\vspace{12pt}\n\n"
        );
    }

    #[test]
    fn test_experience_without_location_or_achievements() {
        let entry = WorkExperience {
            institution: "Acme".to_owned(),
            date_start: Some("2019".to_owned()),
            ..WorkExperience::default()
        };

        assert_eq!(
            render_experience(&[entry], labels()),
            "\\resumesection{Work Experience}\n\n\\textbf{Acme}\n\n\\hfill 2019\n\n\\vspace{12pt}\n\n"
        );
    }

    #[test]
    fn test_entries_separated_by_entry_spacing() {
        let entries = vec![
            WorkExperience {
                institution: "First".to_owned(),
                ..WorkExperience::default()
            },
            WorkExperience {
                institution: "Second".to_owned(),
                ..WorkExperience::default()
            },
        ];

        let rendered = render_experience(&entries, labels());

        assert!(rendered.contains("\\textbf{First}\n\n\\vspace{6pt}\n\n\\textbf{Second}"));
        assert_eq!(rendered.matches(ENTRY_SPACING).count(), 1);
        assert_eq!(rendered.matches(SECTION_SPACING).count(), 1);
    }

    #[test]
    fn test_education_same_years_collapse() {
        let entry = Education {
            institution: "MIT".to_owned(),
            degree: "BSc Physics".to_owned(),
            year_start: Some("2020".to_owned()),
            year_end: Some("2020".to_owned()),
            ..Education::default()
        };

        let rendered = render_education(&[entry], labels());

        assert!(rendered.contains("BSc Physics \\hfill 2020\n"));
        assert!(!rendered.contains("2020 -- 2020"));
    }

    #[test]
    fn test_education_range_and_info() {
        let entry = Education {
            institution: "ETH".to_owned(),
            location: Some("Zürich".to_owned()),
            degree: "MSc".to_owned(),
            year_start: Some("2016".to_owned()),
            year_end: Some("2018".to_owned()),
            additional_info: Some("GPA 5.8/6".to_owned()),
        };

        assert_eq!(
            render_education(&[entry], labels()),
            "\\resumesection{Education}\n\n\
             \\textbf{ETH} \\hfill Zürich\n\n\
             MSc \\hfill 2016 -- 2018\n\
             \nGPA 5.8/6\n\n\
             \\vspace{12pt}\n\n"
        );
    }

    #[test]
    fn test_single_year_bound() {
        assert_eq!(format_range(None, Some("2021"), true).as_deref(), Some("2021"));
        assert_eq!(format_range(Some("2019"), None, false).as_deref(), Some("2019"));
        assert_eq!(format_range(Some(" "), None, false), None);
        assert_eq!(
            format_range(Some("2020"), Some("2020"), false).as_deref(),
            Some("2020 -- 2020")
        );
    }

    #[test]
    fn test_certifications() {
        let certs = vec![
            Certification {
                year: Some("2021".to_owned()),
                name: "AWS Solutions Architect".to_owned(),
                provider: Some("Amazon".to_owned()),
                grade: None,
            },
            Certification {
                year: Some("2022".to_owned()),
                name: "ML".to_owned(),
                provider: Some("Coursera".to_owned()),
                grade: Some("98%".to_owned()),
            },
        ];

        assert_eq!(
            render_certifications(&certs, labels()),
            "\\resumesection{Courses and Certifications}\n\n\
             2021 | AWS Solutions Architect | Amazon\n\n\
             2022 | ML | Coursera | 98\\%\n\n\
             \\vspace{12pt}\n\n"
        );
    }

    #[test]
    fn test_skills() {
        let skills: OrderedMap<Vec<String>> = [
            ("Languages", vec!["Rust".to_owned(), "C#".to_owned()]),
            ("Empty", vec![]),
            ("Data_Tools", vec!["dbt".to_owned()]),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            render_skills(&skills, labels()),
            "\\resumesection{Skills}\n\n\
             \\textbf{Languages:} Rust, C\\#\n\n\
             \\textbf{Data\\_Tools:} dbt\n\n\
             \\vspace{12pt}\n\n"
        );
    }

    #[test]
    fn test_display_title() {
        assert_eq!(display_title("volunteer_work"), "Volunteer Work");
        assert_eq!(display_title("open-source  contributions"), "Open Source Contributions");
        assert_eq!(display_title("awards_and_HONORS"), "Awards And Honors");
        assert_eq!(display_title("__"), "");
    }

    #[test]
    fn test_additional_sections_in_order() {
        let sections: OrderedMap<MixedContent> = [
            ("volunteer_work", MixedContent::new(vec![Block::Paragraph("Food bank".to_owned())])),
            ("empty", MixedContent::default()),
            ("awards", MixedContent::new(vec![Block::List(vec!["Best paper".to_owned()])])),
        ]
        .into_iter()
        .collect();

        let rendered = render_additional_sections(&sections);

        let volunteer = rendered.find("\\resumesection{Volunteer Work}").unwrap();
        let awards = rendered.find("\\resumesection{Awards}").unwrap();
        assert!(volunteer < awards);
        assert!(!rendered.contains("Empty"));
    }

    #[test]
    fn test_additional_section_title_never_empty() {
        let body = || MixedContent::new(vec![Block::Paragraph("Body".to_owned())]);
        let sections: OrderedMap<MixedContent> = [("__", body()), ("  ", body())].into_iter().collect();

        let rendered = render_additional_sections(&sections);

        assert_eq!(
            rendered,
            "\\resumesection{\\_\\_}\n\nBody\n\n\\vspace{12pt}\n\n"
        );
        assert!(!rendered.contains("\\resumesection{}"));
    }

    #[test]
    fn test_header_with_contact_line() {
        assert_eq!(
            render_header("Ada Lovelace", &ContactInfo::Line("ada@example.com | +44 20".to_owned()), None),
            "\\begin{center}\n    \\textbf{Ada Lovelace}\\\\\n    \\hrulefill\n\\end{center}\n\n\
             \\begin{center}\n    ada@example.com | +44 20\n\\end{center}\n\n\
             \\vspace{0.5pt}\n\n"
        );
    }

    #[test]
    fn test_header_override_items() {
        let items = vec![
            ContactItem::text("ada@example.com").with_prefix("Email: "),
            ContactItem::link("github.com/ada_l", "https://github.com/ada_l?tab=repos&x=%20"),
        ];

        let header = render_header(
            "Ada",
            &ContactInfo::Line("ignored".to_owned()),
            Some(items.as_slice()),
        );

        assert!(header.contains(
            r"Email: ada@example.com $\bullet$ \href{https://github.com/ada_l?tab=repos&x=%20}{github.com/ada\_l}"
        ));
        assert!(!header.contains("ignored"));
    }

    #[test]
    fn test_header_blank_name_and_contact() {
        let header = render_header(" ", &ContactInfo::default(), Some(&[][..]));
        assert!(header.contains(r"\textbf{Candidate Name}"));
        assert_eq!(header.matches(r"\begin{center}").count(), 1);
    }
}
