//! Complete document assembly.

use std::fmt::Write;

use cvtex_resume::{ContactItem, ResumeDocument};

use crate::language::Language;
use crate::sections::{
    render_additional_sections, render_certifications, render_education, render_experience,
    render_header, render_mixed_section, render_skills, render_summary,
};

/// Options that change what is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit the summary section when the resume has one.
    pub include_summary: bool,
    /// Structured contact items replacing the resume's own contact info.
    pub header: Option<Vec<ContactItem>>,
    /// Section title language; `None` uses the resume's language tag.
    pub language: Option<Language>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_summary: true,
            header: None,
            language: None,
        }
    }
}

fn preamble(language: Language) -> String {
    let mut out = String::new();
    out.push_str(
        r"\documentclass[11pt]{article}
\usepackage{graphicx}
\setlength{\parindent}{0pt}
\usepackage{hyperref}
\usepackage{enumitem}
\usepackage[utf8]{inputenc}
\usepackage[T1]{fontenc}
",
    );
    let _ = writeln!(out, r"\usepackage[{}]{{babel}}", language.babel_name());
    out.push_str(
        r"\usepackage[left=1.06cm,top=1.7cm,right=1.06cm,bottom=0.49cm]{geometry}

% Hyperref setup
\hypersetup{
    colorlinks=true,
    linkcolor=black,
    urlcolor=blue,
    pdfborder={0 0 0}
}

% Section headings
\newcommand{\resumesection}[1]{%
    \begin{center}
        \textbf{#1}
    \end{center}
}

",
    );
    out
}

/// Render a complete LaTeX document for `doc`.
///
/// Sections always appear in the same order: summary, work experience,
/// education, certifications, skills, languages, projects, then freeform
/// sections in document order. Empty sections are left out.
#[must_use]
pub fn render_document(doc: &ResumeDocument, options: &RenderOptions) -> String {
    let language = options
        .language
        .unwrap_or_else(|| Language::resolve(doc.language.as_deref()));
    let labels = language.labels();

    let mut out = preamble(language);
    out.push_str("\\begin{document}\n\n");
    out.push_str(&render_header(
        &doc.candidate_name,
        &doc.contact_info,
        options.header.as_deref(),
    ));
    if options.include_summary {
        out.push_str(&render_summary(doc.summary.as_deref(), labels));
    }
    out.push_str(&render_experience(&doc.work_experience, labels));
    out.push_str(&render_education(&doc.education, labels));
    out.push_str(&render_certifications(&doc.certifications, labels));
    out.push_str(&render_skills(&doc.skills, labels));
    out.push_str(&render_mixed_section(labels.languages, &doc.languages));
    out.push_str(&render_mixed_section(labels.projects, &doc.projects));
    out.push_str(&render_additional_sections(&doc.additional_sections));
    out.push_str("\\end{document}\n");

    tracing::debug!(
        language = ?language,
        bytes = out.len(),
        "Rendered LaTeX document"
    );
    out
}
