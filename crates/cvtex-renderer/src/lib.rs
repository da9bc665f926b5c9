//! LaTeX rendering for structured resumes.
//!
//! Turns a [`ResumeDocument`](cvtex_resume::ResumeDocument) into a complete,
//! compilable LaTeX document in a Harvard-style layout. Rendering is a pure
//! function of the document and [`RenderOptions`]; it reads no configuration
//! and touches no files.
//!
//! # Example
//!
//! ```
//! use cvtex_renderer::{RenderOptions, render_document};
//! use cvtex_resume::ResumeDocument;
//!
//! let doc = ResumeDocument::from_json(r#"{"candidate_name": "Ada Lovelace"}"#).unwrap();
//! let markup = render_document(&doc, &RenderOptions::default());
//! assert!(markup.contains(r"\textbf{Ada Lovelace}"));
//! ```

mod document;
mod emphasis;
mod escape;
mod language;
mod mixed;
mod sections;

pub use document::{RenderOptions, render_document};
pub use emphasis::emphasize_keywords;
pub use escape::escape_latex;
pub use language::{Language, SectionLabels};
pub use mixed::render_mixed_content;
pub use sections::{
    ENTRY_SPACING, SECTION_SPACING, display_title, render_additional_sections,
    render_certifications, render_contact_items, render_education, render_experience,
    render_header, render_mixed_section, render_skills, render_summary,
};
