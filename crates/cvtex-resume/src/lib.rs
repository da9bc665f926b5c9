//! Structured resume data for cvtex.
//!
//! This crate owns the JSON load boundary: the [`ResumeDocument`] model an
//! upstream extraction step produces, the job analysis lookup used to name
//! output files, candidate identity resolution, and the word-count check
//! used to keep a tailored resume near a target length.
//!
//! # Example
//!
//! ```
//! use cvtex_resume::ResumeDocument;
//!
//! let doc = ResumeDocument::from_json(r#"{"candidate_name": "Ada Lovelace"}"#).unwrap();
//! assert_eq!(doc.candidate_name, "Ada Lovelace");
//! assert!(doc.work_experience.is_empty());
//! ```

mod contact;
mod content;
mod identity;
mod load;
mod model;
mod words;

pub use contact::{ContactInfo, ContactItem};
pub use content::{Block, MixedContent, OrderedMap};
pub use identity::{
    CandidateName, DEFAULT_JOB_TITLE, MAX_FILENAME_LENGTH, base_filename, sanitize_for_filename,
};
pub use load::{LoadError, load_job_title};
pub use model::{Certification, Education, ResumeDocument, WorkExperience};
pub use words::{DEFAULT_TARGET_WORDS, WordCheck, WordVerdict, check_word_count, count_words};
