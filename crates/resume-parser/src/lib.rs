//! Deterministic resume text extraction.
//!
//! Takes the plain text of a resume (already extracted from PDF/DOCX by the
//! upstream document service) and turns it into a structured [`ParsedResume`]
//! using line-oriented heuristics: keyword vocabularies, regex scans, and
//! per-section finite-state line walks. No statistical models, no network,
//! no shared state — `parse_resume` is a pure function of its input.
//!
//! The record it produces is the interface consumed by the quality-scoring
//! and job-matching services; the HTTP surface wrapping all of this lives
//! elsewhere.

pub mod errors;
pub mod extract;
pub mod models;
pub mod parser;

mod text;

pub use errors::ParseError;
pub use models::{
    EducationEntry, ExperienceEntry, ParsedResume, ProjectEntry, UNKNOWN_CANDIDATE,
};
pub use parser::{parse_resume, RAW_TEXT_MAX_CHARS};
