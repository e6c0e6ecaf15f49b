//! Parse orchestrator: runs every extractor over one document's text and
//! assembles the final record.

use tracing::debug;

use crate::errors::ParseError;
use crate::extract::{
    extract_education, extract_email, extract_experience, extract_github, extract_languages,
    extract_location, extract_name, extract_phone, extract_projects, extract_skills,
};
use crate::models::ParsedResume;

/// Stored raw text is capped at this many characters for downstream
/// consumers (the scoring and matching services read a prefix only).
pub const RAW_TEXT_MAX_CHARS: usize = 5000;

/// Minimum trimmed length below which the input is treated as unreadable.
const MIN_TEXT_LEN: usize = 10;

/// Parses one resume's extracted text into a structured record.
///
/// Every extractor runs independently over the same text, so a layout that
/// defeats one of them still yields whatever the others found. The only
/// failure is input too short to plausibly be a resume.
pub fn parse_resume(text: &str) -> Result<ParsedResume, ParseError> {
    if text.trim().chars().count() < MIN_TEXT_LEN {
        return Err(ParseError::EmptyText);
    }

    let resume = ParsedResume {
        name: extract_name(text),
        email: extract_email(text),
        phone: extract_phone(text),
        location: extract_location(text),
        github: extract_github(text),
        skills: extract_skills(text),
        languages: extract_languages(text),
        education: extract_education(text),
        experience: extract_experience(text),
        projects: extract_projects(text),
        raw_text: text.chars().take(RAW_TEXT_MAX_CHARS).collect(),
    };

    debug!(
        "parsed resume: name={}, {} skills, {} education, {} experience, {} projects",
        resume.name,
        resume.skills.len(),
        resume.education.len(),
        resume.experience.len(),
        resume.projects.len()
    );

    Ok(resume)
}
