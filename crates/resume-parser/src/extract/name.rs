//! Candidate-name heuristic over the first non-blank line.

use crate::models::UNKNOWN_CANDIDATE;
use crate::text::title_case;

/// Tokens that disqualify a first line from being a name. Resumes that open
/// with a skill list or a section header land here.
const NAME_REJECT_KEYWORDS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "react",
    "node",
    "sql",
    "html",
    "css",
    "git",
    "skills",
    "education",
    "contact",
];

/// Longest plausible name line, in characters.
const MAX_NAME_LEN: usize = 30;

/// Minimum fraction of the line that must be alphabetic.
const MIN_ALPHA_RATIO: f64 = 0.7;

/// Extracts the candidate name from the first non-blank line, title-cased.
/// Returns [`UNKNOWN_CANDIDATE`] when the line is too long, mentions a
/// skill/section keyword, or is mostly non-alphabetic.
pub fn extract_name(text: &str) -> String {
    let Some(first_line) = text.lines().map(str::trim).find(|l| !l.is_empty()) else {
        return UNKNOWN_CANDIDATE.to_string();
    };

    let line_lower = first_line.to_lowercase();
    let total_chars = first_line.chars().count();

    if total_chars <= MAX_NAME_LEN
        && !NAME_REJECT_KEYWORDS.iter().any(|kw| line_lower.contains(kw))
    {
        let letters = first_line.chars().filter(|c| c.is_alphabetic()).count();
        if letters as f64 >= total_chars as f64 * MIN_ALPHA_RATIO {
            return title_case(first_line);
        }
    }

    UNKNOWN_CANDIDATE.to_string()
}
