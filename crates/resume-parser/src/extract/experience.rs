//! Experience builder: a section-scoped scan where date lines open drafts.
//!
//! A date/duration line starts a new entry (flushing any open one); the
//! following non-date lines fill `title`, then `company`, then accumulate
//! into `description`. Lines that appear before the first date line of an
//! entry are dropped — the fill order is positional, not semantic, which is
//! deliberate and pinned by a regression test below.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::models::ExperienceEntry;
use crate::text::is_all_caps;

/// Keywords that open the experience section when found on a short line.
const SECTION_KEYWORDS: &[&str] = &[
    "experience",
    "work history",
    "employment",
    "internship",
    "project",
];

/// Header lines longer than this are treated as content, not headers.
const MAX_HEADER_LEN: usize = 30;

/// Year range, "year - Present", or "Month Year".
static DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d{4}\s*-\s*\d{4}|\d{4}\s*-\s*Present|[A-Z][a-z]+\s+\d{4}").unwrap()
});

/// Extracts work-experience entries in document order.
pub fn extract_experience(text: &str) -> Vec<ExperienceEntry> {
    let mut experience = Vec::new();
    let mut in_section = false;
    let mut current: Option<ExperienceEntry> = None;

    for line in text.lines() {
        let line = line.trim();
        let line_lower = line.to_lowercase();

        // Section headers are short lines naming the section. The header
        // itself is consumed, never treated as content.
        if SECTION_KEYWORDS.iter().any(|kw| line_lower.contains(kw))
            && line.chars().count() < MAX_HEADER_LEN
        {
            in_section = true;
            continue;
        }

        // Another all-caps header ends the section and flushes the draft.
        if in_section && is_all_caps(line) && line.chars().count() > 3 {
            if line_lower != "experience" && line_lower != "projects" {
                debug!("experience section ends at: {line}");
                in_section = false;
                if let Some(entry) = current.take() {
                    experience.push(entry);
                }
                continue;
            }
        }

        if in_section && !line.is_empty() {
            if DATE_RE.is_match(line) {
                if let Some(entry) = current.take() {
                    experience.push(entry);
                }
                current = Some(ExperienceEntry::from_duration(line));
            } else if let Some(entry) = current.as_mut() {
                if entry.title.is_empty() {
                    entry.title = line.to_string();
                } else if entry.company.is_empty() {
                    entry.company = line.to_string();
                } else if entry.description.is_empty() {
                    entry.description = line.to_string();
                } else {
                    entry.description.push(' ');
                    entry.description.push_str(line);
                }
            }
        }
    }

    if let Some(entry) = current.take() {
        experience.push(entry);
    }

    experience
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_first_entry_fills_in_order() {
        let text = "EXPERIENCE\n\
                    June 2022 - Present\n\
                    Software Intern\n\
                    Acme Corp\n\
                    Built internal tools.\n\
                    Automated reporting.";
        let experience = extract_experience(text);
        assert_eq!(experience.len(), 1);
        let e = &experience[0];
        assert_eq!(e.duration, "June 2022 - Present");
        assert_eq!(e.title, "Software Intern");
        assert_eq!(e.company, "Acme Corp");
        assert_eq!(e.description, "Built internal tools. Automated reporting.");
    }

    /// Regression pin: when the date line comes *after* the title and company
    /// lines, those earlier lines are dropped (no draft exists yet) and the
    /// first line after the date lands in `title`. Surprising but intended —
    /// the fill order is positional.
    #[test]
    fn test_date_line_third_drops_preceding_lines() {
        let text = "EXPERIENCE\n\
                    Software Intern\n\
                    Acme Corp\n\
                    June 2022 - Present\n\
                    Built internal tools.";
        let experience = extract_experience(text);
        assert_eq!(experience.len(), 1);
        let e = &experience[0];
        assert_eq!(e.duration, "June 2022 - Present");
        assert_eq!(e.title, "Built internal tools.");
        assert_eq!(e.company, "");
        assert_eq!(e.description, "");
    }

    #[test]
    fn test_new_date_line_flushes_previous_entry() {
        let text = "WORK HISTORY\n\
                    2019 - 2021\n\
                    Backend Developer\n\
                    Initech\n\
                    2021 - 2023\n\
                    Senior Developer\n\
                    Globex";
        let experience = extract_experience(text);
        assert_eq!(experience.len(), 2);
        assert_eq!(experience[0].title, "Backend Developer");
        assert_eq!(experience[0].company, "Initech");
        assert_eq!(experience[1].duration, "2021 - 2023");
        assert_eq!(experience[1].title, "Senior Developer");
    }

    #[test]
    fn test_section_exit_flushes_draft() {
        let text = "EXPERIENCE\n\
                    2020 - 2022\n\
                    Data Analyst\n\
                    Hooli\n\
                    EDUCATION\n\
                    2016 - 2020\n\
                    STATE UNIVERSITY";
        let experience = extract_experience(text);
        // EDUCATION header flushes and closes; the degree years after it
        // must not open a new entry
        assert_eq!(experience.len(), 1);
        assert_eq!(experience[0].title, "Data Analyst");
    }

    #[test]
    fn test_flush_at_end_of_text() {
        let text = "EXPERIENCE\n2021 - 2022\nQA Engineer";
        let experience = extract_experience(text);
        assert_eq!(experience.len(), 1);
        assert_eq!(experience[0].title, "QA Engineer");
    }

    #[test]
    fn test_no_section_yields_empty() {
        let text = "JOHN SMITH\njohn@xyz.com\n2020 - 2022 was a good year";
        assert!(extract_experience(text).is_empty());
    }

    #[test]
    fn test_long_line_with_keyword_is_not_a_header() {
        let text = "I gained experience across many different backend teams\n2020 - 2021";
        // 30+ chars: not a header, section never opens
        assert!(extract_experience(text).is_empty());
    }

    #[test]
    fn test_internship_keyword_opens_section() {
        let text = "INTERNSHIP\nMay 2021 - July 2021\nResearch Intern\nUni Lab";
        let experience = extract_experience(text);
        assert_eq!(experience.len(), 1);
        assert_eq!(experience[0].title, "Research Intern");
    }

    #[test]
    fn test_blank_lines_inside_section_ignored() {
        let text = "EXPERIENCE\n\n2020 - 2021\n\nDevOps Engineer\n\nCyberdyne";
        let experience = extract_experience(text);
        assert_eq!(experience.len(), 1);
        assert_eq!(experience[0].company, "Cyberdyne");
    }
}
